//! Bresenham (midpoint) circle algorithm.
//!
//! Walks the octant from the top of the circle toward the 45° diagonal with an
//! integer decision variable and mirrors every sample into all eight octants.

use crate::geometry::{CircleRequest, GridPoint};

/// Rasterize the outline of `circle`.
///
/// Emits eight cells per octant sample, in the order
/// `(+x, +y) (-x, +y) (+x, -y) (-x, -y) (+y, +x) (-y, +x) (+y, -x) (-y, -x)`
/// relative to the center. Cells shared by two octants (on the axes and on the
/// diagonals) are emitted once per octant, so the trace holds duplicates.
///
/// A zero radius emits the center eight times.
#[must_use]
pub fn midpoint(circle: CircleRequest) -> Vec<GridPoint> {
    let center = circle.center();
    let radius = i64::from(circle.radius());

    // about r / sqrt(2) samples per octant
    let mut points = Vec::with_capacity(8 * (radius as usize * 3 / 4 + 2));

    if radius == 0 {
        mirror(&mut points, center, 0, 0);
        return points;
    }

    let mut x = 0;
    let mut y = radius;
    let mut d = 3 - 2 * radius;
    mirror(&mut points, center, x, y);

    while y >= x {
        x += 1;
        if d > 0 {
            y -= 1;
            d += 4 * (x - y) + 10;
        } else {
            d += 4 * x + 6;
        }
        mirror(&mut points, center, x, y);
    }

    points
}

/// Push the eight symmetric cells of octant sample `(x, y)`.
///
/// `0 <= x, y <= radius`, and the request guarantees `center ± radius` fits in
/// `i32`, so the narrowing casts are exact.
fn mirror(points: &mut Vec<GridPoint>, center: GridPoint, x: i64, y: i64) {
    let cx = i64::from(center.x);
    let cy = i64::from(center.y);
    let cell = |px: i64, py: i64| GridPoint::new(px as i32, py as i32);

    points.extend([
        cell(cx + x, cy + y),
        cell(cx - x, cy + y),
        cell(cx + x, cy - y),
        cell(cx - x, cy - y),
        cell(cx + y, cy + x),
        cell(cx - y, cy + x),
        cell(cx + y, cy - x),
        cell(cx - y, cy - x),
    ]);
}
