//! Bresenham's line algorithm.

use crate::geometry::{GridPoint, LineRequest};

/// Rasterize `line` with Bresenham's integer error-term recurrence.
///
/// One formulation covers all eight octants: both axes step toward `end`,
/// guided by `err = dx - dy`. The first cell is exactly `start`, the last is
/// exactly `end`, and at most `max(dx, dy) + 1` cells are emitted.
///
/// Arithmetic runs in `i64` so endpoints anywhere in the `i32` grid are safe.
#[must_use]
pub fn line(line: LineRequest) -> Vec<GridPoint> {
    let LineRequest { start, end } = line;
    let (x1, y1) = (i64::from(end.x), i64::from(end.y));
    let (mut x, mut y) = (i64::from(start.x), i64::from(start.y));

    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let sx = if x1 >= x { 1 } else { -1 };
    let sy = if y1 >= y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut points = Vec::with_capacity(dx.max(dy) as usize + 1);
    loop {
        // x and y never leave the box spanned by start and end
        points.push(GridPoint::new(x as i32, y as i32));

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    points
}
