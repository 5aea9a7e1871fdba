//! Naive slope sampling.
//!
//! Walks the dominant axis one cell at a time and floors the ordinate on the
//! other axis.

use std::mem;

use crate::geometry::{GridPoint, LineRequest};

/// Rasterize `line` by sampling the slope along its dominant axis.
///
/// The endpoints are first normalized so that `x0 <= x1` and `y0 <= y1`,
/// swapping each coordinate pair on its own. For a line that rises on one
/// axis and falls on the other this pairs the x of one endpoint with the y of
/// the other, so `(0, 5) -> (5, 0)` is sampled as `(0, 0) -> (5, 5)`.
///
/// The floor of `y0 + (dy / dx) * (x - x0)` is computed with integer
/// division, which gives the exact floor of the real-valued ordinate.
#[must_use]
pub fn sample(line: LineRequest) -> Vec<GridPoint> {
    let (mut x0, mut x1) = (line.start.x, line.end.x);
    let (mut y0, mut y1) = (line.start.y, line.end.y);
    if x0 > x1 {
        mem::swap(&mut x0, &mut x1);
    }
    if y0 > y1 {
        mem::swap(&mut y0, &mut y1);
    }

    let dx = i64::from(x1) - i64::from(x0);
    let dy = i64::from(y1) - i64::from(y0);

    if dx > dy {
        (x0..=x1)
            .map(|x| GridPoint::new(x, offset(y0, dy, i64::from(x) - i64::from(x0), dx)))
            .collect()
    } else if dy == 0 {
        // dx == dy == 0: nothing to divide by, the line is a single cell
        vec![GridPoint::new(x0, y0)]
    } else {
        (y0..=y1)
            .map(|y| GridPoint::new(offset(x0, dx, i64::from(y) - i64::from(y0), dy), y))
            .collect()
    }
}

/// `floor(base + rise * run / extent)` for non-negative `rise`, `run` and a
/// positive `extent`.
fn offset(base: i32, rise: i64, run: i64, extent: i64) -> i32 {
    let step = i128::from(rise) * i128::from(run) / i128::from(extent);
    // step <= rise, so base + step stays between the two normalized endpoints
    (i128::from(base) + step) as i32
}
