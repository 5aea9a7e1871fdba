//! Digital differential analyzer.

use crate::geometry::{GridPoint, LineRequest};

/// Rasterize `line` by uniform parametric sampling.
///
/// Takes `steps = max(|dx|, |dy|)` equal steps from `start` to `end` and rounds
/// each sample half away from zero ([`f64::round`]). Every sample is computed
/// as `start + i * increment` rather than by repeated addition, so rounding
/// error does not accumulate along the line.
///
/// Always yields `steps + 1` cells, the first being `start` and the last `end`.
#[must_use]
pub fn sample(line: LineRequest) -> Vec<GridPoint> {
    let LineRequest { start, end } = line;
    let (dx, dy) = start.delta(end);
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        return vec![start];
    }

    let x_inc = dx as f64 / steps as f64;
    let y_inc = dy as f64 / steps as f64;
    let x0 = f64::from(start.x);
    let y0 = f64::from(start.y);

    (0..=steps)
        .map(|i| {
            let t = i as f64;
            GridPoint::new((x0 + t * x_inc).round() as i32, (y0 + t * y_inc).round() as i32)
        })
        .collect()
}

/// Per-step increments `(dx / steps, dy / steps)`, or `None` for a single cell.
#[must_use]
pub fn increments(line: LineRequest) -> Option<(f64, f64)> {
    let (dx, dy) = line.start.delta(line.end);
    let steps = dx.abs().max(dy.abs());
    (steps != 0).then(|| (dx as f64 / steps as f64, dy as f64 / steps as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ys(points: &[GridPoint]) -> Vec<i32> {
        points.iter().map(|p| p.y).collect()
    }

    #[test]
    fn test_gentle_slope() {
        let result = sample(LineRequest::from_coords(0, 0, 5, 4));
        assert_eq!(result.len(), 6);
        assert_eq!(result.iter().map(|p| p.x).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
        // 0, 0.8, 1.6, 2.4, 3.2, 4
        assert_eq!(ys(&result), vec![0, 1, 2, 2, 3, 4]);
    }

    #[test]
    fn test_increments() {
        let (x_inc, y_inc) = increments(LineRequest::from_coords(0, 0, 5, 4)).unwrap();
        assert_relative_eq!(x_inc, 1.0);
        assert_relative_eq!(y_inc, 0.8);

        let (x_inc, y_inc) = increments(LineRequest::from_coords(0, 0, -2, 8)).unwrap();
        assert_relative_eq!(x_inc, -0.25);
        assert_relative_eq!(y_inc, 1.0);

        assert!(increments(LineRequest::from_coords(1, 1, 1, 1)).is_none());
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        assert_eq!(ys(&sample(LineRequest::from_coords(0, 0, 2, 1))), vec![0, 1, 1]);
        assert_eq!(ys(&sample(LineRequest::from_coords(0, 0, 2, -1))), vec![0, -1, -1]);
    }

    #[test]
    fn test_single_point() {
        let result = sample(LineRequest::from_coords(-7, 9, -7, 9));
        assert_eq!(result, vec![GridPoint::new(-7, 9)]);
    }

    #[test]
    fn test_all_directions_hit_endpoints() {
        let ends = [(6, 2), (2, 6), (-2, 6), (-6, 2), (-6, -2), (-2, -6), (2, -6), (6, -2)];
        for (x, y) in ends {
            let line = LineRequest::from_coords(1, -1, 1 + x, -1 + y);
            let result = sample(line);
            assert_eq!(result.len(), 7, "direction ({x}, {y})");
            assert_eq!(result.first().copied(), Some(line.start));
            assert_eq!(result.last().copied(), Some(line.end));
        }
    }

    #[test]
    fn test_steep_line_advances_y_every_step() {
        let result = sample(LineRequest::from_coords(0, 0, 3, -9));
        assert_eq!(result.len(), 10);
        for (i, p) in result.iter().enumerate() {
            assert_eq!(p.y, -(i as i32));
        }
    }
}
