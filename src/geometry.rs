//! Grid geometry for rasterization requests.
//!
//! Provides the integer cell type and the two primitive descriptions the
//! rasterizers accept.

use std::fmt;

use crate::error::{Error, Result};

/// One discrete cell of the infinite integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GridPoint {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl GridPoint {
    /// Origin cell (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new grid point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Signed offset from `self` to `other`, widened so it cannot overflow.
    #[must_use]
    pub fn delta(self, other: Self) -> (i64, i64) {
        (
            i64::from(other.x) - i64::from(self.x),
            i64::from(other.y) - i64::from(self.y),
        )
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let (dx, dy) = self.delta(other);
        (dx as f64).hypot(dy as f64)
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A line segment between two grid points.
///
/// `start == end` is a valid, single-cell request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineRequest {
    /// Start point.
    pub start: GridPoint,
    /// End point.
    pub end: GridPoint,
}

impl LineRequest {
    /// Create a new line request.
    #[must_use]
    pub const fn new(start: GridPoint, end: GridPoint) -> Self {
        Self { start, end }
    }

    /// Create a line request from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(GridPoint::new(x0, y0), GridPoint::new(x1, y1))
    }

    /// Whether both endpoints are the same cell.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// A circle given by its center cell and a non-negative radius.
///
/// The fields are private so that every value upholds `radius >= 0` and
/// `center ± radius` stays inside the `i32` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CircleRequest {
    center: GridPoint,
    radius: i32,
}

impl CircleRequest {
    /// Create a circle request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRadius`] for a negative radius and
    /// [`Error::CircleOutOfRange`] when a mirrored cell would not fit in `i32`.
    pub fn new(center: GridPoint, radius: i32) -> Result<Self> {
        if radius < 0 {
            return Err(Error::InvalidRadius {
                radius: i64::from(radius),
            });
        }

        let r = i64::from(radius);
        let fits = |c: i32| {
            let c = i64::from(c);
            c - r >= i64::from(i32::MIN) && c + r <= i64::from(i32::MAX)
        };
        if !fits(center.x) || !fits(center.y) {
            return Err(Error::CircleOutOfRange { center, radius });
        }

        Ok(Self { center, radius })
    }

    /// Create a circle centered on `center` passing near `point`.
    ///
    /// The radius is the Euclidean distance between the two points, truncated
    /// toward zero.
    pub fn through(center: GridPoint, point: GridPoint) -> Result<Self> {
        let distance = center.distance(point).trunc();
        let radius = if distance > f64::from(i32::MAX) {
            i32::MAX
        } else {
            distance as i32
        };
        Self::new(center, radius)
    }

    /// Circle center.
    #[must_use]
    pub const fn center(&self) -> GridPoint {
        self.center
    }

    /// Circle radius (always `>= 0`).
    #[must_use]
    pub const fn radius(&self) -> i32 {
        self.radius
    }
}

/// A primitive to rasterize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Line segment.
    Line(LineRequest),
    /// Circle outline.
    Circle(CircleRequest),
}

impl Primitive {
    /// Short name of the primitive kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Circle(_) => "circle",
        }
    }
}

impl From<LineRequest> for Primitive {
    fn from(line: LineRequest) -> Self {
        Self::Line(line)
    }
}

impl From<CircleRequest> for Primitive {
    fn from(circle: CircleRequest) -> Self {
        Self::Circle(circle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_display() {
        assert_eq!(GridPoint::new(3, -4).to_string(), "(3, -4)");
    }

    #[test]
    fn test_point_ordering_is_structural() {
        assert!(GridPoint::new(0, 5) < GridPoint::new(1, 0));
        assert!(GridPoint::new(1, 0) < GridPoint::new(1, 1));
        assert_eq!(GridPoint::from((2, 7)), GridPoint::new(2, 7));
    }

    #[test]
    fn test_point_delta_does_not_overflow() {
        let a = GridPoint::new(i32::MIN, i32::MAX);
        let b = GridPoint::new(i32::MAX, i32::MIN);
        assert_eq!(a.delta(b), (u32::MAX as i64, -(u32::MAX as i64)));
    }

    #[test]
    fn test_point_distance() {
        let d = GridPoint::ORIGIN.distance(GridPoint::new(3, 4));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_line_degenerate() {
        assert!(LineRequest::from_coords(2, 2, 2, 2).is_degenerate());
        assert!(!LineRequest::from_coords(0, 0, 1, 0).is_degenerate());
    }

    #[test]
    fn test_circle_rejects_negative_radius() {
        let err = CircleRequest::new(GridPoint::ORIGIN, -1).unwrap_err();
        assert!(matches!(err, Error::InvalidRadius { radius: -1 }));
    }

    #[test]
    fn test_circle_accepts_zero_radius() {
        let circle = CircleRequest::new(GridPoint::new(4, 4), 0).unwrap();
        assert_eq!(circle.radius(), 0);
        assert_eq!(circle.center(), GridPoint::new(4, 4));
    }

    #[test]
    fn test_circle_out_of_range() {
        let err = CircleRequest::new(GridPoint::new(i32::MAX - 1, 0), 2).unwrap_err();
        assert!(matches!(err, Error::CircleOutOfRange { .. }));
        assert!(CircleRequest::new(GridPoint::new(i32::MAX - 2, 0), 2).is_ok());
    }

    #[test]
    fn test_circle_through_truncates() {
        // sqrt(8) = 2.83 -> 2
        let circle = CircleRequest::through(GridPoint::ORIGIN, GridPoint::new(2, 2)).unwrap();
        assert_eq!(circle.radius(), 2);

        let circle = CircleRequest::through(GridPoint::new(1, 1), GridPoint::new(4, 5)).unwrap();
        assert_eq!(circle.radius(), 5);
    }

    #[test]
    fn test_primitive_kind() {
        let line: Primitive = LineRequest::default().into();
        assert_eq!(line.kind(), "line");
        let circle: Primitive = CircleRequest::new(GridPoint::ORIGIN, 1).unwrap().into();
        assert_eq!(circle.kind(), "circle");
    }
}
