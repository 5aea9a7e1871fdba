//! Error types for grid-raster operations.

use std::io;
use thiserror::Error;

use crate::geometry::GridPoint;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing or running a rasterization.
#[derive(Error, Debug)]
pub enum Error {
    /// Circle radius was negative.
    #[error("Invalid radius: {radius} (radius must be >= 0)")]
    InvalidRadius {
        /// The rejected radius.
        radius: i64,
    },

    /// Circle does not fit in the integer grid around its center.
    #[error("Circle of radius {radius} around {center} leaves the i32 grid")]
    CircleOutOfRange {
        /// Circle center.
        center: GridPoint,
        /// Circle radius.
        radius: i32,
    },

    /// A line algorithm was given a circle or the circle algorithm a line.
    #[error("{algorithm} cannot rasterize a {primitive}")]
    PrimitiveMismatch {
        /// Name of the selected algorithm.
        algorithm: &'static str,
        /// Kind of primitive that was supplied.
        primitive: &'static str,
    },

    /// Algorithm identifier not recognised.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Time unit identifier not recognised.
    #[error("Unknown time unit: {0} (expected ns, us or ms)")]
    UnknownTimeUnit(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_radius_display() {
        let err = Error::InvalidRadius { radius: -3 };
        assert!(err.to_string().contains("Invalid radius"));
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn test_primitive_mismatch_display() {
        let err = Error::PrimitiveMismatch {
            algorithm: "DDA Algorithm",
            primitive: "circle",
        };
        assert_eq!(err.to_string(), "DDA Algorithm cannot rasterize a circle");
    }

    #[test]
    fn test_circle_out_of_range_display() {
        let err = Error::CircleOutOfRange {
            center: GridPoint::new(i32::MAX, 0),
            radius: 1,
        };
        assert!(err.to_string().contains("2147483647"));
    }
}
