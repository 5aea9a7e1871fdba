//! # grid-raster
//!
//! Discrete rasterization engine: turns a line segment between two grid cells,
//! or a circle given by its center and radius, into the exact ordered list of
//! integer cells that approximate it.
//!
//! ## Features
//!
//! - **Four algorithms**: Naive slope sampling, DDA, Bresenham's line and the
//!   Bresenham midpoint circle
//! - **Ordered traces**: Cells come back in visitation order, duplicates kept,
//!   with a description line per cell and the elapsed time of the run
//! - **Pure core**: Point generators have no shared state and are safe to call
//!   from any number of threads
//!
//! ## Quick Start
//!
//! ```rust
//! use grid_raster::prelude::*;
//!
//! let trace = rasterize_bresenham_line(GridPoint::new(0, 0), GridPoint::new(5, 4));
//! assert_eq!(trace.first(), Some(GridPoint::new(0, 0)));
//! assert_eq!(trace.last(), Some(GridPoint::new(5, 4)));
//!
//! for line in trace.log_lines(TimeUnit::Nanos, true) {
//!     println!("{line}");
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `config`: YAML configuration file support
//! - `cli`: The `grid-raster` command line front end
//! - `full`: All features enabled

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Grid cells and primitive requests.
pub mod geometry;

/// Rasterization results and their textual log.
pub mod trace;

// ============================================================================
// Rasterization Modules
// ============================================================================

/// Rasterization algorithms.
pub mod raster;

// ============================================================================
// Optional Modules
// ============================================================================

/// YAML configuration.
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for grid-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use grid_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{CircleRequest, GridPoint, LineRequest, Primitive};
    pub use crate::raster::{
        rasterize, rasterize_bresenham_circle, rasterize_bresenham_line, rasterize_dda,
        rasterize_step_sampling, Algorithm,
    };
    pub use crate::trace::{RasterTrace, TimeUnit};
}
