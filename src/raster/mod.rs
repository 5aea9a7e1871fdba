//! Rasterization algorithms.
//!
//! Converts line segments and circles into the ordered integer cells that
//! approximate them.
//!
//! # Algorithms
//!
//! - **Slope Sampling**: Floors the ordinate of every dominant-axis step
//! - **DDA**: Uniform parametric sampling with rounding
//! - **Bresenham's Line**: Integer error-term line walking, any octant
//! - **Midpoint Circle**: One octant with a decision variable, mirrored eight ways
//!
//! The point generators in the submodules are pure. The `rasterize_*`
//! functions wrap them, time the run and return a [`RasterTrace`].
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of circular arcs."

pub mod bresenham;
pub mod circle;
pub mod dda;
pub mod step;

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::geometry::{CircleRequest, GridPoint, LineRequest, Primitive};
use crate::trace::RasterTrace;

/// Selectable rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Naive slope sampling along the dominant axis.
    StepSampling,
    /// Digital differential analyzer.
    Dda,
    /// Bresenham's line algorithm.
    BresenhamLine,
    /// Bresenham (midpoint) circle algorithm.
    BresenhamCircle,
}

impl Algorithm {
    /// Every algorithm, in selector order.
    pub const ALL: [Self; 4] = [
        Self::StepSampling,
        Self::Dda,
        Self::BresenhamLine,
        Self::BresenhamCircle,
    ];

    /// The three line algorithms.
    pub const LINES: [Self; 3] = [Self::StepSampling, Self::Dda, Self::BresenhamLine];

    /// Stable identifier used on the command line and in config files.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::StepSampling => "step",
            Self::Dda => "dda",
            Self::BresenhamLine => "bresenham",
            Self::BresenhamCircle => "circle",
        }
    }

    /// Human-readable name, used as the trace log header.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::StepSampling => "Step-by-Step Algorithm",
            Self::Dda => "DDA Algorithm",
            Self::BresenhamLine => "Bresenham Algorithm",
            Self::BresenhamCircle => "Bresenham Circle Algorithm",
        }
    }

    /// Whether this algorithm rasterizes line segments.
    #[must_use]
    pub const fn is_line(self) -> bool {
        !matches!(self, Self::BresenhamCircle)
    }

    /// Build the primitive this algorithm expects from two user-supplied points.
    ///
    /// Line algorithms use `a` and `b` as endpoints. The circle algorithm uses
    /// `a` as the center and `b` as a point on the circle.
    pub fn primitive(self, a: GridPoint, b: GridPoint) -> Result<Primitive> {
        if self.is_line() {
            Ok(Primitive::Line(LineRequest::new(a, b)))
        } else {
            CircleRequest::through(a, b).map(Primitive::Circle)
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "step" | "step-sampling" | "step-by-step" | "naive" => Ok(Self::StepSampling),
            "dda" => Ok(Self::Dda),
            "bresenham" | "bresenham-line" | "line" => Ok(Self::BresenhamLine),
            "circle" | "bresenham-circle" | "midpoint" => Ok(Self::BresenhamCircle),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Time a point generator and package its output.
fn timed(algorithm: Algorithm, generate: impl FnOnce() -> Vec<GridPoint>) -> RasterTrace {
    let started = Instant::now();
    let points = generate();
    let elapsed = started.elapsed();

    debug!(
        algorithm = algorithm.id(),
        points = points.len(),
        elapsed_ns = elapsed.as_nanos() as u64,
        "rasterized"
    );

    RasterTrace::new(algorithm, points, elapsed)
}

/// Rasterize a line by naive slope sampling.
#[must_use]
pub fn rasterize_step_sampling(start: GridPoint, end: GridPoint) -> RasterTrace {
    trace!(%start, %end, "step sampling");
    timed(Algorithm::StepSampling, || step::sample(LineRequest::new(start, end)))
}

/// Rasterize a line with the DDA.
#[must_use]
pub fn rasterize_dda(start: GridPoint, end: GridPoint) -> RasterTrace {
    trace!(%start, %end, "dda");
    timed(Algorithm::Dda, || dda::sample(LineRequest::new(start, end)))
}

/// Rasterize a line with Bresenham's algorithm.
#[must_use]
pub fn rasterize_bresenham_line(start: GridPoint, end: GridPoint) -> RasterTrace {
    trace!(%start, %end, "bresenham line");
    timed(Algorithm::BresenhamLine, || bresenham::line(LineRequest::new(start, end)))
}

/// Rasterize a circle outline with the midpoint algorithm.
///
/// # Errors
///
/// Returns [`Error::InvalidRadius`] when `radius` is negative; no trace is
/// produced in that case.
pub fn rasterize_bresenham_circle(center: GridPoint, radius: i32) -> Result<RasterTrace> {
    trace!(%center, radius, "bresenham circle");
    let request = CircleRequest::new(center, radius)?;
    Ok(timed(Algorithm::BresenhamCircle, || circle::midpoint(request)))
}

/// Run `algorithm` on `primitive`.
///
/// # Errors
///
/// Returns [`Error::PrimitiveMismatch`] when a line algorithm is given a
/// circle or the circle algorithm a line.
pub fn rasterize(algorithm: Algorithm, primitive: &Primitive) -> Result<RasterTrace> {
    match (algorithm, *primitive) {
        (Algorithm::StepSampling, Primitive::Line(line)) => {
            Ok(rasterize_step_sampling(line.start, line.end))
        }
        (Algorithm::Dda, Primitive::Line(line)) => Ok(rasterize_dda(line.start, line.end)),
        (Algorithm::BresenhamLine, Primitive::Line(line)) => {
            Ok(rasterize_bresenham_line(line.start, line.end))
        }
        (Algorithm::BresenhamCircle, Primitive::Circle(request)) => {
            Ok(timed(algorithm, || circle::midpoint(request)))
        }
        _ => Err(Error::PrimitiveMismatch {
            algorithm: algorithm.name(),
            primitive: primitive.kind(),
        }),
    }
}
