//! Rasterization results and their textual log.
//!
//! A [`RasterTrace`] is what one algorithm run hands to its presentation
//! collaborator: the cells in visitation order, one description per cell and
//! the time the run took.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::Error;
use crate::geometry::GridPoint;
use crate::raster::Algorithm;

/// Unit used when reporting elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeUnit {
    /// Nanoseconds.
    #[default]
    Nanos,
    /// Microseconds.
    Micros,
    /// Milliseconds.
    Millis,
}

impl TimeUnit {
    /// Unit suffix as printed in the log.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Nanos => "ns",
            Self::Micros => "us",
            Self::Millis => "ms",
        }
    }

    /// Express `elapsed` as a whole number of this unit.
    #[must_use]
    pub fn count(self, elapsed: Duration) -> u128 {
        match self {
            Self::Nanos => elapsed.as_nanos(),
            Self::Micros => elapsed.as_micros(),
            Self::Millis => elapsed.as_millis(),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ns" | "nanos" | "nanoseconds" => Ok(Self::Nanos),
            "us" | "µs" | "micros" | "microseconds" => Ok(Self::Micros),
            "ms" | "millis" | "milliseconds" => Ok(Self::Millis),
            _ => Err(Error::UnknownTimeUnit(s.to_string())),
        }
    }
}

/// Human-readable description of one emitted cell.
#[must_use]
pub fn describe(point: GridPoint) -> String {
    format!("Drawing point {point}")
}

/// Output of one rasterization run.
///
/// Points keep the algorithm's visitation order. Duplicates are kept: the
/// circle rasterizer emits the same cell more than once on its axis and
/// diagonal samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterTrace {
    algorithm: Algorithm,
    points: Vec<GridPoint>,
    elapsed: Duration,
}

impl RasterTrace {
    /// Create a trace from an algorithm's output.
    #[must_use]
    pub fn new(algorithm: Algorithm, points: Vec<GridPoint>, elapsed: Duration) -> Self {
        Self {
            algorithm,
            points,
            elapsed,
        }
    }

    /// Algorithm that produced this trace.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Cells in visitation order.
    #[must_use]
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// Consume the trace, keeping only the cells.
    #[must_use]
    pub fn into_points(self) -> Vec<GridPoint> {
        self.points
    }

    /// Wall-clock time spent generating the cells.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of emitted cells, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no cell was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First emitted cell.
    #[must_use]
    pub fn first(&self) -> Option<GridPoint> {
        self.points.first().copied()
    }

    /// Last emitted cell.
    #[must_use]
    pub fn last(&self) -> Option<GridPoint> {
        self.points.last().copied()
    }

    /// Iterate over the emitted cells.
    pub fn iter(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.points.iter().copied()
    }

    /// One description per emitted cell, in the same order.
    #[must_use]
    pub fn descriptions(&self) -> Vec<String> {
        self.points.iter().copied().map(describe).collect()
    }

    /// Smallest and largest corner of the box covering every cell.
    #[must_use]
    pub fn bounds(&self) -> Option<(GridPoint, GridPoint)> {
        let first = self.first()?;
        Some(self.iter().fold((first, first), |(min, max), p| {
            (
                GridPoint::new(min.x.min(p.x), min.y.min(p.y)),
                GridPoint::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }

    /// Log line reporting the elapsed time.
    #[must_use]
    pub fn timing_line(&self, unit: TimeUnit) -> String {
        format!("Execution time: {} {}", unit.count(self.elapsed), unit)
    }

    /// Full log: header, optional per-cell lines, timing.
    #[must_use]
    pub fn log_lines(&self, unit: TimeUnit, describe_points: bool) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.points.len() + 2);
        lines.push(format!("{}:", self.algorithm.name()));
        if describe_points {
            lines.extend(self.descriptions());
        }
        lines.push(self.timing_line(unit));
        lines
    }
}

impl fmt::Display for RasterTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.log_lines(TimeUnit::default(), true) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a RasterTrace {
    type Item = &'a GridPoint;
    type IntoIter = std::slice::Iter<'a, GridPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
