//! grid-raster - rasterize lines and circles onto the integer grid.
//!
//! Prints the trace log of one algorithm run: a header, one line per emitted
//! cell and the execution time.
//!
//! Run: `grid-raster line --algorithm dda 0 0 5 4`

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use grid_raster::config::Config;
use grid_raster::prelude::*;
use tracing_subscriber::EnvFilter;

/// Rasterize lines and circles onto the integer grid
#[derive(Parser, Debug)]
#[command(name = "grid-raster")]
#[command(version)]
#[command(about = "Rasterize lines and circles onto the integer grid", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Only print the header and execution time
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Unit for the execution time (ns, us, ms)
    #[arg(long, global = true)]
    time_unit: Option<String>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rasterize the segment between two points
    #[command(allow_negative_numbers = true)]
    Line {
        /// Algorithm: step, dda, bresenham or circle (centered on the first point)
        #[arg(short, long)]
        algorithm: Option<String>,
        /// Start x
        x0: i32,
        /// Start y
        y0: i32,
        /// End x
        x1: i32,
        /// End y
        y1: i32,
    },

    /// Rasterize a circle outline with the midpoint algorithm
    #[command(allow_negative_numbers = true)]
    #[command(group(ArgGroup::new("size").required(true).args(["radius", "through"])))]
    Circle {
        /// Center x
        cx: i32,
        /// Center y
        cy: i32,
        /// Radius in cells
        #[arg(short, long)]
        radius: Option<i32>,
        /// A point on the circle; the radius is the truncated distance to it
        #[arg(long, num_args = 2, value_names = ["X", "Y"])]
        through: Option<Vec<i32>>,
    },

    /// Run every line algorithm on the same segment and summarize
    #[command(allow_negative_numbers = true)]
    Compare {
        /// Start x
        x0: i32,
        /// Start y
        y0: i32,
        /// End x
        x1: i32,
        /// End y
        y1: i32,
    },
}

/// Output settings resolved from CLI flags, config file and defaults.
struct Output {
    describe_points: bool,
    time_unit: TimeUnit,
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("grid_raster=debug")
    } else {
        EnvFilter::try_from_env("GRID_RASTER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(Config::default_path().map(Config::load_or_default).unwrap_or_default()),
    }
}

fn print_trace(out: &mut impl Write, trace: &RasterTrace, output: &Output) -> Result<()> {
    for line in trace.log_lines(output.time_unit, output.describe_points) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = load_config(cli.config.as_ref())?;
    let time_unit = match cli.time_unit.as_deref() {
        Some(unit) => unit.parse()?,
        None => config.time_unit()?,
    };
    let output = Output {
        describe_points: config.trace.describe_points && !cli.quiet,
        time_unit,
    };
    tracing::debug!(?config, "configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Line {
            algorithm,
            x0,
            y0,
            x1,
            y1,
        } => {
            let algorithm = match algorithm.as_deref() {
                Some(name) => name.parse()?,
                None => config.algorithm()?,
            };
            let primitive = algorithm.primitive(GridPoint::new(x0, y0), GridPoint::new(x1, y1))?;
            let trace = rasterize(algorithm, &primitive)?;
            print_trace(&mut out, &trace, &output)?;
        }
        Command::Circle {
            cx,
            cy,
            radius,
            through,
        } => {
            let center = GridPoint::new(cx, cy);
            let trace = match (radius, through.as_deref()) {
                (Some(radius), _) => rasterize_bresenham_circle(center, radius)?,
                (None, Some(&[x, y])) => {
                    let circle = CircleRequest::through(center, GridPoint::new(x, y))?;
                    rasterize(Algorithm::BresenhamCircle, &circle.into())?
                }
                _ => anyhow::bail!("circle needs --radius or --through"),
            };
            print_trace(&mut out, &trace, &output)?;
        }
        Command::Compare { x0, y0, x1, y1 } => {
            let line = Primitive::Line(LineRequest::from_coords(x0, y0, x1, y1));
            for algorithm in Algorithm::LINES {
                let trace = rasterize(algorithm, &line)?;
                writeln!(
                    out,
                    "{}: {} points, {}",
                    algorithm.name(),
                    trace.len(),
                    trace.timing_line(output.time_unit)
                )?;
            }
        }
    }

    Ok(())
}
