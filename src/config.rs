//! Configuration for the command line front end.
//!
//! Supports YAML configuration with precedence: CLI > file > defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::raster::Algorithm;
use crate::trace::TimeUnit;

/// Trace log settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Print one line per emitted cell.
    #[serde(default = "default_describe_points")]
    pub describe_points: bool,

    /// Unit for the execution time line (ns, us, ms).
    #[serde(default = "default_time_unit")]
    pub time_unit: String,
}

fn default_describe_points() -> bool {
    true
}
fn default_time_unit() -> String {
    "ns".to_string()
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            describe_points: default_describe_points(),
            time_unit: default_time_unit(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Line algorithm used when none is given on the command line.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Trace log settings.
    #[serde(default)]
    pub trace: TraceConfig,
}

fn default_version() -> u32 {
    1
}
fn default_algorithm() -> String {
    "bresenham".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            algorithm: default_algorithm(),
            trace: TraceConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location: `<config dir>/grid-raster/config.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("grid-raster").join("config.yaml"))
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// The configured default algorithm.
    pub fn algorithm(&self) -> Result<Algorithm> {
        self.algorithm.parse()
    }

    /// The configured time unit.
    pub fn time_unit(&self) -> Result<TimeUnit> {
        self.trace.time_unit.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::new();

        assert_eq!(config.version, 1);
        assert_eq!(config.algorithm().unwrap(), Algorithm::BresenhamLine);
        assert_eq!(config.time_unit().unwrap(), TimeUnit::Nanos);
        assert!(config.trace.describe_points);
    }

    #[test]
    fn test_config_parse_minimal() {
        let config = Config::parse("version: 1").unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r"
version: 1
algorithm: dda
trace:
  describe_points: false
  time_unit: us
";

        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.algorithm().unwrap(), Algorithm::Dda);
        assert_eq!(config.time_unit().unwrap(), TimeUnit::Micros);
        assert!(!config.trace.describe_points);
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = r"
version: 1
trace:
  describe_points: not_a_bool
";

        let err = Config::parse(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains('4'), "Error should include line number");
    }

    #[test]
    fn test_config_unknown_algorithm() {
        let config = Config::parse("algorithm: wu").unwrap();
        assert!(matches!(config.algorithm(), Err(Error::UnknownAlgorithm(_))));
    }

    #[test]
    fn test_config_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "algorithm: step").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.algorithm().unwrap(), Algorithm::StepSampling);
    }

    #[test]
    fn test_config_load_missing() {
        let err = Config::load("/nonexistent/grid-raster.yaml").unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));
    }

    #[test]
    fn test_config_load_or_default() {
        let config = Config::load_or_default("/nonexistent/path");
        assert_eq!(config.version, 1);
    }
}
