//! Runtime configuration from environment variables.
//!
//! | Variable                 | Default          | Meaning                                  |
//! |--------------------------|------------------|------------------------------------------|
//! | `BMI_LOG_MODE`           | `stderr`         | `stderr` or `file`                       |
//! | `BMI_LOG_FILE`           | `bmi-engine.log` | Log path when `BMI_LOG_MODE=file`        |
//! | `BMI_GROWTH_REFERENCE`   | unset            | JSON reference replacing the CDC tables  |
//! | `BMI_SANITIZE_MAX_BYTES` | 16384            | Per-line cap for log sanitization        |
//!
//! stdout is reserved for reports, so logs never go there.

use std::path::PathBuf;

use crate::adapters::sanitize::DEFAULT_SANITIZE_MAX_BYTES;
use crate::BmiError;

const LOG_MODE_ENV: &str = "BMI_LOG_MODE";
const LOG_FILE_ENV: &str = "BMI_LOG_FILE";
const GROWTH_REFERENCE_ENV: &str = "BMI_GROWTH_REFERENCE";
const SANITIZE_MAX_BYTES_ENV: &str = "BMI_SANITIZE_MAX_BYTES";

const DEFAULT_LOG_FILE: &str = "bmi-engine.log";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Stderr,
    File,
}

impl std::str::FromStr for LogMode {
    type Err = BmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stderr" => Ok(Self::Stderr),
            "file" => Ok(Self::File),
            other => Err(BmiError::Config(format!(
                "{LOG_MODE_ENV}: unknown log mode '{other}'. Valid options: stderr, file"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_mode: LogMode,
    pub log_file: PathBuf,
    /// Replacement growth reference; the built-in CDC tables when `None`
    pub growth_reference: Option<PathBuf>,
    pub sanitize_max_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_mode: LogMode::Stderr,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            growth_reference: None,
            sanitize_max_bytes: DEFAULT_SANITIZE_MAX_BYTES,
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    ///
    /// # Errors
    /// Returns `BmiError::Config` for an unknown log mode or an unparsable
    /// byte limit.
    pub fn from_env() -> Result<Self, BmiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// # Errors
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BmiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_mode = match non_empty(LOG_MODE_ENV) {
            Some(v) => v.parse::<LogMode>()?,
            None => defaults.log_mode,
        };

        let log_file = non_empty(LOG_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or(defaults.log_file);

        let growth_reference = non_empty(GROWTH_REFERENCE_ENV).map(PathBuf::from);

        let sanitize_max_bytes = match non_empty(SANITIZE_MAX_BYTES_ENV) {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| {
                    BmiError::Config(format!(
                        "{SANITIZE_MAX_BYTES_ENV}: expected a positive integer, got '{v}'"
                    ))
                })?,
            None => defaults.sanitize_max_bytes,
        };

        Ok(Self {
            log_mode,
            log_file,
            growth_reference,
            sanitize_max_bytes,
        })
    }
}
