use crate::error::LoggerError;
use crate::format::LineFormat;
use crate::logger::Logger;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Optional settings for building a [`Logger`].
///
/// ```toml
/// level = "debug"
/// timestamps = false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: Severity,
    pub timestamps: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Severity::Info,
            timestamps: true,
        }
    }
}

impl LoggerConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, LoggerError> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoggerError> {
        let contents = std::fs::read_to_string(path).map_err(LoggerError::ConfigFile)?;
        Self::from_toml_str(&contents)
    }

    /// Override fields from `LOG_LEVEL` and `LOG_TIMESTAMPS`.
    ///
    /// Nothing is changed unless both variables parse.
    pub fn apply_env(&mut self) -> Result<(), LoggerError> {
        let mut level = self.level;
        let mut timestamps = self.timestamps;
        load_env_var("LOG_LEVEL", &mut level)?;
        load_env_var("LOG_TIMESTAMPS", &mut timestamps)?;
        self.level = level;
        self.timestamps = timestamps;
        Ok(())
    }

    pub fn line_format(&self) -> LineFormat {
        LineFormat {
            timestamps: self.timestamps,
        }
    }

    pub fn build<W: Write>(&self, sink: W) -> Logger<W> {
        Logger::with_format(sink, self.level, self.line_format())
    }
}

/// Parse an environment variable into `target`; a missing variable keeps the current value.
fn load_env_var<T>(name: &str, target: &mut T) -> Result<(), LoggerError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    if let Ok(value) = std::env::var(name) {
        *target = value
            .parse()
            .map_err(|e| LoggerError::Env(format!("Invalid {name}: {e}")))?;
    }
    Ok(())
}
