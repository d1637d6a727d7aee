use thiserror::Error;

/// Top-level error type for the logger and its configuration layer.
///
/// The per-severity logging methods never return this; sink failures only
/// surface through [`crate::Logger::try_log`].
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Sink write failed: {0}")]
    Write(#[from] std::io::Error),

    #[error("Invalid severity '{input}'. Valid levels: {valid_levels:?}")]
    InvalidSeverity {
        input: String,
        valid_levels: Vec<String>,
    },

    #[error("Config file error: {0}")]
    ConfigFile(#[source] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Environment error: {0}")]
    Env(String),

    #[error("Diagnostics initialization failed: {0}")]
    DiagnosticsInit(String),
}

impl LoggerError {
    /// Whether the caller can reasonably continue with defaults.
    pub fn is_recoverable(&self) -> bool {
        match self {
            LoggerError::Write(_) => true,
            LoggerError::InvalidSeverity { .. } => true,
            LoggerError::ConfigFile(_) => true,
            LoggerError::ConfigParse(_) => true,
            LoggerError::Env(_) => true,
            LoggerError::DiagnosticsInit(_) => false,
        }
    }
}
