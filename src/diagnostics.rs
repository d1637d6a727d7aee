// Secondary diagnostic channel: the logger's own warnings go to tracing, never to the sink.
use crate::error::LoggerError;
use crate::severity::Severity;
use parking_lot::{Mutex, const_mutex};
use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter string used when `RUST_LOG` is unset or invalid.
pub fn default_filter(default_level: Severity) -> String {
    tracing::Level::from(default_level).as_str().to_lowercase()
}

/// Install a stderr subscriber for the crate's internal diagnostics.
///
/// Safe to call more than once; only the first call installs anything and
/// every call reports that first outcome.
pub fn init_diagnostics(default_level: Severity) -> Result<(), LoggerError> {
    static INIT: Once = Once::new();
    static INIT_RESULT: Mutex<Option<Result<(), String>>> = const_mutex(None);

    INIT.call_once(|| {
        let result = install(default_level);
        *INIT_RESULT.lock() = Some(result);
    });

    match INIT_RESULT.lock().clone() {
        Some(Ok(())) => Ok(()),
        Some(Err(details)) => Err(LoggerError::DiagnosticsInit(details)),
        None => Err(LoggerError::DiagnosticsInit(
            "initialization did not complete".to_string(),
        )),
    }
}

fn install(default_level: Severity) -> Result<(), String> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter(default_level)))
        .map_err(|e| format!("Failed to create EnvFilter: {e}"))?;

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .compact(),
    );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| format!("Failed to set global tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(Severity::Trace), "trace");
        assert_eq!(default_filter(Severity::Warn), "warn");
        assert_eq!(default_filter(Severity::Fatal), "error");
    }
}
