use crate::error::LoggerError;
use crate::logger::Logger;
use crate::severity::Severity;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Cloneable, lock-protected handle to a [`Logger`].
///
/// Each call holds the lock for the whole filter-format-write sequence, so
/// lines from different threads never interleave.
pub struct SharedLogger<W: Write> {
    inner: Arc<Mutex<Logger<W>>>,
}

impl<W: Write> Clone for SharedLogger<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W: Write> From<Logger<W>> for SharedLogger<W> {
    fn from(logger: Logger<W>) -> Self {
        Self::new(logger)
    }
}

impl<W: Write> SharedLogger<W> {
    pub fn new(logger: Logger<W>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(logger)),
        }
    }

    pub fn level(&self) -> Severity {
        self.inner.lock().level
    }

    pub fn set_level(&self, level: Severity) {
        self.inner.lock().level = level;
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        self.inner.lock().enabled(severity)
    }

    pub fn failed_writes(&self) -> u64 {
        self.inner.lock().failed_writes()
    }

    pub fn log(&self, severity: Severity, message: &str) {
        self.inner.lock().log(severity, message);
    }

    pub fn try_log(&self, severity: Severity, message: &str) -> Result<bool, LoggerError> {
        self.inner.lock().try_log(severity, message)
    }

    pub fn trace(&self, message: &str) {
        self.log(Severity::Trace, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(Severity::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    pub fn fatal(&self, message: &str) {
        self.log(Severity::Fatal, message);
    }

    /// Run `f` against the sink while holding the lock.
    pub fn with_sink<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(self.inner.lock().get_mut())
    }
}
