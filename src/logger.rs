use crate::error::LoggerError;
use crate::format::LineFormat;
use crate::severity::Severity;
use chrono::{DateTime, Utc};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Leveled logger over a caller-supplied sink.
///
/// The sink is anything implementing [`Write`]. Pass `&mut file` or
/// `&mut buffer` to keep ownership on the caller's side; the logger never
/// opens, reads, seeks or closes it.
///
/// There is no internal synchronisation. Wrap it in a
/// [`SharedLogger`](crate::SharedLogger) to log from several threads.
#[derive(Debug)]
pub struct Logger<W: Write> {
    /// Minimum severity that is written. Changes apply to the next call.
    pub level: Severity,
    sink: W,
    format: LineFormat,
    clock: fn() -> DateTime<Utc>,
    failed_writes: u64,
    sink_healthy: bool,
}

impl<W: Write> Logger<W> {
    pub fn new(sink: W, level: Severity) -> Self {
        Self::with_format(sink, level, LineFormat::default())
    }

    pub fn with_format(sink: W, level: Severity, format: LineFormat) -> Self {
        Self {
            level,
            sink,
            format,
            clock: Utc::now,
            failed_writes: 0,
            sink_healthy: true,
        }
    }

    /// Replace the timestamp source.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn set_level(&mut self, level: Severity) {
        self.level = level;
    }

    pub fn format(&self) -> LineFormat {
        self.format
    }

    #[inline]
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.level
    }

    /// Number of lines the per-severity methods failed to write.
    ///
    /// A failed `flush` after a successful write is not counted.
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes
    }

    pub fn trace(&mut self, message: &str) {
        self.log(Severity::Trace, message);
    }

    pub fn debug(&mut self, message: &str) {
        self.log(Severity::Debug, message);
    }

    pub fn info(&mut self, message: &str) {
        self.log(Severity::Info, message);
    }

    pub fn warn(&mut self, message: &str) {
        self.log(Severity::Warn, message);
    }

    pub fn error(&mut self, message: &str) {
        self.log(Severity::Error, message);
    }

    pub fn fatal(&mut self, message: &str) {
        self.log(Severity::Fatal, message);
    }

    /// Best-effort write. Sink errors are counted and reported once on the
    /// diagnostic channel, never returned.
    pub fn log(&mut self, severity: Severity, message: &str) {
        if !self.enabled(severity) {
            return;
        }
        match self.emit(severity, message) {
            Ok(()) => self.mark_healthy(),
            Err(SinkFailure::Flush(e)) => {
                // The line itself reached the sink.
                self.mark_healthy();
                debug!(error = %e, "log sink flush failed");
            }
            Err(SinkFailure::Write(e)) => {
                self.failed_writes = self.failed_writes.saturating_add(1);
                if self.sink_healthy {
                    self.sink_healthy = false;
                    warn!(
                        error = %e,
                        severity = %severity,
                        "log sink write failed; dropping lines"
                    );
                }
            }
        }
    }

    fn mark_healthy(&mut self) {
        if !self.sink_healthy {
            self.sink_healthy = true;
            debug!(failed_writes = self.failed_writes, "log sink recovered");
        }
    }

    /// Like [`Logger::log`] but hands sink errors back to the caller.
    ///
    /// Returns `Ok(false)` when the message was filtered out.
    pub fn try_log(&mut self, severity: Severity, message: &str) -> Result<bool, LoggerError> {
        if !self.enabled(severity) {
            return Ok(false);
        }
        self.emit(severity, message)?;
        Ok(true)
    }

    fn emit(&mut self, severity: Severity, message: &str) -> Result<(), SinkFailure> {
        let line = self.format.render((self.clock)(), severity, message);
        self.sink.write_all(line.as_bytes()).map_err(SinkFailure::Write)?;
        self.sink.flush().map_err(SinkFailure::Flush)
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Which sink call failed.
enum SinkFailure {
    Write(io::Error),
    Flush(io::Error),
}

impl From<SinkFailure> for LoggerError {
    fn from(failure: SinkFailure) -> Self {
        match failure {
            SinkFailure::Write(e) | SinkFailure::Flush(e) => LoggerError::Write(e),
        }
    }
}
