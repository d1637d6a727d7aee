#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
#![allow(
    clippy::missing_errors_doc,      // Error variants are self-describing
    clippy::module_name_repetitions, // e.g. LoggerConfig in config module
    clippy::must_use_candidate       // Annotated selectively on critical APIs
)]

//! Minimal leveled logging.
//!
//! A [`Logger`] holds a [`Severity`] threshold and a caller-supplied
//! [`std::io::Write`] sink. Each per-severity method either writes one
//! formatted line or does nothing at all:
//!
//! ```text
//! 2026-10-16T08:30:00.123Z [INFO] some info message
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod logger;
pub mod severity;
pub mod shared;

// Re-export main types for easy access
pub use config::LoggerConfig;
pub use error::LoggerError;
pub use format::LineFormat;
pub use logger::Logger;
pub use severity::Severity;
pub use shared::SharedLogger;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
