//! Tracing integration for error-stamp.
//!
//! [`TracingLogger`] forwards created errors to the `tracing` ecosystem and
//! supports every log level, so it can be handed to
//! [`FormatterBuilder::logger`](crate::types::FormatterBuilder::logger) as-is.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! error-stamp = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use error_stamp::tracing_ext::TracingLogger;
//! use error_stamp::{Code, Formatter};
//!
//! let formatter = Formatter::builder().logger(Arc::new(TracingLogger)).build().unwrap();
//! let _ = formatter.new_error(Some("timeout".into()), Code::EXTERNAL_REQUEST, []);
//! ```

use crate::traits::logger::{DebugLogger, InfoLogger, Logger, TraceLogger, WarnLogger};
use std::error::Error;
use std::fmt;

/// [`Logger`] emitting `tracing` events under the `error_stamp` target.
///
/// Metadata is recorded as a single `metadata` field formatted `k=v k2=v2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

struct KeyValues<'a>(&'a [(&'a str, &'a str)]);

impl fmt::Display for KeyValues<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

impl Logger for TracingLogger {
    fn error(&self, err: &(dyn Error + 'static), msg: &str, fields: &[(&str, &str)]) {
        tracing::error!(
            target: "error_stamp",
            error = %err,
            metadata = %KeyValues(fields),
            "{msg}"
        );
    }

    fn as_warn(&self) -> Option<&dyn WarnLogger> {
        Some(self)
    }

    fn as_info(&self) -> Option<&dyn InfoLogger> {
        Some(self)
    }

    fn as_debug(&self) -> Option<&dyn DebugLogger> {
        Some(self)
    }

    fn as_trace(&self) -> Option<&dyn TraceLogger> {
        Some(self)
    }
}

impl WarnLogger for TracingLogger {
    fn warn(&self, msg: &str, fields: &[(&str, &str)]) {
        tracing::warn!(target: "error_stamp", metadata = %KeyValues(fields), "{msg}");
    }
}

impl InfoLogger for TracingLogger {
    fn info(&self, msg: &str, fields: &[(&str, &str)]) {
        tracing::info!(target: "error_stamp", metadata = %KeyValues(fields), "{msg}");
    }
}

impl DebugLogger for TracingLogger {
    fn debug(&self, msg: &str, fields: &[(&str, &str)]) {
        tracing::debug!(target: "error_stamp", metadata = %KeyValues(fields), "{msg}");
    }
}

impl TraceLogger for TracingLogger {
    fn trace(&self, msg: &str, fields: &[(&str, &str)]) {
        tracing::trace!(target: "error_stamp", metadata = %KeyValues(fields), "{msg}");
    }
}
