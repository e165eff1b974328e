//! Capability-gated logging of newly created errors.
//!
//! A [`Logger`] must be able to log at error severity. Lower severities are
//! optional capabilities: a logger advertises them by returning `Some` from
//! the matching `as_*` accessor. When an error is created at a level the
//! logger does not support, nothing is logged; there is no fallback to
//! [`Logger::error`].
//!
//! # Examples
//!
//! ```
//! use std::error::Error;
//! use std::sync::Arc;
//! use error_stamp::traits::{InfoLogger, Logger};
//! use error_stamp::{Code, Formatter, LogLevel};
//!
//! struct Stdout;
//!
//! impl Logger for Stdout {
//!     fn error(&self, _err: &(dyn Error + 'static), msg: &str, _fields: &[(&str, &str)]) {
//!         println!("ERROR {msg}");
//!     }
//!
//!     fn as_info(&self) -> Option<&dyn InfoLogger> {
//!         Some(self)
//!     }
//! }
//!
//! impl InfoLogger for Stdout {
//!     fn info(&self, msg: &str, _fields: &[(&str, &str)]) {
//!         println!("INFO {msg}");
//!     }
//! }
//!
//! let formatter = Formatter::builder().logger(Arc::new(Stdout)).build().unwrap();
//! let _ = formatter.new_error_with_level(None, Code::NOT_FOUND, LogLevel::Info, []);
//! // Stdout has no debug capability, so this one is silent
//! let _ = formatter.new_error_with_level(None, Code::NOT_FOUND, LogLevel::Debug, []);
//! ```

use crate::types::GeneralError;
use smallvec::SmallVec;
use std::error::Error;

/// Severity requested when creating an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    /// Never log.
    Off,
    #[default]
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Metadata handed to loggers, in key order.
pub type Fields<'a> = SmallVec<[(&'a str, &'a str); 8]>;

/// Base logging capability. Every logger supports error severity.
pub trait Logger: Send + Sync {
    /// Logs an error together with the error that originated it (or the
    /// [`NoOriginalError`](crate::types::NoOriginalError) sentinel).
    fn error(&self, err: &(dyn Error + 'static), msg: &str, fields: &[(&str, &str)]);

    fn as_warn(&self) -> Option<&dyn WarnLogger> {
        None
    }

    fn as_info(&self) -> Option<&dyn InfoLogger> {
        None
    }

    fn as_debug(&self) -> Option<&dyn DebugLogger> {
        None
    }

    fn as_trace(&self) -> Option<&dyn TraceLogger> {
        None
    }
}

/// Optional warn-level capability, advertised through [`Logger::as_warn`].
pub trait WarnLogger {
    fn warn(&self, msg: &str, fields: &[(&str, &str)]);
}

/// Optional info-level capability, advertised through [`Logger::as_info`].
pub trait InfoLogger {
    fn info(&self, msg: &str, fields: &[(&str, &str)]);
}

/// Optional debug-level capability, advertised through [`Logger::as_debug`].
pub trait DebugLogger {
    fn debug(&self, msg: &str, fields: &[(&str, &str)]);
}

/// Optional trace-level capability, advertised through [`Logger::as_trace`].
pub trait TraceLogger {
    fn trace(&self, msg: &str, fields: &[(&str, &str)]);
}

/// Sends `err` to `logger` at `level`, if the logger supports that level.
pub(crate) fn dispatch(logger: &dyn Logger, level: LogLevel, err: &GeneralError) {
    let fields = err.metadata_pairs();
    match level {
        LogLevel::Off => {},
        LogLevel::Error => logger.error(err.original_error(), &err.message(), &fields),
        LogLevel::Warn => {
            if let Some(l) = logger.as_warn() {
                l.warn(&err.message(), &fields);
            }
        },
        LogLevel::Info => {
            if let Some(l) = logger.as_info() {
                l.info(&err.message(), &fields);
            }
        },
        LogLevel::Debug => {
            if let Some(l) = logger.as_debug() {
                l.debug(&err.message(), &fields);
            }
        },
        LogLevel::Trace => {
            if let Some(l) = logger.as_trace() {
                l.trace(&err.message(), &fields);
            }
        },
    }
}
