//! Core traits for pluggable behavior.
//!
//! - [`Logger`]: Base logging capability, with [`WarnLogger`], [`InfoLogger`],
//!   [`DebugLogger`] and [`TraceLogger`] as optional capabilities
//! - [`Lookup`](crate::types::Lookup) and [`CoreError`](crate::types::CoreError)
//!   live next to the types they resolve
//! - [`WireStatus`](crate::status::WireStatus) lives in [`status`](crate::status)

pub mod logger;

pub use logger::{DebugLogger, InfoLogger, LogLevel, Logger, TraceLogger, WarnLogger};
