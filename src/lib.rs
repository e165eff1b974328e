//! Classified, template-rendered errors with structured metadata.
//!
//! A [`Formatter`] resolves a [`Code`] to its descriptive [`CoreError`]
//! record, merges labels, renders the message through a compiled template,
//! optionally logs, and returns a [`GeneralError`]. Any error can then be
//! projected into a wire [`Status`](status::Status) carrying the code, the
//! rendered message, and the metadata as structured details.
//!
//! # Examples
//!
//! ## Default formatter
//!
//! ```
//! use error_stamp::{Code, Formatter};
//!
//! let err = Formatter::default().new_error(None, Code::INTERNAL, []);
//! assert_eq!(err.to_string(), "error: internal(9) - there is an internal error in the system");
//! ```
//!
//! ## Custom template and labels
//!
//! ```
//! use error_stamp::{labels, Code, Formatter};
//!
//! let formatter = Formatter::builder()
//!     .template("{identifier}[{status_code}]: {message} ({labels.tenant})")
//!     .labels(labels!("tenant" => "acme"))
//!     .build()
//!     .unwrap();
//!
//! let err = formatter.new_error(Some("row 12 missing".into()), Code::NOT_FOUND, []);
//! assert_eq!(err.to_string(), "not-found[5]: row 12 missing (acme)");
//! ```
//!
//! ## Status projection
//!
//! ```
//! use error_stamp::{labels, Code, Formatter, StatusCode};
//!
//! let err = Formatter::default().new_error(None, Code::THRESHOLD, labels!("limit" => 100));
//! let status = err.grpc();
//!
//! assert_eq!(status.code(), StatusCode::OutOfRange);
//! assert_eq!(status.details()[0].reason, "OUT-OF-RANGE");
//! ```

/// Label list macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Wire status projection
pub mod status;
/// Pluggable behavior: logging capabilities
pub mod traits;
/// Codes, records, resolvers, formatter, and the error value
pub mod types;

/// Tracing-backed logger (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use status::{grpc_error, Status, WireStatus};
pub use traits::{LogLevel, Logger};
pub use types::{
    Code, CoreError, CoreRecord, FnLookup, Formatter, FormatterBuilder, GeneralError, Label,
    Lookup, Mapper, StatusCode, DEFAULT_RECORDS,
};
