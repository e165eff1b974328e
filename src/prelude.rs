//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_stamp::prelude::*;
//!
//! let err = Formatter::default().new_error(None, Code::NOT_FOUND, labels!("id" => 7));
//! assert_eq!(err.grpc().code(), StatusCode::NotFound);
//! ```

// Macros
pub use crate::labels;

// Core types
pub use crate::status::{grpc_error, Status, WireStatus};
pub use crate::types::{
    Code, CoreError, CoreRecord, Formatter, GeneralError, Label, Lookup, Mapper, StatusCode,
};

// Traits
pub use crate::traits::{LogLevel, Logger};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::TracingLogger;
