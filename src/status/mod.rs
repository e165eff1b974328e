//! Projection of errors into wire statuses.
//!
//! A status is a code, a message, and optionally structured details. The
//! projection never fails: errors that are not [`GeneralError`]s, or whose
//! record has no wire status code, become [`StatusCode::Unknown`] statuses
//! carrying only their message, and a sink that refuses the details gets a
//! status without them.
//!
//! # Examples
//!
//! ```
//! use error_stamp::status::grpc_error;
//! use error_stamp::{labels, Code, Formatter, StatusCode};
//!
//! let err = Formatter::default().new_error(None, Code::NOT_FOUND, labels!("user" => 42));
//! let status = grpc_error(&err);
//!
//! assert_eq!(status.code(), StatusCode::NotFound);
//! assert_eq!(status.details()[0].reason, "NOT-FOUND");
//! assert_eq!(status.details()[0].metadata["user"], "42");
//!
//! let io = std::io::Error::other("connection reset");
//! let status = grpc_error(&io);
//! assert_eq!(status.code(), StatusCode::Unknown);
//! assert!(status.details().is_empty());
//! ```

use crate::types::{ErrorInfo, GeneralError, StatusCode};
use std::error::Error;
use std::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "tonic")]
mod tonic_status;

/// Why structured details could not be attached.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttachError {
    #[error("no error details for status with code OK")]
    OkStatus,
}

/// Destination of a status projection.
pub trait WireStatus: Sized {
    /// A status without details.
    fn from_parts(code: StatusCode, message: String) -> Self;

    /// Returns a copy of this status carrying `details`.
    fn with_details(&self, details: &ErrorInfo) -> Result<Self, AttachError>;
}

/// Built-in wire status.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    code: StatusCode,
    message: String,
    details: Vec<ErrorInfo>,
}

impl Status {
    /// A status without details.
    pub fn new(code: StatusCode, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), details: Vec::new() }
    }

    #[inline]
    pub fn code(&self) -> StatusCode {
        self.code
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn details(&self) -> &[ErrorInfo] {
        &self.details
    }
}

impl WireStatus for Status {
    #[inline]
    fn from_parts(code: StatusCode, message: String) -> Self {
        Self::new(code, message)
    }

    fn with_details(&self, details: &ErrorInfo) -> Result<Self, AttachError> {
        if self.code == StatusCode::Ok {
            return Err(AttachError::OkStatus);
        }
        let mut status = self.clone();
        status.details.push(details.clone());
        Ok(status)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status: {}, message: {:?}", self.code.as_str(), self.message)
    }
}

impl Error for Status {}

/// Projects `err` into the built-in [`Status`].
#[inline]
pub fn grpc_error(err: &(dyn Error + 'static)) -> Status {
    project(err)
}

/// Projects `err` into any [`WireStatus`].
///
/// The source chain is searched for the first [`GeneralError`], so wrappers
/// around one still project with its code and details.
pub fn project<S: WireStatus>(err: &(dyn Error + 'static)) -> S {
    let Some(general) = find_general(err) else {
        return S::from_parts(StatusCode::Unknown, err.to_string());
    };

    let message = general.message();
    let Some(code) = general.core().and_then(|core| core.status_code()) else {
        return S::from_parts(StatusCode::Unknown, message);
    };

    let status = S::from_parts(code, message);
    match status.with_details(general.details()) {
        Ok(detailed) => detailed,
        Err(_reason) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(reason = %_reason, "projecting status without details");
            status
        },
    }
}

fn find_general<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a GeneralError> {
    let mut current = Some(err);
    while let Some(err) = current {
        if let Some(general) = err.downcast_ref::<GeneralError>() {
            return Some(general);
        }
        current = err.source();
    }
    None
}
