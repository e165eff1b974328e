//! Descriptive records attached to each classification [`Code`].

use crate::types::{Code, StatusCode};
use std::borrow::Cow;
use std::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Descriptive data every resolved code must expose.
///
/// Implementors are immutable records, typically part of a static table. The
/// wire status capability is optional: records that return `None` from
/// [`status_code`](CoreError::status_code) project to a generic
/// [`StatusCode::Unknown`] status without structured details.
pub trait CoreError: fmt::Debug + Send + Sync {
    /// The classification code this record describes.
    fn code(&self) -> Code;

    /// Short human-readable label, one or two words.
    fn identifier(&self) -> &str;

    /// Longer explanation used when no originating error was supplied.
    fn default_message(&self) -> &str;

    /// Wire status code, if this record supports status projection.
    fn status_code(&self) -> Option<StatusCode> {
        None
    }
}

/// Built-in [`CoreError`] implementation.
///
/// Constructible in `const` context so tables can live in statics.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreRecord {
    code: Code,
    identifier: Cow<'static, str>,
    default_message: Cow<'static, str>,
    status: Option<StatusCode>,
}

impl CoreRecord {
    /// Creates a record without a wire status mapping.
    pub const fn new(code: Code, identifier: &'static str, default_message: &'static str) -> Self {
        Self {
            code,
            identifier: Cow::Borrowed(identifier),
            default_message: Cow::Borrowed(default_message),
            status: None,
        }
    }

    /// Creates a record from owned strings, for tables assembled at runtime.
    pub fn owned(
        code: Code,
        identifier: impl Into<String>,
        default_message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            identifier: Cow::Owned(identifier.into()),
            default_message: Cow::Owned(default_message.into()),
            status: None,
        }
    }

    /// Attaches a wire status mapping.
    pub const fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }
}

impl CoreError for CoreRecord {
    #[inline]
    fn code(&self) -> Code {
        self.code
    }

    #[inline]
    fn identifier(&self) -> &str {
        &self.identifier
    }

    #[inline]
    fn default_message(&self) -> &str {
        &self.default_message
    }

    #[inline]
    fn status_code(&self) -> Option<StatusCode> {
        self.status
    }
}

/// Records for every built-in [`Code`].
///
/// This table is what [`Mapper::default`](crate::types::Mapper::default)
/// resolves against, with [`Code::UNKNOWN`] as the fallback entry. Pass it (or
/// a table derived from it) explicitly when building a custom mapper.
pub const DEFAULT_RECORDS: [CoreRecord; 11] = [
    CoreRecord::new(
        Code::UNKNOWN,
        "unknown",
        "no information is available for this type of error",
    )
    .with_status(StatusCode::Unknown),
    CoreRecord::new(Code::NOT_FOUND, "not-found", "no record was found with given information")
        .with_status(StatusCode::NotFound),
    CoreRecord::new(
        Code::INVALID_ARGUMENT,
        "invalid-argument",
        "some of the arguments in the request are invalid",
    )
    .with_status(StatusCode::InvalidArgument),
    CoreRecord::new(Code::MARSHAL, "marshal", "unable to marshal/unmarshal provided data")
        .with_status(StatusCode::Internal),
    CoreRecord::new(Code::STORAGE, "storage", "unable to perform storage-related operation")
        .with_status(StatusCode::Internal),
    CoreRecord::new(Code::THRESHOLD, "out-of-range", "provided argument is out of valid range")
        .with_status(StatusCode::OutOfRange),
    CoreRecord::new(
        Code::UNIMPLEMENTED,
        "unimplemented",
        "provided argument led to an unimplemented operation",
    )
    .with_status(StatusCode::Unimplemented),
    CoreRecord::new(
        Code::UNAUTHORIZED,
        "unauthorized",
        "requester is not authorized to perform the requested operation",
    )
    .with_status(StatusCode::Unauthenticated),
    CoreRecord::new(Code::INTERNAL, "internal", "there is an internal error in the system")
        .with_status(StatusCode::Internal),
    CoreRecord::new(
        Code::UNAVAILABLE,
        "unavailable",
        "requested action is not available to the requester",
    )
    .with_status(StatusCode::Unavailable),
    CoreRecord::new(
        Code::EXTERNAL_REQUEST,
        "external-request",
        "system failed during the request to external service",
    )
    .with_status(StatusCode::Internal),
];
