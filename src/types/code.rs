//! Classification codes and the wire status codes they project onto.

use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Internal classification code of an error.
///
/// The built-in set is exposed as associated constants. Callers are free to
/// define private codes with any other value; those resolve through whatever
/// [`Lookup`](crate::types::Lookup) the formatter was configured with.
///
/// # Examples
///
/// ```
/// use error_stamp::Code;
///
/// const RATE_LIMITED: Code = Code(100);
///
/// assert_eq!(Code::INTERNAL.to_string(), "9");
/// assert!(Code::UNKNOWN < RATE_LIMITED);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(pub u32);

impl Code {
    /// Unhandled error whose cause is unknown. Also the fallback of the default mapper.
    pub const UNKNOWN: Code = Code(1);
    /// A lookup found no record.
    pub const NOT_FOUND: Code = Code(2);
    /// The caller supplied an argument of the wrong type or format.
    pub const INVALID_ARGUMENT: Code = Code(3);
    /// Marshaling or unmarshaling of data failed.
    pub const MARSHAL: Code = Code(4);
    /// A storage operation (filesystem, database, cache) failed.
    pub const STORAGE: Code = Code(5);
    /// A well-formed argument fell outside the accepted range.
    pub const THRESHOLD: Code = Code(6);
    /// The requested operation is not implemented.
    pub const UNIMPLEMENTED: Code = Code(7);
    /// The requester is not allowed to perform the operation.
    pub const UNAUTHORIZED: Code = Code(8);
    /// Non user-facing failure caused by the system itself.
    pub const INTERNAL: Code = Code(9);
    /// The requested action is not available to the requester.
    pub const UNAVAILABLE: Code = Code(10);
    /// A call to a third-party service failed.
    pub const EXTERNAL_REQUEST: Code = Code(11);

    /// Returns the raw integer value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for Code {
    #[inline]
    fn from(value: u32) -> Self {
        Code(value)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical wire status codes used by RPC-style services.
///
/// Numeric values match the gRPC status code table, so `Display` output is
/// interchangeable with what a gRPC peer reports.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum StatusCode {
    Ok = 0,
    Cancelled = 1,
    Unknown = 2,
    InvalidArgument = 3,
    DeadlineExceeded = 4,
    NotFound = 5,
    AlreadyExists = 6,
    PermissionDenied = 7,
    ResourceExhausted = 8,
    FailedPrecondition = 9,
    Aborted = 10,
    OutOfRange = 11,
    Unimplemented = 12,
    Internal = 13,
    Unavailable = 14,
    DataLoss = 15,
    Unauthenticated = 16,
}

impl StatusCode {
    /// Numeric value on the wire.
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Converts a wire value back into a status code.
    ///
    /// Values outside the canonical table map to [`StatusCode::Unknown`].
    pub const fn from_i32(value: i32) -> Self {
        match value {
            0 => Self::Ok,
            1 => Self::Cancelled,
            3 => Self::InvalidArgument,
            4 => Self::DeadlineExceeded,
            5 => Self::NotFound,
            6 => Self::AlreadyExists,
            7 => Self::PermissionDenied,
            8 => Self::ResourceExhausted,
            9 => Self::FailedPrecondition,
            10 => Self::Aborted,
            11 => Self::OutOfRange,
            12 => Self::Unimplemented,
            13 => Self::Internal,
            14 => Self::Unavailable,
            15 => Self::DataLoss,
            16 => Self::Unauthenticated,
            _ => Self::Unknown,
        }
    }

    /// Canonical upper-case name, e.g. `"NOT_FOUND"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Cancelled => "CANCELLED",
            Self::Unknown => "UNKNOWN",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Self::NotFound => "NOT_FOUND",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Self::FailedPrecondition => "FAILED_PRECONDITION",
            Self::Aborted => "ABORTED",
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::Unimplemented => "UNIMPLEMENTED",
            Self::Internal => "INTERNAL",
            Self::Unavailable => "UNAVAILABLE",
            Self::DataLoss => "DATA_LOSS",
            Self::Unauthenticated => "UNAUTHENTICATED",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}
