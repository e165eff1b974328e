//! Error types and utilities.
//!
//! This module provides the classification vocabulary ([`Code`],
//! [`CoreError`]), its resolution ([`Mapper`], [`FnLookup`]), and the
//! [`Formatter`] that turns a code plus labels into a [`GeneralError`].
//!
//! # Examples
//!
//! ```
//! use error_stamp::{labels, Code, Formatter};
//!
//! let formatter = Formatter::builder()
//!     .labels(labels!("service" => "billing"))
//!     .build()
//!     .unwrap();
//!
//! let err = formatter.new_error(None, Code::UNAVAILABLE, labels!("region" => "eu-1"));
//! println!("{err}");
//! // Output: error: unavailable(10) - requested action is not available to the requester
//! ```

pub mod code;
pub mod core_error;
pub mod formatter;
pub mod general_error;
pub mod label;
pub mod mapper;
pub mod template;

pub use code::*;
pub use core_error::*;
pub use formatter::{BoxError, Formatter, FormatterBuilder};
pub use general_error::*;
pub use label::{Label, LabelMap, MissingValue};
pub use mapper::*;
pub use template::{TemplateError, DEFAULT_TEMPLATE, NO_VALUE};
