//! Ergonomic macros for building label lists.
//!
//! - [`macro@crate::labels`] - Builds a `Vec<Label>` from `key => value` pairs and
//!   bare trailing keys, ready for
//!   [`Formatter::new_error`](crate::Formatter::new_error) or
//!   [`Formatter::add_labels`](crate::Formatter::add_labels).
//!
//! # Examples
//!
//! ```
//! use error_stamp::{labels, Code, Formatter};
//!
//! let formatter = Formatter::default();
//! let err = formatter.new_error(
//!     None,
//!     Code::INVALID_ARGUMENT,
//!     labels!("field" => "email", "length" => 320),
//! );
//!
//! assert_eq!(err.metadata()["field"], "email");
//! assert_eq!(err.metadata()["length"], "320");
//! ```

/// Creates an ordered list of [`Label`](crate::types::Label) entries.
///
/// `key => value` becomes a pair, with the value stored through its `Display`
/// implementation. A bare `key` becomes a dangling key, which the formatter
/// either pairs with its missing-value token or drops.
///
/// # Examples
///
/// ```
/// use error_stamp::labels;
/// use error_stamp::types::Label;
///
/// let list = labels!("attempt" => 3, "cached" => true, "trailing");
/// assert_eq!(list[0], Label::pair("attempt", 3));
/// assert_eq!(list[2], Label::dangling("trailing"));
///
/// let empty = labels!();
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! labels {
    () => {
        ::std::vec::Vec::<$crate::types::Label>::new()
    };
    ($($key:expr $(=> $value:expr)?),+ $(,)?) => {
        ::std::vec![$($crate::__label!($key $(=> $value)?)),+]
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __label {
    ($key:expr => $value:expr) => {
        $crate::types::Label::pair($key, $value)
    };
    ($key:expr) => {
        $crate::types::Label::dangling($key)
    };
}
