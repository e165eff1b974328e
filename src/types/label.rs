//! Key/value labels attached to formatters and errors.
//!
//! Labels arrive as an ordered list of [`Label`] entries. Each entry is
//! validated on its own: a pair with an unusable key is dropped without
//! rejecting the rest of the list, and a dangling key (no value) is either
//! paired with the replacement token or dropped, depending on
//! [`MissingValue`].

use std::collections::BTreeMap;
use std::fmt::Display;
use thiserror::Error;

/// Maximum accepted key length, in bytes.
pub const MAX_KEY_LEN: usize = 64;

/// Replacement token used for dangling keys unless configured otherwise.
pub const DEFAULT_MISSING_VALUE: &str = "MISSING";

/// Merged label storage. Ordered so rendering and logging are deterministic.
pub type LabelMap = BTreeMap<String, String>;

/// One entry of a label list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// A key with its stringified value.
    Pair { key: String, value: String },
    /// A trailing key that never received a value.
    Dangling { key: String },
}

impl Label {
    /// Pairs `key` with the `Display` output of `value`.
    pub fn pair(key: impl Into<String>, value: impl Display) -> Self {
        Self::Pair { key: key.into(), value: value.to_string() }
    }

    /// A key without a value.
    pub fn dangling(key: impl Into<String>) -> Self {
        Self::Dangling { key: key.into() }
    }

    #[inline]
    pub fn key(&self) -> &str {
        match self {
            Self::Pair { key, .. } | Self::Dangling { key } => key,
        }
    }
}

impl<K: Into<String>, V: Display> From<(K, V)> for Label {
    fn from((key, value): (K, V)) -> Self {
        Self::pair(key, value)
    }
}

/// Reason a key was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidKey {
    #[error("key is empty")]
    Empty,
    #[error("key is {len} bytes long, limit is {}", MAX_KEY_LEN)]
    TooLong { len: usize },
    #[error("key contains invalid character {ch:?}")]
    InvalidChar { ch: char },
}

/// Checks a label key: non-empty, at most [`MAX_KEY_LEN`] bytes, made of ASCII
/// letters, digits, `_` and `-`.
///
/// # Examples
///
/// ```
/// use error_stamp::types::label::{validate_key, InvalidKey};
///
/// assert!(validate_key("request_id").is_ok());
/// assert_eq!(validate_key(""), Err(InvalidKey::Empty));
/// assert_eq!(validate_key("$key"), Err(InvalidKey::InvalidChar { ch: '$' }));
/// ```
pub fn validate_key(key: &str) -> Result<(), InvalidKey> {
    if key.is_empty() {
        return Err(InvalidKey::Empty);
    }
    if key.len() > MAX_KEY_LEN {
        return Err(InvalidKey::TooLong { len: key.len() });
    }
    match key.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-')) {
        Some(ch) => Err(InvalidKey::InvalidChar { ch }),
        None => Ok(()),
    }
}

/// What to do with a key that has no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingValue {
    /// Pair the key with this token.
    Replace(String),
    /// Drop the key.
    Drop,
}

impl MissingValue {
    /// The replacement token, if replacement is enabled.
    #[inline]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Replace(token) => Some(token),
            Self::Drop => None,
        }
    }
}

impl Default for MissingValue {
    fn default() -> Self {
        Self::Replace(DEFAULT_MISSING_VALUE.into())
    }
}

/// Validates `labels` and inserts the accepted ones into `target`.
///
/// Later entries overwrite earlier ones with the same key. Returns the number
/// of entries that were dropped.
pub fn ingest<I>(target: &mut LabelMap, labels: I, missing: &MissingValue) -> usize
where
    I: IntoIterator<Item = Label>,
{
    let mut dropped = 0;

    for label in labels {
        if let Err(_reason) = validate_key(label.key()) {
            #[cfg(feature = "tracing")]
            tracing::trace!(key = label.key(), reason = %_reason, "dropping label");
            dropped += 1;
            continue;
        }

        match (label, missing) {
            (Label::Pair { key, value }, _) => {
                target.insert(key, value);
            },
            (Label::Dangling { key }, MissingValue::Replace(token)) => {
                target.insert(key, token.clone());
            },
            (Label::Dangling { .. }, MissingValue::Drop) => dropped += 1,
        }
    }

    dropped
}
