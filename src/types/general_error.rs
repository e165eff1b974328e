//! The error value produced by a [`Formatter`](crate::Formatter).

use crate::status::{project, Status, WireStatus};
use crate::traits::logger::Fields;
use crate::types::formatter::{BoxError, Shared};
use crate::types::label::{ingest, Label, LabelMap};
use crate::types::template::TemplateView;
use crate::types::{Code, CoreError, CoreRef};
use std::error::Error;
use std::fmt;
use std::sync::Arc;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Metadata key holding the record identifier.
pub const METADATA_IDENTIFIER: &str = "_identifier";
/// Metadata key holding the record code.
pub const METADATA_ERROR_CODE: &str = "_error_code";
/// Metadata key holding the record default message.
pub const METADATA_DEFAULT_MESSAGE: &str = "_default_message";
/// Metadata key holding the originating error text.
pub const METADATA_ORIGINAL_ERROR: &str = "_original_error";

/// Stand-in for the originating error when none was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoOriginalError;

impl fmt::Display for NoOriginalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no original error")
    }
}

impl Error for NoOriginalError {}

/// Structured details attached to a wire status.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorInfo {
    /// Identifier upper-cased, whitespace replaced by `_`.
    pub reason: String,
    pub metadata: LabelMap,
}

/// A classified, rendered error.
///
/// Holds the originating error, the resolved record, and the merged metadata
/// (formatter labels, then the reserved `_`-prefixed fields, then call-site
/// labels, later entries winning). The message is rendered through the
/// formatter's template each time it is requested.
///
/// If the resolver returned no record at all (its fallback entry is missing),
/// the error still exists: identifier and default message are empty, the
/// requested code stands in for the record code, and status projection
/// degrades to [`StatusCode::Unknown`](crate::StatusCode::Unknown).
#[derive(Clone)]
pub struct GeneralError {
    original: Arc<dyn Error + Send + Sync + 'static>,
    code: Code,
    core: Option<CoreRef>,
    formatter: Arc<Shared>,
    details: ErrorInfo,
}

impl GeneralError {
    pub(crate) fn assemble<I>(
        formatter: Arc<Shared>,
        original: Option<BoxError>,
        code: Code,
        core: Option<CoreRef>,
        defaults: &LabelMap,
        labels: I,
    ) -> Self
    where
        I: IntoIterator<Item = Label>,
    {
        let original: Arc<dyn Error + Send + Sync> = match original {
            Some(err) => Arc::from(err),
            None => Arc::new(NoOriginalError),
        };

        let mut metadata = defaults.clone();
        {
            let (identifier, record_code, default_message) = describe(core.as_deref(), code);
            metadata.insert(METADATA_IDENTIFIER.into(), identifier.into());
            metadata.insert(METADATA_ERROR_CODE.into(), record_code.to_string());
            metadata.insert(METADATA_DEFAULT_MESSAGE.into(), default_message.into());
            metadata.insert(METADATA_ORIGINAL_ERROR.into(), original.to_string());
        }
        ingest(&mut metadata, labels, &formatter.missing);

        let identifier = core.as_deref().map(|c| c.identifier()).unwrap_or_default();
        let details = ErrorInfo { reason: reason_for(identifier), metadata };

        Self { original, code, core, formatter, details }
    }

    /// The resolved record, `None` only when the resolver had no fallback entry.
    #[inline]
    pub fn core(&self) -> Option<&dyn CoreError> {
        self.core.as_deref()
    }

    /// Code of the resolved record; the requested code if nothing was resolved.
    #[inline]
    pub fn code(&self) -> Code {
        describe(self.core(), self.code).1
    }

    /// Code this error was created with, before fallback.
    #[inline]
    pub fn requested_code(&self) -> Code {
        self.code
    }

    #[inline]
    pub fn identifier(&self) -> &str {
        describe(self.core(), self.code).0
    }

    #[inline]
    pub fn default_message(&self) -> &str {
        describe(self.core(), self.code).2
    }

    /// The originating error, or [`NoOriginalError`].
    #[inline]
    pub fn original_error(&self) -> &(dyn Error + 'static) {
        &*self.original
    }

    #[inline]
    pub fn has_original_error(&self) -> bool {
        !self.original.is::<NoOriginalError>()
    }

    /// Renders the message through the formatter's template.
    ///
    /// Never fails: a template execution error yields a diagnostic string that
    /// still carries the best-effort message.
    pub fn message(&self) -> String {
        let code = self.code().to_string();
        let status_code =
            self.core().and_then(|c| c.status_code()).map(|s| s.to_string()).unwrap_or_default();
        let original;
        let message = if self.has_original_error() {
            original = self.original.to_string();
            original.as_str()
        } else {
            self.default_message()
        };

        let view = TemplateView {
            identifier: self.identifier(),
            code: &code,
            status_code: &status_code,
            message,
            default_message: self.default_message(),
            labels: &self.details.metadata,
        };

        match self.formatter.template.render(&view) {
            Ok(rendered) => rendered,
            Err(err) => {
                format!("failed to execute template: {err} (original error: {message})")
            },
        }
    }

    /// Merged metadata.
    #[inline]
    pub fn metadata(&self) -> &LabelMap {
        &self.details.metadata
    }

    /// Merged metadata as borrowed pairs, in key order.
    pub fn metadata_pairs(&self) -> Fields<'_> {
        self.details.metadata.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }

    /// Reason plus metadata, as attached to wire statuses.
    #[inline]
    pub fn details(&self) -> &ErrorInfo {
        &self.details
    }

    #[inline]
    pub fn reason(&self) -> &str {
        &self.details.reason
    }

    /// Projects this error into any [`WireStatus`] sink.
    pub fn status<S: WireStatus>(&self) -> S {
        project(self)
    }

    /// Projects this error into the built-in [`Status`].
    pub fn grpc(&self) -> Status {
        self.status()
    }
}

/// Identifier, record code, and default message of `core`, or their
/// unresolved stand-ins.
fn describe<'a>(core: Option<&'a dyn CoreError>, requested: Code) -> (&'a str, Code, &'a str) {
    match core {
        Some(core) => (core.identifier(), core.code(), core.default_message()),
        None => ("", requested, ""),
    }
}

fn reason_for(identifier: &str) -> String {
    identifier
        .chars()
        .flat_map(char::to_uppercase)
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

impl fmt::Display for GeneralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl fmt::Debug for GeneralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneralError")
            .field("code", &self.code())
            .field("identifier", &self.identifier())
            .field("original", &self.original)
            .field("details", &self.details)
            .finish()
    }
}

impl Error for GeneralError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.has_original_error().then(|| self.original_error())
    }
}
