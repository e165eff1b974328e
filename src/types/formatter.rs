//! Formatter configuration and error creation.

use crate::traits::logger::{dispatch, LogLevel, Logger};
use crate::types::label::{ingest, Label, LabelMap, MissingValue};
use crate::types::template::{Template, TemplateError};
use crate::types::{Code, CoreRef, FnLookup, GeneralError, Lookup, Mapper};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Boxed originating error accepted by [`Formatter::new_error`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Configuration shared by a formatter, its clones, and every error they create.
pub(crate) struct Shared {
    pub(crate) template: Template,
    pub(crate) lookup: Arc<dyn Lookup>,
    pub(crate) logger: Option<Arc<dyn Logger>>,
    pub(crate) missing: MissingValue,
}

/// Renders and classifies errors.
///
/// A formatter owns its default labels. Everything else (template, resolver,
/// logger, missing-value policy) is shared with its clones, so cloning is the
/// cheap way to derive a request-scoped formatter with extra labels.
///
/// Creating errors only reads the formatter and is safe from many threads.
/// [`add_labels`](Formatter::add_labels) takes `&mut self`; clone first instead
/// of sharing a formatter that is still being labelled.
///
/// # Examples
///
/// ```
/// use error_stamp::{labels, Code, Formatter};
///
/// let formatter = Formatter::default();
///
/// let err = formatter.new_error(None, Code::INTERNAL, []);
/// assert_eq!(err.to_string(), "error: internal(9) - there is an internal error in the system");
///
/// let request = formatter.clone().with_labels(labels!("request_id" => "r-17"));
/// let err = request.new_error(Some("disk full".into()), Code::STORAGE, labels!("attempt" => 3));
/// assert_eq!(err.to_string(), "error: storage(5) - disk full");
/// assert_eq!(err.metadata()["request_id"], "r-17");
/// assert_eq!(err.metadata()["attempt"], "3");
/// ```
#[derive(Clone)]
pub struct Formatter {
    shared: Arc<Shared>,
    labels: LabelMap,
}

impl Formatter {
    /// Starts a builder with the default template, mapper, and missing-value token.
    #[inline]
    pub fn builder() -> FormatterBuilder {
        FormatterBuilder::default()
    }

    /// Adds labels to this formatter, using its missing-value policy.
    pub fn add_labels<I>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = Label>,
    {
        ingest(&mut self.labels, labels, &self.shared.missing);
        self
    }

    /// Owned variant of [`add_labels`](Formatter::add_labels), handy after `clone()`.
    #[must_use]
    pub fn with_labels<I>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = Label>,
    {
        self.add_labels(labels);
        self
    }

    /// Default labels merged into every error.
    #[inline]
    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }

    /// Default labels flattened as `key, value, key, value, ...`.
    pub fn labels_flat(&self) -> Vec<&str> {
        self.labels.iter().flat_map(|(k, v)| [k.as_str(), v.as_str()]).collect()
    }

    /// Token paired with dangling keys, or `None` if they are dropped.
    #[inline]
    pub fn missing_value_replacement(&self) -> Option<&str> {
        self.shared.missing.token()
    }

    /// Source text of the compiled template.
    #[inline]
    pub fn template_source(&self) -> &str {
        self.shared.template.source()
    }

    /// Resolves `code` with this formatter's resolver.
    #[inline]
    pub fn lookup(&self, code: Code) -> Option<CoreRef> {
        self.shared.lookup.lookup(code)
    }

    /// Creates an error and logs it at [`LogLevel::Error`].
    ///
    /// `original` is the error that triggered this one. Without it, the
    /// rendered message falls back to the record's default message.
    pub fn new_error<I>(&self, original: Option<BoxError>, code: Code, labels: I) -> GeneralError
    where
        I: IntoIterator<Item = Label>,
    {
        self.new_error_with_level(original, code, LogLevel::Error, labels)
    }

    /// Same as [`new_error`](Formatter::new_error) with a caller-chosen log level.
    ///
    /// Nothing is logged for [`LogLevel::Off`], when no logger is configured,
    /// or when the logger lacks the capability for `level`.
    pub fn new_error_with_level<I>(
        &self,
        original: Option<BoxError>,
        code: Code,
        level: LogLevel,
        labels: I,
    ) -> GeneralError
    where
        I: IntoIterator<Item = Label>,
    {
        let core = self.shared.lookup.lookup(code);
        let err = GeneralError::assemble(
            Arc::clone(&self.shared),
            original,
            code,
            core,
            &self.labels,
            labels,
        );

        if let Some(logger) = &self.shared.logger {
            dispatch(logger.as_ref(), level, &err);
        }

        err
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            shared: Arc::new(Shared {
                template: Template::default(),
                lookup: Arc::new(Mapper::default()),
                logger: None,
                missing: MissingValue::default(),
            }),
            labels: LabelMap::new(),
        }
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("template", &self.shared.template.source())
            .field("labels", &self.labels)
            .field("missing", &self.shared.missing)
            .field("logger", &self.shared.logger.is_some())
            .finish_non_exhaustive()
    }
}

/// Step-by-step [`Formatter`] configuration.
///
/// Settings apply in call order; a later call to the same setter replaces the
/// earlier value, except [`labels`](FormatterBuilder::labels), which
/// accumulates. Labels are validated when added, against the missing-value
/// policy in effect at that point.
///
/// # Examples
///
/// ```
/// use error_stamp::{labels, Code, Formatter};
///
/// let formatter = Formatter::builder()
///     .template("{identifier}: {message} [{labels.service}]")
///     .disable_missing_value()
///     .labels(labels!("service" => "billing", "ignored"))
///     .build()
///     .unwrap();
///
/// let err = formatter.new_error(None, Code::NOT_FOUND, []);
/// assert_eq!(err.to_string(), "not-found: no record was found with given information [billing]");
/// assert!(!formatter.labels().contains_key("ignored"));
/// ```
#[must_use]
pub struct FormatterBuilder {
    template: Option<String>,
    lookup: Option<Arc<dyn Lookup>>,
    labels: LabelMap,
    missing: MissingValue,
    logger: Option<Arc<dyn Logger>>,
}

impl FormatterBuilder {
    /// Sets the message template. Syntax errors surface from [`build`](Self::build).
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Sets the resolver.
    pub fn lookup(mut self, lookup: impl Lookup + 'static) -> Self {
        self.lookup = Some(Arc::new(lookup));
        self
    }

    /// Sets a resolver already shared elsewhere.
    pub fn shared_lookup(mut self, lookup: Arc<dyn Lookup>) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// Sets the resolver from a function plus fallback code, see [`FnLookup`].
    pub fn lookup_fn<F>(self, unknown_code: Code, resolve: F) -> Self
    where
        F: Fn(Code) -> Option<CoreRef> + Send + Sync + 'static,
    {
        self.lookup(FnLookup::new(unknown_code, resolve))
    }

    /// Adds default labels.
    pub fn labels<I>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = Label>,
    {
        ingest(&mut self.labels, labels, &self.missing);
        self
    }

    /// Pairs dangling keys with `token`.
    pub fn missing_value(mut self, token: impl Into<String>) -> Self {
        self.missing = MissingValue::Replace(token.into());
        self
    }

    /// Drops dangling keys instead of pairing them with a token.
    pub fn disable_missing_value(mut self) -> Self {
        self.missing = MissingValue::Drop;
        self
    }

    /// Logs every created error through `logger`.
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Compiles the template and freezes the configuration.
    pub fn build(self) -> Result<Formatter, TemplateError> {
        let template = match self.template {
            Some(source) => Template::compile(source)?,
            None => Template::default(),
        };

        Ok(Formatter {
            shared: Arc::new(Shared {
                template,
                lookup: self.lookup.unwrap_or_else(|| Arc::new(Mapper::default())),
                logger: self.logger,
                missing: self.missing,
            }),
            labels: self.labels,
        })
    }
}

impl Default for FormatterBuilder {
    fn default() -> Self {
        Self {
            template: None,
            lookup: None,
            labels: LabelMap::new(),
            missing: MissingValue::default(),
            logger: None,
        }
    }
}
