//! Compiled message templates.
//!
//! A template is plain text with `{field}` placeholders. It is parsed once
//! when a formatter is built; rendering only walks the compiled segments.
//!
//! | placeholder         | value                                               |
//! |---------------------|-----------------------------------------------------|
//! | `{identifier}`      | record identifier                                   |
//! | `{code}`            | record code                                         |
//! | `{status_code}`     | numeric wire status code, empty if the record has none |
//! | `{message}`         | original error text, or the default message         |
//! | `{default_message}` | record default message                              |
//! | `{labels}`          | all metadata as `map[k:v k2:v2]`                    |
//! | `{labels.<key>}`    | one metadata value, `<no value>` if it is absent     |
//! | `{labels.<key>!}`   | one metadata value; rendering fails if it is absent |
//!
//! `{{` and `}}` produce literal braces.

use crate::types::label::LabelMap;
use std::fmt::Write;
use thiserror::Error;

/// Template used when a formatter is built without one.
pub const DEFAULT_TEMPLATE: &str = "error: {identifier}({code}) - {message}";

/// Text rendered for a `{labels.<key>}` placeholder whose key is absent.
pub const NO_VALUE: &str = "<no value>";

/// Template syntax error, raised when a formatter is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unclosed placeholder starting at byte {offset}")]
    Unclosed { offset: usize },
    #[error("unmatched '}}' at byte {offset}")]
    UnmatchedClose { offset: usize },
    #[error("empty placeholder at byte {offset}")]
    EmptyPlaceholder { offset: usize },
    #[error("unknown field {name:?} at byte {offset}")]
    UnknownField { name: String, offset: usize },
}

/// Template execution error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("label {key:?} is not present in metadata")]
    MissingLabel { key: String },
}

/// Values a template is rendered against.
#[derive(Debug, Clone, Copy)]
pub struct TemplateView<'a> {
    pub identifier: &'a str,
    pub code: &'a str,
    pub status_code: &'a str,
    pub message: &'a str,
    pub default_message: &'a str,
    pub labels: &'a LabelMap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Field {
    Identifier,
    Code,
    StatusCode,
    Message,
    DefaultMessage,
    Labels,
    Label { key: String, required: bool },
}

impl Field {
    fn parse(name: &str, offset: usize) -> Result<Self, TemplateError> {
        let field = match name {
            "" => return Err(TemplateError::EmptyPlaceholder { offset }),
            "identifier" => Self::Identifier,
            "code" => Self::Code,
            "status_code" => Self::StatusCode,
            "message" => Self::Message,
            "default_message" => Self::DefaultMessage,
            "labels" => Self::Labels,
            _ => {
                let Some(key) = name.strip_prefix("labels.") else {
                    return Err(TemplateError::UnknownField { name: name.into(), offset });
                };
                let (key, required) = match key.strip_suffix('!') {
                    Some(key) => (key, true),
                    None => (key, false),
                };
                if key.is_empty() {
                    return Err(TemplateError::UnknownField { name: name.into(), offset });
                }
                Self::Label { key: key.into(), required }
            },
        };
        Ok(field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// A parsed template.
///
/// # Examples
///
/// ```
/// use error_stamp::types::template::{Template, TemplateError};
///
/// assert!(Template::compile("{identifier}: {labels.user}").is_ok());
/// assert!(matches!(
///     Template::compile("{identifier"),
///     Err(TemplateError::Unclosed { offset: 0 })
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses `source`.
    pub fn compile(source: impl Into<String>) -> Result<Self, TemplateError> {
        let source = source.into();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            match ch {
                '{' if chars.peek().map(|&(_, c)| c) == Some('{') => {
                    chars.next();
                    literal.push('{');
                },
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    if !closed {
                        return Err(TemplateError::Unclosed { offset });
                    }
                    let field = Field::parse(&name, offset)?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(field));
                },
                '}' if chars.peek().map(|&(_, c)| c) == Some('}') => {
                    chars.next();
                    literal.push('}');
                },
                '}' => return Err(TemplateError::UnmatchedClose { offset }),
                _ => literal.push(ch),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { source, segments })
    }

    /// The text this template was compiled from.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Renders the template against `view`.
    pub fn render(&self, view: &TemplateView<'_>) -> Result<String, RenderError> {
        let mut out = String::with_capacity(self.source.len() + 64);

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(Field::Identifier) => out.push_str(view.identifier),
                Segment::Field(Field::Code) => out.push_str(view.code),
                Segment::Field(Field::StatusCode) => out.push_str(view.status_code),
                Segment::Field(Field::Message) => out.push_str(view.message),
                Segment::Field(Field::DefaultMessage) => out.push_str(view.default_message),
                Segment::Field(Field::Labels) => write_label_map(&mut out, view.labels),
                Segment::Field(Field::Label { key, required }) => match view.labels.get(key) {
                    Some(value) => out.push_str(value),
                    None if *required => {
                        return Err(RenderError::MissingLabel { key: key.clone() })
                    },
                    None => out.push_str(NO_VALUE),
                },
            }
        }

        Ok(out)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self {
            source: DEFAULT_TEMPLATE.into(),
            segments: vec![
                Segment::Literal("error: ".into()),
                Segment::Field(Field::Identifier),
                Segment::Literal("(".into()),
                Segment::Field(Field::Code),
                Segment::Literal(") - ".into()),
                Segment::Field(Field::Message),
            ],
        }
    }
}

fn write_label_map(out: &mut String, labels: &LabelMap) {
    out.push_str("map[");
    for (i, (key, value)) in labels.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{key}:{value}");
    }
    out.push(']');
}
