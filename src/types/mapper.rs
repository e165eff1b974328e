//! Resolution of [`Code`] values to their [`CoreError`] records.

use crate::types::{Code, CoreError, CoreRecord, DEFAULT_RECORDS};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a resolved record.
pub type CoreRef = Arc<dyn CoreError>;

/// Translates a [`Code`] into the record describing it.
///
/// Well-formed resolvers always return a record by falling back to a
/// designated unknown code. `None` is reserved for the degenerate case where
/// that fallback entry is missing too.
pub trait Lookup: Send + Sync {
    /// Record for `code`, or for the fallback code when `code` is unmapped.
    fn lookup(&self, code: Code) -> Option<CoreRef>;
}

/// Table-backed [`Lookup`] with a mandatory fallback code.
///
/// The table is read-only after construction, so a single mapper can be shared
/// between formatters and threads.
///
/// # Examples
///
/// ```
/// use error_stamp::{Code, CoreError, Lookup, Mapper};
///
/// let mapper = Mapper::default();
///
/// let found = mapper.lookup(Code::NOT_FOUND).unwrap();
/// assert_eq!(found.identifier(), "not-found");
///
/// // unmapped codes resolve to the unknown record
/// let fallback = mapper.lookup(Code(1000)).unwrap();
/// assert_eq!(fallback.code(), Code::UNKNOWN);
/// ```
#[derive(Clone)]
pub struct Mapper {
    mapping: HashMap<Code, CoreRef>,
    unknown_code: Code,
}

impl Mapper {
    /// Creates a mapper over a prepared table.
    ///
    /// `unknown_code` is used whenever `mapping` has no entry for a looked-up code.
    pub fn new(unknown_code: Code, mapping: HashMap<Code, CoreRef>) -> Self {
        Self { mapping, unknown_code }
    }

    /// Creates a mapper keyed by each record's own [`CoreError::code`].
    ///
    /// When two records share a code the later one wins.
    pub fn from_records<I, C>(unknown_code: Code, records: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: CoreError + 'static,
    {
        let mapping = records
            .into_iter()
            .map(|record| (record.code(), Arc::new(record) as CoreRef))
            .collect();
        Self { mapping, unknown_code }
    }

    /// Returns the fallback code.
    #[inline]
    pub fn unknown_code(&self) -> Code {
        self.unknown_code
    }

    /// Number of mapped codes.
    #[inline]
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Returns `true` if `code` has its own entry (no fallback involved).
    #[inline]
    pub fn contains(&self, code: Code) -> bool {
        self.mapping.contains_key(&code)
    }
}

impl Lookup for Mapper {
    fn lookup(&self, code: Code) -> Option<CoreRef> {
        self.mapping
            .get(&code)
            .or_else(|| self.mapping.get(&self.unknown_code))
            .cloned()
    }
}

impl Default for Mapper {
    /// Mapper over [`DEFAULT_RECORDS`] with [`Code::UNKNOWN`] as the fallback.
    fn default() -> Self {
        Self::from_records::<_, CoreRecord>(Code::UNKNOWN, DEFAULT_RECORDS)
    }
}

impl fmt::Debug for Mapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut codes: Vec<_> = self.mapping.keys().copied().collect();
        codes.sort();
        f.debug_struct("Mapper")
            .field("codes", &codes)
            .field("unknown_code", &self.unknown_code)
            .finish()
    }
}

/// [`Lookup`] built from a plain function and a fallback code.
///
/// The function is asked for `code` first, then for `unknown_code` if it
/// returned `None`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use error_stamp::{Code, CoreError, CoreRecord, FnLookup, Lookup};
///
/// let only = Arc::new(CoreRecord::new(Code(100), "custom", "custom core error"));
/// let lookup = FnLookup::new(Code(100), move |code| {
///     (code == Code(100)).then(|| only.clone() as Arc<dyn CoreError>)
/// });
///
/// assert_eq!(lookup.lookup(Code::INTERNAL).unwrap().identifier(), "custom");
/// ```
pub struct FnLookup<F> {
    unknown_code: Code,
    resolve: F,
}

impl<F> FnLookup<F>
where
    F: Fn(Code) -> Option<CoreRef> + Send + Sync,
{
    /// Wraps `resolve`, retrying with `unknown_code` when it returns `None`.
    pub fn new(unknown_code: Code, resolve: F) -> Self {
        Self { unknown_code, resolve }
    }
}

impl<F> Lookup for FnLookup<F>
where
    F: Fn(Code) -> Option<CoreRef> + Send + Sync,
{
    fn lookup(&self, code: Code) -> Option<CoreRef> {
        (self.resolve)(code).or_else(|| (self.resolve)(self.unknown_code))
    }
}

impl<F> fmt::Debug for FnLookup<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnLookup").field("unknown_code", &self.unknown_code).finish_non_exhaustive()
    }
}

impl<L: Lookup + ?Sized> Lookup for Arc<L> {
    #[inline]
    fn lookup(&self, code: Code) -> Option<CoreRef> {
        (**self).lookup(code)
    }
}
