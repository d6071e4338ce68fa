//! Chain nodes: leaf errors, annotations and boxed foreign errors.
//!
//! A chain is a singly-linked list owned from the outside in: every
//! [`AnnotatedError`] holds the only reference to the node it wraps, so a
//! chain always ends after finitely many steps at a [`LeafError`] or an
//! [`OpaqueError`].

use crate::traits::{ChainNode, IntoChainError};
use crate::types::alloc_type::{Box, Cow, String, ToString};
use crate::types::error_formatter::{write_plain, PlainFormat, QuotedFormat, VerboseFormat};
use crate::types::{Annotator, CallSite, ErrorCode, Report};
use crate::walk::{self, Chain, CodeLookup};
use core::any::type_name;
use core::error::Error;
use core::fmt::{self, Display};
use core::iter;
use core::mem;
#[cfg(feature = "std")]
use std::backtrace::{Backtrace, BacktraceStatus};

/// Terminal node carrying a message and an optional code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeafError {
    pub(crate) message: String,
    pub(crate) code: Option<ErrorCode>,
}

impl LeafError {
    #[inline]
    pub fn new(message: impl Display) -> Self {
        Self { message: message.to_string(), code: None }
    }

    /// Creates a leaf with a code. Passing [`ErrorCode::NO_CODE`] is the
    /// same as calling [`LeafError::new`].
    #[inline]
    pub fn with_code(code: impl Into<ErrorCode>, message: impl Display) -> Self {
        Self { message: message.to_string(), code: code.into().explicit() }
    }

    /// Placeholder left behind when a node is unlinked; does not allocate.
    #[inline]
    pub(crate) const fn empty() -> Self {
        Self { message: String::new(), code: None }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }
}

impl Display for LeafError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for LeafError {}

/// Wrapping node: a message, an optional code and the call site that added
/// them, around the error it annotates.
#[derive(Debug)]
pub struct AnnotatedError {
    pub(crate) message: String,
    pub(crate) code: Option<ErrorCode>,
    pub(crate) site: Option<CallSite>,
    pub(crate) underlying: Box<ChainError>,
    #[cfg(feature = "std")]
    pub(crate) stack: Option<Backtrace>,
}

impl AnnotatedError {
    /// Message added by this annotation; empty for [`with_stack`](crate::with_stack).
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    #[inline]
    pub fn call_site(&self) -> Option<&CallSite> {
        self.site.as_ref()
    }

    #[inline]
    pub fn underlying(&self) -> &ChainError {
        &self.underlying
    }

    #[inline]
    pub fn into_underlying(mut self) -> ChainError {
        mem::replace(&mut *self.underlying, ChainError::Leaf(LeafError::empty()))
    }

    /// Backtrace captured by [`with_stack`](crate::with_stack), if any frames were recorded.
    #[cfg(feature = "std")]
    #[inline]
    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.stack.as_ref().filter(|bt| bt.status() == BacktraceStatus::Captured)
    }

    /// Sets (or overrides) the code of this annotation.
    #[inline]
    pub fn set_code(mut self, code: impl Into<ErrorCode>) -> Self {
        self.code = code.into().explicit();
        self
    }
}

/// Compares node by node without recursing, so arbitrarily deep chains
/// can be compared. Captured backtraces are ignored.
impl PartialEq for AnnotatedError {
    fn eq(&self, other: &Self) -> bool {
        let (mut lhs, mut rhs) = (self, other);
        loop {
            if lhs.message != rhs.message || lhs.code != rhs.code || lhs.site != rhs.site {
                return false;
            }
            match (&*lhs.underlying, &*rhs.underlying) {
                (ChainError::Annotated(l), ChainError::Annotated(r)) => {
                    lhs = l;
                    rhs = r;
                }
                (l, r) => return l == r,
            }
        }
    }
}

/// Unlinks the chain one node at a time; the default drop glue would
/// recurse once per annotation.
impl Drop for AnnotatedError {
    fn drop(&mut self) {
        let mut next = mem::replace(&mut *self.underlying, ChainError::Leaf(LeafError::empty()));
        while let ChainError::Annotated(mut annotated) = next {
            next = mem::replace(&mut *annotated.underlying, ChainError::Leaf(LeafError::empty()));
        }
    }
}

impl Eq for AnnotatedError {}

impl Display for AnnotatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let own = iter::once(Cow::Borrowed(self.message.as_str()));
        write_plain(f, own.chain(self.underlying.chain().map(ChainNode::message)))
    }
}

impl Error for AnnotatedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.underlying)
    }
}

/// A foreign error adopted into a chain. Always terminal: the walker does
/// not look past it, though its own `source()` stays reachable through
/// [`core::error::Error::source`].
#[derive(Debug)]
pub struct OpaqueError {
    type_name: &'static str,
    inner: Box<dyn Error + Send + Sync + 'static>,
}

impl OpaqueError {
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self { type_name: type_name::<E>(), inner: Box::new(error) }
    }

    /// Adopts an already boxed error. The recorded type name is the box's.
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self { type_name: type_name::<Box<dyn Error + Send + Sync>>(), inner: error }
    }

    #[inline]
    pub(crate) fn from_parts(
        type_name: &'static str,
        inner: Box<dyn Error + Send + Sync + 'static>,
    ) -> Self {
        Self { type_name, inner }
    }

    /// Type name of the adopted error, as reported by [`core::any::type_name`].
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub fn get_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }

    #[inline]
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }

    #[inline]
    pub fn into_inner(self) -> Box<dyn Error + Send + Sync + 'static> {
        self.inner
    }
}

/// Same type, same rendered message.
impl PartialEq for OpaqueError {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.inner.to_string() == other.inner.to_string()
    }
}

impl Eq for OpaqueError {}

impl Display for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl Error for OpaqueError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source()
    }
}

/// One node of an annotated error chain, and the handle application code
/// passes around.
///
/// `{}` renders the plain colon-joined form, `{:#}` the verbose multi-line
/// dump. Dropping, comparing, rendering and walking handle chains of any
/// depth; only the derived `Debug` output recurses once per node.
///
/// # Examples
///
/// ```
/// use error_annotate::{ChainError, ErrorCode};
///
/// let root = ChainError::with_code(ErrorCode::NOT_FOUND, "user 42 missing");
/// let err = ChainError::wrap(ChainError::wrap(root, "loading profile"), "rendering page");
///
/// assert_eq!(err.to_string(), "rendering page: loading profile: user 42 missing");
/// assert_eq!(err.root_cause().message(), "user 42 missing");
/// assert_eq!(err.error_code(), ErrorCode::NOT_FOUND);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub enum ChainError {
    Leaf(LeafError),
    Annotated(AnnotatedError),
    Opaque(OpaqueError),
}

impl ChainError {
    /// Creates a root error without a code.
    #[inline]
    pub fn new(message: impl Display) -> Self {
        Self::Leaf(LeafError::new(message))
    }

    /// Creates a root error with a code.
    #[inline]
    pub fn with_code(code: impl Into<ErrorCode>, message: impl Display) -> Self {
        Self::Leaf(LeafError::with_code(code, message))
    }

    /// Adopts a foreign error as a terminal node without inspecting it.
    #[inline]
    pub fn opaque<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Opaque(OpaqueError::new(error))
    }

    /// Wraps `err` with `message`, recording the caller's location.
    #[track_caller]
    #[inline]
    pub fn wrap(err: impl IntoChainError, message: impl Display) -> Self {
        Annotator::DEFAULT.wrap(err, message)
    }

    /// Wraps `err` with `message` and `code`, recording the caller's location.
    #[track_caller]
    #[inline]
    pub fn wrap_with_code(
        err: impl IntoChainError,
        code: impl Into<ErrorCode>,
        message: impl Display,
    ) -> Self {
        Annotator::DEFAULT.wrap_with_code(err, code, message)
    }

    /// Records the caller's location around `err` without adding a message.
    #[track_caller]
    #[inline]
    pub fn with_stack(err: impl IntoChainError) -> Self {
        Annotator::DEFAULT.with_stack(err)
    }

    /// Message of this node alone; empty for message-less annotations.
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            Self::Leaf(leaf) => Cow::Borrowed(leaf.message()),
            Self::Annotated(annotated) => Cow::Borrowed(annotated.message()),
            Self::Opaque(opaque) => Cow::Owned(opaque.to_string()),
        }
    }

    /// Code attached to this node alone. See [`error_code`](Self::error_code)
    /// for the chain-wide lookup.
    #[inline]
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Leaf(leaf) => leaf.code,
            Self::Annotated(annotated) => annotated.code,
            Self::Opaque(_) => None,
        }
    }

    #[inline]
    pub fn call_site(&self) -> Option<&CallSite> {
        match self {
            Self::Annotated(annotated) => annotated.call_site(),
            _ => None,
        }
    }

    /// The node this one wraps, if any.
    #[inline]
    pub fn underlying(&self) -> Option<&ChainError> {
        match self {
            Self::Annotated(annotated) => Some(annotated.underlying()),
            _ => None,
        }
    }

    /// Iterates the chain from this node down to the root cause.
    #[inline]
    pub fn chain(&self) -> Chain<'_, ChainError> {
        Chain::new(self)
    }

    /// The terminal node of the chain; `self` when nothing is wrapped.
    ///
    /// An adopted foreign error ends the chain even when it has its own
    /// `source()`; walk `&dyn Error` to follow those as well.
    #[inline]
    pub fn root_cause(&self) -> &ChainError {
        walk::root_cause(self)
    }

    /// Consumes the chain, returning its terminal node.
    pub fn into_root_cause(self) -> ChainError {
        let mut current = self;
        loop {
            match current {
                Self::Annotated(annotated) => current = annotated.into_underlying(),
                root => return root,
            }
        }
    }

    /// First explicit code found walking down from this node, or
    /// [`ErrorCode::NO_CODE`].
    #[inline]
    pub fn error_code(&self) -> ErrorCode {
        walk::code_of(self, CodeLookup::FirstFound)
    }

    #[inline]
    pub fn error_code_with(&self, lookup: CodeLookup) -> ErrorCode {
        walk::code_of(self, lookup)
    }

    /// Downcasts the root cause when it is an adopted foreign error.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        match self.root_cause() {
            Self::Opaque(opaque) => opaque.downcast_ref::<E>(),
            _ => None,
        }
    }

    #[inline]
    pub fn as_leaf(&self) -> Option<&LeafError> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    #[inline]
    pub fn as_annotated(&self) -> Option<&AnnotatedError> {
        match self {
            Self::Annotated(annotated) => Some(annotated),
            _ => None,
        }
    }

    #[inline]
    pub fn as_opaque(&self) -> Option<&OpaqueError> {
        match self {
            Self::Opaque(opaque) => Some(opaque),
            _ => None,
        }
    }

    /// Single-line renderer, colon-joined from outermost to innermost.
    #[must_use]
    #[inline]
    pub fn plain(&self) -> PlainFormat<'_, ChainError> {
        PlainFormat::new(self)
    }

    /// Multi-line renderer with call sites and `Caused by:` markers.
    #[must_use]
    #[inline]
    pub fn verbose(&self) -> VerboseFormat<'_, ChainError> {
        VerboseFormat::new(self)
    }

    /// Plain rendering, quoted and escaped.
    #[must_use]
    #[inline]
    pub fn quoted(&self) -> QuotedFormat<'_, ChainError> {
        QuotedFormat::new(self)
    }

    /// Verbose rendering as an owned string.
    #[must_use]
    pub fn dump(&self) -> String {
        self.verbose().to_string()
    }

    /// Owned, serializable snapshot of every node.
    #[must_use]
    pub fn report(&self) -> Report {
        Report::from_chain(self)
    }
}

impl From<LeafError> for ChainError {
    #[inline]
    fn from(leaf: LeafError) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<AnnotatedError> for ChainError {
    #[inline]
    fn from(annotated: AnnotatedError) -> Self {
        Self::Annotated(annotated)
    }
}

impl From<OpaqueError> for ChainError {
    #[inline]
    fn from(opaque: OpaqueError) -> Self {
        Self::Opaque(opaque)
    }
}

impl Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return Display::fmt(&self.plain(), f);
        }
        Display::fmt(&self.verbose(), f)
    }
}

impl Error for ChainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Leaf(_) => None,
            Self::Annotated(annotated) => annotated.source(),
            Self::Opaque(opaque) => opaque.source(),
        }
    }
}

impl ChainNode for ChainError {
    #[inline]
    fn cause(&self) -> Option<&Self> {
        self.underlying()
    }

    #[inline]
    fn code(&self) -> Option<ErrorCode> {
        ChainError::code(self)
    }

    #[inline]
    fn call_site(&self) -> Option<&CallSite> {
        ChainError::call_site(self)
    }

    #[inline]
    fn message(&self) -> Cow<'_, str> {
        ChainError::message(self)
    }

    #[cfg(feature = "std")]
    fn backtrace(&self) -> Option<&Backtrace> {
        self.as_annotated().and_then(AnnotatedError::backtrace)
    }
}
