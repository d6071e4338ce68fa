//! Chain traversal: root cause, code lookup and the node iterator.
//!
//! Every function here is generic over [`ChainNode`], so they apply to
//! [`ChainError`](crate::ChainError) chains and to `dyn core::error::Error`
//! source chains. None of them fail: missing information comes back as
//! `None` or [`ErrorCode::NO_CODE`].
//!
//! # Examples
//!
//! ```
//! use error_annotate::{cause, code, wrap, ChainError, ErrorCode};
//!
//! let err = wrap(Some(ChainError::with_code(ErrorCode::NOT_FOUND, "no such user")), "loading profile");
//! assert_eq!(code(err.as_ref()), ErrorCode::NOT_FOUND);
//! assert_eq!(cause(err.as_ref()).map(|c| c.to_string()).as_deref(), Some("no such user"));
//!
//! assert!(cause::<ChainError>(None).is_none());
//! assert_eq!(code::<ChainError>(None), ErrorCode::NO_CODE);
//! ```

use crate::traits::ChainNode;
use crate::types::ErrorCode;
use core::iter::FusedIterator;

/// Which node's code [`code_with`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodeLookup {
    /// The first explicit code walking from the outermost node inwards.
    #[default]
    FirstFound,
    /// Only the root cause's code; codes on annotations are ignored.
    CauseOnly,
}

/// Iterator over a chain, outermost node first, root cause last.
#[derive(Debug)]
pub struct Chain<'a, N: ?Sized> {
    next: Option<&'a N>,
}

impl<'a, N: ChainNode + ?Sized> Chain<'a, N> {
    #[inline]
    pub fn new(head: &'a N) -> Self {
        Self { next: Some(head) }
    }

    /// An empty iterator when `head` is `None`.
    #[inline]
    pub fn from_option(head: Option<&'a N>) -> Self {
        Self { next: head }
    }
}

impl<N: ?Sized> Clone for Chain<'_, N> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

impl<'a, N: ChainNode + ?Sized> Iterator for Chain<'a, N> {
    type Item = &'a N;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl<N: ChainNode + ?Sized> FusedIterator for Chain<'_, N> {}

/// Follows the cause relation until a node has none. A node without a
/// cause is its own root.
///
/// For [`ChainError`](crate::ChainError) an
/// [`OpaqueError`](crate::OpaqueError) has no cause, even when the foreign
/// error inside it reports a `source()`. Walking the same chain as
/// `&dyn Error` follows `source()` all the way down:
///
/// ```
/// use error_annotate::walk::root_cause;
/// use error_annotate::ChainError;
/// use std::error::Error;
///
/// let inner = ChainError::wrap(std::io::Error::other("disk"), "reading");
/// let err = ChainError::wrap(ChainError::opaque(inner), "saving");
///
/// assert_eq!(err.root_cause().message(), "reading: disk");
/// let as_dyn: &(dyn Error + 'static) = &err;
/// assert_eq!(root_cause(as_dyn).to_string(), "disk");
/// ```
pub fn root_cause<N: ChainNode + ?Sized>(err: &N) -> &N {
    let mut current = err;
    while let Some(next) = current.cause() {
        current = next;
    }
    current
}

/// [`root_cause`] lifted over absence: `None` in, `None` out. Adopted
/// foreign errors are terminal here too.
#[inline]
pub fn cause<N: ChainNode + ?Sized>(err: Option<&N>) -> Option<&N> {
    err.map(root_cause)
}

/// First explicit code in the chain, or [`ErrorCode::NO_CODE`].
#[inline]
pub fn code<N: ChainNode + ?Sized>(err: Option<&N>) -> ErrorCode {
    code_with(err, CodeLookup::FirstFound)
}

pub fn code_with<N: ChainNode + ?Sized>(err: Option<&N>, lookup: CodeLookup) -> ErrorCode {
    match err {
        Some(err) => code_of(err, lookup),
        None => ErrorCode::NO_CODE,
    }
}

pub(crate) fn code_of<N: ChainNode + ?Sized>(err: &N, lookup: CodeLookup) -> ErrorCode {
    let found = match lookup {
        CodeLookup::FirstFound => Chain::new(err).find_map(N::code),
        CodeLookup::CauseOnly => root_cause(err).code(),
    };
    found.unwrap_or(ErrorCode::NO_CODE)
}
