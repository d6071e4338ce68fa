//! Free-function entry points of the chain builder.
//!
//! These take and return `Option` so "no error" flows through untouched:
//! wrapping `None` yields `None`. Each records the location of its caller
//! through [`Annotator::DEFAULT`].
//!
//! # Examples
//!
//! ```
//! use error_annotate::{new, wrap, ChainError};
//!
//! fn lookup(found: bool) -> Option<ChainError> {
//!     if found { None } else { Some(new("no row for id 7")) }
//! }
//!
//! assert!(wrap(lookup(true), "loading user").is_none());
//!
//! let err = wrap(lookup(false), "loading user").unwrap();
//! assert_eq!(err.to_string(), "loading user: no row for id 7");
//! ```

use crate::traits::IntoChainError;
use crate::types::{Annotator, ChainError, ErrorCode};
use core::fmt::Display;

/// Creates a root error without a code.
#[inline]
pub fn new(message: impl Display) -> ChainError {
    ChainError::new(message)
}

/// Creates a root error carrying `code`.
#[inline]
pub fn new_with_code(code: impl Into<ErrorCode>, message: impl Display) -> ChainError {
    ChainError::with_code(code, message)
}

/// Wraps `err` with `message`; `None` stays `None`.
#[track_caller]
#[inline]
pub fn wrap<E: IntoChainError>(err: Option<E>, message: impl Display) -> Option<ChainError> {
    match err {
        Some(err) => Some(Annotator::DEFAULT.wrap(err, message)),
        None => None,
    }
}

/// Wraps `err` with `message` and `code`; `None` stays `None`.
#[track_caller]
#[inline]
pub fn wrap_with_code<E: IntoChainError>(
    err: Option<E>,
    code: impl Into<ErrorCode>,
    message: impl Display,
) -> Option<ChainError> {
    match err {
        Some(err) => Some(Annotator::DEFAULT.wrap_with_code(err, code, message)),
        None => None,
    }
}

/// Records the caller's location around `err`; `None` stays `None`.
#[track_caller]
#[inline]
pub fn with_stack<E: IntoChainError>(err: Option<E>) -> Option<ChainError> {
    match err {
        Some(err) => Some(Annotator::DEFAULT.with_stack(err)),
        None => None,
    }
}
