//! Annotation methods on `Result`.
//!
//! `Ok` values pass through untouched, which is the `Result` form of "wrapping
//! no error is a no-op". Each method records the location of its caller.
//!
//! # Examples
//!
//! ```
//! use error_annotate::{ChainError, ResultExt};
//!
//! fn read_config() -> Result<String, ChainError> {
//!     std::fs::read_to_string("/definitely/missing.toml").wrap_err("loading configuration")
//! }
//!
//! let err = read_config().unwrap_err();
//! assert!(err.to_string().starts_with("loading configuration: "));
//! assert!(err.downcast_ref::<std::io::Error>().is_some());
//! ```

use crate::traits::IntoChainError;
use crate::types::{Annotator, ChainError, ErrorCode};
use core::fmt::Display;

/// Adds annotations to the error side of a `Result`.
///
/// The implementations match on `self` instead of calling `map_err`:
/// closures do not forward the caller location.
pub trait ResultExt<T> {
    /// Wraps the error with `message`.
    fn wrap_err<M: Display>(self, message: M) -> Result<T, ChainError>;

    /// Wraps the error with a message built only on the error path.
    fn wrap_err_with<M, F>(self, f: F) -> Result<T, ChainError>
    where
        M: Display,
        F: FnOnce() -> M;

    /// Wraps the error with `message` and `code`.
    fn wrap_err_code<M: Display>(self, code: impl Into<ErrorCode>, message: M)
        -> Result<T, ChainError>;

    /// Records the call site without adding a message.
    fn with_stack(self) -> Result<T, ChainError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: IntoChainError,
{
    #[track_caller]
    #[inline]
    fn wrap_err<M: Display>(self, message: M) -> Result<T, ChainError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Annotator::DEFAULT.wrap(err, message)),
        }
    }

    #[track_caller]
    #[inline]
    fn wrap_err_with<M, F>(self, f: F) -> Result<T, ChainError>
    where
        M: Display,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Annotator::DEFAULT.wrap(err, f())),
        }
    }

    #[track_caller]
    #[inline]
    fn wrap_err_code<M: Display>(
        self,
        code: impl Into<ErrorCode>,
        message: M,
    ) -> Result<T, ChainError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Annotator::DEFAULT.wrap_with_code(err, code, message)),
        }
    }

    #[track_caller]
    #[inline]
    fn with_stack(self) -> Result<T, ChainError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Annotator::DEFAULT.with_stack(err)),
        }
    }
}
