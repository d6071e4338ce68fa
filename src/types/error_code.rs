//! Numeric classification attached to errors for programmatic branching.

use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integer code attached to an error and carried up the chain.
///
/// The value space is open: applications define their own taxonomy. Only
/// [`ErrorCode::NO_CODE`] is reserved and means "unclassified"; avoid using
/// `65535` as a meaningful code.
///
/// # Examples
///
/// ```
/// use error_annotate::ErrorCode;
///
/// assert_eq!(ErrorCode::from(404), ErrorCode::NOT_FOUND);
/// assert!(ErrorCode::NO_CODE.is_no_code());
/// assert!(!ErrorCode::BAD_REQUEST.is_no_code());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorCode(pub u32);

impl ErrorCode {
    /// Sentinel for errors without an attached code (`u16::MAX`).
    pub const NO_CODE: ErrorCode = ErrorCode(u16::MAX as u32);
    /// Signals a user error.
    pub const BAD_REQUEST: ErrorCode = ErrorCode(400);
    /// Signals an unavailable resource.
    pub const NOT_FOUND: ErrorCode = ErrorCode(404);

    #[inline]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_no_code(self) -> bool {
        self.0 == Self::NO_CODE.0
    }

    /// Maps the sentinel to `None`, so "explicitly unclassified" and
    /// "never classified" are stored the same way.
    #[inline]
    pub(crate) fn explicit(self) -> Option<Self> {
        if self.is_no_code() {
            None
        } else {
            Some(self)
        }
    }
}

impl Default for ErrorCode {
    #[inline]
    fn default() -> Self {
        Self::NO_CODE
    }
}

impl From<u32> for ErrorCode {
    #[inline]
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl From<ErrorCode> for u32 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
