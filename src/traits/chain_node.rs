//! The capability set every chain node exposes to the walker.

use crate::types::alloc_type::{Cow, ToString};
use crate::types::{CallSite, ErrorCode};
use core::error::Error;
#[cfg(feature = "std")]
use std::backtrace::Backtrace;

/// A node of a singly-linked error chain.
///
/// [`cause`](ChainNode::cause) is the only required link; everything else
/// degrades to "absent". Implemented for [`ChainError`](crate::ChainError)
/// and for `dyn Error`, where the cause is [`Error::source`]:
///
/// ```
/// use error_annotate::walk::root_cause;
/// use error_annotate::{ChainError, ChainNode};
/// use std::error::Error;
///
/// let err = ChainError::wrap(std::io::Error::other("disk"), "saving");
/// let as_dyn: &(dyn Error + 'static) = &err;
/// assert_eq!(root_cause(as_dyn).message(), "disk");
/// ```
pub trait ChainNode {
    /// The next node inwards, or `None` at the root cause.
    fn cause(&self) -> Option<&Self>;

    /// This node's own message, without its causes.
    fn message(&self) -> Cow<'_, str>;

    fn code(&self) -> Option<ErrorCode> {
        None
    }

    fn call_site(&self) -> Option<&CallSite> {
        None
    }

    #[cfg(feature = "std")]
    fn backtrace(&self) -> Option<&Backtrace> {
        None
    }
}

impl ChainNode for dyn Error + 'static {
    #[inline]
    fn cause(&self) -> Option<&Self> {
        self.source()
    }

    fn message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}
