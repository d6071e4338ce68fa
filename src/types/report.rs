//! Owned snapshot of a chain for logs and wire formats.

use crate::traits::ChainNode;
use crate::types::alloc_type::{Cow, String, ToString};
use crate::types::error_formatter::write_plain;
use crate::types::{ErrorCode, ErrorVec};
use crate::walk::Chain;
use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One node of a [`Report`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportFrame {
    pub message: String,
    pub code: Option<ErrorCode>,
    pub file: Option<String>,
    pub function: Option<String>,
    pub line: Option<u32>,
}

impl ReportFrame {
    fn from_node<N: ChainNode + ?Sized>(node: &N) -> Self {
        let site = node.call_site();
        Self {
            message: node.message().into_owned(),
            code: node.code(),
            file: site.map(|site| site.file.to_string()),
            function: site.filter(|site| site.has_function()).map(|site| site.function.to_string()),
            line: site.map(|site| site.line),
        }
    }
}

/// Every node of a chain, outermost first, detached from the error value.
///
/// ```
/// use error_annotate::{ChainError, ErrorCode};
///
/// let err = ChainError::wrap(ChainError::with_code(ErrorCode::NOT_FOUND, "gone"), "fetching");
/// let report = err.report();
///
/// assert_eq!(report.len(), 2);
/// assert_eq!(report.code(), ErrorCode::NOT_FOUND);
/// assert_eq!(report.to_string(), "fetching: gone");
/// assert_eq!(report.frames[0].line, Some(line!() - 6));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    pub frames: ErrorVec<ReportFrame>,
}

impl Report {
    pub fn from_chain<N: ChainNode + ?Sized>(err: &N) -> Self {
        Self { frames: Chain::new(err).map(ReportFrame::from_node).collect() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The innermost frame.
    #[inline]
    pub fn cause(&self) -> Option<&ReportFrame> {
        self.frames.last()
    }

    /// First explicit code, outermost first.
    pub fn code(&self) -> ErrorCode {
        self.frames.iter().find_map(|frame| frame.code).unwrap_or(ErrorCode::NO_CODE)
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, ReportFrame> {
        self.frames.iter()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_plain(f, self.frames.iter().map(|frame| Cow::Borrowed(frame.message.as_str())))
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a ReportFrame;
    type IntoIter = core::slice::Iter<'a, ReportFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
