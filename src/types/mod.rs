//! Chain nodes, the builder that creates them and their renderings.
//!
//! # Examples
//!
//! ```
//! use error_annotate::{ChainError, ErrorCode};
//!
//! let err = ChainError::wrap(ChainError::with_code(ErrorCode::BAD_REQUEST, "empty name"), "creating user");
//!
//! println!("{:#}", err);
//! // creating user
//! //    --- at src/main.rs:5 ---
//! // Caused by: empty name (code: 400)
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod annotator;
pub mod call_site;
pub mod chain_error;
pub mod error_code;
pub mod error_formatter;
pub mod path_cleanup;
pub mod report;

#[cfg(feature = "std")]
pub use annotator::BacktraceCapture;
pub use annotator::{Annotator, AnnotatorConfig};
pub use call_site::{short_function_name, CallSite};
pub use chain_error::{AnnotatedError, ChainError, LeafError, OpaqueError};
pub use error_code::ErrorCode;
pub use error_formatter::{ErrorFormatConfig, PlainFormat, QuotedFormat, VerboseFormat};
pub use path_cleanup::{PathCleanup, DEFAULT_SEARCH_PATH_VAR};
pub use report::{Report, ReportFrame};

/// SmallVec-backed collection for report frames.
///
/// Inline storage covers the common depth of a handful of annotations
/// without a heap allocation.
pub type ErrorVec<T> = SmallVec<[T; 4]>;

/// Result alias for functions returning an annotated chain.
pub type ChainResult<T> = Result<T, ChainError>;
