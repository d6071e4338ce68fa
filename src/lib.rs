//! Error annotation with messages, codes and call sites.
//!
//! Errors are annotated as they propagate: every wrap adds a message, an
//! optional [`ErrorCode`] and the [`CallSite`] that added it, around the
//! error it received. The original error stays at the end of the chain for
//! later inspection.
//!
//! Two halves:
//!
//! - **Building** ([`annotate`], [`Annotator`], [`ResultExt`], [`wrap!`]):
//!   root errors and wrapping nodes. Wrapping "no error" is a no-op.
//! - **Walking** ([`walk`], [`ChainNode`]): the root cause, the first code,
//!   and plain / verbose / quoted renderings.
//!
//! # Examples
//!
//! ## Annotating as errors propagate
//!
//! ```
//! use error_annotate::prelude::*;
//!
//! fn query(id: u32) -> ChainResult<String> {
//!     Err(new_error!(code = ErrorCode::NOT_FOUND, "no row for id {}", id))
//! }
//!
//! fn load_user(id: u32) -> ChainResult<String> {
//!     query(id).wrap_err("loading user")
//! }
//!
//! fn handle(id: u32) -> ChainResult<String> {
//!     load_user(id).wrap_err_with(|| format!("handling request {id}"))
//! }
//!
//! let err = handle(7).unwrap_err();
//! assert_eq!(err.to_string(), "handling request 7: loading user: no row for id 7");
//! assert_eq!(err.error_code(), ErrorCode::NOT_FOUND);
//! assert_eq!(err.root_cause().message(), "no row for id 7");
//! ```
//!
//! ## Verbose dump
//!
//! ```
//! use error_annotate::ChainError;
//!
//! let err = ChainError::wrap(ChainError::new("A"), "B");
//! let dump = format!("{:#}", err);
//!
//! let mut lines = dump.lines();
//! assert_eq!(lines.next(), Some("B"));
//! assert!(lines.next().unwrap().trim_start().starts_with("--- at "));
//! assert_eq!(lines.next(), Some("Caused by: A"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Free-function chain builder entry points
pub mod annotate;
/// Formatting macros for creating and wrapping errors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits at the seams of the chain
pub mod traits;
/// Chain nodes, builder configuration and renderers
pub mod types;
/// Chain traversal
pub mod walk;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use annotate::{new, new_with_code, with_stack, wrap, wrap_with_code};
pub use traits::{ChainNode, IntoChainError, ResultExt};
#[cfg(feature = "std")]
pub use types::BacktraceCapture;
pub use types::{
    AnnotatedError, Annotator, AnnotatorConfig, CallSite, ChainError, ChainResult, ErrorCode,
    ErrorFormatConfig, LeafError, OpaqueError, PathCleanup, Report, ReportFrame,
    DEFAULT_SEARCH_PATH_VAR,
};
pub use walk::{cause, code, code_with, CodeLookup};

#[cfg(feature = "tracing")]
pub use tracing_ext::TraceExt;
