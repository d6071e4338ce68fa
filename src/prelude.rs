//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_annotate::prelude::*;
//!
//! fn load(path: &str) -> ChainResult<String> {
//!     std::fs::read_to_string(path).wrap_err_with(|| format!("loading {path}"))
//! }
//!
//! let err = load("/no/such/file").unwrap_err();
//! assert!(err.to_string().starts_with("loading /no/such/file: "));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`new_error!`], [`wrap!`]
//! - **Types**: [`ChainError`], [`ChainResult`], [`ErrorCode`]
//! - **Traits**: [`ResultExt`], [`ChainNode`]

pub use crate::{new_error, wrap};

pub use crate::types::{ChainError, ChainResult, ErrorCode};

pub use crate::traits::{ChainNode, ResultExt};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::TraceExt;
