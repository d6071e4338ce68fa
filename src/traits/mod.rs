//! Traits at the seams of the chain.
//!
//! - [`ChainNode`]: what the walker needs from a node (cause, message, code, call site)
//! - [`IntoChainError`]: what may be wrapped
//! - [`ResultExt`]: annotation methods on `Result`
//!
//! # Examples
//!
//! ```
//! use error_annotate::traits::{ChainNode, ResultExt};
//! use error_annotate::ChainError;
//!
//! let result: Result<(), ChainError> = Err(ChainError::new("timeout"));
//! let err = result.wrap_err("calling upstream").unwrap_err();
//! assert_eq!(ChainNode::message(err.cause().unwrap()), "timeout");
//! ```

pub mod chain_node;
pub mod into_chain_error;
pub mod result_ext;

pub use chain_node::ChainNode;
pub use into_chain_error::IntoChainError;
pub use result_ext::ResultExt;
