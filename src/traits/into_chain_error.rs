//! Conversion of arbitrary errors into chain nodes.

use crate::types::alloc_type::Box;
use crate::types::{AnnotatedError, ChainError, LeafError, OpaqueError};
use core::any::type_name;
use core::error::Error;

/// Converts a value into the [`ChainError`] an annotation will wrap.
///
/// Chain-aware values ([`ChainError`], [`LeafError`], [`AnnotatedError`],
/// [`OpaqueError`]) are adopted unchanged so their causes, codes and call sites stay
/// walkable. Any other error is boxed into an [`OpaqueError`], which ends
/// the chain.
///
/// ```
/// use error_annotate::{ChainError, IntoChainError};
///
/// let adopted = ChainError::new("root").into_chain_error();
/// assert!(adopted.as_leaf().is_some());
///
/// let boxed = std::fmt::Error.into_chain_error();
/// assert!(boxed.as_opaque().is_some());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be annotated",
    label = "this type does not implement `core::error::Error + Send + Sync + 'static`",
    note = "create a root error with `ChainError::new` or `new_error!` instead"
)]
pub trait IntoChainError {
    fn into_chain_error(self) -> ChainError;
}

impl<E> IntoChainError for E
where
    E: Error + Send + Sync + 'static,
{
    fn into_chain_error(self) -> ChainError {
        let boxed: Box<dyn Error + Send + Sync + 'static> = Box::new(self);
        let boxed = match boxed.downcast::<ChainError>() {
            Ok(chain) => return *chain,
            Err(other) => other,
        };
        let boxed = match boxed.downcast::<AnnotatedError>() {
            Ok(annotated) => return ChainError::Annotated(*annotated),
            Err(other) => other,
        };
        let boxed = match boxed.downcast::<LeafError>() {
            Ok(leaf) => return ChainError::Leaf(*leaf),
            Err(other) => other,
        };
        match boxed.downcast::<OpaqueError>() {
            Ok(opaque) => ChainError::Opaque(*opaque),
            Err(other) => ChainError::Opaque(OpaqueError::from_parts(type_name::<E>(), other)),
        }
    }
}
