use error_annotate::{ChainError, IntoChainError, LeafError, OpaqueError};
use std::io;

#[test]
fn chain_error_is_adopted_as_is() {
    let original = ChainError::wrap(ChainError::new("A"), "B");
    let expected_site = *original.call_site().unwrap();

    let adopted = original.into_chain_error();
    assert_eq!(adopted.call_site(), Some(&expected_site));
    assert_eq!(adopted.chain().count(), 2);
}

#[test]
fn leaf_is_adopted_as_leaf() {
    let adopted = LeafError::with_code(404u32, "gone").into_chain_error();
    assert_eq!(adopted.as_leaf(), Some(&LeafError::with_code(404u32, "gone")));
}

#[test]
fn foreign_error_becomes_opaque() {
    let adopted = io::Error::other("disk").into_chain_error();
    let opaque = adopted.as_opaque().expect("foreign errors are boxed");
    assert_eq!(opaque.to_string(), "disk");
    assert!(opaque.downcast_ref::<io::Error>().is_some());
}

#[test]
fn boxed_dyn_error_can_be_adopted() {
    let boxed: Box<dyn std::error::Error + Send + Sync> = "plain message".into();
    let err = ChainError::wrap(error_annotate::OpaqueError::from_boxed(boxed), "context");
    assert_eq!(err.to_string(), "context: plain message");
}

#[test]
fn opaque_error_is_not_boxed_twice() {
    let opaque = OpaqueError::new(io::Error::other("disk"));
    let err = ChainError::wrap(opaque, "saving");

    let root = err.root_cause().as_opaque().expect("root stays opaque");
    assert_eq!(root.type_name(), std::any::type_name::<io::Error>());
    assert_eq!(err.downcast_ref::<io::Error>().map(ToString::to_string).as_deref(), Some("disk"));
}

#[test]
fn opaque_chain_error_is_adopted_directly() {
    let adopted = ChainError::opaque(io::Error::other("disk")).into_chain_error();
    assert!(adopted.downcast_ref::<io::Error>().is_some());
    assert_eq!(adopted.as_opaque().unwrap().type_name(), std::any::type_name::<io::Error>());
}
