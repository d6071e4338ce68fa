use error_annotate::{cause, wrap, ChainError, ErrorCode, LeafError};
use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug, PartialEq)]
struct CustomError(&'static str);

impl fmt::Display for CustomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Error for CustomError {}

#[test]
fn cause_table() {
    let cases: Vec<(Option<ChainError>, Option<ChainError>)> = vec![
        (None, None),
        (Some(ChainError::new("msg")), Some(ChainError::new("msg"))),
        (wrap(Some(ChainError::new("msg1")), "msg2"), Some(ChainError::new("msg1"))),
        (Some(ChainError::opaque(CustomError("msg"))), Some(ChainError::opaque(CustomError("msg")))),
        (wrap(Some(CustomError("msg1")), "msg2"), Some(ChainError::opaque(CustomError("msg1")))),
    ];

    for (err, expected) in cases {
        assert_eq!(cause(err.as_ref()), expected.as_ref());
    }
}

#[test]
fn leaf_is_its_own_cause() {
    let leaf = ChainError::new("root");
    assert!(std::ptr::eq(leaf.root_cause(), &leaf));
}

#[test]
fn wrapping_preserves_root_cause() {
    let e = ChainError::wrap(ChainError::new("root"), "one");
    let expected = e.root_cause().message().into_owned();
    let w = ChainError::wrap(e, "two");
    assert_eq!(w.root_cause().message(), expected);
}

#[test]
fn foreign_errors_are_boxed_and_recoverable() {
    let err = ChainError::wrap(io::Error::new(io::ErrorKind::NotFound, "config.toml"), "loading");

    let opaque = err.root_cause().as_opaque().expect("opaque root");
    assert_eq!(opaque.type_name(), std::any::type_name::<io::Error>());
    assert_eq!(err.downcast_ref::<io::Error>().map(io::Error::kind), Some(io::ErrorKind::NotFound));
    assert_eq!(err.downcast_ref::<CustomError>(), None);
}

#[test]
fn chain_aware_values_are_adopted_not_boxed() {
    let inner = ChainError::wrap(ChainError::new("root"), "inner");
    let outer = ChainError::wrap(inner, "outer");

    assert_eq!(outer.chain().count(), 3);
    assert!(outer.root_cause().as_leaf().is_some());

    let from_leaf = ChainError::wrap(LeafError::new("leaf"), "outer");
    assert!(from_leaf.underlying().and_then(ChainError::as_leaf).is_some());
}

#[test]
fn empty_message_keeps_plain_rendering_non_empty() {
    let err = ChainError::wrap(ChainError::wrap(ChainError::new("A"), ""), "");
    assert_eq!(err.to_string(), "A");
}

#[test]
fn error_source_walks_annotations() {
    let err = ChainError::wrap(ChainError::new("A"), "B");
    let source = err.source().expect("annotated node has a source");
    assert_eq!(source.to_string(), "A");
    assert!(source.source().is_none());
}

#[test]
fn set_code_on_annotation() {
    let err = ChainError::wrap(ChainError::new("A"), "B");
    let ChainError::Annotated(annotated) = err else {
        panic!("expected annotation");
    };
    let coded = ChainError::from(annotated.set_code(ErrorCode::BAD_REQUEST));
    assert_eq!(coded.code(), Some(ErrorCode::BAD_REQUEST));
    assert_eq!(coded.error_code(), ErrorCode::BAD_REQUEST);
}

#[test]
fn chain_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<ChainError>();
}
