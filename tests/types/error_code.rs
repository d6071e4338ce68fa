use error_annotate::{new_with_code, wrap, ChainError, ErrorCode};

#[test]
fn sentinel_and_taxonomy_values() {
    assert_eq!(ErrorCode::NO_CODE.value(), 65535);
    assert_eq!(ErrorCode::BAD_REQUEST.value(), 400);
    assert_eq!(ErrorCode::NOT_FOUND.value(), 404);
    assert_eq!(ErrorCode::default(), ErrorCode::NO_CODE);
    assert_eq!(ErrorCode::NOT_FOUND.to_string(), "404");
}

#[test]
fn explicit_no_code_is_unclassified() {
    let err = new_with_code(ErrorCode::NO_CODE, "plain");
    assert_eq!(err.code(), None);
    assert_eq!(err.error_code(), ErrorCode::NO_CODE);
}

#[test]
fn first_found_through_plain_wraps() {
    let root = new_with_code(ErrorCode::NOT_FOUND, "root");
    let chain = wrap(wrap(Some(root), "one"), "two").unwrap();
    assert_eq!(chain.error_code(), ErrorCode::NOT_FOUND);
}

#[test]
fn outermost_code_wins() {
    let root = ChainError::with_code(ErrorCode::NOT_FOUND, "root");
    let chain = ChainError::wrap_with_code(root, ErrorCode::BAD_REQUEST, "rejecting");
    assert_eq!(chain.error_code(), ErrorCode::BAD_REQUEST);
}
