use error_annotate::{function_name, new_error, wrap, ChainError, ErrorCode};

#[test]
fn new_error_formats_message() {
    let err = new_error!("This is a new error {}", 6);
    assert_eq!(err, ChainError::new("This is a new error 6"));
    assert!(err.call_site().is_none());
}

#[test]
fn new_error_with_code() {
    let err = new_error!(code = ErrorCode::NOT_FOUND, "no user {}", "bob");
    assert_eq!(err.to_string(), "no user bob");
    assert_eq!(err.code(), Some(ErrorCode::NOT_FOUND));
}

#[test]
fn wrap_macro_records_file_line_and_function() {
    let (err, line) = (wrap!(new_error!("A"), "wrapping {} {}", 5, 6), line!());
    assert_eq!(err.to_string(), "wrapping 5 6: A");

    let site = err.call_site().unwrap();
    assert_eq!(site.file, file!());
    assert_eq!(site.line, line);
    assert!(site.function.ends_with("wrap_macro_records_file_line_and_function"));
    assert_eq!(
        site.to_string(),
        format!("{}:{} ({})", file!(), line, site.function)
    );
}

#[test]
fn wrap_macro_without_message_only_adds_site() {
    let err = wrap!(new_error!("A"));
    assert_eq!(err.to_string(), "A");
    assert_eq!(err.message(), "");
    assert!(err.call_site().unwrap().has_function());
}

#[test]
fn wrap_macro_accepts_foreign_errors() {
    let err = wrap!(std::io::Error::other("denied"), "opening");
    assert_eq!(err.to_string(), "opening: denied");
    assert!(err.downcast_ref::<std::io::Error>().is_some());
}

#[test]
fn function_name_strips_closures() {
    let from_closure = (|| function_name!())();
    assert!(from_closure.ends_with("function_name_strips_closures"));
    assert!(!from_closure.contains("{{closure}}"));
}

fn helper_that_wraps() -> ChainError {
    wrap!(new_error!("root"), "helper")
}

#[test]
fn wrap_macro_names_the_helper_not_the_test() {
    let err = helper_that_wraps();
    let function = err.call_site().unwrap().function;
    assert!(function.ends_with("helper_that_wraps"), "{function}");
}
