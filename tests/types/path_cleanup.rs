use error_annotate::{Annotator, ChainError, PathCleanup};
use std::env;

#[test]
fn strip_prefix_applies_to_captured_sites() {
    let annotator = Annotator::new().path_cleanup(PathCleanup::StripPrefix("tests"));
    let err = annotator.wrap(ChainError::new("A"), "B");
    let expected = file!().strip_prefix("tests").unwrap().trim_start_matches(['/', '\\']);
    assert_eq!(err.call_site().unwrap().file, expected);
}

#[test]
fn non_matching_prefix_leaves_path_unchanged() {
    let cleanup = PathCleanup::StripPrefix("/nowhere");
    assert_eq!(cleanup.apply("src/lib.rs"), "src/lib.rs");
}

#[test]
fn search_path_prefers_longest_entry() {
    const VAR: &str = "ERROR_ANNOTATE_TEST_SEARCH_LONGEST";
    let value = env::join_paths(["/work", "/work/project"]).unwrap();
    env::set_var(VAR, value);

    let cleanup = PathCleanup::SearchPathEnv(VAR);
    assert_eq!(cleanup.apply("/work/project/src/lib.rs"), "src/lib.rs");
    assert_eq!(cleanup.apply("/work/other/src/lib.rs"), "other/src/lib.rs");
    assert_eq!(cleanup.apply("/elsewhere/src/lib.rs"), "/elsewhere/src/lib.rs");
}

#[test]
fn search_path_unset_leaves_path_unchanged() {
    const VAR: &str = "ERROR_ANNOTATE_TEST_SEARCH_UNSET";
    env::remove_var(VAR);
    assert_eq!(PathCleanup::SearchPathEnv(VAR).apply("/work/src/lib.rs"), "/work/src/lib.rs");
}

#[test]
fn search_path_never_climbs_upward() {
    const VAR: &str = "ERROR_ANNOTATE_TEST_SEARCH_SIBLING";
    env::set_var(VAR, "/work/project");
    assert_eq!(
        PathCleanup::SearchPathEnv(VAR).apply("/work/project-old/lib.rs"),
        "/work/project-old/lib.rs"
    );
}
