use error_annotate::{with_stack, ChainError, ErrorCode, ErrorFormatConfig};

#[test]
fn plain_rendering_joins_outermost_first() {
    let err = ChainError::wrap(ChainError::wrap(ChainError::new("A"), "B"), "C");
    assert_eq!(err.to_string(), "C: B: A");
    assert_eq!(err.plain().to_string(), "C: B: A");
}

#[test]
fn plain_rendering_skips_empty_segments() {
    let err = ChainError::wrap(ChainError::with_stack(ChainError::new("A")), "C");
    assert_eq!(err.to_string(), "C: A");
}

#[test]
fn quoted_rendering() {
    let err = ChainError::wrap(ChainError::wrap(ChainError::new("A"), "B"), "C");
    assert_eq!(err.quoted().to_string(), "\"C: B: A\"");

    let tricky = ChainError::new("say \"hi\"\n");
    assert_eq!(tricky.quoted().to_string(), r#""say \"hi\"\n""#);
}

#[test]
fn verbose_rendering_lists_every_node_with_sites() {
    let a = ChainError::new("A");
    let (b, line_b) = (ChainError::wrap(a, "B"), line!());
    let (c, line_c) = (ChainError::wrap(b, "C"), line!());

    let expected = format!(
        "C\n   --- at {file}:{line_c} ---\nCaused by: B\n   --- at {file}:{line_b} ---\nCaused by: A",
        file = file!()
    );
    assert_eq!(format!("{:#}", c), expected);
    assert_eq!(c.dump(), expected);
}

#[test]
fn verbose_rendering_omits_marker_for_empty_messages() {
    let (stacked, line_s) = (with_stack(Some(ChainError::new("A"))).unwrap(), line!());
    let (c, line_c) = (ChainError::wrap(stacked, "C"), line!());

    let expected = format!(
        "C\n   --- at {file}:{line_c} ---\n   --- at {file}:{line_s} ---\nCaused by: A",
        file = file!()
    );
    assert_eq!(c.dump(), expected);
}

#[test]
fn verbose_rendering_shows_codes() {
    let root = ChainError::with_code(ErrorCode::NOT_FOUND, "A");
    let err = ChainError::wrap(root, "B");

    let dump = err.verbose().show_call_sites(false).to_string();
    assert_eq!(dump, "B\nCaused by: A (code: 404)");

    let hidden = err.verbose().show_call_sites(false).show_code(false).to_string();
    assert_eq!(hidden, "B\nCaused by: A");
}

#[test]
fn verbose_rendering_custom_marker_and_indent() {
    let (err, line) = (ChainError::wrap(ChainError::new("A"), "B"), line!());

    let dump = err.verbose().cause_marker("<- ").indent("\t").to_string();
    assert_eq!(dump, format!("B\n\t--- at {}:{} ---\n<- A", file!(), line));
}

#[test]
fn messages_only_config() {
    let err = ChainError::wrap(ChainError::with_code(ErrorCode::BAD_REQUEST, "A"), "B");
    let dump = err.verbose().with_config(ErrorFormatConfig::messages_only()).to_string();
    assert_eq!(dump, "B\nCaused by: A");
}

#[test]
fn verbose_rendering_of_lone_leaf() {
    assert_eq!(format!("{:#}", ChainError::new("A")), "A");
}

#[test]
fn verbose_rendering_of_foreign_root() {
    let err = ChainError::wrap(std::io::Error::other("disk full"), "B");
    let dump = err.verbose().show_call_sites(false).to_string();
    assert_eq!(dump, "B\nCaused by: disk full");
}
