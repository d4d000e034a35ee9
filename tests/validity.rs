use icy_infostring::{InfoString, parser::is_valid};

#[test]
fn test_valid_strings() {
    assert!(is_valid(b"\\name\\Bob"));
    assert!(is_valid(b"name\\Bob"));
    assert!(is_valid(b"\\name\\Bob\\model\\gordon"));
    // a trailing delimiter after a value is tolerated
    assert!(is_valid(b"\\name\\Bob\\"));
}

#[test]
fn test_dangling_key() {
    assert!(!is_valid(b"\\foo"));
    assert!(!is_valid(b"\\name\\Bob\\foo"));
}

#[test]
fn test_empty_value() {
    assert!(!is_valid(b"\\foo\\"));
    assert!(!is_valid(b"\\a\\\\b\\2"));
}

#[test]
fn test_empty_string_has_no_entries() {
    assert!(!is_valid(b""));
    assert!(!is_valid(b"\\"));
}

#[test]
fn test_oversize_fields() {
    let long = "k".repeat(127);
    assert!(!is_valid(format!("\\{long}\\v").as_bytes()));
    assert!(!is_valid(format!("\\k\\{long}").as_bytes()));

    let fits = "k".repeat(126);
    assert!(is_valid(format!("\\{fits}\\{fits}").as_bytes()));
}

#[test]
fn test_freshly_built_string_is_valid() {
    let mut info = InfoString::default();
    assert!(info.set_value_for_key("name", "Player"));
    assert!(info.set_value_for_key("model", "gordon"));
    assert!(info.set_value_for_star_key("*sid", "1"));
    assert!(info.is_valid());
}

#[test]
fn test_imported_garbage_is_invalid() {
    let info = InfoString::from_bytes("no delimiters at all", 64).unwrap();
    assert!(!info.is_valid());
}
