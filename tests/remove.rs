use icy_infostring::InfoString;

fn info(data: &str) -> InfoString {
    InfoString::from_bytes(data, 256).unwrap()
}

#[test]
fn test_remove_first_middle_last() {
    let mut s = info("\\a\\1\\b\\2\\c\\3");
    assert!(s.remove_key("b"));
    assert_eq!(s.as_bytes(), b"\\a\\1\\c\\3");
    assert!(s.remove_key("c"));
    assert_eq!(s.as_bytes(), b"\\a\\1");
    assert!(s.remove_key("a"));
    assert_eq!(s.as_bytes(), b"");
}

#[test]
fn test_remove_then_lookup() {
    let mut s = info("\\name\\Bob\\model\\gordon");
    assert!(s.remove_key("model"));
    assert_eq!(s.value_for_key("model"), "");
    assert_eq!(s.value_for_key("name"), "Bob");
}

#[test]
fn test_remove_missing_leaves_buffer() {
    let mut s = info("\\name\\Bob\\model\\gordon");
    let before = s.clone();
    assert!(!s.remove_key("rate"));
    assert_eq!(s, before);
}

#[test]
fn test_remove_rejects_delimiter_and_empty() {
    let mut s = info("\\name\\Bob");
    assert!(!s.remove_key("na\\me"));
    assert!(!s.remove_key(""));
    assert_eq!(s.as_bytes(), b"\\name\\Bob");
}

#[test]
fn test_remove_compares_search_key_length_only() {
    let mut s = info("\\name\\Bob\\na\\x");
    // "na" is a prefix of "name", which comes first
    assert!(s.remove_key("na"));
    assert_eq!(s.as_bytes(), b"\\na\\x");
}

#[test]
fn test_remove_on_malformed_tail() {
    let mut s = info("\\name\\Bob\\model");
    assert!(!s.remove_key("model"));
    assert!(s.remove_key("name"));
    assert_eq!(s.as_bytes(), b"\\model");
}

#[test]
fn test_remove_without_leading_delimiter() {
    let mut s = info("a\\1\\b\\2");
    assert!(s.remove_key("a"));
    assert_eq!(s.as_bytes(), b"\\b\\2");
}

#[test]
fn test_remove_prefixed_keys() {
    let mut s = info("\\*sid\\1\\name\\Bob\\*hltv\\1\\model\\gordon\\*ver\\2");
    s.remove_prefixed_keys(b'*');
    assert_eq!(s.as_bytes(), b"\\name\\Bob\\model\\gordon");
}

#[test]
fn test_remove_prefixed_keys_everything() {
    let mut s = info("\\_a\\1\\_b\\2");
    s.remove_prefixed_keys(b'_');
    assert!(s.is_empty());
}

#[test]
fn test_remove_prefixed_keys_no_match() {
    let mut s = info("\\name\\Bob");
    s.remove_prefixed_keys(b'*');
    assert_eq!(s.as_bytes(), b"\\name\\Bob");

    let mut empty = InfoString::default();
    empty.remove_prefixed_keys(b'*');
    assert!(empty.is_empty());
}

#[test]
fn test_remove_prefixed_keys_stops_at_dangling_key() {
    let mut s = info("\\*a\\1\\name\\Bob\\*b");
    s.remove_prefixed_keys(b'*');
    assert_eq!(s.as_bytes(), b"\\name\\Bob\\*b");
}

#[test]
fn test_remove_empty_key_keeps_first_entry() {
    let mut s = info("\\a\\1\\b\\2");
    assert!(!s.remove_key(""));
    assert_eq!(s.as_bytes(), b"\\a\\1\\b\\2");
}
