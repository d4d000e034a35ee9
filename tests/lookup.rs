use bstr::{BString, ByteSlice};
use icy_infostring::{InfoString, parser::value_for_key};

fn sample() -> InfoString {
    InfoString::from_bytes("\\name\\Bob\\model\\gordon\\topcolor\\30", 128).unwrap()
}

#[test]
fn test_value_for_key() {
    let info = sample();
    assert_eq!(info.value_for_key("name"), "Bob");
    assert_eq!(info.value_for_key("model"), "gordon");
    assert_eq!(info.value_for_key("topcolor"), "30");
}

#[test]
fn test_missing_key_is_empty() {
    let info = sample();
    assert_eq!(info.value_for_key("rate"), "");
    assert_eq!(info.get("rate"), None);
    assert!(!info.contains_key("rate"));
}

#[test]
fn test_exact_match_only() {
    let info = sample();
    assert_eq!(info.get("nam"), None);
    assert_eq!(info.get("names"), None);
    assert_eq!(info.get("Name"), None);
}

#[test]
fn test_first_duplicate_wins() {
    let info = InfoString::from_bytes("\\a\\1\\a\\2", 64).unwrap();
    assert_eq!(info.value_for_key("a"), "1");
}

#[test]
fn test_malformed_fails_closed() {
    // the key after the last value has no value of its own
    assert_eq!(value_for_key(b"\\name\\Bob\\model", b"model"), None);
    assert_eq!(value_for_key(b"\\name", b"name"), None);
    assert_eq!(value_for_key(b"", b"name"), None);
}

#[test]
fn test_empty_value_is_found() {
    assert_eq!(value_for_key(b"\\a\\\\b\\2", b"a"), Some(b"".as_bstr()));
    assert_eq!(value_for_key(b"\\a\\\\b\\2", b"b"), Some(b"2".as_bstr()));
}

#[test]
fn test_results_are_independent() {
    let info = sample();
    let values: Vec<BString> = ["name", "model", "topcolor", "name", "model"]
        .iter()
        .map(|key| info.value_for_key(key))
        .collect();
    // more than four results can be held at once
    assert_eq!(values, ["Bob", "gordon", "30", "Bob", "gordon"]);
}

#[test]
fn test_find_largest_key() {
    let info = InfoString::from_bytes("\\name\\VeryLongPlayerName\\skin\\red\\hat\\large", 128).unwrap();
    // name is important and skipped, hat/large (8) beats skin/red (7)
    assert_eq!(info.find_largest_key(), Some(BString::from("hat")));
}

#[test]
fn test_find_largest_key_first_wins_ties() {
    let info = InfoString::from_bytes("\\ab\\12\\cd\\34", 64).unwrap();
    assert_eq!(info.find_largest_key(), Some(BString::from("ab")));
}

#[test]
fn test_find_largest_key_none() {
    assert_eq!(InfoString::default().find_largest_key(), None);
    let info = InfoString::from_bytes("\\name\\Bob\\*sid\\1", 64).unwrap();
    assert_eq!(info.find_largest_key(), None);
}
