//! Key priority classification.
//!
//! Important keys survive capacity pressure: when an important key needs
//! room, only non-important entries are evicted to make space for it.

/// Keys that are always important in addition to any `*` prefixed key.
pub const IMPORTANT_KEYS: [&[u8]; 9] = [
    b"name",
    b"model",
    b"rate",
    b"topcolor",
    b"bottomcolor",
    b"cl_updaterate",
    b"cl_lw",
    b"cl_lc",
    b"cl_nopred",
];

/// Returns `true` for star keys and for the fixed allow-list in [`IMPORTANT_KEYS`].
///
/// # Example
///
/// ```
/// use icy_infostring::is_key_important;
///
/// assert!(is_key_important("*sid"));
/// assert!(is_key_important("topcolor"));
/// assert!(!is_key_important("skin"));
/// assert!(!is_key_important("Name")); // exact match only
/// ```
pub fn is_key_important(key: impl AsRef<[u8]>) -> bool {
    let key = key.as_ref();
    key.first() == Some(&b'*') || IMPORTANT_KEYS.iter().any(|&k| k == key)
}
