//! Read-only scanning of serialized info strings.
//!
//! An info string is a sequence of `\key\value` runs:
//!
//! ```text
//! \name\Player\model\gordon\topcolor\30
//! ```
//!
//! The leading backslash is optional and no trailing delimiter is required.
//! Every function in this module works on raw bytes, so it can be used on
//! text received from the outside before (or instead of) importing it into an
//! [`InfoString`](crate::InfoString).
//!
//! Fields longer than [`MAX_KV_LEN`] bytes are cut at that length while
//! scanning; the byte following the cut is consumed as if it were the
//! delimiter. Malformed input never panics: lookups fail closed, validation
//! returns `false` and iteration stops at the first dangling key.

use std::ops::Range;

use bstr::{BStr, BString, ByteSlice};

use crate::{
    is_key_important,
    limits::{DELIMITER, MAX_KV_LEN, PRINT_KEY_WIDTH},
    util::column_pad,
};

const NULL_VALUE: &[u8] = b"(null)";

/// Byte cursor over an info string.
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Skips a single delimiter if one is at the cursor.
    pub fn skip_delimiter(&mut self) {
        if self.data.get(self.pos) == Some(&DELIMITER) {
            self.pos += 1;
        }
    }

    /// Steps over the byte that terminated the last field.
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Reads up to [`MAX_KV_LEN`] bytes until the next delimiter or the end.
    pub fn take_field(&mut self) -> &'a [u8] {
        let start = self.pos;
        while self.pos - start < MAX_KV_LEN
            && self.pos < self.data.len()
            && self.data[self.pos] != DELIMITER
        {
            self.pos += 1;
        }
        &self.data[start..self.pos]
    }
}

/// A single entry of an info string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pair<'a> {
    pub key: &'a BStr,
    /// `None` if the string ended right after the key.
    pub value: Option<&'a BStr>,
}

impl Pair<'_> {
    /// Renders the entry the way the console shows it: the key padded to
    /// [`PRINT_KEY_WIDTH`] columns followed by the value, or `(null)` for a
    /// dangling key.
    pub fn display_line(&self) -> BString {
        let mut line = column_pad(self.key, PRINT_KEY_WIDTH);
        match self.value {
            Some(value) => line.extend_from_slice(value),
            None => line.extend_from_slice(NULL_VALUE),
        }
        line
    }
}

/// Lazy iterator over the entries of an info string.
///
/// Created by [`pairs`] or [`InfoString::pairs`](crate::InfoString::pairs).
pub struct Pairs<'a> {
    cursor: Cursor<'a>,
    done: bool,
}

impl<'a> Iterator for Pairs<'a> {
    type Item = Pair<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.cursor.is_at_end() {
            return None;
        }
        let key = self.cursor.take_field();
        if self.cursor.is_at_end() {
            self.done = true;
            return Some(Pair { key: key.as_bstr(), value: None });
        }
        self.cursor.advance();
        let value = self.cursor.take_field();
        self.cursor.advance();
        Some(Pair {
            key: key.as_bstr(),
            value: Some(value.as_bstr()),
        })
    }
}

/// Iterates the entries of `data` in order.
///
/// # Example
///
/// ```
/// use icy_infostring::parser::pairs;
///
/// let keys: Vec<_> = pairs(b"\\name\\Bob\\rate\\25000")
///     .map(|pair| pair.key.to_string())
///     .collect();
/// assert_eq!(keys, ["name", "rate"]);
/// ```
pub fn pairs(data: &[u8]) -> Pairs<'_> {
    let mut cursor = Cursor::new(data);
    cursor.skip_delimiter();
    Pairs { cursor, done: false }
}

/// Checks `data` for structural problems.
///
/// Every key must be followed by a non-empty value and no key or value may
/// reach [`MAX_KV_LEN`] bytes. A string without any entry is not valid.
///
/// # Example
///
/// ```
/// use icy_infostring::parser::is_valid;
///
/// assert!(is_valid(b"\\name\\Bob"));
/// assert!(!is_valid(b"\\name\\Bob\\model"));
/// assert!(!is_valid(b"\\name\\"));
/// assert!(!is_valid(b""));
/// ```
pub fn is_valid(data: &[u8]) -> bool {
    let mut cursor = Cursor::new(data);
    let mut has_value = false;
    cursor.skip_delimiter();

    while !cursor.is_at_end() {
        let key = cursor.take_field();
        if cursor.is_at_end() || key.len() >= MAX_KV_LEN {
            return false;
        }
        cursor.advance();

        let value = cursor.take_field();
        if value.is_empty() || value.len() >= MAX_KV_LEN {
            return false;
        }
        has_value = true;
        cursor.advance();
    }
    has_value
}

/// Returns the value of the first entry whose key equals `key`.
///
/// Returns `None` when the key is missing or the scan runs off the end of a
/// malformed string before finding it.
pub fn value_for_key<'a>(data: &'a [u8], key: &[u8]) -> Option<&'a BStr> {
    let mut cursor = Cursor::new(data);
    cursor.skip_delimiter();

    loop {
        let pkey = cursor.take_field();
        if cursor.is_at_end() {
            return None;
        }
        cursor.advance();

        let value = cursor.take_field();
        if pkey == key {
            return Some(value.as_bstr());
        }
        if cursor.is_at_end() {
            return None;
        }
        cursor.advance();
    }
}

/// Returns the key of the largest entry (key length plus value length) that
/// is not important. The first entry wins on ties.
pub fn find_largest_key(data: &[u8]) -> Option<BString> {
    let mut largest: Option<&BStr> = None;
    let mut largest_size = 0;

    for pair in pairs(data) {
        let Some(value) = pair.value else {
            break;
        };
        let size = pair.key.len() + value.len();
        if size > largest_size && !is_key_important(pair.key) {
            largest = Some(pair.key);
            largest_size = size;
        }
    }
    largest.map(BString::from)
}

/// Locates the `\key\value` run for removal.
///
/// Keys are compared on the first `min(key.len(), MAX_KV_LEN)` bytes only, so
/// `na` finds `name`. The range starts at the delimiter in front of the key
/// and ends in front of the delimiter of the following entry.
pub(crate) fn find_entry(data: &[u8], key: &[u8]) -> Option<Range<usize>> {
    let cmp = &key[..key.len().min(MAX_KV_LEN)];
    find_entry_by(data, |pkey| pkey.starts_with(cmp))
}

/// Like [`find_entry`] but only an identical key matches.
pub(crate) fn find_exact_entry(data: &[u8], key: &[u8]) -> Option<Range<usize>> {
    find_entry_by(data, |pkey| pkey == key)
}

fn find_entry_by(data: &[u8], matches: impl Fn(&[u8]) -> bool) -> Option<Range<usize>> {
    let mut cursor = Cursor::new(data);

    loop {
        let start = cursor.pos();
        cursor.skip_delimiter();

        let pkey = cursor.take_field();
        if cursor.is_at_end() {
            return None;
        }
        cursor.advance();
        cursor.take_field();

        if matches(pkey) {
            return Some(start..cursor.pos());
        }
        if cursor.is_at_end() {
            return None;
        }
    }
}
