//! Owned, size bounded info string buffer.
//!
//! [`InfoString`] holds a serialized `\key\value\key\value` string together
//! with the maximum number of bytes it may grow to. All mutations happen in
//! place and keep the buffer within that bound:
//!
//! - [`remove_key`](InfoString::remove_key) splices a single `\key\value` run
//!   out of the buffer.
//! - [`set_value_for_key`](InfoString::set_value_for_key) replaces a key and,
//!   when the buffer is full, either drops the new value or (for important
//!   keys) evicts the largest unimportant entries until it fits.
//!
//! # Capacity Exhaustion
//!
//! Running out of room is not an error. The boolean setters report `true` for
//! every well formed request, whether the value was stored or dropped. Use the
//! `try_` variants to see the [`SetOutcome`].
//!
//! # Example
//!
//! ```
//! use icy_infostring::InfoString;
//!
//! let mut info = InfoString::new(64);
//! assert!(info.set_value_for_key("name", "Bob"));
//! assert!(info.set_value_for_key("name", "Alice"));
//! assert_eq!(info.as_bytes(), b"\\name\\Alice");
//! assert_eq!(info.value_for_key("name"), "Alice");
//!
//! assert!(info.remove_key("name"));
//! assert!(info.is_empty());
//! ```

use std::{fmt, io::Write};

use bstr::{BStr, BString, ByteSlice};

use crate::{
    InfoError, is_key_important,
    limits::{DELIMITER, MAX_INFO_STRING, MAX_KV_LEN},
    parser::{self, Cursor, Pairs},
    util::filter_control,
};

/// What a well formed set request did to the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetOutcome {
    /// The new entry was appended.
    Stored,
    /// The value was empty, the key is gone now.
    Cleared,
    /// There was no room for the entry; the buffer may still have lost the
    /// previous value of the key and any evicted entries.
    DroppedForCapacity,
}

/// A mutable `\key\value` buffer that never grows beyond `max_size` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoString {
    data: BString,
    max_size: usize,
}

impl Default for InfoString {
    fn default() -> Self {
        Self::new(MAX_INFO_STRING)
    }
}

impl InfoString {
    /// Creates an empty info string bounded by `max_size` bytes.
    pub fn new(max_size: usize) -> Self {
        Self {
            data: BString::default(),
            max_size,
        }
    }

    /// Imports raw text, e.g. an info string received from a peer.
    ///
    /// The text ends at the first NUL byte. It is not validated, use
    /// [`is_valid`](Self::is_valid) for that.
    ///
    /// # Errors
    ///
    /// Returns [`InfoError::InfoStringTooLong`] if the text is longer than `max_size`.
    pub fn from_bytes(data: impl AsRef<[u8]>, max_size: usize) -> crate::Result<Self> {
        let data = data.as_ref();
        let end = data.find_byte(0).unwrap_or(data.len());
        if end > max_size {
            return Err(InfoError::InfoStringTooLong { len: end, max: max_size });
        }
        Ok(Self {
            data: BString::from(&data[..end]),
            max_size,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bstr(&self) -> &BStr {
        self.data.as_bstr()
    }

    pub fn into_inner(self) -> BString {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Lazy iterator over all entries in buffer order.
    pub fn pairs(&self) -> Pairs<'_> {
        parser::pairs(&self.data)
    }

    /// Lazy iterator over the console lines for this info string.
    ///
    /// ```
    /// use icy_infostring::InfoString;
    ///
    /// let info = InfoString::from_bytes("\\name\\Bob\\model", 64)?;
    /// let lines: Vec<_> = info.display_lines().map(|l| l.to_string()).collect();
    /// assert_eq!(lines, ["name                Bob", "model               (null)"]);
    /// # Ok::<(), icy_infostring::InfoError>(())
    /// ```
    pub fn display_lines(&self) -> impl Iterator<Item = BString> + '_ {
        self.pairs().map(|pair| pair.display_line())
    }

    /// Hands every display line to `sink`.
    pub fn print<F: FnMut(&BStr)>(&self, mut sink: F) {
        for line in self.display_lines() {
            sink(line.as_bstr());
        }
    }

    /// Writes the display lines to `writer`, one per line.
    ///
    /// # Errors
    ///
    /// Returns [`InfoError::IoError`] if writing fails.
    pub fn print_to<W: Write>(&self, writer: &mut W) -> crate::Result<()> {
        for line in self.display_lines() {
            writer.write_all(&line)?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// See [`parser::is_valid`].
    pub fn is_valid(&self) -> bool {
        parser::is_valid(&self.data)
    }

    /// Returns the value for `key` or an empty string if there is none.
    pub fn value_for_key(&self, key: impl AsRef<[u8]>) -> BString {
        self.get(key).unwrap_or_default()
    }

    /// Returns the value for `key`, `None` if the key is missing.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<BString> {
        parser::value_for_key(&self.data, key.as_ref()).map(BString::from)
    }

    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        parser::value_for_key(&self.data, key.as_ref()).is_some()
    }

    /// See [`parser::find_largest_key`].
    pub fn find_largest_key(&self) -> Option<BString> {
        parser::find_largest_key(&self.data)
    }

    /// Removes the first entry whose key starts with `key`.
    ///
    /// Only the first `min(key.len(), 127)` bytes take part in the comparison,
    /// so removing `na` removes a `name` entry if it comes first. Returns
    /// `false` if nothing matched, if `key` is empty or contains a backslash.
    ///
    /// An empty `key` never matches. With a zero length comparison it would
    /// otherwise remove whatever entry comes first.
    ///
    /// ```
    /// use icy_infostring::InfoString;
    ///
    /// let mut info = InfoString::from_bytes("\\name\\Bob\\rate\\25000", 64)?;
    /// assert!(info.remove_key("rate"));
    /// assert_eq!(info.as_bytes(), b"\\name\\Bob");
    /// assert!(!info.remove_key("rate"));
    /// # Ok::<(), icy_infostring::InfoError>(())
    /// ```
    pub fn remove_key(&mut self, key: impl AsRef<[u8]>) -> bool {
        let key = key.as_ref();
        if key.is_empty() || key.contains(&DELIMITER) {
            return false;
        }
        match parser::find_entry(&self.data, key) {
            Some(range) => {
                self.data.drain(range);
                true
            }
            None => false,
        }
    }

    /// Removes every entry whose key starts with the byte `prefix`.
    ///
    /// ```
    /// use icy_infostring::InfoString;
    ///
    /// let mut info = InfoString::from_bytes("\\*sid\\1\\name\\Bob\\*hltv\\1", 64)?;
    /// info.remove_prefixed_keys(b'*');
    /// assert_eq!(info.as_bytes(), b"\\name\\Bob");
    /// # Ok::<(), icy_infostring::InfoError>(())
    /// ```
    pub fn remove_prefixed_keys(&mut self, prefix: u8) {
        'restart: loop {
            let mut cursor = Cursor::new(&self.data);
            loop {
                cursor.skip_delimiter();
                let pkey = cursor.take_field();
                if cursor.is_at_end() {
                    return;
                }
                cursor.advance();
                cursor.take_field();

                if pkey.first() == Some(&prefix) {
                    let pkey = pkey.to_vec();
                    if !self.remove_key(pkey) {
                        return;
                    }
                    // offsets moved, scan again from the head
                    continue 'restart;
                }
                if cursor.is_at_end() {
                    return;
                }
            }
        }
    }

    /// Sets `key` to `value` unless `key` is a reserved star key.
    ///
    /// Returns `false` if the request was rejected. `true` does not mean the
    /// value was stored, see [`try_set_value_for_key`](Self::try_set_value_for_key).
    pub fn set_value_for_key(&mut self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> bool {
        self.try_set_value_for_key(key, value).is_ok()
    }

    /// Sets `key` to `value`, star keys included.
    ///
    /// Returns `false` if the request was rejected. `true` does not mean the
    /// value was stored, see [`try_set_value_for_star_key`](Self::try_set_value_for_star_key).
    pub fn set_value_for_star_key(&mut self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> bool {
        self.try_set_value_for_star_key(key, value).is_ok()
    }

    /// Like [`try_set_value_for_star_key`](Self::try_set_value_for_star_key)
    /// but refuses keys starting with `*`.
    ///
    /// # Errors
    ///
    /// Returns [`InfoError::ReservedKey`] for star keys, otherwise the same
    /// errors as [`try_set_value_for_star_key`](Self::try_set_value_for_star_key).
    pub fn try_set_value_for_key(&mut self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> crate::Result<SetOutcome> {
        let key = key.as_ref();
        if key.first() == Some(&b'*') {
            log::warn!("Can't set *keys: {}", key.as_bstr());
            return Err(InfoError::ReservedKey(BString::from(key)));
        }
        self.try_set_value_for_star_key(key, value)
    }

    /// Sets `key` to `value` within the size bound of this buffer.
    ///
    /// The previous entry for `key` is removed first, so an empty value clears
    /// the key. If the new entry does not fit and `key` is important, the
    /// largest unimportant entries are evicted until it does. Unimportant keys
    /// never evict anything; their value is dropped instead.
    ///
    /// Key and value lose every control character up to `\r` before they are
    /// checked and matched against the existing entry. For the key `team`
    /// (any case) both are lowercased as well.
    ///
    /// ```
    /// use icy_infostring::{InfoString, SetOutcome};
    ///
    /// let mut info = InfoString::new(32);
    /// assert_eq!(info.try_set_value_for_star_key("team", "RED")?, SetOutcome::Stored);
    /// assert_eq!(info.as_bytes(), b"\\team\\red");
    /// # Ok::<(), icy_infostring::InfoError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// The buffer is left untouched if `key` or `value` contains a backslash,
    /// a double quote or `..`, is longer than 127 bytes, or if `key` is empty.
    pub fn try_set_value_for_star_key(&mut self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> crate::Result<SetOutcome> {
        let (key, value) = prepare_request(key.as_ref(), value.as_ref())?;

        if let Some(range) = parser::find_exact_entry(&self.data, &key) {
            self.data.drain(range);
        }

        if value.is_empty() {
            return Ok(SetOutcome::Cleared);
        }

        let needed = key.len() + value.len() + 2;
        if self.data.len() + needed > self.max_size {
            if !is_key_important(&key) {
                log::warn!("No room in info string for '{}', value dropped", key.as_bstr());
                return Ok(SetOutcome::DroppedForCapacity);
            }
            if !self.evict_for(&key, needed) {
                log::warn!("No room in info string for '{}', value dropped", key.as_bstr());
                return Ok(SetOutcome::DroppedForCapacity);
            }
        }

        self.data.push(DELIMITER);
        self.data.extend_from_slice(&key);
        self.data.push(DELIMITER);
        self.data.extend_from_slice(&value);
        Ok(SetOutcome::Stored)
    }

    /// Evicts the largest unimportant entries until `needed` more bytes fit
    /// below `max_size`. Returns `false` once nothing is left to evict.
    fn evict_for(&mut self, key: &[u8], needed: usize) -> bool {
        loop {
            let Some(largest) = self.find_largest_key() else {
                return false;
            };
            let Some(range) = parser::find_exact_entry(&self.data, &largest) else {
                return false;
            };
            log::debug!("Evicting '{}' to make room for '{}'", largest, key.as_bstr());
            self.data.drain(range);
            if self.data.len() + needed < self.max_size {
                return true;
            }
        }
    }
}

pub(crate) fn check_request(key: &[u8], value: &[u8]) -> crate::Result<()> {
    for field in [key, value] {
        if field.contains(&DELIMITER) {
            log::error!("SetValueForKey: can't use keys or values with a \\");
            return Err(InfoError::IllegalDelimiter(BString::from(field)));
        }
    }
    for field in [key, value] {
        if field.contains_str("..") {
            return Err(InfoError::PathTraversal(BString::from(field)));
        }
    }
    for field in [key, value] {
        if field.contains(&b'"') {
            log::error!("SetValueForKey: can't use keys or values with a \"");
            return Err(InfoError::IllegalQuote(BString::from(field)));
        }
    }
    if key.len() > MAX_KV_LEN {
        return Err(InfoError::KeyTooLong(key.len()));
    }
    if value.len() > MAX_KV_LEN {
        return Err(InfoError::ValueTooLong(value.len()));
    }
    if key.iter().all(|&b| b <= 13) {
        return Err(InfoError::EmptyKey);
    }
    Ok(())
}

/// Validates a set request and returns key and value the way they are
/// stored: without control bytes up to `\r`, lowercased for `team`.
///
/// The filtered pair is checked again since stripping may join two dots.
pub(crate) fn prepare_request(key: &[u8], value: &[u8]) -> crate::Result<(Vec<u8>, Vec<u8>)> {
    check_request(key, value)?;
    let stripped: Vec<u8> = filter_control(key, false).collect();
    let lowercase = stripped.eq_ignore_ascii_case(b"team");
    let key: Vec<u8> = filter_control(&stripped, lowercase).collect();
    let value: Vec<u8> = filter_control(value, lowercase).collect();
    check_request(&key, &value)?;
    Ok((key, value))
}

impl AsRef<[u8]> for InfoString {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for InfoString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data)
    }
}
