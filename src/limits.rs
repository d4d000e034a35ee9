//! Info string format limits.
//!
//! These constants define the field and buffer sizes of the `\key\value`
//! format. They are used for validation when parsing or mutating an
//! [`InfoString`](crate::InfoString).
//!
//! Reference summary:
//! - Key: up to 127 bytes, no `\` and no `"`
//! - Value: up to 127 bytes, no `\` and no `"`
//! - Whole string: caller chosen, usually [`MAX_INFO_STRING`]

/// Size of a key or value slot including the historical terminator byte.
pub const MAX_KV_SIZE: usize = 128;

/// Maximum number of bytes for a single key or value.
pub const MAX_KV_LEN: usize = MAX_KV_SIZE - 1;

/// Default maximum length of a user or server info string.
pub const MAX_INFO_STRING: usize = 256;

/// Maximum length of the extended server info string.
pub const MAX_SERVERINFO_STRING: usize = 512;

/// Size of the aggregated top level buffer the registry builder fills.
pub const MAX_AGGREGATED_INFO_STRING: usize = 4 * MAX_INFO_STRING;

/// Column width keys are padded to when printing.
pub const PRINT_KEY_WIDTH: usize = 20;

/// Separator between keys and values.
pub const DELIMITER: u8 = b'\\';
