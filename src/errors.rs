use bstr::BString;

#[derive(Debug, thiserror::Error)]
pub enum InfoError {
    #[error("Keys and values can't contain a backslash: {0}")]
    IllegalDelimiter(BString),

    #[error("Keys and values can't contain a double quote: {0}")]
    IllegalQuote(BString),

    #[error("Keys and values can't contain '..': {0}")]
    PathTraversal(BString),

    #[error("Key too long: {0} bytes only up to 127 bytes are allowed.")]
    KeyTooLong(usize),

    #[error("Value too long: {0} bytes only up to 127 bytes are allowed.")]
    ValueTooLong(usize),

    #[error("Key must not be empty")]
    EmptyKey,

    #[error("Can't set *keys: {0}")]
    ReservedKey(BString),

    #[error("Info string too long: {len} bytes only up to {max} bytes are allowed.")]
    InfoStringTooLong { len: usize, max: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
