//! Crate prelude: convenient re-exports of the most commonly used
//! types and functions for working with info strings.
//!
//! ```
//! use icy_infostring::prelude::*;
//!
//! let mut info = InfoString::default();
//! info.set_value_for_key("name", "Player");
//! info.set_value_for_star_key("*sid", "42");
//!
//! assert!(info.is_valid());
//! assert!(is_key_important("*sid"));
//! assert_eq!(info.len(), "\\name\\Player\\*sid\\42".len());
//! ```
//!
//! Low level scanning helpers stay in [`parser`](crate::parser).

pub use crate::{
    InfoCategory, InfoError, InfoString, InfoStringBuilder, Result, SetOutcome, Variable,
    VariableSource, is_key_important,
    limits::{MAX_INFO_STRING, MAX_KV_LEN, MAX_SERVERINFO_STRING},
};
