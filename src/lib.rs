//! Bounded `\key\value` info strings.
//!
//! Info strings carry small sets of named attributes, like the user info a
//! game client sends to a server (`\name\Player\model\gordon\rate\25000`),
//! inside a buffer of fixed maximum size. This crate parses, validates and
//! mutates them without ever exceeding that size: when a new entry does not
//! fit, important keys evict the largest unimportant entries and everything
//! else is dropped.
//!
//! - [`InfoString`] - the owned buffer with lookup and mutation
//! - [`parser`] - read-only scanning over raw bytes
//! - [`is_key_important`] - the eviction priority rule
//! - [`InfoStringBuilder`], [`VariableSource`] - building info strings

pub mod errors;
pub use errors::*;

pub mod limits;

pub mod parser;
pub use parser::{Pair, Pairs};

pub mod importance;
pub use importance::*;

pub mod info_string;
pub use info_string::*;

pub mod builder;
pub use builder::*;

pub mod prelude;

pub(crate) mod util;

pub type Result<T> = std::result::Result<T, InfoError>;
