//! Building info strings from a variable registry or by hand.
//!
//! Engines keep their user and server settings in a registry of named
//! variables. Variables flagged for a category are mirrored into the
//! corresponding info string, one [`InfoString::set_value_for_key`] call per
//! variable:
//!
//! ```
//! use icy_infostring::{InfoCategory, InfoString, Variable};
//!
//! let registry = vec![
//!     Variable::new("name", "Player", [InfoCategory::UserInfo]),
//!     Variable::new("hostname", "Half-Life", [InfoCategory::ServerInfo]),
//!     Variable::new("rate", "25000", [InfoCategory::UserInfo]),
//! ];
//!
//! let info = InfoString::user_info(registry.as_slice());
//! assert_eq!(info.as_bytes(), b"\\name\\Player\\rate\\25000");
//! ```

use bstr::{BStr, BString, ByteSlice};

use crate::{
    InfoError, InfoString,
    SetOutcome,
    info_string::prepare_request,
    limits::{MAX_AGGREGATED_INFO_STRING, MAX_INFO_STRING},
};

/// Which info string a variable is mirrored into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InfoCategory {
    /// Client settings sent to the server (`name`, `model`, `rate`, ...).
    UserInfo,
    /// Server settings visible to clients and browsers.
    ServerInfo,
}

/// A source of named string values, usually an engine's variable registry.
pub trait VariableSource {
    /// Calls `visit` with name and value of every variable in `category`.
    fn visit_variables(&self, category: InfoCategory, visit: &mut dyn FnMut(&BStr, &BStr));
}

/// A registry entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: BString,
    pub value: BString,
    pub categories: Vec<InfoCategory>,
}

impl Variable {
    pub fn new(
        name: impl Into<BString>,
        value: impl Into<BString>,
        categories: impl IntoIterator<Item = InfoCategory>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            categories: categories.into_iter().collect(),
        }
    }
}

impl VariableSource for [Variable] {
    fn visit_variables(&self, category: InfoCategory, visit: &mut dyn FnMut(&BStr, &BStr)) {
        for var in self.iter().filter(|var| var.categories.contains(&category)) {
            visit(var.name.as_bstr(), var.value.as_bstr());
        }
    }
}

impl InfoString {
    /// Collects every variable of `category` into a fresh info string.
    ///
    /// Pairs are set through [`set_value_for_key`](Self::set_value_for_key),
    /// so rejected pairs are skipped and the result never exceeds `max_size`.
    pub fn from_source<S: VariableSource + ?Sized>(source: &S, category: InfoCategory, max_size: usize) -> Self {
        let mut info = InfoString::new(max_size);
        source.visit_variables(category, &mut |name, value| {
            if let Err(err) = info.try_set_value_for_key(name, value) {
                log::warn!("Skipping variable '{name}': {err}");
            }
        });
        info
    }

    /// The user info string of `source`.
    pub fn user_info<S: VariableSource + ?Sized>(source: &S) -> Self {
        Self::from_source(source, InfoCategory::UserInfo, MAX_INFO_STRING)
    }

    /// The server info string of `source`.
    pub fn server_info<S: VariableSource + ?Sized>(source: &S) -> Self {
        Self::from_source(source, InfoCategory::ServerInfo, MAX_INFO_STRING)
    }
}

/// The builder helps creating info strings by hand.
///
/// Unlike the boolean setters, rejected pairs fail the builder.
///
/// ```
/// use icy_infostring::InfoStringBuilder;
///
/// let info = InfoStringBuilder::default()
///     .max_size(64)
///     .pair("name", "Bob")?
///     .star_pair("*sid", "1234")?
///     .build();
/// assert_eq!(info.as_bytes(), b"\\name\\Bob\\*sid\\1234");
/// assert!(InfoStringBuilder::default().pair("*sid", "1").is_err());
/// # Ok::<(), icy_infostring::InfoError>(())
/// ```
#[derive(Clone, Debug)]
pub struct InfoStringBuilder {
    max_size: usize,
    /// Validated pairs in insertion order, `true` for star pairs.
    pairs: Vec<(BString, BString, bool)>,
}

impl Default for InfoStringBuilder {
    fn default() -> Self {
        Self {
            max_size: MAX_AGGREGATED_INFO_STRING,
            pairs: Vec::new(),
        }
    }
}

impl InfoStringBuilder {
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn pair(mut self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> crate::Result<Self> {
        let (key, value) = (key.as_ref(), value.as_ref());
        if key.first() == Some(&b'*') {
            return Err(InfoError::ReservedKey(BString::from(key)));
        }
        let (key, value) = prepare_request(key, value)?;
        self.pairs.push((key.into(), value.into(), false));
        Ok(self)
    }

    /// Adds a pair that may use a reserved `*` key.
    pub fn star_pair(mut self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> crate::Result<Self> {
        let (key, value) = (key.as_ref(), value.as_ref());
        let (key, value) = prepare_request(key, value)?;
        self.pairs.push((key.into(), value.into(), true));
        Ok(self)
    }

    /// Builds the info string. Pairs that don't fit are handled like any
    /// other set: dropped, or stored by evicting unimportant entries.
    pub fn build(self) -> InfoString {
        let mut info = InfoString::new(self.max_size);
        for (key, value, star) in self.pairs {
            // already validated, only capacity can intervene
            let outcome = if star {
                info.try_set_value_for_star_key(&key, value)
            } else {
                info.try_set_value_for_key(&key, value)
            };
            if let Ok(SetOutcome::DroppedForCapacity) = outcome {
                log::debug!("Builder pair '{key}' dropped for capacity");
            }
        }
        info
    }
}
