//! The merged, flat configuration store.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::key::{self, SEPARATOR};
use crate::{ConfigError, ConfigResult, ConfigResultExt, FlatValue, unmarshal};

/// Flat mapping from canonical keys to scalar values.
///
/// Keys are stored lowercased and matched case-insensitively. A store is
/// produced once by [`crate::load`] and is read-only afterwards, so it can be
/// shared freely between threads.
///
/// # Examples
///
/// ```
/// use flatconf::{FlatStore, FlatValue};
///
/// let store: FlatStore = [("Server.Port", FlatValue::Integer(8080))]
///     .into_iter()
///     .collect();
/// assert_eq!(store.get_string("server.port")?, "8080");
/// assert_eq!(store.get_string("SERVER.PORT")?, "8080");
/// # Ok::<_, std::sync::Arc<flatconf::ConfigError>>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatStore {
    entries: BTreeMap<String, FlatValue>,
}

impl FlatStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert `value` under the canonical form of `key`, replacing any
    /// previous value.
    pub(crate) fn insert(&mut self, key: &str, value: FlatValue) -> Option<FlatValue> {
        self.entries.insert(key::canonical(key), value)
    }

    /// Overlay every entry of `layer` onto this store.
    ///
    /// Returns the number of keys the layer contributed.
    pub(crate) fn overlay(&mut self, layer: Self) -> usize {
        let count = layer.entries.len();
        self.entries.extend(layer.entries);
        count
    }

    /// Look up the value stored at `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FlatValue> {
        self.entries.get(&key::canonical(key))
    }

    /// Returns `true` when a value is stored at exactly `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the canonical text of the value at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeyNotFound`] when nothing is stored at `key`.
    pub fn get_string(&self, key: &str) -> ConfigResult<String> {
        self.get(key)
            .map(ToString::to_string)
            .ok_or_else(|| Arc::new(ConfigError::key_not_found(key)))
    }

    /// Deserialise the value or subtree at `key` into `T`.
    ///
    /// Scalars are coerced the same way [`FlatStore::unmarshal`] coerces
    /// struct fields, so `get_as::<u16>("port")` parses a textual `"8080"`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeyNotFound`] when nothing lives at or beneath
    /// `key`, or a conversion error when the stored data does not fit `T`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> ConfigResult<T> {
        let path = key::canonical(key);
        if !self.has_data_at(&path) {
            return Err(Arc::new(ConfigError::key_not_found(key)));
        }
        unmarshal::from_store(self, path).into_config()
    }

    /// Rebuild `T` from the whole store.
    ///
    /// Every field of `T` is read from its flat key; fields without a stored
    /// value take their zero value (`0`, `false`, an empty string or
    /// collection, `None`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Conversion`] when a stored value cannot be
    /// coerced into the field's type, or [`ConfigError::Unmarshal`] for other
    /// deserialisation failures.
    pub fn unmarshal<T: DeserializeOwned>(&self) -> ConfigResult<T> {
        unmarshal::from_store(self, String::new()).into_config()
    }

    /// Rebuild `target` in place from the whole store.
    ///
    /// # Errors
    ///
    /// See [`FlatStore::unmarshal`]. `target` is left untouched on failure.
    pub fn unmarshal_into<T: DeserializeOwned>(&self, target: &mut T) -> ConfigResult<()> {
        *target = self.unmarshal()?;
        Ok(())
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FlatValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over the stored keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entry stored at an already-canonical `path`.
    pub(crate) fn leaf(&self, path: &str) -> Option<&FlatValue> {
        self.entries.get(path)
    }

    /// Keys at or beneath a canonical `prefix`, in order.
    fn scan<'a>(&'a self, prefix: &str) -> impl Iterator<Item = &'a str> {
        self.entries
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .map(|(k, _)| k.as_str())
            .take_while(move |k| k.starts_with(prefix))
            .filter(move |k| key::is_at_or_under(k, prefix))
    }

    /// Returns `true` when anything is stored at or beneath `path`.
    pub(crate) fn has_data_at(&self, path: &str) -> bool {
        self.scan(path).next().is_some()
    }

    /// Distinct segments directly beneath `path`.
    pub(crate) fn children<'a>(&'a self, path: &str) -> BTreeSet<&'a str> {
        self.scan(path)
            .filter_map(|k| {
                let rest = if path.is_empty() {
                    k
                } else {
                    k.get(path.len()..)?.strip_prefix(SEPARATOR)?
                };
                rest.split(SEPARATOR).next().filter(|s| !s.is_empty())
            })
            .collect()
    }

    /// Number of consecutive list slots `path.0`, `path.1`, ... holding data.
    ///
    /// A slot counts as present when any key at or beneath it resolves, so a
    /// struct element with only some fields set still occupies its index.
    pub(crate) fn sequence_len(&self, path: &str) -> usize {
        (0..)
            .take_while(|index| self.has_data_at(&key::join_index(path, *index)))
            .count()
    }
}

impl<K: AsRef<str>> FromIterator<(K, FlatValue)> for FlatStore {
    fn from_iter<I: IntoIterator<Item = (K, FlatValue)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl<K: AsRef<str>> Extend<(K, FlatValue)> for FlatStore {
    fn extend<I: IntoIterator<Item = (K, FlatValue)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key.as_ref(), value);
        }
    }
}
