//! Rebuilds typed values from a [`FlatStore`].
//!
//! The target's own `Deserialize` implementation drives the traversal: each
//! struct field is read from `parent.<field name>` (the serde name,
//! lowercased), sequences probe `path.0`, `path.1`, ... until an index holds
//! no data, and stored scalars are coerced into whatever primitive the field
//! asks for.

mod access;
mod de;

use serde::de::DeserializeOwned;

use crate::{ConfigError, ConfigResult, FlatStore};

pub(crate) use de::StoreDeserializer;

/// Deserialise `T` from the subtree of `store` rooted at a canonical `path`.
pub(crate) fn from_store<T: DeserializeOwned>(
    store: &FlatStore,
    path: String,
) -> Result<T, ConfigError> {
    let at = path.clone();
    T::deserialize(StoreDeserializer::new(store, path)).map_err(|err| err.at_key(&at))
}

/// Destination that can be filled from a merged store.
///
/// Implemented for every `DeserializeOwned` type so `&mut T` can be handed to
/// [`crate::Source::unmarshal`] and populated once loading completes.
pub trait UnmarshalTarget {
    /// Replace `self` with the value rebuilt from `store`.
    ///
    /// # Errors
    ///
    /// Returns the conversion or deserialisation error raised while
    /// rebuilding the value; `self` is unchanged in that case.
    fn unmarshal_from(&mut self, store: &FlatStore) -> ConfigResult<()>;
}

impl<T: DeserializeOwned> UnmarshalTarget for T {
    fn unmarshal_from(&mut self, store: &FlatStore) -> ConfigResult<()> {
        store.unmarshal_into(self)
    }
}
