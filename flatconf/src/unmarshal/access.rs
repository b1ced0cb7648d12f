//! `SeqAccess` and `MapAccess` adapters walking the flat store.

use serde::de::value::{StrDeserializer, StringDeserializer};
use serde::de::{DeserializeSeed, IntoDeserializer, MapAccess, SeqAccess};

use super::StoreDeserializer;
use crate::{ConfigError, FlatStore, key};

fn read_at<'de, S>(store: &FlatStore, path: String, seed: S) -> Result<S::Value, ConfigError>
where
    S: DeserializeSeed<'de>,
{
    let at = path.clone();
    seed.deserialize(StoreDeserializer::new(store, path))
        .map_err(|err| err.at_key(&at))
}

/// Yields `len` elements read from `path.0 .. path.{len - 1}`.
pub(super) struct SeqReader<'s> {
    store: &'s FlatStore,
    path: String,
    next: usize,
    len: usize,
}

impl<'s> SeqReader<'s> {
    pub(super) const fn new(store: &'s FlatStore, path: String, len: usize) -> Self {
        Self {
            store,
            path,
            next: 0,
            len,
        }
    }
}

impl<'de> SeqAccess<'de> for SeqReader<'_> {
    type Error = ConfigError;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>, Self::Error>
    where
        T: DeserializeSeed<'de>,
    {
        if self.next >= self.len {
            return Ok(None);
        }
        let path = key::join_index(&self.path, self.next);
        self.next += 1;
        read_at(self.store, path, seed).map(Some)
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.len.saturating_sub(self.next))
    }
}

/// Visits every declared field of a struct, present in the store or not.
pub(super) struct StructReader<'s> {
    store: &'s FlatStore,
    path: String,
    fields: std::slice::Iter<'static, &'static str>,
    pending: Option<String>,
}

impl<'s> StructReader<'s> {
    pub(super) fn new(store: &'s FlatStore, path: String, fields: &'static [&'static str]) -> Self {
        Self {
            store,
            path,
            fields: fields.iter(),
            pending: None,
        }
    }
}

impl<'de> MapAccess<'de> for StructReader<'_> {
    type Error = ConfigError;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>, Self::Error>
    where
        K: DeserializeSeed<'de>,
    {
        let Some(field) = self.fields.next() else {
            return Ok(None);
        };
        self.pending = Some(key::join(&self.path, &key::canonical(field)));
        let name: StrDeserializer<'_, ConfigError> = (*field).into_deserializer();
        seed.deserialize(name).map(Some)
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value, Self::Error>
    where
        V: DeserializeSeed<'de>,
    {
        let path = self.pending.take().unwrap_or_else(|| self.path.clone());
        read_at(self.store, path, seed)
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.fields.len())
    }
}

/// Visits the distinct segments stored directly beneath a path.
pub(super) struct MapReader<'s> {
    store: &'s FlatStore,
    path: String,
    keys: std::vec::IntoIter<String>,
    pending: Option<String>,
}

impl<'s> MapReader<'s> {
    pub(super) fn new(store: &'s FlatStore, path: String) -> Self {
        let keys: Vec<String> = store
            .children(&path)
            .into_iter()
            .map(str::to_owned)
            .collect();
        Self {
            store,
            path,
            keys: keys.into_iter(),
            pending: None,
        }
    }
}

impl<'de> MapAccess<'de> for MapReader<'_> {
    type Error = ConfigError;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>, Self::Error>
    where
        K: DeserializeSeed<'de>,
    {
        let Some(segment) = self.keys.next() else {
            return Ok(None);
        };
        self.pending = Some(key::join(&self.path, &segment));
        let name: StringDeserializer<ConfigError> = segment.into_deserializer();
        seed.deserialize(name).map(Some)
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value, Self::Error>
    where
        V: DeserializeSeed<'de>,
    {
        let path = self.pending.take().unwrap_or_else(|| self.path.clone());
        read_at(self.store, path, seed)
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.keys.len())
    }
}
