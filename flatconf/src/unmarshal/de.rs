//! `serde::Deserializer` positioned at a flat path inside a store.

use std::str::FromStr;

use serde::de::value::StringDeserializer;
use serde::de::{IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;

use super::access::{MapReader, SeqReader, StructReader};
use crate::{ConfigError, FlatStore, FlatValue};

/// Reads the value stored at `path`, or the subtree beneath it.
///
/// A path with no stored data yields the zero value of whatever type is
/// requested: `0`, `false`, an empty string, an empty collection, `None`, or
/// a struct whose fields are all zero.
pub(crate) struct StoreDeserializer<'s> {
    store: &'s FlatStore,
    path: String,
}

macro_rules! deserialize_integer {
    ($($method:ident => $visit:ident($ty:ty)),* $(,)?) => {
        $(
            fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
                visitor.$visit(self.integer::<$ty>(stringify!($ty))?)
            }
        )*
    };
}

impl<'s> StoreDeserializer<'s> {
    pub(crate) const fn new(store: &'s FlatStore, path: String) -> Self {
        Self { store, path }
    }

    fn leaf(&self) -> Option<&'s FlatValue> {
        self.store.leaf(&self.path)
    }

    fn conversion(&self, expected: &'static str, value: &FlatValue) -> ConfigError {
        ConfigError::Conversion {
            key: self.path.clone(),
            expected,
            value: value.to_string(),
        }
    }

    fn integer<T>(&self, expected: &'static str) -> Result<T, ConfigError>
    where
        T: Default + TryFrom<i64> + FromStr,
    {
        let Some(value) = self.leaf() else {
            return Ok(T::default());
        };
        let converted = match value {
            FlatValue::Integer(i) => T::try_from(*i).ok(),
            FlatValue::String(s) => s.trim().parse::<T>().ok(),
            FlatValue::Float(_) | FlatValue::Bool(_) => None,
        };
        converted.ok_or_else(|| self.conversion(expected, value))
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "integers beyond 2^53 lose precision exactly as a float parse would"
    )]
    fn float(&self, expected: &'static str) -> Result<f64, ConfigError> {
        let Some(value) = self.leaf() else {
            return Ok(0.0);
        };
        match value {
            FlatValue::Float(f) => Ok(*f),
            FlatValue::Integer(i) => Ok(*i as f64),
            FlatValue::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| self.conversion(expected, value)),
            FlatValue::Bool(_) => Err(self.conversion(expected, value)),
        }
    }

    fn boolean(&self) -> Result<bool, ConfigError> {
        let Some(value) = self.leaf() else {
            return Ok(false);
        };
        let parsed = match value {
            FlatValue::Bool(b) => Some(*b),
            FlatValue::Integer(0) => Some(false),
            FlatValue::Integer(1) => Some(true),
            FlatValue::String(s) => parse_bool(s),
            FlatValue::Integer(_) | FlatValue::Float(_) => None,
        };
        parsed.ok_or_else(|| self.conversion("bool", value))
    }

    fn text(&self) -> String {
        self.leaf().map(ToString::to_string).unwrap_or_default()
    }

    /// Returns the list length when the children under `path` are exactly
    /// the indices `0..n`.
    fn as_sequence(&self) -> Option<usize> {
        let len = self.store.sequence_len(&self.path);
        (len > 0 && self.store.children(&self.path).len() == len).then_some(len)
    }
}

/// Parse the textual boolean family accepted from environment variables.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" | "on" => Some(true),
        "false" | "f" | "0" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

impl<'de> serde::Deserializer<'de> for StoreDeserializer<'_> {
    type Error = ConfigError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.leaf() {
            Some(FlatValue::String(s)) => visitor.visit_str(s),
            Some(FlatValue::Integer(i)) => visitor.visit_i64(*i),
            Some(FlatValue::Float(f)) => visitor.visit_f64(*f),
            Some(FlatValue::Bool(b)) => visitor.visit_bool(*b),
            None => match self.as_sequence() {
                Some(len) => visitor.visit_seq(SeqReader::new(self.store, self.path, len)),
                None if self.store.has_data_at(&self.path) => {
                    visitor.visit_map(MapReader::new(self.store, self.path))
                }
                None => visitor.visit_unit(),
            },
        }
    }

    fn deserialize_bool<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_bool(self.boolean()?)
    }

    deserialize_integer! {
        deserialize_i8 => visit_i8(i8),
        deserialize_i16 => visit_i16(i16),
        deserialize_i32 => visit_i32(i32),
        deserialize_i64 => visit_i64(i64),
        deserialize_i128 => visit_i128(i128),
        deserialize_u8 => visit_u8(u8),
        deserialize_u16 => visit_u16(u16),
        deserialize_u32 => visit_u32(u32),
        deserialize_u64 => visit_u64(u64),
        deserialize_u128 => visit_u128(u128),
    }

    fn deserialize_f32<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_f64(self.float("f32")?)
    }

    fn deserialize_f64<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_f64(self.float("f64")?)
    }

    fn deserialize_char<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        let Some(value) = self.leaf() else {
            return visitor.visit_char('\0');
        };
        let text = value.to_string();
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => visitor.visit_char(c),
            _ => Err(self.conversion("char", value)),
        }
    }

    fn deserialize_str<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_string(self.text())
    }

    fn deserialize_string<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_string(self.text())
    }

    fn deserialize_bytes<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_byte_buf(self.text().into_bytes())
    }

    fn deserialize_byte_buf<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_byte_buf(self.text().into_bytes())
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        if self.store.has_data_at(&self.path) {
            visitor.visit_some(self)
        } else {
            visitor.visit_none()
        }
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        let len = self.store.sequence_len(&self.path);
        visitor.visit_seq(SeqReader::new(self.store, self.path, len))
    }

    fn deserialize_tuple<V: Visitor<'de>>(
        self,
        len: usize,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        visitor.visit_seq(SeqReader::new(self.store, self.path, len))
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        len: usize,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        self.deserialize_tuple(len, visitor)
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_map(MapReader::new(self.store, self.path))
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        visitor.visit_map(StructReader::new(self.store, self.path, fields))
    }

    /// Unit variants are read from a string leaf; an absent value selects the
    /// first declared variant.
    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        let variant = match (self.leaf(), variants.first()) {
            (Some(value), _) => value.to_string(),
            (None, Some(first)) => (*first).to_owned(),
            (None, None) => {
                return Err(ConfigError::Unmarshal {
                    key: Some(self.path),
                    message: String::from("enum has no variants"),
                });
            }
        };
        let access: StringDeserializer<ConfigError> = variant.into_deserializer();
        visitor.visit_enum(access)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(
        self,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        visitor.visit_unit()
    }

    forward_to_deserialize_any! { identifier }
}
