//! Root-shape check for values used as a defaults layer.
//!
//! Only structs are accepted at the root: named-field structs, unit structs,
//! and newtype wrappers or `Some` around one of those. Maps, sequences and
//! scalars are rejected before any field is visited. Field values below the
//! root are serialised by `serde_json` unchanged.

use serde::Serialize;
use serde::ser::{self, Error as _, Impossible};
use serde_json::value::Serializer as ValueSerializer;
use serde_json::{Map, Value as JsonValue};

type Rejected = Impossible<JsonValue, serde_json::Error>;
type StructFields = <ValueSerializer as ser::Serializer>::SerializeStruct;

/// Serialises a struct-shaped root into a document, flagging any other shape.
pub(super) struct StructRoot<'r> {
    rejected: &'r mut bool,
}

impl<'r> StructRoot<'r> {
    pub(super) const fn new(rejected: &'r mut bool) -> Self {
        Self { rejected }
    }

    fn reject<T>(self) -> Result<T, serde_json::Error> {
        *self.rejected = true;
        Err(serde_json::Error::custom("root value is not a struct"))
    }
}

macro_rules! reject_scalars {
    ($($method:ident($ty:ty)),* $(,)?) => {
        $(
            fn $method(self, _value: $ty) -> Result<Self::Ok, Self::Error> {
                self.reject()
            }
        )*
    };
}

impl ser::Serializer for StructRoot<'_> {
    type Ok = JsonValue;
    type Error = serde_json::Error;

    type SerializeSeq = Rejected;
    type SerializeTuple = Rejected;
    type SerializeTupleStruct = Rejected;
    type SerializeTupleVariant = Rejected;
    type SerializeMap = Rejected;
    type SerializeStruct = StructFields;
    type SerializeStructVariant = Rejected;

    reject_scalars! {
        serialize_bool(bool),
        serialize_i8(i8),
        serialize_i16(i16),
        serialize_i32(i32),
        serialize_i64(i64),
        serialize_i128(i128),
        serialize_u8(u8),
        serialize_u16(u16),
        serialize_u32(u32),
        serialize_u64(u64),
        serialize_u128(u128),
        serialize_f32(f32),
        serialize_f64(f64),
        serialize_char(char),
        serialize_str(&str),
        serialize_bytes(&[u8]),
    }

    fn serialize_none(self) -> Result<Self::Ok, Self::Error> {
        self.reject()
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Self::Ok, Self::Error> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok, Self::Error> {
        self.reject()
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok, Self::Error> {
        Ok(JsonValue::Object(Map::new()))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok, Self::Error> {
        self.reject()
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok, Self::Error> {
        self.reject()
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        self.reject()
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, Self::Error> {
        self.reject()
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        self.reject()
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        self.reject()
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        self.reject()
    }

    fn serialize_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        ser::Serializer::serialize_struct(ValueSerializer, name, len)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        self.reject()
    }
}
