//! Using an [`EnumCodec`] with serde data formats.
//!
//! `&EnumCodec<T>` is a [`DeserializeSeed`], so the same name table and
//! fallback apply when decoding through any serde deserializer. As with the
//! token reader, numbers are compared by their decimal text:
//!
//! ```
//! use json_enum::{json_enum, EnumCodec};
//! use serde::de::DeserializeSeed;
//!
//! json_enum! {
//!     enum Roshambo { ROCK, PAPER, #[json(name = "scr")] SCISSORS }
//! }
//!
//! let codec = EnumCodec::<Roshambo>::new().unwrap();
//! let mut de = serde_json::Deserializer::from_str(r#""scr""#);
//! assert_eq!((&codec).deserialize(&mut de).unwrap(), Roshambo::SCISSORS);
//! ```

use std::fmt;

use serde::de::{self, DeserializeSeed, Unexpected, Visitor};
use serde::Serializer;

use crate::{EnumCodec, JsonEnum};

impl<T: JsonEnum> EnumCodec<T> {
    /// Writes the serialized name of `value` as a serde string.
    pub fn serialize<S: Serializer>(&self, value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name_of(value))
    }
}

impl<'de, T: JsonEnum> DeserializeSeed<'de> for &EnumCodec<T> {
    type Value = T;

    fn deserialize<D>(self, deserializer: D) -> Result<T, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(NameVisitor { codec: self })
    }
}

struct NameVisitor<'a, T: JsonEnum> {
    codec: &'a EnumCodec<T>,
}

impl<'de, T: JsonEnum> Visitor<'de> for NameVisitor<'_, T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "one of [{}] for {}",
            self.codec.names().join(", "),
            self.codec.type_name()
        )
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
        self.codec
            .lookup(value)
            .ok_or_else(|| E::invalid_value(Unexpected::Str(value), &self))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<T, E> {
        self.codec
            .lookup(&value.to_string())
            .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<T, E> {
        self.codec
            .lookup(&value.to_string())
            .ok_or_else(|| E::invalid_value(Unexpected::Signed(value), &self))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<T, E> {
        self.codec
            .lookup(&value.to_string())
            .ok_or_else(|| E::invalid_value(Unexpected::Float(value), &self))
    }
}
