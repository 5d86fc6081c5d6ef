//! Value-level adapter trait and the null-tolerant wrapper.

use json_enum_stream::{JsonReader, JsonTextReader, JsonTextWriter, JsonWriter, Token};

use crate::Result;

/// Converts one value to and from JSON tokens.
pub trait JsonAdapter {
    type Value;

    fn from_json<R: JsonReader + ?Sized>(&self, reader: &mut R) -> Result<Self::Value>;

    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W, value: &Self::Value) -> Result<()>;

    /// Decodes a complete document. Trailing data is an error.
    fn from_json_str(&self, json: &str) -> Result<Self::Value> {
        let mut reader = JsonTextReader::new(json.as_bytes());
        let value = self.from_json(&mut reader)?;
        reader.finish()?;
        Ok(value)
    }

    fn to_json_string(&self, value: &Self::Value) -> Result<String> {
        let mut writer = JsonTextWriter::new();
        self.to_json(&mut writer, value)?;
        Ok(writer.finish()?)
    }

    /// Wraps this adapter so that JSON `null` maps to `None`.
    fn nullable(self) -> NullSafe<Self>
    where
        Self: Sized,
    {
        NullSafe { inner: self }
    }
}

/// Adapter for `Option<A::Value>` that reads and writes `null` itself and
/// delegates every other token to `A`.
#[derive(Debug, Clone)]
pub struct NullSafe<A> {
    inner: A,
}

impl<A> NullSafe<A> {
    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: JsonAdapter> JsonAdapter for NullSafe<A> {
    type Value = Option<A::Value>;

    fn from_json<R: JsonReader + ?Sized>(&self, reader: &mut R) -> Result<Self::Value> {
        if reader.peek()? == Token::Null {
            reader.next_null()?;
            return Ok(None);
        }
        self.inner.from_json(reader).map(Some)
    }

    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W, value: &Self::Value) -> Result<()> {
        match value {
            Some(value) => self.inner.to_json(writer, value),
            None => {
                writer.null_value()?;
                Ok(())
            }
        }
    }
}
