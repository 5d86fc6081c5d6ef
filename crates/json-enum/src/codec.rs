//! JSON codec for [`JsonEnum`] types with an optional fallback constant.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use json_enum_stream::{JsonReader, JsonWriter, StringOptions};

use crate::{Error, JsonAdapter, JsonEnum, Result};

/// Effective names resolved once per enum type and shared by every codec
/// derived from the same [`EnumCodec::new`] call.
#[derive(Debug)]
struct NameTable<T: 'static> {
    type_name: &'static str,
    constants: &'static [T],
    names: Vec<&'static str>,
    options: StringOptions,
}

impl<T: JsonEnum> NameTable<T> {
    fn resolve() -> Result<Self> {
        let type_name = std::any::type_name::<T>();
        let constants = T::constants();
        let mut identifiers = HashSet::with_capacity(constants.len());
        let mut names = Vec::with_capacity(constants.len());
        for (position, constant) in constants.iter().enumerate() {
            let identifier = constant.identifier();
            if constant.ordinal() != position {
                return Err(Error::Introspection {
                    type_name,
                    reason: format!(
                        "constant {identifier} reports ordinal {} but is declared at position {position}",
                        constant.ordinal()
                    ),
                });
            }
            if !identifiers.insert(identifier) {
                return Err(Error::Introspection {
                    type_name,
                    reason: format!("constant {identifier} is declared more than once"),
                });
            }
            names.push(constant.serialized_name());
        }
        let options = StringOptions::of(names.iter().copied());
        tracing::debug!(enum_type = type_name, ?names, "resolved enum name table");
        Ok(Self {
            type_name,
            constants,
            names,
            options,
        })
    }
}

/// Reads and writes the constants of `T` as JSON strings.
///
/// Each constant is written under its override name when it has one, and
/// under its identifier otherwise. Decoding matches exactly, is
/// case-sensitive, and resolves a duplicated name to the first constant
/// declaring it. An unmatched string yields the fallback constant when one
/// is configured and [`Error::UnknownName`] otherwise.
///
/// Codecs are immutable; configuring a fallback returns a new codec that
/// shares the resolved name table.
///
/// ```
/// use json_enum::{json_enum, EnumCodec, JsonAdapter};
///
/// json_enum! {
///     pub enum Roshambo {
///         ROCK,
///         PAPER,
///         #[json(name = "scr")]
///         SCISSORS,
///     }
/// }
///
/// let codec = EnumCodec::<Roshambo>::new().unwrap();
/// assert_eq!(codec.from_json_str(r#""scr""#).unwrap(), Roshambo::SCISSORS);
/// assert_eq!(codec.to_json_string(&Roshambo::PAPER).unwrap(), r#""PAPER""#);
///
/// let err = codec.from_json_str(r#""SPOCK""#).unwrap_err();
/// assert_eq!(err.to_string(), "Expected one of [ROCK, PAPER, scr] but was SPOCK at path $");
///
/// let lenient = codec.with_fallback_value(Roshambo::ROCK);
/// assert_eq!(lenient.from_json_str(r#""SPOCK""#).unwrap(), Roshambo::ROCK);
/// ```
#[derive(Debug, Clone)]
pub struct EnumCodec<T: JsonEnum> {
    table: Arc<NameTable<T>>,
    fallback: Option<T>,
}

impl<T: JsonEnum> EnumCodec<T> {
    /// Resolves the serialized name of every constant of `T`.
    ///
    /// Fails with [`Error::Introspection`] when the descriptor of `T` is
    /// inconsistent.
    pub fn new() -> Result<Self> {
        Ok(Self {
            table: Arc::new(NameTable::resolve()?),
            fallback: None,
        })
    }

    /// Returns a codec that decodes unmatched strings as `fallback`.
    pub fn with_fallback_value(&self, fallback: T) -> Self {
        Self {
            table: Arc::clone(&self.table),
            fallback: Some(fallback),
        }
    }

    /// Like [`with_fallback_value`](Self::with_fallback_value) for a value
    /// that may be absent. `None` is rejected with
    /// [`Error::InvalidArgument`].
    pub fn try_with_fallback_value(&self, fallback: Option<T>) -> Result<Self> {
        match fallback {
            Some(fallback) => Ok(self.with_fallback_value(fallback)),
            None => Err(Error::InvalidArgument("fallback value is missing".into())),
        }
    }

    /// Returns a codec whose fallback is the constant serialized as `name`.
    pub fn with_fallback_name(&self, name: &str) -> Result<Self> {
        let index = self.table.options.find(name).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "{name} is not a serialized name of {}",
                self.table.type_name
            ))
        })?;
        Ok(self.with_fallback_value(self.table.constants[index].clone()))
    }

    pub fn fallback_value(&self) -> Option<&T> {
        self.fallback.as_ref()
    }

    /// Serialized names in declaration order.
    pub fn names(&self) -> &[&'static str] {
        &self.table.names
    }

    pub fn name_of(&self, value: &T) -> &'static str {
        self.table.names[value.ordinal()]
    }

    /// Resolves a complete string: exact match first, then the fallback.
    pub fn lookup(&self, name: &str) -> Option<T> {
        match self.table.options.find(name) {
            Some(index) => Some(self.table.constants[index].clone()),
            None => self.fallback.clone(),
        }
    }

    pub fn decode<R: JsonReader + ?Sized>(&self, reader: &mut R) -> Result<T> {
        if let Some(index) = reader.select_string(&self.table.options)? {
            return Ok(self.table.constants[index].clone());
        }
        let path = reader.path();
        let actual = reader.next_string()?;
        if let Some(fallback) = &self.fallback {
            return Ok(fallback.clone());
        }
        Err(Error::UnknownName {
            expected: self.table.names.clone(),
            actual,
            path,
        })
    }

    pub fn encode<W: JsonWriter + ?Sized>(&self, writer: &mut W, value: &T) -> Result<()> {
        writer.string_value(self.name_of(value))?;
        Ok(())
    }

    pub(crate) fn type_name(&self) -> &'static str {
        self.table.type_name
    }
}

impl<T: JsonEnum> JsonAdapter for EnumCodec<T> {
    type Value = T;

    fn from_json<R: JsonReader + ?Sized>(&self, reader: &mut R) -> Result<T> {
        self.decode(reader)
    }

    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W, value: &T) -> Result<()> {
        self.encode(writer, value)
    }
}

impl<T: JsonEnum> fmt::Display for EnumCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnumCodec({})", self.table.type_name)
    }
}
