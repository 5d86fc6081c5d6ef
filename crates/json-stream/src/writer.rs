//! Compact JSON text writer.

use crate::scope::Scope;
use crate::JsonError;

/// Value-level write access consumed by type adapters.
pub trait JsonWriter {
    fn string_value(&mut self, value: &str) -> Result<(), JsonError>;

    fn null_value(&mut self) -> Result<(), JsonError>;
}

/// Writes a single JSON document without insignificant whitespace.
///
/// # Example
///
/// ```
/// use json_enum_stream::{JsonTextWriter, JsonWriter};
///
/// let mut writer = JsonTextWriter::new();
/// writer.begin_object().unwrap();
/// writer.name("hand").unwrap();
/// writer.string_value("scr").unwrap();
/// writer.end_object().unwrap();
/// assert_eq!(writer.finish().unwrap(), r#"{"hand":"scr"}"#);
/// ```
#[derive(Debug)]
pub struct JsonTextWriter {
    out: Vec<u8>,
    scopes: Vec<Scope>,
}

impl Default for JsonTextWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonTextWriter {
    pub fn new() -> Self {
        Self {
            out: Vec::new(),
            scopes: vec![Scope::EmptyDocument],
        }
    }

    pub fn begin_array(&mut self) -> Result<(), JsonError> {
        self.before_value()?;
        self.out.push(b'[');
        self.scopes.push(Scope::EmptyArray);
        Ok(())
    }

    pub fn end_array(&mut self) -> Result<(), JsonError> {
        match self.top() {
            Scope::EmptyArray | Scope::NonEmptyArray => {
                self.scopes.pop();
                self.out.push(b']');
                Ok(())
            }
            _ => Err(JsonError::IllegalState("Nesting problem.")),
        }
    }

    pub fn begin_object(&mut self) -> Result<(), JsonError> {
        self.before_value()?;
        self.out.push(b'{');
        self.scopes.push(Scope::EmptyObject);
        Ok(())
    }

    pub fn end_object(&mut self) -> Result<(), JsonError> {
        match self.top() {
            Scope::EmptyObject | Scope::NonEmptyObject => {
                self.scopes.pop();
                self.out.push(b'}');
                Ok(())
            }
            Scope::DanglingName => Err(JsonError::IllegalState("Dangling name.")),
            _ => Err(JsonError::IllegalState("Nesting problem.")),
        }
    }

    pub fn name(&mut self, name: &str) -> Result<(), JsonError> {
        match self.top() {
            Scope::EmptyObject => {}
            Scope::NonEmptyObject => self.out.push(b','),
            _ => return Err(JsonError::IllegalState("Nesting problem.")),
        }
        serde_json::to_writer(&mut self.out, name)?;
        self.out.push(b':');
        self.replace_top(Scope::DanglingName);
        Ok(())
    }

    pub fn bool_value(&mut self, value: bool) -> Result<(), JsonError> {
        self.before_value()?;
        let literal: &[u8] = if value { b"true" } else { b"false" };
        self.out.extend_from_slice(literal);
        Ok(())
    }

    /// Returns the document text. Fails unless exactly one complete
    /// top-level value was written.
    pub fn finish(self) -> Result<String, JsonError> {
        if self.scopes != [Scope::NonEmptyDocument] {
            return Err(JsonError::IllegalState("Incomplete document"));
        }
        String::from_utf8(self.out).map_err(|_| JsonError::InvalidUtf8)
    }

    fn top(&self) -> Scope {
        self.scopes
            .last()
            .copied()
            .unwrap_or(Scope::NonEmptyDocument)
    }

    fn replace_top(&mut self, scope: Scope) {
        if let Some(top) = self.scopes.last_mut() {
            *top = scope;
        }
    }

    fn before_value(&mut self) -> Result<(), JsonError> {
        match self.top() {
            Scope::EmptyDocument => self.replace_top(Scope::NonEmptyDocument),
            Scope::NonEmptyDocument => {
                return Err(JsonError::IllegalState(
                    "JSON must have only one top-level value.",
                ))
            }
            Scope::EmptyArray => self.replace_top(Scope::NonEmptyArray),
            Scope::NonEmptyArray => self.out.push(b','),
            Scope::DanglingName => self.replace_top(Scope::NonEmptyObject),
            Scope::EmptyObject | Scope::NonEmptyObject => {
                return Err(JsonError::IllegalState("Nesting problem."))
            }
        }
        Ok(())
    }
}

impl JsonWriter for JsonTextWriter {
    fn string_value(&mut self, value: &str) -> Result<(), JsonError> {
        self.before_value()?;
        serde_json::to_writer(&mut self.out, value)?;
        Ok(())
    }

    fn null_value(&mut self) -> Result<(), JsonError> {
        self.before_value()?;
        self.out.extend_from_slice(b"null");
        Ok(())
    }
}
