//! Pull reader over JSON text with cursor and path tracking.

use std::fmt::Write as _;

use crate::scope::Scope;
use crate::util::{find_ending_quote, has_control_character, is_whitespace, number_literal_len};
use crate::{JsonError, StringOptions, Token};

/// Value-level read access consumed by type adapters.
pub trait JsonReader {
    /// Returns the kind of the next token without consuming it.
    fn peek(&mut self) -> Result<Token, JsonError>;

    fn peek_is_string(&mut self) -> Result<bool, JsonError> {
        Ok(self.peek()? == Token::String)
    }

    /// Consumes the next token if it is a string equal to one of `options`
    /// and returns its position. Otherwise nothing is consumed.
    fn select_string(&mut self, options: &StringOptions) -> Result<Option<usize>, JsonError>;

    /// Consumes a string token, or a number token as its literal text.
    fn next_string(&mut self) -> Result<String, JsonError>;

    fn next_null(&mut self) -> Result<(), JsonError>;

    /// Structural location of the cursor, e.g. `$.hands[2]`.
    fn path(&self) -> String;
}

/// A JSON pull reader over a UTF-8 byte slice.
///
/// # Example
///
/// ```
/// use json_enum_stream::{JsonReader, JsonTextReader, Token};
///
/// let mut reader = JsonTextReader::new(br#"{"hand": "ROCK"}"#);
/// reader.begin_object().unwrap();
/// assert_eq!(reader.next_name().unwrap(), "hand");
/// assert_eq!(reader.path(), "$.hand");
/// assert_eq!(reader.peek().unwrap(), Token::String);
/// assert_eq!(reader.next_string().unwrap(), "ROCK");
/// reader.end_object().unwrap();
/// reader.finish().unwrap();
/// ```
#[derive(Debug)]
pub struct JsonTextReader<'a> {
    input: &'a [u8],
    /// Cursor position.
    x: usize,
    scopes: Vec<Scope>,
    path_names: Vec<Option<String>>,
    path_indices: Vec<usize>,
    peeked: Option<Token>,
}

impl<'a> JsonTextReader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            x: 0,
            scopes: vec![Scope::EmptyDocument],
            path_names: vec![None],
            path_indices: vec![0],
            peeked: None,
        }
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.x
    }

    pub fn begin_array(&mut self) -> Result<(), JsonError> {
        self.expect(Token::BeginArray, "BEGIN_ARRAY")?;
        self.x += 1;
        self.push(Scope::EmptyArray);
        Ok(())
    }

    pub fn end_array(&mut self) -> Result<(), JsonError> {
        self.expect(Token::EndArray, "END_ARRAY")?;
        self.x += 1;
        self.pop();
        self.after_value();
        Ok(())
    }

    pub fn begin_object(&mut self) -> Result<(), JsonError> {
        self.expect(Token::BeginObject, "BEGIN_OBJECT")?;
        self.x += 1;
        self.push(Scope::EmptyObject);
        Ok(())
    }

    pub fn end_object(&mut self) -> Result<(), JsonError> {
        self.expect(Token::EndObject, "END_OBJECT")?;
        self.x += 1;
        self.pop();
        self.after_value();
        Ok(())
    }

    /// Whether the current array or object has another element.
    pub fn has_next(&mut self) -> Result<bool, JsonError> {
        let token = self.peek()?;
        Ok(!matches!(
            token,
            Token::EndArray | Token::EndObject | Token::EndDocument
        ))
    }

    pub fn next_name(&mut self) -> Result<String, JsonError> {
        self.expect(Token::Name, "a name")?;
        let name = self.read_quoted()?;
        if let Some(slot) = self.path_names.last_mut() {
            *slot = Some(name.clone());
        }
        self.peeked = None;
        Ok(name)
    }

    pub fn next_bool(&mut self) -> Result<bool, JsonError> {
        self.expect(Token::Boolean, "a boolean")?;
        let rest = &self.input[self.x..];
        let value = if rest.starts_with(b"true") {
            self.x += 4;
            true
        } else if rest.starts_with(b"false") {
            self.x += 5;
            false
        } else {
            return Err(self.syntax("malformed literal"));
        };
        self.after_value();
        Ok(value)
    }

    pub fn next_number(&mut self) -> Result<f64, JsonError> {
        self.expect(Token::Number, "a number")?;
        let text = self.read_number_literal()?;
        let value = text
            .parse::<f64>()
            .map_err(|_| self.syntax("malformed number"))?;
        self.after_value();
        Ok(value)
    }

    /// Skips the next value, including every nested element.
    pub fn skip_value(&mut self) -> Result<(), JsonError> {
        let mut depth = 0usize;
        loop {
            match self.peek()? {
                Token::BeginArray => {
                    self.begin_array()?;
                    depth += 1;
                }
                Token::BeginObject => {
                    self.begin_object()?;
                    depth += 1;
                }
                Token::EndArray if depth > 0 => {
                    self.end_array()?;
                    depth -= 1;
                }
                Token::EndObject if depth > 0 => {
                    self.end_object()?;
                    depth -= 1;
                }
                Token::Name => {
                    self.next_name()?;
                    continue;
                }
                Token::String | Token::Number => {
                    self.next_string()?;
                }
                Token::Boolean => {
                    self.next_bool()?;
                }
                Token::Null => self.next_null()?,
                token => return Err(self.unexpected("a value", token)),
            }
            if depth == 0 {
                return Ok(());
            }
        }
    }

    /// Ensures the whole document was consumed and only whitespace remains.
    pub fn finish(&mut self) -> Result<(), JsonError> {
        match self.peek()? {
            Token::EndDocument => Ok(()),
            _ => Err(JsonError::IllegalState(
                "JSON document was not fully consumed",
            )),
        }
    }

    fn push(&mut self, scope: Scope) {
        self.scopes.push(scope);
        self.path_names.push(None);
        self.path_indices.push(0);
        self.peeked = None;
    }

    fn pop(&mut self) {
        self.scopes.pop();
        self.path_names.pop();
        self.path_indices.pop();
    }

    fn after_value(&mut self) {
        self.peeked = None;
        if let Some(index) = self.path_indices.last_mut() {
            *index += 1;
        }
    }

    fn expect(&mut self, token: Token, expected: &'static str) -> Result<(), JsonError> {
        let actual = self.peek()?;
        if actual == token {
            Ok(())
        } else {
            Err(self.unexpected(expected, actual))
        }
    }

    fn set_peeked(&mut self, token: Token) -> Token {
        self.peeked = Some(token);
        token
    }

    fn skip_whitespace(&mut self) -> Option<u8> {
        while let Some(&b) = self.input.get(self.x) {
            if !is_whitespace(b) {
                return Some(b);
            }
            self.x += 1;
        }
        None
    }

    fn fill_peeked(&mut self) -> Result<Token, JsonError> {
        let depth = self.scopes.len() - 1;
        let scope = self.scopes[depth];
        match scope {
            Scope::EmptyArray => self.scopes[depth] = Scope::NonEmptyArray,
            Scope::NonEmptyArray => match self.skip_whitespace() {
                Some(b']') => return Ok(self.set_peeked(Token::EndArray)),
                Some(b',') => self.x += 1,
                Some(_) => return Err(self.syntax("unterminated array")),
                None => return Err(self.end_of_input()),
            },
            Scope::EmptyObject | Scope::NonEmptyObject => {
                self.scopes[depth] = Scope::DanglingName;
                if scope == Scope::NonEmptyObject {
                    match self.skip_whitespace() {
                        Some(b'}') => return Ok(self.set_peeked(Token::EndObject)),
                        Some(b',') => self.x += 1,
                        Some(_) => return Err(self.syntax("unterminated object")),
                        None => return Err(self.end_of_input()),
                    }
                }
                return match self.skip_whitespace() {
                    Some(b'"') => Ok(self.set_peeked(Token::Name)),
                    Some(b'}') if scope == Scope::EmptyObject => {
                        Ok(self.set_peeked(Token::EndObject))
                    }
                    Some(_) => Err(self.syntax("expected a member name")),
                    None => Err(self.end_of_input()),
                };
            }
            Scope::DanglingName => {
                self.scopes[depth] = Scope::NonEmptyObject;
                match self.skip_whitespace() {
                    Some(b':') => self.x += 1,
                    Some(_) => return Err(self.syntax("expected ':'")),
                    None => return Err(self.end_of_input()),
                }
            }
            Scope::EmptyDocument => self.scopes[depth] = Scope::NonEmptyDocument,
            Scope::NonEmptyDocument => {
                return match self.skip_whitespace() {
                    None => Ok(self.set_peeked(Token::EndDocument)),
                    Some(_) => Err(self.syntax("trailing data after the top-level value")),
                };
            }
        }

        let token = match self.skip_whitespace() {
            Some(b'"') => Token::String,
            Some(b'[') => Token::BeginArray,
            Some(b'{') => Token::BeginObject,
            Some(b't' | b'f') => Token::Boolean,
            Some(b'n') => Token::Null,
            Some(b'-' | b'0'..=b'9') => Token::Number,
            Some(b']') if scope == Scope::EmptyArray => Token::EndArray,
            Some(_) => return Err(self.syntax("unexpected character")),
            None => return Err(self.end_of_input()),
        };
        Ok(self.set_peeked(token))
    }

    /// Raw bytes between the quotes of the string starting at the cursor,
    /// and the position of the closing quote.
    fn quoted_raw(&self) -> Result<(&'a [u8], usize), JsonError> {
        let input = self.input;
        let end = find_ending_quote(input, self.x + 1).ok_or_else(|| self.end_of_input())?;
        Ok((&input[self.x + 1..end], end))
    }

    fn read_quoted(&mut self) -> Result<String, JsonError> {
        let (raw, end) = self.quoted_raw()?;
        let value = if raw.contains(&b'\\') {
            serde_json::from_slice::<String>(&self.input[self.x..=end])?
        } else {
            if has_control_character(raw) {
                return Err(self.syntax("unescaped control character in string"));
            }
            std::str::from_utf8(raw)
                .map_err(|_| JsonError::InvalidUtf8)?
                .to_owned()
        };
        self.x = end + 1;
        Ok(value)
    }

    fn read_number_literal(&mut self) -> Result<&'a str, JsonError> {
        let input = self.input;
        let len = number_literal_len(input, self.x);
        let text =
            std::str::from_utf8(&input[self.x..self.x + len]).map_err(|_| JsonError::InvalidUtf8)?;
        if serde_json::from_str::<serde_json::Number>(text).is_err() {
            return Err(self.syntax("malformed number"));
        }
        self.x += len;
        Ok(text)
    }

    fn syntax(&self, message: &'static str) -> JsonError {
        JsonError::Syntax {
            offset: self.x,
            message,
            path: self.path(),
        }
    }

    fn end_of_input(&self) -> JsonError {
        JsonError::EndOfInput { path: self.path() }
    }

    fn unexpected(&self, expected: &'static str, actual: Token) -> JsonError {
        JsonError::UnexpectedToken {
            expected,
            actual,
            path: self.path(),
        }
    }
}

impl JsonReader for JsonTextReader<'_> {
    fn peek(&mut self) -> Result<Token, JsonError> {
        match self.peeked {
            Some(token) => Ok(token),
            None => self.fill_peeked(),
        }
    }

    fn select_string(&mut self, options: &StringOptions) -> Result<Option<usize>, JsonError> {
        if self.peek()? != Token::String {
            return Ok(None);
        }
        let (raw, end) = self.quoted_raw()?;
        let found = if raw.contains(&b'\\') {
            let decoded: String = serde_json::from_slice(&self.input[self.x..=end])?;
            options.find(&decoded)
        } else {
            if has_control_character(raw) {
                return Err(self.syntax("unescaped control character in string"));
            }
            // Unescaped content is compared without allocating.
            std::str::from_utf8(raw)
                .ok()
                .and_then(|value| options.find(value))
        };
        if found.is_some() {
            self.x = end + 1;
            self.after_value();
        }
        Ok(found)
    }

    fn next_string(&mut self) -> Result<String, JsonError> {
        let value = match self.peek()? {
            Token::String => self.read_quoted()?,
            Token::Number => self.read_number_literal()?.to_owned(),
            token => return Err(self.unexpected("a string", token)),
        };
        self.after_value();
        Ok(value)
    }

    fn next_null(&mut self) -> Result<(), JsonError> {
        self.expect(Token::Null, "null")?;
        if !self.input[self.x..].starts_with(b"null") {
            return Err(self.syntax("malformed literal"));
        }
        self.x += 4;
        self.after_value();
        Ok(())
    }

    fn path(&self) -> String {
        let mut out = String::from("$");
        for (i, scope) in self.scopes.iter().enumerate() {
            match scope {
                Scope::EmptyArray | Scope::NonEmptyArray => {
                    let _ = write!(out, "[{}]", self.path_indices[i]);
                }
                Scope::EmptyObject | Scope::DanglingName | Scope::NonEmptyObject => {
                    if let Some(name) = &self.path_names[i] {
                        out.push('.');
                        out.push_str(name);
                    }
                }
                Scope::EmptyDocument | Scope::NonEmptyDocument => {}
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_tracks_array_indices_and_member_names() {
        let mut reader = JsonTextReader::new(br#"{"a": [true, {"b": null}]}"#);
        assert_eq!(reader.path(), "$");
        reader.begin_object().unwrap();
        reader.next_name().unwrap();
        reader.begin_array().unwrap();
        assert_eq!(reader.path(), "$.a[0]");
        reader.next_bool().unwrap();
        assert_eq!(reader.path(), "$.a[1]");
        reader.begin_object().unwrap();
        reader.next_name().unwrap();
        assert_eq!(reader.path(), "$.a[1].b");
        reader.next_null().unwrap();
        reader.end_object().unwrap();
        reader.end_array().unwrap();
        reader.end_object().unwrap();
        assert_eq!(reader.path(), "$");
        reader.finish().unwrap();
    }

    #[test]
    fn select_string_leaves_unmatched_token_in_place() {
        let options = StringOptions::of(["x"]);
        let mut reader = JsonTextReader::new(br#""y""#);
        assert_eq!(reader.select_string(&options).unwrap(), None);
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.next_string().unwrap(), "y");
        reader.finish().unwrap();
    }

    #[test]
    fn select_string_decodes_escaped_tokens() {
        let options = StringOptions::of(["a\"b", "é"]);
        let mut reader = JsonTextReader::new(r#"["a\"b", "é"]"#.as_bytes());
        reader.begin_array().unwrap();
        assert_eq!(reader.select_string(&options).unwrap(), Some(0));
        assert_eq!(reader.select_string(&options).unwrap(), Some(1));
        reader.end_array().unwrap();
    }

    #[test]
    fn raw_control_characters_are_rejected_on_both_paths() {
        let options = StringOptions::of(["Two"]);
        let mut reader = JsonTextReader::new(b"\"Tw\no\"");
        assert!(matches!(
            reader.select_string(&options),
            Err(JsonError::Syntax { .. })
        ));
        let mut reader = JsonTextReader::new(b"\"Tw\no\"");
        assert!(matches!(reader.next_string(), Err(JsonError::Syntax { .. })));
        let mut reader = JsonTextReader::new(b"\"T\\u0077\no\"");
        assert!(reader.next_string().is_err());
        let mut reader = JsonTextReader::new(b"\"Tw\\no\"");
        assert_eq!(reader.next_string().unwrap(), "Tw\no");
    }

    #[test]
    fn number_literals_follow_json_grammar() {
        for text in ["01", "1.", "-", "1e", ".5", "1.2.3", "--1"] {
            let mut reader = JsonTextReader::new(text.as_bytes());
            assert!(
                matches!(reader.next_string(), Err(JsonError::Syntax { .. })),
                "{text}"
            );
        }
        for text in ["0", "-0", "10", "1.5", "-2e10", "3E-2"] {
            let mut reader = JsonTextReader::new(text.as_bytes());
            assert_eq!(reader.next_string().unwrap(), text);
        }
    }

    #[test]
    fn select_string_ignores_non_string_tokens() {
        let options = StringOptions::of(["1"]);
        let mut reader = JsonTextReader::new(b"1");
        assert_eq!(reader.select_string(&options).unwrap(), None);
        assert_eq!(reader.next_string().unwrap(), "1");
    }
}
