use std::fmt;

/// Kind of the next token in a JSON stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    BeginArray,
    EndArray,
    BeginObject,
    EndObject,
    /// Object member name.
    Name,
    String,
    Number,
    Boolean,
    Null,
    /// No more tokens; the top-level value has been consumed.
    EndDocument,
}

impl Token {
    pub fn as_str(self) -> &'static str {
        match self {
            Token::BeginArray => "BEGIN_ARRAY",
            Token::EndArray => "END_ARRAY",
            Token::BeginObject => "BEGIN_OBJECT",
            Token::EndObject => "END_OBJECT",
            Token::Name => "NAME",
            Token::String => "STRING",
            Token::Number => "NUMBER",
            Token::Boolean => "BOOLEAN",
            Token::Null => "NULL",
            Token::EndDocument => "END_DOCUMENT",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
