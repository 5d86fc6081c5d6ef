//! Token reader/writer error type.

use thiserror::Error;

use crate::Token;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("malformed JSON at byte {offset}: {message} at path {path}")]
    Syntax {
        offset: usize,
        message: &'static str,
        path: String,
    },
    #[error("Expected {expected} but was {actual} at path {path}")]
    UnexpectedToken {
        expected: &'static str,
        actual: Token,
        path: String,
    },
    #[error("end of input at path {path}")]
    EndOfInput { path: String },
    #[error("{0}")]
    IllegalState(&'static str),
    #[error("invalid UTF-8")]
    InvalidUtf8,
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
