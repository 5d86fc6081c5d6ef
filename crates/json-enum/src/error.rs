//! Codec error types.

use json_enum_stream::JsonError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The enum descriptor is inconsistent. Raised at construction.
    #[error("cannot introspect {type_name}: {reason}")]
    Introspection {
        type_name: &'static str,
        reason: String,
    },

    /// A configuration call received an unusable argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input string matches no configured name and no fallback is set.
    #[error(
        "Expected one of [{}] but was {actual} at path {path}",
        .expected.join(", ")
    )]
    UnknownName {
        expected: Vec<&'static str>,
        actual: String,
        path: String,
    },

    #[error(transparent)]
    Json(#[from] JsonError),
}

impl Error {
    /// Whether the error was caused by the input document rather than by
    /// codec configuration.
    pub fn is_data_error(&self) -> bool {
        matches!(self, Error::UnknownName { .. } | Error::Json(_))
    }
}
