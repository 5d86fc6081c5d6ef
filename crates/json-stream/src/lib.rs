//! Streaming JSON token reader and writer.
//!
//! This crate provides the value-level capability that type adapters are
//! written against: peek at the next token, match an upcoming string against
//! a fixed table of candidates, read scalars, and report the structural path
//! of the cursor for diagnostics.
//!
//! # Overview
//!
//! - [`JsonReader`] / [`JsonWriter`] - the traits adapters consume
//! - [`JsonTextReader`] - pull reader over UTF-8 JSON text with path tracking
//! - [`JsonTextWriter`] - compact JSON text writer
//! - [`StringOptions`] - precomputed table for [`JsonReader::select_string`]
//!
//! # Example
//!
//! ```
//! use json_enum_stream::{JsonReader, JsonTextReader, StringOptions};
//!
//! let options = StringOptions::of(["red", "green"]);
//! let mut reader = JsonTextReader::new(br#"["green", "blue"]"#);
//! reader.begin_array().unwrap();
//! assert_eq!(reader.select_string(&options).unwrap(), Some(1));
//! assert_eq!(reader.select_string(&options).unwrap(), None);
//! assert_eq!(reader.path(), "$[1]");
//! assert_eq!(reader.next_string().unwrap(), "blue");
//! reader.end_array().unwrap();
//! reader.finish().unwrap();
//! ```

mod error;
mod options;
mod reader;
mod scope;
mod token;
mod util;
mod writer;

pub use error::JsonError;
pub use options::StringOptions;
pub use reader::{JsonReader, JsonTextReader};
pub use token::Token;
pub use writer::{JsonTextWriter, JsonWriter};
