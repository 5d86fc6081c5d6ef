//! Configurable JSON codec for enumerated types.
//!
//! [`EnumCodec`] maps the constants of a [`JsonEnum`] type to JSON strings.
//! Each constant is serialized under its declaration name unless it carries a
//! name override, and decoding can be made lenient by configuring a fallback
//! constant for strings that match no name.
//!
//! # Overview
//!
//! - [`json_enum!`] - declares an enum together with its name table
//! - [`EnumCodec`] - the codec; immutable, cheap to clone, `Send + Sync`
//! - [`JsonAdapter`] - token-level `from_json` / `to_json` plus string helpers
//! - [`NullSafe`] - maps JSON `null` to `None` around another adapter
//!
//! Decoding reads tokens through [`json_enum_stream::JsonReader`], so the
//! mismatch error can report where in the document it happened:
//!
//! ```
//! use json_enum::{json_enum, EnumCodec, JsonAdapter};
//! use json_enum_stream::JsonTextReader;
//!
//! json_enum! {
//!     pub enum Roshambo { ROCK, PAPER, #[json(name = "scr")] SCISSORS }
//! }
//!
//! let codec = EnumCodec::<Roshambo>::new().unwrap();
//! let mut reader = JsonTextReader::new(br#"["PAPER", "SPOCK"]"#);
//! reader.begin_array().unwrap();
//! assert_eq!(codec.from_json(&mut reader).unwrap(), Roshambo::PAPER);
//! let err = codec.from_json(&mut reader).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Expected one of [ROCK, PAPER, scr] but was SPOCK at path $[1]"
//! );
//! ```

mod adapter;
mod codec;
mod descriptor;
mod error;
mod serde_bridge;

pub use adapter::{JsonAdapter, NullSafe};
pub use codec::EnumCodec;
pub use descriptor::JsonEnum;
pub use error::{Error, Result};
