//! `idte` offers compact encoding and decoding of 64-bit identifiers into short
//! printable strings and back, and a generic field type to conveniently manage
//! the process with Serde.
//!
//! The encoding is a base-64 positional numeral system over an alphabet of 64
//! printable ASCII characters. It comes in two forms: a fixed-length form of
//! exactly 11 characters, suitable for content or identity hashes where every
//! identifier should look the same, and a variable-length form that is the
//! shortest string round-tripping the value. Decoding validates strictly:
//! wrong lengths, characters outside the alphabet, non-canonical encodings and
//! values overflowing 64 bits are all rejected with a specific error instead of
//! silently producing a wrong value.
//!
//! This is a representation transform, not cryptography. The encoded strings
//! are opaque tokens meant for embedding in filenames, URLs and log lines;
//! anyone holding a string can decode the value.
//!
//! # Usage
//!
//! ## Generic `Field` API
//!
//! Use the generic `Field` type to define a type for each kind of object ID
//! you expose. The `Field` type supports automatic encoding and decoding with
//! Serde, and adds an object type prefix so IDs of different object types
//! cannot be mixed up.
//!
//! ```
//! use serde::{Serialize, Deserialize};
//! use serde_json;
//!
//! // Define the ExampleId field type. The type marker defines the string prefix.
//! #[derive(Debug)]
//! pub struct ExampleIdMarker;
//! impl idte_rs::TypeMarker for ExampleIdMarker {
//!     fn name() -> &'static str { "example" }
//! }
//!
//! type ExampleId = idte_rs::Field<ExampleIdMarker>;
//!
//! // The field can then be used in structs, and works automatically with Serde.
//! #[derive(serde::Serialize)]
//! struct Example {
//!     pub id: ExampleId,
//! }
//!
//! let obj = Example { id: ExampleId::from(12345) };
//! let obj_str = serde_json::to_string(&obj).unwrap();
//! assert_eq!(obj_str, "{\"id\":\"example_30V\"}");
//! ```
//!
//! ## Low level API
//!
//! `Codec` provides a simple API to encode and decode integers.
//!
//! ```
//! use idte_rs::Codec;
//!
//! let codec = Codec::default();
//! let encoded = codec.encode_fixed(0xFE21B3A4D9C8E712);
//! assert_eq!(encoded, "fUxIWjpOesi");
//! assert_eq!(codec.decode_fixed(&encoded), Ok(0xFE21B3A4D9C8E712));
//!
//! // The variable-length form drops the left padding.
//! assert_eq!(codec.encode(12345), "30V");
//! assert_eq!(codec.decode("30V"), Ok(12345));
//! ```

mod alphabet;
mod codec;
mod config;
mod field;

pub use alphabet::{Alphabet, AlphabetError};
pub use codec::{Codec, Error, BASE, FIXED_LENGTH, MAX_LENGTH};
pub use config::Config;
pub use field::{Field, TypeMarker};
