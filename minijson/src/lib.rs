// SPDX-License-Identifier: Apache-2.0

//! A tiny JSON parser for the root literals `null`, `true`, `false` and numbers.
//!
//! ```
//! use minijson::{parse, ParseError, Tag};
//!
//! let value = parse(" -1.5e-3 ").unwrap();
//! assert_eq!(value.get_type(), Tag::Number);
//! assert_eq!(value.get_number(), -0.0015);
//!
//! assert_eq!(parse("null x"), Err(ParseError::RootNotSingular));
//! ```

#![cfg_attr(not(test), no_std)]

mod json_value;
pub use json_value::{Tag, Value};

mod literal_parser;

mod number_parser;

mod parse_error;
pub use parse_error::ParseError;

mod slice_input_buffer;
pub use slice_input_buffer::Location;

mod slice_parser;
pub use slice_parser::SliceParser;

/// Parses `input` as a single JSON value.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    SliceParser::new(input).parse()
}

/// Parses a byte slice as a single JSON value. A NUL byte ends the input.
pub fn parse_slice(input: &[u8]) -> Result<Value, ParseError> {
    SliceParser::new_from_slice(input).parse()
}

/// Parses `input` into caller-owned storage.
///
/// `value` is reset to [`Value::Null`] before parsing and stays `Null` if
/// parsing fails.
pub fn parse_into(value: &mut Value, input: &str) -> Result<(), ParseError> {
    *value = Value::Null;
    *value = parse(input)?;
    Ok(())
}

/// Tag of `value`; same as [`Value::get_type`].
pub fn get_type(value: &Value) -> Tag {
    value.get_type()
}

/// Number held by `value`; same as [`Value::get_number`].
pub fn get_number(value: &Value) -> f64 {
    value.get_number()
}
