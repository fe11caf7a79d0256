// SPDX-License-Identifier: Apache-2.0

use crate::slice_input_buffer;

/// Errors that can occur during JSON parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    ExpectValue,
    /// A literal or number was malformed.
    InvalidValue,
    /// A valid value was followed by more non-whitespace content.
    RootNotSingular,
    /// A syntactically valid number overflowed to infinity.
    NumberTooBig,
}

impl From<slice_input_buffer::Error> for ParseError {
    fn from(err: slice_input_buffer::Error) -> Self {
        match err {
            slice_input_buffer::Error::InvalidSliceBounds => ParseError::InvalidValue,
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ParseError::ExpectValue => "expected a value",
            ParseError::InvalidValue => "invalid value",
            ParseError::RootNotSingular => "unexpected content after the root value",
            ParseError::NumberTooBig => "number too big",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
