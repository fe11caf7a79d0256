// SPDX-License-Identifier: Apache-2.0

use crate::json_value::Value;
use crate::literal_parser::{parse_literal, Literal};
use crate::number_parser::parse_number;
use crate::parse_error::ParseError;
use crate::slice_input_buffer::{Location, SliceInputBuffer, TERMINATOR};

/// A parser for a single JSON root value held in a slice.
///
/// After [`parse`](Self::parse) returns, [`position`](Self::position) reports
/// where scanning stopped, which on failure points at the offending byte.
// Lifetime 'a is the input buffer lifetime
pub struct SliceParser<'a> {
    buffer: SliceInputBuffer<'a>,
}

impl<'a> SliceParser<'a> {
    /// Creates a new parser for the given JSON input.
    ///
    /// # Example
    /// ```
    /// use minijson::{SliceParser, Value};
    /// let mut parser = SliceParser::new(" true ");
    /// assert_eq!(parser.parse(), Ok(Value::True));
    /// ```
    pub fn new(input: &'a str) -> Self {
        Self::new_from_slice(input.as_bytes())
    }

    /// Creates a new parser from a byte slice.
    ///
    /// A NUL byte ends the input just like the end of the slice does.
    pub fn new_from_slice(input: &'a [u8]) -> Self {
        SliceParser {
            buffer: SliceInputBuffer::new(input),
        }
    }

    /// Byte offset where scanning stopped.
    pub fn position(&self) -> usize {
        self.buffer.current_pos()
    }

    /// Line and column of [`position`](Self::position).
    pub fn location(&self) -> Location {
        self.buffer.location(self.buffer.current_pos())
    }

    /// Parses the input as exactly one value surrounded by optional whitespace.
    pub fn parse(&mut self) -> Result<Value, ParseError> {
        self.buffer.seek(0);
        let result = self.parse_root();
        if let Err(err) = result {
            log::debug!("parse failed: {:?} at {}", err, self.location());
        }
        result
    }

    fn parse_root(&mut self) -> Result<Value, ParseError> {
        self.buffer.skip_whitespace();
        let value = self.parse_value()?;
        self.buffer.skip_whitespace();
        if !self.buffer.at_end() {
            return Err(ParseError::RootNotSingular);
        }
        Ok(value)
    }

    /// Picks a recognizer from the lookahead byte.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let lookahead = self.buffer.peek();
        log::trace!(
            "dispatch on {:?} at {}",
            lookahead as char,
            self.buffer.current_pos()
        );
        match lookahead {
            b't' => parse_literal(&mut self.buffer, Literal::True),
            b'f' => parse_literal(&mut self.buffer, Literal::False),
            b'n' => parse_literal(&mut self.buffer, Literal::Null),
            TERMINATOR => Err(ParseError::ExpectValue),
            _ => parse_number(&mut self.buffer),
        }
    }
}
