// SPDX-License-Identifier: Apache-2.0

use crate::json_value::Value;
use crate::parse_error::ParseError;
use crate::slice_input_buffer::SliceInputBuffer;

/// The keyword literals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    True,
    False,
    Null,
}

impl Literal {
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            Literal::True => b"true",
            Literal::False => b"false",
            Literal::Null => b"null",
        }
    }

    pub const fn value(&self) -> Value {
        match self {
            Literal::True => Value::True,
            Literal::False => Value::False,
            Literal::Null => Value::Null,
        }
    }
}

/// Consumes `literal` from the buffer.
///
/// The first byte has already been matched by the dispatcher. On a mismatch
/// the cursor is left on the offending byte.
pub fn parse_literal(
    buffer: &mut SliceInputBuffer<'_>,
    literal: Literal,
) -> Result<Value, ParseError> {
    let keyword = literal.as_bytes();
    debug_assert_eq!(Some(&buffer.peek()), keyword.first());
    buffer.advance(1);
    for &expected in keyword.iter().skip(1) {
        if buffer.peek() != expected {
            return Err(ParseError::InvalidValue);
        }
        buffer.advance(1);
    }
    log::trace!("literal {:?} ends at {}", literal, buffer.current_pos());
    Ok(literal.value())
}
