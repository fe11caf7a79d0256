// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::json_value::Value;
use crate::parse_error::ParseError;
use crate::slice_input_buffer::SliceInputBuffer;

/// Positions in the number grammar, in scanning order.
///
/// `number := '-'? ('0' | [1-9][0-9]*) ('.' [0-9]+)? ([eE] [+-]? [0-9]+)?`
#[derive(Debug, Clone, Copy, PartialEq)]
enum Num {
    Sign,
    Integer,
    Fraction,
    Exponent,
    Done,
}

const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

const fn is_digit_1_to_9(b: u8) -> bool {
    matches!(b, b'1'..=b'9')
}

/// Advances `pos` past a run of digits and returns the new position.
fn skip_digits(buffer: &SliceInputBuffer<'_>, mut pos: usize) -> usize {
    while is_digit(buffer.byte_at(pos)) {
        pos += 1;
    }
    pos
}

/// Validates a number starting at the cursor and returns the end of its text.
///
/// The cursor itself is not moved.
pub fn scan_number(buffer: &SliceInputBuffer<'_>) -> Result<usize, ParseError> {
    let mut pos = buffer.current_pos();
    let mut state = Num::Sign;
    while state != Num::Done {
        let b = buffer.byte_at(pos);
        state = match state {
            Num::Sign => {
                if b == b'-' {
                    pos += 1;
                }
                Num::Integer
            }
            Num::Integer => {
                if b == b'0' {
                    pos += 1;
                    if is_digit(buffer.byte_at(pos)) {
                        return Err(ParseError::InvalidValue);
                    }
                } else if is_digit_1_to_9(b) {
                    pos = skip_digits(buffer, pos + 1);
                } else {
                    return Err(ParseError::InvalidValue);
                }
                Num::Fraction
            }
            Num::Fraction => {
                if b == b'.' {
                    pos += 1;
                    if !is_digit(buffer.byte_at(pos)) {
                        return Err(ParseError::InvalidValue);
                    }
                    pos = skip_digits(buffer, pos);
                }
                Num::Exponent
            }
            Num::Exponent => {
                if b == b'e' || b == b'E' {
                    pos += 1;
                    if matches!(buffer.byte_at(pos), b'+' | b'-') {
                        pos += 1;
                    }
                    if !is_digit(buffer.byte_at(pos)) {
                        return Err(ParseError::InvalidValue);
                    }
                    pos = skip_digits(buffer, pos);
                }
                Num::Done
            }
            Num::Done => Num::Done,
        };
    }
    Ok(pos)
}

/// Converts validated number text to `f64`.
///
/// Only overflow is an error; magnitudes too small to represent round to zero.
pub fn convert_number(bytes: &[u8]) -> Result<f64, ParseError> {
    let s = core::str::from_utf8(bytes).map_err(|_| ParseError::InvalidValue)?;
    let n = f64::from_str(s).map_err(|_| ParseError::InvalidValue)?;
    if n.is_infinite() {
        return Err(ParseError::NumberTooBig);
    }
    Ok(n)
}

/// Consumes a number from the buffer.
///
/// On `NumberTooBig` the cursor stays at the start of the number.
pub fn parse_number(buffer: &mut SliceInputBuffer<'_>) -> Result<Value, ParseError> {
    let start = buffer.current_pos();
    let end = scan_number(buffer)?;
    let n = convert_number(buffer.slice(start, end)?)?;
    log::trace!("number {} spans {}..{}", n, start, end);
    buffer.seek(end);
    Ok(Value::Number(n))
}
