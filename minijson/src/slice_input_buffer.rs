// SPDX-License-Identifier: Apache-2.0

/// Error type for SliceInputBuffer operations.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Invalid slice bounds provided.
    InvalidSliceBounds,
}

/// Byte returned by [`SliceInputBuffer::peek`] once the input is exhausted.
pub const TERMINATOR: u8 = 0;

/// 1-based line and column of a byte offset in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "line {} column {}", self.line, self.column)
    }
}

/// A buffer that manages input data and current parsing position.
///
/// The end of the slice acts as the terminator. An embedded NUL byte does
/// too: `peek` reports it like the end, so nothing after it is ever scanned.
#[derive(Debug)]
pub struct SliceInputBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceInputBuffer<'a> {
    /// Creates a new SliceInputBuffer with the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// Current byte, or [`TERMINATOR`] past the end of the data.
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte at an absolute position, or [`TERMINATOR`] past the end.
    pub fn byte_at(&self, pos: usize) -> u8 {
        self.data.get(pos).copied().unwrap_or(TERMINATOR)
    }

    /// True once the cursor sits on the terminator.
    pub fn at_end(&self) -> bool {
        self.peek() == TERMINATOR
    }

    /// Moves the cursor forward by `count` bytes.
    ///
    /// Callers only advance over bytes they have already inspected, so the
    /// cursor never moves past the terminator.
    pub fn advance(&mut self, count: usize) {
        debug_assert!(self.pos + count <= self.data.len());
        self.pos += count;
    }

    /// Moves the cursor to an absolute position previously obtained from this buffer.
    pub fn seek(&mut self, pos: usize) {
        debug_assert!(pos <= self.data.len());
        self.pos = pos;
    }

    /// Skips a run of JSON whitespace: space, tab, newline, carriage return.
    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), b' ' | b'\t' | b'\n' | b'\r') {
            self.pos += 1;
        }
    }

    /// Gets a slice of the data from start to end positions, with bounds checking.
    pub fn slice(&self, start: usize, end: usize) -> Result<&'a [u8], Error> {
        self.data.get(start..end).ok_or(Error::InvalidSliceBounds)
    }

    /// Line and column of `pos`, counting `\n` as the line separator.
    pub fn location(&self, pos: usize) -> Location {
        let scanned = self.data.get(..pos).unwrap_or(self.data);
        let mut location = Location { line: 1, column: 1 };
        for &b in scanned {
            if b == b'\n' {
                location.line += 1;
                location.column = 1;
            } else {
                location.column += 1;
            }
        }
        location
    }
}
