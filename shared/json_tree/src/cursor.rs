//! Read position over the input text, with line/column bookkeeping.

use crate::error::{ParseError, ParseErrorKind};

/// Monotonic cursor over a UTF-8 buffer.
///
/// `line` and `column` describe the next unread character. Columns count
/// characters, so multi-byte sequences advance the column once.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.offset).copied()
    }

    /// The full character under the cursor, for diagnostics.
    pub fn peek_char(&self) -> Option<char> {
        self.input.get(self.offset..)?.chars().next()
    }

    /// Consumes one byte.
    pub fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.offset += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if !is_continuation(byte) {
            self.column += 1;
        }
        Some(byte)
    }

    /// Consumes `expected` if it is next.
    pub fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes a run of ASCII digits and returns how many there were.
    pub fn eat_digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.bump();
            count += 1;
        }
        count
    }

    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.bump();
        }
    }

    /// Text between `start` and the cursor. Both ends must sit on character
    /// boundaries.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.offset]
    }

    /// Builds an error located at the cursor.
    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.line, self.column, self.offset)
    }
}

fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}
