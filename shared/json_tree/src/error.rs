//! Error types for parsing and value access.

use crate::value::ValueType;
use std::fmt;

/// Result type for operations on a value tree.
pub type Result<T> = std::result::Result<T, ValueError>;

/// What went wrong while scanning a document.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Input holds nothing but whitespace
    EmptyInput,
    /// A character that no production accepts at this point
    UnexpectedCharacter(char),
    /// Input ended in the middle of a value
    UnexpectedEndOfInput,
    /// Malformed numeric literal
    InvalidNumber(String),
    /// Backslash followed by a character that is not a JSON escape
    InvalidEscapeSequence(char),
    /// Bad hex digits, or a surrogate that does not form a pair
    InvalidUnicodeEscape(String),
    /// End of input before the closing quote
    UnterminatedString,
    /// Raw U+0000..U+001F inside a string literal
    ControlCharacterInString,
    /// Object key not followed by `:`
    ExpectedColon,
    /// Member or element not followed by `,` or the container's closing bracket
    ExpectedCommaOrClose(char),
    /// Non-whitespace after the root value
    TrailingCharacters,
    /// Nesting deeper than the configured limit
    DepthLimitExceeded(usize),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::EmptyInput => write!(f, "empty JSON input"),
            ParseErrorKind::UnexpectedCharacter(c) => {
                write!(f, "unexpected character '{}'", c.escape_debug())
            }
            ParseErrorKind::UnexpectedEndOfInput => write!(f, "unexpected end of input"),
            ParseErrorKind::InvalidNumber(reason) => write!(f, "invalid number: {}", reason),
            ParseErrorKind::InvalidEscapeSequence(c) => {
                write!(f, "invalid escape sequence '\\{}'", c.escape_debug())
            }
            ParseErrorKind::InvalidUnicodeEscape(reason) => {
                write!(f, "invalid unicode escape: {}", reason)
            }
            ParseErrorKind::UnterminatedString => write!(f, "unterminated string"),
            ParseErrorKind::ControlCharacterInString => {
                write!(f, "unescaped control character in string")
            }
            ParseErrorKind::ExpectedColon => write!(f, "expected ':' after object key"),
            ParseErrorKind::ExpectedCommaOrClose(close) => {
                write!(f, "expected ',' or '{}'", close)
            }
            ParseErrorKind::TrailingCharacters => write!(f, "trailing characters after JSON value"),
            ParseErrorKind::DepthLimitExceeded(limit) => {
                write!(f, "nesting deeper than {} levels", limit)
            }
        }
    }
}

/// First syntax error of a failed parse, with the cursor position it was raised at.
///
/// `line` and `column` are 1-based; columns count characters, not bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
    pub column: usize,
    /// Byte offset into the input.
    pub offset: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, line: usize, column: usize, offset: usize) -> Self {
        Self {
            kind,
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.kind, self.line, self.column
        )
    }
}

impl std::error::Error for ParseError {}

/// Misuse of a value: container operations on the wrong kind, or typed
/// extraction that does not fit.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueError {
    /// `set` called on something that is not an object
    NotAnObject(ValueType),
    /// `append` called on something that is not an array
    NotAnArray(ValueType),
    /// Value does not have the shape the caller asked for
    TypeMismatch(String),
    /// Required object member is absent
    MissingField(String),
    /// Text could not be parsed at all
    Parse(ParseError),
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::NotAnObject(found) => write!(f, "expected object, found {}", found),
            ValueError::NotAnArray(found) => write!(f, "expected array, found {}", found),
            ValueError::TypeMismatch(s) => write!(f, "type mismatch: {}", s),
            ValueError::MissingField(s) => write!(f, "missing required field: {}", s),
            ValueError::Parse(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ValueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValueError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for ValueError {
    fn from(err: ParseError) -> Self {
        ValueError::Parse(err)
    }
}
