//! JSON parsing implementation.

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind};
use crate::value::Value;
use std::collections::HashMap;

/// Nesting limit used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Tunables for a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Deepest allowed nesting of arrays and objects. The root container is depth 1.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parses a JSON document into a [`Value`].
///
/// Accepts exactly one value surrounded by optional whitespace. Numbers
/// without a fraction or exponent become integers; the rest become doubles.
///
/// # Errors
///
/// Returns the first syntax error with its line and column.
///
/// # Examples
///
/// ```
/// use json_tree::{Value, parse};
///
/// let json = parse(r#"{"key": "value", "number": 42}"#).unwrap();
/// assert_eq!(json["key"].as_str(), Some("value"));
/// assert_eq!(json["number"], Value::int(42));
///
/// let err = parse("{\n  \"x\": }").unwrap_err();
/// assert_eq!((err.line, err.column), (2, 8));
/// ```
pub fn parse(input: &str) -> Result<Value, ParseError> {
    parse_with_options(input, ParserOptions::default())
}

/// Like [`parse`], with explicit options.
pub fn parse_with_options(input: &str, options: ParserOptions) -> Result<Value, ParseError> {
    JsonScanner::new(input, options).parse_document()
}

/// Owns a document's text and the outcome of parsing it.
///
/// ```
/// use json_tree::Parser;
///
/// let mut parser = Parser::new("[1, 2.5, \"s\"]");
/// assert!(parser.parse().is_ok());
/// assert!(parser.valid());
/// assert_eq!(parser.document().len(), 3);
///
/// let mut parser = Parser::new("[1, 2");
/// assert!(parser.parse().is_err());
/// assert!(!parser.valid());
/// assert_eq!(parser.error().map(|e| e.column), Some(6));
/// ```
pub struct Parser {
    input: String,
    options: ParserOptions,
    document: Value,
    error: Option<ParseError>,
    #[cfg(feature = "logging")]
    logger: Option<logging::Logger>,
}

impl Parser {
    pub fn new(input: impl Into<String>) -> Self {
        Self::with_options(input, ParserOptions::default())
    }

    pub fn with_options(input: impl Into<String>, options: ParserOptions) -> Self {
        Self {
            input: input.into(),
            options,
            document: Value::Unknown,
            error: None,
            #[cfg(feature = "logging")]
            logger: None,
        }
    }

    /// Attaches a logger that records each parse attempt at debug level.
    #[cfg(feature = "logging")]
    pub fn with_logger(mut self, logger: logging::Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Parses the stored text from the beginning.
    ///
    /// On failure the document is reset to [`Value::Unknown`]; no partial tree
    /// is kept.
    ///
    /// # Errors
    ///
    /// Returns the first syntax error; it also stays available through
    /// [`Parser::error`].
    pub fn parse(&mut self) -> Result<&Value, ParseError> {
        self.log_debug(&format!(
            "Parsing {} bytes (max depth {})",
            self.input.len(),
            self.options.max_depth
        ));

        let outcome = JsonScanner::new(&self.input, self.options).parse_document();
        match outcome {
            Ok(document) => {
                self.log_debug(&format!("Parsed root {}", document.value_type()));
                self.document = document;
                self.error = None;
                Ok(&self.document)
            }
            Err(err) => {
                self.log_debug(&format!("Parse failed: {}", err));
                self.document = Value::Unknown;
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The root value; [`Value::Unknown`] unless the last parse succeeded.
    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn into_document(self) -> Value {
        self.document
    }

    /// True when the root value is typed.
    pub fn valid(&self) -> bool {
        self.document.is_valid()
    }

    /// Error of the last failed parse.
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    #[cfg(feature = "logging")]
    fn log_debug(&self, message: &str) {
        if let Some(ref logger) = self.logger {
            logger.debug(message);
        }
    }

    #[cfg(not(feature = "logging"))]
    fn log_debug(&self, _message: &str) {}
}

/// Recursive-descent scanner, one method per production.
struct JsonScanner<'a> {
    cursor: Cursor<'a>,
    depth: usize,
    max_depth: usize,
}

impl<'a> JsonScanner<'a> {
    fn new(input: &'a str, options: ParserOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    fn parse_document(mut self) -> Result<Value, ParseError> {
        self.cursor.skip_whitespace();
        if self.cursor.is_at_end() {
            return Err(self.cursor.error(ParseErrorKind::EmptyInput));
        }

        let root = self.parse_value()?;

        self.cursor.skip_whitespace();
        if !self.cursor.is_at_end() {
            return Err(self.cursor.error(ParseErrorKind::TrailingCharacters));
        }
        Ok(root)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.cursor.skip_whitespace();

        match self.cursor.peek() {
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(b't') => self.parse_literal("true", Value::Bool(true)),
            Some(b'f') => self.parse_literal("false", Value::Bool(false)),
            Some(b'n') => self.parse_literal("null", Value::Null),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.cursor.bump();

        let mut map = HashMap::new();

        self.cursor.skip_whitespace();
        if self.cursor.eat(b'}') {
            self.leave();
            return Ok(Value::Object(map));
        }

        loop {
            self.cursor.skip_whitespace();
            if self.cursor.peek() != Some(b'"') {
                return Err(self.unexpected());
            }
            let key = self.parse_string()?;

            self.cursor.skip_whitespace();
            if !self.cursor.eat(b':') {
                return Err(self.expected(ParseErrorKind::ExpectedColon));
            }

            let value = self.parse_value()?;
            // Duplicate keys: last one wins
            map.insert(key, value);

            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(b',') => {
                    self.cursor.bump();
                }
                Some(b'}') => {
                    self.cursor.bump();
                    break;
                }
                _ => return Err(self.expected(ParseErrorKind::ExpectedCommaOrClose('}'))),
            }
        }

        self.leave();
        Ok(Value::Object(map))
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.cursor.bump();

        let mut array = Vec::new();

        self.cursor.skip_whitespace();
        if self.cursor.eat(b']') {
            self.leave();
            return Ok(Value::Array(array));
        }

        loop {
            array.push(self.parse_value()?);

            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(b',') => {
                    self.cursor.bump();
                }
                Some(b']') => {
                    self.cursor.bump();
                    break;
                }
                _ => return Err(self.expected(ParseErrorKind::ExpectedCommaOrClose(']'))),
            }
        }

        self.leave();
        Ok(Value::Array(array))
    }

    /// Decodes a string literal; the cursor must be on the opening quote.
    ///
    /// Unescaped runs are copied as slices of the input, so multi-byte UTF-8
    /// passes through untouched.
    fn parse_string(&mut self) -> Result<String, ParseError> {
        self.cursor.bump();

        let mut result = String::new();
        let mut run_start = self.cursor.offset();

        loop {
            match self.cursor.peek() {
                None => return Err(self.cursor.error(ParseErrorKind::UnterminatedString)),
                Some(b'"') => {
                    result.push_str(self.cursor.slice_from(run_start));
                    self.cursor.bump();
                    return Ok(result);
                }
                Some(b'\\') => {
                    result.push_str(self.cursor.slice_from(run_start));
                    self.cursor.bump();
                    self.parse_escape_sequence(&mut result)?;
                    run_start = self.cursor.offset();
                }
                Some(0x00..=0x1F) => {
                    return Err(self.cursor.error(ParseErrorKind::ControlCharacterInString));
                }
                Some(_) => {
                    self.cursor.bump();
                }
            }
        }
    }

    fn parse_escape_sequence(&mut self, result: &mut String) -> Result<(), ParseError> {
        let Some(ch) = self.cursor.peek_char() else {
            return Err(self.cursor.error(ParseErrorKind::UnterminatedString));
        };

        let decoded = match ch {
            '"' => '"',
            '\\' => '\\',
            '/' => '/',
            'b' => '\x08',
            'f' => '\x0C',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => {
                self.cursor.bump();
                result.push(self.parse_unicode_escape()?);
                return Ok(());
            }
            other => {
                return Err(self
                    .cursor
                    .error(ParseErrorKind::InvalidEscapeSequence(other)));
            }
        };

        self.cursor.bump();
        result.push(decoded);
        Ok(())
    }

    /// Decodes the digits after `\u`, joining a high/low surrogate pair into
    /// one code point. Lone surrogates are rejected.
    fn parse_unicode_escape(&mut self) -> Result<char, ParseError> {
        let first = self.parse_hex_quad()?;

        let code = match first {
            0xD800..=0xDBFF => {
                if !(self.cursor.eat(b'\\') && self.cursor.eat(b'u')) {
                    return Err(self.invalid_unicode(format!(
                        "high surrogate \\u{:04X} is not followed by a low surrogate",
                        first
                    )));
                }
                let second = self.parse_hex_quad()?;
                if !(0xDC00..=0xDFFF).contains(&second) {
                    return Err(self.invalid_unicode(format!(
                        "\\u{:04X} cannot follow high surrogate \\u{:04X}",
                        second, first
                    )));
                }
                0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00)
            }
            0xDC00..=0xDFFF => {
                return Err(self.invalid_unicode(format!(
                    "unpaired low surrogate \\u{:04X}",
                    first
                )));
            }
            _ => first,
        };

        char::from_u32(code)
            .ok_or_else(|| self.invalid_unicode(format!("U+{:04X} is not a scalar value", code)))
    }

    fn parse_hex_quad(&mut self) -> Result<u32, ParseError> {
        let mut code = 0u32;
        for _ in 0..4 {
            let Some(ch) = self.cursor.peek_char() else {
                return Err(self.cursor.error(ParseErrorKind::UnexpectedEndOfInput));
            };
            let Some(digit) = ch.to_digit(16) else {
                return Err(self.invalid_unicode(format!(
                    "invalid hex digit '{}'",
                    ch.escape_debug()
                )));
            };
            self.cursor.bump();
            code = code * 16 + digit;
        }
        Ok(code)
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.cursor.offset();
        let mut integral = true;

        self.cursor.eat(b'-');

        match self.cursor.peek() {
            Some(b'0') => {
                self.cursor.bump();
                if matches!(self.cursor.peek(), Some(b'0'..=b'9')) {
                    return Err(self.invalid_number("leading zero"));
                }
            }
            Some(b'1'..=b'9') => {
                self.cursor.eat_digits();
            }
            _ => return Err(self.invalid_number("expected digit")),
        }

        if self.cursor.eat(b'.') {
            integral = false;
            if self.cursor.eat_digits() == 0 {
                return Err(self.invalid_number("expected digit after decimal point"));
            }
        }

        let mut has_exponent = false;
        if matches!(self.cursor.peek(), Some(b'e' | b'E')) {
            self.cursor.bump();
            integral = false;
            has_exponent = true;
            if matches!(self.cursor.peek(), Some(b'+' | b'-')) {
                self.cursor.bump();
            }
            if self.cursor.eat_digits() == 0 {
                return Err(self.invalid_number("expected digit in exponent"));
            }
        }

        match self.cursor.peek() {
            Some(b'.') if has_exponent => {
                return Err(self.invalid_number("decimal point after exponent"));
            }
            Some(b'.') => return Err(self.invalid_number("more than one decimal point")),
            Some(b'e' | b'E') => return Err(self.invalid_number("more than one exponent")),
            _ => {}
        }

        let literal = self.cursor.slice_from(start);
        if integral {
            if let Ok(int) = literal.parse::<i64>() {
                return Ok(Value::int(int));
            }
        }

        match literal.parse::<f64>() {
            Ok(double) if double.is_finite() => Ok(Value::double(double)),
            _ => Err(self.invalid_number(&format!("{} is out of range", literal))),
        }
    }

    fn parse_literal(&mut self, literal: &'static str, value: Value) -> Result<Value, ParseError> {
        for expected in literal.bytes() {
            if !self.cursor.eat(expected) {
                return Err(self.unexpected());
            }
        }
        Ok(value)
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(self
                .cursor
                .error(ParseErrorKind::DepthLimitExceeded(self.max_depth)));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Error for whatever sits under the cursor.
    fn unexpected(&self) -> ParseError {
        match self.cursor.peek_char() {
            Some(ch) => self
                .cursor
                .error(ParseErrorKind::UnexpectedCharacter(ch)),
            None => self.cursor.error(ParseErrorKind::UnexpectedEndOfInput),
        }
    }

    /// `kind` if there is input left, otherwise end-of-input.
    fn expected(&self, kind: ParseErrorKind) -> ParseError {
        if self.cursor.is_at_end() {
            self.cursor.error(ParseErrorKind::UnexpectedEndOfInput)
        } else {
            self.cursor.error(kind)
        }
    }

    fn invalid_number(&self, reason: &str) -> ParseError {
        self.cursor
            .error(ParseErrorKind::InvalidNumber(reason.to_string()))
    }

    fn invalid_unicode(&self, reason: String) -> ParseError {
        self.cursor
            .error(ParseErrorKind::InvalidUnicodeEscape(reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Number, NumberKind, ValueType};

    fn kind_of(input: &str) -> ParseErrorKind {
        parse(input).unwrap_err().kind
    }

    #[test]
    fn test_parse_simple_object() {
        let result = parse(r#"{"key": "value"}"#).unwrap();
        assert_eq!(result["key"].as_str(), Some("value"));
    }

    #[test]
    fn test_parse_nested_object() {
        let result = parse(r#"{"user": {"name": "Alice", "age": 30}}"#).unwrap();
        assert_eq!(
            result.get_path("user.name").and_then(|v| v.as_str()),
            Some("Alice")
        );
        assert_eq!(result["user"]["age"], Value::int(30));
    }

    #[test]
    fn test_parse_array_keeps_order() {
        let result = parse(r#"["a", "b", "c"]"#).unwrap();
        let arr = result.as_array().unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr[0].as_str(), Some("a"));
        assert_eq!(arr[2].as_str(), Some("c"));
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(parse("{}").unwrap(), Value::object());
        assert_eq!(parse("[ ]").unwrap(), Value::array());
        assert_eq!(parse(" [ { } , [ ] ] ").unwrap().len(), 2);
    }

    #[test]
    fn test_number_classification() {
        assert_eq!(parse("0").unwrap(), Value::int(0));
        assert_eq!(parse("-0").unwrap(), Value::int(0));
        assert_eq!(parse("42").unwrap(), Value::int(42));
        assert_eq!(parse("-17").unwrap(), Value::int(-17));
        assert_eq!(parse("0.5").unwrap(), Value::double(0.5));
        assert_eq!(parse("1e3").unwrap(), Value::double(1000.0));
        assert_eq!(parse("2.5E-1").unwrap(), Value::double(0.25));
        assert_eq!(parse("1.5e+2").unwrap(), Value::double(150.0));
    }

    #[test]
    fn test_integer_overflow_becomes_double() {
        let value = parse("18446744073709551616").unwrap();
        assert_eq!(
            value.value_type(),
            ValueType::Number(NumberKind::Double)
        );
        assert_eq!(value.as_number::<f64>(), Some(18446744073709551616.0));

        assert_eq!(
            parse("-9223372036854775808").unwrap().as_raw_number(),
            Some(Number::Integer(i64::MIN))
        );
    }

    #[test]
    fn test_malformed_numbers() {
        assert!(matches!(kind_of("01"), ParseErrorKind::InvalidNumber(_)));
        assert!(matches!(kind_of("-01"), ParseErrorKind::InvalidNumber(_)));
        assert!(matches!(kind_of("1.2.3"), ParseErrorKind::InvalidNumber(_)));
        assert!(matches!(kind_of("1e"), ParseErrorKind::InvalidNumber(_)));
        assert!(matches!(kind_of("1e+"), ParseErrorKind::InvalidNumber(_)));
        assert!(matches!(kind_of("1."), ParseErrorKind::InvalidNumber(_)));
        assert!(matches!(kind_of("-"), ParseErrorKind::InvalidNumber(_)));
        assert!(matches!(kind_of("-a"), ParseErrorKind::InvalidNumber(_)));
        assert!(matches!(kind_of("1e5.0"), ParseErrorKind::InvalidNumber(_)));
        assert!(matches!(kind_of("1e2e3"), ParseErrorKind::InvalidNumber(_)));
        assert!(matches!(kind_of("1e999"), ParseErrorKind::InvalidNumber(_)));
        assert!(matches!(kind_of(".5"), ParseErrorKind::UnexpectedCharacter('.')));
    }

    #[test]
    fn test_parse_literals() {
        assert_eq!(parse("true").unwrap(), Value::bool(true));
        assert_eq!(parse("false").unwrap(), Value::bool(false));
        assert!(parse("null").unwrap().is_null());

        assert_eq!(kind_of("tru"), ParseErrorKind::UnexpectedEndOfInput);
        assert_eq!(kind_of("trve"), ParseErrorKind::UnexpectedCharacter('v'));
        assert_eq!(kind_of("nul1"), ParseErrorKind::UnexpectedCharacter('1'));
        assert_eq!(kind_of("nullx"), ParseErrorKind::TrailingCharacters);
    }

    #[test]
    fn test_parse_string_with_escapes() {
        assert_eq!(parse(r#""a\nb""#).unwrap().as_str(), Some("a\nb"));
        assert_eq!(
            parse(r#""\"\\\/\b\f\r\t""#).unwrap().as_str(),
            Some("\"\\/\x08\x0C\r\t")
        );
        assert_eq!(parse(r#""\u0041""#).unwrap().as_str(), Some("A"));
        assert_eq!(parse(r#""\u00e9\u20AC""#).unwrap().as_str(), Some("é€"));
    }

    #[test]
    fn test_surrogate_pairs() {
        assert_eq!(parse(r#""\uD83D\uDE00""#).unwrap().as_str(), Some("😀"));
        assert!(matches!(
            kind_of(r#""\uD83D""#),
            ParseErrorKind::InvalidUnicodeEscape(_)
        ));
        assert!(matches!(
            kind_of(r#""\uD83Dx""#),
            ParseErrorKind::InvalidUnicodeEscape(_)
        ));
        assert!(matches!(
            kind_of(r#""\uD83D\u0041""#),
            ParseErrorKind::InvalidUnicodeEscape(_)
        ));
        assert!(matches!(
            kind_of(r#""\uDE00""#),
            ParseErrorKind::InvalidUnicodeEscape(_)
        ));
    }

    #[test]
    fn test_invalid_escapes() {
        assert!(matches!(
            kind_of(r#""\uZZZZ""#),
            ParseErrorKind::InvalidUnicodeEscape(_)
        ));
        assert!(matches!(
            kind_of(r#""\u12""#),
            ParseErrorKind::InvalidUnicodeEscape(_)
        ));
        assert_eq!(kind_of(r#""\u12"#), ParseErrorKind::UnexpectedEndOfInput);
        assert_eq!(kind_of(r#""\x""#), ParseErrorKind::InvalidEscapeSequence('x'));
        assert_eq!(kind_of(r#""abc\"#), ParseErrorKind::UnterminatedString);
    }

    #[test]
    fn test_multibyte_text_passes_through() {
        assert_eq!(parse("\"héllo wörld ✓\"").unwrap().as_str(), Some("héllo wörld ✓"));
        let value = parse("{\"ключ\": \"значение\"}").unwrap();
        assert_eq!(value["ключ"].as_str(), Some("значение"));
    }

    #[test]
    fn test_unterminated_and_control_characters() {
        assert_eq!(kind_of(r#""unterminated"#), ParseErrorKind::UnterminatedString);
        assert_eq!(kind_of("\"tab\there\""), ParseErrorKind::ControlCharacterInString);
        assert_eq!(kind_of("\"line\nbreak\""), ParseErrorKind::ControlCharacterInString);
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(kind_of(""), ParseErrorKind::EmptyInput);
        assert_eq!(kind_of(" \n\t "), ParseErrorKind::EmptyInput);
        assert_eq!(kind_of("{"), ParseErrorKind::UnexpectedEndOfInput);
        assert_eq!(kind_of("["), ParseErrorKind::UnexpectedEndOfInput);
        assert_eq!(kind_of("[1"), ParseErrorKind::UnexpectedEndOfInput);
        assert_eq!(kind_of(r#"{"a""#), ParseErrorKind::UnexpectedEndOfInput);
        assert_eq!(kind_of(r#"{"a" 1}"#), ParseErrorKind::ExpectedColon);
        assert_eq!(
            kind_of(r#"{"a": 1 "b": 2}"#),
            ParseErrorKind::ExpectedCommaOrClose('}')
        );
        assert_eq!(kind_of("[1 2]"), ParseErrorKind::ExpectedCommaOrClose(']'));
        assert_eq!(kind_of("[1,]"), ParseErrorKind::UnexpectedCharacter(']'));
        assert_eq!(kind_of(r#"{"a": 1,}"#), ParseErrorKind::UnexpectedCharacter('}'));
        assert_eq!(kind_of("{1: 2}"), ParseErrorKind::UnexpectedCharacter('1'));
        assert_eq!(kind_of("[,]"), ParseErrorKind::UnexpectedCharacter(','));
        assert_eq!(kind_of("invalid"), ParseErrorKind::UnexpectedCharacter('i'));
        assert_eq!(kind_of(r#"{"key": "value"} extra"#), ParseErrorKind::TrailingCharacters);
        assert_eq!(kind_of("1 2"), ParseErrorKind::TrailingCharacters);
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let result = parse(r#"{"key": "value1", "key": "value2"}"#).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result["key"].as_str(), Some("value2"));
    }

    #[test]
    fn test_error_position_missing_value() {
        let err = parse("{\n  \"x\": }").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedCharacter('}'));
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 8);
    }

    #[test]
    fn test_error_column_counts_characters() {
        let err = parse(r#"{"é": tru}"#).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedCharacter('}'));
        assert_eq!((err.line, err.column), (1, 10));
        assert_eq!(err.offset, 10);
    }

    #[test]
    fn test_depth_limit() {
        let options = ParserOptions { max_depth: 2 };
        assert!(parse_with_options("[[1]]", options).is_ok());
        assert!(parse_with_options(r#"{"a": [1]}"#, options).is_ok());

        let err = parse_with_options("[[[1]]]", options).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::DepthLimitExceeded(2));
        assert_eq!(err.column, 3);

        let deep = "[".repeat(DEFAULT_MAX_DEPTH + 1);
        assert_eq!(
            kind_of(&deep),
            ParseErrorKind::DepthLimitExceeded(DEFAULT_MAX_DEPTH)
        );
    }

    #[test]
    fn test_depth_is_released_between_siblings() {
        let options = ParserOptions { max_depth: 2 };
        assert!(parse_with_options("[[1], [2], {\"a\": {}}]", options).is_ok());
    }

    #[test]
    fn test_parser_success_state() {
        let mut parser = Parser::new(r#"{"a": [1, 2.5, "s", true, null], "b": {}}"#);
        assert!(!parser.valid());

        let root = parser.parse().unwrap();
        assert_eq!(root.len(), 2);
        assert!(parser.valid());
        assert!(parser.error().is_none());

        let document = parser.into_document();
        assert_eq!(document["b"], Value::object());
    }

    #[test]
    fn test_parser_failure_state() {
        let mut parser = Parser::new("[1, 2,");
        let err = parser.parse().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEndOfInput);
        assert!(!parser.valid());
        assert!(parser.document().is_unknown());
        assert_eq!(parser.error(), Some(&err));
    }

    #[test]
    fn test_parser_reparse_is_repeatable() {
        let mut parser = Parser::with_options("[[0]]", ParserOptions { max_depth: 4 });
        let first = parser.parse().unwrap().clone();
        let second = parser.parse().unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(parser.input(), "[[0]]");
    }
}
