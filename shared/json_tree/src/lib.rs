//! JSON text parser paired with a dynamically typed value tree.
//!
//! The parser is a single-pass recursive descent over an in-memory buffer. It
//! either returns a fully built [`Value`] or the first syntax error with its
//! 1-based line and column. Values keep the integer/float/double distinction
//! that JSON text does not make.
//!
//! # Example
//!
//! ```
//! use json_tree::{NumberKind, Parser, Value, ValueType};
//!
//! let mut parser = Parser::new(r#"{"a": [1, 2.5, "s", true, null], "b": {}}"#);
//! let root = parser.parse().unwrap();
//!
//! assert_eq!(root["a"].len(), 5);
//! assert_eq!(root["a"][0].value_type(), ValueType::Number(NumberKind::Integer));
//! assert_eq!(root["a"][1].value_type(), ValueType::Number(NumberKind::Double));
//! assert_eq!(root["b"], Value::object());
//! assert!(root["missing"].is_unknown());
//! ```

mod cursor;
pub mod de;
pub mod error;
pub mod macros;
mod parser;
pub mod ser;
mod value;

pub use de::{FromJson, from_str, required};
pub use error::{ParseError, ParseErrorKind, Result, ValueError};
pub use parser::{DEFAULT_MAX_DEPTH, Parser, ParserOptions, parse, parse_with_options};
pub use ser::{escape_json_string, to_string, to_string_pretty};
pub use value::{FromNumber, Number, NumberKind, Value, ValueType};
