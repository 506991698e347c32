//! Writing value trees back out as JSON text.
//!
//! `Display` produces compact output, [`to_string_pretty`] indents with two
//! spaces. Object members are written in key order so output is stable.

use crate::value::{Number, Value};
use std::collections::HashMap;
use std::fmt::{self, Write};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_string(self))
    }
}

/// Compact JSON text for `value`.
pub fn to_string(value: &Value) -> String {
    let mut writer = TextWriter::new(false);
    writer.write_value(value, 0);
    writer.out
}

/// Indented JSON text for `value`.
///
/// ```
/// use json_tree::{parse, to_string_pretty};
///
/// let value = parse(r#"{"b": [1, 2.0], "a": null}"#).unwrap();
/// assert_eq!(
///     to_string_pretty(&value),
///     "{\n  \"a\": null,\n  \"b\": [\n    1,\n    2.0\n  ]\n}"
/// );
/// ```
pub fn to_string_pretty(value: &Value) -> String {
    let mut writer = TextWriter::new(true);
    writer.write_value(value, 0);
    writer.out
}

/// Escapes special characters in a string for JSON serialization.
pub fn escape_json_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\x08' => result.push_str("\\b"),
            '\x0C' => result.push_str("\\f"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            ch if ch.is_control() => {
                let _ = write!(result, "\\u{:04X}", ch as u32);
            }
            ch => result.push(ch),
        }
    }
    result
}

struct TextWriter {
    out: String,
    pretty: bool,
}

impl TextWriter {
    fn new(pretty: bool) -> Self {
        Self {
            out: String::new(),
            pretty,
        }
    }

    fn write_value(&mut self, value: &Value, level: usize) {
        match value {
            // Unknown has no JSON spelling
            Value::Unknown | Value::Null => self.out.push_str("null"),
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.write_number(*n),
            Value::String(s) => self.write_string(s),
            Value::Array(arr) => self.write_array(arr, level),
            Value::Object(map) => self.write_object(map, level),
        }
    }

    /// Doubles keep a fraction or exponent so they read back as doubles.
    fn write_number(&mut self, number: Number) {
        let _ = match number {
            Number::Integer(i) => write!(self.out, "{}", i),
            Number::Float(f) if f.is_finite() => write!(self.out, "{:?}", f),
            Number::Double(d) if d.is_finite() => write!(self.out, "{:?}", d),
            _ => write!(self.out, "null"),
        };
    }

    fn write_string(&mut self, s: &str) {
        self.out.push('"');
        self.out.push_str(&escape_json_string(s));
        self.out.push('"');
    }

    fn write_array(&mut self, arr: &[Value], level: usize) {
        if arr.is_empty() {
            self.out.push_str("[]");
            return;
        }
        self.out.push('[');
        for (i, item) in arr.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.newline(level + 1);
            self.write_value(item, level + 1);
        }
        self.newline(level);
        self.out.push(']');
    }

    fn write_object(&mut self, map: &HashMap<String, Value>, level: usize) {
        if map.is_empty() {
            self.out.push_str("{}");
            return;
        }
        let mut keys: Vec<&String> = map.keys().collect();
        keys.sort();

        self.out.push('{');
        for (i, key) in keys.into_iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.newline(level + 1);
            self.write_string(key);
            self.out.push(':');
            if self.pretty {
                self.out.push(' ');
            }
            self.write_value(&map[key], level + 1);
        }
        self.newline(level);
        self.out.push('}');
    }

    fn newline(&mut self, level: usize) {
        if self.pretty {
            self.out.push('\n');
            self.out.push_str(&"  ".repeat(level));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_escape_json_string() {
        assert_eq!(escape_json_string("hello"), "hello");
        assert_eq!(escape_json_string("hello\"world"), "hello\\\"world");
        assert_eq!(escape_json_string("hello\\world"), "hello\\\\world");
        assert_eq!(escape_json_string("hello\nworld"), "hello\\nworld");
        assert_eq!(escape_json_string("tab\there"), "tab\\there");
        assert_eq!(escape_json_string("bell\x07"), "bell\\u0007");
        assert_eq!(escape_json_string("ünï"), "ünï");
    }

    #[test]
    fn test_scalars_compact() {
        assert_eq!(Value::null().to_string(), "null");
        assert_eq!(Value::Unknown.to_string(), "null");
        assert_eq!(Value::bool(false).to_string(), "false");
        assert_eq!(Value::int(-12).to_string(), "-12");
        assert_eq!(Value::double(1000.0).to_string(), "1000.0");
        assert_eq!(Value::double(0.25).to_string(), "0.25");
        assert_eq!(Value::float(1.5).to_string(), "1.5");
        assert_eq!(Value::double(f64::NAN).to_string(), "null");
        assert_eq!(Value::string("a\"b").to_string(), r#""a\"b""#);
    }

    #[test]
    fn test_containers_compact_sorted() {
        let mut obj = Value::object();
        obj.set("z", Value::Array(vec![Value::int(1), Value::null()]))
            .unwrap();
        obj.set("a", Value::object()).unwrap();
        assert_eq!(obj.to_string(), r#"{"a":{},"z":[1,null]}"#);
    }

    #[test]
    fn test_output_reparses_with_same_kinds() {
        let source = r#"{"d": 2.0, "i": 2, "big": 1e300, "s": "é\n", "l": [true, {}]}"#;
        let value = parse(source).unwrap();
        assert_eq!(parse(&value.to_string()).unwrap(), value);
        assert_eq!(parse(&to_string_pretty(&value)).unwrap(), value);
    }

    #[test]
    fn test_pretty_print_nested() {
        let value = parse(r#"{"outer": {"inner": [1]}}"#).unwrap();
        let pretty = to_string_pretty(&value);
        assert_eq!(
            pretty,
            "{\n  \"outer\": {\n    \"inner\": [\n      1\n    ]\n  }\n}"
        );
    }

    #[test]
    fn test_pretty_print_empty_containers() {
        assert_eq!(to_string_pretty(&Value::array()), "[]");
        assert_eq!(to_string_pretty(&Value::object()), "{}");
    }
}
