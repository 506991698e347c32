//! Text produced for a checked document: summaries of valid input and
//! caret diagnostics for syntax errors.

use json_tree::{NumberKind, ParseError, Value, ValueType};
use std::fmt;

/// Value counts of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStats {
    pub root: Option<ValueType>,
    pub nulls: usize,
    pub booleans: usize,
    pub integers: usize,
    pub floats: usize,
    pub doubles: usize,
    pub strings: usize,
    pub arrays: usize,
    pub objects: usize,
    /// Containers on the deepest path; 0 for a scalar document.
    pub max_depth: usize,
}

impl DocumentStats {
    pub fn collect(root: &Value) -> Self {
        let mut stats = DocumentStats {
            root: Some(root.value_type()),
            ..Default::default()
        };
        stats.visit(root, 0);
        stats
    }

    pub fn total(&self) -> usize {
        self.nulls
            + self.booleans
            + self.integers
            + self.floats
            + self.doubles
            + self.strings
            + self.arrays
            + self.objects
    }

    fn visit(&mut self, value: &Value, depth: usize) {
        match value.value_type() {
            ValueType::Unknown => {}
            ValueType::Null => self.nulls += 1,
            ValueType::Boolean => self.booleans += 1,
            ValueType::Number(NumberKind::Integer) => self.integers += 1,
            ValueType::Number(NumberKind::Float) => self.floats += 1,
            ValueType::Number(NumberKind::Double) => self.doubles += 1,
            ValueType::String => self.strings += 1,
            ValueType::Array => self.arrays += 1,
            ValueType::Object => self.objects += 1,
        }

        let children: Vec<&Value> = match value {
            Value::Array(items) => items.iter().collect(),
            Value::Object(members) => members.values().collect(),
            _ => return,
        };
        self.max_depth = self.max_depth.max(depth + 1);
        for child in children {
            self.visit(child, depth + 1);
        }
    }
}

impl fmt::Display for DocumentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = self.root.unwrap_or(ValueType::Unknown);
        writeln!(f, "valid JSON, root: {}", root)?;
        writeln!(f, "values: {}", self.total())?;
        let rows = [
            ("null", self.nulls),
            ("boolean", self.booleans),
            ("integer", self.integers),
            ("float", self.floats),
            ("double", self.doubles),
            ("string", self.strings),
            ("array", self.arrays),
            ("object", self.objects),
        ];
        for (name, count) in rows.iter().filter(|(_, count)| *count > 0) {
            writeln!(f, "  {:<8} {}", name, count)?;
        }
        write!(f, "max depth: {}", self.max_depth)
    }
}

/// Characters of source shown on each side of the reported column.
pub const DIAGNOSTIC_CONTEXT: usize = 60;

const ELLIPSIS: &str = "...";

/// Formats a syntax error as `source:line:column: error: message`, followed
/// by the offending line and a caret under the reported column.
///
/// Long lines are cut to [`DIAGNOSTIC_CONTEXT`] characters around the column,
/// with `...` marking the elided ends.
pub fn render_diagnostic(source_name: &str, text: &str, error: &ParseError) -> String {
    let line: Vec<char> = text
        .split('\n')
        .nth(error.line.saturating_sub(1))
        .unwrap_or("")
        .trim_end_matches('\r')
        .chars()
        .collect();

    let caret = error.column.saturating_sub(1).min(line.len());
    let first = caret.saturating_sub(DIAGNOSTIC_CONTEXT);
    let last = (caret + DIAGNOSTIC_CONTEXT).min(line.len());

    let mut excerpt = String::new();
    let mut padding = String::new();
    if first > 0 {
        excerpt.push_str(ELLIPSIS);
        padding.push_str(&" ".repeat(ELLIPSIS.len()));
    }
    excerpt.extend(&line[first..last]);
    if last < line.len() {
        excerpt.push_str(ELLIPSIS);
    }

    // Tabs are kept so the caret lines up under tab-indented input.
    padding.extend(
        line[first..caret]
            .iter()
            .map(|&c| if c == '\t' { '\t' } else { ' ' }),
    );

    format!(
        "{}:{}:{}: error: {}\n{}\n{}^",
        source_name, error.line, error.column, error.kind, excerpt, padding
    )
}
