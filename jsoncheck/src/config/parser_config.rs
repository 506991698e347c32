use json_tree::{DEFAULT_MAX_DEPTH, ParserOptions, impl_from_json};

/// Parser configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl_from_json! {
    ParserConfig {
        max_depth: usize,
    }
}

impl ParserConfig {
    pub fn to_options(&self) -> ParserOptions {
        ParserOptions {
            max_depth: self.max_depth,
        }
    }
}
