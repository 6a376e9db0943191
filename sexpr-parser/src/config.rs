//! Parser configuration

/// Limits applied to a single parse session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum bracket nesting depth
    pub max_depth: usize,
}

impl ParserConfig {
    /// Default maximum bracket nesting depth
    ///
    /// Each level costs a few KiB of stack in debug builds; 256 levels stay
    /// well inside a 2 MiB thread stack.
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    /// Set the maximum bracket nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
