/// Nesting limit applied when no options are given.
pub const DEFAULT_MAX_DEPTH: usize = 200;

/// Decoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Maximum container nesting. A value whose deepest chain of arrays and
    /// maps is `n` levels long decodes iff `n <= max_depth`.
    pub max_depth: usize,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecoderOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
