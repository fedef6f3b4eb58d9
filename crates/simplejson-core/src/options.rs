//! Parser configuration.

/// Knobs for [`parse_with_options`](crate::parse_with_options).
///
/// The parser recurses once per nested object or array, so `max_depth` bounds
/// stack usage on hostile input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest container nesting accepted. The root object counts as depth 1.
    pub max_depth: usize,
}

impl ParseOptions {
    /// Nesting limit used by [`parse`](crate::parse).
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    pub const fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}
