/// Configuration for Markdown reading
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattingRules {
    /// Whether to rewrite `==highlight==` spans to Tana's `^^highlight^^`
    pub convert_highlights: bool,
    /// Whether a fenced code block becomes a single bullet instead of being
    /// classified line by line
    pub fenced_code_blocks: bool,
}

impl FormattingRules {
    pub fn with_highlights(mut self, enabled: bool) -> Self {
        self.convert_highlights = enabled;
        self
    }

    pub fn with_code_blocks(mut self, enabled: bool) -> Self {
        self.fenced_code_blocks = enabled;
        self
    }
}
