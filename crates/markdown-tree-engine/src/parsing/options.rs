use serde::{Deserialize, Serialize};

/// Switches for the optional block rules.
///
/// The defaults enable everything. A disabled rule never matches, so blocks it
/// would have claimed fall through to the next rule (ultimately a paragraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Two-line headings underlined with `==` or `--`.
    pub setext_headings: bool,
    /// Pipe tables.
    pub tables: bool,
    /// `* item` and `1. item` lists.
    pub lists: bool,
    /// `~~~` fences in addition to backtick fences.
    pub tilde_fences: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            setext_headings: true,
            tables: true,
            lists: true,
            tilde_fences: true,
        }
    }
}
