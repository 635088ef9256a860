use std::sync::OnceLock;

use regex::Regex;

/// Single-level list syntax. A block is a list only if every line is an item.
pub struct ListBlock;

impl ListBlock {
    pub const BULLET: &'static str = "* ";

    /// `* item` lines. Blank lines inside the block are skipped.
    pub fn unordered(block: &str) -> Option<Vec<String>> {
        let items = block
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let text = line.strip_prefix(Self::BULLET)?.trim();
                (!text.is_empty()).then(|| text.to_string())
            })
            .collect::<Option<Vec<_>>>()?;
        (!items.is_empty()).then_some(items)
    }

    /// `1. item` lines. The numbers are dropped without checking their order.
    pub fn ordered(block: &str) -> Option<Vec<String>> {
        static ORDERED: OnceLock<Regex> = OnceLock::new();
        let re = ORDERED
            .get_or_init(|| Regex::new(r"^[0-9]+\. (.+)$").expect("Invalid ordered list regex"));

        let items = block
            .split('\n')
            .map(|line| {
                let caps = re.captures(line)?;
                let text = caps[1].trim();
                (!text.is_empty()).then(|| text.to_string())
            })
            .collect::<Option<Vec<_>>>()?;
        (!items.is_empty()).then_some(items)
    }
}
