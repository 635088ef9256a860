use std::sync::OnceLock;

use regex::Regex;

use crate::models::HeadingLevel;

/// Heading syntax, both the `#` prefixed form and the underlined form.
pub struct Heading;

impl Heading {
    /// `# Title` through `###### Title` on a single line.
    pub fn atx(block: &str) -> Option<(HeadingLevel, String)> {
        static ATX: OnceLock<Regex> = OnceLock::new();
        let re = ATX.get_or_init(|| Regex::new(r"^(#{1,6}) (.+)$").expect("Invalid ATX regex"));

        let caps = re.captures(block)?;
        let level = HeadingLevel::new(caps[1].len() as u8)?;
        let text = caps[2].trim();
        (!text.is_empty()).then(|| (level, text.to_string()))
    }

    /// A text line underlined by `==` (level 1) or `--` (level 2) or longer.
    pub fn setext(block: &str) -> Option<(HeadingLevel, String)> {
        static SETEXT: OnceLock<Regex> = OnceLock::new();
        let re = SETEXT.get_or_init(|| {
            Regex::new(r"^(.+)\n(==+|--+)[ \t\r]*$").expect("Invalid setext regex")
        });

        let caps = re.captures(block)?;
        let text = caps[1].trim();
        if text.is_empty() {
            return None;
        }
        let level = if caps[2].starts_with('=') { 1 } else { 2 };
        Some((HeadingLevel::new(level)?, text.to_string()))
    }
}
