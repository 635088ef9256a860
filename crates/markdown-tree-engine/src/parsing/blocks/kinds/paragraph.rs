/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters: they are the fallback when no other block
/// kind matches, and keep the block text exactly as written, soft line breaks
/// included.
pub struct Paragraph;

impl Paragraph {
    pub fn text(block: &str) -> String {
        block.to_string()
    }
}
