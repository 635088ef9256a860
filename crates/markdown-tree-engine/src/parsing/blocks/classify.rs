use crate::models::{ElementKind, HeadingLevel, ListStyle};
use crate::parsing::ParserOptions;

use super::kinds::{CodeFence, Heading, ListBlock, Paragraph, Table, TableRows};

/// A tokenized block after classification. Each variant carries only the
/// payload its kind needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: HeadingLevel, text: String },
    Code { text: String },
    Table { header: Vec<String>, rows: Vec<Vec<String>> },
    List { style: ListStyle, items: Vec<String> },
    Paragraph { text: String },
}

impl Block {
    /// The element kind this block becomes in the tree.
    pub fn kind(&self) -> ElementKind {
        match self {
            Block::Heading { level, .. } => ElementKind::Heading(*level),
            Block::Code { .. } => ElementKind::CodeBlock,
            Block::Table { .. } => ElementKind::Table,
            Block::List { style, .. } => ElementKind::List(*style),
            Block::Paragraph { .. } => ElementKind::Paragraph,
        }
    }
}

/// Decides the kind of a raw block. Stateless apart from its options.
///
/// Rules are tried in a fixed order and the first match wins: headings, fenced
/// code, tables, unordered lists, ordered lists. Anything else is a paragraph,
/// so classification never fails.
#[derive(Debug, Clone, Default)]
pub struct BlockClassifier {
    options: ParserOptions,
}

impl BlockClassifier {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn classify(&self, block: &str) -> Block {
        if let Some((level, text)) = Heading::atx(block) {
            return Block::Heading { level, text };
        }
        if self.options.setext_headings
            && let Some((level, text)) = Heading::setext(block)
        {
            return Block::Heading { level, text };
        }
        if let Some(text) = CodeFence::body(block, self.options.tilde_fences) {
            return Block::Code { text };
        }
        if self.options.tables
            && let Some(TableRows { header, body }) = Table::parse(block)
        {
            return Block::Table { header, rows: body };
        }
        if self.options.lists {
            if let Some(items) = ListBlock::unordered(block) {
                return Block::List {
                    style: ListStyle::Unordered,
                    items,
                };
            }
            if let Some(items) = ListBlock::ordered(block) {
                return Block::List {
                    style: ListStyle::Ordered,
                    items,
                };
            }
        }
        Block::Paragraph {
            text: Paragraph::text(block),
        }
    }
}
