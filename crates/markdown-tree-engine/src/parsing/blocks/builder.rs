use crate::models::{Document, ElementKind, NodeId};

use super::classify::Block;

/// Assembles classified blocks into a heading hierarchy.
///
/// The builder keeps a cursor on the most recently attached element. Before a
/// new element is attached, the cursor climbs towards the root while its
/// precedence is greater than or equal to the new element's. Headings therefore
/// contain everything up to the next heading of the same or higher rank, and
/// non-heading blocks never contain anything.
pub struct TreeBuilder {
    doc: Document,
    cursor: NodeId,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            doc: Document::new(),
            cursor: NodeId::ROOT,
        }
    }

    pub fn push(&mut self, block: Block) {
        let kind = block.kind();
        let parent = self.ascend_for(kind);

        let id = match block {
            Block::Heading { text, .. } | Block::Code { text } | Block::Paragraph { text } => {
                self.doc.append(parent, kind, text)
            }
            Block::Table { header, rows } => {
                let table = self.doc.append(parent, kind, "");
                for row in std::iter::once(header).chain(rows) {
                    let row_id = self.doc.append(table, ElementKind::TableRow, "");
                    for cell in row {
                        self.doc.append(row_id, ElementKind::TableCell, cell);
                    }
                }
                table
            }
            Block::List { items, .. } => {
                let list = self.doc.append(parent, kind, "");
                for item in items {
                    self.doc.append(list, ElementKind::ListItem, item);
                }
                list
            }
        };

        log::trace!("attached {kind} under {:?}", parent);
        self.cursor = id;
    }

    pub fn finish(self) -> Document {
        self.doc
    }

    /// Moves the cursor up to the nearest element with strictly lower
    /// precedence than `kind` and returns it. Stops at the root.
    fn ascend_for(&mut self, kind: ElementKind) -> NodeId {
        let rank = kind.precedence();
        while self.doc.kind(self.cursor).precedence() >= rank {
            let Some(parent) = self.doc.parent(self.cursor) else {
                break;
            };
            log::trace!(
                "cursor {} -> {}",
                self.doc.kind(self.cursor),
                self.doc.kind(parent)
            );
            self.cursor = parent;
        }
        self.cursor
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
