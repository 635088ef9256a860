use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::document::{Document, NodeId};

/// Heading rank, always within `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Returns `None` for anything outside `1..=6`.
    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&level)
            .then_some(Self(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Whether a list is numbered or bulleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListStyle {
    Ordered,
    Unordered,
}

/// The closed set of node kinds a [`Document`] can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Document,
    Heading(HeadingLevel),
    Paragraph,
    CodeBlock,
    Table,
    TableRow,
    TableCell,
    List(ListStyle),
    ListItem,
}

impl ElementKind {
    /// Precedence shared by every non-heading block. Higher than any heading,
    /// so these blocks never contain later blocks.
    pub const LEAF_PRECEDENCE: u8 = 100;

    /// Nesting rank used by the tree builder: lower values sit higher in the tree.
    pub fn precedence(self) -> u8 {
        match self {
            ElementKind::Document => 0,
            ElementKind::Heading(level) => level.get() * 10,
            _ => Self::LEAF_PRECEDENCE,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Document => "document",
            ElementKind::Heading(level) => match level.get() {
                1 => "heading-1",
                2 => "heading-2",
                3 => "heading-3",
                4 => "heading-4",
                5 => "heading-5",
                _ => "heading-6",
            },
            ElementKind::Paragraph => "paragraph",
            ElementKind::CodeBlock => "code-block",
            ElementKind::Table => "table",
            ElementKind::TableRow => "table-row",
            ElementKind::TableCell => "table-cell",
            ElementKind::List(_) => "list",
            ElementKind::ListItem => "list-item",
        }
    }

    /// Kinds that hold a literal payload. Structural containers always have
    /// empty text.
    pub fn carries_text(self) -> bool {
        matches!(
            self,
            ElementKind::Heading(_)
                | ElementKind::Paragraph
                | ElementKind::CodeBlock
                | ElementKind::TableCell
                | ElementKind::ListItem
        )
    }

    pub fn is_heading(self) -> bool {
        matches!(self, ElementKind::Heading(_))
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::List(ListStyle::Ordered) => write!(f, "list(ordered)"),
            ElementKind::List(ListStyle::Unordered) => write!(f, "list(unordered)"),
            other => f.write_str(other.tag()),
        }
    }
}

impl Serialize for ElementKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Read-only view of one node in a [`Document`].
///
/// Cheap to copy; it borrows the document that owns the node.
#[derive(Clone, Copy)]
pub struct Element<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> Element<'a> {
    pub(crate) fn new(doc: &'a Document, id: NodeId) -> Self {
        Self { doc, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.doc.node(self.id).kind
    }

    /// Literal payload: heading text, paragraph text, code contents, cell or
    /// list item text. Empty for containers.
    pub fn text(&self) -> &'a str {
        &self.doc.node(self.id).text
    }

    /// Children in source order.
    pub fn children(self) -> impl Iterator<Item = Element<'a>> + 'a {
        let doc = self.doc;
        doc.node(self.id)
            .children
            .iter()
            .map(move |&id| Element::new(doc, id))
    }

    pub fn child_count(&self) -> usize {
        self.doc.node(self.id).children.len()
    }

    /// The enclosing element; `None` only for the document root.
    pub fn parent(&self) -> Option<Element<'a>> {
        self.doc
            .node(self.id)
            .parent
            .map(|id| Element::new(self.doc, id))
    }
}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("text", &self.text())
            .field("children", &self.child_count())
            .finish()
    }
}

struct Children<'a>(Element<'a>);

impl Serialize for Children<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.children())
    }
}

/// Serializes as a nested `{kind, text, children}` map. `text` is omitted for
/// containers and `children` is omitted when there are none.
impl Serialize for Element<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind();
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", &kind)?;
        if kind.carries_text() {
            map.serialize_entry("text", self.text())?;
        }
        if self.child_count() > 0 {
            map.serialize_entry("children", &Children(*self))?;
        }
        map.end()
    }
}
