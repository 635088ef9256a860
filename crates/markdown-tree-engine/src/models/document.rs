use serde::ser::{Serialize, Serializer};

use super::element::{Element, ElementKind};
use crate::error::EngineError;

/// Index of a node in a [`Document`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The document root is always the first node.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) kind: ElementKind,
    pub(crate) text: String,
    pub(crate) children: Vec<NodeId>,
    /// Non-owning back-reference, only walked by the tree builder.
    pub(crate) parent: Option<NodeId>,
}

/// A parsed Markdown document.
///
/// Owns every element in a flat arena. The root (kind `document`) is created
/// up front; all other nodes are attached to exactly one parent when they are
/// created and never move afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create a document holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: ElementKind::Document,
                text: String::new(),
                children: Vec::new(),
                parent: None,
            }],
        }
    }

    /// Parse raw bytes, rejecting input that is not valid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(crate::parsing::parse(text))
    }

    pub fn root(&self) -> Element<'_> {
        Element::new(self, NodeId::ROOT)
    }

    pub fn get(&self, id: NodeId) -> Option<Element<'_>> {
        (id.0 < self.nodes.len()).then(|| Element::new(self, id))
    }

    /// Number of elements below the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// True when the root has no children.
    pub fn is_empty(&self) -> bool {
        self.nodes[NodeId::ROOT.0].children.is_empty()
    }

    /// Every element below the root, depth first, in source order.
    pub fn descendants(&self) -> Descendants<'_> {
        let mut stack = self.nodes[NodeId::ROOT.0].children.clone();
        stack.reverse();
        Descendants { doc: self, stack }
    }

    /// Attach a new element as the last child of `parent`.
    pub(crate) fn append(
        &mut self,
        parent: NodeId,
        kind: ElementKind,
        text: impl Into<String>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            text: text.into(),
            children: Vec::new(),
            parent: Some(parent),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn kind(&self, id: NodeId) -> ElementKind {
        self.nodes[id.0].kind
    }

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root().serialize(serializer)
    }
}

/// Pre-order iterator returned by [`Document::descendants`].
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.node(id).children.iter().rev().copied());
        Some(Element::new(self.doc, id))
    }
}
