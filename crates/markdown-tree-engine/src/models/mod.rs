pub mod document;
pub mod element;

pub use document::{Descendants, Document, NodeId};
pub use element::{Element, ElementKind, HeadingLevel, ListStyle};
