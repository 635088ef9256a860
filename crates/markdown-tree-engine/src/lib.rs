//! # markdown-tree-engine
//!
//! Turns Markdown source into a hierarchical document tree for renderers.
//!
//! ```text
//! Source Text → Tokenizer → Blocks → Classifier → Block → TreeBuilder → Document
//! ```
//!
//! Headings form the structure: a heading contains every following block until
//! a heading of the same or higher rank appears. Paragraphs, code blocks,
//! tables and lists are leaves of that structure (tables and lists expand into
//! rows/cells and items).
//!
//! ```
//! use markdown_tree_engine::{ElementKind, parse};
//!
//! let doc = parse("# H1\n\n## H2\n\nBody");
//! let h1 = doc.root().children().next().unwrap();
//! let h2 = h1.children().next().unwrap();
//!
//! assert_eq!(h1.text(), "H1");
//! assert_eq!(h2.children().next().unwrap().kind(), ElementKind::Paragraph);
//! ```
//!
//! Parsing never fails. Input that matches no block rule becomes a paragraph
//! holding the raw text.

pub mod error;
pub mod models;
pub mod parsing;

pub use error::EngineError;
pub use models::{Document, Element, ElementKind, HeadingLevel, ListStyle, NodeId};
pub use parsing::{ParserOptions, parse, parse_with_options};
