//! # Block Parsing
//!
//! Three steps turn source text into a [`Document`](crate::models::Document):
//!
//! 1. **Tokenization** (`tokenizer`): the source is cut into raw blocks on
//!    blank lines. Fenced code regions are raw zones: blank lines inside them
//!    do not end the block.
//!
//! 2. **Classification** (`classify`): each raw block is matched against the
//!    block rules in a fixed order and becomes a [`Block`]. The first matching
//!    rule wins and unmatched blocks become paragraphs.
//!
//! 3. **Tree building** (`builder`): a [`TreeBuilder`] attaches each block under
//!    the nearest open heading of lower precedence, using a single cursor.
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific syntax (CodeFence, Heading, Table, ListBlock, Paragraph)
//! - **`tokenizer`**: `Tokenizer` producing raw blocks
//! - **`classify`**: `BlockClassifier` producing `Block`s
//! - **`builder`**: `TreeBuilder` cursor walk producing the document tree
//!
//! ## Key Invariants
//!
//! - Tokenization and classification are total: every input yields blocks, and
//!   every block yields some `Block`
//! - Children keep source order
//! - Only headings contain later blocks

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod tokenizer;

pub use builder::TreeBuilder;
pub use classify::{Block, BlockClassifier};
pub use tokenizer::{Tokenizer, tokenize};
