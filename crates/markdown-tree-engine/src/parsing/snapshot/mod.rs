//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`outline`**: Renders a document as stable indented text for `insta`
//!   snapshot testing
//! - **`invariants`**: Runtime checks for tree correctness (single root, parent
//!   links agree with child lists, source order, rectangular tables)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
