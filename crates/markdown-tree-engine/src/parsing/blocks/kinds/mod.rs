pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod table;

pub use code_fence::{CodeFence, FenceKind};
pub use heading::Heading;
pub use list::ListBlock;
pub use paragraph::Paragraph;
pub use table::{Table, TableRows};
