//! In-memory title index split across logical submodules.

mod compare;
mod iter;
mod node;
mod tree;

pub use compare::{compare_titles, titles_equal};
pub use iter::InOrder;
pub use tree::{InsertOutcome, TitleIndex};
