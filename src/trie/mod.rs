//! Compressed trie answering prefix completion queries.

mod completion;
mod node;
mod tree;

pub use self::completion::{Leaf, Leaves, Trie, TrieDump, DEFAULT_CHUNK_SIZE};
pub use self::node::Indexes;
