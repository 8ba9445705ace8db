#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate thiserror;

pub mod arena;
pub mod error;
pub mod trie;
pub mod words;

pub use self::error::{Error, Result};
pub use self::trie::Trie;
