//! Packed trie: fixed-width node records, streaming construction from a
//! sorted word list, and a read-only, disk-backed store.

pub mod builder;
pub mod node;
pub mod store;

// Re-export commonly used types
pub use builder::*;
pub use node::*;
pub use store::*;
