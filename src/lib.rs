//! # Falcata
//!
//! Bounded edit-distance word lookup for large, static dictionaries.
//!
//! Given a query word and a maximum Levenshtein distance, Falcata returns
//! every dictionary word within that distance without scanning the whole
//! dictionary. It builds a non-deterministic edit-distance automaton per
//! query, determinizes it by subset construction, and co-traverses the
//! resulting DFA with a packed trie of the dictionary so that only reachable
//! dictionary branches are ever visited.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Per-query Levenshtein NFA/DFA construction
//! - Streaming trie build from a sorted word list
//! - Fixed-width binary trie persistence for instant reload
//! - Read-only trie safe to share across threads

pub mod automaton;
pub mod error;
pub mod search;
pub mod trie;
pub mod util;
pub mod wordlist;

pub use automaton::{LevenshteinDfa, LevenshteinNfa};
pub use error::{FalcataError, Result};
pub use search::{SearchStats, search, search_with_stats};
pub use trie::{PackedNode, TrieBuilder, TrieStore};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
