//! Per-query Levenshtein automata.
//!
//! A query word and a maximum distance build a non-deterministic automaton
//! accepting exactly the strings within that distance; subset construction
//! then turns it into a DFA with explicit-symbol transitions plus one
//! default transition per state. Both live only for the duration of one
//! search call.

pub mod dfa;
pub mod nfa;

// Re-export commonly used types
pub use dfa::*;
pub use nfa::*;
