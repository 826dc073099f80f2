//! Fuzzy dictionary search: DFA and trie co-traversal.
//!
//! The search walks the deterministic Levenshtein automaton and the trie in
//! lockstep, depth first. A word is emitted whenever the walk stands on an
//! accepting DFA state and an end-of-word trie node; trie branches with no
//! usable transition are pruned without being visited.

use crate::automaton::{LevenshteinDfa, LevenshteinNfa};
use crate::error::Result;
use crate::trie::TrieStore;

/// Counters describing one search traversal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Trie nodes visited, including the root. Everything else was pruned.
    pub nodes_visited: usize,
}

/// Return every dictionary word within `max_distance` edits of `query`.
///
/// Results follow the trie's natural traversal order (lexicographic). The
/// query is matched byte-wise; callers normalize case and characters
/// themselves.
pub fn search(query: &str, max_distance: u32, store: &TrieStore) -> Result<Vec<String>> {
    let (matches, _) = search_with_stats(query, max_distance, store)?;
    Ok(matches)
}

/// Like [`search`], also reporting traversal statistics.
pub fn search_with_stats(
    query: &str,
    max_distance: u32,
    store: &TrieStore,
) -> Result<(Vec<String>, SearchStats)> {
    let nfa = LevenshteinNfa::build(query.as_bytes(), max_distance);
    let dfa = LevenshteinDfa::determinize(&nfa);

    let mut matches = Vec::new();
    let mut stats = SearchStats::default();
    visit(
        &dfa,
        dfa.start(),
        store,
        store.root_index(),
        &mut matches,
        &mut stats,
    )?;
    Ok((matches, stats))
}

fn visit(
    dfa: &LevenshteinDfa,
    state: u32,
    store: &TrieStore,
    node_index: usize,
    matches: &mut Vec<String>,
    stats: &mut SearchStats,
) -> Result<()> {
    stats.nodes_visited += 1;

    let node = store.get(node_index)?;
    if dfa.is_final(state) && node.is_end {
        let word = store.word_of(node_index)?;
        matches.push(String::from_utf8_lossy(&word).into_owned());
    }

    for child in store.child_range(node_index)? {
        let key = store.get(child)?.key;
        // An explicit transition on the child's symbol always wins over the
        // state's default transition for that same symbol.
        if let Some(next) = dfa.transition(state, key) {
            visit(dfa, next, store, child, matches, stats)?;
        } else if let Some(next) = dfa.default_transition(state) {
            visit(dfa, next, store, child, matches, stats)?;
        }
        // Neither kind: this whole dictionary subtree is unreachable.
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::TrieBuilder;

    const WORDS: &[&str] = &[
        "aaa", "aaaz", "aaf", "aba", "abbe", "abbf", "abc", "acd", "acz", "bx", "by",
    ];

    fn store() -> TrieStore {
        TrieBuilder::build(WORDS).unwrap()
    }

    #[test]
    fn test_distance_one_around_aba() {
        let store = store();
        let matches = search("aba", 1, &store).unwrap();

        assert!(matches.contains(&"aba".to_string())); // distance 0
        assert!(matches.contains(&"aaa".to_string())); // distance 1
        assert!(matches.contains(&"abc".to_string())); // distance 1
        assert!(!matches.contains(&"abbe".to_string())); // distance 2
        assert!(!matches.contains(&"bx".to_string())); // distance >= 2
    }

    #[test]
    fn test_distance_zero_is_exact_lookup() {
        let store = store();
        assert_eq!(search("aba", 0, &store).unwrap(), vec!["aba".to_string()]);
        assert!(search("abz", 0, &store).unwrap().is_empty());
        assert!(search("ab", 0, &store).unwrap().is_empty()); // prefix only
    }

    #[test]
    fn test_empty_query_distance_zero() {
        let store = store();
        // The empty string is never a dictionary entry; exact lookup of it
        // finds nothing.
        assert!(search("", 0, &store).unwrap().is_empty());
    }

    #[test]
    fn test_empty_query_finds_short_words() {
        let store = store();
        let matches = search("", 2, &store).unwrap();
        assert_eq!(matches, vec!["bx".to_string(), "by".to_string()]);
    }

    #[test]
    fn test_food_distance_two() {
        let store =
            TrieBuilder::build(["folders", "food", "foot", "fore", "good"]).unwrap();
        let mut matches = search("food", 2, &store).unwrap();
        matches.sort();
        assert_eq!(matches, vec!["food", "foot", "fore", "good"]);
    }

    #[test]
    fn test_no_duplicates() {
        let store = store();
        for query in ["aba", "aaa", "abbe", "zzz"] {
            for k in 0..3 {
                let matches = search(query, k, &store).unwrap();
                let mut deduped = matches.clone();
                deduped.sort();
                deduped.dedup();
                assert_eq!(matches.len(), deduped.len(), "{query} k={k}");
            }
        }
    }

    #[test]
    fn test_results_in_trie_order() {
        let store = store();
        let matches = search("aba", 1, &store).unwrap();
        let mut sorted = matches.clone();
        sorted.sort();
        // Children are contiguous and built from sorted input, so the DFS
        // order is lexicographic.
        assert_eq!(matches, sorted);
    }

    #[test]
    fn test_unrelated_branches_are_pruned() {
        let store = store();

        // "bx" at distance 0 must never descend into the 'a' subtree: only
        // the root, 'b', and its two children are reachable.
        let (matches, stats) = search_with_stats("bx", 0, &store).unwrap();
        assert_eq!(matches, vec!["bx".to_string()]);
        assert!(
            stats.nodes_visited <= 4,
            "visited {} nodes, expected the b-branch only",
            stats.nodes_visited
        );

        // A query far longer than every word prunes everything below the
        // depth budget; the full trie is larger than what gets visited.
        let (matches, stats) = search_with_stats("aaaaaaaaaa", 1, &store).unwrap();
        assert!(matches.is_empty());
        assert!(stats.nodes_visited < store.len());
    }
}
