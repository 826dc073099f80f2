use falcata::trie::{TrieBuilder, TrieStore};
use falcata::util::levenshtein::{levenshtein_distance, linear_search};
use falcata::{search, search_with_stats};

use rand::Rng;
use tempfile::tempdir;

const WORDS: &[&str] = &[
    "aaa", "aaaz", "aaf", "aba", "abbe", "abbf", "abc", "acd", "acz", "bx", "by",
];

fn build(words: &[&str]) -> TrieStore {
    TrieBuilder::build(words).unwrap()
}

#[test]
fn test_build_save_load_search_round_trip() {
    let store = build(WORDS);

    let dir = tempdir().unwrap();
    let path = dir.path().join("words.trie");
    store.save(&path).unwrap();

    let loaded = TrieStore::load(&path).unwrap();
    assert_eq!(loaded.len(), store.len());
    for i in 0..store.len() {
        assert_eq!(loaded.get(i).unwrap(), store.get(i).unwrap());
    }

    let matches = search("aba", 1, &loaded).unwrap();
    assert!(matches.contains(&"aba".to_string()));
    assert!(matches.contains(&"aaa".to_string()));
    assert!(!matches.contains(&"abbe".to_string()));
}

#[test]
fn test_matches_agree_with_reference_distance() {
    let store = build(WORDS);

    for query in ["aba", "aaa", "abb", "ac", "b", "zzzz", "abbez"] {
        for k in 0..=2u32 {
            let mut matches = search(query, k, &store).unwrap();
            matches.sort();

            let mut expected = linear_search(query, k as usize, WORDS.iter().copied());
            expected.sort();

            assert_eq!(matches, expected, "query={query} k={k}");
        }
    }
}

#[test]
fn test_inclusion_tracks_edit_distance() {
    let store = build(WORDS);

    for word in WORDS {
        for query in ["aba", "bx", "aaf"] {
            let distance = levenshtein_distance(query, word) as u32;
            for k in 0..=3u32 {
                let matches = search(query, k, &store).unwrap();
                let included = matches.contains(&word.to_string());
                assert_eq!(
                    included,
                    k >= distance,
                    "word={word} query={query} k={k} distance={distance}"
                );
            }
        }
    }
}

#[test]
fn test_randomized_against_linear_scan() {
    let mut rng = rand::rng();

    let mut words: Vec<String> = (0..300)
        .map(|_| {
            let len = rng.random_range(1..=6);
            (0..len)
                .map(|_| (b'a' + rng.random_range(0..3u8)) as char)
                .collect()
        })
        .collect();
    words.sort();
    words.dedup();

    let store = TrieBuilder::build(&words).unwrap();

    for _ in 0..20 {
        let len = rng.random_range(0..=7);
        let query: String = (0..len)
            .map(|_| (b'a' + rng.random_range(0..3u8)) as char)
            .collect();
        let k = rng.random_range(0..=2u32);

        let mut matches = search(&query, k, &store).unwrap();
        matches.sort();

        let mut expected =
            linear_search(&query, k as usize, words.iter().map(String::as_str));
        expected.sort();

        assert_eq!(matches, expected, "query={query:?} k={k}");
    }
}

#[test]
fn test_explicit_transition_beats_default() {
    // distance("aa", "aab") = 1, via one trailing insertion. Reaching "aab"
    // requires taking the explicit 'a' transitions even though the start
    // state also carries a default transition; spending the default's edit
    // budget on the 'a' children instead would lose the match.
    let store = build(&["aab"]);
    let matches = search("aa", 1, &store).unwrap();
    assert_eq!(matches, vec!["aab".to_string()]);
}

#[test]
fn test_length_gap_prunes_without_visiting_unrelated_branches() {
    let store = build(WORDS);

    // A query much longer than every dictionary word: nothing matches, and
    // the unrelated deep branch is abandoned once the edit budget is spent.
    // Reachable: root, the three a-nodes, and the first two z-nodes (one
    // substitution, then one wildcard step before the automaton dies).
    let deep = build(&["aaa", "zzzzzzzzzz"]);
    let (matches, stats) = search_with_stats("aaaaaaaaaa", 2, &deep).unwrap();
    assert!(matches.is_empty());
    assert!(
        stats.nodes_visited <= 6,
        "visited {} of {} nodes",
        stats.nodes_visited,
        deep.len()
    );

    // A query with no overlap at all is cut off at the first letter.
    let (matches, stats) = search_with_stats("zzzz", 1, &store).unwrap();
    assert!(matches.is_empty());
    // Root plus at most the root's direct children.
    assert!(stats.nodes_visited <= 3, "visited {}", stats.nodes_visited);
}

#[test]
fn test_exact_search_on_loaded_trie() {
    let store = build(WORDS);
    let dir = tempdir().unwrap();
    let path = dir.path().join("words.trie");
    store.save(&path).unwrap();
    let loaded = TrieStore::load(&path).unwrap();

    for word in WORDS {
        assert_eq!(
            search(word, 0, &loaded).unwrap(),
            vec![word.to_string()],
            "exact lookup of {word}"
        );
    }
    assert!(search("aaz", 0, &loaded).unwrap().is_empty());
}
