//! Word-list ingestion for trie construction.
//!
//! Raw word lists arrive one word per line with arbitrary casing and stray
//! punctuation. Loading strips every non-ASCII-alphabetic character,
//! lowercases what remains, drops empty results and returns the words
//! sorted ascending and deduplicated — exactly the input contract of
//! [`crate::trie::TrieBuilder`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use regex::Regex;

use crate::error::Result;

/// Pattern matching every character the dictionary alphabet excludes.
const FILTER_PATTERN: &str = "[^a-zA-Z]";

/// Load and normalize a word-list file, one word per line.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let filter = Regex::new(FILTER_PATTERN).map_err(anyhow::Error::from)?;
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = filter.replace_all(&line, "").to_lowercase();
        if !word.is_empty() {
            words.push(word);
        }
    }

    words.sort();
    words.dedup();
    Ok(words)
}

/// Normalize a single word the same way [`load_word_list`] does.
///
/// Returns `None` when nothing alphabetic remains. Callers use this on
/// queries so that query and dictionary share one alphabet.
pub fn normalize_word(word: &str) -> Option<String> {
    let normalized: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}
