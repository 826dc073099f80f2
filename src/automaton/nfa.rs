//! Non-deterministic Levenshtein automaton.
//!
//! For a query of length `n` and a maximum distance `k`, the automaton is a
//! grid of `(n+1)` columns by `(k+1)` rows; state id = `row * (n+1) + col`.
//! Moving right consumes a matching query symbol at no cost, moving up
//! consumes an arbitrary symbol (insertion), and the diagonal edge is
//! dual-purpose: it consumes an arbitrary symbol (substitution) during input
//! moves and acts as a free epsilon edge (deletion) during closure
//! computation. Accepting states are the rightmost column of every row.

use std::collections::{BTreeSet, HashSet};

/// Label of one NFA edge.
///
/// `EpsilonAny` is a tagged, dual-purpose label: [`LevenshteinNfa::move_on`]
/// treats it like [`EdgeLabel::Any`], while epsilon-closure computation
/// treats it as a free move. The two readings must stay distinct from `Any`,
/// which is never free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeLabel {
    /// Consumes exactly the given symbol.
    Literal(u8),
    /// Consumes any one symbol.
    Any,
    /// Consumes any one symbol, or none at all during closure.
    EpsilonAny,
}

/// A non-deterministic automaton accepting all strings within a bounded
/// Levenshtein distance of one query word.
#[derive(Debug)]
pub struct LevenshteinNfa {
    size: usize,
    initial: usize,
    finals: HashSet<usize>,
    /// Sorted set of distinct literal symbols in the query word.
    inputs: BTreeSet<u8>,
    /// Dense `size x size` table, row-major: `table[from * size + to]`.
    table: Vec<Option<EdgeLabel>>,
}

impl LevenshteinNfa {
    /// Build the automaton for all words within `max_distance` of `query`.
    pub fn build(query: &[u8], max_distance: u32) -> Self {
        let width = query.len() + 1;
        let height = max_distance as usize + 1;
        let size = width * height;

        let mut finals = HashSet::new();
        for row in 1..=height {
            finals.insert(row * width - 1);
        }

        let mut nfa = LevenshteinNfa {
            size,
            initial: 0,
            finals,
            inputs: BTreeSet::new(),
            table: vec![None; size * size],
        };

        // Every state except the rightmost column.
        for row in 0..height {
            for col in 0..width - 1 {
                let state = row * width + col;
                // Right: match the query symbol at this column.
                nfa.add_transition(state, state + 1, EdgeLabel::Literal(query[col]));
                if row < height - 1 {
                    // Up: insertion.
                    nfa.add_transition(state, state + width, EdgeLabel::Any);
                    // Diagonal: substitution on input, deletion on closure.
                    nfa.add_transition(state, state + width + 1, EdgeLabel::EpsilonAny);
                }
            }
        }

        // Rightmost column: trailing insertions after the query is exhausted.
        for row in 1..height {
            nfa.add_transition(row * width - 1, (row + 1) * width - 1, EdgeLabel::Any);
        }

        nfa
    }

    fn add_transition(&mut self, from: usize, to: usize, label: EdgeLabel) {
        self.table[from * self.size + to] = Some(label);
        if let EdgeLabel::Literal(symbol) = label {
            self.inputs.insert(symbol);
        }
    }

    /// Number of states.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The initial state.
    pub fn initial(&self) -> usize {
        self.initial
    }

    /// The accepting states.
    pub fn finals(&self) -> &HashSet<usize> {
        &self.finals
    }

    /// The automaton's declared alphabet of literal symbols, sorted.
    pub fn inputs(&self) -> &BTreeSet<u8> {
        &self.inputs
    }

    /// The label of the edge `from -> to`, if any.
    pub fn label(&self, from: usize, to: usize) -> Option<EdgeLabel> {
        self.table[from * self.size + to]
    }

    /// States reachable from `states` by consuming `symbol`.
    ///
    /// `Any` and `EpsilonAny` edges match every consumed symbol. When a
    /// literal symbol is requested and no state in the set has a literal edge
    /// on exactly that symbol, the result is empty even if wildcard edges
    /// exist: wildcard-only reachability never answers for a concrete symbol.
    pub fn move_on(&self, states: &BTreeSet<usize>, symbol: EdgeLabel) -> BTreeSet<usize> {
        let literal = match symbol {
            EdgeLabel::Literal(symbol) => Some(symbol),
            _ => None,
        };
        let mut matched_literal = false;
        let mut result = BTreeSet::new();

        for &from in states {
            for to in 0..self.size {
                match self.label(from, to) {
                    Some(EdgeLabel::Any) | Some(EdgeLabel::EpsilonAny) => {
                        result.insert(to);
                    }
                    Some(EdgeLabel::Literal(edge_symbol)) if literal == Some(edge_symbol) => {
                        matched_literal = true;
                        result.insert(to);
                    }
                    _ => {}
                }
            }
        }

        if literal.is_some() && !matched_literal {
            result.clear();
        }
        result
    }
}
