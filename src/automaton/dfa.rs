//! Subset construction: determinizing the Levenshtein NFA.
//!
//! The resulting DFA keeps one transition per (state, literal symbol) pair
//! plus at most one default transition per state, taken for every symbol
//! without an explicit entry. This bounds the DFA's size independently of
//! the alphabet.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::automaton::nfa::{EdgeLabel, LevenshteinNfa};

/// A deterministic Levenshtein automaton, built fresh per query and
/// discarded after the search.
#[derive(Debug)]
pub struct LevenshteinDfa {
    start: u32,
    finals: HashSet<u32>,
    transitions: HashMap<(u32, u8), u32>,
    default_transitions: HashMap<u32, u32>,
}

impl LevenshteinDfa {
    /// Determinize `nfa` by powerset construction.
    ///
    /// Every discovered set of NFA states is identified by value and
    /// processed exactly once; DFA ids are assigned from a counter local to
    /// this call.
    pub fn determinize(nfa: &LevenshteinNfa) -> Self {
        let mut dfa = LevenshteinDfa {
            start: 0,
            finals: HashSet::new(),
            transitions: HashMap::new(),
            default_transitions: HashMap::new(),
        };

        let mut next_id: u32 = 0;
        // Numbers every discovered NFA state set; doubles as the "seen" set.
        let mut state_ids: HashMap<BTreeSet<usize>, u32> = HashMap::new();
        let mut unmarked: Vec<BTreeSet<usize>> = Vec::new();

        let first = epsilon_closure(nfa, BTreeSet::from([nfa.initial()]));
        dfa.start = fresh_id(&mut next_id);
        state_ids.insert(first.clone(), dfa.start);
        unmarked.push(first);

        while let Some(current) = unmarked.pop() {
            let current_id = state_ids[&current];

            if current.iter().any(|state| nfa.finals().contains(state)) {
                dfa.finals.insert(current_id);
            }

            for &symbol in nfa.inputs() {
                let next = epsilon_closure(nfa, nfa.move_on(&current, EdgeLabel::Literal(symbol)));
                if next.is_empty() {
                    continue;
                }
                let next_id_dfa =
                    discover(&mut state_ids, &mut unmarked, &mut next_id, next);
                dfa.transitions.insert((current_id, symbol), next_id_dfa);
            }

            // The wildcard probe covers both consuming edge kinds; only the
            // first default found for a state is kept.
            let next = epsilon_closure(nfa, nfa.move_on(&current, EdgeLabel::Any));
            if !next.is_empty() {
                let next_id_dfa = discover(&mut state_ids, &mut unmarked, &mut next_id, next);
                dfa.default_transitions
                    .entry(current_id)
                    .or_insert(next_id_dfa);
            }
        }

        dfa
    }

    /// The initial DFA state.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// True if `state` is accepting.
    pub fn is_final(&self, state: u32) -> bool {
        self.finals.contains(&state)
    }

    /// The explicit transition from `state` on `symbol`, if any.
    pub fn transition(&self, state: u32, symbol: u8) -> Option<u32> {
        self.transitions.get(&(state, symbol)).copied()
    }

    /// The fallback transition from `state` for symbols without an explicit
    /// entry, if any.
    pub fn default_transition(&self, state: u32) -> Option<u32> {
        self.default_transitions.get(&state).copied()
    }
}

fn fresh_id(next_id: &mut u32) -> u32 {
    let id = *next_id;
    *next_id += 1;
    id
}

/// Number a state set if it is new, queueing it for processing.
fn discover(
    state_ids: &mut HashMap<BTreeSet<usize>, u32>,
    unmarked: &mut Vec<BTreeSet<usize>>,
    next_id: &mut u32,
    set: BTreeSet<usize>,
) -> u32 {
    if let Some(&id) = state_ids.get(&set) {
        return id;
    }
    let id = fresh_id(next_id);
    state_ids.insert(set.clone(), id);
    unmarked.push(set);
    id
}

/// States reachable from `states` by free moves alone.
///
/// Only `EpsilonAny` edges are free; `Any` always consumes a symbol.
/// Implemented with an explicit worklist to keep large `k` off the call
/// stack.
fn epsilon_closure(nfa: &LevenshteinNfa, states: BTreeSet<usize>) -> BTreeSet<usize> {
    let mut closure = states;
    let mut unchecked: Vec<usize> = closure.iter().copied().collect();

    while let Some(from) = unchecked.pop() {
        for to in 0..nfa.size() {
            if nfa.label(from, to) == Some(EdgeLabel::EpsilonAny) && closure.insert(to) {
                unchecked.push(to);
            }
        }
    }

    closure
}
