//! Epsilon reachability: the set of states reachable from a source through
//! zero or more epsilon transitions, computed by breadth-first traversal.

use crate::{Enfa, StateId, StateSet, Symbol};
use std::collections::{HashMap, VecDeque};

/// Computes the epsilon closure of a seed set by breadth-first traversal.
///
/// The queue grows with the automaton; closures over arbitrarily long epsilon
/// chains stay within it.
pub(crate) fn reachable_set(enfa: &Enfa, seeds: &StateSet) -> StateSet {
    let mut reachable = StateSet::new();
    let mut queue: VecDeque<StateId> = seeds.iter().copied().collect();

    while let Some(state) = queue.pop_front() {
        if !reachable.insert(state) {
            continue;
        }

        if let Some(dests) = enfa.destinations(state, Symbol::Epsilon) {
            for dest in dests {
                if !reachable.contains(dest) {
                    queue.push_back(*dest);
                }
            }
        }
    }

    reachable
}

/// Computes the epsilon closure of every registered state, keyed by source.
///
/// Pair queries (`source` reaches `destination`) are membership checks
/// against the per-source sets.
pub(crate) fn compute_all(enfa: &Enfa) -> HashMap<StateId, StateSet> {
    enfa.states()
        .map(|state| (state, reachable_set(enfa, &StateSet::from([state]))))
        .collect()
}
