//! Provides the epsilon-NFA engine backing the `enfa-compiler` crate: the
//! state/transition data model, input simulation over active-state sets, and
//! a tabular rendering of the transition relation.
//!
//! # Example
//!
//! ```rust
//! use enfa_runtime::{Enfa, Symbol};
//!
//! // Build the two-symbol automaton `ab` by hand:
//! // 0 -a-> 1 -b-> 2, with 2 accepting.
//! let mut enfa = Enfa::new(0, false).unwrap();
//! enfa.insert_state(1, false).unwrap();
//! enfa.insert_state(2, true).unwrap();
//! enfa.define_transition(0, Symbol::Char('a'), &[1]).unwrap();
//! enfa.define_transition(1, Symbol::Char('b'), &[2]).unwrap();
//!
//! assert!(enfa.accepts_sequence([Symbol::Char('a'), Symbol::Char('b')]));
//!
//! enfa.reset_active();
//! assert!(!enfa.accepts_sequence([Symbol::Char('b'), Symbol::Char('a')]));
//! ```

use indexmap::IndexSet;
use std::collections::{BTreeSet, HashMap};
use std::fmt::{self, Display};

mod closure;
pub mod table;

pub use table::TransitionTable;

/// A state identifier. Identifiers are non-negative; [DEAD_STATE] is the one
/// reserved negative value.
pub type StateId = i32;

/// The reserved identifier for the dead/invalid state. It is never a member
/// of an automaton's state set and every constructive operation rejects it.
pub const DEAD_STATE: StateId = -1;

/// An unordered, duplicate-free set of state identifiers.
pub type StateSet = BTreeSet<StateId>;

/// An input symbol, or the distinguished epsilon marker which is consumable
/// without reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Epsilon,
    Char(char),
}

impl Symbol {
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }
}

impl From<char> for Symbol {
    fn from(src: char) -> Self {
        Symbol::Char(src)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Epsilon => write!(f, "\u{03b5}"),
            Symbol::Char(c) => write!(f, "{}", c),
        }
    }
}

/// Represents a violation of the automaton's structural invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// The reserved dead-state identifier, or any negative identifier, was
    /// passed to a constructive operation.
    ReservedState(StateId),
    /// The identifier is already a member of the state set.
    DuplicateState(StateId),
    /// The identifier is not a member of the state set.
    UnregisteredState(StateId),
}

impl Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservedState(id) => {
                write!(f, "state {} is reserved and cannot be used", id)
            }
            Self::DuplicateState(id) => write!(f, "state {} is already registered", id),
            Self::UnregisteredState(id) => write!(f, "state {} is not registered", id),
        }
    }
}

impl std::error::Error for StateError {}

/// An epsilon-nondeterministic finite automaton.
///
/// States accrue monotonically while an automaton is being built; once built,
/// the structure is immutable apart from the active-state set, which tracks
/// the states consistent with the input consumed so far and can be reset to
/// the initial state at any time.
///
/// Simulation uses full transitive epsilon closure: [Enfa::step] closes the
/// active set, moves on the symbol, and closes the result, so a state is
/// active whenever it is reachable from a post-move state through any chain
/// of epsilon edges.
#[derive(Debug, Clone)]
pub struct Enfa {
    initial: StateId,
    /// All states, preserving insertion order for rendering.
    states: IndexSet<StateId>,
    finals: StateSet,
    transitions: HashMap<(StateId, Symbol), StateSet>,
    /// Every symbol observed in a transition definition, epsilon included,
    /// in observation order.
    symbols: IndexSet<Symbol>,
    active: StateSet,
    /// Memoized epsilon closures, invalidated by structural mutation.
    closures: Option<HashMap<StateId, StateSet>>,
}

impl Enfa {
    /// Instantiates an automaton holding exactly one state, which becomes
    /// both the initial state and the sole active state.
    pub fn new(initial: StateId, is_final: bool) -> Result<Self, StateError> {
        let mut enfa = Self {
            initial,
            states: IndexSet::new(),
            finals: StateSet::new(),
            transitions: HashMap::new(),
            symbols: IndexSet::new(),
            active: StateSet::from([initial]),
            closures: None,
        };
        enfa.insert_state(initial, is_final)?;
        Ok(enfa)
    }

    /// Registers a new state.
    ///
    /// Rejects the reserved dead-state identifier (and any other negative
    /// identifier) as well as identifiers that are already registered.
    pub fn insert_state(&mut self, state: StateId, is_final: bool) -> Result<(), StateError> {
        if state < 0 {
            return Err(StateError::ReservedState(state));
        }
        if !self.states.insert(state) {
            return Err(StateError::DuplicateState(state));
        }
        if is_final {
            self.finals.insert(state);
        }
        self.closures = None;
        Ok(())
    }

    /// Marks an already-registered state as accepting.
    pub fn mark_final(&mut self, state: StateId) -> Result<(), StateError> {
        if !self.states.contains(&state) {
            return Err(StateError::UnregisteredState(state));
        }
        self.finals.insert(state);
        Ok(())
    }

    /// Re-points the initial state at a registered state and resets the
    /// active set to it.
    pub fn set_initial_state(&mut self, state: StateId) -> Result<(), StateError> {
        if !self.states.contains(&state) {
            return Err(StateError::UnregisteredState(state));
        }
        self.initial = state;
        self.reset_active();
        Ok(())
    }

    /// Defines a transition from `source` on `symbol` into each of
    /// `destinations`, unioning with any destinations already defined for
    /// that pair. All endpoints must already be registered.
    pub fn define_transition(
        &mut self,
        source: StateId,
        symbol: Symbol,
        destinations: &[StateId],
    ) -> Result<(), StateError> {
        if !self.states.contains(&source) {
            return Err(StateError::UnregisteredState(source));
        }
        if let Some(&dest) = destinations.iter().find(|d| !self.states.contains(*d)) {
            return Err(StateError::UnregisteredState(dest));
        }

        self.symbols.insert(symbol);
        self.transitions
            .entry((source, symbol))
            .or_default()
            .extend(destinations.iter().copied());
        self.closures = None;
        Ok(())
    }

    /// Returns the destination set defined for a `(source, symbol)` pair, if
    /// any.
    pub fn destinations(&self, source: StateId, symbol: Symbol) -> Option<&StateSet> {
        self.transitions.get(&(source, symbol))
    }

    /// Returns a boolean signifying whether a transition from `source` to
    /// `destination` exists on `symbol`.
    pub fn path_exists(&self, source: StateId, symbol: Symbol, destination: StateId) -> bool {
        self.destinations(source, symbol)
            .is_some_and(|dests| dests.contains(&destination))
    }

    /// Consumes one input symbol: the epsilon closure of the active set is
    /// moved over `symbol` and the closure of the result replaces the active
    /// set, which is also returned.
    pub fn step(&mut self, symbol: Symbol) -> Vec<StateId> {
        let current = self.epsilon_closure_of(&self.active);

        let mut moved = StateSet::new();
        for state in &current {
            if let Some(dests) = self.transitions.get(&(*state, symbol)) {
                moved.extend(dests.iter().copied());
            }
        }

        self.active = self.epsilon_closure_of(&moved);
        self.active.iter().copied().collect()
    }

    /// Returns a boolean signifying if the automaton is in an accept state,
    /// i.e. the epsilon closure of the active set intersects the final set.
    pub fn is_in_accept_state(&self) -> bool {
        self.epsilon_closure_of(&self.active)
            .iter()
            .any(|state| self.finals.contains(state))
    }

    /// Folds [Enfa::step] over a symbol sequence, starting from the current
    /// active set, and reports whether the automaton ends in an accept state.
    pub fn accepts_sequence<I>(&mut self, symbols: I) -> bool
    where
        I: IntoIterator<Item = Symbol>,
    {
        for symbol in symbols {
            self.step(symbol);
        }
        self.is_in_accept_state()
    }

    /// Resets the active set to the initial state.
    pub fn reset_active(&mut self) {
        self.active = StateSet::from([self.initial]);
    }

    pub fn initial_state(&self) -> StateId {
        self.initial
    }

    /// All registered states in insertion order.
    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().copied()
    }

    pub fn final_states(&self) -> &StateSet {
        &self.finals
    }

    /// Every symbol observed in a transition definition, in observation
    /// order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }

    pub fn active_states(&self) -> &StateSet {
        &self.active
    }

    /// Precomputes and memoizes the epsilon closure of every state. Safe to
    /// call repeatedly; mutation invalidates the memo.
    pub fn compute_epsilon_closures(&mut self) {
        if self.closures.is_none() {
            self.closures = Some(closure::compute_all(self));
        }
    }

    /// The set of states reachable from any seed state through zero or more
    /// epsilon transitions.
    pub fn epsilon_closure_of(&self, seeds: &StateSet) -> StateSet {
        match &self.closures {
            Some(cache) => {
                let mut reachable = StateSet::new();
                for seed in seeds {
                    reachable.insert(*seed);
                    if let Some(states) = cache.get(seed) {
                        reachable.extend(states.iter().copied());
                    }
                }
                reachable
            }
            None => closure::reachable_set(self, seeds),
        }
    }

    /// Returns a boolean signifying whether `destination` is reachable from
    /// `source` through zero or more epsilon transitions.
    pub fn is_epsilon_reachable(&self, source: StateId, destination: StateId) -> bool {
        self.epsilon_closure_of(&StateSet::from([source]))
            .contains(&destination)
    }
}
