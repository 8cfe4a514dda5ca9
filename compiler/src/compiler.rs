//! Recursive-descent Thompson construction over an index range of the
//! expression, using the parenthesis-matching table to skip nested groups.

use enfa_runtime::{Enfa, StateError, StateId, Symbol};

use crate::parens;
use crate::{Error, ParseError};

/// Guard against unbounded recursion on pathologically nested input.
const RECURSION_LIMIT: usize = 4096;

/// An (entry, exit) state pair representing a partially built piece of the
/// automaton. Fragments are composed, never copied: each combinator consumes
/// its operands' entry/exit states and yields a new fragment backed by the
/// same automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub entry: StateId,
    pub exit: StateId,
}

/// Compiles a pattern into a ready-to-simulate epsilon-NFA.
///
/// The returned automaton has the top-level fragment's entry state as its
/// initial (and sole active) state and the fragment's exit state marked
/// accepting; callers do not need any post-compilation step before calling
/// [Enfa::accepts_sequence] or rendering the transition table.
pub fn compile(pattern: &str) -> Result<Enfa, Error> {
    let expr: Vec<char> = pattern.chars().collect();
    if expr.is_empty() {
        return Err(ParseError::EmptyExpression { position: 0 }.into());
    }

    let parens = parens::matching_parens(&expr)?;
    let end = expr.len() - 1;

    let mut compiler = Compiler::new(expr, parens)?;
    let fragment = compiler.parse_range(0, end, 0)?;

    let mut enfa = compiler.into_enfa();
    enfa.mark_final(fragment.exit)?;
    enfa.set_initial_state(fragment.entry)?;
    Ok(enfa)
}

/// The compiler context threaded through every recursive call: the
/// expression, its parenthesis-matching table, the automaton under
/// construction, and the monotonic state counter.
struct Compiler {
    expr: Vec<char>,
    parens: Vec<usize>,
    enfa: Enfa,
    next_state: StateId,
}

impl Compiler {
    fn new(expr: Vec<char>, parens: Vec<usize>) -> Result<Self, StateError> {
        Ok(Self {
            expr,
            parens,
            enfa: Enfa::new(0, false)?,
            next_state: 0,
        })
    }

    fn into_enfa(self) -> Enfa {
        self.enfa
    }

    /// Allocates the next state identifier and registers it with the
    /// automaton in one step.
    fn alloc_state(&mut self) -> Result<StateId, StateError> {
        let id = self.next_state;
        // State 0 is registered when the automaton is created.
        if id != 0 {
            self.enfa.insert_state(id, false)?;
        }
        self.next_state += 1;
        Ok(id)
    }

    fn add_edge(
        &mut self,
        source: StateId,
        symbol: Symbol,
        destination: StateId,
    ) -> Result<(), StateError> {
        self.enfa.define_transition(source, symbol, &[destination])
    }

    /// Parses the inclusive index range `start..=end` into a fragment.
    fn parse_range(&mut self, start: usize, end: usize, depth: usize) -> Result<Fragment, Error> {
        if depth > RECURSION_LIMIT {
            return Err(ParseError::NestingTooDeep {
                limit: RECURSION_LIMIT,
            }
            .into());
        }
        if start > end {
            return Err(ParseError::EmptyExpression { position: start }.into());
        }

        // Base case: a single-character atom.
        if start == end {
            let entry = self.alloc_state()?;
            let exit = self.alloc_state()?;
            match self.expr[start] {
                'e' => self.add_edge(entry, Symbol::Epsilon, exit)?,
                c if c.is_ascii_digit() => self.add_edge(entry, Symbol::Char(c), exit)?,
                c => {
                    return Err(ParseError::InvalidAtom {
                        character: c,
                        position: start,
                    }
                    .into())
                }
            }
            return Ok(Fragment { entry, exit });
        }

        // A range fully wrapped in one matching pair parses as its interior.
        if self.expr[start] == '(' && self.expr[end] == ')' && self.parens[start] == end {
            return self.parse_range(start + 1, end - 1, depth + 1);
        }

        if let Some(operator) = self.find_top_level(start, end, '+') {
            let (left, right) = self.parse_operands(start, operator, end, depth)?;
            return self.union(left, right).map_err(Error::from);
        }

        if let Some(operator) = self.find_top_level(start, end, '.') {
            let (left, right) = self.parse_operands(start, operator, end, depth)?;
            return self.concatenate(left, right).map_err(Error::from);
        }

        // No top-level operator: the range must be a closure.
        if self.expr[end] == '*' {
            let inner = self.parse_range(start, end - 1, depth + 1)?;
            return self.kleene_closure(inner).map_err(Error::from);
        }

        Err(ParseError::MissingOperator { position: end }.into())
    }

    /// Finds the leftmost top-level occurrence of `operator`, using the
    /// matching table to jump over parenthesized groups.
    fn find_top_level(&self, start: usize, end: usize, operator: char) -> Option<usize> {
        let mut idx = start;
        while idx <= end {
            idx = self.parens[idx];
            if idx <= end && self.expr[idx] == operator {
                return Some(idx);
            }
            idx += 1;
        }
        None
    }

    /// Parses the sub-ranges on either side of a binary operator.
    fn parse_operands(
        &mut self,
        start: usize,
        operator: usize,
        end: usize,
        depth: usize,
    ) -> Result<(Fragment, Fragment), Error> {
        if operator == start || operator == end {
            return Err(ParseError::EmptyExpression { position: operator }.into());
        }

        let left = self.parse_range(start, operator - 1, depth + 1)?;
        let right = self.parse_range(operator + 1, end, depth + 1)?;
        Ok((left, right))
    }

    /// Union: a new entry forks by epsilon into both operands, whose exits
    /// rejoin at a new exit.
    fn union(&mut self, left: Fragment, right: Fragment) -> Result<Fragment, StateError> {
        let entry = self.alloc_state()?;
        let exit = self.alloc_state()?;

        self.add_edge(entry, Symbol::Epsilon, left.entry)?;
        self.add_edge(entry, Symbol::Epsilon, right.entry)?;
        self.add_edge(left.exit, Symbol::Epsilon, exit)?;
        self.add_edge(right.exit, Symbol::Epsilon, exit)?;

        Ok(Fragment { entry, exit })
    }

    /// Concatenation: the left exit chains by epsilon into the right entry.
    fn concatenate(&mut self, left: Fragment, right: Fragment) -> Result<Fragment, StateError> {
        self.add_edge(left.exit, Symbol::Epsilon, right.entry)?;
        Ok(Fragment {
            entry: left.entry,
            exit: right.exit,
        })
    }

    /// Kleene closure: a new entry/exit pair with epsilon edges entering the
    /// body, leaving it, repeating it, and skipping it entirely.
    fn kleene_closure(&mut self, inner: Fragment) -> Result<Fragment, StateError> {
        let entry = self.alloc_state()?;
        let exit = self.alloc_state()?;

        self.add_edge(entry, Symbol::Epsilon, inner.entry)?;
        self.add_edge(inner.exit, Symbol::Epsilon, exit)?;
        self.add_edge(inner.exit, Symbol::Epsilon, inner.entry)?;
        self.add_edge(entry, Symbol::Epsilon, exit)?;

        Ok(Fragment { entry, exit })
    }
}
