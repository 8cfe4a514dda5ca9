//! Provides for the compilation of a restricted regular-expression language
//! into an epsilon-NFA from the `enfa-runtime` crate.
//!
//! The language covers single decimal-digit literals, the epsilon literal
//! `e`, concatenation `.`, union `+`, the postfix Kleene closure `*`, and
//! parenthesized grouping. Union binds loosest, then concatenation, then
//! closure.
//!
//! # Example
//!
//! ```rust
//! use enfa_compiler::compile;
//! use enfa_runtime::Symbol;
//!
//! // `1.0` concatenates the digit literals 1 and 0.
//! let mut enfa = compile("1.0").unwrap();
//!
//! assert!(enfa.accepts_sequence([Symbol::Char('1'), Symbol::Char('0')]));
//!
//! enfa.reset_active();
//! assert!(!enfa.accepts_sequence([Symbol::Char('1')]));
//!
//! // The transition relation is renderable as an ordered table.
//! let table = enfa.transition_table();
//! assert_eq!(enfa.states().count(), table.len());
//! ```

use std::fmt::{self, Display};

use enfa_runtime::StateError;

pub mod compiler;
pub mod parens;

pub use compiler::{compile, Fragment};

/// Represents a malformed expression. Any parse error aborts the entire
/// compilation; no partial automaton is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// An opening parenthesis with no balancing closing parenthesis.
    UnbalancedParenthesis { position: usize },
    /// A single-character sub-expression that is neither a decimal digit nor
    /// the epsilon literal `e`.
    InvalidAtom { character: char, position: usize },
    /// A multi-character sub-expression with no top-level operator and no
    /// trailing closure star.
    MissingOperator { position: usize },
    /// An empty expression, group, or operand.
    EmptyExpression { position: usize },
    /// Grouping nested beyond the compiler's recursion limit.
    NestingTooDeep { limit: usize },
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnbalancedParenthesis { position } => {
                write!(f, "unbalanced parenthesis at position {}", position)
            }
            Self::InvalidAtom {
                character,
                position,
            } => write!(f, "invalid atom {:?} at position {}", character, position),
            Self::MissingOperator { position } => {
                write!(f, "expected an operator by position {}", position)
            }
            Self::EmptyExpression { position } => {
                write!(f, "empty sub-expression at position {}", position)
            }
            Self::NestingTooDeep { limit } => {
                write!(f, "expression nesting exceeds the limit of {}", limit)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// The unified compilation error.
///
/// [Error::Parse] marks invalid caller input; [Error::State] marks an
/// internal consistency failure, i.e. a well-formed expression that
/// nonetheless violated an automaton invariant while being assembled.
/// Callers surfacing these over an API should map the former to a client
/// error and the latter to a server error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Parse(ParseError),
    State(StateError),
}

impl From<ParseError> for Error {
    fn from(src: ParseError) -> Self {
        Self::Parse(src)
    }
}

impl From<StateError> for Error {
    fn from(src: StateError) -> Self {
        Self::State(src)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "parse error: {}", err),
            Self::State(err) => write!(f, "state error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::State(err) => Some(err),
        }
    }
}
