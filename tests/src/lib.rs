//! Cross-crate integration tests for the pattern compiler and the automaton
//! engine.

#[cfg(test)]
mod acceptance;
#[cfg(test)]
mod table_agreement;
