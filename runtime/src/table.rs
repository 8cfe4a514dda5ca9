//! Tabular rendering of an automaton's transition relation: one row per
//! state in insertion order, one column per observed symbol.

use crate::Enfa;
use indexmap::IndexMap;
use std::fmt::{self, Display};

/// The column holding the row's state identifier.
pub const STATE_COLUMN: &str = "state";

/// The cell value rendered when no transition is defined for a pair.
pub const NOT_APPLICABLE: &str = "NA";

/// An ordered rendering of a transition relation.
///
/// Each row maps a column name (the `state` column or a symbol, epsilon shown
/// as its display glyph) to a string value, ready for a caller to serialize
/// as a JSON array of objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    columns: Vec<String>,
    rows: Vec<IndexMap<String, String>>,
}

impl TransitionTable {
    /// Column names in rendering order: `state` first, then symbols in
    /// observation order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[IndexMap<String, String>] {
        &self.rows
    }

    /// The number of rows, one per state.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Display for TransitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.columns.join("\t| "))?;
        writeln!(f, "{}", "-".repeat(8 * self.columns.len()))?;
        for row in &self.rows {
            let cells: Vec<&str> = self
                .columns
                .iter()
                .map(|column| row.get(column).map(String::as_str).unwrap_or(NOT_APPLICABLE))
                .collect();
            writeln!(f, "{}", cells.join("\t| "))?;
        }
        Ok(())
    }
}

impl Enfa {
    /// Renders the transition relation as an ordered table: for every state
    /// in insertion order and every observed symbol, the comma-joined
    /// destination identifiers, or [NOT_APPLICABLE] when the pair has no
    /// transition.
    pub fn transition_table(&self) -> TransitionTable {
        let columns: Vec<String> = std::iter::once(STATE_COLUMN.to_string())
            .chain(self.symbols().map(|symbol| symbol.to_string()))
            .collect();

        let rows = self
            .states()
            .map(|state| {
                let mut row = IndexMap::new();
                row.insert(STATE_COLUMN.to_string(), state.to_string());
                for symbol in self.symbols() {
                    let cell = match self.destinations(state, symbol) {
                        Some(dests) => dests
                            .iter()
                            .map(|dest| dest.to_string())
                            .collect::<Vec<_>>()
                            .join(","),
                        None => NOT_APPLICABLE.to_string(),
                    };
                    row.insert(symbol.to_string(), cell);
                }
                row
            })
            .collect();

        TransitionTable { columns, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;

    fn sample_enfa() -> Enfa {
        let mut enfa = Enfa::new(0, false).unwrap();
        enfa.insert_state(1, false).unwrap();
        enfa.insert_state(2, true).unwrap();
        enfa.define_transition(0, Symbol::Char('0'), &[1]).unwrap();
        enfa.define_transition(1, Symbol::Epsilon, &[2, 0]).unwrap();
        enfa
    }

    #[test]
    fn should_render_one_row_per_state_in_insertion_order() {
        let table = sample_enfa().transition_table();

        assert_eq!(3, table.len());
        let states: Vec<&str> = table
            .rows()
            .iter()
            .map(|row| row.get(STATE_COLUMN).unwrap().as_str())
            .collect();
        assert_eq!(vec!["0", "1", "2"], states);
    }

    #[test]
    fn should_render_destinations_and_the_absent_sentinel() {
        let table = sample_enfa().transition_table();
        let rows = table.rows();

        assert_eq!(Some("1"), rows[0].get("0").map(String::as_str));
        assert_eq!(Some(NOT_APPLICABLE), rows[0].get("\u{03b5}").map(String::as_str));
        assert_eq!(Some("0,2"), rows[1].get("\u{03b5}").map(String::as_str));
        assert_eq!(Some(NOT_APPLICABLE), rows[2].get("0").map(String::as_str));
    }

    #[test]
    fn should_lead_with_the_state_column() {
        let table = sample_enfa().transition_table();

        assert_eq!(STATE_COLUMN, table.columns()[0]);
        assert_eq!(3, table.columns().len());
    }

    #[test]
    fn should_render_a_readable_display_form() {
        let rendered = sample_enfa().transition_table().to_string();

        assert!(rendered.contains(STATE_COLUMN));
        assert!(rendered.contains("\u{03b5}"));
        assert!(rendered.contains(NOT_APPLICABLE));
    }
}
