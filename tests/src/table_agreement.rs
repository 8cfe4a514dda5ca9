use enfa_compiler::compile;
use enfa_runtime::table::{NOT_APPLICABLE, STATE_COLUMN};
use enfa_runtime::{Enfa, StateId, Symbol};

fn symbol_from_column(column: &str) -> Symbol {
    match column {
        "\u{03b5}" => Symbol::Epsilon,
        other => Symbol::Char(other.chars().next().unwrap()),
    }
}

/// Reconstructs an automaton from its rendered transition table, carrying
/// over the initial and final states, which the table does not encode.
fn rebuild_from_table(original: &Enfa) -> Enfa {
    let table = original.transition_table();
    let initial = original.initial_state();

    let mut rebuilt = Enfa::new(initial, original.final_states().contains(&initial)).unwrap();
    for row in table.rows() {
        let state: StateId = row.get(STATE_COLUMN).unwrap().parse().unwrap();
        if state != initial {
            rebuilt
                .insert_state(state, original.final_states().contains(&state))
                .unwrap();
        }
    }

    for row in table.rows() {
        let state: StateId = row.get(STATE_COLUMN).unwrap().parse().unwrap();
        for column in table.columns().iter().skip(1) {
            let cell = row.get(column).unwrap();
            if cell == NOT_APPLICABLE {
                continue;
            }
            let destinations: Vec<StateId> =
                cell.split(',').map(|dest| dest.parse().unwrap()).collect();
            rebuilt
                .define_transition(state, symbol_from_column(column), &destinations)
                .unwrap();
        }
    }

    rebuilt
}

#[test]
fn should_yield_the_same_verdicts_when_replayed_from_the_rendered_table() {
    let cases: &[(&str, &[&str])] = &[
        ("5", &["", "5", "55"]),
        ("1.0.1", &["101", "10", "1011"]),
        ("0+1", &["", "0", "1", "01"]),
        ("0*", &["", "0", "000", "010"]),
        ("(0+1.0)*.(e+1)", &["", "1", "11", "01010", "01011", "10101"]),
    ];

    for (pattern, sequences) in cases {
        let mut original = compile(pattern).unwrap();
        let mut rebuilt = rebuild_from_table(&original);

        for sequence in *sequences {
            original.reset_active();
            rebuilt.reset_active();

            let symbols: Vec<Symbol> = sequence.chars().map(Symbol::Char).collect();
            assert_eq!(
                original.accepts_sequence(symbols.iter().copied()),
                rebuilt.accepts_sequence(symbols.iter().copied()),
                "pattern {:?}, sequence {:?}",
                pattern,
                sequence
            );
        }
    }
}

#[test]
fn should_render_every_state_and_every_observed_symbol() {
    let enfa = compile("(0+1.0)*.(e+1)").unwrap();
    let table = enfa.transition_table();

    assert_eq!(enfa.states().count(), table.len());
    // `state` plus the observed symbols: epsilon, 0, and 1.
    assert_eq!(1 + enfa.symbols().count(), table.columns().len());
    assert!(table.columns().contains(&"\u{03b5}".to_string()));
}
