use enfa_compiler::{compile, Error, ParseError};
use enfa_runtime::{Symbol, DEAD_STATE};

fn digits(sequence: &str) -> Vec<Symbol> {
    sequence.chars().map(Symbol::Char).collect()
}

fn assert_verdicts(pattern: &str, accepted: &[&str], rejected: &[&str]) {
    let mut enfa = compile(pattern).unwrap();

    for sequence in accepted {
        enfa.reset_active();
        assert!(
            enfa.accepts_sequence(digits(sequence)),
            "pattern {:?} should accept {:?}",
            pattern,
            sequence
        );
    }
    for sequence in rejected {
        enfa.reset_active();
        assert!(
            !enfa.accepts_sequence(digits(sequence)),
            "pattern {:?} should reject {:?}",
            pattern,
            sequence
        );
    }
}

#[test]
fn should_accept_exactly_the_literal_for_a_single_digit() {
    assert_verdicts("5", &["5"], &["", "4", "55"]);
}

#[test]
fn should_accept_only_the_exact_concatenation() {
    assert_verdicts("1.0", &["10"], &["01", "1", "100"]);
    assert_verdicts("1.0.1", &["101"], &["10", "1011"]);
}

#[test]
fn should_accept_either_union_operand_but_not_both() {
    assert_verdicts("0+1", &["0", "1"], &["", "01"]);
}

#[test]
fn should_accept_any_repetition_under_closure() {
    assert_verdicts("0*", &["", "0", "00", "0000"], &["1", "01", "001"]);
}

#[test]
fn should_accept_exactly_the_empty_sequence_for_the_epsilon_literal() {
    assert_verdicts("e", &[""], &["0", "00"]);
}

#[test]
fn should_accept_the_language_of_a_composite_pattern() {
    // (0 | 10)* followed by an optional 1.
    assert_verdicts(
        "(0+1.0)*.(e+1)",
        &["", "1", "0", "10", "001", "01010", "10101"],
        &["11", "01011"],
    );
}

#[test]
fn should_refuse_malformed_patterns_without_panicking() {
    for (pattern, expected) in [
        (
            "(0+1",
            Error::Parse(ParseError::UnbalancedParenthesis { position: 0 }),
        ),
        (
            "0+1)",
            Error::Parse(ParseError::MissingOperator { position: 3 }),
        ),
        (
            "0..1",
            Error::Parse(ParseError::EmptyExpression { position: 2 }),
        ),
    ] {
        assert_eq!(Err(expected), compile(pattern).map(|_| ()), "pattern {:?}", pattern);
    }
}

#[test]
fn should_number_states_sequentially_and_never_emit_the_dead_state() {
    for pattern in ["5", "1.0.1", "0+1", "0*", "(0+1.0)*.(e+1)", "((e))"] {
        let enfa = compile(pattern).unwrap();
        let states: Vec<_> = enfa.states().collect();

        assert!(!states.is_empty());
        assert_eq!((0..states.len() as i32).collect::<Vec<_>>(), states);
        assert!(!states.contains(&DEAD_STATE));
        assert!(enfa
            .final_states()
            .iter()
            .all(|state| states.contains(state)));
    }
}
