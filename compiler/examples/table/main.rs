use enfa_compiler::compile;
use enfa_runtime::Symbol;

const USAGE: &str = "table PATTERN [DIGITS]";

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let (pattern, sequence) = match args.as_slice() {
        [pattern] => Ok((pattern, None)),
        [pattern, sequence] => Ok((pattern, Some(sequence))),
        _ => Err(USAGE.to_string()),
    }?;

    let mut enfa = compile(pattern).map_err(|e| e.to_string())?;

    println!("{}", enfa.transition_table());

    if let Some(sequence) = sequence {
        let verdict = enfa.accepts_sequence(sequence.chars().map(Symbol::Char));
        println!("{:?} accepted: {}", sequence, verdict);
    }

    Ok(())
}
