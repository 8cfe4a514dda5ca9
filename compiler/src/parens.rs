//! Precomputed parenthesis matching: for each index of the expression, the
//! index of its balancing closing parenthesis, or the index itself when the
//! position does not open a group.

use crate::ParseError;

/// Builds the matching table by scanning forward from each `(` while
/// tracking nesting depth.
///
/// An opening parenthesis whose depth never returns to zero fails with
/// [ParseError::UnbalancedParenthesis] rather than running off the end of
/// the expression.
pub fn matching_parens(expr: &[char]) -> Result<Vec<usize>, ParseError> {
    let mut table = Vec::with_capacity(expr.len());

    for (idx, &c) in expr.iter().enumerate() {
        if c != '(' {
            table.push(idx);
            continue;
        }

        let mut depth = 0usize;
        let mut current = idx;
        loop {
            match expr.get(current) {
                Some('(') => depth += 1,
                Some(')') => depth -= 1,
                Some(_) => (),
                None => return Err(ParseError::UnbalancedParenthesis { position: idx }),
            }
            if depth == 0 {
                break;
            }
            current += 1;
        }
        table.push(current);
    }

    Ok(table)
}
