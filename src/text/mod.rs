//! Parsing textual sum-of-products expressions back into index sets
//!
//! The inverse of the [`Display`](std::fmt::Display) rendering on
//! [`SumOfProducts`](crate::SumOfProducts): an expression like `/A/B + AB`
//! is expanded into the set of truth-table indices it covers.

mod parser;

use crate::error::KarnaughError;
use std::collections::{BTreeMap, BTreeSet};

/// Parse a sum-of-products expression into its covered index set
///
/// Accepted characters are the letters `A`-`Z` (lower case is folded up),
/// space, `+`, and the negation prefixes `/` and `.`; anything else is a
/// [`KarnaughError::MalformedExpression`]. Each monomial is a run of
/// optionally negated letters; monomials are separated by `+`.
///
/// A monomial naming a variable in both polarities is structurally
/// unsatisfiable and contributes no indices. Variables not named in a
/// monomial are free: the monomial expands over both polarities of each.
/// The returned width is `max(highest letter used + 1, bits)`, counting
/// letters in unsatisfiable monomials too.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use karnaugh_logic::parse_expression;
///
/// let (indices, bits) = parse_expression("/B", 2)?;
/// assert_eq!(indices, BTreeSet::from([0, 1]));
/// assert_eq!(bits, 2);
/// # Ok::<(), karnaugh_logic::KarnaughError>(())
/// ```
pub fn parse_expression(
    input: &str,
    bits: u32,
) -> Result<(BTreeSet<u64>, u32), KarnaughError> {
    let expression = input.to_uppercase();
    if let Some((position, ch)) = expression
        .char_indices()
        .find(|&(_, c)| !matches!(c, 'A'..='Z' | ' ' | '+' | '/' | '.'))
    {
        return Err(KarnaughError::MalformedExpression {
            message: format!("invalid character {:?}", ch),
            input: input.to_string(),
            position: Some(position),
        });
    }

    let monomials = parser::parse(&expression)?;

    // Width counts every letter that appears, even in monomials later
    // discarded as unsatisfiable
    let mut width = bits;
    for monomial in &monomials {
        for &(variable, _) in monomial {
            width = width.max(variable + 1);
        }
    }

    let mut indices = BTreeSet::new();
    for monomial in &monomials {
        let mut required: BTreeMap<u32, bool> = BTreeMap::new();
        let mut satisfiable = true;
        for &(variable, polarity) in monomial {
            if let Some(previous) = required.insert(variable, polarity) {
                if previous != polarity {
                    satisfiable = false;
                    break;
                }
            }
        }
        if !satisfiable {
            continue;
        }

        let base = required
            .iter()
            .filter(|&(_, &polarity)| polarity)
            .fold(0u64, |acc, (&variable, _)| acc | (1u64 << variable));

        // Expand every unmentioned variable over both polarities
        let mut expanded = vec![base];
        for position in 0..width {
            if !required.contains_key(&position) {
                for k in 0..expanded.len() {
                    expanded.push(expanded[k] | (1u64 << position));
                }
            }
        }
        indices.extend(expanded);
    }

    Ok((indices, width))
}
