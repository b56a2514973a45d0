//! Sum-of-products representation of Boolean functions
//!
//! This module provides the two output types of the minimizer:
//! [`Term`], a single product term (one Karnaugh block collapsed to its
//! constant bit positions), and [`SumOfProducts`], an ordered list of terms
//! whose logical OR is the minimized function.

mod display;
mod eval;

use std::collections::BTreeMap;

/// A product term: a partial assignment over bit positions
///
/// Maps each fixed bit position to its required value. Positions absent from
/// the map are free (don't-care for this term). An empty term is the
/// constant-1 term and renders as `1`.
///
/// Bit position 0 corresponds to variable `A`, position 1 to `B`, and so on;
/// rendering is defined for positions 0..26.
///
/// # Examples
///
/// ```
/// use karnaugh_logic::Term;
///
/// // B must be 0: the term "/B"
/// let term = Term::from_literals([(1, false)]);
/// assert_eq!(term.to_string(), "/B");
/// assert!(term.matches(&[false, false]));
/// assert!(term.matches(&[true, false]));
/// assert!(!term.matches(&[false, true]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Term {
    literals: BTreeMap<u32, bool>,
}

impl Term {
    /// Create the constant-1 term (no fixed positions)
    pub fn new() -> Self {
        Term {
            literals: BTreeMap::new(),
        }
    }

    /// Create a term from `(position, required value)` pairs
    pub fn from_literals<I: IntoIterator<Item = (u32, bool)>>(literals: I) -> Self {
        Term {
            literals: literals.into_iter().collect(),
        }
    }

    /// The fixed positions of this term, ascending, with their required values
    pub fn literals(&self) -> impl Iterator<Item = (u32, bool)> + '_ {
        self.literals.iter().map(|(&p, &v)| (p, v))
    }

    /// The required value at a position, or `None` if the position is free
    pub fn required(&self, position: u32) -> Option<bool> {
        self.literals.get(&position).copied()
    }

    /// Number of fixed positions
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Whether this is the constant-1 term
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

/// A Boolean function as an ordered list of product terms
///
/// Semantically the OR of its terms; an empty list is the constant-0
/// function and renders as `0`. Produced by
/// [`TruthTable::minimize`](crate::TruthTable::minimize); owned plain data,
/// so values can freely cross threads.
///
/// # Examples
///
/// ```
/// use karnaugh_logic::TruthTable;
///
/// let table = TruthTable::with_bits([0, 3], [], 2);
/// let function = table.minimize();
/// assert_eq!(function.len(), 2);
/// assert_eq!(function.to_string(), "/A/B + AB");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SumOfProducts {
    terms: Vec<Term>,
}

impl SumOfProducts {
    /// Create the constant-0 function (no terms)
    pub fn new() -> Self {
        SumOfProducts { terms: Vec::new() }
    }

    /// Create a function from a list of terms
    pub fn from_terms(terms: Vec<Term>) -> Self {
        SumOfProducts { terms }
    }

    /// The terms of this function, in the order they were discovered
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether this is the constant-0 function
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over the terms
    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }

    pub(crate) fn push(&mut self, term: Term) {
        self.terms.push(term);
    }
}

impl FromIterator<Term> for SumOfProducts {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        SumOfProducts {
            terms: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_term_is_constant_one() {
        let term = Term::new();
        assert!(term.is_empty());
        assert_eq!(term.len(), 0);
    }

    #[test]
    fn term_literals_are_sorted() {
        let term = Term::from_literals([(2, true), (0, false)]);
        let literals: Vec<_> = term.literals().collect();
        assert_eq!(literals, vec![(0, false), (2, true)]);
    }

    #[test]
    fn term_required_lookup() {
        let term = Term::from_literals([(1, false)]);
        assert_eq!(term.required(1), Some(false));
        assert_eq!(term.required(0), None);
    }

    #[test]
    fn empty_function_is_constant_zero() {
        let function = SumOfProducts::new();
        assert!(function.is_empty());
        assert_eq!(function.len(), 0);
    }
}
