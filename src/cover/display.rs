//! Textual rendering of terms and functions
//!
//! Variables are the letters `A`, `B`, `C`, ... for bit positions 0, 1, 2,
//! ... ascending; a negated variable carries a `/` prefix. A term with no
//! fixed positions renders as `1`, an empty function as `0`, and terms are
//! joined with `" + "`.

use super::{SumOfProducts, Term};
use std::fmt;

impl Term {
    /// Canonical ordering key: one entry per position up to the highest
    /// fixed one, with free positions sorting as -1.
    pub(crate) fn sort_key(&self) -> Vec<i8> {
        let max = match self.literals().last() {
            Some((p, _)) => p,
            None => return Vec::new(),
        };
        (0..=max)
            .map(|p| match self.required(p) {
                Some(value) => value as i8,
                None => -1,
            })
            .collect()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "1");
        }
        for (position, value) in self.literals() {
            if !value {
                write!(f, "/")?;
            }
            write!(f, "{}", (b'A' + position as u8) as char)?;
        }
        Ok(())
    }
}

impl fmt::Display for SumOfProducts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "0");
        }
        let mut terms: Vec<&Term> = self.iter().collect();
        terms.sort_by_key(|term| term.sort_key());
        for (i, term) in terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}
