//! Evaluation of terms and functions against truth-table indices

use super::{SumOfProducts, Term};
use crate::bits::{index_to_vector, width_for};

impl Term {
    /// Check whether a bit vector satisfies this term
    ///
    /// Every fixed position must carry its required value. Fixed positions
    /// beyond the end of the vector are treated as zero bits, so a term
    /// derived under a wider domain can still be evaluated against a
    /// narrower one.
    pub fn matches(&self, vector: &[bool]) -> bool {
        self.literals().all(|(position, required)| {
            match vector.get(position as usize) {
                Some(&bit) => bit == required,
                None => !required,
            }
        })
    }
}

impl SumOfProducts {
    /// Evaluate the function at a truth-table index
    ///
    /// The function is true iff any term matches; scanning short-circuits on
    /// the first satisfied term. The width is raised as needed so the index
    /// always fits, making evaluation total over all `u64` indices.
    ///
    /// # Examples
    ///
    /// ```
    /// use karnaugh_logic::TruthTable;
    ///
    /// let function = TruthTable::with_bits([0, 1], [], 2).minimize();
    /// assert!(function.evaluate(0, 2));
    /// assert!(function.evaluate(1, 2));
    /// assert!(!function.evaluate(2, 2));
    /// ```
    pub fn evaluate(&self, index: u64, bits: u32) -> bool {
        let bits = bits.max(width_for(index));
        let vector = index_to_vector(index, bits);
        self.iter().any(|term| term.matches(&vector))
    }
}
