//! Truth tables and the greedy covering loop
//!
//! [`TruthTable`] is the entry point for minimization: it owns the ON-set,
//! the don't-care set, and the resolved variable count, and stays immutable
//! for the duration of a call. The covering loop walks the ON-set in
//! ascending order, grows a maximal block from every index not yet covered,
//! and collects the resulting product terms.

mod block;
mod grow;

use crate::bits::{index_to_vector, minimum_bits};
use crate::cover::SumOfProducts;
use crate::error::KarnaughError;
use crate::text::parse_expression;
use block::Block;
use std::collections::BTreeSet;

/// A single-output Boolean truth table
///
/// Holds the indices where the function is true and the indices where its
/// value is unconstrained. The variable count is resolved on construction:
/// a requested width is honored when sufficient and raised otherwise, so
/// every stored index is guaranteed to fit.
///
/// Both sets iterate in ascending order, which makes minimization
/// deterministic for a given table. Instances are plain owned data;
/// independent minimization calls share nothing and may run concurrently.
///
/// # Examples
///
/// ```
/// use karnaugh_logic::TruthTable;
///
/// let table = TruthTable::with_bits([0, 1], [], 2);
/// assert_eq!(table.minimize().to_string(), "/B");
/// ```
///
/// Don't-care entries may be absorbed into blocks but never force a term of
/// their own:
///
/// ```
/// use karnaugh_logic::TruthTable;
///
/// let table = TruthTable::with_bits([1], [3], 2);
/// assert_eq!(table.minimize().to_string(), "A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    ones: BTreeSet<u64>,
    dont_cares: BTreeSet<u64>,
    bits: u32,
}

impl TruthTable {
    /// Create a table using the minimum width that fits all indices
    pub fn new<I, J>(ones: I, dont_cares: J) -> Self
    where
        I: IntoIterator<Item = u64>,
        J: IntoIterator<Item = u64>,
    {
        Self::with_bits(ones, dont_cares, 0)
    }

    /// Create a table with a requested variable count
    ///
    /// A count of 0 means "use the minimum". An insufficient count is raised
    /// to the minimum rather than rejected; callers wanting strict
    /// enforcement can compare [`bits`](Self::bits) against their request.
    pub fn with_bits<I, J>(ones: I, dont_cares: J, bits: u32) -> Self
    where
        I: IntoIterator<Item = u64>,
        J: IntoIterator<Item = u64>,
    {
        let ones: BTreeSet<u64> = ones.into_iter().collect();
        let dont_cares: BTreeSet<u64> = dont_cares.into_iter().collect();
        let bits = minimum_bits(&ones, &dont_cares, bits);
        TruthTable {
            ones,
            dont_cares,
            bits,
        }
    }

    /// Build a table from a textual sum-of-products expression
    ///
    /// The expression's index set becomes the ON-set; the don't-care set is
    /// empty. See [`parse_expression`] for the accepted format.
    ///
    /// # Examples
    ///
    /// ```
    /// use karnaugh_logic::TruthTable;
    ///
    /// let table = TruthTable::from_expression("/B", 2)?;
    /// assert_eq!(table.ones().iter().copied().collect::<Vec<_>>(), vec![0, 1]);
    /// # Ok::<(), karnaugh_logic::KarnaughError>(())
    /// ```
    pub fn from_expression(expression: &str, bits: u32) -> Result<Self, KarnaughError> {
        let (ones, bits) = parse_expression(expression, bits)?;
        Ok(Self::with_bits(ones, [], bits))
    }

    /// The indices where the function is true
    pub fn ones(&self) -> &BTreeSet<u64> {
        &self.ones
    }

    /// The indices where the function is unconstrained
    pub fn dont_cares(&self) -> &BTreeSet<u64> {
        &self.dont_cares
    }

    /// The resolved number of variables
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Whether an index may participate in a block
    pub(crate) fn is_usable(&self, index: u64) -> bool {
        self.ones.contains(&index) || self.dont_cares.contains(&index)
    }

    /// Minimize the table into a sum-of-products function
    ///
    /// Greedy covering: every true index ends up covered by exactly one
    /// discovered term. The result is a good two-level form but not
    /// guaranteed globally minimal; exact minimization is exponential and
    /// out of scope. Worst-case running time is itself exponential in
    /// [`bits`](Self::bits), so callers needing bounded latency should cap
    /// the variable count.
    pub fn minimize(&self) -> SumOfProducts {
        let mut tested: BTreeSet<u64> = BTreeSet::new();
        let mut function = SumOfProducts::new();
        for &index in &self.ones {
            if tested.contains(&index) {
                continue;
            }
            let seed = Block::singleton(index_to_vector(index, self.bits));
            let (block, _) = grow::grow(self, &tested, seed);
            tested.extend(block.indices());
            function.push(block.to_term());
        }
        function
    }

    /// Minimize and re-check the result over the whole domain
    ///
    /// Every index in `[0, 2^bits)` outside the don't-care set is evaluated
    /// and compared against ON-set membership. A mismatch yields
    /// [`KarnaughError::ValidationFailed`] with the offending index, so an
    /// empty function in the `Ok` case always genuinely means constant 0.
    pub fn minimize_validated(&self) -> Result<SumOfProducts, KarnaughError> {
        let function = self.minimize();
        for index in 0..(1u64 << self.bits) {
            if self.dont_cares.contains(&index) {
                continue;
            }
            if function.evaluate(index, self.bits) != self.ones.contains(&index) {
                return Err(KarnaughError::ValidationFailed { index });
            }
        }
        Ok(function)
    }
}

/// Minimize a truth table given as index sets
///
/// Convenience wrapper over [`TruthTable::minimize`]. A `bits` of 0 selects
/// the minimum width fitting all indices.
///
/// # Examples
///
/// ```
/// use karnaugh_logic::minimize;
///
/// let function = minimize([0, 3], [], 2);
/// assert_eq!(function.to_string(), "/A/B + AB");
/// ```
pub fn minimize<I, J>(ones: I, dont_cares: J, bits: u32) -> SumOfProducts
where
    I: IntoIterator<Item = u64>,
    J: IntoIterator<Item = u64>,
{
    TruthTable::with_bits(ones, dont_cares, bits).minimize()
}

/// Minimize a truth table straight to its textual rendering
///
/// # Examples
///
/// ```
/// use karnaugh_logic::minimize_to_string;
///
/// assert_eq!(minimize_to_string([0, 1, 2, 3], [], 2), "1");
/// assert_eq!(minimize_to_string([], [], 1), "0");
/// ```
pub fn minimize_to_string<I, J>(ones: I, dont_cares: J, bits: u32) -> String
where
    I: IntoIterator<Item = u64>,
    J: IntoIterator<Item = u64>,
{
    minimize(ones, dont_cares, bits).to_string()
}
