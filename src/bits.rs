//! Conversions between truth-table indices and bit vectors
//!
//! Bit position 0 is the least-significant bit of the index and maps to
//! variable `A`; position `bits - 1` is the most-significant. Indices and
//! vectors are bijective for a fixed width.

use std::collections::BTreeSet;

/// Convert a truth-table index into a bit vector of the given width
///
/// Bit `i` of the result is `(index >> i) & 1`. The index must fit in
/// `bits` bits; out-of-range indices are a precondition violation.
///
/// # Examples
///
/// ```
/// use karnaugh_logic::bits::index_to_vector;
///
/// assert_eq!(index_to_vector(5, 3), vec![true, false, true]);
/// assert_eq!(index_to_vector(0, 2), vec![false, false]);
/// ```
pub fn index_to_vector(index: u64, bits: u32) -> Vec<bool> {
    debug_assert!(
        bits >= 64 || index < (1u64 << bits),
        "index {} does not fit in {} bits",
        index,
        bits
    );
    (0..bits).map(|i| (index >> i) & 1 == 1).collect()
}

/// Convert a bit vector back into its truth-table index
///
/// Inverse of [`index_to_vector`]: accumulates bits starting from the
/// most-significant position.
///
/// # Examples
///
/// ```
/// use karnaugh_logic::bits::vector_to_index;
///
/// assert_eq!(vector_to_index(&[true, false, true]), 5);
/// ```
pub fn vector_to_index(vector: &[bool]) -> u64 {
    vector
        .iter()
        .rev()
        .fold(0u64, |acc, &bit| (acc << 1) | bit as u64)
}

/// Number of bits needed to represent every index in `0..=max_index`
///
/// Smallest `n` such that `2^n > max_index`, with a floor of one bit.
pub(crate) fn width_for(max_index: u64) -> u32 {
    (u64::BITS - max_index.leading_zeros()).max(1)
}

/// Compute the number of variables needed for a truth table
///
/// Returns the smallest `n` such that `2^n` exceeds every index in
/// `ones ∪ dont_cares`, with a floor of 1. A nonzero `requested` width is
/// honored when it is sufficient (allowing padding with unused high-order
/// variables); an insufficient request is silently raised to the computed
/// minimum, with a warning logged.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use karnaugh_logic::bits::minimum_bits;
///
/// let empty = BTreeSet::new();
/// assert_eq!(minimum_bits(&empty, &empty, 0), 1);
/// assert_eq!(minimum_bits(&BTreeSet::from([3]), &empty, 0), 2);
/// assert_eq!(minimum_bits(&empty, &empty, 5), 5);
/// ```
pub fn minimum_bits(ones: &BTreeSet<u64>, dont_cares: &BTreeSet<u64>, requested: u32) -> u32 {
    let max_index = ones
        .iter()
        .chain(dont_cares.iter())
        .copied()
        .max()
        .unwrap_or(0);
    let bits = width_for(max_index);
    if requested != 0 {
        if requested < bits {
            log::warn!(
                "requested width of {} variables cannot represent the table, using {}",
                requested,
                bits
            );
            return bits;
        }
        return requested;
    }
    bits
}
