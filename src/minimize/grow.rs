//! Recursive maximal-block search
//!
//! Grows a candidate block by merging it with valid neighbor blocks, one
//! adjacency axis at a time. This is a bounded backtracking search:
//! recursion depth is at most `bits` (the block doubles on every level) and
//! each level scans at most `bits` neighbors, so the worst case is
//! exponential in `bits`, as intrinsic to two-level minimization. Two
//! pruning rules cut the search in practice.

use super::block::Block;
use super::TruthTable;
use log::trace;
use std::collections::BTreeSet;

/// Grow `block` into the best maximal block reachable from it
///
/// Returns the best block found and an exhaustion flag. The flag means no
/// larger block is reachable from this point, letting the caller skip the
/// remaining sibling neighbors; it propagates up the recursion.
///
/// Candidates are compared by size first, then by weight: the count of
/// covered indices that are true in the table, not yet covered by an earlier
/// term, and not don't-cares. The weight steers ties toward blocks that
/// retire unused true entries instead of leaning on don't-cares or entries
/// already covered.
pub(crate) fn grow(table: &TruthTable, tested: &BTreeSet<u64>, block: Block) -> (Block, bool) {
    let full = 1usize << block.width();
    let half = full >> 1;

    let mut best = block.clone();
    let mut best_weight = 0;
    let mut exhausted = false;

    for neighbor in block.neighbors() {
        if neighbor.indices().all(|index| table.is_usable(index)) {
            trace!(
                "merging neighbor {:?} into block of {}",
                neighbor.indices().collect::<Vec<_>>(),
                block.len()
            );
            let (candidate, sub_exhausted) = grow(table, tested, block.merged_with(&neighbor));
            let candidate_weight = weight(table, tested, &candidate);
            if candidate.len() > best.len()
                || (candidate.len() == best.len() && candidate_weight > best_weight)
            {
                trace!(
                    "better block of {} found, weight {} (was {})",
                    candidate.len(),
                    candidate_weight,
                    best_weight
                );
                best = candidate;
                best_weight = candidate_weight;
            }
            if sub_exhausted {
                // A deeper level proved nothing larger is reachable
                exhausted = true;
                break;
            }
            if best.len() == full {
                // The whole domain is covered already
                break;
            }
        } else if block.len() == half {
            // A block spanning half the domain has a single adjacency axis
            // left; once it fails there is nothing larger to find
            exhausted = true;
            break;
        }
    }

    (best, exhausted)
}

/// Count the not-yet-covered true entries of a block
fn weight(table: &TruthTable, tested: &BTreeSet<u64>, block: &Block) -> usize {
    block
        .indices()
        .filter(|index| {
            table.ones().contains(index)
                && !tested.contains(index)
                && !table.dont_cares().contains(index)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::index_to_vector;
    use test_log::test;

    fn grow_from(table: &TruthTable, index: u64) -> (Vec<u64>, bool) {
        let tested = BTreeSet::new();
        let seed = Block::singleton(index_to_vector(index, table.bits()));
        let (block, exhausted) = grow(table, &tested, seed);
        let mut covered: Vec<u64> = block.indices().collect();
        covered.sort_unstable();
        (covered, exhausted)
    }

    #[test]
    fn isolated_entry_stays_singleton() {
        let table = TruthTable::with_bits([0, 3], [], 2);
        let (covered, exhausted) = grow_from(&table, 0);
        assert_eq!(covered, vec![0]);
        assert!(!exhausted);
    }

    #[test]
    fn adjacent_pair_is_grouped() {
        let table = TruthTable::with_bits([0, 1], [], 2);
        let (covered, exhausted) = grow_from(&table, 0);
        assert_eq!(covered, vec![0, 1]);
        assert!(exhausted);
    }

    #[test]
    fn full_domain_is_one_block() {
        let table = TruthTable::with_bits([0, 1, 2, 3], [], 2);
        let (covered, _) = grow_from(&table, 0);
        assert_eq!(covered, vec![0, 1, 2, 3]);
    }

    #[test]
    fn dont_cares_enlarge_blocks() {
        let table = TruthTable::with_bits([1], [3], 2);
        let (covered, _) = grow_from(&table, 1);
        assert_eq!(covered, vec![1, 3]);
    }

    #[test]
    fn weight_prefers_untested_true_entries() {
        // From index 5 both {5, 7} and {5, 4} are size-2 blocks, but 4 is a
        // don't-care while 7 is an uncovered true entry; weight must pick 7.
        let table = TruthTable::with_bits([5, 7], [4], 3);
        let tested = BTreeSet::new();
        let seed = Block::singleton(index_to_vector(5, 3));
        let (block, _) = grow(&table, &tested, seed);
        let mut covered: Vec<u64> = block.indices().collect();
        covered.sort_unstable();
        assert_eq!(covered, vec![5, 7]);
    }
}
