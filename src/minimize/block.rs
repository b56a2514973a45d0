//! Candidate blocks of bit vectors and their Karnaugh adjacency
//!
//! A block is a nonempty ordered set of equal-width bit vectors under
//! expansion. Its neighbors are the blocks obtained by flipping exactly one
//! fixed bit position across every member, the single-bit-change adjacency a
//! Karnaugh map encodes geometrically.

use crate::bits::vector_to_index;
use crate::cover::Term;

/// A candidate group of truth-table entries being grown into a product term
#[derive(Debug, Clone)]
pub(crate) struct Block {
    vectors: Vec<Vec<bool>>,
}

impl Block {
    pub(crate) fn singleton(vector: Vec<bool>) -> Self {
        debug_assert!(!vector.is_empty());
        Block {
            vectors: vec![vector],
        }
    }

    /// Number of vectors in the block (always a power of two)
    pub(crate) fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Width of every member vector
    pub(crate) fn width(&self) -> u32 {
        self.vectors[0].len() as u32
    }

    /// The truth-table indices covered by this block
    pub(crate) fn indices(&self) -> impl Iterator<Item = u64> + '_ {
        self.vectors.iter().map(|v| vector_to_index(v))
    }

    /// Bit positions whose value is identical across every member
    pub(crate) fn fixed_bits(&self) -> Vec<u32> {
        (0..self.width())
            .filter(|&p| {
                self.vectors
                    .windows(2)
                    .all(|pair| pair[0][p as usize] == pair[1][p as usize])
            })
            .collect()
    }

    /// All single-bit-flip neighbor blocks, one per fixed bit position
    ///
    /// Each neighbor has the same number of vectors as this block and
    /// represents the other half of the Karnaugh adjacency along its axis.
    pub(crate) fn neighbors(&self) -> Vec<Block> {
        self.fixed_bits()
            .into_iter()
            .map(|p| Block {
                vectors: self
                    .vectors
                    .iter()
                    .map(|v| {
                        let mut flipped = v.clone();
                        flipped[p as usize] = !flipped[p as usize];
                        flipped
                    })
                    .collect(),
            })
            .collect()
    }

    /// This block extended with every vector of a neighbor
    pub(crate) fn merged_with(&self, neighbor: &Block) -> Block {
        let mut vectors = self.vectors.clone();
        vectors.extend(neighbor.vectors.iter().cloned());
        Block { vectors }
    }

    /// Collapse the block to a product term over its fixed bit positions
    ///
    /// All members agree on fixed positions, so the value is read off the
    /// first one. Varying positions are omitted (free variables).
    pub(crate) fn to_term(&self) -> Term {
        Term::from_literals(
            self.fixed_bits()
                .into_iter()
                .map(|p| (p, self.vectors[0][p as usize])),
        )
    }
}
