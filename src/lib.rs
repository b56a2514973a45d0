//! # Karnaugh Logic Minimizer
//!
//! This crate minimizes a single-output Boolean function given as a truth
//! table (the indices where the function is true, plus optional don't-care
//! indices) into a compact sum-of-products expression, using a
//! Karnaugh-map-style adjacency grouping algorithm.
//!
//! ## Overview
//!
//! On a Karnaugh map, adjacent true cells are grouped into power-of-two
//! blocks and each block collapses to one product term over the variables
//! that stay constant inside it. This crate performs the same grouping
//! programmatically: starting from each uncovered true entry it recursively
//! merges a block with its single-bit-flip neighbors, keeps the largest
//! block found (breaking size ties by how many unused true entries a block
//! retires), and repeats until every true entry is covered. It's useful for:
//!
//! - Digital logic design and teaching tools
//! - Small logic synthesis pipelines
//! - Boolean function simplification
//!
//! The covering is a greedy heuristic: the result is correct and compact but
//! not guaranteed globally minimal. Exact two-level minimization is
//! NP-complete, and the search here is already exponential in the number of
//! variables in the worst case.
//!
//! ## Minimizing a truth table
//!
//! ```
//! use karnaugh_logic::TruthTable;
//!
//! // f(A, B) is true on rows 0 and 1: B must be 0, A is free
//! let table = TruthTable::with_bits([0, 1], [], 2);
//! let function = table.minimize();
//! assert_eq!(function.to_string(), "/B");
//! ```
//!
//! Don't-care entries may be folded into blocks to make terms shorter:
//!
//! ```
//! use karnaugh_logic::TruthTable;
//!
//! // Row 3 is unconstrained, letting {1, 3} collapse to just "A"
//! let table = TruthTable::with_bits([1], [3], 2);
//! assert_eq!(table.minimize().to_string(), "A");
//! ```
//!
//! ## Validating the result
//!
//! [`TruthTable::minimize_validated`] re-evaluates the minimized function
//! over the whole domain (don't-cares excluded) and returns an error naming
//! the first mismatching index instead of a sentinel value:
//!
//! ```
//! use karnaugh_logic::TruthTable;
//!
//! let table = TruthTable::with_bits([1, 2, 5, 6], [], 3);
//! let function = table.minimize_validated()?;
//! assert!(function.evaluate(5, 3));
//! assert!(!function.evaluate(0, 3));
//! # Ok::<(), karnaugh_logic::KarnaughError>(())
//! ```
//!
//! ## The textual format
//!
//! Terms render as concatenated variable letters (`A` for bit 0, `B` for
//! bit 1, ...), `/` marking negation, joined by `" + "`; the constant-1 term
//! renders as `1` and the empty function as `0`. The same format parses back
//! into an index set:
//!
//! ```
//! use std::collections::BTreeSet;
//! use karnaugh_logic::parse_expression;
//!
//! let (indices, bits) = parse_expression("/A/B + AB", 0)?;
//! assert_eq!(indices, BTreeSet::from([0, 3]));
//! assert_eq!(bits, 2);
//! # Ok::<(), karnaugh_logic::KarnaughError>(())
//! ```
//!
//! ## Concurrency
//!
//! Minimization is a pure, single-threaded computation over owned data: no
//! global state is touched, so independent calls may run on any number of
//! threads without coordination.

// Public modules
pub mod bits;
pub mod cover;
pub mod error;
pub mod minimize;
pub mod text;

// Re-export the high-level public API
pub use cover::{SumOfProducts, Term};
pub use error::KarnaughError;
pub use minimize::{minimize, minimize_to_string, TruthTable};
pub use text::parse_expression;
