//! Standalone permutation and sorting utility.
//!
//! Random permutations come from [`GameRng::permutation`](crate::core::GameRng::permutation);
//! this module adds the pass-counting bubble sort used to measure how
//! disordered such a permutation is.

pub mod sort;

pub use sort::bubble_sort;
