//! Counting utilities independent of the search

/// Closed-form composition counts and tileability checks
pub mod combinatorics;
