//! Counts running-bond walls built from 3.0 and 4.5 inch blocks
//!
//! Every single-layer tiling of the strip is enumerated, pairs of layers whose
//! interior seams never coincide are linked, and a walk-counting recurrence
//! over that compatibility graph yields the number of walls of a given height.

#![forbid(unsafe_code)]

/// Enumeration, compatibility resolution and the height recurrence
pub mod algorithm;
/// Driver, configuration, logging and error handling
pub mod io;
/// Independent combinatorial counts
pub mod math;
/// Lengths, blocks and layer tilings
pub mod spatial;

pub use algorithm::executor::{WallCount, WallCounter, WallQuery, count_walls};
pub use io::error::{Result, WallError};
