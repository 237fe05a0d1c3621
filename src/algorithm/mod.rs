/// Pairwise seam-alignment test and combo list construction
pub mod compatibility;
/// Depth-first enumeration of single-layer tilings
pub mod enumeration;
/// Query pipeline tying the stages together
pub mod executor;
/// Double-buffered walk-counting recurrence
pub mod recurrence;
/// Bit-level interior seam masks
pub mod seams;
