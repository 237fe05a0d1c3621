//! Interior seam masks used for the layer compatibility test

use crate::spatial::length::Length;
use bitvec::prelude::*;

/// Fixed-size bitset of interior seam positions along one layer
///
/// Bits are indexed by half-unit position. The two strip edges (0 and the
/// full width) are boundaries, never seams, and are silently ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeamSet {
    bits: BitVec,
    width: Length,
}

impl SeamSet {
    /// Create a seam set with no seams for a strip of the given width
    pub fn new(width: Length) -> Self {
        Self {
            bits: bitvec![0; width.half_units() as usize + 1],
            width,
        }
    }

    /// Create a seam set from cumulative seam positions
    pub fn from_seams(width: Length, seams: &[Length]) -> Self {
        let mut set = Self::new(width);
        for &seam in seams {
            set.insert(seam);
        }
        set
    }

    /// Insert a seam position
    ///
    /// Positions at the edges or beyond the strip are not interior and are skipped
    pub fn insert(&mut self, seam: Length) {
        if seam > Length::ZERO && seam < self.width {
            self.bits.set(seam.half_units() as usize, true);
        }
    }

    /// Test whether the two layers share no interior seam
    ///
    /// Compares whole storage words; bits past the strip width are never set.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.bits
            .as_raw_slice()
            .iter()
            .zip(other.bits.as_raw_slice())
            .all(|(a, b)| a & b == 0)
    }

    /// Test if no seams are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }
}
