//! Walk-counting recurrence over the compatibility graph
//!
//! `count(v, 1) = 1` for every base, and for each further height
//! `count(v, h)` is the sum of `count(u, h - 1)` over the combo list of `v`.
//! The total wall count at height `h` is the sum of `count(v, h)`.
//!
//! Counts are double-buffered: a sweep reads only the previous generation and
//! writes only the current one, then the two buffers are swapped.

use crate::spatial::base::{Base, BaseId, BaseSet};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::mem;

/// Per-base wall counts for the current and previous height
pub struct HeightRecurrence<'a> {
    bases: &'a BaseSet,
    height: usize,
    current: Vec<BigUint>,
    previous: Vec<BigUint>,
}

impl<'a> HeightRecurrence<'a> {
    /// Start at height 1, where every base is a one-layer wall
    pub fn new(bases: &'a BaseSet) -> Self {
        Self {
            bases,
            height: 1,
            current: vec![BigUint::one(); bases.len()],
            previous: vec![BigUint::zero(); bases.len()],
        }
    }

    /// Height the current counts belong to
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Advance the counts by one layer
    pub fn step(&mut self) {
        mem::swap(&mut self.current, &mut self.previous);

        for (slot, base) in self.current.iter_mut().zip(self.bases.iter()) {
            *slot = next_count(base, &self.previous);
        }
        self.height += 1;
    }

    /// Advance until the counts belong to `height`
    ///
    /// Heights at or below the current one leave the state untouched.
    pub fn advance_to(&mut self, height: usize) {
        self.advance_with(height, |_| {});
    }

    /// Advance until the counts belong to `height`, calling `on_layer` with
    /// each height reached
    pub fn advance_with(&mut self, height: usize, mut on_layer: impl FnMut(usize)) {
        while self.height < height {
            self.step();
            on_layer(self.height);
        }
    }

    /// Number of walls at the current height whose top layer is `id`
    pub fn count(&self, id: BaseId) -> Option<&BigUint> {
        self.current.get(id)
    }

    /// Number of walls at the current height
    pub fn total(&self) -> BigUint {
        self.current.iter().sum()
    }
}

// A base with no partners can never be stacked, and a base with one partner
// simply inherits that partner's previous count.
fn next_count(base: &Base, previous: &[BigUint]) -> BigUint {
    match base.combos() {
        [] => BigUint::zero(),
        [only] => previous.get(*only).cloned().unwrap_or_default(),
        combos => combos.iter().filter_map(|&id| previous.get(id)).sum(),
    }
}

/// Count the walls of `height` layers over an already-resolved base set
///
/// A height of zero has no layers and yields zero.
pub fn count_walls_of_height(bases: &BaseSet, height: usize) -> BigUint {
    count_walls_of_height_with(bases, height, |_| {})
}

/// Count the walls of `height` layers, reporting each height reached above 1
pub fn count_walls_of_height_with(
    bases: &BaseSet,
    height: usize,
    on_layer: impl FnMut(usize),
) -> BigUint {
    if height == 0 {
        return BigUint::zero();
    }
    let mut recurrence = HeightRecurrence::new(bases);
    recurrence.advance_with(height, on_layer);
    recurrence.total()
}
