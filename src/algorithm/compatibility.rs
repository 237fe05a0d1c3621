//! Pairwise seam-alignment test that decides which layers may be stacked

use crate::spatial::base::{BaseId, BaseSet};
use tracing::debug;

/// Populates the symmetric combo lists of a base set
///
/// Two bases are compatible when their interior seam sets are disjoint, so
/// stacking them never lines up a crack. Every unordered pair is examined
/// once, row by row: row `i` pairs base `i` with every base of larger id.
pub struct CompatibilityResolver<'a> {
    bases: &'a mut BaseSet,
    next_row: BaseId,
    pairs_examined: usize,
}

impl<'a> CompatibilityResolver<'a> {
    /// Start resolving, discarding any previously recorded combos
    pub fn new(bases: &'a mut BaseSet) -> Self {
        bases.clear_combos();
        Self {
            bases,
            next_row: 0,
            pairs_examined: 0,
        }
    }

    /// Number of rows in the full pass
    pub fn rows(&self) -> usize {
        self.bases.len()
    }

    /// Number of pairs examined so far
    pub const fn pairs_examined(&self) -> usize {
        self.pairs_examined
    }

    /// True once every pair has been examined
    pub fn is_finished(&self) -> bool {
        self.next_row >= self.bases.len()
    }

    /// Resolve the next row, returning how many new compatible pairs it found
    ///
    /// Returns `None` when every row has already been resolved.
    pub fn resolve_row(&mut self) -> Option<usize> {
        let row = self.next_row;
        let base = self.bases.get(row)?;

        let partners: Vec<BaseId> = self
            .bases
            .iter()
            .skip(row + 1)
            .filter(|other| base.is_compatible_with(other))
            .map(|other| other.id())
            .collect();

        self.pairs_examined += self.bases.len() - row - 1;
        self.next_row += 1;

        for &partner in &partners {
            self.bases.link(row, partner);
        }
        Some(partners.len())
    }

    /// Resolve every remaining row
    pub fn resolve_all(&mut self) {
        self.resolve_all_with(|_| {});
    }

    /// Resolve every remaining row, calling `on_row` with the number of rows
    /// completed after each one
    pub fn resolve_all_with(&mut self, mut on_row: impl FnMut(usize)) {
        while self.resolve_row().is_some() {
            on_row(self.next_row);
        }

        debug!(
            bases = self.bases.len(),
            pairs_examined = self.pairs_examined,
            compatible_pairs = self.bases.compatible_pairs(),
            "resolved compatibility"
        );
    }
}

/// Populate the combo lists of every base
pub fn resolve_compatibility(bases: &mut BaseSet) {
    resolve_compatibility_with(bases, |_| {});
}

/// Populate the combo lists of every base, reporting each completed row
pub fn resolve_compatibility_with(bases: &mut BaseSet, on_row: impl FnMut(usize)) {
    CompatibilityResolver::new(bases).resolve_all_with(on_row);
}
