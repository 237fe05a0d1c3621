//! Single-layer tilings ("bases") and the arena that owns them
//!
//! Bases refer to each other only by dense id, so the compatibility relation
//! is a plain adjacency list with no back-pointers.

use crate::algorithm::seams::SeamSet;
use crate::spatial::length::{Length, Tile};

/// Identifier of a base, dense in `0..N` in discovery order
pub type BaseId = usize;

/// One complete full-width tiling of a single layer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Base {
    id: BaseId,
    seams: Vec<Length>,
    interior: SeamSet,
    combos: Vec<BaseId>,
}

impl Base {
    /// Create a base from its cumulative seam positions
    ///
    /// The last seam is the full strip width.
    pub fn new(id: BaseId, width: Length, seams: Vec<Length>) -> Self {
        let interior = SeamSet::from_seams(width, &seams);
        Self {
            id,
            seams,
            interior,
            combos: Vec::new(),
        }
    }

    /// Discovery-order identifier
    pub const fn id(&self) -> BaseId {
        self.id
    }

    /// Cumulative tile end positions, ending at the strip width
    pub fn seams(&self) -> &[Length] {
        &self.seams
    }

    /// Seam positions strictly between 0 and the strip width
    pub fn interior_seams(&self) -> &[Length] {
        match self.seams.split_last() {
            Some((_, interior)) => interior,
            None => &[],
        }
    }

    /// Bit mask of the interior seams
    pub const fn interior(&self) -> &SeamSet {
        &self.interior
    }

    /// Block sequence from left to right
    pub fn tiles(&self) -> Vec<Tile> {
        let mut previous = Length::ZERO;
        self.seams
            .iter()
            .filter_map(|&seam| {
                let tile = Tile::from_length(seam.checked_sub(previous)?);
                previous = seam;
                tile
            })
            .collect()
    }

    /// Ids of the bases this one may be stacked against
    pub fn combos(&self) -> &[BaseId] {
        &self.combos
    }

    /// Number of compatible bases
    pub fn degree(&self) -> usize {
        self.combos.len()
    }

    /// Test whether the two layers share no interior seam
    pub fn is_compatible_with(&self, other: &Self) -> bool {
        self.interior.is_disjoint(&other.interior)
    }
}

/// Owned collection of every base for one strip width
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseSet {
    width: Length,
    bases: Vec<Base>,
}

impl BaseSet {
    /// Create an empty set for the given width
    pub const fn new(width: Length) -> Self {
        Self {
            width,
            bases: Vec::new(),
        }
    }

    /// Append a base built from its seams, assigning the next id
    pub fn push(&mut self, seams: Vec<Length>) -> BaseId {
        let id = self.bases.len();
        self.bases.push(Base::new(id, self.width, seams));
        id
    }

    /// Record a symmetric compatibility between two distinct bases
    ///
    /// A self pair or an unknown id is a caller bug: it panics in debug
    /// builds and records nothing otherwise.
    pub fn link(&mut self, a: BaseId, b: BaseId) {
        let len = self.bases.len();
        let linked = self.bases.get_disjoint_mut([a, b]).map(|[first, second]| {
            first.combos.push(b);
            second.combos.push(a);
        });
        debug_assert!(
            linked.is_ok(),
            "cannot link bases {a} and {b} in a set of {len}"
        );
    }

    /// Drop every recorded compatibility
    pub fn clear_combos(&mut self) {
        for base in &mut self.bases {
            base.combos.clear();
        }
    }

    /// Strip width shared by every base
    pub const fn width(&self) -> Length {
        self.width
    }

    /// Number of bases
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// True when the width admits no tiling
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Look up a base by id
    pub fn get(&self, id: BaseId) -> Option<&Base> {
        self.bases.get(id)
    }

    /// Iterate bases in id order
    pub fn iter(&self) -> std::slice::Iter<'_, Base> {
        self.bases.iter()
    }

    /// Sum of all degrees, the number of ordered compatible pairs
    pub fn degree_sum(&self) -> usize {
        self.bases.iter().map(Base::degree).sum()
    }

    /// Number of unordered compatible pairs
    pub fn compatible_pairs(&self) -> usize {
        self.degree_sum() / 2
    }

    /// Check that every combo entry is mirrored on the other side
    pub fn is_symmetric(&self) -> bool {
        self.bases.iter().all(|base| {
            base.combos.iter().all(|&other| {
                self.get(other)
                    .is_some_and(|neighbor| neighbor.combos.contains(&base.id))
            })
        })
    }
}

impl<'a> IntoIterator for &'a BaseSet {
    type Item = &'a Base;
    type IntoIter = std::slice::Iter<'a, Base>;

    fn into_iter(self) -> Self::IntoIter {
        self.bases.iter()
    }
}
