//! Depth-first enumeration of every single-layer tiling of a strip

use crate::spatial::base::BaseSet;
use crate::spatial::length::{Length, Tile};
use tracing::debug;

/// Generates every ordered block sequence that fills a strip exactly
///
/// Each branch extends the partial sum with a short block and then a long
/// block. A branch that lands on the width becomes a base; a branch that
/// overshoots or leaves a gap narrower than the short block is discarded.
pub struct BaseEnumerator {
    width: Length,
    bases: BaseSet,
    pruned: usize,
}

impl BaseEnumerator {
    /// Create an enumerator for a strip of the given width
    pub const fn new(width: Length) -> Self {
        Self {
            width,
            bases: BaseSet::new(width),
            pruned: 0,
        }
    }

    /// Run the search and return every base, ids in discovery order
    pub fn enumerate(mut self) -> BaseSet {
        let mut seams = Vec::new();
        self.extend(Length::ZERO, &mut seams);

        debug!(
            width = %self.width,
            bases = self.bases.len(),
            pruned = self.pruned,
            "enumerated bases"
        );
        self.bases
    }

    fn extend(&mut self, total: Length, seams: &mut Vec<Length>) {
        for tile in Tile::ALL {
            let next = total + tile.length();
            if next > self.width {
                self.pruned += 1;
                continue;
            }

            seams.push(next);
            if next == self.width {
                self.bases.push(seams.clone());
            } else if self.width - next >= Tile::shortest() {
                self.extend(next, seams);
            } else {
                self.pruned += 1;
            }
            seams.pop();
        }
    }
}

/// Enumerate every base of a strip
pub fn enumerate_bases(width: Length) -> BaseSet {
    BaseEnumerator::new(width).enumerate()
}
