//! Tests for depth-first base enumeration

#[cfg(test)]
mod tests {
    use bondwall::algorithm::enumeration::{BaseEnumerator, enumerate_bases};
    use bondwall::math::combinatorics::count_compositions;
    use bondwall::spatial::{Length, Tile};
    use num_bigint::BigUint;
    use proptest::prelude::*;

    fn inches(value: f64) -> Length {
        Length::from_inches(value).unwrap()
    }

    // Tests a 6.0 strip has exactly one base with a single interior seam
    // Verified by recording the long block branch as complete
    #[test]
    fn test_width_six() {
        let bases = enumerate_bases(inches(6.0));
        assert_eq!(bases.len(), 1);
        let base = bases.get(0).unwrap();
        assert_eq!(base.seams(), &[inches(3.0), inches(6.0)]);
        assert_eq!(base.interior_seams(), &[inches(3.0)]);
    }

    // Tests discovery order tries the short block first
    // Verified by swapping the extension order
    #[test]
    fn test_discovery_order() {
        let bases = enumerate_bases(inches(12.0));
        let tiles: Vec<Vec<Tile>> = bases.iter().map(|base| base.tiles()).collect();
        assert_eq!(
            tiles,
            vec![
                vec![Tile::Short, Tile::Short, Tile::Short, Tile::Short],
                vec![Tile::Short, Tile::Long, Tile::Long],
                vec![Tile::Long, Tile::Short, Tile::Long],
                vec![Tile::Long, Tile::Long, Tile::Short],
            ]
        );
    }

    // Tests single-block widths produce one seamless base
    // Verified by only recording bases after two blocks
    #[test]
    fn test_single_block_widths() {
        for width in [3.0, 4.5] {
            let bases = enumerate_bases(inches(width));
            assert_eq!(bases.len(), 1);
            assert!(bases.get(0).unwrap().interior_seams().is_empty());
        }
    }

    // Tests untileable widths produce an empty set
    // Verified by recording partial bases
    #[test]
    fn test_untileable_widths() {
        for width in [3.5, 4.0, 5.0, 10.0, 11.0] {
            assert!(enumerate_bases(inches(width)).is_empty(), "width {width}");
        }
    }

    // Tests the canonical 48.0 strip base count
    // Verified by pruning branches one block early
    #[test]
    fn test_width_forty_eight() {
        let bases = enumerate_bases(inches(48.0));
        assert_eq!(bases.len(), 3329);
        assert_eq!(BigUint::from(bases.len()), count_compositions(inches(48.0)));
    }

    // Tests the enumerator leaves combo lists empty
    // Verified by linking bases during the search
    #[test]
    fn test_enumeration_has_no_combos() {
        let bases = BaseEnumerator::new(inches(27.0)).enumerate();
        assert_eq!(bases.len(), 65);
        assert_eq!(bases.degree_sum(), 0);
    }

    proptest! {
        // Every base ends at the width, seams strictly increase, and the
        // count matches the closed-form composition count
        #[test]
        fn prop_bases_tile_exactly(half_units in 1u32..=72) {
            let width = Length::from_half_units(half_units);
            let bases = enumerate_bases(width);

            prop_assert_eq!(BigUint::from(bases.len()), count_compositions(width));
            for (index, base) in bases.iter().enumerate() {
                prop_assert_eq!(base.id(), index);
                prop_assert_eq!(base.seams().last().copied(), Some(width));
                prop_assert!(base.seams().windows(2).all(|pair| pair.first() < pair.last()));
                let covered = base
                    .tiles()
                    .iter()
                    .fold(Length::ZERO, |total, tile| total + tile.length());
                prop_assert_eq!(covered, width);
            }
        }

        // Distinct ids always carry distinct seam lists
        #[test]
        fn prop_bases_are_unique(half_units in 6u32..=60) {
            let bases = enumerate_bases(Length::from_half_units(half_units));
            let mut seen: Vec<&[Length]> = bases.iter().map(|base| base.seams()).collect();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), bases.len());
        }
    }
}
