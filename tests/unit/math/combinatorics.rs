//! Tests for closed-form composition counts

#[cfg(test)]
mod tests {
    use bondwall::math::combinatorics::{count_compositions, is_tileable};
    use bondwall::spatial::Length;
    use num_bigint::BigUint;

    fn inches(value: f64) -> Length {
        Length::from_inches(value).unwrap()
    }

    // Tests small composition counts by hand
    // Verified by ignoring the long block part
    #[test]
    fn test_small_counts() {
        assert_eq!(count_compositions(inches(3.0)), BigUint::from(1u32));
        assert_eq!(count_compositions(inches(4.5)), BigUint::from(1u32));
        assert_eq!(count_compositions(inches(7.5)), BigUint::from(2u32));
        assert_eq!(count_compositions(inches(9.0)), BigUint::from(2u32));
        assert_eq!(count_compositions(inches(12.0)), BigUint::from(4u32));
    }

    // Tests untileable widths have no compositions
    // Verified by seeding every entry with one
    #[test]
    fn test_untileable_counts() {
        for width in [0.5, 3.5, 4.0, 10.0] {
            assert_eq!(count_compositions(inches(width)), BigUint::from(0u32));
        }
    }

    // Tests the canonical width count
    // Verified by swapping the recurrence offsets
    #[test]
    fn test_canonical_width() {
        assert_eq!(count_compositions(inches(48.0)), BigUint::from(3329u32));
        assert_eq!(count_compositions(inches(27.0)), BigUint::from(65u32));
    }

    // Tests tileability agrees with the composition count
    // Verified by checking only multiples of the short block
    #[test]
    fn test_is_tileable() {
        assert!(is_tileable(inches(3.0)));
        assert!(is_tileable(inches(4.5)));
        assert!(is_tileable(inches(7.5)));
        assert!(!is_tileable(inches(10.0)));
        assert!(!is_tileable(inches(5.0)));
        assert!(!is_tileable(Length::ZERO));

        for half_units in 1..=96 {
            let width = Length::from_half_units(half_units);
            assert_eq!(
                is_tileable(width),
                count_compositions(width) > BigUint::from(0u32),
                "width {width}"
            );
        }
    }
}
