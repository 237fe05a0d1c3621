use crate::spatial::length::{Length, Tile};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Number of ordered block sequences that fill a strip exactly
///
/// Counts compositions of the width into short and long parts with the
/// linear recurrence `f(0) = 1`, `f(n) = f(n - short) + f(n - long)`, without
/// building any of the sequences.
pub fn count_compositions(width: Length) -> BigUint {
    let target = width.half_units() as usize;
    let parts: Vec<usize> = Tile::ALL
        .iter()
        .map(|tile| tile.length().half_units() as usize)
        .collect();

    let mut ways = vec![BigUint::zero(); target + 1];
    if let Some(first) = ways.first_mut() {
        *first = BigUint::one();
    }

    for n in 1..=target {
        let total: BigUint = parts
            .iter()
            .filter_map(|&part| n.checked_sub(part))
            .filter_map(|rest| ways.get(rest))
            .sum();
        if let Some(slot) = ways.get_mut(n) {
            *slot = total;
        }
    }

    ways.get(target).cloned().unwrap_or_default()
}

/// Whether the width can be written as `3a + 4.5b` for non-negative `a`, `b`
pub fn is_tileable(width: Length) -> bool {
    let target = width.half_units();
    let short = Tile::Short.length().half_units();
    let long = Tile::Long.length().half_units();

    target > 0
        && (0..=target / long).any(|longs| (target - longs * long) % short == 0)
}
