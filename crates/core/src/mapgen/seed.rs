//! Unbiased draws over an injected random source for carving and goal sampling.

use rand_chacha::rand_core::Rng;

use crate::types::{Cell, Direction};

/// Uniform value in `0..bound`. `bound` must be non-zero.
pub(super) fn random_below<R: Rng + ?Sized>(rng: &mut R, bound: u64) -> u64 {
    debug_assert!(bound > 0);
    // 2^64 mod bound: draws below it would bias the low residues.
    let threshold = bound.wrapping_neg() % bound;
    loop {
        let value = rng.next_u64();
        if value >= threshold {
            return value % bound;
        }
    }
}

/// Fisher-Yates shuffle of the four directions.
pub(super) fn shuffled_directions<R: Rng + ?Sized>(rng: &mut R) -> [Direction; 4] {
    let mut directions = Direction::ALL;
    for i in (1..directions.len()).rev() {
        let j = random_below(rng, (i + 1) as u64) as usize;
        directions.swap(i, j);
    }
    directions
}

pub(super) fn random_cell<R: Rng + ?Sized>(rng: &mut R, rows: usize, cols: usize) -> Cell {
    let x = random_below(rng, cols as u64) as i32;
    let y = random_below(rng, rows as u64) as i32;
    Cell { y, x }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn random_below_stays_inside_requested_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(12_345);
        for bound in 1..50 {
            for _ in 0..20 {
                assert!(random_below(&mut rng, bound) < bound);
            }
        }
    }

    #[test]
    fn random_below_one_is_always_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!((0..100).all(|_| random_below(&mut rng, 1) == 0));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..200 {
            let mut shuffled = shuffled_directions(&mut rng);
            shuffled.sort();
            assert_eq!(shuffled, Direction::ALL);
        }
    }

    #[test]
    fn shuffle_puts_every_direction_first_roughly_equally() {
        let mut rng = ChaCha8Rng::seed_from_u64(2_024);
        let mut first_counts = BTreeMap::new();
        let trials = 8_000;
        for _ in 0..trials {
            *first_counts.entry(shuffled_directions(&mut rng)[0]).or_insert(0_u32) += 1;
        }
        for direction in Direction::ALL {
            let count = first_counts.get(&direction).copied().unwrap_or(0);
            assert!(
                (1_700..=2_300).contains(&count),
                "{direction:?} led {count} of {trials} shuffles"
            );
        }
    }

    #[test]
    fn random_cell_lands_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..500 {
            let cell = random_cell(&mut rng, 3, 7);
            assert!((0..7).contains(&cell.x));
            assert!((0..3).contains(&cell.y));
        }
    }

    #[test]
    fn same_seed_draws_same_sequence() {
        let mut a = ChaCha8Rng::seed_from_u64(31);
        let mut b = ChaCha8Rng::seed_from_u64(31);
        for _ in 0..50 {
            assert_eq!(shuffled_directions(&mut a), shuffled_directions(&mut b));
        }
    }
}
