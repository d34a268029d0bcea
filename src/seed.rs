//! Shuffle seeds.
//!
//! A seed is one integer per card. Seeds drive the Fisher-Yates pass in
//! [`Deck::shuffle`](crate::Deck::shuffle) and are what a dealer reveals so
//! that anyone can replay the shuffle.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::DECK_SIZE;
use crate::error::ShuffleError;

/// Required number of seed elements.
pub const SEED_LEN: usize = DECK_SIZE;

/// Default exclusive upper bound of generated seed elements.
pub const DEFAULT_SEED_BOUND: u32 = 1_000_000;

/// Checks that a supplied seed has one element per card.
///
/// # Errors
///
/// Returns [`ShuffleError::SeedLengthMismatch`] if `seed.len() != 52`.
pub const fn validate(seed: &[u32]) -> Result<(), ShuffleError> {
    if seed.len() == SEED_LEN {
        Ok(())
    } else {
        Err(ShuffleError::SeedLengthMismatch {
            found: seed.len(),
            expected: SEED_LEN,
        })
    }
}

/// Draws a seed of 52 values uniformly from `0..bound`.
///
/// The quality of the shuffle is the quality of `rng`.
pub fn random_seed<R: Rng>(rng: &mut R, bound: u32) -> Vec<u32> {
    let bound = bound.max(1);
    (0..SEED_LEN).map(|_| rng.random_range(0..bound)).collect()
}

/// Expands a compact `u64` into a full seed.
///
/// The expansion is reproducible, so the `u64` alone is enough to replay the
/// shuffle.
///
/// ```
/// use verideck::seed::seed_from_u64;
///
/// assert_eq!(seed_from_u64(7, 100), seed_from_u64(7, 100));
/// assert!(seed_from_u64(7, 100).iter().all(|&v| v < 100));
/// ```
#[must_use]
pub fn seed_from_u64(seed: u64, bound: u32) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_seed(&mut rng, bound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_reports_lengths() {
        assert_eq!(validate(&[0; 52]), Ok(()));
        assert_eq!(
            validate(&[0; 51]),
            Err(ShuffleError::SeedLengthMismatch {
                found: 51,
                expected: 52
            })
        );
        assert_eq!(
            validate(&[0; 53]),
            Err(ShuffleError::SeedLengthMismatch {
                found: 53,
                expected: 52
            })
        );
    }

    #[test]
    fn random_seed_respects_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let seed = random_seed(&mut rng, 10);
        assert_eq!(seed.len(), SEED_LEN);
        assert!(seed.iter().all(|&v| v < 10));

        assert!(random_seed(&mut rng, 0).iter().all(|&v| v == 0));
    }

    #[test]
    fn compact_seeds_differ() {
        assert_ne!(seed_from_u64(1, DEFAULT_SEED_BOUND), seed_from_u64(2, DEFAULT_SEED_BOUND));
    }
}
