use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShuffleError;
use crate::hash::seed_hash;
use crate::seed;

use super::Deck;

/// Permutes `cards` in place with a seeded Fisher-Yates pass.
///
/// For `i` from the last index down to 1 the card at `i` is swapped with the
/// card at `seed[i] % (i + 1)`. `seed[0]` is never read. The permutation is
/// unbiased only when the seed elements are independent and uniform.
fn fisher_yates(cards: &mut [Card], seed: &[u32]) {
    debug_assert_eq!(cards.len(), seed.len());
    for i in (1..cards.len()).rev() {
        let j = seed[i] as usize % (i + 1);
        cards.swap(i, j);
    }
}

impl Deck {
    /// Shuffles the deck with a seed of 52 integers and returns the seed
    /// that was applied.
    ///
    /// The seed hash is recorded before the cards are permuted and the order
    /// hash is recomputed afterwards. The cursor does not move, so shuffling
    /// a partially dealt deck reorders dealt and undealt slots alike.
    ///
    /// With the `std` feature an empty seed means "no seed": one is drawn
    /// as in [`Deck::shuffle_random`] and returned. Without `std` there is
    /// no entropy source, so an empty seed is a length mismatch; use
    /// [`Deck::shuffle_with_rng`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`ShuffleError::SeedLengthMismatch`] if a non-empty seed does
    /// not have 52 elements; the deck is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use verideck::Deck;
    ///
    /// let seed = [0; 52];
    /// let mut a = Deck::new();
    /// let mut b = Deck::new();
    /// a.shuffle(&seed).unwrap();
    /// b.shuffle(&seed).unwrap();
    /// assert_eq!(a.hash(), b.hash());
    /// assert!(a.verify_seed(&seed));
    /// ```
    pub fn shuffle(&mut self, seed: &[u32]) -> Result<Vec<u32>, ShuffleError> {
        #[cfg(feature = "std")]
        if seed.is_empty() {
            return Ok(self.shuffle_random());
        }

        seed::validate(seed)?;
        self.apply_seed(seed);
        Ok(seed.to_vec())
    }

    /// Shuffles the deck with a seed drawn from `rng`.
    ///
    /// The seed is returned so it can be revealed later.
    pub fn shuffle_with_rng<R: rand::Rng>(&mut self, rng: &mut R) -> Vec<u32> {
        let seed = seed::random_seed(rng, self.options.seed_bound);
        self.apply_seed(&seed);
        seed
    }

    /// Shuffles the deck with a seed expanded from a compact `u64`.
    ///
    /// The seed is returned so it can be revealed later.
    pub fn shuffle_seeded(&mut self, seed: u64) -> Vec<u32> {
        let seed = seed::seed_from_u64(seed, self.options.seed_bound);
        self.apply_seed(&seed);
        seed
    }

    /// Shuffles the deck with a seed from the thread-local CSPRNG.
    ///
    /// Nobody but the caller can reproduce this shuffle unless the returned
    /// seed is kept and revealed. Do not use it where the shuffle must be
    /// verified by a third party who has not seen the seed.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn shuffle_random(&mut self) -> Vec<u32> {
        tracing::warn!("shuffling with an internally generated seed");
        self.shuffle_with_rng(&mut rand::rng())
    }

    /// Seed must already be validated.
    fn apply_seed(&mut self, seed: &[u32]) {
        self.seed_hash = seed_hash(seed);
        fisher_yates(&mut self.cards, seed);
        self.rehash();

        tracing::debug!(hash = %self.hash, seed_hash = %self.seed_hash, "shuffled deck");
    }

    /// Returns whether `seed` hashes to the recorded seed hash.
    #[must_use]
    pub fn verify_seed(&self, seed: &[u32]) -> bool {
        self.is_shuffled() && seed_hash(seed) == self.seed_hash
    }
}

/// Replays a shuffle and checks the resulting order hash.
///
/// `before` is the deck as it was committed before shuffling; it is not
/// modified.
///
/// # Errors
///
/// Returns [`ShuffleError::SeedLengthMismatch`] if `seed.len() != 52`,
/// including an empty seed.
///
/// # Example
///
/// ```
/// use verideck::{Deck, verify_shuffle};
///
/// let before = Deck::new();
/// let mut deck = before.clone();
/// let seed = deck.shuffle_seeded(42);
///
/// assert_eq!(verify_shuffle(&before, &seed, deck.hash()), Ok(true));
/// assert_eq!(verify_shuffle(&before, &[0; 52], deck.hash()), Ok(false));
/// ```
pub fn verify_shuffle(before: &Deck, seed: &[u32], expected_hash: &str) -> Result<bool, ShuffleError> {
    seed::validate(seed)?;
    let mut replay = before.clone();
    replay.apply_seed(seed);
    Ok(replay.hash == expected_hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{DECK_SIZE, Suit};
    use crate::hash::UNSHUFFLED_SEED_HASH;
    use alloc::vec;

    #[test]
    fn rejects_wrong_seed_length() {
        let mut deck = Deck::new();
        let before = deck.clone();
        assert_eq!(
            deck.shuffle(&[1, 2, 3]),
            Err(ShuffleError::SeedLengthMismatch {
                found: 3,
                expected: 52
            })
        );
        assert_eq!(deck, before);
        assert_eq!(deck.seed_hash(), UNSHUFFLED_SEED_HASH);
    }

    #[test]
    fn zero_seed_rotates_left() {
        let mut deck = Deck::new();
        deck.shuffle(&[0; 52]).expect("valid seed");

        let mut expected: Vec<Card> = Card::standard().collect();
        expected.rotate_left(1);
        assert_eq!(deck.cards(), expected.as_slice());
        assert_eq!(deck.cards()[51], Card::new(Suit::Clubs, 1));
        assert_eq!(
            deck.hash(),
            "e54e160c51ec350dfb352ae3e8489673bab39395a37d02ee5952b192eb93668b"
        );
    }

    #[test]
    fn cursor_survives_shuffle() {
        let mut deck = Deck::new();
        deck.deal(5).expect("5 cards");
        deck.shuffle_seeded(9);
        assert_eq!(deck.top(), 5);
        assert_eq!(deck.cards().len(), DECK_SIZE);
    }

    #[test]
    fn seeded_shuffle_respects_bound() {
        let mut deck = Deck::with_options(crate::DeckOptions::default().with_seed_bound(1));
        let seed = deck.shuffle_seeded(3);
        assert!(seed.iter().all(|&v| v == 0));
        assert!(deck.verify_seed(&seed));
    }

    #[test]
    fn unshuffled_deck_verifies_nothing() {
        let deck = Deck::new();
        assert!(!deck.verify_seed(&[0; 52]));
    }

    #[cfg(feature = "std")]
    #[test]
    fn empty_seed_shuffles_with_generated_seed() {
        let mut deck = Deck::new();
        let seed = deck.shuffle(&[]).expect("generated seed");
        assert_eq!(seed.len(), DECK_SIZE);
        assert!(deck.is_shuffled());
        assert!(deck.verify_seed(&seed));
        assert_eq!(deck.hash(), crate::hash::order_hash(deck.cards()));
    }

    #[cfg(not(feature = "std"))]
    #[test]
    fn empty_seed_without_std_is_rejected() {
        let mut deck = Deck::new();
        assert_eq!(
            deck.shuffle(&[]),
            Err(ShuffleError::SeedLengthMismatch {
                found: 0,
                expected: 52
            })
        );
        assert!(!deck.is_shuffled());
    }

    #[test]
    fn verify_rejects_empty_seed() {
        let deck = Deck::new();
        assert_eq!(
            verify_shuffle(&deck, &[], deck.hash()),
            Err(ShuffleError::SeedLengthMismatch {
                found: 0,
                expected: 52
            })
        );
    }

    #[test]
    fn explicit_seed_is_returned() {
        let mut deck = Deck::new();
        assert_eq!(deck.shuffle(&[5; 52]), Ok(vec![5; 52]));
    }

    #[cfg(feature = "std")]
    #[test]
    fn random_shuffle_returns_its_seed() {
        let mut deck = Deck::new();
        let seed = deck.shuffle_random();
        assert_eq!(seed.len(), DECK_SIZE);
        assert!(seed.iter().all(|&v| v < crate::seed::DEFAULT_SEED_BOUND));
        assert!(deck.verify_seed(&seed));
    }
}
