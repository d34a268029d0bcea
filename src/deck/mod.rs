//! The verifiable deck.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE};
use crate::hash::{UNSHUFFLED_SEED_HASH, order_hash};
use crate::options::DeckOptions;

mod deal;
mod serial;
mod shuffle;

pub use shuffle::verify_shuffle;

/// A standard 52-card deck with a dealing cursor and content hashes.
///
/// The deck always holds a permutation of the 52 standard cards. `hash`
/// tracks the current order and `seed_hash` the seed of the most recent
/// shuffle, so a dealer can publish both before play and reveal the seed
/// afterwards.
///
/// A deck performs no internal locking; share it behind a mutex if several
/// threads need to mutate it.
///
/// # Example
///
/// ```
/// use verideck::Deck;
///
/// let mut deck = Deck::new();
/// let seed: Vec<u32> = (0..52).map(|i| i * 7 + 3).collect();
/// deck.shuffle(&seed).unwrap();
///
/// let hand = deck.deal(2).unwrap();
/// assert_eq!(hand.len(), 2);
/// assert_eq!(deck.top(), 2);
///
/// let restored: Deck = deck.to_string().parse().unwrap();
/// assert_eq!(restored.hash(), deck.hash());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in stored order.
    cards: Vec<Card>,
    /// Index of the next card to deal.
    top: usize,
    /// Content hash of the current order.
    hash: String,
    /// Content hash of the last shuffle seed.
    seed_hash: String,
    /// Deck options.
    options: DeckOptions,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a deck in canonical order with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(DeckOptions::default())
    }

    /// Creates a deck in canonical order.
    ///
    /// Suits come in enumeration order (clubs, diamonds, hearts, spades),
    /// ranks ascend within each suit and the cursor starts at 0.
    #[must_use]
    pub fn with_options(options: DeckOptions) -> Self {
        let deck = Self::from_parts(Card::standard().collect(), 0, options);
        tracing::debug!(hash = %deck.hash, "created deck");
        deck
    }

    /// Builds a deck from an already validated order.
    fn from_parts(cards: Vec<Card>, top: usize, options: DeckOptions) -> Self {
        debug_assert_eq!(cards.len(), DECK_SIZE);
        let hash = order_hash(&cards);
        Self {
            cards,
            top,
            hash,
            seed_hash: UNSHUFFLED_SEED_HASH.to_string(),
            options,
        }
    }

    /// Returns all cards in stored order, dealt or not.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the index of the next card to deal.
    #[must_use]
    pub const fn top(&self) -> usize {
        self.top
    }

    /// Returns the hex content hash of the current order.
    #[must_use]
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Returns the hex content hash of the last shuffle seed, or
    /// [`UNSHUFFLED_SEED_HASH`] if the deck has not been shuffled.
    #[must_use]
    pub fn seed_hash(&self) -> &str {
        &self.seed_hash
    }

    /// Returns whether the deck has been shuffled since it was created or
    /// restored.
    #[must_use]
    pub fn is_shuffled(&self) -> bool {
        self.seed_hash != UNSHUFFLED_SEED_HASH
    }

    /// Returns the deck options.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }

    /// Recomputes the order hash after the order changed.
    fn rehash(&mut self) {
        self.hash = order_hash(&self.cards);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn new_deck_is_canonical() {
        let deck = Deck::new();
        assert_eq!(deck.cards().len(), DECK_SIZE);
        assert_eq!(deck.top(), 0);
        assert_eq!(deck.cards()[0], Card::new(Suit::Clubs, 1));
        assert_eq!(deck.cards()[13], Card::new(Suit::Diamonds, 1));
        assert_eq!(deck.cards()[51], Card::new(Suit::Spades, 13));
        assert_eq!(deck.hash(), order_hash(deck.cards()));
        assert_eq!(deck.seed_hash(), UNSHUFFLED_SEED_HASH);
        assert!(!deck.is_shuffled());
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(Deck::default(), Deck::new());
    }

    #[test]
    fn keeps_options() {
        let options = DeckOptions::default().with_seed_bound(10);
        assert_eq!(Deck::with_options(options).options(), &options);
    }
}
