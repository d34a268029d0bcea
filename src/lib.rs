//! A verifiable 52-card deck with optional `no_std` support.
//!
//! The crate provides a [`Deck`] that shuffles deterministically from a
//! seed, records SHA-256 content hashes of its order and of the seed, and
//! round-trips losslessly through a compact string form. A dealer can
//! publish the hashes before play and reveal the seed afterwards, letting
//! anyone replay the shuffle with [`verify_shuffle`].
//!
//! # Example
//!
//! ```
//! use verideck::{Deck, verify_shuffle};
//!
//! let before = Deck::new();
//! let mut deck = before.clone();
//! let seed: Vec<u32> = (0..52).map(|i| (i * 7 + 3) % 1000).collect();
//! deck.shuffle(&seed).unwrap();
//!
//! // Published before play.
//! let committed = deck.hash().to_owned();
//!
//! let hand = deck.deal(2).unwrap();
//! assert_eq!(hand[0].mnemonic(), "JS");
//!
//! // Revealed after play.
//! assert!(deck.verify_seed(&seed));
//! assert_eq!(verify_shuffle(&before, &seed, &committed), Ok(true));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hash;
pub mod options;
pub mod seed;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::{Deck, verify_shuffle};
pub use error::{DealError, MnemonicError, RestoreError, ShuffleError};
pub use hash::UNSHUFFLED_SEED_HASH;
pub use options::DeckOptions;
