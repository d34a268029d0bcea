//! Error types for deck operations.

use alloc::string::String;

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while decoding a card mnemonic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MnemonicError {
    /// The token does not match the mnemonic grammar.
    #[error("invalid card mnemonic {0:?}")]
    InvalidMnemonic(String),
}

/// Errors that can occur while restoring a deck from its string form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreError {
    /// The string does not split into exactly 52 tokens.
    #[error("invalid deck length: found {found} cards, expected {expected}")]
    InvalidDeckLength {
        /// Number of tokens found.
        found: usize,
        /// Number of tokens required.
        expected: usize,
    },
    /// A token is not a valid card mnemonic.
    #[error("invalid card mnemonic {0:?}")]
    InvalidMnemonic(String),
    /// More than one token is wrapped in brackets.
    #[error("multiple cursor markers at positions {first} and {second}")]
    MultipleCursors {
        /// Position of the first bracketed token.
        first: usize,
        /// Position of the second bracketed token.
        second: usize,
    },
    /// The same card appears twice.
    #[error("duplicate card {card} at position {index}")]
    DuplicateCard {
        /// The repeated card.
        card: Card,
        /// Position of the repeat.
        index: usize,
    },
}

impl From<MnemonicError> for RestoreError {
    fn from(err: MnemonicError) -> Self {
        match err {
            MnemonicError::InvalidMnemonic(token) => Self::InvalidMnemonic(token),
        }
    }
}

/// Errors that can occur during shuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShuffleError {
    /// The seed does not have one element per card.
    #[error("seed length mismatch: found {found}, expected {expected}")]
    SeedLengthMismatch {
        /// Length of the supplied seed.
        found: usize,
        /// Required seed length.
        expected: usize,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough undealt cards left.
    #[error("out of cards: requested {requested}, remaining {remaining}")]
    OutOfCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}
