//! String and JSON forms of a deck.
//!
//! The string form is 52 mnemonics joined by `-`, with the card at the
//! cursor wrapped in brackets:
//!
//! ```text
//! [AC]-2C-3C-4C-5C-6C-7C-8C-9C-10C-JC-QC-KC-AD-...-KS
//! ```
//!
//! An exhausted deck has no bracketed token and restores with the cursor
//! at 0.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::card::{Card, DECK_SIZE};
use crate::error::{MnemonicError, RestoreError};
use crate::hash::SEPARATOR;
use crate::options::DeckOptions;

use super::Deck;

/// Splits the cursor brackets off a token.
fn strip_cursor(token: &str) -> Result<(&str, bool), RestoreError> {
    match (token.strip_prefix('['), token.strip_suffix(']')) {
        (Some(_), Some(_)) if token.len() >= 2 => Ok((&token[1..token.len() - 1], true)),
        (None, None) => Ok((token, false)),
        _ => Err(RestoreError::InvalidMnemonic(token.into())),
    }
}

impl Deck {
    /// Restores a deck from its string form.
    ///
    /// The bracketed token, if any, sets the cursor; otherwise the cursor is
    /// 0. The seed hash is not part of the string form and reverts to the
    /// unshuffled sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`RestoreError::InvalidDeckLength`] if the string does not
    /// hold exactly 52 tokens, [`RestoreError::InvalidMnemonic`] for a
    /// malformed token, [`RestoreError::MultipleCursors`] if more than one
    /// token is bracketed and, unless `options.allow_duplicates` is set,
    /// [`RestoreError::DuplicateCard`] if a card repeats.
    ///
    /// # Example
    ///
    /// ```
    /// use verideck::{Deck, DeckOptions};
    ///
    /// let mut deck = Deck::new();
    /// deck.get_next().unwrap();
    ///
    /// let restored = Deck::restore_with_options(&deck.to_string(), DeckOptions::default()).unwrap();
    /// assert_eq!(restored.top(), 1);
    /// assert_eq!(restored.cards(), deck.cards());
    /// ```
    pub fn restore_with_options(s: &str, options: DeckOptions) -> Result<Self, RestoreError> {
        let tokens: Vec<&str> = s.split(SEPARATOR).collect();
        if tokens.len() != DECK_SIZE {
            return Err(RestoreError::InvalidDeckLength {
                found: tokens.len(),
                expected: DECK_SIZE,
            });
        }

        let mut cards = Vec::with_capacity(DECK_SIZE);
        let mut cursor: Option<usize> = None;
        let mut seen = 0u64;

        for (index, token) in tokens.into_iter().enumerate() {
            let (mnemonic, bracketed) = strip_cursor(token)?;
            if bracketed {
                if let Some(first) = cursor {
                    return Err(RestoreError::MultipleCursors {
                        first,
                        second: index,
                    });
                }
                cursor = Some(index);
            }

            let card: Card = mnemonic
                .parse()
                .map_err(|_: MnemonicError| RestoreError::InvalidMnemonic(token.into()))?;
            let bit = 1u64 << card.value();
            if seen & bit != 0 && !options.allow_duplicates {
                return Err(RestoreError::DuplicateCard { card, index });
            }
            seen |= bit;
            cards.push(card);
        }

        let deck = Self::from_parts(cards, cursor.unwrap_or(0), options);
        tracing::debug!(hash = %deck.hash, top = deck.top, "restored deck");
        Ok(deck)
    }

    /// Returns the JSON form of the deck: every card in stored order,
    /// regardless of the cursor.
    ///
    /// ```
    /// use verideck::Deck;
    ///
    /// let json = Deck::new().to_json();
    /// assert_eq!(json["cards"][0]["mnemonic"], "AC");
    /// assert_eq!(json["cards"].as_array().unwrap().len(), 52);
    /// ```
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "cards": self.cards })
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(SEPARATOR)?;
            }
            if index == self.top {
                write!(f, "[{card}]")?;
            } else {
                write!(f, "{card}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Deck {
    type Err = RestoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::restore_with_options(s, DeckOptions::default())
    }
}

impl Serialize for Deck {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Deserializes through [`FromStr`], so with default [`DeckOptions`]: a
/// string naming a card twice is rejected even if the deck that wrote it
/// was restored with `allow_duplicates`. Use
/// [`Deck::restore_with_options`] on the raw string for such decks.
impl<'de> Deserialize<'de> for Deck {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
