//! Card types and the mnemonic codec.
//!
//! Every card has a canonical short form, its *mnemonic*: the rank symbol
//! (`A`, `2`..`10`, `J`, `Q`, `K`) followed by the suit symbol (`C`, `D`,
//! `H`, `S`). Mnemonics are the only representation that is ever persisted.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::ser::SerializeStruct;

use crate::error::MnemonicError;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Card suit, ordered `Clubs` (1) through `Spades` (4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Clubs.
    Clubs = 1,
    /// Diamonds.
    Diamonds = 2,
    /// Hearts.
    Hearts = 3,
    /// Spades.
    Spades = 4,
}

impl Suit {
    /// All suits in enumeration order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit for a 1-based index.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Clubs),
            2 => Some(Self::Diamonds),
            3 => Some(Self::Hearts),
            4 => Some(Self::Spades),
            _ => None,
        }
    }

    /// Returns the 1-based index of the suit.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the mnemonic symbol of the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }

    const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'C' => Some(Self::Clubs),
            'D' => Some(Self::Diamonds),
            'H' => Some(Self::Hearts),
            'S' => Some(Self::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card.
///
/// Cards are immutable values; the rank is always in `1..=13`
/// (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is not in `1..=13`. Use [`Card::try_new`] for
    /// untrusted input.
    ///
    /// # Example
    ///
    /// ```
    /// use verideck::{Card, Suit};
    ///
    /// let card = Card::new(Suit::Spades, 1);
    /// assert_eq!(card.mnemonic(), "AS");
    /// assert_eq!(card.value(), 39);
    /// ```
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        assert!(rank >= 1 && rank <= RANKS_PER_SUIT, "rank must be in 1..=13");
        Self { suit, rank }
    }

    /// Creates a new card, returning `None` if the rank is out of range.
    #[must_use]
    pub const fn try_new(suit: Suit, rank: u8) -> Option<Self> {
        if rank >= 1 && rank <= RANKS_PER_SUIT {
            Some(Self { suit, rank })
        } else {
            None
        }
    }

    /// Returns the card with the given unique value (`0..52`).
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match Suit::from_index(value / RANKS_PER_SUIT + 1) {
            Some(suit) => Some(Self {
                suit,
                rank: value % RANKS_PER_SUIT + 1,
            }),
            None => None,
        }
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the unique value of the card, `13 * (suit - 1) + (rank - 1)`.
    #[must_use]
    pub const fn value(&self) -> u8 {
        RANKS_PER_SUIT * (self.suit.index() - 1) + (self.rank - 1)
    }

    /// Returns the canonical mnemonic, e.g. `"AS"`, `"10H"` or `"KC"`.
    #[must_use]
    pub fn mnemonic(&self) -> String {
        self.to_string()
    }

    /// Returns the cards of a standard deck in canonical order: suits in
    /// enumeration order, ranks ascending within each suit.
    pub fn standard() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..DECK_SIZE as u8).map(|value| Self {
            suit: Suit::ALL[(value / RANKS_PER_SUIT) as usize],
            rank: value % RANKS_PER_SUIT + 1,
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            1 => f.write_str("A")?,
            11 => f.write_str("J")?,
            12 => f.write_str("Q")?,
            13 => f.write_str("K")?,
            n => write!(f, "{n}")?,
        }
        write!(f, "{}", self.suit.symbol())
    }
}

fn decode_rank(symbol: &str) -> Option<u8> {
    match symbol {
        "A" | "a" => Some(1),
        "J" | "j" => Some(11),
        "Q" | "q" => Some(12),
        "K" | "k" => Some(13),
        digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => digits
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=RANKS_PER_SUIT).contains(n)),
        _ => None,
    }
}

impl FromStr for Card {
    type Err = MnemonicError;

    /// Decodes a mnemonic, case-insensitively.
    ///
    /// Ranks may also be spelled as numerals `1..=13`, so `"11C"` reads as
    /// the jack of clubs.
    ///
    /// ```
    /// use verideck::{Card, Suit};
    ///
    /// let card: Card = "10h".parse().unwrap();
    /// assert_eq!(card, Card::new(Suit::Hearts, 10));
    /// assert!("1X".parse::<Card>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MnemonicError::InvalidMnemonic(s.to_string());

        let suit_symbol = s.chars().next_back().ok_or_else(invalid)?;
        let suit = Suit::from_symbol(suit_symbol).ok_or_else(invalid)?;
        let rank_symbol = &s[..s.len() - suit_symbol.len_utf8()];
        let rank = decode_rank(rank_symbol).ok_or_else(invalid)?;

        Ok(Self { suit, rank })
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Card", 4)?;
        state.serialize_field("suit", &self.suit.index())?;
        state.serialize_field("rank", &self.rank)?;
        state.serialize_field("value", &self.value())?;
        state.serialize_field("mnemonic", &self.mnemonic())?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CardRepr {
    Mnemonic(String),
    Record { suit: u8, rank: u8 },
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        match CardRepr::deserialize(deserializer)? {
            CardRepr::Mnemonic(mnemonic) => mnemonic.parse().map_err(D::Error::custom),
            CardRepr::Record { suit, rank } => Suit::from_index(suit)
                .and_then(|suit| Self::try_new(suit, rank))
                .ok_or_else(|| D::Error::custom("card suit or rank out of range")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn standard_order_and_values() {
        let cards: Vec<Card> = Card::standard().collect();
        assert_eq!(cards.len(), DECK_SIZE);
        for (index, card) in cards.iter().enumerate() {
            assert_eq!(card.value() as usize, index);
            assert_eq!(Card::from_value(card.value()), Some(*card));
        }
        assert_eq!(cards[0], Card::new(Suit::Clubs, 1));
        assert_eq!(cards[51], Card::new(Suit::Spades, 13));
        assert_eq!(Card::from_value(52), None);
    }

    #[test]
    fn encodes_rank_and_suit_symbols() {
        assert_eq!(Card::new(Suit::Spades, 1).mnemonic(), "AS");
        assert_eq!(Card::new(Suit::Hearts, 10).mnemonic(), "10H");
        assert_eq!(Card::new(Suit::Clubs, 13).mnemonic(), "KC");
        assert_eq!(Card::new(Suit::Diamonds, 11).mnemonic(), "JD");
        assert_eq!(Card::new(Suit::Diamonds, 12).mnemonic(), "QD");
        assert_eq!(Card::new(Suit::Clubs, 7).mnemonic(), "7C");
    }

    #[test]
    fn every_mnemonic_decodes_to_its_card() {
        for card in Card::standard() {
            let decoded: Card = card.mnemonic().parse().expect("canonical mnemonic");
            assert_eq!(decoded, card);
            assert_eq!(decoded.value(), card.value());

            let lower: Card = card.mnemonic().to_lowercase().parse().expect("lowercase");
            assert_eq!(lower, card);
        }
    }

    #[test]
    fn rejects_malformed_mnemonics() {
        for token in ["", "S", "A", "14S", "0H", "300C", "AX", "ZZ", "10", "A S", "+5C", "♠A"] {
            assert_eq!(
                token.parse::<Card>(),
                Err(MnemonicError::InvalidMnemonic(token.to_string())),
                "{token:?}"
            );
        }
    }

    #[test]
    fn decodes_numerals_for_lettered_ranks() {
        assert_eq!("1C".parse::<Card>(), Ok(Card::new(Suit::Clubs, 1)));
        assert_eq!("11C".parse::<Card>(), Ok(Card::new(Suit::Clubs, 11)));
        assert_eq!("12h".parse::<Card>(), Ok(Card::new(Suit::Hearts, 12)));
        assert_eq!("13S".parse::<Card>(), Ok(Card::new(Suit::Spades, 13)));
        assert_eq!("010D".parse::<Card>(), Ok(Card::new(Suit::Diamonds, 10)));

        // The encoder still prefers letters.
        assert_eq!("11C".parse::<Card>().map(|card| card.mnemonic()), Ok("JC".to_string()));
    }

    #[test]
    fn try_new_checks_rank() {
        assert!(Card::try_new(Suit::Hearts, 0).is_none());
        assert!(Card::try_new(Suit::Hearts, 14).is_none());
        assert_eq!(Card::try_new(Suit::Hearts, 13), Some(Card::new(Suit::Hearts, 13)));
    }

    #[test]
    fn serializes_all_fields() {
        let json = serde_json::to_value(Card::new(Suit::Hearts, 10)).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "suit": 3, "rank": 10, "value": 35, "mnemonic": "10H" })
        );
        let back: Card = serde_json::from_value(json).expect("deserialize record");
        assert_eq!(back, Card::new(Suit::Hearts, 10));

        let from_str: Card = serde_json::from_str("\"qs\"").expect("deserialize mnemonic");
        assert_eq!(from_str, Card::new(Suit::Spades, 12));
    }
}
