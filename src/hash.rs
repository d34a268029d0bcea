//! Content hashes of deck order and shuffle seeds.
//!
//! Both hashes are lower-case hex SHA-256 digests of a hyphen-joined string:
//! mnemonics for deck order, decimal integers for seeds. Publishing a hash
//! commits to the contents without revealing them.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use sha2::{Digest, Sha256};

use crate::card::Card;

/// Seed hash of a deck that has never been shuffled.
///
/// The `0x` prefix makes it 66 characters long, so it can never collide with
/// a real digest.
pub const UNSHUFFLED_SEED_HASH: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000000";

/// Separator between tokens in hashed and serialized strings.
pub const SEPARATOR: &str = "-";

/// Returns the lower-case hex SHA-256 digest of `data`.
///
/// ```
/// assert_eq!(
///     verideck::hash::sha256_hex(""),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
#[must_use]
pub fn sha256_hex(data: &str) -> String {
    hex::encode(Sha256::digest(data.as_bytes()))
}

/// Returns the content hash of a card order.
#[must_use]
pub fn order_hash(cards: &[Card]) -> String {
    let mnemonics: Vec<String> = cards.iter().map(Card::mnemonic).collect();
    sha256_hex(&mnemonics.join(SEPARATOR))
}

/// Returns the content hash of a shuffle seed.
#[must_use]
pub fn seed_hash(seed: &[u32]) -> String {
    let values: Vec<String> = seed.iter().map(u32::to_string).collect();
    sha256_hex(&values.join(SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_hash() {
        let cards: Vec<Card> = Card::standard().collect();
        assert_eq!(
            order_hash(&cards),
            "077b3951614ed59287fef573a6062d01f1703736e12a61d283aeeca8a3f8aab1"
        );
    }

    #[test]
    fn seed_hash_joins_with_hyphens() {
        let seed: Vec<u32> = (0..52).collect();
        assert_eq!(
            seed_hash(&seed),
            "9b9300d96324f9de178153c7c0a569ca9bde92ef97801a1133d9ec8fa143c0f1"
        );
        assert_eq!(
            seed_hash(&[0; 52]),
            "aacc209197779965f117b52e56debc1e825380bf527b1f950d1960a458e9c3f2"
        );
    }

    #[test]
    fn sentinel_is_not_a_digest() {
        assert_eq!(UNSHUFFLED_SEED_HASH.len(), 66);
        assert_ne!(UNSHUFFLED_SEED_HASH.len(), sha256_hex("").len());
    }
}
