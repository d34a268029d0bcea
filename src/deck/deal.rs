use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE};
use crate::error::DealError;

use super::Deck;

impl Deck {
    /// Returns the number of cards not yet dealt.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        DECK_SIZE - self.top
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.top >= DECK_SIZE
    }

    /// Returns the card at the cursor without dealing it.
    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.cards.get(self.top).copied()
    }

    /// Deals the card at the cursor and advances the cursor by one.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::OutOfCards`] if all 52 cards have been dealt.
    pub fn get_next(&mut self) -> Result<Card, DealError> {
        let card = self.peek().ok_or(DealError::OutOfCards {
            requested: 1,
            remaining: 0,
        })?;
        self.top += 1;
        tracing::trace!(%card, top = self.top, "dealt card");
        Ok(card)
    }

    /// Deals `amount` cards in stored order.
    ///
    /// Either all requested cards are dealt or none are.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::OutOfCards`] if fewer than `amount` cards remain;
    /// the cursor does not move in that case.
    pub fn deal(&mut self, amount: usize) -> Result<Vec<Card>, DealError> {
        let remaining = self.remaining();
        if amount > remaining {
            return Err(DealError::OutOfCards {
                requested: amount,
                remaining,
            });
        }

        (0..amount).map(|_| self.get_next()).collect()
    }
}
