//! Deck configuration options.

use crate::seed::DEFAULT_SEED_BOUND;

/// Configuration options for a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use verideck::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_seed_bound(52)
///     .with_allow_duplicates(true);
/// assert_eq!(options.seed_bound, 52);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Exclusive upper bound of internally generated seed elements.
    /// A bound of 0 is treated as 1.
    pub seed_bound: u32,
    /// Whether restoring accepts strings that name the same card twice.
    pub allow_duplicates: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            seed_bound: DEFAULT_SEED_BOUND,
            allow_duplicates: false,
        }
    }
}

impl DeckOptions {
    /// Sets the exclusive upper bound of generated seed elements.
    ///
    /// # Example
    ///
    /// ```
    /// use verideck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_seed_bound(1_000);
    /// assert_eq!(options.seed_bound, 1_000);
    /// ```
    #[must_use]
    pub const fn with_seed_bound(mut self, seed_bound: u32) -> Self {
        self.seed_bound = seed_bound;
        self
    }

    /// Sets whether restoring accepts duplicate cards.
    ///
    /// # Example
    ///
    /// ```
    /// use verideck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_allow_duplicates(true);
    /// assert!(options.allow_duplicates);
    /// ```
    #[must_use]
    pub const fn with_allow_duplicates(mut self, allow_duplicates: bool) -> Self {
        self.allow_duplicates = allow_duplicates;
        self
    }
}
