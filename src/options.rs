//! Game configuration options.

use crate::hand::HAND_SIZE;
use crate::pool::POOL_SIZE;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use make_ten::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(4)
///     .with_pool_size(8)
///     .with_end_on_empty_deck(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards dealt to each hand, and the size hands are refilled to.
    pub hand_size: usize,
    /// Cards dealt to the pool, and the size it is refilled to.
    pub pool_size: usize,
    /// Whether an empty deck ends the game on its own.
    ///
    /// Off by default: the game only ends when both hands are empty or no
    /// match is left.
    pub end_on_empty_deck: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: HAND_SIZE,
            pool_size: POOL_SIZE,
            end_on_empty_deck: false,
        }
    }
}

impl GameOptions {
    /// Sets the hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use make_ten::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(3);
    /// assert_eq!(options.hand_size, 3);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the pool size.
    ///
    /// # Example
    ///
    /// ```
    /// use make_ten::GameOptions;
    ///
    /// let options = GameOptions::default().with_pool_size(6);
    /// assert_eq!(options.pool_size, 6);
    /// ```
    #[must_use]
    pub const fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Sets whether an empty deck ends the game.
    #[must_use]
    pub const fn with_end_on_empty_deck(mut self, end: bool) -> Self {
        self.end_on_empty_deck = end;
        self
    }

    /// Number of cards taken from the deck by the initial deal.
    ///
    /// Returns `None` if the count does not fit in a `usize`.
    #[must_use]
    pub const fn cards_dealt(&self) -> Option<usize> {
        match self.hand_size.checked_mul(2) {
            Some(hands) => hands.checked_add(self.pool_size),
            None => None,
        }
    }
}
