//! The shared pool both sides match against.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::rules;

/// Default number of cards in the pool.
pub const POOL_SIZE: usize = 10;

/// The face-up pool of cards.
///
/// Cards are kept in the order they were added, which decides which card
/// is taken when several match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    cards: Vec<Card>,
    capacity: usize,
}

impl Pool {
    /// Creates a new empty pool that holds up to `capacity` cards.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Creates a pool of `capacity` holding `cards`.
    ///
    /// Returns `None` if there are more cards than the pool holds.
    #[must_use]
    pub fn from_cards(capacity: usize, cards: &[Card]) -> Option<Self> {
        (cards.len() <= capacity).then(|| {
            let mut pool = Self::new(capacity);
            pool.cards.extend_from_slice(cards);
            pool
        })
    }

    /// Adds a card to the end of the pool.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes `card` from the pool, keeping the order of the rest.
    ///
    /// Returns `false` if the card was not in the pool.
    pub fn remove_card(&mut self, card: Card) -> bool {
        if let Some(index) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    /// Finds the first pool card that matches `card`.
    #[must_use]
    pub fn find_match(&self, card: Card) -> Option<Card> {
        rules::find_match(card, &self.cards)
    }

    /// Returns the cards in the pool.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the maximum number of cards the pool is refilled to.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns whether the pool is below its capacity.
    #[must_use]
    pub fn has_room(&self) -> bool {
        self.cards.len() < self.capacity
    }

    /// Returns the number of cards in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new(POOL_SIZE)
    }
}
