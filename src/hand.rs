//! Player and computer hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::pool::Pool;

/// Default number of cards a hand holds.
pub const HAND_SIZE: usize = 5;

/// A hand of cards.
///
/// Cards keep the order in which they were dealt. The order drives the
/// computer's choice of card and the layout a front end shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Maximum number of cards the hand is refilled to.
    capacity: usize,
}

impl Hand {
    /// Creates a new empty hand that holds up to `capacity` cards.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Creates a hand of `capacity` holding `cards`.
    ///
    /// Returns `None` if there are more cards than the hand holds.
    #[must_use]
    pub fn from_cards(capacity: usize, cards: &[Card]) -> Option<Self> {
        if cards.len() > capacity {
            return None;
        }
        let mut hand = Self::new(capacity);
        hand.cards.extend_from_slice(cards);
        Some(hand)
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes `card` from the hand, keeping the order of the rest.
    ///
    /// Returns `false` if the card was not in the hand.
    pub fn remove_card(&mut self, card: Card) -> bool {
        if let Some(index) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the maximum number of cards the hand is refilled to.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns whether the hand is below its capacity.
    #[must_use]
    pub fn has_room(&self) -> bool {
        self.cards.len() < self.capacity
    }

    /// Returns the first card, in hand order, that has a match in `pool`,
    /// together with that match.
    #[must_use]
    pub fn first_playable(&self, pool: &Pool) -> Option<(Card, Card)> {
        self.cards
            .iter()
            .find_map(|&card| pool.find_match(card).map(|matched| (card, matched)))
    }

    /// Returns every card in the hand that has a match in `pool`.
    #[must_use]
    pub fn playable_cards(&self, pool: &Pool) -> Vec<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|&card| pool.find_match(card).is_some())
            .collect()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new(HAND_SIZE)
    }
}
