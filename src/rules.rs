//! Matching and scoring rules.
//!
//! A hand card matches a pool card when their values add up to
//! [`TARGET_SUM`], or when both are the same ten-valued rank (10, J, Q or K).
//!
//! ```
//! use make_ten::{Card, Suit, rules};
//!
//! let six = Card::new(Suit::Spades, 6);
//! let pool = [Card::new(Suit::Hearts, 4), Card::new(Suit::Clubs, 9)];
//! assert_eq!(rules::find_match(six, &pool), Some(Card::new(Suit::Hearts, 4)));
//! ```

use crate::card::Card;

/// The sum a matched pair must reach.
pub const TARGET_SUM: u8 = 10;

/// Returns the value of a rank for matching and scoring.
///
/// Aces count 1, number cards their face value, and face cards 10.
/// Ranks outside 1..=13 are worth nothing.
#[must_use]
pub const fn score_value(rank: u8) -> u8 {
    match rank {
        1..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// Returns whether the rank pairs with an equal rank instead of by sum.
#[must_use]
pub const fn pairs_by_rank(rank: u8) -> bool {
    matches!(rank, 10..=13)
}

/// Returns whether `card` can be matched against `other`.
#[must_use]
pub const fn is_match(card: Card, other: Card) -> bool {
    let value = score_value(card.rank);
    let other_value = score_value(other.rank);
    if value != 0 && other_value != 0 && value + other_value == TARGET_SUM {
        return true;
    }
    pairs_by_rank(card.rank) && card.rank == other.rank
}

/// Finds the first card in `pool` that matches `card`.
///
/// The scan follows pool order, so when several cards qualify the earliest
/// one wins.
#[must_use]
pub fn find_match(card: Card, pool: &[Card]) -> Option<Card> {
    pool.iter().copied().find(|&candidate| is_match(card, candidate))
}

/// Returns whether any of `cards` has a match in `pool`.
pub fn has_any_match<'a, I>(cards: I, pool: &[Card]) -> bool
where
    I: IntoIterator<Item = &'a Card>,
{
    cards
        .into_iter()
        .any(|&card| find_match(card, pool).is_some())
}

/// Points a single card is worth when it leaves play in a match.
#[must_use]
pub const fn points(card: Card) -> u32 {
    if card.is_red() {
        score_value(card.rank) as u32
    } else {
        0
    }
}

/// Points earned for matching `played` with `matched`.
#[must_use]
pub const fn match_points(played: Card, matched: Card) -> u32 {
    points(played) + points(matched)
}
