//! Move and game result types.

use core::cmp::Ordering;
use core::fmt;

use crate::card::Card;

/// One of the two sides at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Computer,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Computer,
            Self::Computer => Self::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("player"),
            Self::Computer => f.write_str("computer"),
        }
    }
}

/// Cards drawn from the deck after a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Replenishment {
    /// Card drawn into the player's hand.
    pub player: Option<Card>,
    /// Card drawn into the computer's hand.
    pub computer: Option<Card>,
    /// Card drawn into the pool.
    pub pool: Option<Card>,
}

impl Replenishment {
    /// Returns how many cards were drawn.
    #[must_use]
    pub fn count(&self) -> usize {
        [self.player, self.computer, self.pool]
            .iter()
            .filter(|card| card.is_some())
            .count()
    }
}

/// Result of a successful match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    /// The side that made the match.
    pub side: Side,
    /// The card played from hand.
    pub played: Card,
    /// The pool card it was matched with.
    pub matched: Card,
    /// Points earned for the pair.
    pub points: u32,
    /// Cards drawn afterwards.
    pub replenished: Replenishment,
}

/// What the computer did on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputerMove {
    /// The computer made a match.
    Matched(MatchOutcome),
    /// The computer had no match and passed.
    Forfeited,
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The player scored more.
    Player,
    /// The computer scored more.
    Computer,
    /// Both scored the same.
    Draw,
}

impl Winner {
    /// Ranks the two scores.
    #[must_use]
    pub fn from_scores(player_score: u32, computer_score: u32) -> Self {
        match player_score.cmp(&computer_score) {
            Ordering::Greater => Self::Player,
            Ordering::Less => Self::Computer,
            Ordering::Equal => Self::Draw,
        }
    }
}
