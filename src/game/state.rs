//! Game state types.

use crate::result::Side;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for the player to match a card.
    PlayerTurn,
    /// Waiting for the computer to move.
    ComputerTurn,
    /// No further moves are accepted.
    GameOver,
}

impl GameState {
    /// Returns the state in which `side` is to move.
    #[must_use]
    pub const fn turn_of(side: Side) -> Self {
        match side {
            Side::Player => Self::PlayerTurn,
            Side::Computer => Self::ComputerTurn,
        }
    }

    /// Returns the side to move, or `None` once the game is over.
    #[must_use]
    pub const fn turn(self) -> Option<Side> {
        match self {
            Self::PlayerTurn => Some(Side::Player),
            Self::ComputerTurn => Some(Side::Computer),
            Self::GameOver => None,
        }
    }
}
