//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Hand or pool size is zero.
    #[error("hand and pool sizes must be non-zero")]
    InvalidOptions,
    /// Not enough cards in the deck for the initial deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// The operating system could not seed the random number generator.
    #[error("no entropy source available")]
    EntropyUnavailable,
}

/// Errors that can occur during a move.
///
/// A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Not this side's turn.
    #[error("not your turn")]
    NotYourTurn,
    /// The chosen card has no partner in the pool.
    #[error("card has no match in the pool")]
    NoMatch,
    /// The chosen card is not in the acting hand.
    #[error("card is not in hand")]
    CardNotInHand,
    /// The game has already ended.
    #[error("game is over")]
    GameOver,
    /// A forfeit was requested while a match is still available.
    #[error("a match is still available")]
    MatchAvailable,
}
