//! Read-only view of a game for front ends.

use alloc::vec::Vec;

use crate::card::Card;
use crate::result::{Side, Winner};

use super::{Game, GameState};

/// Everything a front end needs to draw the table.
///
/// A snapshot is a copy: it never changes after it is taken, so a view can
/// be re-rendered from it without holding on to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Current game state.
    pub state: GameState,
    /// Cards left in the deck.
    pub cards_remaining: usize,
    /// The player's hand, in order.
    pub player_hand: Vec<Card>,
    /// The computer's hand, in order.
    pub computer_hand: Vec<Card>,
    /// The pool, in order.
    pub pool: Vec<Card>,
    /// Cards in the player's hand that currently have a match.
    pub player_playable: Vec<Card>,
    /// The player's score.
    pub player_score: u32,
    /// The computer's score.
    pub computer_score: u32,
}

impl Snapshot {
    /// Returns the side to move, or `None` once the game is over.
    #[must_use]
    pub const fn turn(&self) -> Option<Side> {
        self.state.turn()
    }

    /// Returns whether the game had ended when the snapshot was taken.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// Returns the winner if the game had ended.
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        self.is_game_over()
            .then(|| Winner::from_scores(self.player_score, self.computer_score))
    }
}

impl Game {
    /// Takes a consistent snapshot of the observable state.
    ///
    /// # Example
    ///
    /// ```
    /// use make_ten::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 3).unwrap();
    /// let snapshot = game.snapshot();
    /// assert_eq!(snapshot.player_hand.len(), 5);
    /// assert_eq!(snapshot.pool.len(), 10);
    /// assert_eq!(snapshot.winner(), None);
    /// ```
    pub fn snapshot(&self) -> Snapshot {
        let deck = self.deck.lock();
        let player = self.player_hand.lock();
        let computer = self.computer_hand.lock();
        let pool = self.pool.lock();
        let player_score = self.player_score.lock();
        let computer_score = self.computer_score.lock();
        let state = self.state.lock();

        Snapshot {
            state: *state,
            cards_remaining: deck.len(),
            player_hand: player.cards().to_vec(),
            computer_hand: computer.cards().to_vec(),
            pool: pool.cards().to_vec(),
            player_playable: player.playable_cards(&pool),
            player_score: *player_score,
            computer_score: *computer_score,
        }
    }
}
