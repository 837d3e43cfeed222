//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{Card, DECK_SIZE, full_deck};
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::pool::Pool;
use crate::result::{Side, Winner};
use crate::rules;

mod actions;
mod replenish;
pub mod snapshot;
pub mod state;

pub use snapshot::Snapshot;
pub use state::GameState;

/// A "make 10" game between a player and the computer.
///
/// The game owns the deck, both hands, the pool, the matched pairs taken out
/// of play, and both scores. Every field sits behind a lock so the game can
/// be driven through `&self` and shared between threads.
///
/// Moves and restarts hold a single move lock from the turn check to the
/// hand-over, so at most one move is played per turn. When several tables
/// are locked at once they are taken in field order after it: deck, player
/// hand, computer hand, pool, discarded, scores, state.
pub struct Game {
    /// Cards left to draw. The top of the deck is the end of the vector.
    pub deck: Mutex<Vec<Card>>,
    /// Game options.
    pub options: GameOptions,
    /// The player's hand.
    pub player_hand: Mutex<Hand>,
    /// The computer's hand.
    pub computer_hand: Mutex<Hand>,
    /// The shared pool.
    pub pool: Mutex<Pool>,
    /// Matched pairs, removed from play for good.
    pub discarded: Mutex<Vec<Card>>,
    /// The player's score.
    pub player_score: Mutex<u32>,
    /// The computer's score.
    pub computer_score: Mutex<u32>,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
    /// Held for the whole of a move or restart.
    moves: Mutex<()>,
}

impl Game {
    /// Creates a new game with the given seed and deals the opening cards.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand or pool size is zero, or if the deal needs
    /// more cards than a deck holds.
    ///
    /// # Example
    ///
    /// ```
    /// use make_ten::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.cards_remaining(), 32);
    /// assert_eq!(game.state(), GameState::PlayerTurn);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, DealError> {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new game shuffled from operating system entropy.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid, as for [`Game::new`], or
    /// if the operating system cannot provide entropy.
    ///
    /// # Example
    ///
    /// ```
    /// use make_ten::{Game, GameOptions};
    ///
    /// let game = Game::from_entropy(GameOptions::default()).unwrap();
    /// assert_eq!(game.pool().len(), 10);
    /// ```
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn from_entropy(options: GameOptions) -> Result<Self, DealError> {
        let rng = ChaCha8Rng::try_from_os_rng().map_err(|_| DealError::EntropyUnavailable)?;
        Self::with_rng(options, rng)
    }

    fn with_rng(options: GameOptions, mut rng: ChaCha8Rng) -> Result<Self, DealError> {
        Self::validate(&options)?;

        let deck = Self::create_deck(&mut rng);

        let game = Self {
            deck: Mutex::new(deck),
            options,
            player_hand: Mutex::new(Hand::new(options.hand_size)),
            computer_hand: Mutex::new(Hand::new(options.hand_size)),
            pool: Mutex::new(Pool::new(options.pool_size)),
            discarded: Mutex::new(Vec::new()),
            player_score: Mutex::new(0),
            computer_score: Mutex::new(0),
            state: Mutex::new(GameState::PlayerTurn),
            rng: Mutex::new(rng),
            moves: Mutex::new(()),
        };
        game.deal();

        Ok(game)
    }

    fn validate(options: &GameOptions) -> Result<(), DealError> {
        if options.hand_size == 0 || options.pool_size == 0 {
            return Err(DealError::InvalidOptions);
        }
        match options.cards_dealt() {
            Some(dealt) if dealt <= DECK_SIZE => Ok(()),
            _ => Err(DealError::NotEnoughCards),
        }
    }

    /// Creates and shuffles a full deck.
    fn create_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = full_deck();
        cards.shuffle(rng);
        cards
    }

    /// Deals the player, then the computer, then the pool.
    fn deal(&self) {
        let mut deck = self.deck.lock();
        let mut player = self.player_hand.lock();
        let mut computer = self.computer_hand.lock();
        let mut pool = self.pool.lock();

        for _ in 0..self.options.hand_size {
            if let Some(card) = deck.pop() {
                player.add_card(card);
            }
        }
        for _ in 0..self.options.hand_size {
            if let Some(card) = deck.pop() {
                computer.add_card(card);
            }
        }
        for _ in 0..self.options.pool_size {
            if let Some(card) = deck.pop() {
                pool.add_card(card);
            }
        }

        log::info!(
            "dealt {} to each hand and {} to the pool, {} left in the deck",
            player.len(),
            pool.len(),
            deck.len()
        );
    }

    /// Starts a new game with a fresh shuffle from the game's RNG.
    ///
    /// Scores reset and it becomes the player's turn.
    pub fn restart(&self) {
        let _moves = self.moves.lock();

        let deck = Self::create_deck(&mut self.rng.lock());
        self.deck.replace(deck);
        self.player_hand.lock().clear();
        self.computer_hand.lock().clear();
        self.pool.lock().clear();
        self.discarded.lock().clear();
        self.player_score.replace(0);
        self.computer_score.replace(0);
        self.state.replace(GameState::PlayerTurn);
        self.deal();
    }

    const fn hand_lock(&self, side: Side) -> &Mutex<Hand> {
        match side {
            Side::Player => &self.player_hand,
            Side::Computer => &self.computer_hand,
        }
    }

    const fn score_lock(&self, side: Side) -> &Mutex<u32> {
        match side {
            Side::Player => &self.player_score,
            Side::Computer => &self.computer_score,
        }
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns a copy of the player's hand.
    pub fn player_hand(&self) -> Hand {
        self.hand(Side::Player)
    }

    /// Returns a copy of the computer's hand.
    pub fn computer_hand(&self) -> Hand {
        self.hand(Side::Computer)
    }

    /// Returns a copy of the given side's hand.
    pub fn hand(&self, side: Side) -> Hand {
        self.hand_lock(side).lock().clone()
    }

    /// Returns a copy of the pool.
    pub fn pool(&self) -> Pool {
        self.pool.lock().clone()
    }

    /// Returns the matched cards taken out of play, in the order they left.
    pub fn discarded(&self) -> Vec<Card> {
        self.discarded.lock().clone()
    }

    /// Returns the player's score.
    pub fn player_score(&self) -> u32 {
        self.score(Side::Player)
    }

    /// Returns the computer's score.
    pub fn computer_score(&self) -> u32 {
        self.score(Side::Computer)
    }

    /// Returns the given side's score.
    pub fn score(&self, side: Side) -> u32 {
        *self.score_lock(side).lock()
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the side to move, or `None` once the game is over.
    pub fn turn(&self) -> Option<Side> {
        self.state().turn()
    }

    /// Returns whether the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.state() == GameState::GameOver
    }

    /// Returns the winner once the game has ended.
    pub fn winner(&self) -> Option<Winner> {
        if self.is_game_over() {
            Some(Winner::from_scores(
                self.player_score(),
                self.computer_score(),
            ))
        } else {
            None
        }
    }

    /// Finds the first pool card that matches `card`.
    pub fn find_match(&self, card: Card) -> Option<Card> {
        self.pool.lock().find_match(card)
    }

    /// Returns whether `card` has a match in the pool.
    pub fn can_match(&self, card: Card) -> bool {
        self.find_match(card).is_some()
    }

    /// Returns whether any card in either hand has a match in the pool.
    pub fn has_any_match(&self) -> bool {
        let player = self.player_hand.lock();
        let computer = self.computer_hand.lock();
        let pool = self.pool.lock();
        rules::has_any_match(
            player.cards().iter().chain(computer.cards()),
            pool.cards(),
        )
    }

    /// Returns the cards in `side`'s hand that can currently be matched.
    pub fn playable_cards(&self, side: Side) -> Vec<Card> {
        let hand = self.hand_lock(side).lock();
        let pool = self.pool.lock();
        hand.playable_cards(&pool)
    }
}
