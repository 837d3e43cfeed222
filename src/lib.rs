//! A "make 10" card-matching game engine with optional `no_std` support.
//!
//! A player and a computer opponent each hold a hand of cards and share a
//! face-up pool. On their turn a side matches a hand card with a pool card
//! whose values sum to 10, or with a pool card of the same ten-valued rank.
//! Red cards in the pair score their value. The crate provides a [`Game`]
//! type that owns the deck, hands, pool and scores and runs the turn flow.
//!
//! # Example
//!
//! ```
//! use make_ten::{ComputerMove, Game, GameOptions, Side};
//!
//! let game = Game::new(GameOptions::default(), 42).unwrap();
//!
//! if let Some(&card) = game.playable_cards(Side::Player).first() {
//!     let outcome = game.player_attempt_match(card).unwrap();
//!     assert_eq!(outcome.played, card);
//!
//!     if !game.is_game_over() {
//!         let _reply: ComputerMove = game.computer_take_turn().unwrap();
//!     }
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pool;
pub mod result;
pub mod rules;
mod sync;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Suit};
pub use error::{ActionError, DealError};
pub use game::{Game, GameState, Snapshot};
pub use hand::{HAND_SIZE, Hand};
pub use options::GameOptions;
pub use pool::{POOL_SIZE, Pool};
pub use result::{ComputerMove, MatchOutcome, Replenishment, Side, Winner};
