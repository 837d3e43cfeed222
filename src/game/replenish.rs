use alloc::vec::Vec;

use crate::card::Card;
use crate::result::Replenishment;

use super::Game;

/// Pops the top card if the receiving side has room.
fn draw_if(deck: &mut Vec<Card>, has_room: bool) -> Option<Card> {
    if has_room { deck.pop() } else { None }
}

impl Game {
    /// Refills the hands and pool after a match.
    ///
    /// Draws at most one card each, in order: the player's hand, the
    /// computer's hand, then the pool. Each draw only happens if its target
    /// is below capacity and the deck still has a card at that point.
    pub fn replenish(&self) -> Replenishment {
        let mut deck = self.deck.lock();
        let mut player = self.player_hand.lock();
        let mut computer = self.computer_hand.lock();
        let mut pool = self.pool.lock();

        let drawn = Replenishment {
            player: draw_if(&mut deck, player.has_room()),
            computer: draw_if(&mut deck, computer.has_room()),
            pool: draw_if(&mut deck, pool.has_room()),
        };

        if let Some(card) = drawn.player {
            player.add_card(card);
        }
        if let Some(card) = drawn.computer {
            computer.add_card(card);
        }
        if let Some(card) = drawn.pool {
            pool.add_card(card);
        }

        log::debug!(
            "replenished {} cards, {} left in the deck",
            drawn.count(),
            deck.len()
        );

        drawn
    }
}
