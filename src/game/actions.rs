use crate::card::Card;
use crate::error::ActionError;
use crate::result::{ComputerMove, MatchOutcome, Side, Winner};
use crate::rules;

use super::{Game, GameState};

impl Game {
    fn ensure_turn(&self, side: Side) -> Result<(), ActionError> {
        match *self.state.lock() {
            GameState::GameOver => Err(ActionError::GameOver),
            state if state.turn() == Some(side) => Ok(()),
            _ => Err(ActionError::NotYourTurn),
        }
    }

    /// Hands the turn to the other side and checks for the end of the game.
    fn finish_turn(&self, side: Side) {
        self.state.replace(GameState::turn_of(side.opponent()));
        self.check_game_over();
    }

    /// Matches `card` from `side`'s hand with the first matching pool card.
    ///
    /// Both cards leave play. Red cards score their value for `side`, then the
    /// hands and pool are replenished and the turn passes to the other side.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, it is not `side`'s turn, the
    /// card is not in `side`'s hand, or the card has no match in the pool.
    pub fn apply_match(&self, side: Side, card: Card) -> Result<MatchOutcome, ActionError> {
        let _moves = self.moves.lock();
        self.ensure_turn(side)?;
        self.play_match(side, card)
    }

    /// Plays a match for a side whose turn has been checked under the move lock.
    fn play_match(&self, side: Side, card: Card) -> Result<MatchOutcome, ActionError> {
        let mut hand = self.hand_lock(side).lock();
        if !hand.contains(card) {
            return Err(ActionError::CardNotInHand);
        }

        let mut pool = self.pool.lock();
        let matched = pool.find_match(card).ok_or(ActionError::NoMatch)?;

        hand.remove_card(card);
        pool.remove_card(matched);
        drop(pool);
        drop(hand);

        self.discarded.lock().extend([card, matched]);

        let points = rules::match_points(card, matched);
        *self.score_lock(side).lock() += points;

        log::debug!("{side} matched {card} with {matched} for {points} points");

        let replenished = self.replenish();
        self.finish_turn(side);

        Ok(MatchOutcome {
            side,
            played: card,
            matched,
            points,
            replenished,
        })
    }

    /// Player action: match `card` from the player's hand.
    ///
    /// On success it becomes the computer's turn. A rejected attempt leaves
    /// the game unchanged.
    ///
    /// # Errors
    ///
    /// See [`Game::apply_match`].
    ///
    /// # Example
    ///
    /// ```
    /// use make_ten::{Game, GameOptions, Side};
    ///
    /// let game = Game::new(GameOptions::default(), 7).unwrap();
    /// match game.playable_cards(Side::Player).first() {
    ///     Some(&card) => assert!(game.player_attempt_match(card).is_ok()),
    ///     None => assert!(game.player_forfeit().is_ok()),
    /// }
    /// ```
    pub fn player_attempt_match(&self, card: Card) -> Result<MatchOutcome, ActionError> {
        self.apply_match(Side::Player, card)
    }

    /// Player action: pass the turn when no card in hand can be matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, it is not the player's turn, or
    /// the player still has a playable card.
    pub fn player_forfeit(&self) -> Result<(), ActionError> {
        let _moves = self.moves.lock();
        self.ensure_turn(Side::Player)?;

        if !self.playable_cards(Side::Player).is_empty() {
            return Err(ActionError::MatchAvailable);
        }

        log::debug!("player has no match and forfeits");
        self.finish_turn(Side::Player);

        Ok(())
    }

    /// Computer action: play the first card in hand order that has a match.
    ///
    /// If no card matches, the computer forfeits: nothing is drawn or scored
    /// and the turn returns to the player.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over or it is not the computer's turn.
    pub fn computer_take_turn(&self) -> Result<ComputerMove, ActionError> {
        let _moves = self.moves.lock();
        self.ensure_turn(Side::Computer)?;

        let choice = {
            let hand = self.computer_hand.lock();
            let pool = self.pool.lock();
            hand.first_playable(&pool)
        };

        if let Some((card, _)) = choice {
            return self
                .play_match(Side::Computer, card)
                .map(ComputerMove::Matched);
        }

        log::debug!("computer has no match and forfeits");
        self.finish_turn(Side::Computer);

        Ok(ComputerMove::Forfeited)
    }

    /// Ends the game if no further match is possible.
    ///
    /// The game is over once both hands are empty or no card in either hand
    /// matches the pool. An empty deck alone does not end it unless
    /// [`GameOptions::end_on_empty_deck`](crate::GameOptions::end_on_empty_deck)
    /// is set.
    ///
    /// Returns whether the game is over.
    pub fn check_game_over(&self) -> bool {
        if self.is_game_over() {
            return true;
        }

        let hands_empty =
            self.player_hand.lock().is_empty() && self.computer_hand.lock().is_empty();
        let deck_empty = self.options.end_on_empty_deck && self.deck.lock().is_empty();
        if !hands_empty && !deck_empty && self.has_any_match() {
            return false;
        }

        self.state.replace(GameState::GameOver);

        let player_score = self.player_score();
        let computer_score = self.computer_score();
        let winner = Winner::from_scores(player_score, computer_score);
        log::info!("game over: player {player_score}, computer {computer_score}, {winner:?}");

        true
    }
}
