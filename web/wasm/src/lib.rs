use make_ten::{
    Card, ComputerMove, Game, GameOptions, GameState, MatchOutcome, Replenishment, Side, Snapshot,
    Suit, Winner,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<WasmGame, JsValue> {
        let game = Game::new(GameOptions::default(), seed as u64).map_err(js_err)?;
        Ok(Self { game })
    }

    pub fn reset(&mut self, seed: u32) -> Result<(), JsValue> {
        self.game = Game::new(GameOptions::default(), seed as u64).map_err(js_err)?;
        Ok(())
    }

    pub fn restart(&self) {
        self.game.restart();
    }

    /// Plays the player's card at `index` in hand order.
    pub fn play(&self, index: u32) -> Result<JsValue, JsValue> {
        let hand = self.game.player_hand();
        let card = hand
            .cards()
            .get(index as usize)
            .copied()
            .ok_or_else(|| JsValue::from_str("no card at that position"))?;
        let outcome = self.game.player_attempt_match(card).map_err(js_err)?;
        to_js_value(&JsMatch::from(outcome))
    }

    pub fn forfeit(&self) -> Result<(), JsValue> {
        self.game.player_forfeit().map_err(js_err)
    }

    /// Runs the computer's move. Returns `null` if it passed.
    pub fn computer_turn(&self) -> Result<JsValue, JsValue> {
        match self.game.computer_take_turn().map_err(js_err)? {
            ComputerMove::Matched(outcome) => to_js_value(&JsMatch::from(outcome)),
            ComputerMove::Forfeited => Ok(JsValue::NULL),
        }
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsSnapshot::from(self.game.snapshot()))
    }
}

#[derive(Serialize)]
struct JsSnapshot {
    state: &'static str,
    turn: Option<&'static str>,
    cards_remaining: u32,
    player_hand: Vec<JsCard>,
    computer_hand: Vec<JsCard>,
    pool: Vec<JsCard>,
    player_playable: Vec<bool>,
    player_score: u32,
    computer_score: u32,
    winner: Option<&'static str>,
}

impl From<Snapshot> for JsSnapshot {
    fn from(snapshot: Snapshot) -> Self {
        let player_playable = snapshot
            .player_hand
            .iter()
            .map(|card| snapshot.player_playable.contains(card))
            .collect();

        Self {
            state: state_to_str(snapshot.state),
            turn: snapshot.turn().map(side_to_str),
            cards_remaining: snapshot.cards_remaining as u32,
            player_hand: cards_to_js(&snapshot.player_hand),
            computer_hand: cards_to_js(&snapshot.computer_hand),
            pool: cards_to_js(&snapshot.pool),
            player_playable,
            player_score: snapshot.player_score,
            computer_score: snapshot.computer_score,
            winner: snapshot.winner().map(winner_to_str),
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
    red: bool,
    label: String,
}

#[derive(Serialize)]
struct JsMatch {
    side: &'static str,
    played: JsCard,
    matched: JsCard,
    points: u32,
    drawn: Vec<JsCard>,
}

impl From<MatchOutcome> for JsMatch {
    fn from(outcome: MatchOutcome) -> Self {
        Self {
            side: side_to_str(outcome.side),
            played: card_to_js(outcome.played),
            matched: card_to_js(outcome.matched),
            points: outcome.points,
            drawn: drawn_to_js(outcome.replenished),
        }
    }
}

fn drawn_to_js(drawn: Replenishment) -> Vec<JsCard> {
    [drawn.player, drawn.computer, drawn.pool]
        .into_iter()
        .flatten()
        .map(card_to_js)
        .collect()
}

fn cards_to_js(cards: &[Card]) -> Vec<JsCard> {
    cards.iter().copied().map(card_to_js).collect()
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
        red: card.is_red(),
        label: card.to_string(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::PlayerTurn => "PlayerTurn",
        GameState::ComputerTurn => "ComputerTurn",
        GameState::GameOver => "GameOver",
    }
}

fn side_to_str(side: Side) -> &'static str {
    match side {
        Side::Player => "Player",
        Side::Computer => "Computer",
    }
}

fn winner_to_str(winner: Winner) -> &'static str {
    match winner {
        Winner::Player => "Player",
        Winner::Computer => "Computer",
        Winner::Draw => "Draw",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
