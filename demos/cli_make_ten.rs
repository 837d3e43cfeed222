//! CLI "make 10" example.
//!
//! Run with `RUST_LOG=debug` to see the engine's log output.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use make_ten::{Card, ComputerMove, Game, GameOptions, GameState, Side, Snapshot, Winner};

/// Pause before the computer replies, so its move can be followed.
const COMPUTER_DELAY: Duration = Duration::from_secs(1);

fn main() {
    env_logger::init();

    println!("Make 10 CLI example (type 'q' to quit, 'n' for a new game)");
    println!("Match a hand card with a pool card that sums to 10, or a 10/J/Q/K of the same rank.");
    println!("Red cards score their value.");

    let game = match Game::from_entropy(GameOptions::default()) {
        Ok(game) => game,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    loop {
        let snapshot = game.snapshot();
        print_table(&snapshot);

        match snapshot.state {
            GameState::GameOver => {
                print_result(&snapshot);
                match prompt_line("Play again? (y/n): ").as_str() {
                    "y" | "yes" => {
                        game.restart();
                        continue;
                    }
                    _ => break,
                }
            }
            GameState::PlayerTurn => {
                if snapshot.player_playable.is_empty() {
                    println!("You have no playable card and pass.");
                    if let Err(err) = game.player_forfeit() {
                        println!("Action error: {err}");
                    }
                    continue;
                }

                let input = prompt_line(&format!(
                    "Pick a card (1-{}): ",
                    snapshot.player_hand.len()
                ));
                match input.as_str() {
                    "q" | "quit" => break,
                    "n" | "new" => {
                        game.restart();
                        continue;
                    }
                    _ => {}
                }

                let Some(card) = input
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| index.checked_sub(1))
                    .and_then(|index| snapshot.player_hand.get(index).copied())
                else {
                    println!("Please enter a card number.");
                    continue;
                };

                match game.player_attempt_match(card) {
                    Ok(outcome) => println!(
                        "You matched {} with {} (+{}).",
                        outcome.played, outcome.matched, outcome.points
                    ),
                    Err(err) => println!("{card}: {err}. Choose another card."),
                }
            }
            GameState::ComputerTurn => {
                thread::sleep(COMPUTER_DELAY);
                match game.computer_take_turn() {
                    Ok(ComputerMove::Matched(outcome)) => println!(
                        "Computer matched {} with {} (+{}).",
                        outcome.played, outcome.matched, outcome.points
                    ),
                    Ok(ComputerMove::Forfeited) => println!("Computer has no match and passes."),
                    Err(err) => println!("Computer error: {err}"),
                }
            }
        }
    }

    println!("Goodbye.");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(snapshot: &Snapshot) {
    println!("\nDeck: {} cards remaining", snapshot.cards_remaining);
    println!(
        "Score: you {} | computer {}",
        snapshot.player_score, snapshot.computer_score
    );
    println!("\nComputer: {}", format_cards(&snapshot.computer_hand, &[]));
    println!("Pool:     {}", format_cards(&snapshot.pool, &[]));

    let turn = match snapshot.turn() {
        Some(Side::Player) => " (your turn)",
        Some(Side::Computer) => " (waiting)",
        None => "",
    };
    println!(
        "You:      {}{turn}",
        format_cards(&snapshot.player_hand, &snapshot.player_playable)
    );

    let numbers = (1..=snapshot.player_hand.len())
        .map(|index| format!("{index:<4}"))
        .collect::<String>();
    println!("          {numbers}");
    println!();
}

fn print_result(snapshot: &Snapshot) {
    let verdict = match snapshot.winner() {
        Some(Winner::Player) => "You win",
        Some(Winner::Computer) => "Computer wins",
        Some(Winner::Draw) | None => "Draw",
    };
    println!(
        "Game over - {verdict}! You {} | computer {}",
        snapshot.player_score, snapshot.computer_score
    );
}

fn format_cards(cards: &[Card], playable: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards
        .iter()
        .map(|card| format_card(card, playable.contains(card)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card, playable: bool) -> String {
    let code = if card.is_red() { "31" } else { "34" };
    let text = format!("{:<3}", card.to_string());
    if playable {
        colorize(&text, &format!("1;{code}"))
    } else {
        colorize(&text, code)
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
