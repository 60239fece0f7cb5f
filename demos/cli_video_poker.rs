//! CLI video poker example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use vpoker::{Card, Game, GameOptions, HAND_SIZE, Hand, MAX_STAKE, Suit, evaluator};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Jacks or Better CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        println!("\nBalance: {:.2}", game.balance());

        let Some(stake) = prompt_stake(&format!(
            "Stake (up to {MAX_STAKE}, max bet pays the royal jackpot, 0 to quit) [{}]: ",
            game.stake()
        )) else {
            break;
        };
        if stake == Some(0.0) {
            println!("Goodbye.");
            break;
        }
        if let Some(stake) = stake {
            if let Err(err) = game.set_stake(stake) {
                println!("Stake error: {err}");
                continue;
            }
        }

        if !game.has_sufficient_funds() {
            println!("Game over - no funds remaining.");
            break;
        }

        game.reset_deck();
        game.shuffle_deck();
        game.update_balance();
        game.deal();

        print_hand(game.hand(), &[]);
        let held = prompt_line("Positions to hold (1-5, e.g. '1 3 4'): ");
        if held == "q" || held == "quit" {
            return;
        }

        game.draw(&replace_indexes(&held));
        let result = game.calculate_rank();
        let winners = evaluator::winning_positions(&result.hand.cards());

        print_hand(&result.hand, &winners);
        if result.is_win() {
            println!("{} - Won {:.2}", result.rank, result.payout);
        } else {
            println!("{} - No win", result.rank);
        }

        if !game.has_sufficient_funds() {
            println!("Game over - no funds remaining.");
            break;
        }
    }
}

/// Turns the player's held positions into the indexes to replace.
fn replace_indexes(held: &str) -> Vec<usize> {
    let held: Vec<usize> = held
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter_map(|part| part.parse::<usize>().ok())
        .filter_map(|position| position.checked_sub(1))
        .collect();

    (0..HAND_SIZE).filter(|i| !held.contains(i)).collect()
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

/// Returns `None` to quit, `Some(None)` to keep the current stake.
fn prompt_stake(prompt: &str) -> Option<Option<f64>> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        if input.is_empty() {
            return Some(None);
        }
        match input.parse::<f64>() {
            Ok(value) => return Some(Some(value)),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_hand(hand: &Hand, winners: &[usize]) {
    let cards: Vec<String> = hand
        .slots()
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let text = slot.as_ref().map_or_else(|| "--".to_string(), format_card);
            if winners.contains(&i) {
                colorize(&text, "1")
            } else {
                text
            }
        })
        .collect();

    println!("\n  1   2   3   4   5");
    println!("  {}", cards.join("  "));
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    let short: String = card.short().iter().collect();
    colorize(&short, color_code)
}
