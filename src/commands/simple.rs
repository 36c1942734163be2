//! Simple interactive CLI mode
//!
//! Line-oriented game without the TUI.

use crate::core::MAX_TURNS;
use crate::game::{Dictionary, Game, GameStatus, Statistics};
use crate::output::display::{print_board, print_keyboard, print_statistics};
use crate::solver::DEFAULT_HINT_COUNT;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive game
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<D: Dictionary>(mut game: Game<'_, D>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Hardword - Simple Mode                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word in {MAX_TURNS} tries.");
    println!("Commands: 'hint', 'hard' (toggle hard mode), 'new', 'quit'\n");

    let mut stats = Statistics::default();

    loop {
        let prompt = format!(
            "Guess {}/{MAX_TURNS}{}",
            game.turn() + 1,
            if game.hard_mode() { " [hard]" } else { "" }
        );
        let input = get_user_input(&prompt)?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                print_statistics(&stats);
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.reset(None);
                println!("\n🔄 New game started!\n");
            }
            "hard" => {
                if game.turn() > 0 {
                    println!("{}", "Hard mode can only change before the first guess.".red());
                } else {
                    game.set_hard_mode(!game.hard_mode());
                    println!("Hard mode {}", if game.hard_mode() { "on" } else { "off" });
                }
            }
            "hint" | "h" => {
                let hints = game.suggest_hints(DEFAULT_HINT_COUNT);
                if hints.is_empty() {
                    println!("{}", "No suggestions (constraints too tight).".yellow());
                } else {
                    let list: Vec<String> = hints.iter().map(|w| w.text().to_uppercase()).collect();
                    println!(
                        "💡 {} ({} candidates remain)",
                        list.join(", ").bright_cyan(),
                        game.candidates_remaining()
                    );
                }
            }
            guess => match game.submit_guess(guess) {
                Ok(_) => {
                    print_board(game.history());
                    print_keyboard(game.keyboard());
                    if game.status().is_over() {
                        finish_game(&mut game, &mut stats)?;
                        if game.status().is_over() {
                            print_statistics(&stats);
                            return Ok(());
                        }
                    }
                }
                Err(e) => println!("{}", format!("❌ {e}").red()),
            },
        }
    }
}

/// Announce the result, record it, and offer another round
fn finish_game<D: Dictionary>(game: &mut Game<'_, D>, stats: &mut Statistics) -> Result<(), String> {
    stats.record_game(game.status(), game.turn());

    println!("\n{}", "═".repeat(60).bright_cyan());
    match game.status() {
        GameStatus::Won => println!(
            "{}",
            format!(
                "🎉 Solved in {} {}!",
                game.turn(),
                if game.turn() == 1 { "guess" } else { "guesses" }
            )
            .bright_green()
            .bold()
        ),
        _ => println!(
            "{}",
            format!("❌ Out of guesses. The word was {}", game.secret().text().to_uppercase())
                .red()
                .bold()
        ),
    }
    println!("{}", "═".repeat(60).bright_cyan());

    match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
        "yes" | "y" => {
            game.reset(None);
            println!("\n🔄 New game started!\n");
        }
        _ => println!("\n👋 Thanks for playing!\n"),
    }
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
