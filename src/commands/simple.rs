//! Simple interactive CLI mode
//!
//! Text-based code-breaking assistant: suggests guesses, reads feedback from
//! the code-maker and narrows the candidates.

use crate::core::{Code, Feedback};
use crate::output::display::print_suggestions;
use crate::output::formatters::response_to_symbols;
use crate::solver::{GameSession, GameStatus, Solver, SolverError};
use colored::Colorize;
use std::io::{self, Write};

/// What the player typed at the feedback prompt
#[derive(Debug, PartialEq)]
enum Input {
    Quit,
    NewGame,
    Undo,
    /// Feedback for the suggested guess
    Feedback(String),
    /// Feedback for a guess of the player's own choosing
    Played(Code, String),
}

fn parse_input(line: &str) -> Result<Input, String> {
    let lower = line.trim().to_lowercase();
    match lower.as_str() {
        "quit" | "q" | "exit" => return Ok(Input::Quit),
        "new" | "n" => return Ok(Input::NewGame),
        "undo" | "u" => return Ok(Input::Undo),
        "win" | "correct" | "yes" | "solved" => {
            return Ok(Input::Feedback(Feedback::PERFECT.to_string()));
        }
        _ => {}
    }

    let mut parts = lower.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(feedback), None, None) => Ok(Input::Feedback(feedback.to_uppercase())),
        (Some(guess), Some(feedback), None) => {
            let guess: Code = guess
                .parse()
                .map_err(|e| format!("Invalid guess '{guess}': {e}"))?;
            Ok(Input::Played(guess, feedback.to_uppercase()))
        }
        _ => Err("Enter FEEDBACK or GUESS FEEDBACK".to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(solver: &Solver, max_suggestions: usize) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Mastermind Solver - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses for a secret of four digits 0-9.");
    println!(
        "Feedback rule: {}",
        solver.config().rule.name().bright_cyan()
    );
    println!("After each guess, enter the feedback:\n");
    println!("  - Per slot: C/G/● correct, P/Y/○ wrong place, W/-/· absent (e.g. CPWW)");
    println!("  - Or counts: correct/partial (e.g. 1/1)");
    println!("  - Prefix a guess to record your own instead (e.g. 5678 PWWW)");
    println!("  - Or type 'win' if the guess was right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let mut session = solver.new_session();

    loop {
        if session.status() == GameStatus::Won {
            print_victory(&session);
            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session = solver.new_session();
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let turn = session.move_count() + 1;
        let suggestions = solver.recommend(&session, max_suggestions);
        let Some(suggested) = suggestions.first().map(|s| s.guess) else {
            // Unreachable through submit, which rejects contradictions
            println!("\n❌ No candidates remain! Type 'undo' or 'new'.\n");
            session = match parse_input(&get_user_input("Command")?) {
                Ok(Input::Undo) => session.undo().unwrap_or_else(|| solver.new_session()),
                _ => solver.new_session(),
            };
            continue;
        };

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {turn}: {} candidates remaining",
            session.candidates().len()
        );
        println!("────────────────────────────────────────────────────────────");
        print_suggestions(&session, &suggestions);

        if session.candidates().len() <= 10 {
            println!("Remaining candidates:");
            for candidate in session.candidates() {
                println!("  • {candidate}");
            }
            println!();
        }

        let input = get_user_input(&format!(
            "Feedback for {suggested} (or GUESS FEEDBACK / command)"
        ))?;
        let (guess, feedback) = match parse_input(&input) {
            Ok(Input::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Ok(Input::NewGame) => {
                session = solver.new_session();
                println!("\n🔄 New game started!\n");
                continue;
            }
            Ok(Input::Undo) => {
                if let Some(previous) = session.undo() {
                    session = previous;
                    println!("✓ Undone! Back to turn {}\n", session.move_count() + 1);
                } else {
                    println!("Nothing to undo!\n");
                }
                continue;
            }
            Ok(Input::Feedback(feedback)) => (suggested, feedback),
            Ok(Input::Played(guess, feedback)) => (guess, feedback),
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        match solver.submit_str(&session, guess, &feedback) {
            Ok(next) => session = next,
            Err(e @ SolverError::InvalidFeedback(_)) => {
                println!("❌ {e}. Use C/P/W per slot, or counts like 2/1\n");
            }
            Err(e @ SolverError::InconsistentHistory { .. }) => {
                println!("\n⚠️  {e}");
                println!(
                    "That feedback was not recorded; re-enter it or 'undo' an earlier turn.\n"
                );
            }
            Err(e @ (SolverError::SessionExhausted { .. } | SolverError::GameFinished)) => {
                println!("\n{e}\n");
                session = solver.new_session();
                println!("🔄 New game started!\n");
            }
        }
    }
}

fn print_victory(session: &GameSession) {
    let turns = session.move_count();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "        🎉 🎊 ✨  C O D E   B R O K E N !  ✨ 🎊 🎉        "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, (guess, response)) in session.history().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            guess.to_string().bright_white().bold(),
            response_to_symbols(response)
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
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
