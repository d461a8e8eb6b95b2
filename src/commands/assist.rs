//! Interactive assistant mode
//!
//! Text-based loop for playing against an external game: the assistant
//! suggests a guess, the operator reports the game's feedback symbols, and
//! the candidate set shrinks until the word is pinned down.

use crate::core::{Feedback, Lexicon, Word};
use crate::output::formatters::code_to_emoji;
use crate::solver::{Selection, Session, SessionConfig, SessionState};
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive assistant
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or the lexicon is
/// empty.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_assist(
    lexicon: &Lexicon,
    config: SessionConfig,
    seed: Option<u64>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Assistant - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses and narrow the word down from your feedback.");
    println!("After each guess, enter the feedback pattern:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let new_selection = || seed.map_or_else(Selection::sampled, Selection::seeded);
    let mut session = Session::new(lexicon, config, new_selection()).map_err(|e| e.to_string())?;
    // Played rounds, kept for undo-by-replay
    let mut history: Vec<(Word, String)> = Vec::new();

    loop {
        match session.state() {
            SessionState::Solved => {
                let solution = session
                    .solution()
                    .ok_or("Solved session without a solution")?;

                println!("\n{}", "═".repeat(70).bright_cyan());
                println!(
                    "{}",
                    format!(
                        "  The word is {} (pinned down in {} rounds)  ",
                        solution.text().to_uppercase(),
                        session.rounds_played()
                    )
                    .bright_green()
                    .bold()
                );
                println!("{}", "═".repeat(70).bright_cyan());

                if !history.is_empty() {
                    println!("\n  Guess history:");
                    for (i, (word, code)) in history.iter().enumerate() {
                        println!(
                            "    {}. {} {}",
                            (i + 1).to_string().bright_black(),
                            word.text().to_uppercase().bright_white().bold(),
                            code_to_emoji(code)
                        );
                    }
                }
                println!();

                match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" => {
                        history.clear();
                        session = Session::new(lexicon, config, new_selection())
                            .map_err(|e| e.to_string())?;
                        println!("\n🔄 New game started!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
                continue;
            }
            SessionState::Contradiction => {
                println!("\n❌ No candidates remain! Your feedback may be incorrect.");
                println!("Type 'undo' to go back, or 'new' to start over.\n");

                match get_user_input("Command")?.to_lowercase().as_str() {
                    "undo" | "u" => {
                        history.pop();
                        session = replay(lexicon, config, new_selection(), &history)?;
                        println!("✓ Undone! Back to round {}\n", history.len() + 1);
                    }
                    "new" | "n" => {
                        history.clear();
                        session = Session::new(lexicon, config, new_selection())
                            .map_err(|e| e.to_string())?;
                        println!("\n🔄 New game started!\n");
                    }
                    "quit" | "q" | "exit" => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    _ => {}
                }
                continue;
            }
            SessionState::Active => {}
        }

        let candidates_count = session.candidates().len();
        let guess = session.suggest().ok_or("No valid guesses available")?;

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Round {}: {candidates_count} candidates remaining",
            session.rounds_played() + 1
        );
        println!("────────────────────────────────────────────────────────────");

        println!("\n💡 Suggested guess: {}", guess.text().to_uppercase().bold());

        if candidates_count <= 10 {
            println!("\nRemaining candidates:");
            for candidate in session.candidates().iter().take(10) {
                println!("  • {}", candidate.text().to_uppercase());
            }
        }
        println!();

        loop {
            let input = get_user_input("Enter feedback (G/Y/-, 'win', or command)")?;

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    history.clear();
                    session = Session::new(lexicon, config, new_selection())
                        .map_err(|e| e.to_string())?;
                    println!("\n🔄 New game started!\n");
                    break;
                }
                "undo" | "u" => {
                    if history.pop().is_some() {
                        session = replay(lexicon, config, new_selection(), &history)?;
                        println!("✓ Undone! Back to round {}\n", history.len() + 1);
                    } else {
                        println!("Nothing to undo!\n");
                    }
                    break;
                }
                "win" | "correct" | "yes" | "solved" => {
                    // Shortcut for all greens
                    let feedback = Feedback::parse("GGGGG", &guess)
                        .map_err(|e| e.to_string())?;
                    history.push((guess.clone(), feedback.code().to_string()));
                    if let Err(contradiction) = session.apply(&guess, &feedback) {
                        println!("\n{}", contradiction.to_string().red());
                    }
                    break;
                }
                _ => match Feedback::parse(&input, &guess) {
                    Ok(feedback) => {
                        history.push((guess.clone(), feedback.code().to_string()));
                        if let Err(contradiction) = session.apply(&guess, &feedback) {
                            println!("\n{}", contradiction.to_string().red());
                        }
                        break;
                    }
                    Err(parse_error) => {
                        println!("❌ {parse_error}\n");
                    }
                },
            }
        }
    }
}

/// Rebuild a session by replaying recorded rounds
///
/// The history being replayed was consistent when recorded, so replay cannot
/// contradict; a contradiction here means the history itself was corrupted.
fn replay(
    lexicon: &Lexicon,
    config: SessionConfig,
    selection: Selection,
    history: &[(Word, String)],
) -> Result<Session, String> {
    let mut session = Session::new(lexicon, config, selection).map_err(|e| e.to_string())?;
    for (guess, code) in history {
        let feedback = Feedback::parse(code, guess).map_err(|e| e.to_string())?;
        session.apply(guess, &feedback).map_err(|e| e.to_string())?;
    }
    Ok(session)
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
