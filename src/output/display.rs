//! Display functions for command results

use super::formatters::{code_to_emoji, create_progress_bar};
use crate::commands::{AnalysisResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let round = i + 1;
        println!(
            "\nRound {}: {} {}",
            round,
            step.word.to_uppercase(),
            code_to_emoji(&step.code)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("✅ Solved in {} rounds!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} rounds", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a frequency analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LETTER FREQUENCY ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Across {} words:", result.lexicon_size);

    let max_probability = result
        .letter_probabilities
        .first()
        .map_or(1.0, |&(_, p)| p);
    for &(letter, probability) in &result.letter_probabilities {
        let bar = create_progress_bar(probability, max_probability, 30);
        println!(
            "   {}: [{}] {}",
            letter.to_ascii_uppercase(),
            bar.green(),
            format!("{:.4}", probability).bright_yellow()
        );
    }

    println!("\n🏆 {}", "Top openers:".bright_cyan().bold());
    for (i, (word, score)) in result.top_openers.iter().enumerate().take(10) {
        println!(
            "   {:2}. {} ({score:.3e})",
            i + 1,
            word.to_uppercase().bright_white().bold()
        );
    }

    if let Some(analysis) = &result.word {
        println!("\n{}", "─".repeat(60).cyan());
        println!(
            " {} {} ",
            "WORD:".bright_cyan().bold(),
            analysis.word.to_uppercase().bright_yellow().bold()
        );
        println!("   Score: {:.3e}", analysis.score);
        println!(
            "   Rank:  {} of {}",
            analysis.rank.to_string().bright_yellow(),
            result.lexicon_size
        );
    }
}
