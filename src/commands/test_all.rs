//! Whole-lexicon evaluation
//!
//! Self-plays a fresh session for every word in the lexicon and reports how
//! many rounds the naive candidate-sampling policy takes to converge.

use crate::core::{Feedback, Lexicon, Word};
use crate::solver::{Selection, Session, SessionConfig, SessionState};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from self-playing a single target
#[derive(Debug, Clone)]
struct TargetResult {
    word: String,
    rounds: usize,
    solved: bool,
}

/// Statistics from testing every word
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub round_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_rounds: f64,
    pub max_rounds: usize,
    pub min_rounds: usize,
    pub worst_words: Vec<(String, usize)>,
}

/// Self-play every lexicon word (or a limited prefix) in parallel
///
/// With a seed, each target gets its own derived seed so runs are
/// reproducible; without one, selection is deterministic.
pub fn run_test_all(
    lexicon: &Lexicon,
    session_config: SessionConfig,
    limit: Option<usize>,
    seed: Option<u64>,
) -> TestAllStatistics {
    let targets: Vec<&Word> = lexicon
        .words()
        .iter()
        .take(limit.unwrap_or_else(|| lexicon.len()))
        .collect();

    println!("Testing {} words...", targets.len());

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let results: Vec<TargetResult> = targets
        .par_iter()
        .enumerate()
        .map(|(index, &target)| {
            let selection = match seed {
                Some(base) => Selection::seeded(base.wrapping_add(index as u64)),
                None => Selection::deterministic(),
            };
            let result = play_target(lexicon, session_config, selection, target);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();

    let solved = results.iter().filter(|r| r.solved).count();
    let failed = results.len() - solved;

    let mut round_distribution: HashMap<usize, usize> = HashMap::new();
    for result in results.iter().filter(|r| r.solved) {
        *round_distribution.entry(result.rounds).or_insert(0) += 1;
    }

    let total_rounds: usize = results.iter().filter(|r| r.solved).map(|r| r.rounds).sum();
    let average_rounds = if solved > 0 {
        total_rounds as f64 / solved as f64
    } else {
        0.0
    };
    let max_rounds = results.iter().map(|r| r.rounds).max().unwrap_or(0);
    let min_rounds = results
        .iter()
        .filter(|r| r.solved)
        .map(|r| r.rounds)
        .min()
        .unwrap_or(0);

    let mut worst_words: Vec<(String, usize)> = results
        .iter()
        .map(|r| (r.word.clone(), r.rounds))
        .collect();
    worst_words.sort_by_key(|&(_, rounds)| std::cmp::Reverse(rounds));
    worst_words.truncate(10);

    TestAllStatistics {
        total_words: results.len(),
        solved,
        failed,
        round_distribution,
        total_time,
        average_rounds,
        max_rounds,
        min_rounds,
        worst_words,
    }
}

fn play_target(
    lexicon: &Lexicon,
    session_config: SessionConfig,
    selection: Selection,
    target: &Word,
) -> TargetResult {
    let Ok(mut session) = Session::new(lexicon, session_config, selection) else {
        return TargetResult {
            word: target.text().to_string(),
            rounds: 0,
            solved: false,
        };
    };

    while session.state() == SessionState::Active {
        let Some(guess) = session.suggest() else { break };
        let feedback = Feedback::assess(&guess, target);
        if session.apply(&guess, &feedback).is_err() {
            break;
        }
    }

    TargetResult {
        word: target.text().to_string(),
        rounds: session.rounds_played(),
        solved: session.solution() == Some(target),
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n{}", "Overall".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_words as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_words as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average rounds:      {}",
        format!("{:.3}", stats.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Best / worst:        {} / {}",
        stats.min_rounds, stats.max_rounds
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n{}", "Round Distribution".bright_cyan().bold());
    let max_count = *stats.round_distribution.values().max().unwrap_or(&1);
    let most_rounds = stats
        .round_distribution
        .keys()
        .copied()
        .max()
        .unwrap_or(0);
    for rounds in 1..=most_rounds {
        let count = stats.round_distribution.get(&rounds).unwrap_or(&0);
        if stats.solved > 0 {
            let percentage = *count as f64 / stats.solved as f64 * 100.0;
            let bar_len = if max_count > 0 {
                (*count * 40 / max_count).max(usize::from(*count > 0))
            } else {
                0
            };
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("  {rounds:2} rounds: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    if !stats.worst_words.is_empty() {
        println!("\n{}", "Hardest Words".yellow().bold());
        for (word, rounds) in stats.worst_words.iter().take(5) {
            println!("  {} ({} rounds)", word.to_uppercase().yellow(), rounds);
        }
    }
}
