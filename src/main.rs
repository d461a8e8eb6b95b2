//! Wordle Assistant - CLI
//!
//! Letter-frequency Wordle helper with interactive, self-play, analysis, and
//! whole-list evaluation modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_assistant::{
    commands::{
        SolveConfig, analyze, print_test_all_statistics, run_assist, run_test_all, solve_word,
    },
    core::Lexicon,
    output::{print_analysis_result, print_solve_result},
    solver::{Selection, SessionConfig},
    wordlists::{WORDS, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_assistant",
    about = "Constraint-based Wordle assistant using letter-frequency scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file of five-letter words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible guess selection (omit for random)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Size of the ranked opening pool the first guess is drawn from
    #[arg(long, global = true, default_value = "50")]
    top_k: usize,

    /// Allow repeated-letter words in the opening pool
    #[arg(long, global = true)]
    all_words: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default) - suggests guesses, you report feedback
    Assist,

    /// Solve a specific target word by self-play
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,

        /// Stop after this many rounds (default: run until solved)
        #[arg(short, long)]
        max_rounds: Option<usize>,
    },

    /// Show the letter-frequency model and top openers
    Analyze {
        /// Word to score and rank (optional)
        word: Option<String>,
    },

    /// Solve every word in the lexicon and report statistics
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the lexicon based on the -w flag
fn load_lexicon(wordlist_mode: &str) -> Result<Lexicon> {
    match wordlist_mode {
        "embedded" => Ok(loader::lexicon_from_slice(WORDS)),
        path => {
            let lines = loader::read_lines(path)?;
            let lexicon = Lexicon::from_lines(lines.iter().map(String::as_str));
            anyhow::ensure!(
                !lexicon.is_empty(),
                "wordlist '{path}' contains no valid five-letter words"
            );
            Ok(lexicon)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lexicon = load_lexicon(&cli.wordlist)?;
    let session_config = SessionConfig {
        top_k: cli.top_k,
        distinct_opener: !cli.all_words,
    };

    // Default to Assist mode if no command given
    let command = cli.command.unwrap_or(Commands::Assist);

    match command {
        Commands::Assist => {
            run_assist(&lexicon, session_config, cli.seed).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve {
            word,
            verbose,
            max_rounds,
        } => {
            let config = SolveConfig {
                target: word,
                max_rounds,
            };
            let selection = cli.seed.map_or_else(Selection::sampled, Selection::seeded);
            let result = solve_word(&config, &lexicon, session_config, selection)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze(
                word.as_deref(),
                &lexicon,
                cli.top_k,
                !cli.all_words,
            )
            .map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::TestAll { limit } => {
            println!("\n{}", "═".repeat(70));
            println!(" Whole-Lexicon Solver Test ");
            println!("{}", "═".repeat(70));
            println!("\nTesting against {} words", lexicon.len());
            println!();

            let stats = run_test_all(&lexicon, session_config, limit, cli.seed);
            print_test_all_statistics(&stats);
            Ok(())
        }
    }
}
