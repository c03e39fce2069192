//! mathdrill CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "mathdrill", version, about = "Interactive math practice trainer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a quiz session
    Run {
        /// Quiz to run; omit to see what is available
        #[arg(long)]
        quiz: Option<String>,

        /// Number of questions to draw
        #[arg(long, default_value = "5")]
        questions: usize,

        /// Path to the question bank document
        #[arg(long, default_value = "quizzes/quiz_data.json")]
        bank: PathBuf,

        /// Directory of checker descriptor files
        #[arg(long, default_value = "checkers")]
        checkers: PathBuf,

        /// Path to the results store
        #[arg(long, default_value = "data/results.csv")]
        results: PathBuf,
    },

    /// Add a question to the bank
    Add {
        /// Quiz to add the question to (created if absent)
        #[arg(long)]
        quiz: String,

        /// Question text
        #[arg(long)]
        question: String,

        /// Correct answer (integer, decimal, or text such as "3/4")
        #[arg(long)]
        answer: String,

        /// Path to the question bank document
        #[arg(long, default_value = "quizzes/quiz_data.json")]
        bank: PathBuf,
    },

    /// List quizzes, question counts, and bound checkers
    List {
        /// Path to the question bank document
        #[arg(long, default_value = "quizzes/quiz_data.json")]
        bank: PathBuf,

        /// Directory of checker descriptor files
        #[arg(long, default_value = "checkers")]
        checkers: PathBuf,
    },

    /// Show progress analysis
    Stats {
        /// Restrict the analysis to one quiz
        #[arg(long)]
        quiz: Option<String>,

        /// Path to the results store
        #[arg(long, default_value = "data/results.csv")]
        results: PathBuf,
    },

    /// Render the progress chart as SVG
    Chart {
        /// Restrict the chart to one quiz
        #[arg(long)]
        quiz: Option<String>,

        /// Output file
        #[arg(long, default_value = "progress.svg")]
        output: PathBuf,

        /// Path to the results store
        #[arg(long, default_value = "data/results.csv")]
        results: PathBuf,
    },

    /// Create a starter question bank and checker descriptors
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mathdrill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            quiz,
            questions,
            bank,
            checkers,
            results,
        } => commands::run::execute(quiz, questions, bank, checkers, results),
        Commands::Add {
            quiz,
            question,
            answer,
            bank,
        } => commands::add::execute(quiz, question, answer, bank),
        Commands::List { bank, checkers } => commands::list::execute(bank, checkers),
        Commands::Stats { quiz, results } => commands::stats::execute(quiz, results),
        Commands::Chart {
            quiz,
            output,
            results,
        } => commands::chart::execute(quiz, output, results),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
