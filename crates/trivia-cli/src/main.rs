//! trivia CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use trivia_core::{ErrorResponse, TriviaError};

mod commands;

#[derive(Parser)]
#[command(name = "trivia", version, about = "Browse, search and play trivia questions")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command.
#[derive(Args, Clone, Debug)]
pub struct GlobalArgs {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Question bank file (overrides config)
    #[arg(long, global = true)]
    bank: Option<PathBuf>,

    /// Print JSON API responses instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List all categories
    Categories,

    /// List questions, one page at a time
    List {
        /// Page number, starting at 1
        #[arg(long)]
        page: Option<usize>,
    },

    /// Search question text (case-insensitive)
    Search {
        /// Text to look for
        term: String,
    },

    /// List the questions of one category
    Category {
        /// Category id
        id: u64,
    },

    /// Add a question
    Add {
        /// Question text
        #[arg(long)]
        question: String,

        /// Answer text
        #[arg(long)]
        answer: String,

        /// Category id
        #[arg(long)]
        category: u64,

        /// Difficulty (1 and up)
        #[arg(long)]
        difficulty: u32,
    },

    /// Delete a question
    Delete {
        /// Question id
        id: u64,
    },

    /// Draw one unseen quiz question
    Quiz {
        /// Category id (0 or omitted for all categories)
        #[arg(long, conflicts_with = "request")]
        category: Option<u64>,

        /// Ids already served, comma-separated (e.g. "1,4,9")
        #[arg(long, conflicts_with = "request")]
        previous: Option<String>,

        /// Raw quiz request JSON, e.g. '{"previous_questions":[1],"quiz_category":{"id":2}}'
        #[arg(long)]
        request: Option<String>,
    },

    /// Play an interactive quiz on the terminal
    Play {
        /// Category id (0 or omitted for all categories)
        #[arg(long)]
        category: Option<u64>,

        /// Stop after this many questions
        #[arg(long)]
        rounds: Option<usize>,
    },

    /// Validate question bank TOML files
    Validate {
        /// Path to bank file or directory (defaults to the configured bank)
        path: Option<PathBuf>,
    },

    /// Create starter config and example question bank
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("trivia=info".parse().unwrap())
                .add_directive("trivia_core=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let global = cli.global;

    let result = match cli.command {
        Commands::Categories => commands::browse::categories(&global).await,
        Commands::List { page } => commands::browse::list(&global, page).await,
        Commands::Search { term } => commands::browse::search(&global, term).await,
        Commands::Category { id } => commands::browse::category(&global, id).await,
        Commands::Add {
            question,
            answer,
            category,
            difficulty,
        } => commands::edit::add(&global, question, answer, category, difficulty).await,
        Commands::Delete { id } => commands::edit::delete(&global, id).await,
        Commands::Quiz {
            category,
            previous,
            request,
        } => commands::quiz::execute(&global, category, previous, request).await,
        Commands::Play { category, rounds } => {
            commands::play::execute(&global, category, rounds).await
        }
        Commands::Validate { path } => commands::validate::execute(&global, path),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        match e.downcast_ref::<TriviaError>() {
            Some(err) if global.json => {
                let body = ErrorResponse::from(err);
                match serde_json::to_string_pretty(&body) {
                    Ok(json) => println!("{json}"),
                    Err(_) => eprintln!("Error: {e:#}"),
                }
            }
            _ => eprintln!("Error: {e:#}"),
        }
        process::exit(1);
    }
}
