//! lexdrill CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lexdrill", version, about = "Vocabulary practice from the terminal")]
struct Cli {
    /// Path to the library JSON file
    #[arg(long, global = true, default_value = "lexdrill-library.json")]
    library: PathBuf,

    /// Path to the practice history JSON file
    #[arg(long, global = true, default_value = "lexdrill-history.json")]
    history: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a term to the library
    Add {
        /// The term's surface form
        term: String,

        /// Definition text
        #[arg(long)]
        definition: String,

        /// Part of speech (e.g. "noun", "adjective")
        #[arg(long, default_value = "unknown")]
        part_of_speech: String,

        /// Example sentence (repeatable)
        #[arg(long = "example")]
        examples: Vec<String>,
    },

    /// Remove a term from the library
    Remove {
        term: String,
    },

    /// List library terms
    List {
        /// Filter by study status: learning, mastered
        #[arg(long)]
        status: Option<String>,
    },

    /// Change a term's study status
    Mark {
        term: String,

        /// New status: learning, mastered
        status: String,
    },

    /// Import a TOML word list into the library
    Import {
        /// Path to the .toml word list
        path: PathBuf,
    },

    /// Run an interactive practice session
    Practice {
        /// Only practice terms with this status: learning, mastered
        #[arg(long)]
        status: Option<String>,

        /// Practice a random sample of at most this many terms
        #[arg(long)]
        count: Option<usize>,

        /// Activity label for history: assessment, quiz, flashcards
        #[arg(long, default_value = "assessment")]
        activity: String,
    },

    /// Show practice history and accuracy
    Stats,

    /// Create a starter word list
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lexdrill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            term,
            definition,
            part_of_speech,
            examples,
        } => commands::add::execute(cli.library, term, definition, part_of_speech, examples),
        Commands::Remove { term } => commands::remove::execute(cli.library, term),
        Commands::List { status } => commands::list::execute(cli.library, status),
        Commands::Mark { term, status } => commands::mark::execute(cli.library, term, status),
        Commands::Import { path } => commands::import::execute(cli.library, path),
        Commands::Practice {
            status,
            count,
            activity,
        } => commands::practice::execute(cli.library, cli.history, status, count, activity),
        Commands::Stats => commands::stats::execute(cli.history),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
