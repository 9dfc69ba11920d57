//! Glint CLI - terminal front end for the glint syntax highlighter.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod input;

/// Glint - best-effort syntax highlighting for code snippets
#[derive(Parser)]
#[command(name = "glint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Highlight a file and print it to the terminal
    Highlight {
        /// Input file
        file: PathBuf,
        /// Language id (default: guessed from the file extension)
        #[arg(short, long)]
        lang: Option<String>,
        /// Emit HTML spans instead of ANSI styling
        #[arg(long)]
        html: bool,
    },

    /// Tokenize a file and show the tokens
    Tokens {
        /// Input file
        file: PathBuf,
        /// Language id (default: guessed from the file extension)
        #[arg(short, long)]
        lang: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the registered languages
    Languages,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "warn" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    match cli.command {
        Commands::Highlight { file, lang, html } => {
            commands::highlight::run(&file, lang.as_deref(), html)
        }
        Commands::Tokens { file, lang, json } => {
            commands::tokens::run(&file, lang.as_deref(), json)
        }
        Commands::Languages => commands::languages::run(),
    }
}
