//! Command-line interface for the hangman binary.

use clap::{Parser, Subcommand, ValueEnum};

/// Strictly Hangman - word guessing with a contract-checked game engine
#[derive(Parser, Debug)]
#[command(name = "hangman")]
#[command(about = "Play hangman in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Frame format for redraws
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Gallows drawing and counters
    #[default]
    Text,
    /// One JSON document per redraw
    Json,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game, reading guesses from stdin
    Play {
        /// Path to table config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Redraw format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Seed for word choice and hints (overrides the config)
        #[arg(long)]
        seed: Option<u64>,

        /// Secret word to use instead of a random one
        #[arg(long)]
        word: Option<String>,
    },

    /// List the configured words
    Words {
        /// Path to table config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },
}
