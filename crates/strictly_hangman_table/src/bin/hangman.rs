//! Strictly Hangman - terminal front end
//!
//! One line of stdin is one player message. Frames go to stdout, logs to
//! stderr.

use anyhow::Result;
use clap::Parser;
use strictly_hangman_table::cli::{Cli, Command, Format};
use strictly_hangman_table::{
    JsonRenderer, Renderer, TERMINAL_TABLE, TableConfig, TableManager, TextRenderer,
    choose_secret, hint_policy, run_game,
};
use tokio::io::{AsyncWriteExt, BufReader};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,strictly_hangman=info,strictly_hangman_table=info";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            format,
            seed,
            word,
        } => run_play(load_config(config)?, format, seed, word).await,
        Command::Words { config } => run_words(load_config(config)?).await,
    }
}

fn load_config(path: Option<std::path::PathBuf>) -> Result<TableConfig> {
    Ok(match path {
        Some(path) => TableConfig::from_file(path)?,
        None => TableConfig::default(),
    })
}

/// Play one game on stdin/stdout
#[instrument(skip(config, word))]
async fn run_play(
    config: TableConfig,
    format: Format,
    seed: Option<u64>,
    word: Option<String>,
) -> Result<()> {
    let seed = seed.or(*config.hint_seed());
    let secret = choose_secret(&config, seed, word)?;

    let tables = TableManager::from_config(&config);
    tables.open(
        TERMINAL_TABLE,
        secret,
        config.effective_max_fails(),
        hint_policy(seed),
    )?;
    info!("Game started; type a letter, a word, /hint or /stop");

    let mut renderer: Box<dyn Renderer> = match format {
        Format::Text => Box::new(TextRenderer::stdout()),
        Format::Json => Box::new(JsonRenderer::stdout()),
    };
    let input = BufReader::new(tokio::io::stdin());
    let mut messages = tokio::io::stdout();

    let state = run_game(
        &tables,
        TERMINAL_TABLE,
        input,
        &mut messages,
        renderer.as_mut(),
    )
    .await?;
    info!(%state, "Game over");
    Ok(())
}

/// Print the configured word list
async fn run_words(config: TableConfig) -> Result<()> {
    let mut out = tokio::io::stdout();
    for entry in config.word_list().entries() {
        let line = match entry.definition() {
            Some(definition) => format!("{}\t{}\n", entry.word(), definition),
            None => format!("{}\n", entry.word()),
        };
        out.write_all(line.as_bytes()).await?;
    }
    out.flush().await?;
    Ok(())
}
