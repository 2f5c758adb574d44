//! Line-based play loop: one input line is one player message.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_hangman::{RandomHints, SecretWord, SessionState};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument, warn};

use crate::action::PlayerAction;
use crate::config::TableConfig;
use crate::error::TableError;
use crate::render::Renderer;
use crate::table::TableManager;
use crate::words::WordEntry;

/// Table id used for the terminal game.
pub const TERMINAL_TABLE: &str = "terminal";

/// Picks the secret word: the override if given, else a random configured word.
#[instrument(skip(config, word))]
pub fn choose_secret(
    config: &TableConfig,
    seed: Option<u64>,
    word: Option<String>,
) -> Result<SecretWord, TableError> {
    let entry = match word {
        Some(word) => WordEntry::new(word),
        None => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let list = config.word_list();
            list.pick(&mut rng)
                .cloned()
                .unwrap_or_else(|| WordEntry::new("hangman".to_string()))
        }
    };
    Ok(entry.to_secret()?)
}

/// Hint policy for the configured seed.
pub fn hint_policy(seed: Option<u64>) -> RandomHints {
    match seed {
        Some(seed) => RandomHints::seeded(seed),
        None => RandomHints::new(),
    }
}

/// Plays the game at `table` until it ends or input runs out.
///
/// Blank lines are ignored. End of input forfeits a game still in progress.
/// Returns the final lifecycle state.
#[instrument(skip_all, fields(table = %table))]
pub async fn run_game<I, W, R>(
    tables: &TableManager,
    table: &str,
    input: I,
    messages: &mut W,
    renderer: &mut R,
) -> anyhow::Result<SessionState>
where
    I: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    R: Renderer + ?Sized,
{
    if !tables.redraw(table, renderer).await? {
        warn!("Initial redraw failed");
    }

    let mut lines = input.lines();
    let mut last_state = SessionState::InProgress;
    while let Some(line) = lines.next_line().await? {
        let Some(action) = PlayerAction::parse(&line) else {
            continue;
        };
        debug!(%action, "Player action");

        let report = tables.dispatch(table, action, renderer).await?;
        messages
            .write_all(format!("{}\n", report.message()).as_bytes())
            .await?;
        messages.flush().await?;
        last_state = *report.state();

        if last_state.is_terminal() {
            if tables.is_open(table) && !tables.redraw(table, renderer).await? {
                warn!("Final redraw failed twice; closing table");
                tables.close(table);
            }
            info!(state = %last_state, "Game finished");
            return Ok(last_state);
        }
    }

    if tables.is_open(table) {
        info!("Input closed; forfeiting");
        let report = tables.dispatch(table, PlayerAction::Stop, renderer).await?;
        last_state = *report.state();
        tables.close(table);
    }
    Ok(last_state)
}
