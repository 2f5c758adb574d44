//! Table registry: one hangman session per table, driven through the
//! render boundary.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use derive_getters::Getters;
use serde::Serialize;
use strictly_hangman::{GameSession, HintPolicy, SecretWord, SessionSnapshot, SessionState};
use tracing::{debug, info, instrument, warn};

use crate::action::{ActionOutcome, PlayerAction};
use crate::config::TableConfig;
use crate::error::TableError;
use crate::render::Renderer;

/// Identifier of a table (a chat channel, a terminal, a test).
pub type TableId = String;

/// What happened to one dispatched action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, derive_new::new)]
pub struct ActionReport {
    /// The action as parsed.
    action: PlayerAction,
    /// What the session did with it.
    outcome: ActionOutcome,
    /// Lifecycle state after the action.
    state: SessionState,
    /// True if the redraw after the action completed.
    redrawn: bool,
    /// Explanation for the player.
    message: String,
}

/// A game at a table, tagged with the `open` call that started it.
#[derive(Debug)]
struct Seat {
    generation: u64,
    game: GameSession,
}

/// Manages all tables.
#[derive(Debug, Clone)]
pub struct TableManager {
    tables: Arc<Mutex<HashMap<TableId, Seat>>>,
    generations: Arc<AtomicU64>,
    render_timeout: Duration,
}

impl TableManager {
    /// Creates a table manager.
    #[instrument]
    pub fn new(render_timeout: Duration) -> Self {
        info!("Creating table manager");
        Self {
            tables: Arc::new(Mutex::new(HashMap::new())),
            generations: Arc::new(AtomicU64::new(0)),
            render_timeout,
        }
    }

    /// Creates a table manager with the configured render timeout.
    pub fn from_config(config: &TableConfig) -> Self {
        Self::new(config.render_timeout())
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<TableId, Seat>> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts a game at a table.
    ///
    /// A table whose previous game ended but was never closed is reused.
    #[instrument(skip(self, word, policy), fields(len = word.char_count()))]
    pub fn open(
        &self,
        table: impl Into<TableId> + std::fmt::Debug,
        word: SecretWord,
        max_fails: usize,
        policy: impl HintPolicy + 'static,
    ) -> Result<SessionSnapshot, TableError> {
        let table = table.into();
        let mut tables = self.lock();

        if let Some(existing) = tables.get(&table).map(|seat| &seat.game)
            && (existing.is_busy() || !existing.state().is_terminal())
        {
            warn!(table = %table, "Table already has a game in progress");
            return Err(TableError::Occupied(table));
        }

        let game = GameSession::start_with_policy(word, max_fails, policy)?;
        let snapshot = game.snapshot();
        let generation = self.generations.fetch_add(1, Ordering::Relaxed);
        tables.insert(table.clone(), Seat { generation, game });
        info!(table = %table, generation, "Opened table");
        Ok(snapshot)
    }

    /// Applies one player action and redraws the table.
    ///
    /// The session is locked only while the action is applied and while the
    /// redraw is acknowledged; the renderer itself runs unlocked with the
    /// session marked busy, so concurrent actions on the same table are
    /// reported as refused. A redraw that errors or exceeds the render
    /// timeout is acknowledged as failed and the session accepts actions
    /// again. Once a finished game has been drawn the table is closed.
    #[instrument(skip(self, renderer, action), fields(action = %action))]
    pub async fn dispatch<R>(
        &self,
        table: &str,
        action: PlayerAction,
        renderer: &mut R,
    ) -> Result<ActionReport, TableError>
    where
        R: Renderer + ?Sized,
    {
        let (outcome, state, snapshot, generation) = {
            let mut tables = self.lock();
            let Seat { generation, game } = tables
                .get_mut(table)
                .ok_or_else(|| TableError::NotFound(table.to_string()))?;

            let (outcome, state) = action.apply(game);
            if let Some(reason) = outcome.refusal() {
                debug!(%reason, "Action refused; no redraw");
                let message = outcome.message();
                return Ok(ActionReport::new(action, outcome, state, false, message));
            }

            game.begin_render()?;
            (outcome, state, game.snapshot(), *generation)
        };
        debug!(?outcome, %state, "Action applied");

        let redrawn = self
            .finish_render(table, generation, &snapshot, renderer)
            .await?;
        let message = outcome.message();
        Ok(ActionReport::new(action, outcome, state, redrawn, message))
    }

    /// Redraws a table without applying an action.
    ///
    /// Retries the final frame of a finished game whose last redraw failed.
    /// Returns false if the table is busy or the redraw failed.
    #[instrument(skip(self, renderer))]
    pub async fn redraw<R>(&self, table: &str, renderer: &mut R) -> Result<bool, TableError>
    where
        R: Renderer + ?Sized,
    {
        let (snapshot, generation) = {
            let mut tables = self.lock();
            let Seat { generation, game } = tables
                .get_mut(table)
                .ok_or_else(|| TableError::NotFound(table.to_string()))?;
            if game.is_busy() {
                debug!("Table busy; skipping redraw");
                return Ok(false);
            }
            game.begin_render()?;
            (game.snapshot(), *generation)
        };
        self.finish_render(table, generation, &snapshot, renderer).await
    }

    /// Runs the renderer unlocked, then acknowledges the result.
    ///
    /// The acknowledgement only goes to the game the redraw was started
    /// for. If the table was closed or reopened meanwhile it is dropped.
    async fn finish_render<R>(
        &self,
        table: &str,
        generation: u64,
        snapshot: &SessionSnapshot,
        renderer: &mut R,
    ) -> Result<bool, TableError>
    where
        R: Renderer + ?Sized,
    {
        let render = renderer.render(snapshot);
        let redrawn = match tokio::time::timeout(self.render_timeout, render).await {
            Ok(Ok(())) => true,
            Ok(Err(error)) => {
                warn!(%error, "Redraw failed");
                false
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.render_timeout.as_millis() as u64,
                    "Redraw timed out"
                );
                false
            }
        };

        let mut tables = self.lock();
        let Some(game) = tables
            .get_mut(table)
            .filter(|seat| seat.generation == generation)
            .map(|seat| &mut seat.game)
        else {
            debug!(generation, "Table closed or reopened during redraw");
            return Ok(redrawn);
        };

        if redrawn {
            game.end_render()?;
        } else {
            game.fail_render();
        }

        if redrawn && game.state().is_terminal() {
            let state = game.state();
            tables.remove(table);
            info!(%state, "Game over; table closed");
        }
        Ok(redrawn)
    }

    /// Current snapshot of a table, if a game is running there.
    #[instrument(skip(self))]
    pub fn snapshot(&self, table: &str) -> Option<SessionSnapshot> {
        self.lock().get(table).map(|seat| seat.game.snapshot())
    }

    /// Returns true if a game is running at the table.
    #[instrument(skip(self))]
    pub fn is_open(&self, table: &str) -> bool {
        self.lock().contains_key(table)
    }

    /// Drops a table's game. Returns its last snapshot.
    #[instrument(skip(self))]
    pub fn close(&self, table: &str) -> Option<SessionSnapshot> {
        let closed = self.lock().remove(table).map(|seat| seat.game.snapshot());
        if closed.is_some() {
            info!("Closed table");
        }
        closed
    }

    /// Lists tables with a game.
    #[instrument(skip(self))]
    pub fn tables(&self) -> Vec<TableId> {
        let ids: Vec<_> = self.lock().keys().cloned().collect();
        debug!(count = ids.len(), "Listed tables");
        ids
    }
}

impl Default for TableManager {
    fn default() -> Self {
        Self::from_config(&TableConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;

    struct Recorder(Vec<SessionSnapshot>);

    #[async_trait::async_trait]
    impl Renderer for Recorder {
        async fn render(&mut self, snapshot: &SessionSnapshot) -> Result<(), RenderError> {
            self.0.push(snapshot.clone());
            Ok(())
        }
    }

    fn first(_: &[char]) -> usize {
        0
    }

    #[tokio::test]
    async fn test_dispatch_redraws_after_each_action() {
        let tables = TableManager::default();
        tables.open("t", SecretWord::new("apple").unwrap(), 6, first).unwrap();
        let mut recorder = Recorder(Vec::new());

        let report = tables
            .dispatch("t", PlayerAction::Letter('p'), &mut recorder)
            .await
            .unwrap();
        assert!(*report.redrawn());
        assert_eq!(*report.state(), SessionState::InProgress);
        assert_eq!(recorder.0.len(), 1);
        assert_eq!(recorder.0[0].masked, "_pp__");
        assert!(!tables.snapshot("t").is_some_and(|s| s.is_over()));
    }

    #[tokio::test]
    async fn test_unknown_table() {
        let tables = TableManager::default();
        let err = tables
            .dispatch("nowhere", PlayerAction::Hint, &mut Recorder(Vec::new()))
            .await
            .unwrap_err();
        assert_eq!(err, TableError::NotFound("nowhere".into()));
    }

    #[test]
    fn test_open_twice_is_occupied() {
        let tables = TableManager::default();
        tables.open("t", SecretWord::new("ox").unwrap(), 6, first).unwrap();
        let err = tables
            .open("t", SecretWord::new("ox").unwrap(), 6, first)
            .unwrap_err();
        assert_eq!(err, TableError::Occupied("t".into()));
        assert_eq!(tables.tables(), vec!["t".to_string()]);
        assert!(tables.close("t").is_some());
        assert!(!tables.is_open("t"));
    }

    #[test]
    fn test_open_rejects_zero_budget() {
        let tables = TableManager::default();
        let err = tables
            .open("t", SecretWord::new("ox").unwrap(), 0, first)
            .unwrap_err();
        assert!(matches!(err, TableError::Session(_)));
        assert!(!tables.is_open("t"));
    }
}
