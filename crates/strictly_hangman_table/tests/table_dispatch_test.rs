//! Tests for dispatching actions through the render boundary.

use std::time::Duration;

use strictly_hangman::{
    HintOutcome, LetterOutcome, NotAccepting, SecretWord, SessionSnapshot, SessionState,
    StopOutcome,
};
use strictly_hangman_table::{
    ActionOutcome, PlayerAction, RenderError, Renderer, TableError, TableManager,
};
use tokio::sync::oneshot;

fn first(_: &[char]) -> usize {
    0
}

/// Records every frame it is asked to draw.
#[derive(Default)]
struct Recorder {
    frames: Vec<SessionSnapshot>,
}

#[async_trait::async_trait]
impl Renderer for Recorder {
    async fn render(&mut self, snapshot: &SessionSnapshot) -> Result<(), RenderError> {
        self.frames.push(snapshot.clone());
        Ok(())
    }
}

/// Always fails.
struct Broken;

#[async_trait::async_trait]
impl Renderer for Broken {
    async fn render(&mut self, _snapshot: &SessionSnapshot) -> Result<(), RenderError> {
        Err(RenderError::new("display unplugged"))
    }
}

/// Never finishes within any sane timeout.
struct Stuck;

#[async_trait::async_trait]
impl Renderer for Stuck {
    async fn render(&mut self, _snapshot: &SessionSnapshot) -> Result<(), RenderError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(())
    }
}

/// Signals when it starts and waits to be released.
struct Gated {
    started: Option<oneshot::Sender<()>>,
    release: Option<oneshot::Receiver<()>>,
}

#[async_trait::async_trait]
impl Renderer for Gated {
    async fn render(&mut self, _snapshot: &SessionSnapshot) -> Result<(), RenderError> {
        if let Some(started) = self.started.take() {
            let _ = started.send(());
        }
        if let Some(release) = self.release.take() {
            release
                .await
                .map_err(|_| RenderError::new("gate dropped"))?;
        }
        Ok(())
    }
}

fn gate() -> (Gated, oneshot::Receiver<()>, oneshot::Sender<()>) {
    let (started_tx, started_rx) = oneshot::channel();
    let (release_tx, release_rx) = oneshot::channel();
    let gated = Gated {
        started: Some(started_tx),
        release: Some(release_rx),
    };
    (gated, started_rx, release_tx)
}

fn open(tables: &TableManager, word: &str, max_fails: usize) {
    tables
        .open("t", SecretWord::new(word).unwrap(), max_fails, first)
        .unwrap();
}

#[tokio::test]
async fn test_actions_during_redraw_are_refused() {
    let tables = TableManager::default();
    open(&tables, "apple", 6);

    let (mut gated, started_rx, release_tx) = gate();

    let background = tables.clone();
    let first_action = tokio::spawn(async move {
        background
            .dispatch("t", PlayerAction::Letter('p'), &mut gated)
            .await
    });
    started_rx.await.unwrap();

    let mut recorder = Recorder::default();
    let refused = tables
        .dispatch("t", PlayerAction::Letter('a'), &mut recorder)
        .await
        .unwrap();
    assert_eq!(
        refused.outcome(),
        &ActionOutcome::Letter(LetterOutcome::NotAccepting(NotAccepting::Busy))
    );
    assert!(!*refused.redrawn());
    assert!(recorder.frames.is_empty());

    let stop = tables
        .dispatch("t", PlayerAction::Stop, &mut recorder)
        .await
        .unwrap();
    assert_eq!(
        stop.outcome(),
        &ActionOutcome::Stop(StopOutcome::NotAccepting(NotAccepting::Busy))
    );

    release_tx.send(()).unwrap();
    let report = first_action.await.unwrap().unwrap();
    assert!(*report.redrawn());

    // The refused guess left no trace; it can be made now.
    let report = tables
        .dispatch("t", PlayerAction::Letter('a'), &mut recorder)
        .await
        .unwrap();
    assert_eq!(
        report.outcome(),
        &ActionOutcome::Letter(LetterOutcome::Correct { letter: 'a', revealed: 1 })
    );
    assert_eq!(recorder.frames.last().unwrap().masked, "app__");
}

#[tokio::test]
async fn test_failed_redraw_clears_busy() {
    let tables = TableManager::default();
    open(&tables, "apple", 6);

    let report = tables
        .dispatch("t", PlayerAction::Letter('z'), &mut Broken)
        .await
        .unwrap();
    assert!(!*report.redrawn());
    assert_eq!(tables.snapshot("t").unwrap().fail_count, 1);

    let mut recorder = Recorder::default();
    let report = tables
        .dispatch("t", PlayerAction::Hint, &mut recorder)
        .await
        .unwrap();
    assert!(matches!(
        report.outcome(),
        ActionOutcome::Hint(HintOutcome::Revealed { .. })
    ));
    assert!(*report.redrawn());
}

#[tokio::test]
async fn test_redraw_timeout_counts_as_failure() {
    let tables = TableManager::new(Duration::from_millis(20));
    open(&tables, "apple", 6);

    let report = tables
        .dispatch("t", PlayerAction::Letter('e'), &mut Stuck)
        .await
        .unwrap();
    assert!(!*report.redrawn());

    let report = tables
        .dispatch("t", PlayerAction::Letter('l'), &mut Recorder::default())
        .await
        .unwrap();
    assert!(*report.redrawn());
}

#[tokio::test]
async fn test_terminal_redraw_closes_table() {
    let tables = TableManager::default();
    open(&tables, "ox", 6);
    let mut recorder = Recorder::default();

    tables
        .dispatch("t", PlayerAction::Letter('o'), &mut recorder)
        .await
        .unwrap();
    let report = tables
        .dispatch("t", PlayerAction::Letter('x'), &mut recorder)
        .await
        .unwrap();
    assert_eq!(*report.state(), SessionState::Won);
    assert!(*report.redrawn());
    assert!(!tables.is_open("t"));

    let last = recorder.frames.last().unwrap();
    assert!(last.is_over());
    assert_eq!(last.secret.as_deref(), Some("ox"));

    let err = tables
        .dispatch("t", PlayerAction::Hint, &mut recorder)
        .await
        .unwrap_err();
    assert_eq!(err, TableError::NotFound("t".into()));
}

#[tokio::test]
async fn test_failed_final_redraw_can_be_retried() {
    let tables = TableManager::default();
    open(&tables, "apple", 1);

    let report = tables
        .dispatch("t", PlayerAction::Letter('z'), &mut Broken)
        .await
        .unwrap();
    assert_eq!(*report.state(), SessionState::Lost);
    assert!(tables.is_open("t"));

    // Still finished: further actions are refused without a redraw
    let mut recorder = Recorder::default();
    let report = tables
        .dispatch("t", PlayerAction::Letter('a'), &mut recorder)
        .await
        .unwrap();
    assert_eq!(
        report.outcome(),
        &ActionOutcome::Letter(LetterOutcome::NotAccepting(NotAccepting::Finished(
            SessionState::Lost
        )))
    );
    assert!(recorder.frames.is_empty());

    assert!(tables.redraw("t", &mut recorder).await.unwrap());
    assert_eq!(recorder.frames.len(), 1);
    assert!(!tables.is_open("t"));
}

#[tokio::test]
async fn test_finished_table_can_be_reopened() {
    let tables = TableManager::default();
    open(&tables, "apple", 1);
    tables
        .dispatch("t", PlayerAction::Stop, &mut Broken)
        .await
        .unwrap();
    assert!(tables.is_open("t"));

    open(&tables, "ferris", 6);
    assert_eq!(tables.snapshot("t").unwrap().masked, "______");
}

#[tokio::test]
async fn test_tables_are_independent() {
    let tables = TableManager::default();
    tables.open("a", SecretWord::new("ox").unwrap(), 6, first).unwrap();
    tables.open("b", SecretWord::new("ox").unwrap(), 6, first).unwrap();

    let mut recorder = Recorder::default();
    tables
        .dispatch("a", PlayerAction::Letter('x'), &mut recorder)
        .await
        .unwrap();
    assert_eq!(tables.snapshot("a").unwrap().masked, "_x");
    assert_eq!(tables.snapshot("b").unwrap().masked, "__");

    let mut ids = tables.tables();
    ids.sort();
    assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
}

#[tokio::test]
async fn test_stale_redraw_does_not_release_reopened_table() {
    let tables = TableManager::default();
    open(&tables, "apple", 6);

    let (mut old_gate, old_started, old_release) = gate();
    let background = tables.clone();
    let old_redraw = tokio::spawn(async move {
        background
            .dispatch("t", PlayerAction::Letter('p'), &mut old_gate)
            .await
    });
    old_started.await.unwrap();

    assert!(tables.close("t").is_some());
    open(&tables, "ferris", 6);

    let (mut new_gate, new_started, new_release) = gate();
    let background = tables.clone();
    let new_redraw = tokio::spawn(async move {
        background
            .dispatch("t", PlayerAction::Letter('f'), &mut new_gate)
            .await
    });
    new_started.await.unwrap();

    // The first game's redraw completes while the second game's is in flight
    old_release.send(()).unwrap();
    assert!(*old_redraw.await.unwrap().unwrap().redrawn());

    let mut recorder = Recorder::default();
    let report = tables
        .dispatch("t", PlayerAction::Letter('e'), &mut recorder)
        .await
        .unwrap();
    assert_eq!(
        report.outcome(),
        &ActionOutcome::Letter(LetterOutcome::NotAccepting(NotAccepting::Busy))
    );

    new_release.send(()).unwrap();
    assert!(*new_redraw.await.unwrap().unwrap().redrawn());

    let report = tables
        .dispatch("t", PlayerAction::Letter('e'), &mut recorder)
        .await
        .unwrap();
    assert_eq!(
        report.outcome(),
        &ActionOutcome::Letter(LetterOutcome::Correct { letter: 'e', revealed: 1 })
    );
    assert_eq!(tables.snapshot("t").unwrap().masked, "fe____");
}
