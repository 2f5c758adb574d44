//! Renderers: draw a session snapshot somewhere.

use serde::Serialize;
use strictly_hangman::{GuessKind, SessionSnapshot, SessionState, Verdict};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, instrument};

use crate::error::RenderError;
use crate::gallows::Gallows;

/// Trait for anything that can redraw a table.
///
/// The table waits for `render` to finish before it accepts the next
/// action, so a slow renderer throttles the game.
#[async_trait::async_trait]
pub trait Renderer: Send {
    /// Draws the snapshot.
    async fn render(&mut self, snapshot: &SessionSnapshot) -> Result<(), RenderError>;
}

/// Human-readable renderer: gallows, mask, guesses and counters.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
}

impl<W> TextRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Gives back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextRenderer<tokio::io::Stdout> {
    /// Renderer writing to standard output.
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

/// Formats a snapshot as text.
pub fn draw(snapshot: &SessionSnapshot) -> String {
    let stage = Gallows::for_fails(snapshot.fail_count, snapshot.max_fails);
    let mut text = String::new();
    text.push_str(stage.drawing());
    text.push_str("\n\n");
    text.push_str(&format!("Word: {}\n", snapshot.masked_spaced));

    let letters: Vec<&str> = snapshot
        .guesses
        .iter()
        .filter(|g| g.kind != GuessKind::Word)
        .map(|g| g.text.as_str())
        .collect();
    if !letters.is_empty() {
        text.push_str(&format!("Letters: {}\n", letters.join(" ")));
    }
    let wrong: Vec<&str> = snapshot
        .guesses
        .iter()
        .filter(|g| g.verdict == Verdict::Incorrect)
        .map(|g| g.text.as_str())
        .collect();
    if !wrong.is_empty() {
        text.push_str(&format!("Wrong: {}\n", wrong.join(", ")));
    }

    text.push_str(&format!(
        "Failures: {}/{}  Hints left: {}\n",
        snapshot.fail_count, snapshot.max_fails, snapshot.hints_remaining
    ));

    let verdict = match snapshot.state {
        SessionState::InProgress => None,
        SessionState::Won => Some("You won!"),
        SessionState::Lost => Some("You lost."),
        SessionState::Forfeited => Some("Game stopped."),
    };
    if let Some(verdict) = verdict {
        text.push_str(verdict);
        if let Some(secret) = &snapshot.secret {
            text.push_str(&format!(" The word was \"{secret}\""));
            match &snapshot.definition {
                Some(definition) => text.push_str(&format!(": {definition}\n")),
                None => text.push_str(".\n"),
            }
        } else {
            text.push('\n');
        }
    }
    text
}

#[async_trait::async_trait]
impl<W> Renderer for TextRenderer<W>
where
    W: AsyncWrite + Unpin + Send,
{
    #[instrument(skip_all, fields(state = %snapshot.state))]
    async fn render(&mut self, snapshot: &SessionSnapshot) -> Result<(), RenderError> {
        let text = draw(snapshot);
        self.out.write_all(text.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await?;
        debug!(bytes = text.len(), "Text frame written");
        Ok(())
    }
}

#[derive(Serialize)]
struct Frame<'a> {
    gallows: Gallows,
    #[serde(flatten)]
    snapshot: &'a SessionSnapshot,
}

/// Machine-readable renderer: one JSON document per line.
#[derive(Debug)]
pub struct JsonRenderer<W> {
    out: W,
}

impl<W> JsonRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Gives back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl JsonRenderer<tokio::io::Stdout> {
    /// Renderer writing to standard output.
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

#[async_trait::async_trait]
impl<W> Renderer for JsonRenderer<W>
where
    W: AsyncWrite + Unpin + Send,
{
    #[instrument(skip_all, fields(state = %snapshot.state))]
    async fn render(&mut self, snapshot: &SessionSnapshot) -> Result<(), RenderError> {
        let frame = Frame {
            gallows: Gallows::for_fails(snapshot.fail_count, snapshot.max_fails),
            snapshot,
        };
        let mut line = serde_json::to_vec(&frame)?;
        line.push(b'\n');
        self.out.write_all(&line).await?;
        self.out.flush().await?;
        Ok(())
    }
}
