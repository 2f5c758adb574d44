//! Table and render error types.

use derive_more::{Display, Error};
use strictly_hangman::SessionError;
use tracing::instrument;

use crate::table::TableId;

/// Error raised by the table registry.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TableError {
    /// The table already hosts a live game.
    #[display("Table {} already has a game in progress", _0)]
    Occupied(TableId),

    /// No game is running at the table.
    #[display("No game at table {}", _0)]
    NotFound(TableId),

    /// The session rejected a render-boundary call.
    #[display("Session error: {}", _0)]
    Session(SessionError),
}

impl std::error::Error for TableError {}

impl From<SessionError> for TableError {
    fn from(err: SessionError) -> Self {
        Self::Session(err)
    }
}

/// Renderer failure with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Render error: {} at {}:{}", message, file, line)]
pub struct RenderError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RenderError {
    /// Creates a new render error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for RenderError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for RenderError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_tracks_location() {
        let err = RenderError::new("screen gone");
        assert_eq!(err.file, file!());
        assert!(err.to_string().starts_with("Render error: screen gone at "));
    }

    #[test]
    fn test_table_error_display() {
        let err = TableError::NotFound("lobby".into());
        assert_eq!(err.to_string(), "No game at table lobby");
        let err: TableError = SessionError::NoRenderInFlight.into();
        assert!(matches!(err, TableError::Session(_)));
    }
}
