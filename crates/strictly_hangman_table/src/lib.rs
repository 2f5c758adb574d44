//! Strictly Hangman Table - sessions, redraws and collaborators
//!
//! Hosts one [`strictly_hangman::GameSession`] per table and drives it
//! through the render boundary: apply an action, mark the session busy,
//! redraw unlocked, acknowledge. Also provides the gallows stages, word
//! lists, renderers and TOML configuration used by the `hangman` binary.

#![warn(missing_docs)]

mod action;
pub mod cli;
mod config;
mod error;
mod gallows;
mod render;
mod table;
mod terminal;
mod words;

pub use action::{ActionOutcome, PlayerAction};
pub use config::{ConfigError, TableConfig};
pub use error::{RenderError, TableError};
pub use gallows::Gallows;
pub use render::{JsonRenderer, Renderer, TextRenderer, draw};
pub use table::{ActionReport, TableId, TableManager};
pub use terminal::{TERMINAL_TABLE, choose_secret, hint_policy, run_game};
pub use words::{WordEntry, WordList};
