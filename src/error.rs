//! Game error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong inside a running match.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// The key primitive failed to read.
    #[display("Input error: {}", _0)]
    Input(String),
    /// The terminal primitive failed to write.
    #[display("Render error: {}", _0)]
    Render(String),
    /// A worker thread could not be started or panicked.
    #[display("Thread error: {}", _0)]
    Thread(String),
    /// A coordination invariant was broken (programming error).
    #[display("Invariant violated: {}", _0)]
    Invariant(String),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct GameError {
    /// Error kind.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for a failed key read.
    #[track_caller]
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::Input(message.into()))
    }

    /// Shorthand for a failed terminal write.
    #[track_caller]
    pub fn render(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::Render(message.into()))
    }

    /// Shorthand for a broken invariant.
    #[track_caller]
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::Invariant(message.into()))
    }
}
