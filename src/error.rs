//! Errors raised while running a match.

use crate::ConfigError;
use derive_more::{Display, Error};
use strictly_grid::{EngineError, Move};
use tracing::instrument;

/// What ended a match abnormally.
#[derive(Debug, Clone, Display)]
pub enum GameErrorKind {
    /// Console read or write failed.
    #[display("console I/O failed: {}", _0)]
    Io(String),

    /// Input ended before the game did.
    #[display("input closed before the game finished")]
    InputClosed,

    /// The engine failed to produce a move.
    #[display("{}", _0)]
    Engine(EngineError),

    /// A computer player produced a move its own board rejected.
    #[display("computer chose illegal move {}", _0)]
    IllegalComputerMove(Move),

    /// Setup could not be completed.
    #[display("{}", _0)]
    Config(ConfigError),
}

/// Match error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// Error kind.
    #[error(not(source))]
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument(skip(kind))]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for GameError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(GameErrorKind::Io(err.to_string()))
    }
}

impl From<EngineError> for GameError {
    #[track_caller]
    fn from(err: EngineError) -> Self {
        Self::new(GameErrorKind::Engine(err))
    }
}

impl From<ConfigError> for GameError {
    #[track_caller]
    fn from(err: ConfigError) -> Self {
        Self::new(GameErrorKind::Config(err))
    }
}
