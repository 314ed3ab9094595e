//! Engine error types.

use super::{Move, Symbol};
use derive_more::{Display, Error};

/// What went wrong inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// A player was asked to move before being seated.
    #[display("player {} is not seated at a board", _0)]
    Unseated(String),

    /// A player without a strategy was asked to compute a move.
    #[display("player {} has no search strategy", _0)]
    NoStrategy(String),

    /// No candidate move exists for the mover.
    #[display("no legal move for {}", _0)]
    NoLegalMove(Symbol),

    /// The board refused an inverse move generated by the engine.
    #[display("board rejected inverse move {}", _0)]
    UndoRejected(Move),
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// Error kind.
    #[error(not(source))]
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
