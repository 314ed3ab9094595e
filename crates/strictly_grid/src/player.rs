//! Players and their seats.
//!
//! A board is shared between the coordinator and both players through a
//! [`Seat`]. Players keep only a weak handle, so dropping the match drops the
//! board and any later move request reports the player as unseated.

use super::{Board, EngineError, EngineErrorKind, Move, SearchOutcome, Strategy, Symbol};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::instrument;

/// Shared, owning handle to the board of a running game.
pub type Seat<B> = Rc<RefCell<B>>;

/// Who decides a player's moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayerKind {
    /// Moves come from console input.
    Human,
    /// Moves come from a search strategy.
    Computer,
}

/// A participant in one game.
#[derive(Getters)]
pub struct Player<B: ?Sized> {
    name: String,
    symbol: Symbol,
    kind: PlayerKind,
    #[getter(skip)]
    seat: Option<Weak<RefCell<B>>>,
    #[getter(skip)]
    strategy: Option<Box<dyn Strategy<B>>>,
}

impl<B: ?Sized> Player<B> {
    /// A player whose moves are entered by a person.
    pub fn human(name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            name: name.into(),
            symbol,
            kind: PlayerKind::Human,
            seat: None,
            strategy: None,
        }
    }

    /// A player whose moves are computed by `strategy`.
    pub fn computer(name: impl Into<String>, symbol: Symbol, strategy: Box<dyn Strategy<B>>) -> Self {
        Self {
            name: name.into(),
            symbol,
            kind: PlayerKind::Computer,
            seat: None,
            strategy: Some(strategy),
        }
    }

    /// Assigns the board this player plays on.
    pub fn seat(&mut self, board: &Seat<B>) {
        self.seat = Some(Rc::downgrade(board));
    }

    /// True while the seat's board is alive.
    pub fn is_seated(&self) -> bool {
        self.seat.as_ref().is_some_and(|seat| seat.strong_count() > 0)
    }

    /// True for computer players.
    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }

    fn board(&self) -> Result<Seat<B>, EngineError> {
        self.seat
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or_else(|| EngineError::new(EngineErrorKind::Unseated(self.name.clone())))
    }
}

impl<B: Board + ?Sized> Player<B> {
    /// Runs this player's strategy on its seat.
    ///
    /// # Errors
    ///
    /// Fails when the player is unseated, has no strategy, or has no legal move.
    #[instrument(skip(self), fields(player = %self.name, symbol = %self.symbol))]
    pub fn search(&self) -> Result<SearchOutcome, EngineError> {
        let board = self.board()?;
        let strategy = self
            .strategy
            .as_ref()
            .ok_or_else(|| EngineError::new(EngineErrorKind::NoStrategy(self.name.clone())))?;
        let mut board = board.borrow_mut();
        strategy.choose(&mut *board, self.symbol)
    }

    /// Chosen move for a computer player.
    ///
    /// # Errors
    ///
    /// See [`Player::search`].
    pub fn calculate_move(&self) -> Result<Move, EngineError> {
        self.search().map(|outcome| outcome.best)
    }

    /// True when this player has won on `board`.
    pub fn has_won(&self, board: &B) -> bool {
        board.is_win(self.symbol)
    }

    /// True when this player has lost by its own doing on `board`.
    pub fn has_lost(&self, board: &B) -> bool {
        board.is_lose(self.symbol)
    }

    /// True when the game is over, judged for this player.
    pub fn game_is_over(&self, board: &B) -> bool {
        board.game_is_over(self.symbol)
    }
}

impl<B: ?Sized> fmt::Debug for Player<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("symbol", &self.symbol)
            .field("kind", &self.kind)
            .field("seated", &self.is_seated())
            .finish()
    }
}

impl<B: ?Sized> fmt::Display for Player<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}
