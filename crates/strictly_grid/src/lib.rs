//! Grid game core: boards, moves, players and a minimax search engine.
//!
//! Every variant implements [`Board`] over a [`Grid`]. Computer players run
//! a [`Searcher`], which walks the game tree on the live board by applying
//! candidate moves and undoing them. An undo is an ordinary [`Move`] whose
//! mark is the board's blank sentinel, so boards expose a single `apply`.
//!
//! # Example
//!
//! ```
//! use strictly_grid::{Board, Grid, Move, Placement, Searcher, Symbol, WindowCount};
//!
//! struct Classic(Grid);
//!
//! impl Board for Classic {
//!     fn grid(&self) -> &Grid {
//!         &self.0
//!     }
//!     fn apply(&mut self, mv: &Move) -> bool {
//!         self.0.apply_placement(mv, mv.mark)
//!     }
//!     fn is_win(&self, symbol: Symbol) -> bool {
//!         self.0.has_run(3, symbol)
//!     }
//!     fn is_draw(&self, _symbol: Symbol) -> bool {
//!         self.0.is_full()
//!     }
//! }
//!
//! let mut board = Classic(Grid::new(3, 3, Symbol::DOT));
//! board.apply(&Move::place(0, 0, Symbol::X));
//! board.apply(&Move::place(1, 1, Symbol::O));
//! board.apply(&Move::place(0, 1, Symbol::X));
//!
//! let search = Searcher::new(Placement::anywhere(), WindowCount::new(3), 2);
//! let outcome = search.choose_move(&mut board, Symbol::O).unwrap();
//! assert_eq!(outcome.best, Move::place(0, 2, Symbol::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod error;
mod generate;
mod grid;
mod heuristic;
mod player;
mod pool;
mod search;
mod symbol;

// Crate-level exports - Cells and moves
pub use action::{Move, Payload};
pub use grid::{DIRECTIONS, Grid, ORTHOGONAL};
pub use pool::ValuePool;
pub use symbol::{Symbol, opponent_of};

// Crate-level exports - Contracts
pub use board::Board;
pub use player::{Player, PlayerKind, Seat};

// Crate-level exports - Search
pub use error::{EngineError, EngineErrorKind};
pub use generate::{
    CellRule, ConsumableValues, LetterPlacement, MoveGenerator, Placement, Slide, ValuePlacement, blank_cell,
    candidates, first_legal, gravity_cell,
};
pub use heuristic::{CenterWeight, Evaluator, Flat, WindowCount};
pub use search::{MAX_HEURISTIC, SearchOutcome, Searcher, Strategy, WIN_BONUS};
