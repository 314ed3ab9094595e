//! The board contract consumed by the search engine and the turn coordinator.

use super::{Grid, Move, Symbol};

/// A playable board.
///
/// Concrete variants supply the shape (through their [`Grid`]), the legality
/// rule inside [`Board::apply`] and the win predicate. Predicates take the
/// probed symbol rather than a player, so the engine can ask about the
/// opponent without a second player object.
pub trait Board {
    /// Cell storage backing this board.
    fn grid(&self) -> &Grid;

    /// Applies a move, or an inverse move when `mv.mark` is the blank sentinel.
    ///
    /// Returns `false`, without mutating anything, when the move is illegal.
    fn apply(&mut self, mv: &Move) -> bool;

    /// True when `symbol` has won.
    fn is_win(&self, symbol: Symbol) -> bool;

    /// True when `symbol` has lost by its own doing (misère rules).
    fn is_lose(&self, _symbol: Symbol) -> bool {
        false
    }

    /// True when the game is drawn.
    fn is_draw(&self, symbol: Symbol) -> bool;

    /// True when the game ended, judged for the player who just moved.
    fn game_is_over(&self, symbol: Symbol) -> bool {
        self.is_win(symbol) || self.is_lose(symbol) || self.is_draw(symbol)
    }

    /// Number of rows.
    fn rows(&self) -> usize {
        self.grid().rows()
    }

    /// Number of columns.
    fn cols(&self) -> usize {
        self.grid().cols()
    }

    /// Cell contents at `(x, y)`.
    fn cell(&self, x: usize, y: usize) -> Symbol {
        self.grid().get(x, y)
    }

    /// Blank sentinel of this board.
    fn blank(&self) -> Symbol {
        self.grid().blank()
    }

    /// Accepted applies minus accepted undos.
    fn move_count(&self) -> usize {
        self.grid().move_count()
    }

    /// What a human sees at `(x, y)`.
    fn display_cell(&self, x: usize, y: usize) -> Symbol {
        self.cell(x, y)
    }

    /// Housekeeping after a real ply. Never called during search.
    fn end_turn(&mut self) {}
}
