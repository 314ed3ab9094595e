//! Classic rules with hidden marks.

use super::{Classic, InputShape, Variant};
use crate::{ConfigError, GameConfig};
use strictly_grid::{Board, CenterWeight, Grid, Move, Placement, Searcher, Strategy, Symbol, WindowCount};

/// Tic-tac-toe where the display never shows placed marks.
///
/// Players must remember the position. The engine and the rules still see
/// every mark, so an occupied cell is rejected even though it looks empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Memory {
    inner: Classic,
}

impl Memory {
    /// Empty board.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Board for Memory {
    fn grid(&self) -> &Grid {
        self.inner.grid()
    }

    fn apply(&mut self, mv: &Move) -> bool {
        self.inner.apply(mv)
    }

    fn is_win(&self, symbol: Symbol) -> bool {
        self.inner.is_win(symbol)
    }

    fn is_draw(&self, symbol: Symbol) -> bool {
        self.inner.is_draw(symbol)
    }

    fn display_cell(&self, _x: usize, _y: usize) -> Symbol {
        self.blank()
    }
}

impl Variant for Memory {
    const INPUT: InputShape = InputShape::Cell;

    fn setup(_config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::new())
    }

    fn strategy(&self, config: &GameConfig) -> Box<dyn Strategy<Self>> {
        Box::new(Searcher::new(
            Placement::anywhere(),
            (WindowCount::new(3), CenterWeight),
            *config.search_depth(),
        ))
    }

    fn rules() -> &'static str {
        "Three in a row wins, but marks vanish from the board once placed."
    }
}
