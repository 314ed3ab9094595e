//! Four in a row on a 6x7 gravity board.

use super::{HumanInput, InputShape, Variant};
use crate::{ConfigError, GameConfig};
use strictly_grid::{
    Board, CenterWeight, Grid, Move, Payload, Placement, Searcher, Strategy, Symbol, WindowCount, gravity_cell,
};

/// Pieces drop to the lowest blank cell of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FourInARow {
    grid: Grid,
}

impl FourInARow {
    /// Empty board.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(6, 7, Symbol::DOT),
        }
    }

    /// Row a piece dropped in column `y` lands on.
    pub fn landing_row(&self, y: usize) -> Option<usize> {
        if y >= self.grid.cols() {
            return None;
        }
        (0..self.grid.rows()).rev().find(|&x| self.grid.is_blank(x, y))
    }
}

impl Default for FourInARow {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for FourInARow {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn apply(&mut self, mv: &Move) -> bool {
        if mv.payload != Payload::None {
            return false;
        }
        if !mv.is_undo(self.grid.blank()) {
            let on_grid = self.grid.contains(mv.x, mv.y);
            if !on_grid || !gravity_cell(&self.grid, mv.x as usize, mv.y as usize) {
                return false;
            }
        }
        self.grid.apply_placement(mv, mv.mark)
    }

    fn is_win(&self, symbol: Symbol) -> bool {
        self.grid.has_run(4, symbol)
    }

    fn is_draw(&self, _symbol: Symbol) -> bool {
        self.grid.is_full() && !self.is_win(Symbol::X) && !self.is_win(Symbol::O)
    }
}

impl Variant for FourInARow {
    const INPUT: InputShape = InputShape::Column;

    fn setup(_config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::new())
    }

    fn strategy(&self, config: &GameConfig) -> Box<dyn Strategy<Self>> {
        Box::new(Searcher::new(
            Placement::with_rule(gravity_cell),
            (WindowCount::new(4), CenterWeight),
            *config.search_depth(),
        ))
    }

    fn human_move(&self, input: &HumanInput, mark: Symbol) -> Option<Move> {
        match *input {
            HumanInput::Column { y } => self.landing_row(y).map(|x| Move::place(x, y, mark)),
            _ => None,
        }
    }

    fn rules() -> &'static str {
        "Drop pieces into columns 0-6. Four in a row in any direction wins."
    }
}
