//! Misère tic-tac-toe: completing a line loses.

use super::{InputShape, Variant};
use crate::{ConfigError, GameConfig};
use strictly_grid::{
    Board, Evaluator, Grid, Move, Payload, Placement, Searcher, Strategy, Symbol, WindowCount, opponent_of,
};

/// 3x3 board where three in a row loses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misere {
    grid: Grid,
}

impl Misere {
    /// Empty board.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(3, 3, Symbol::DOT),
        }
    }
}

impl Default for Misere {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for Misere {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn apply(&mut self, mv: &Move) -> bool {
        mv.payload == Payload::None && self.grid.apply_placement(mv, mv.mark)
    }

    fn is_win(&self, symbol: Symbol) -> bool {
        self.grid.has_run(3, opponent_of(symbol))
    }

    fn is_lose(&self, symbol: Symbol) -> bool {
        self.grid.has_run(3, symbol)
    }

    fn is_draw(&self, _symbol: Symbol) -> bool {
        self.grid.is_full() && !self.grid.has_run(3, Symbol::X) && !self.grid.has_run(3, Symbol::O)
    }
}

/// Open windows are liabilities here.
#[derive(Debug, Clone, Copy)]
struct Avoidance(WindowCount);

impl Evaluator<Misere> for Avoidance {
    fn evaluate(&self, board: &Misere, own: Symbol, opp: Symbol) -> i32 {
        -self.0.score(&board.grid, own, opp)
    }
}

impl Variant for Misere {
    const INPUT: InputShape = InputShape::Cell;

    fn setup(_config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::new())
    }

    fn strategy(&self, config: &GameConfig) -> Box<dyn Strategy<Self>> {
        Box::new(Searcher::new(
            Placement::anywhere(),
            Avoidance(WindowCount::new(3)),
            *config.search_depth(),
        ))
    }

    fn rules() -> &'static str {
        "Avoid three in a row: whoever completes a line loses."
    }
}
