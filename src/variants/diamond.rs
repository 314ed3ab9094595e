//! Diamond tic-tac-toe on a 7x7 board.

use super::{InputShape, Variant};
use crate::{ConfigError, GameConfig};
use strictly_grid::{Board, CenterWeight, Grid, Move, Payload, Placement, Searcher, Strategy, Symbol, WindowCount};

/// Manhattan radius of the playable diamond.
const RADIUS: usize = 3;

/// 25-cell diamond inside a 7x7 grid.
///
/// A win needs a line of at least four and a second line of at least three
/// in a different direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diamond {
    grid: Grid,
}

impl Diamond {
    /// Empty diamond.
    pub fn new() -> Self {
        Self {
            grid: Grid::shaped(7, 7, Symbol::DOT, |x, y| x.abs_diff(RADIUS) + y.abs_diff(RADIUS) <= RADIUS),
        }
    }
}

impl Default for Diamond {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for Diamond {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn apply(&mut self, mv: &Move) -> bool {
        mv.payload == Payload::None && self.grid.apply_placement(mv, mv.mark)
    }

    fn is_win(&self, symbol: Symbol) -> bool {
        let runs = self.grid.longest_runs(symbol);
        runs.iter().enumerate().any(|(d, &long)| {
            long >= 4 && runs.iter().enumerate().any(|(e, &short)| e != d && short >= 3)
        })
    }

    fn is_draw(&self, _symbol: Symbol) -> bool {
        self.grid.is_full() && !self.is_win(Symbol::X) && !self.is_win(Symbol::O)
    }

    fn display_cell(&self, x: usize, y: usize) -> Symbol {
        match self.cell(x, y) {
            c if c == self.grid.obstacle() => Symbol::new(' '),
            c => c,
        }
    }
}

impl Variant for Diamond {
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
        "Win with a line of four plus a line of three in another direction."
    }
}
