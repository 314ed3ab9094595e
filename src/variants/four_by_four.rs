//! Sliding tic-tac-toe on a 4x4 board.

use super::{HumanInput, InputShape, Variant};
use crate::{ConfigError, GameConfig};
use strictly_grid::{Board, Grid, Move, Payload, Searcher, Slide, Strategy, Symbol, WindowCount, candidates};

/// Plies after which the game is called a draw.
pub const MOVE_CAP: usize = 100;

/// 4x4 board where pieces slide instead of being placed.
///
/// Each side starts with four pieces on its home rows. A move steps one own
/// piece to an orthogonally adjacent blank cell. Three in a row wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FourByFour {
    grid: Grid,
}

impl FourByFour {
    /// Starting position: `X O X O` on top, `O X O X` at the bottom.
    pub fn new() -> Self {
        let mut grid = Grid::new(4, 4, Symbol::DOT);
        for y in 0..4 {
            let (top, bottom) = if y % 2 == 0 { (Symbol::X, Symbol::O) } else { (Symbol::O, Symbol::X) };
            grid.seed(0, y, top);
            grid.seed(3, y, bottom);
        }
        Self { grid }
    }
}

impl Default for FourByFour {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for FourByFour {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn apply(&mut self, mv: &Move) -> bool {
        self.grid.apply_slide(mv)
    }

    fn is_win(&self, symbol: Symbol) -> bool {
        self.grid.has_run(3, symbol)
    }

    fn is_draw(&self, _symbol: Symbol) -> bool {
        self.grid.move_count() >= MOVE_CAP && !self.is_win(Symbol::X) && !self.is_win(Symbol::O)
    }
}

impl Variant for FourByFour {
    const INPUT: InputShape = InputShape::CellDirection;

    fn setup(_config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::new())
    }

    fn strategy(&self, config: &GameConfig) -> Box<dyn Strategy<Self>> {
        Box::new(Searcher::new(Slide, WindowCount::new(3), *config.search_depth()))
    }

    fn human_move(&self, input: &HumanInput, mark: Symbol) -> Option<Move> {
        match *input {
            HumanInput::CellDirection { x, y, dx, dy } => Some(Move::new(
                x as i32,
                y as i32,
                mark,
                Payload::Slide { dx, dy },
            )),
            _ => None,
        }
    }

    fn can_move(&self, mark: Symbol) -> bool {
        !candidates(&Slide, self, mark).is_empty()
    }

    fn rules() -> &'static str {
        "Slide one of your pieces up, right, down or left into an empty cell. Three in a row wins."
    }
}
