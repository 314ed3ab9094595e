//! Pyramid tic-tac-toe.

use super::{InputShape, Variant};
use crate::{ConfigError, GameConfig};
use strictly_grid::{Board, CenterWeight, Grid, Move, Payload, Placement, Searcher, Strategy, Symbol, WindowCount};

/// Three rows of widths 1, 3 and 5, centred in a 3x5 grid.
///
/// Cells outside the pyramid hold the obstacle sentinel for the whole game,
/// so windows crossing them never count as lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pyramid {
    grid: Grid,
}

impl Pyramid {
    /// Empty pyramid.
    pub fn new() -> Self {
        Self {
            grid: Grid::shaped(3, 5, Symbol::DOT, |x, y| y.abs_diff(2) <= x),
        }
    }
}

impl Default for Pyramid {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for Pyramid {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn apply(&mut self, mv: &Move) -> bool {
        mv.payload == Payload::None && self.grid.apply_placement(mv, mv.mark)
    }

    fn is_win(&self, symbol: Symbol) -> bool {
        self.grid.has_run(3, symbol)
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

impl Variant for Pyramid {
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
        "Three in a row inside the pyramid wins: along a row, a column or a diagonal."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let board = Pyramid::new();
        assert_eq!(board.grid().blank_cells(), 9);
        assert!(board.grid().is_obstacle(0, 0));
        assert!(board.grid().is_blank(0, 2));
        assert!(board.grid().is_blank(2, 0));
        assert_eq!(board.display_cell(0, 0), Symbol::new(' '));
    }

    #[test]
    fn test_cannot_play_outside() {
        let mut board = Pyramid::new();
        assert!(!board.apply(&Move::place(0, 0, Symbol::X)));
        assert!(!board.apply(&Move::place(1, 4, Symbol::X)));
    }

    #[test]
    fn test_column_and_diagonal_wins() {
        let mut board = Pyramid::new();
        for x in 0..3 {
            board.apply(&Move::place(x, 2, Symbol::X));
        }
        assert!(board.is_win(Symbol::X));

        let mut board = Pyramid::new();
        for (x, y) in [(0, 2), (1, 1), (2, 0)] {
            board.apply(&Move::place(x, y, Symbol::O));
        }
        assert!(board.is_win(Symbol::O));
    }

    #[test]
    fn test_draw_when_nine_cells_filled() {
        let mut board = Pyramid::new();
        let marks = [
            (0, 2, Symbol::X),
            (1, 1, Symbol::X),
            (1, 2, Symbol::O),
            (1, 3, Symbol::O),
            (2, 0, Symbol::O),
            (2, 1, Symbol::X),
            (2, 2, Symbol::X),
            (2, 3, Symbol::O),
            (2, 4, Symbol::X),
        ];
        for (x, y, s) in marks {
            assert!(board.apply(&Move::place(x, y, s)));
        }
        assert!(!board.is_win(Symbol::X));
        assert!(!board.is_win(Symbol::O));
        assert!(board.is_draw(Symbol::X));
    }
}
