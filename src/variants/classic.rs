//! Three in a row on a 3x3 board.

use super::{InputShape, Variant};
use crate::{ConfigError, GameConfig};
use strictly_grid::{Board, CenterWeight, Grid, Move, Payload, Placement, Searcher, Strategy, Symbol, WindowCount};

/// Classic tic-tac-toe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classic {
    grid: Grid,
}

impl Classic {
    /// Empty board.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(3, 3, Symbol::DOT),
        }
    }
}

impl Default for Classic {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for Classic {
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
}

impl Variant for Classic {
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
        "Three in a row, column or diagonal wins."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[(usize, usize, Symbol)]) -> Classic {
        let mut board = Classic::new();
        for &(x, y, s) in moves {
            assert!(board.apply(&Move::place(x, y, s)));
        }
        board
    }

    #[test]
    fn test_diagonal_win() {
        let board = play(&[(0, 0, Symbol::X), (0, 1, Symbol::O), (1, 1, Symbol::X), (0, 2, Symbol::O), (2, 2, Symbol::X)]);
        assert!(board.is_win(Symbol::X));
        assert!(!board.is_win(Symbol::O));
        assert!(board.game_is_over(Symbol::X));
    }

    #[test]
    fn test_full_board_draw() {
        let board = play(&[
            (0, 0, Symbol::X),
            (0, 1, Symbol::O),
            (0, 2, Symbol::X),
            (1, 1, Symbol::O),
            (1, 0, Symbol::X),
            (1, 2, Symbol::O),
            (2, 1, Symbol::X),
            (2, 0, Symbol::O),
            (2, 2, Symbol::X),
        ]);
        assert!(board.is_draw(Symbol::X));
        assert!(!board.is_win(Symbol::X));
    }

    #[test]
    fn test_rejects_occupied_and_payloads() {
        let mut board = play(&[(1, 1, Symbol::X)]);
        assert!(!board.apply(&Move::place(1, 1, Symbol::O)));
        assert!(!board.apply(&Move::write(0, 0, Symbol::O, Symbol::new('5'))));
        assert!(!board.apply(&Move::place(3, 0, Symbol::O)));
        assert_eq!(board.move_count(), 1);
    }

    #[test]
    fn test_computer_takes_the_win() {
        let mut board = play(&[(0, 0, Symbol::X), (1, 1, Symbol::O), (0, 1, Symbol::X), (2, 2, Symbol::O)]);
        let strategy = board.strategy(&GameConfig::default());
        let outcome = strategy.choose(&mut board, Symbol::X).unwrap();
        assert_eq!(outcome.best, Move::place(0, 2, Symbol::X));
    }
}
