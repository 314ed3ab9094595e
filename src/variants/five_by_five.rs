//! 5x5 tic-tac-toe scored by counting three-in-a-row windows.

use super::{InputShape, Variant};
use crate::{ConfigError, GameConfig};
use strictly_grid::{Board, Grid, Move, Payload, Placement, Searcher, Strategy, Symbol, WindowCount, opponent_of};

/// Placements after which the game is scored.
pub const PLACEMENTS: usize = 24;

/// 5x5 board; after 24 placements the side with more triples wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiveByFive {
    grid: Grid,
}

impl FiveByFive {
    /// Empty board.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(5, 5, Symbol::DOT),
        }
    }

    /// Three-in-a-row windows held by `symbol`.
    pub fn triples(&self, symbol: Symbol) -> usize {
        self.grid.count_runs(3, symbol)
    }

    fn finished(&self) -> bool {
        self.grid.move_count() >= PLACEMENTS
    }
}

/// Blank cell while placements remain.
fn open_cell(grid: &Grid, x: usize, y: usize) -> bool {
    grid.move_count() < PLACEMENTS && grid.is_blank(x, y)
}

impl Default for FiveByFive {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for FiveByFive {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn apply(&mut self, mv: &Move) -> bool {
        if mv.payload != Payload::None || (self.finished() && !mv.is_undo(self.grid.blank())) {
            return false;
        }
        self.grid.apply_placement(mv, mv.mark)
    }

    fn is_win(&self, symbol: Symbol) -> bool {
        self.finished() && self.triples(symbol) > self.triples(opponent_of(symbol))
    }

    fn is_draw(&self, symbol: Symbol) -> bool {
        self.finished() && self.triples(symbol) == self.triples(opponent_of(symbol))
    }

    fn game_is_over(&self, _symbol: Symbol) -> bool {
        self.finished()
    }
}

impl Variant for FiveByFive {
    const INPUT: InputShape = InputShape::Cell;

    fn setup(_config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::new())
    }

    fn strategy(&self, config: &GameConfig) -> Box<dyn Strategy<Self>> {
        Box::new(Searcher::new(Placement::with_rule(open_cell), WindowCount::new(3), *config.search_depth()))
    }

    fn rules() -> &'static str {
        "The game stops after 24 marks; whoever owns more three-in-a-row lines wins."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_grid::EngineErrorKind;

    /// Fills the first 24 cells row by row with the given marks.
    fn filled(pattern: &str) -> FiveByFive {
        let mut board = FiveByFive::new();
        for (i, c) in pattern.chars().filter(|c| !c.is_whitespace()).enumerate() {
            assert!(board.apply(&Move::place(i / 5, i % 5, Symbol::new(c))));
        }
        board
    }

    #[test]
    fn test_more_triples_wins() {
        let board = filled(
            "XXXOO
             OOXXO
             XOOXX
             OXXOO
             XOXO",
        );
        assert_eq!(board.move_count(), PLACEMENTS);
        assert_eq!(board.triples(Symbol::X), 4);
        assert_eq!(board.triples(Symbol::O), 1);
        assert!(board.is_win(Symbol::X));
        assert!(!board.is_win(Symbol::O));
        assert!(!board.is_draw(Symbol::O));
        assert!(board.game_is_over(Symbol::O));
    }

    #[test]
    fn test_no_placement_after_the_end() {
        let mut board = filled(
            "XOXOX
             OXOXO
             XOXOX
             OXOXO
             XOXO",
        );
        assert!(!board.apply(&Move::place(4, 4, Symbol::X)));
        assert!(board.apply(&Move::undo(4, 3, Symbol::DOT)));
    }

    #[test]
    fn test_computer_has_no_move_after_the_end() {
        let mut board = filled(
            "XOXOX
             OXOXO
             XOXOX
             OXOXO
             XOXO",
        );
        let before = board.clone();
        let err = board
            .strategy(&GameConfig::default())
            .choose(&mut board, Symbol::X)
            .unwrap_err();
        assert_eq!(err.kind, EngineErrorKind::NoLegalMove(Symbol::X));
        assert_eq!(board, before);
    }

    #[test]
    fn test_not_over_before_24() {
        let board = filled("XXX");
        assert!(!board.is_win(Symbol::X));
        assert!(!board.game_is_over(Symbol::X));
    }
}
