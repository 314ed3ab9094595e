//! Ultimate tic-tac-toe: nine small boards inside a big one.

use super::{InputShape, Variant};
use crate::{ConfigError, GameConfig};
use strictly_grid::{Board, Evaluator, Grid, Move, Payload, Placement, Searcher, Strategy, Symbol, WindowCount};

/// 9x9 board split into 3x3 small boards.
///
/// Three in a row inside a small board claims it, and a claimed board takes
/// no further marks. Three claimed boards in a row win. Ownership is read
/// from the cells, so undoing the claiming mark releases the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ultimate {
    grid: Grid,
}

/// The eight lines of the small board whose top-left cell is `(ox, oy)`.
fn small_lines(ox: usize, oy: usize) -> [[(usize, usize); 3]; 8] {
    let row = |i| [(ox + i, oy), (ox + i, oy + 1), (ox + i, oy + 2)];
    let col = |j| [(ox, oy + j), (ox + 1, oy + j), (ox + 2, oy + j)];
    [
        row(0),
        row(1),
        row(2),
        col(0),
        col(1),
        col(2),
        [(ox, oy), (ox + 1, oy + 1), (ox + 2, oy + 2)],
        [(ox, oy + 2), (ox + 1, oy + 1), (ox + 2, oy)],
    ]
}

/// Side holding three in a row inside small board `(bx, by)`.
fn owner(grid: &Grid, bx: usize, by: usize) -> Option<Symbol> {
    [Symbol::X, Symbol::O].into_iter().find(|&mark| {
        small_lines(3 * bx, 3 * by)
            .iter()
            .any(|line| line.iter().all(|&(x, y)| grid.get(x, y) == mark))
    })
}

fn small_full(grid: &Grid, bx: usize, by: usize) -> bool {
    (0..3).all(|i| (0..3).all(|j| !grid.is_blank(3 * bx + i, 3 * by + j)))
}

/// Blank cell inside a small board nobody has claimed.
fn playable(grid: &Grid, x: usize, y: usize) -> bool {
    grid.is_blank(x, y) && owner(grid, x / 3, y / 3).is_none()
}

impl Ultimate {
    /// Empty board.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(9, 9, Symbol::DOT),
        }
    }

    /// Claim on small board `(bx, by)`, both in `0..3`.
    pub fn owner(&self, bx: usize, by: usize) -> Option<Symbol> {
        owner(&self.grid, bx, by)
    }

    /// The big board: claims, blocked cells for full unclaimed boards.
    pub fn summary(&self) -> Grid {
        let mut summary = Grid::new(3, 3, Symbol::DOT);
        for bx in 0..3 {
            for by in 0..3 {
                match self.owner(bx, by) {
                    Some(mark) => summary.seed(bx, by, mark),
                    None if small_full(&self.grid, bx, by) => {
                        summary.block(bx, by);
                    }
                    None => {}
                }
            }
        }
        summary
    }

    fn has_open_board(&self) -> bool {
        (0..3).any(|bx| (0..3).any(|by| self.owner(bx, by).is_none() && !small_full(&self.grid, bx, by)))
    }
}

impl Default for Ultimate {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for Ultimate {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn apply(&mut self, mv: &Move) -> bool {
        if mv.is_undo(self.grid.blank()) {
            return self.grid.apply_placement(mv, mv.mark);
        }
        if mv.payload != Payload::None || !self.grid.contains(mv.x, mv.y) {
            return false;
        }
        playable(&self.grid, mv.x as usize, mv.y as usize) && self.grid.apply_placement(mv, mv.mark)
    }

    fn is_win(&self, symbol: Symbol) -> bool {
        self.summary().has_run(3, symbol)
    }

    fn is_draw(&self, _symbol: Symbol) -> bool {
        if self.has_open_board() {
            return false;
        }
        let summary = self.summary();
        !summary.has_run(3, Symbol::X) && !summary.has_run(3, Symbol::O)
    }
}

/// Claims weigh far more than small-board shape.
#[derive(Debug, Clone, Copy)]
struct Outlook;

impl Evaluator<Ultimate> for Outlook {
    fn evaluate(&self, board: &Ultimate, own: Symbol, opp: Symbol) -> i32 {
        let windows = WindowCount::new(3);
        16 * windows.score(&board.summary(), own, opp) + windows.score(&board.grid, own, opp)
    }
}

impl Variant for Ultimate {
    const INPUT: InputShape = InputShape::Cell;

    fn setup(_config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::new())
    }

    fn strategy(&self, config: &GameConfig) -> Box<dyn Strategy<Self>> {
        Box::new(
            Searcher::new(Placement::with_rule(playable), Outlook, *config.search_depth())
                .with_node_budget(*config.node_budget()),
        )
    }

    fn rules() -> &'static str {
        "Rows and columns 0-8. Three in a row inside a small board claims it; \
         three claimed boards in a row win."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(board: &mut Ultimate, cells: &[(usize, usize, Symbol)]) {
        for &(x, y, mark) in cells {
            assert!(board.apply(&Move::place(x, y, mark)), "({x}, {y})");
        }
    }

    #[test]
    fn test_claim_closes_small_board() {
        let mut board = Ultimate::new();
        play(&mut board, &[(3, 3, Symbol::X), (0, 0, Symbol::O), (4, 4, Symbol::X)]);
        assert_eq!(board.owner(1, 1), None);
        play(&mut board, &[(0, 1, Symbol::O), (5, 5, Symbol::X)]);
        assert_eq!(board.owner(1, 1), Some(Symbol::X));
        assert!(!board.apply(&Move::place(3, 4, Symbol::O)));
        assert!(!board.is_win(Symbol::X));

        // Undoing the claiming mark reopens the board.
        assert!(board.apply(&Move::undo(5, 5, board.blank())));
        assert_eq!(board.owner(1, 1), None);
        assert!(board.apply(&Move::place(3, 4, Symbol::O)));
    }

    #[test]
    fn test_three_claims_win() {
        let mut board = Ultimate::new();
        for by in 0..3 {
            let oy = 3 * by;
            play(
                &mut board,
                &[(0, oy, Symbol::X), (1, oy, Symbol::X), (2, oy, Symbol::X)],
            );
        }
        assert_eq!(board.summary().get(0, 2), Symbol::X);
        assert!(board.is_win(Symbol::X));
        assert!(!board.is_win(Symbol::O));
        assert!(board.game_is_over(Symbol::X));
    }

    #[test]
    fn test_full_unclaimed_board_blocks_summary() {
        let mut board = Ultimate::new();
        let pattern = [
            [Symbol::X, Symbol::O, Symbol::X],
            [Symbol::X, Symbol::O, Symbol::O],
            [Symbol::O, Symbol::X, Symbol::X],
        ];
        for (i, row) in pattern.iter().enumerate() {
            for (j, &mark) in row.iter().enumerate() {
                play(&mut board, &[(i, j, mark)]);
            }
        }
        assert_eq!(board.owner(0, 0), None);
        assert_eq!(board.summary().get(0, 0), board.summary().obstacle());
    }

    #[test]
    fn test_computer_claims_winning_board() {
        let mut board = Ultimate::new();
        // X owns two small boards on the top band and has two marks in the third.
        for by in 0..2 {
            let oy = 3 * by;
            play(
                &mut board,
                &[(0, oy, Symbol::X), (1, oy, Symbol::X), (2, oy, Symbol::X)],
            );
        }
        play(&mut board, &[(0, 6, Symbol::X), (1, 6, Symbol::X), (4, 4, Symbol::O)]);
        let config = GameConfig::default().with_search_depth(1).unwrap();
        let before = board.clone();
        let outcome = board.strategy(&config).choose(&mut board, Symbol::X).unwrap();
        assert_eq!(board, before);
        assert_eq!(outcome.best, Move::place(2, 6, Symbol::X));
    }
}
