//! Static position evaluators for depth-limited search.
//!
//! Scores are positive when `own` is better placed. The search clamps every
//! result to [`MAX_HEURISTIC`](super::MAX_HEURISTIC), so terminal scores
//! always dominate. The stock evaluators read only the grid and work on any
//! board; variants with scoring state implement [`Evaluator`] for their own
//! board type.

use super::{Board, DIRECTIONS, Grid, Symbol};

/// Scores a non-terminal position of a `B` board.
pub trait Evaluator<B: ?Sized> {
    /// Positive when `own` stands better than `opp`.
    fn evaluate(&self, board: &B, own: Symbol, opp: Symbol) -> i32;
}

impl<B: ?Sized, E1: Evaluator<B>, E2: Evaluator<B>> Evaluator<B> for (E1, E2) {
    fn evaluate(&self, board: &B, own: Symbol, opp: Symbol) -> i32 {
        self.0
            .evaluate(board, own, opp)
            .saturating_add(self.1.evaluate(board, own, opp))
    }
}

/// Always zero. Search then relies on terminal scores alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flat;

impl<B: ?Sized> Evaluator<B> for Flat {
    fn evaluate(&self, _board: &B, _own: Symbol, _opp: Symbol) -> i32 {
        0
    }
}

/// Open-window counting.
///
/// Every `span`-long window in the four line directions that holds pieces of
/// only one side scores `4^(k-1)` for `k` pieces, signed by the owner.
/// Windows touching an obstacle or holding both sides are dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowCount {
    span: usize,
}

impl WindowCount {
    /// Counts windows of `span` cells.
    pub fn new(span: usize) -> Self {
        Self { span }
    }

    /// Window length.
    pub fn span(&self) -> usize {
        self.span
    }

    fn weight(pieces: usize) -> i32 {
        match pieces {
            0 => 0,
            k => 1 << (2 * (k.min(8) - 1)),
        }
    }

    /// Window score of `grid` for `own` against `opp`.
    pub fn score(&self, grid: &Grid, own: Symbol, opp: Symbol) -> i32 {
        let mut score = 0i32;
        for x in 0..grid.rows() {
            for y in 0..grid.cols() {
                for dir in DIRECTIONS {
                    let Some(cells) = grid.window(x, y, dir, self.span) else {
                        continue;
                    };
                    let (mut mine, mut theirs, mut dead) = (0, 0, false);
                    for c in cells {
                        if c == own {
                            mine += 1;
                        } else if c == opp {
                            theirs += 1;
                        } else if c != grid.blank() {
                            dead = true;
                        }
                    }
                    if dead || (mine > 0 && theirs > 0) {
                        continue;
                    }
                    score = score
                        .saturating_add(Self::weight(mine))
                        .saturating_sub(Self::weight(theirs));
                }
            }
        }
        score
    }
}

impl<B: Board + ?Sized> Evaluator<B> for WindowCount {
    fn evaluate(&self, board: &B, own: Symbol, opp: Symbol) -> i32 {
        self.score(board.grid(), own, opp)
    }
}

/// Positional weight favouring cells near the centre.
///
/// A piece scores `reach - manhattan_distance_to_centre`, where `reach` is the
/// largest distance on the grid, so corner pieces of a square grid score 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterWeight;

impl CenterWeight {
    /// Centre score of `grid` for `own` against `opp`.
    pub fn score(&self, grid: &Grid, own: Symbol, opp: Symbol) -> i32 {
        let (cx, cy) = (grid.rows() as i32 - 1, grid.cols() as i32 - 1);
        // Doubled coordinates keep even-sized centres integral.
        let reach = cx + cy;
        grid.iter()
            .map(|(x, y, c)| {
                let dist = (2 * x as i32 - cx).abs() + (2 * y as i32 - cy).abs();
                let weight = reach - dist;
                if c == own {
                    weight
                } else if c == opp {
                    -weight
                } else {
                    0
                }
            })
            .sum()
    }
}

impl<B: Board + ?Sized> Evaluator<B> for CenterWeight {
    fn evaluate(&self, board: &B, own: Symbol, opp: Symbol) -> i32 {
        self.score(board.grid(), own, opp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    fn grid_with(pieces: &[(usize, usize, Symbol)]) -> Grid {
        let mut grid = Grid::new(3, 3, Symbol::DOT);
        for &(x, y, s) in pieces {
            assert!(grid.apply_placement(&Move::place(x, y, s), s));
        }
        grid
    }

    #[test]
    fn test_window_count_is_antisymmetric() {
        let grid = grid_with(&[(1, 1, Symbol::X), (0, 0, Symbol::O)]);
        let eval = WindowCount::new(3);
        let x = eval.score(&grid, Symbol::X, Symbol::O);
        let o = eval.score(&grid, Symbol::O, Symbol::X);
        assert_eq!(x, -o);
        // Centre opens 3 lines once the diagonal is contested; corner opens 2.
        assert_eq!(x, 1);
    }

    #[test]
    fn test_window_count_rewards_longer_runs() {
        let eval = WindowCount::new(3);
        let one = grid_with(&[(0, 0, Symbol::X)]);
        let two = grid_with(&[(0, 0, Symbol::X), (0, 1, Symbol::X)]);
        assert!(eval.score(&two, Symbol::X, Symbol::O) > eval.score(&one, Symbol::X, Symbol::O));
    }

    #[test]
    fn test_obstacles_kill_windows() {
        let mut grid = Grid::new(1, 3, Symbol::DOT);
        grid.apply_placement(&Move::place(0, 0, Symbol::X), Symbol::X);
        assert_eq!(WindowCount::new(3).score(&grid, Symbol::X, Symbol::O), 1);
        grid.block(0, 2);
        assert_eq!(WindowCount::new(3).score(&grid, Symbol::X, Symbol::O), 0);
    }

    #[test]
    fn test_center_weight() {
        let centre = grid_with(&[(1, 1, Symbol::X)]);
        let corner = grid_with(&[(0, 0, Symbol::X)]);
        let edge = grid_with(&[(0, 1, Symbol::X)]);
        let score = |g: &Grid| CenterWeight.score(g, Symbol::X, Symbol::O);
        assert!(score(&centre) > score(&edge));
        assert!(score(&edge) > score(&corner));
        assert_eq!(score(&corner), 0);
    }

    struct Bonus;

    impl Evaluator<Grid> for Bonus {
        fn evaluate(&self, _grid: &Grid, _own: Symbol, _opp: Symbol) -> i32 {
            10
        }
    }

    struct Windows;

    impl Evaluator<Grid> for Windows {
        fn evaluate(&self, grid: &Grid, own: Symbol, opp: Symbol) -> i32 {
            WindowCount::new(3).score(grid, own, opp)
        }
    }

    #[test]
    fn test_pair_sums() {
        let grid = grid_with(&[(1, 1, Symbol::X)]);
        let pair = (Windows, Bonus);
        assert_eq!(
            pair.evaluate(&grid, Symbol::X, Symbol::O),
            WindowCount::new(3).score(&grid, Symbol::X, Symbol::O) + 10
        );
        assert_eq!(Evaluator::<Grid>::evaluate(&Flat, &grid, Symbol::X, Symbol::O), 0);
    }
}
