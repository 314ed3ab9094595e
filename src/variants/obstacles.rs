//! Four in a row on a 6x6 board that fills with obstacles.

use super::{InputShape, Variant};
use crate::{ConfigError, GameConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strictly_grid::{Board, Grid, Move, Payload, Placement, Searcher, Strategy, Symbol, WindowCount};
use tracing::debug;

/// Obstacles dropped after each full round.
pub const OBSTACLES_PER_ROUND: usize = 2;

/// 6x6 board where every second ply adds two random obstacles.
///
/// Obstacles are placed by [`Board::end_turn`], which only the console calls,
/// so search always sees a fixed set of obstacles.
#[derive(Debug, Clone)]
pub struct Obstacles {
    grid: Grid,
    rng: StdRng,
}

impl Obstacles {
    /// Empty board with a seeded obstacle generator.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Empty board with an OS-seeded obstacle generator.
    pub fn random() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            grid: Grid::new(6, 6, Symbol::DOT),
            rng,
        }
    }

    fn spawn_obstacles(&mut self) {
        let mut open: Vec<(usize, usize)> = self
            .grid
            .iter()
            .filter(|&(_, _, c)| c == self.grid.blank())
            .map(|(x, y, _)| (x, y))
            .collect();
        for _ in 0..OBSTACLES_PER_ROUND {
            if open.is_empty() {
                break;
            }
            let (x, y) = open.swap_remove(self.rng.random_range(0..open.len()));
            self.grid.block(x, y);
            debug!(x, y, "obstacle placed");
        }
    }
}

impl Board for Obstacles {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn apply(&mut self, mv: &Move) -> bool {
        mv.payload == Payload::None && self.grid.apply_placement(mv, mv.mark)
    }

    fn is_win(&self, symbol: Symbol) -> bool {
        self.grid.has_run(4, symbol)
    }

    fn is_draw(&self, _symbol: Symbol) -> bool {
        self.grid.is_full() && !self.is_win(Symbol::X) && !self.is_win(Symbol::O)
    }

    fn end_turn(&mut self) {
        let plies = self.grid.move_count();
        if plies > 0 && plies % 2 == 0 {
            self.spawn_obstacles();
        }
    }
}

impl Variant for Obstacles {
    const INPUT: InputShape = InputShape::Cell;

    fn setup(config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(match config.obstacle_seed() {
            Some(seed) => Self::seeded(*seed),
            None => Self::random(),
        })
    }

    fn strategy(&self, config: &GameConfig) -> Box<dyn Strategy<Self>> {
        Box::new(Searcher::new(Placement::anywhere(), WindowCount::new(4), *config.search_depth()))
    }

    fn rules() -> &'static str {
        "Four in a row wins. After every round two obstacles (#) appear on empty cells."
    }
}
