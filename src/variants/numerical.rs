//! Numerical tic-tac-toe: lines that sum to fifteen.

use super::{HumanInput, InputShape, Ledger, Variant, apply_recorded};
use crate::{ConfigError, GameConfig};
use strictly_grid::{
    Board, ConsumableValues, Evaluator, Grid, Move, Payload, Searcher, Strategy, Symbol, ValuePlacement, ValuePool,
};

/// Sum a completed line must reach.
pub const TARGET: u32 = 15;

/// 3x3 board where X writes odd digits and O writes even ones.
///
/// Each digit can be used once. A full line summing to [`TARGET`] wins for
/// whoever wrote its last digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numerical {
    grid: Grid,
    pool: ValuePool,
    ledger: Ledger,
}

fn digits(values: &str) -> Vec<Symbol> {
    values.chars().map(Symbol::new).collect()
}

impl Numerical {
    /// Empty board with full digit sets.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(3, 3, Symbol::new('0')),
            pool: ValuePool::new(vec![(Symbol::X, digits("13579")), (Symbol::O, digits("2468"))]),
            ledger: Ledger::new(3, 3),
        }
    }

    /// Digits `mark` has not written yet.
    pub fn remaining(&self, mark: Symbol) -> &[Symbol] {
        self.pool.remaining(mark)
    }

    fn sum(&self, line: &[(usize, usize)]) -> Option<u32> {
        line.iter()
            .map(|&(x, y)| match self.grid.get(x, y) {
                c if c == self.grid.blank() => None,
                c => c.digit(),
            })
            .sum()
    }
}

impl Default for Numerical {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsumableValues for Numerical {
    fn pool(&self) -> &ValuePool {
        &self.pool
    }
}

impl Board for Numerical {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn apply(&mut self, mv: &Move) -> bool {
        if mv.is_undo(self.grid.blank()) {
            let Some(value) = self.grid.at(mv.x, mv.y) else {
                return false;
            };
            if !self.pool.is_spent(value) || !apply_recorded(&mut self.grid, &mut self.ledger, mv, mv.mark) {
                return false;
            }
            return self.pool.restore(value);
        }
        let Payload::Value(value) = mv.payload else {
            return false;
        };
        if !self.pool.take(mv.mark, value) {
            return false;
        }
        if apply_recorded(&mut self.grid, &mut self.ledger, mv, value) {
            true
        } else {
            self.pool.restore(value);
            false
        }
    }

    fn is_win(&self, symbol: Symbol) -> bool {
        self.grid
            .lines(3)
            .iter()
            .any(|line| self.sum(line) == Some(TARGET) && self.ledger.completer(line) == Some(symbol))
    }

    fn is_draw(&self, _symbol: Symbol) -> bool {
        self.grid.is_full() && !self.is_win(Symbol::X) && !self.is_win(Symbol::O)
    }
}

/// Open lines one digit short of fifteen, credited to whoever can supply it.
///
/// Digits on the grid are spent; parity tells who owns the rest. The side to
/// move next is read from the ply parity with X moving first.
#[derive(Debug, Clone, Copy, Default)]
struct SumThreats;

impl SumThreats {
    fn owner(digit: u32) -> Symbol {
        if digit % 2 == 1 { Symbol::X } else { Symbol::O }
    }
}

impl Evaluator<Numerical> for SumThreats {
    fn evaluate(&self, board: &Numerical, own: Symbol, opp: Symbol) -> i32 {
        let grid = board.grid();
        let used: Vec<u32> = grid.iter().filter_map(|(_, _, c)| c.digit()).filter(|&d| d > 0).collect();
        let to_move = if grid.move_count() % 2 == 0 { Symbol::X } else { Symbol::O };
        let mut score = 0;
        for line in grid.lines(3) {
            let filled: Vec<u32> = line
                .iter()
                .filter_map(|&(x, y)| grid.get(x, y).digit())
                .filter(|&d| d > 0)
                .collect();
            if filled.len() != 2 {
                continue;
            }
            let need = TARGET as i64 - filled.iter().sum::<u32>() as i64;
            if !(1..=9).contains(&need) || used.contains(&(need as u32)) {
                continue;
            }
            let holder = Self::owner(need as u32);
            let weight = if holder == to_move { 8 } else { 1 };
            if holder == own {
                score += weight;
            } else if holder == opp {
                score -= weight;
            }
        }
        score
    }
}

impl Variant for Numerical {
    const INPUT: InputShape = InputShape::CellValue;

    fn setup(_config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::new())
    }

    fn strategy(&self, config: &GameConfig) -> Box<dyn Strategy<Self>> {
        Box::new(Searcher::new(ValuePlacement, SumThreats, *config.search_depth()))
    }

    fn human_move(&self, input: &HumanInput, mark: Symbol) -> Option<Move> {
        match *input {
            HumanInput::CellValue { x, y, value } => Some(Move::write(x, y, mark, value)),
            _ => None,
        }
    }

    fn rules() -> &'static str {
        "X writes odd digits 1-9, O writes even digits 2-8, each once. \
         Completing a line that sums to 15 wins."
    }
}
