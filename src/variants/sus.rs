//! SUS: spell S-U-S along lines and collect points.

use super::{HumanInput, InputShape, Ledger, Variant, apply_recorded};
use crate::{ConfigError, GameConfig};
use strictly_grid::{Board, Evaluator, Grid, LetterPlacement, Move, Payload, Searcher, Strategy, Symbol, opponent_of};

const S: Symbol = Symbol::new('S');
const U: Symbol = Symbol::new('U');
const PATTERN: [Symbol; 3] = [S, U, S];

/// 3x3 board where both players write S or U.
///
/// Every line reading S-U-S scores a point for whoever wrote its last letter.
/// When the board is full the higher score wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sus {
    grid: Grid,
    ledger: Ledger,
}

impl Sus {
    /// Empty board.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(3, 3, Symbol::DOT),
            ledger: Ledger::new(3, 3),
        }
    }

    /// Points scored by `symbol` so far.
    pub fn score(&self, symbol: Symbol) -> usize {
        self.grid
            .lines(3)
            .iter()
            .filter(|line| spells_sus(&self.grid, line) && self.ledger.completer(line) == Some(symbol))
            .count()
    }
}

fn spells_sus(grid: &Grid, line: &[(usize, usize)]) -> bool {
    line.iter().zip(PATTERN).all(|(&(x, y), letter)| grid.get(x, y) == letter)
}

impl Default for Sus {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for Sus {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn apply(&mut self, mv: &Move) -> bool {
        if mv.is_undo(self.grid.blank()) {
            return apply_recorded(&mut self.grid, &mut self.ledger, mv, mv.mark);
        }
        match mv.payload {
            Payload::Value(letter) if letter == S || letter == U => {
                apply_recorded(&mut self.grid, &mut self.ledger, mv, letter)
            }
            _ => false,
        }
    }

    fn is_win(&self, symbol: Symbol) -> bool {
        self.grid.is_full() && self.score(symbol) > self.score(opponent_of(symbol))
    }

    fn is_draw(&self, symbol: Symbol) -> bool {
        self.grid.is_full() && self.score(symbol) == self.score(opponent_of(symbol))
    }

    fn game_is_over(&self, _symbol: Symbol) -> bool {
        self.grid.is_full()
    }
}

/// Points already banked, plus lines one letter short of S-U-S credited to
/// the side moving next.
#[derive(Debug, Clone, Copy, Default)]
struct OpenPatterns;

impl Evaluator<Sus> for OpenPatterns {
    fn evaluate(&self, board: &Sus, own: Symbol, opp: Symbol) -> i32 {
        let grid = board.grid();
        let banked = board.score(own) as i32 - board.score(opp) as i32;
        let to_move = if grid.move_count() % 2 == 0 { Symbol::X } else { Symbol::O };
        let sign = if to_move == own { 1 } else { -1 };
        let open = grid
            .lines(3)
            .iter()
            .filter(|line| {
                let mut blanks = 0;
                let fits = line.iter().zip(PATTERN).all(|(&(x, y), letter)| {
                    let c = grid.get(x, y);
                    if c == grid.blank() {
                        blanks += 1;
                        true
                    } else {
                        c == letter
                    }
                });
                fits && blanks == 1
            })
            .count() as i32;
        64 * banked + sign * 4 * open
    }
}

impl Variant for Sus {
    const INPUT: InputShape = InputShape::CellValue;

    fn setup(_config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::new())
    }

    fn strategy(&self, config: &GameConfig) -> Box<dyn Strategy<Self>> {
        Box::new(
            Searcher::new(LetterPlacement::new(vec![S, U]), OpenPatterns, *config.search_depth())
                .with_node_budget(*config.node_budget()),
        )
    }

    fn human_move(&self, input: &HumanInput, mark: Symbol) -> Option<Move> {
        match *input {
            HumanInput::CellValue { x, y, value } => Some(Move::write(x, y, mark, value)),
            _ => None,
        }
    }

    fn rules() -> &'static str {
        "Write S or U. Each S-U-S you complete scores a point; most points on a full board wins."
    }
}
