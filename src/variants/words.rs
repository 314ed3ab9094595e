//! Word tic-tac-toe: spell a word along a line.

use super::{HumanInput, InputShape, Ledger, Variant, apply_recorded};
use crate::{ConfigError, GameConfig, Lexicon};
use std::rc::Rc;
use strictly_grid::{Board, Evaluator, Grid, LetterPlacement, Move, Payload, Searcher, Strategy, Symbol};

/// Letters a player may write.
pub fn alphabet() -> Vec<Symbol> {
    ('A'..='Z').map(Symbol::new).collect()
}

/// 3x3 board where either player writes any letter.
///
/// Reading a row left to right, a column top to bottom or a diagonal top to
/// bottom, a dictionary word wins for whoever wrote its last letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Words {
    grid: Grid,
    ledger: Ledger,
    lexicon: Rc<Lexicon>,
}

impl Words {
    /// Empty board checking words against `lexicon`.
    pub fn new(lexicon: Rc<Lexicon>) -> Self {
        Self {
            grid: Grid::new(3, 3, Symbol::DOT),
            ledger: Ledger::new(3, 3),
            lexicon,
        }
    }

    fn spelled(grid: &Grid, line: &[(usize, usize)]) -> Option<String> {
        line.iter()
            .map(|&(x, y)| {
                let c = grid.get(x, y);
                (c != grid.blank()).then_some(c.as_char())
            })
            .collect()
    }
}

impl Board for Words {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn apply(&mut self, mv: &Move) -> bool {
        if mv.is_undo(self.grid.blank()) {
            return apply_recorded(&mut self.grid, &mut self.ledger, mv, mv.mark);
        }
        match mv.payload {
            Payload::Value(letter) if letter.as_char().is_ascii_uppercase() => {
                apply_recorded(&mut self.grid, &mut self.ledger, mv, letter)
            }
            _ => false,
        }
    }

    fn is_win(&self, symbol: Symbol) -> bool {
        self.grid.lines(3).iter().any(|line| {
            Self::spelled(&self.grid, line).is_some_and(|word| self.lexicon.contains(&word))
                && self.ledger.completer(line) == Some(symbol)
        })
    }

    fn is_draw(&self, _symbol: Symbol) -> bool {
        self.grid.is_full() && !self.is_win(Symbol::X) && !self.is_win(Symbol::O)
    }
}

/// Lines one letter away from a word, credited to the side moving next.
#[derive(Debug, Clone)]
struct NearWords {
    lexicon: Rc<Lexicon>,
}

impl NearWords {
    fn completable(&self, grid: &Grid, line: &[(usize, usize)]) -> bool {
        let cells: Vec<Symbol> = line.iter().map(|&(x, y)| grid.get(x, y)).collect();
        let blanks = cells.iter().filter(|&&c| c == grid.blank()).count();
        if blanks != 1 {
            return false;
        }
        let prefix: String = cells
            .iter()
            .take_while(|&&c| c != grid.blank())
            .map(|c| c.as_char())
            .collect();
        if !prefix.is_empty() && !self.lexicon.extends(&prefix) {
            return false;
        }
        ('A'..='Z').any(|letter| {
            let word: String = cells
                .iter()
                .map(|&c| if c == grid.blank() { letter } else { c.as_char() })
                .collect();
            self.lexicon.contains(&word)
        })
    }
}

impl Evaluator<Words> for NearWords {
    fn evaluate(&self, board: &Words, own: Symbol, _opp: Symbol) -> i32 {
        let grid = board.grid();
        let threats = grid.lines(3).iter().filter(|line| self.completable(grid, line)).count() as i32;
        let to_move = if grid.move_count() % 2 == 0 { Symbol::X } else { Symbol::O };
        if to_move == own { 10 * threats } else { -10 * threats }
    }
}

impl Variant for Words {
    const INPUT: InputShape = InputShape::CellValue;

    fn setup(config: &GameConfig) -> Result<Self, ConfigError> {
        let lexicon = Lexicon::load(config.dictionary().as_deref())?;
        Ok(Self::new(Rc::new(lexicon)))
    }

    fn strategy(&self, config: &GameConfig) -> Box<dyn Strategy<Self>> {
        let evaluator = NearWords {
            lexicon: Rc::clone(&self.lexicon),
        };
        Box::new(
            Searcher::new(LetterPlacement::new(alphabet()), evaluator, *config.search_depth())
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
        "Write any letter. Spelling a three-letter word along a row, column or diagonal wins."
    }
}
