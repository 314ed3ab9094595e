//! Playable variants.
//!
//! Each variant is a [`Board`] plus what the console needs to run it: how
//! humans type moves, how the computer searches, and how to build a fresh
//! board from configuration.

mod classic;
mod diamond;
mod five_by_five;
mod four_by_four;
mod four_in_a_row;
mod memory;
mod misere;
mod numerical;
mod obstacles;
mod pyramid;
mod sus;
mod ultimate;
mod words;

pub use classic::Classic;
pub use diamond::Diamond;
pub use five_by_five::FiveByFive;
pub use four_by_four::FourByFour;
pub use four_in_a_row::FourInARow;
pub use memory::Memory;
pub use misere::Misere;
pub use numerical::Numerical;
pub use obstacles::Obstacles;
pub use pyramid::Pyramid;
pub use sus::Sus;
pub use ultimate::Ultimate;
pub use words::Words;

use crate::{ConfigError, GameConfig};
use strictly_grid::{Board, Move, Strategy, Symbol};

/// Shape of a human move entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum InputShape {
    /// `x y`
    #[strum(serialize = "row column")]
    Cell,
    /// `y`
    #[strum(serialize = "column")]
    Column,
    /// `x y v`
    #[strum(serialize = "row column value")]
    CellValue,
    /// `x y d`, with `d` one of U, R, D, L.
    #[strum(serialize = "row column direction(U/R/D/L)")]
    CellDirection,
}

/// A parsed human move entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanInput {
    /// Target cell.
    Cell {
        /// Row.
        x: usize,
        /// Column.
        y: usize,
    },
    /// Target column.
    Column {
        /// Column.
        y: usize,
    },
    /// Target cell and written value.
    CellValue {
        /// Row.
        x: usize,
        /// Column.
        y: usize,
        /// Value, uppercased.
        value: Symbol,
    },
    /// Piece to slide and its step.
    CellDirection {
        /// Row.
        x: usize,
        /// Column.
        y: usize,
        /// Row step.
        dx: i32,
        /// Column step.
        dy: i32,
    },
}

impl InputShape {
    /// Parses a whitespace-separated entry. `None` when malformed.
    pub fn parse(&self, line: &str) -> Option<HumanInput> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let index = |i: usize| {
            parts
                .get(i)
                .and_then(|p| p.parse::<usize>().ok())
                .filter(|&v| i32::try_from(v).is_ok())
        };
        let single = |i: usize| {
            let mut chars = parts.get(i)?.chars();
            let c = chars.next()?;
            chars.next().is_none().then_some(c.to_ascii_uppercase())
        };
        match self {
            Self::Cell if parts.len() == 2 => Some(HumanInput::Cell {
                x: index(0)?,
                y: index(1)?,
            }),
            Self::Column if parts.len() == 1 => Some(HumanInput::Column { y: index(0)? }),
            Self::CellValue if parts.len() == 3 => Some(HumanInput::CellValue {
                x: index(0)?,
                y: index(1)?,
                value: Symbol::new(single(2)?),
            }),
            Self::CellDirection if parts.len() == 3 => {
                let (dx, dy) = match single(2)? {
                    'U' => (-1, 0),
                    'R' => (0, 1),
                    'D' => (1, 0),
                    'L' => (0, -1),
                    _ => return None,
                };
                Some(HumanInput::CellDirection {
                    x: index(0)?,
                    y: index(1)?,
                    dx,
                    dy,
                })
            }
            _ => None,
        }
    }
}

/// A board the console can set up and play.
pub trait Variant: Board + Sized + 'static {
    /// How humans enter moves.
    const INPUT: InputShape;

    /// Builds the starting position.
    fn setup(config: &GameConfig) -> Result<Self, ConfigError>;

    /// Search strategy for computer players on this board.
    fn strategy(&self, config: &GameConfig) -> Box<dyn Strategy<Self>>;

    /// Move for a parsed human entry, or `None` when the entry does not fit.
    fn human_move(&self, input: &HumanInput, mark: Symbol) -> Option<Move> {
        match *input {
            HumanInput::Cell { x, y } => Some(Move::place(x, y, mark)),
            _ => None,
        }
    }

    /// False when `mark` has nothing to play. The console scores that as a draw.
    fn can_move(&self, _mark: Symbol) -> bool {
        true
    }

    /// Rules shown before the first move.
    fn rules() -> &'static str;
}

/// Who wrote each occupied cell, and when.
///
/// Variants that award a line to the player who completed it keep a ledger
/// beside their grid and stamp it on every accepted apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    cols: usize,
    stamps: Vec<Option<(usize, Symbol)>>,
}

impl Ledger {
    /// Empty ledger for a `rows` by `cols` grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            stamps: vec![None; rows * cols],
        }
    }

    /// Records that `mark` wrote `(x, y)` on ply `ply`.
    pub fn record(&mut self, x: usize, y: usize, ply: usize, mark: Symbol) {
        self.stamps[x * self.cols + y] = Some((ply, mark));
    }

    /// Forgets the writer of `(x, y)`.
    pub fn erase(&mut self, x: usize, y: usize) {
        self.stamps[x * self.cols + y] = None;
    }

    /// Writer of `(x, y)`.
    pub fn writer(&self, x: usize, y: usize) -> Option<Symbol> {
        self.stamps[x * self.cols + y].map(|(_, mark)| mark)
    }

    /// Writer of the most recent cell of `line`, when every cell is written.
    pub fn completer(&self, line: &[(usize, usize)]) -> Option<Symbol> {
        let mut last: Option<(usize, Symbol)> = None;
        for &(x, y) in line {
            let stamp = self.stamps[x * self.cols + y]?;
            if last.is_none_or(|(ply, _)| stamp.0 > ply) {
                last = Some(stamp);
            }
        }
        last.map(|(_, mark)| mark)
    }
}

/// Apply with ledger bookkeeping for placement boards.
///
/// `written` is stored in the cell; `mv.mark` is credited in the ledger.
pub(crate) fn apply_recorded(
    grid: &mut strictly_grid::Grid,
    ledger: &mut Ledger,
    mv: &Move,
    written: Symbol,
) -> bool {
    let ply = grid.move_count();
    if !grid.apply_placement(mv, written) {
        return false;
    }
    let (x, y) = (mv.x as usize, mv.y as usize);
    if mv.is_undo(grid.blank()) {
        ledger.erase(x, y);
    } else {
        ledger.record(x, y, ply, mv.mark);
    }
    true
}
