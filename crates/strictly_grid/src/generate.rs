//! Move generation strategies.
//!
//! Placement games target blank cells; transformation games target cells
//! holding the mover's own piece. Both fit the same shape: a per-cell
//! legality predicate, an expansion into concrete moves, and an inverse.

use super::{Board, Grid, Move, ORTHOGONAL, Payload, Symbol, ValuePool};

/// Candidate enumeration for one variant.
pub trait MoveGenerator<B: ?Sized> {
    /// True when `(x, y)` is a legal target for `mover`.
    fn condition(&self, board: &B, x: usize, y: usize, mover: Symbol) -> bool;

    /// Pushes every admissible move for `mover` at `(x, y)`.
    fn expand(&self, board: &B, x: usize, y: usize, mover: Symbol, out: &mut Vec<Move>);

    /// Inverse of `applied`, computed from the move alone.
    fn inverse(&self, board: &B, applied: &Move) -> Move;
}

/// All candidates for `mover`: row-major over cells, then expansion order.
pub fn candidates<B, G>(generator: &G, board: &B, mover: Symbol) -> Vec<Move>
where
    B: Board + ?Sized,
    G: MoveGenerator<B> + ?Sized,
{
    let mut out = Vec::new();
    for x in 0..board.rows() {
        for y in 0..board.cols() {
            if generator.condition(board, x, y, mover) {
                generator.expand(board, x, y, mover, &mut out);
            }
        }
    }
    out
}

/// First move of the first legal cell in row-major order.
pub fn first_legal<B, G>(generator: &G, board: &B, mover: Symbol) -> Option<Move>
where
    B: Board + ?Sized,
    G: MoveGenerator<B> + ?Sized,
{
    let mut out = Vec::new();
    for x in 0..board.rows() {
        for y in 0..board.cols() {
            if generator.condition(board, x, y, mover) {
                generator.expand(board, x, y, mover, &mut out);
                if let Some(mv) = out.first() {
                    return Some(*mv);
                }
            }
        }
    }
    None
}

/// Legality predicate over cell contents.
pub type CellRule = fn(&Grid, usize, usize) -> bool;

/// Blank, in-bounds cell.
pub fn blank_cell(grid: &Grid, x: usize, y: usize) -> bool {
    grid.is_blank(x, y)
}

/// Blank cell resting on the bottom row or on an occupied cell.
pub fn gravity_cell(grid: &Grid, x: usize, y: usize) -> bool {
    grid.is_blank(x, y) && (x + 1 == grid.rows() || !grid.is_blank(x + 1, y))
}

/// One mark per legal cell.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    rule: CellRule,
}

impl Placement {
    /// Any blank cell is legal.
    pub fn anywhere() -> Self {
        Self { rule: blank_cell }
    }

    /// Cells accepted by `rule` are legal.
    pub fn with_rule(rule: CellRule) -> Self {
        Self { rule }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::anywhere()
    }
}

impl<B: Board + ?Sized> MoveGenerator<B> for Placement {
    fn condition(&self, board: &B, x: usize, y: usize, _mover: Symbol) -> bool {
        (self.rule)(board.grid(), x, y)
    }

    fn expand(&self, _board: &B, x: usize, y: usize, mover: Symbol, out: &mut Vec<Move>) {
        out.push(Move::place(x, y, mover));
    }

    fn inverse(&self, board: &B, applied: &Move) -> Move {
        Move::undo(applied.x, applied.y, board.blank())
    }
}

/// Fixed alphabet written into blank cells (letter games).
#[derive(Debug, Clone)]
pub struct LetterPlacement {
    letters: Vec<Symbol>,
}

impl LetterPlacement {
    /// Offers every letter in `letters`, in order, at each blank cell.
    pub fn new(letters: Vec<Symbol>) -> Self {
        Self { letters }
    }

    /// Letters on offer.
    pub fn letters(&self) -> &[Symbol] {
        &self.letters
    }
}

impl<B: Board + ?Sized> MoveGenerator<B> for LetterPlacement {
    fn condition(&self, board: &B, x: usize, y: usize, _mover: Symbol) -> bool {
        board.grid().is_blank(x, y)
    }

    fn expand(&self, _board: &B, x: usize, y: usize, mover: Symbol, out: &mut Vec<Move>) {
        out.extend(self.letters.iter().map(|&letter| Move::write(x, y, mover, letter)));
    }

    fn inverse(&self, board: &B, applied: &Move) -> Move {
        Move::undo(applied.x, applied.y, board.blank())
    }
}

/// Boards that own a consumable set of values per mark.
pub trait ConsumableValues {
    /// Value pool of the board.
    fn pool(&self) -> &ValuePool;
}

/// Placement ranging over the mover's unused values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValuePlacement;

impl<B: Board + ConsumableValues + ?Sized> MoveGenerator<B> for ValuePlacement {
    fn condition(&self, board: &B, x: usize, y: usize, _mover: Symbol) -> bool {
        board.grid().is_blank(x, y)
    }

    fn expand(&self, board: &B, x: usize, y: usize, mover: Symbol, out: &mut Vec<Move>) {
        out.extend(board.pool().remaining(mover).iter().map(|&value| Move::write(x, y, mover, value)));
    }

    fn inverse(&self, board: &B, applied: &Move) -> Move {
        Move::undo(applied.x, applied.y, board.blank())
    }
}

/// Single-step orthogonal slides of the mover's own pieces.
#[derive(Debug, Clone, Copy, Default)]
pub struct Slide;

impl<B: Board + ?Sized> MoveGenerator<B> for Slide {
    fn condition(&self, board: &B, x: usize, y: usize, mover: Symbol) -> bool {
        board.cell(x, y) == mover
    }

    fn expand(&self, board: &B, x: usize, y: usize, mover: Symbol, out: &mut Vec<Move>) {
        let grid = board.grid();
        for (dx, dy) in ORTHOGONAL {
            let (tx, ty) = (x as i32 + dx, y as i32 + dy);
            if grid.at(tx, ty) == Some(grid.blank()) {
                out.push(Move::slide(x, y, mover, dx, dy));
            }
        }
    }

    fn inverse(&self, board: &B, applied: &Move) -> Move {
        let (dx, dy) = match applied.payload {
            Payload::Slide { dx, dy } => (dx, dy),
            _ => (0, 0),
        };
        Move::new(applied.x + dx, applied.y + dy, board.blank(), Payload::Slide { dx: -dx, dy: -dy })
    }
}
