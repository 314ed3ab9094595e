//! Move descriptors.
//!
//! A move is a single state transition: target coordinates, the mark being
//! written and a variant-specific payload. A move whose mark equals the
//! board's blank sentinel is an inverse move (undo). Every board honours this
//! protocol, which is what lets the search engine backtrack over one board.

use super::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Variant-specific extension of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Payload {
    /// Plain placement of the mark.
    None,
    /// Slide the piece at the target one step by `(dx, dy)`.
    Slide {
        /// Row delta.
        dx: i32,
        /// Column delta.
        dy: i32,
    },
    /// Write this value instead of the mark (digits, letters).
    Value(Symbol),
}

/// A single transition on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Row of the target cell.
    pub x: i32,
    /// Column of the target cell.
    pub y: i32,
    /// Mark of the mover, or the blank sentinel for an undo.
    pub mark: Symbol,
    /// Variant-specific payload.
    pub payload: Payload,
}

/// Board coordinate; indices past `i32::MAX` saturate and stay off every board.
fn coordinate(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

impl Move {
    /// Places `mark` at `(x, y)`.
    pub fn place(x: usize, y: usize, mark: Symbol) -> Self {
        Self::new(coordinate(x), coordinate(y), mark, Payload::None)
    }

    /// Writes `value` at `(x, y)` on behalf of `mark`.
    pub fn write(x: usize, y: usize, mark: Symbol, value: Symbol) -> Self {
        Self::new(coordinate(x), coordinate(y), mark, Payload::Value(value))
    }

    /// Slides the piece at `(x, y)` by `(dx, dy)`.
    pub fn slide(x: usize, y: usize, mark: Symbol, dx: i32, dy: i32) -> Self {
        Self::new(coordinate(x), coordinate(y), mark, Payload::Slide { dx, dy })
    }

    /// Clears `(x, y)`; the inverse of a placement.
    pub fn undo(x: i32, y: i32, blank: Symbol) -> Self {
        Self::new(x, y, blank, Payload::None)
    }

    /// True when this move is an inverse move for a board with this blank.
    pub fn is_undo(&self, blank: Symbol) -> bool {
        self.mark == blank
    }

    /// Value written by the move: the payload value, or the mark itself.
    pub fn written(&self) -> Symbol {
        match self.payload {
            Payload::Value(value) => value,
            _ => self.mark,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload {
            Payload::None => write!(f, "{} -> ({}, {})", self.mark, self.x, self.y),
            Payload::Value(value) => {
                write!(f, "{} writes {} -> ({}, {})", self.mark, value, self.x, self.y)
            }
            Payload::Slide { dx, dy } => write!(
                f,
                "{} slides ({}, {}) -> ({}, {})",
                self.mark,
                self.x,
                self.y,
                self.x.saturating_add(dx),
                self.y.saturating_add(dy)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_written_prefers_payload_value() {
        let mv = Move::write(0, 1, Symbol::X, Symbol::new('7'));
        assert_eq!(mv.written(), Symbol::new('7'));
        assert_eq!(Move::place(0, 1, Symbol::O).written(), Symbol::O);
    }

    #[test]
    fn test_oversized_coordinates_saturate() {
        let mv = Move::place(usize::MAX, 0, Symbol::X);
        assert_eq!((mv.x, mv.y), (i32::MAX, 0));
    }

    #[test]
    fn test_display() {
        let mv = Move::slide(0, 0, Symbol::X, 0, 1);
        assert_eq!(mv.to_string(), "X slides (0, 0) -> (0, 1)");
    }

    #[test]
    fn test_undo_protocol() {
        let mv = Move::undo(1, 1, Symbol::DOT);
        assert!(mv.is_undo(Symbol::DOT));
        assert!(!Move::place(1, 1, Symbol::X).is_undo(Symbol::DOT));
    }
}
