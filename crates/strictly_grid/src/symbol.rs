//! Cell values.

use serde::{Deserialize, Serialize};

/// The value stored in a single board cell.
///
/// A symbol is either a player's mark, a written value (digit or letter),
/// the board's blank sentinel, or its obstacle sentinel. Only equality is
/// meaningful.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
pub struct Symbol(char);

impl Symbol {
    /// Player X.
    pub const X: Symbol = Symbol('X');
    /// Player O.
    pub const O: Symbol = Symbol('O');
    /// Conventional blank cell.
    pub const DOT: Symbol = Symbol('.');
    /// Conventional obstacle cell.
    pub const BLOCK: Symbol = Symbol('#');

    /// Wraps a character.
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    /// Returns the underlying character.
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Uppercased copy, used to normalize human input.
    pub fn to_ascii_uppercase(self) -> Self {
        Self(self.0.to_ascii_uppercase())
    }

    /// Numeric value for digit symbols.
    pub fn digit(self) -> Option<u32> {
        self.0.to_digit(10)
    }
}

/// Opponent resolver for the X/O mark pair.
pub fn opponent_of(symbol: Symbol) -> Symbol {
    if symbol == Symbol::X { Symbol::O } else { Symbol::X }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_of() {
        assert_eq!(opponent_of(Symbol::X), Symbol::O);
        assert_eq!(opponent_of(Symbol::O), Symbol::X);
    }

    #[test]
    fn test_digit() {
        assert_eq!(Symbol::new('7').digit(), Some(7));
        assert_eq!(Symbol::X.digit(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbol::from('s').to_ascii_uppercase().to_string(), "S");
    }
}
