//! The playable variant list and dispatch into typed matches.

use crate::console::Console;
use crate::orchestrator::{Match, Outcome};
use crate::variants::{
    Classic, Diamond, FiveByFive, FourByFour, FourInARow, Memory, Misere, Numerical, Obstacles, Pyramid, Sus,
    Ultimate, Variant, Words,
};
use crate::{GameConfig, GameError};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use strictly_grid::{Player, PlayerKind, Symbol};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Every variant the console can run, in menu order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum VariantId {
    /// 3x3, three in a row.
    Classic,
    /// 3x3, three in a row loses.
    Misere,
    /// 4x4 slide game.
    FourByFour,
    /// 5x5, most triples after 24 marks.
    FiveByFive,
    /// Nine-cell pyramid.
    Pyramid,
    /// 6x7 gravity board, four in a row.
    FourInARow,
    /// 25-cell diamond, four plus three.
    Diamond,
    /// 6x6 with spawning obstacles.
    Obstacles,
    /// Odd against even digits, lines of fifteen.
    Numerical,
    /// Three-letter words.
    Words,
    /// S-U-S points.
    Sus,
    /// Classic with hidden marks.
    Memory,
    /// Nine small boards inside a big one.
    Ultimate,
}

impl VariantId {
    /// All variants in menu order.
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    /// One-line rules.
    pub fn rules(self) -> &'static str {
        match self {
            Self::Classic => Classic::rules(),
            Self::Misere => Misere::rules(),
            Self::FourByFour => FourByFour::rules(),
            Self::FiveByFive => FiveByFive::rules(),
            Self::Pyramid => Pyramid::rules(),
            Self::FourInARow => FourInARow::rules(),
            Self::Diamond => Diamond::rules(),
            Self::Obstacles => Obstacles::rules(),
            Self::Numerical => Numerical::rules(),
            Self::Words => Words::rules(),
            Self::Sus => Sus::rules(),
            Self::Memory => Memory::rules(),
            Self::Ultimate => Ultimate::rules(),
        }
    }

    /// Sets up and plays one game of this variant.
    ///
    /// # Errors
    ///
    /// Fails when setup fails (for example an unreadable dictionary) or the
    /// match itself fails.
    #[instrument(skip(config, console))]
    pub fn play<R: BufRead, W: Write>(
        self,
        config: &GameConfig,
        x: PlayerKind,
        o: PlayerKind,
        console: &mut Console<R, W>,
    ) -> Result<Outcome, GameError> {
        match self {
            Self::Classic => run::<Classic, _, _>(config, x, o, console),
            Self::Misere => run::<Misere, _, _>(config, x, o, console),
            Self::FourByFour => run::<FourByFour, _, _>(config, x, o, console),
            Self::FiveByFive => run::<FiveByFive, _, _>(config, x, o, console),
            Self::Pyramid => run::<Pyramid, _, _>(config, x, o, console),
            Self::FourInARow => run::<FourInARow, _, _>(config, x, o, console),
            Self::Diamond => run::<Diamond, _, _>(config, x, o, console),
            Self::Obstacles => run::<Obstacles, _, _>(config, x, o, console),
            Self::Numerical => run::<Numerical, _, _>(config, x, o, console),
            Self::Words => run::<Words, _, _>(config, x, o, console),
            Self::Sus => run::<Sus, _, _>(config, x, o, console),
            Self::Memory => run::<Memory, _, _>(config, x, o, console),
            Self::Ultimate => run::<Ultimate, _, _>(config, x, o, console),
        }
    }
}

fn run<B: Variant, R: BufRead, W: Write>(
    config: &GameConfig,
    x: PlayerKind,
    o: PlayerKind,
    console: &mut Console<R, W>,
) -> Result<Outcome, GameError> {
    let board = B::setup(config)?;
    let first = player(&board, config, x, Symbol::X);
    let second = player(&board, config, o, Symbol::O);
    Match::new(board, first, second).play(console)
}

fn player<B: Variant>(board: &B, config: &GameConfig, kind: PlayerKind, symbol: Symbol) -> Player<B> {
    match kind {
        PlayerKind::Human => Player::human("Human", symbol),
        PlayerKind::Computer => Player::computer("Computer", symbol, board.strategy(config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_names_round_trip() {
        assert_eq!(VariantId::all().len(), 13);
        for id in VariantId::all() {
            assert_eq!(VariantId::from_str(&id.to_string()).unwrap(), id);
            assert!(!id.rules().is_empty());
        }
        assert_eq!(VariantId::FourInARow.to_string(), "four-in-a-row");
        assert_eq!(VariantId::from_str("SUS").unwrap(), VariantId::Sus);
        assert!(VariantId::from_str("infinity").is_err());
    }
}
