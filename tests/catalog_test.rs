//! Tests for the variant catalog and every board's computer strategy.

use std::io::Cursor;
use strictly_grid::{PlayerKind, Symbol};
use strictly_xo::variants::{
    Classic, Diamond, FiveByFive, FourByFour, FourInARow, Memory, Misere, Numerical, Obstacles, Pyramid, Sus,
    Ultimate, Variant, Words,
};
use strictly_xo::{Console, GameConfig, Outcome, VariantId};

fn quick_config() -> GameConfig {
    GameConfig::from_toml("search_depth = 2\nnode_budget = 500\nobstacle_seed = 11").unwrap()
}

#[test]
fn test_every_variant_finishes_between_computers() {
    let config = quick_config();
    for id in VariantId::all() {
        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());
        let outcome = id
            .play(&config, PlayerKind::Computer, PlayerKind::Computer, &mut console)
            .unwrap_or_else(|e| panic!("{id} failed: {e}"));
        let text = String::from_utf8(console.into_output()).unwrap();
        assert!(text.starts_with(id.rules()), "{id} did not print its rules");
        match outcome {
            Outcome::Winner { symbol, .. } => assert!(symbol == Symbol::X || symbol == Symbol::O),
            Outcome::Draw => assert!(text.ends_with("It's a draw.\n")),
        }
    }
}

#[test]
fn test_human_seat_needs_input() {
    let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());
    let result = VariantId::Misere.play(&quick_config(), PlayerKind::Human, PlayerKind::Computer, &mut console);
    assert!(result.is_err());
}

#[test]
fn test_missing_dictionary_fails_setup() {
    let config = quick_config().with_dictionary("/no/such/words.txt");
    let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());
    let result = VariantId::Words.play(&config, PlayerKind::Computer, PlayerKind::Computer, &mut console);
    assert!(result.is_err());
}

/// Searches from the opening, checks the board came back untouched and the
/// chosen move is accepted.
fn search_restores<B: Variant>(config: &GameConfig) {
    let mut board = B::setup(config).unwrap();
    let before = board.grid().clone();
    let strategy = board.strategy(config);
    let outcome = strategy.choose(&mut board, Symbol::X).unwrap();
    assert_eq!(board.grid(), &before, "{} changed during search", std::any::type_name::<B>());
    let plies = board.move_count();
    assert!(board.apply(&outcome.best), "{} refused {}", std::any::type_name::<B>(), outcome.best);
    assert_eq!(board.move_count(), plies + 1);
}

#[test]
fn test_search_restores_every_board() {
    let config = quick_config();
    search_restores::<Classic>(&config);
    search_restores::<Misere>(&config);
    search_restores::<FourByFour>(&config);
    search_restores::<FiveByFive>(&config);
    search_restores::<Pyramid>(&config);
    search_restores::<FourInARow>(&config);
    search_restores::<Diamond>(&config);
    search_restores::<Obstacles>(&config);
    search_restores::<Numerical>(&config);
    search_restores::<Words>(&config);
    search_restores::<Sus>(&config);
    search_restores::<Memory>(&config);
    search_restores::<Ultimate>(&config);
}

#[test]
fn test_seeded_obstacles_repeat() {
    let config = quick_config();
    let play = || {
        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());
        let outcome = VariantId::Obstacles
            .play(&config, PlayerKind::Computer, PlayerKind::Computer, &mut console)
            .unwrap();
        (outcome, String::from_utf8(console.into_output()).unwrap())
    };
    assert_eq!(play(), play());
}
