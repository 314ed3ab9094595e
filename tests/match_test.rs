//! Tests for full matches driven through the console.

use std::io::Cursor;
use strictly_grid::{Board, CenterWeight, Placement, Player, Searcher, Symbol, WindowCount};
use strictly_xo::variants::{Classic, FourInARow, Numerical};
use strictly_xo::{Console, GameErrorKind, Match, Outcome};

type Memory = Console<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str) -> Memory {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn bot(name: &str, symbol: Symbol, depth: u32) -> Player<Classic> {
    let strategy = Searcher::new(Placement::anywhere(), (WindowCount::new(3), CenterWeight), depth);
    Player::computer(name, symbol, Box::new(strategy))
}

#[test]
fn test_perfect_computers_draw() {
    let mut game = Match::new(Classic::new(), bot("Deep X", Symbol::X, 8), bot("Deep O", Symbol::O, 8));
    let outcome = game.play(&mut console("")).unwrap();
    assert_eq!(outcome, Outcome::Draw);
    assert_eq!(game.board().move_count(), 9);
}

#[test]
fn test_shallow_second_player_loses() {
    let mut game = Match::new(Classic::new(), bot("X", Symbol::X, 3), bot("O", Symbol::O, 3));
    let outcome = game.play(&mut console("")).unwrap();
    assert_eq!(
        outcome,
        Outcome::Winner {
            name: "X".to_string(),
            symbol: Symbol::X
        }
    );
    assert_eq!(game.board().move_count(), 7);
}

#[test]
fn test_computer_punishes_careless_human() {
    // The human always names the first free cell in reading order.
    let script = "0 0\n0 1\n0 2\n1 0\n1 1\n1 2\n2 0\n2 1\n2 2\n";
    let mut game = Match::new(Classic::new(), Player::human("Human", Symbol::X), bot("Computer", Symbol::O, 8));
    let mut console = console(script);
    let outcome = game.play(&mut console).unwrap();
    assert_eq!(
        outcome,
        Outcome::Winner {
            name: "Computer".to_string(),
            symbol: Symbol::O
        }
    );
    assert_eq!(game.board().cell(2, 0), Symbol::O);
    let text = String::from_utf8(console.into_output()).unwrap();
    assert!(text.contains("That move is not allowed here."));
    assert!(text.ends_with("Computer (O) wins!\n"));
}

#[test]
fn test_column_entries_drop_pieces() {
    let mut game = Match::new(
        FourInARow::new(),
        Player::human("Ann", Symbol::X),
        Player::human("Bob", Symbol::O),
    );
    let script = "3\n3\n4\n4\n5\n5\n6\n";
    let outcome = game.play(&mut console(script)).unwrap();
    assert!(matches!(outcome, Outcome::Winner { symbol: Symbol::X, .. }));
    assert_eq!(game.board().cell(5, 6), Symbol::X);
    assert_eq!(game.board().cell(4, 5), Symbol::O);
}

#[test]
fn test_value_entries_spend_digits() {
    let mut game = Match::new(
        Numerical::new(),
        Player::human("Odd", Symbol::X),
        Player::human("Even", Symbol::O),
    );
    // O tries to reuse X's digit, then an odd digit, before writing 6.
    let script = "1 1 5\n0 0 5\n0 0 3\n0 0 6\n2 2 4\n";
    let mut console = console(script);
    let err = game.play(&mut console).unwrap_err();
    assert!(matches!(err.kind, GameErrorKind::InputClosed));
    assert_eq!(game.board().move_count(), 2);
    assert_eq!(game.board().cell(0, 0), Symbol::new('6'));
    assert!(!game.board().remaining(Symbol::O).contains(&Symbol::new('6')));
}
