//! Turn coordination between two players.

use crate::console::Console;
use crate::variants::Variant;
use crate::{GameError, GameErrorKind};
use std::cell::{Ref, RefCell};
use std::fmt;
use std::io::{BufRead, Write};
use std::rc::Rc;
use strictly_grid::{Move, Player, Seat, Symbol};
use tracing::{debug, info, instrument, warn};

/// How a finished match ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// One player won.
    Winner {
        /// Winner's name.
        name: String,
        /// Winner's mark.
        symbol: Symbol,
    },
    /// Nobody won.
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner { name, symbol } => write!(f, "{} ({}) wins!", name, symbol),
            Self::Draw => write!(f, "It's a draw."),
        }
    }
}

/// One game of a variant between two seated players. X moves first.
pub struct Match<B: Variant> {
    board: Seat<B>,
    players: [Player<B>; 2],
}

impl<B: Variant> Match<B> {
    /// Seats `first` and `second` at `board`.
    pub fn new(board: B, mut first: Player<B>, mut second: Player<B>) -> Self {
        let board = Rc::new(RefCell::new(board));
        first.seat(&board);
        second.seat(&board);
        Self {
            board,
            players: [first, second],
        }
    }

    /// Current position.
    pub fn board(&self) -> Ref<'_, B> {
        self.board.borrow()
    }

    /// Plays until the game ends.
    ///
    /// # Errors
    ///
    /// Fails when the console closes mid-game, when a computer player cannot
    /// produce a move, or when its move is refused by the board.
    #[instrument(skip_all, fields(first = %self.players[0], second = %self.players[1]))]
    pub fn play<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<Outcome, GameError> {
        info!("Match started");
        console.say(B::rules())?;
        console.render(&*self.board.borrow())?;

        let mut turn = 0;
        loop {
            let (mover, other) = (&self.players[turn % 2], &self.players[(turn + 1) % 2]);
            if !self.board.borrow().can_move(*mover.symbol()) {
                info!(player = %mover, "No move available");
                console.say(format!("{} has no move.", mover))?;
                return self.finish(Outcome::Draw, console);
            }

            let mv = if mover.is_computer() {
                self.computer_turn(mover)?
            } else {
                self.human_turn(mover, console)?
            };
            console.say(format!("{} plays {}", mover, mv))?;

            self.board.borrow_mut().end_turn();
            console.render(&*self.board.borrow())?;

            if let Some(outcome) = self.outcome(mover, other) {
                return self.finish(outcome, console);
            }
            turn += 1;
        }
    }

    fn computer_turn(&self, player: &Player<B>) -> Result<Move, GameError> {
        let mv = player.calculate_move()?;
        if !self.board.borrow_mut().apply(&mv) {
            warn!(%mv, player = %player, "Board refused computer move");
            return Err(GameError::new(GameErrorKind::IllegalComputerMove(mv)));
        }
        Ok(mv)
    }

    fn human_turn<R: BufRead, W: Write>(
        &self,
        player: &Player<B>,
        console: &mut Console<R, W>,
    ) -> Result<Move, GameError> {
        let prompt = format!("{} enter {}: ", player, B::INPUT);
        loop {
            let input = console.read_input(&prompt, B::INPUT)?;
            let Some(mv) = self.board.borrow().human_move(&input, *player.symbol()) else {
                console.say(format!("Enter {}.", B::INPUT))?;
                continue;
            };
            if self.board.borrow_mut().apply(&mv) {
                return Ok(mv);
            }
            debug!(%mv, "Illegal human move");
            console.say("That move is not allowed here.")?;
        }
    }

    /// Result after `mover` has played, probing both sides.
    fn outcome(&self, mover: &Player<B>, other: &Player<B>) -> Option<Outcome> {
        let board = self.board.borrow();
        let winner = if mover.has_won(&board) || other.has_lost(&board) {
            Some(mover)
        } else if other.has_won(&board) || mover.has_lost(&board) {
            Some(other)
        } else {
            None
        };
        match winner {
            Some(player) => Some(Outcome::Winner {
                name: player.name().clone(),
                symbol: *player.symbol(),
            }),
            None if mover.game_is_over(&board) || other.game_is_over(&board) => Some(Outcome::Draw),
            None => None,
        }
    }

    fn finish<R: BufRead, W: Write>(
        &self,
        outcome: Outcome,
        console: &mut Console<R, W>,
    ) -> Result<Outcome, GameError> {
        info!(%outcome, moves = self.board.borrow().move_count(), "Match finished");
        console.say(&outcome)?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::Classic;
    use std::io::Cursor;
    use strictly_grid::Board;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn humans() -> Match<Classic> {
        Match::new(
            Classic::new(),
            Player::human("Ann", Symbol::X),
            Player::human("Bob", Symbol::O),
        )
    }

    #[test]
    fn test_human_row_wins() {
        let mut game = humans();
        let mut console = console("0 0\n1 0\n0 1\n1 1\n0 2\n");
        let outcome = game.play(&mut console).unwrap();
        assert_eq!(
            outcome,
            Outcome::Winner {
                name: "Ann".to_string(),
                symbol: Symbol::X
            }
        );
        assert_eq!(game.board().move_count(), 5);
    }

    #[test]
    fn test_illegal_entries_are_retried() {
        let mut game = humans();
        let mut console = console("0 0\n0 0\n9 9\nhello\n1 0\n0 1\n1 1\n0 2\n");
        game.play(&mut console).unwrap();
        let text = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(text.matches("That move is not allowed here.").count(), 2);
        assert!(text.contains("Ann (X) wins!"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut game = humans();
        let err = game.play(&mut console("1 1\n")).unwrap_err();
        assert!(matches!(err.kind, GameErrorKind::InputClosed));
        assert_eq!(game.board().move_count(), 1);
    }

    #[test]
    fn test_full_board_draw() {
        let mut game = humans();
        let moves = "0 0\n1 1\n2 2\n0 1\n2 1\n2 0\n0 2\n1 2\n1 0\n";
        assert_eq!(game.play(&mut console(moves)).unwrap(), Outcome::Draw);
    }
}
