//! Line-based console for human players.

use crate::variants::{HumanInput, InputShape};
use crate::{GameError, GameErrorKind};
use crossterm::style::Stylize;
use std::fmt::Display;
use std::io::{BufRead, Write};
use strictly_grid::{Board, Symbol};
use tracing::{debug, instrument};

/// Reads moves from `R` and draws boards to `W`.
///
/// `Console::new` builds a plain console without colour codes.
#[derive(Debug, derive_new::new)]
pub struct Console<R, W> {
    input: R,
    output: W,
    #[new(value = "false")]
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Enables or disables ANSI colouring of marks.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Writes one line.
    pub fn say(&mut self, text: impl Display) -> Result<(), GameError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Draws `board` with row and column headers.
    ///
    /// Cells come from [`Board::display_cell`], so hidden marks stay hidden.
    pub fn render<B: Board + ?Sized>(&mut self, board: &B) -> Result<(), GameError> {
        let width = board.cols().saturating_sub(1).to_string().len();
        let mut header = " ".repeat(width + 1);
        for y in 0..board.cols() {
            header.push_str(&format!(" {:>width$}", y));
        }
        writeln!(self.output, "{}", header)?;
        for x in 0..board.rows() {
            let mut row = format!("{:>width$} ", x);
            for y in 0..board.cols() {
                let cell = board.display_cell(x, y);
                row.push_str(&format!(" {:>width$}", self.paint(board, cell)));
            }
            writeln!(self.output, "{}", row.trim_end())?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn paint<B: Board + ?Sized>(&self, board: &B, cell: Symbol) -> String {
        let text = cell.to_string();
        if !self.color {
            return text;
        }
        match cell {
            Symbol::X => text.red().bold().to_string(),
            Symbol::O => text.blue().bold().to_string(),
            c if c == board.blank() => text.dark_grey().to_string(),
            _ => text.yellow().to_string(),
        }
    }

    /// Prints `prompt` and reads one trimmed line.
    ///
    /// # Errors
    ///
    /// [`GameErrorKind::InputClosed`] once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<String, GameError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(GameError::new(GameErrorKind::InputClosed));
        }
        Ok(line.trim().to_string())
    }

    /// Reads entries until one parses as `shape`.
    #[instrument(skip(self, prompt))]
    pub fn read_input(&mut self, prompt: &str, shape: InputShape) -> Result<HumanInput, GameError> {
        loop {
            let line = self.ask(prompt)?;
            match shape.parse(&line) {
                Some(input) => return Ok(input),
                None => {
                    debug!(%line, "unparsable entry");
                    self.say(format!("Enter {}.", shape))?;
                }
            }
        }
    }

    /// Reads a number in `1..=count`. Empty input and out-of-range values re-prompt.
    pub fn choose(&mut self, prompt: &str, count: usize) -> Result<usize, GameError> {
        loop {
            let line = self.ask(prompt)?;
            match line.parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => return Ok(n),
                _ => self.say(format!("Choose a number from 1 to {}.", count))?,
            }
        }
    }

    /// Consumes the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::{Classic, Pyramid};
    use std::io::Cursor;
    use strictly_grid::Move;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_render_classic() {
        let mut board = Classic::new();
        assert!(board.apply(&Move::place(1, 1, Symbol::X)));
        let mut console = console("");
        console.render(&board).unwrap();
        let text = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(text, "   0 1 2\n0  . . .\n1  . X .\n2  . . .\n");
    }

    #[test]
    fn test_render_hides_shape_cells() {
        let mut console = console("");
        console.render(&Pyramid::new()).unwrap();
        let text = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(text.lines().nth(1), Some("0      ."));
    }

    #[test]
    fn test_read_input_reprompts() {
        let mut console = console("nonsense\n\n2 1\n");
        let input = console.read_input("> ", InputShape::Cell).unwrap();
        assert_eq!(input, HumanInput::Cell { x: 2, y: 1 });
        let text = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(text.matches("Enter row column.").count(), 2);
    }

    #[test]
    fn test_end_of_input() {
        let mut console = console("");
        let err = console.ask("> ").unwrap_err();
        assert!(matches!(err.kind, GameErrorKind::InputClosed));
    }

    #[test]
    fn test_choose_range() {
        let mut console = console("0\n7\nx\n3\n");
        assert_eq!(console.choose("? ", 3).unwrap(), 3);
    }
}
