//! Rectangular cell storage shared by every board shape.
//!
//! A `Grid` owns the cells and the move counter. Cells only change through
//! [`Grid::apply_placement`] and [`Grid::apply_slide`], which keep the
//! counter in step with the cell contents. Setup helpers (`seed`, `block`)
//! exist for starting positions and obstacles and do not count as moves.

use super::{Move, Payload, Symbol};
use std::fmt;

/// Line directions scanned by win checks and evaluators:
/// row, column, diagonal and anti-diagonal.
pub const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Orthogonal steps in enumeration order: up, right, down, left.
pub const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Cell grid with blank and obstacle sentinels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Symbol>,
    move_count: usize,
    blank: Symbol,
    obstacle: Symbol,
}

impl Grid {
    /// Creates an all-blank grid.
    pub fn new(rows: usize, cols: usize, blank: Symbol) -> Self {
        Self {
            rows,
            cols,
            cells: vec![blank; rows * cols],
            move_count: 0,
            blank,
            obstacle: Symbol::BLOCK,
        }
    }

    /// Creates a grid whose cells outside `inside` are permanent obstacles.
    pub fn shaped(rows: usize, cols: usize, blank: Symbol, inside: impl Fn(usize, usize) -> bool) -> Self {
        let mut grid = Self::new(rows, cols, blank);
        for x in 0..rows {
            for y in 0..cols {
                if !inside(x, y) {
                    grid.cells[x * cols + y] = grid.obstacle;
                }
            }
        }
        grid
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Blank sentinel.
    pub fn blank(&self) -> Symbol {
        self.blank
    }

    /// Obstacle sentinel.
    pub fn obstacle(&self) -> Symbol {
        self.obstacle
    }

    /// Accepted applies minus accepted undos.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Cell at an in-bounds position.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Symbol {
        assert!(x < self.rows && y < self.cols, "cell ({x}, {y}) outside {}x{} grid", self.rows, self.cols);
        self.cells[x * self.cols + y]
    }

    /// Cell at a possibly out-of-bounds position.
    pub fn at(&self, x: i32, y: i32) -> Option<Symbol> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// True when `(x, y)` lies on the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// True when the cell holds the blank sentinel.
    pub fn is_blank(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == self.blank
    }

    /// True when the cell holds the obstacle sentinel.
    pub fn is_obstacle(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == self.obstacle
    }

    /// Number of blank cells left.
    pub fn blank_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c == self.blank).count()
    }

    /// True when no blank cell is left.
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&self.blank)
    }

    /// Row-major iterator over `(x, y, symbol)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Symbol)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (i / self.cols, i % self.cols, c))
    }

    /// Writes a starting piece. Not counted as a move.
    pub fn seed(&mut self, x: usize, y: usize, symbol: Symbol) {
        let i = x * self.cols + y;
        self.cells[i] = symbol;
    }

    /// Turns a blank cell into an obstacle. Not counted as a move.
    pub fn block(&mut self, x: usize, y: usize) -> bool {
        if !self.is_blank(x, y) {
            return false;
        }
        let i = x * self.cols + y;
        self.cells[i] = self.obstacle;
        true
    }

    /// Placement protocol shared by most boards.
    ///
    /// A forward move writes `written` into a blank cell. An undo (mark equal
    /// to the blank sentinel) clears an occupied cell. Out-of-range targets,
    /// obstacles, occupied targets and undos of blank cells are rejected
    /// without mutation.
    pub fn apply_placement(&mut self, mv: &Move, written: Symbol) -> bool {
        let Some(i) = self.index(mv.x, mv.y) else {
            return false;
        };
        let current = self.cells[i];
        if current == self.obstacle {
            return false;
        }
        if mv.is_undo(self.blank) {
            if current == self.blank || self.move_count == 0 {
                return false;
            }
            self.cells[i] = self.blank;
            self.move_count -= 1;
            return true;
        }
        if current != self.blank || written == self.blank || written == self.obstacle {
            return false;
        }
        self.cells[i] = written;
        self.move_count += 1;
        true
    }

    /// Slide protocol: move one piece a single orthogonal step into a blank.
    ///
    /// A forward slide requires the source to hold the mover's mark. An undo
    /// slide (blank mark) moves whatever piece sits at the source back and
    /// decrements the counter.
    pub fn apply_slide(&mut self, mv: &Move) -> bool {
        let Payload::Slide { dx, dy } = mv.payload else {
            return false;
        };
        if dx.abs() + dy.abs() != 1 {
            return false;
        }
        let target = self.index(mv.x.saturating_add(dx), mv.y.saturating_add(dy));
        let (Some(from), Some(to)) = (self.index(mv.x, mv.y), target) else {
            return false;
        };
        let piece = self.cells[from];
        if self.cells[to] != self.blank || piece == self.blank || piece == self.obstacle {
            return false;
        }
        if mv.is_undo(self.blank) {
            if self.move_count == 0 {
                return false;
            }
            self.move_count -= 1;
        } else {
            if piece != mv.mark {
                return false;
            }
            self.move_count += 1;
        }
        self.cells[to] = piece;
        self.cells[from] = self.blank;
        true
    }

    /// Cells of the `span`-long window starting at `(x, y)` in direction
    /// `dir`, or `None` when the window leaves the grid.
    pub fn window(&self, x: usize, y: usize, dir: (i32, i32), span: usize) -> Option<impl Iterator<Item = Symbol> + '_> {
        let last = span.checked_sub(1)? as i32;
        let (x, y) = (x as i32, y as i32);
        if !self.contains(x + dir.0 * last, y + dir.1 * last) {
            return None;
        }
        Some((0..=last).map(move |k| self.cells[((x + dir.0 * k) as usize) * self.cols + (y + dir.1 * k) as usize]))
    }

    /// Coordinates of every `span`-long window that lies on the grid, in
    /// row-major order of the first cell, then [`DIRECTIONS`] order.
    pub fn lines(&self, span: usize) -> Vec<Vec<(usize, usize)>> {
        let mut lines = Vec::new();
        for x in 0..self.rows {
            for y in 0..self.cols {
                for (dx, dy) in DIRECTIONS {
                    if self.window(x, y, (dx, dy), span).is_none() {
                        continue;
                    }
                    let line = (0..span as i32)
                        .map(|k| ((x as i32 + dx * k) as usize, (y as i32 + dy * k) as usize))
                        .collect();
                    lines.push(line);
                }
            }
        }
        lines
    }

    /// Number of `span`-long windows made entirely of `symbol`.
    pub fn count_runs(&self, span: usize, symbol: Symbol) -> usize {
        let mut count = 0;
        for x in 0..self.rows {
            for y in 0..self.cols {
                for dir in DIRECTIONS {
                    if let Some(mut cells) = self.window(x, y, dir, span) {
                        if cells.all(|c| c == symbol) {
                            count += 1;
                        }
                    }
                }
            }
        }
        count
    }

    /// True when at least one `span`-long window is made entirely of `symbol`.
    pub fn has_run(&self, span: usize, symbol: Symbol) -> bool {
        (0..self.rows).any(|x| {
            (0..self.cols).any(|y| {
                DIRECTIONS.iter().any(|&dir| {
                    self.window(x, y, dir, span)
                        .is_some_and(|mut cells| cells.all(|c| c == symbol))
                })
            })
        })
    }

    /// Longest consecutive run of `symbol` in each of [`DIRECTIONS`].
    pub fn longest_runs(&self, symbol: Symbol) -> [usize; 4] {
        let mut best = [0; 4];
        for (x, y, c) in self.iter() {
            if c != symbol {
                continue;
            }
            for (d, (dx, dy)) in DIRECTIONS.into_iter().enumerate() {
                let mut len = 0;
                let (mut cx, mut cy) = (x as i32, y as i32);
                while self.at(cx, cy) == Some(symbol) {
                    len += 1;
                    cx += dx;
                    cy += dy;
                }
                best[d] = best[d].max(len);
            }
        }
        best
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.rows && y < self.cols).then(|| x * self.cols + y)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.rows {
            let row: Vec<String> = (0..self.cols).map(|y| self.get(x, y).to_string()).collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_and_undo_restore_grid() {
        let mut grid = Grid::new(3, 3, Symbol::DOT);
        let before = grid.clone();

        assert!(grid.apply_placement(&Move::place(1, 1, Symbol::X), Symbol::X));
        assert!(grid.apply_placement(&Move::place(0, 2, Symbol::O), Symbol::O));
        assert_eq!(grid.move_count(), 2);

        assert!(grid.apply_placement(&Move::undo(0, 2, Symbol::DOT), Symbol::DOT));
        assert!(grid.apply_placement(&Move::undo(1, 1, Symbol::DOT), Symbol::DOT));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_rejections_do_not_mutate() {
        let mut grid = Grid::shaped(3, 3, Symbol::DOT, |x, _| x > 0);
        grid.apply_placement(&Move::place(1, 1, Symbol::X), Symbol::X);
        let before = grid.clone();

        assert!(!grid.apply_placement(&Move::place(1, 1, Symbol::O), Symbol::O));
        assert!(!grid.apply_placement(&Move::place(0, 0, Symbol::O), Symbol::O));
        assert!(!grid.apply_placement(&Move::new(-1, 0, Symbol::O, Payload::None), Symbol::O));
        assert!(!grid.apply_placement(&Move::place(3, 0, Symbol::O), Symbol::O));
        assert!(!grid.apply_placement(&Move::undo(2, 2, Symbol::DOT), Symbol::DOT));
        assert!(!grid.apply_placement(&Move::undo(0, 0, Symbol::DOT), Symbol::DOT));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_slide_and_inverse() {
        let mut grid = Grid::new(3, 3, Symbol::DOT);
        grid.seed(0, 0, Symbol::X);
        let before = grid.clone();

        assert!(grid.apply_slide(&Move::slide(0, 0, Symbol::X, 1, 0)));
        assert_eq!(grid.get(1, 0), Symbol::X);
        assert!(grid.is_blank(0, 0));
        assert_eq!(grid.move_count(), 1);

        assert!(grid.apply_slide(&Move::new(1, 0, Symbol::DOT, Payload::Slide { dx: -1, dy: 0 })));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_slide_rejects_foreign_piece_and_diagonal() {
        let mut grid = Grid::new(3, 3, Symbol::DOT);
        grid.seed(1, 1, Symbol::O);
        assert!(!grid.apply_slide(&Move::slide(1, 1, Symbol::X, 0, 1)));
        assert!(!grid.apply_slide(&Move::slide(1, 1, Symbol::O, 1, 1)));
        assert!(!grid.apply_slide(&Move::slide(1, 1, Symbol::O, 0, 2)));
        assert_eq!(grid.move_count(), 0);
    }

    #[test]
    fn test_runs() {
        let mut grid = Grid::new(4, 4, Symbol::DOT);
        for y in 0..3 {
            grid.apply_placement(&Move::place(0, y, Symbol::X), Symbol::X);
        }
        assert!(grid.has_run(3, Symbol::X));
        assert!(!grid.has_run(4, Symbol::X));
        assert_eq!(grid.count_runs(3, Symbol::X), 1);
        assert_eq!(grid.count_runs(2, Symbol::X), 2);
        assert_eq!(grid.longest_runs(Symbol::X), [3, 1, 1, 1]);
    }

    #[test]
    fn test_lines_of_three_by_three() {
        let grid = Grid::new(3, 3, Symbol::DOT);
        let lines = grid.lines(3);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], vec![(0, 0), (0, 1), (0, 2)]);
        assert!(lines.contains(&vec![(0, 2), (1, 1), (2, 0)]));
    }

    #[test]
    fn test_window_bounds() {
        let grid = Grid::new(3, 3, Symbol::DOT);
        assert!(grid.window(0, 0, (1, 1), 3).is_some());
        assert!(grid.window(0, 1, (1, 1), 3).is_none());
        assert!(grid.window(0, 2, (1, -1), 3).is_some());
        assert!(grid.window(0, 0, (0, 1), 0).is_none());
    }

    #[test]
    fn test_block_counts_against_capacity() {
        let mut grid = Grid::new(1, 2, Symbol::DOT);
        assert!(grid.block(0, 0));
        assert!(!grid.block(0, 0));
        assert_eq!(grid.blank_cells(), 1);
        assert_eq!(grid.move_count(), 0);
    }
}
