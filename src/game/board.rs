use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use tracing::warn;

use super::Side;
use crate::error::{MoveError, ParseBoardError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CELLS: usize = ROWS * COLS;

/// Four `(row, col)` coordinates forming one straight line.
pub type Line = [(usize, usize); 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
    /// Tags a detected winning line for display. Never written by the search.
    WinMarker,
}

impl Cell {
    /// The side owning this cell, if any. Win markers belong to nobody.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::PlayerOne => Some(Side::PlayerOne),
            Cell::PlayerTwo => Some(Side::PlayerTwo),
            Cell::Empty | Cell::WinMarker => None,
        }
    }

    fn digit(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::PlayerOne => '1',
            Cell::PlayerTwo => '2',
            Cell::WinMarker => '3',
        }
    }

    fn from_digit(c: char) -> Option<Cell> {
        match c {
            '0' => Some(Cell::Empty),
            '1' => Some(Cell::PlayerOne),
            '2' => Some(Cell::PlayerTwo),
            '3' => Some(Cell::WinMarker),
            _ => None,
        }
    }

    fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::PlayerOne => Side::PlayerOne.symbol(),
            Cell::PlayerTwo => Side::PlayerTwo.symbol(),
            Cell::WinMarker => '@',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoWinYet,
    Win(Side),
    Draw,
}

/// The 6x7 grid. Row 0 is the top, row 5 is the bottom.
///
/// Columns are gravity-packed: [`Board::place`] fills the lowest empty row and
/// [`Board::retract`] clears the highest occupied one, so each column behaves
/// like a stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from a raw grid snapshot. Gravity is not checked.
    pub fn from_cells(cells: [[Cell; COLS]; ROWS]) -> Self {
        Board { cells }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn cells(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Check if a column cannot take another token. Out-of-range columns
    /// count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.landing_row(col).is_none()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    /// Columns that can still take a token, left to right.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a token for `side` into `col`.
    ///
    /// Returns `false` and leaves the grid untouched if the column is full or
    /// out of range.
    pub fn place(&mut self, col: usize, side: Side) -> bool {
        match self.landing_row(col) {
            Some(row) => {
                self.cells[row][col] = side.to_cell();
                true
            }
            None => false,
        }
    }

    /// Drop a token and report the row where it landed.
    pub fn play(&mut self, col: usize, side: Side) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        let row = self.landing_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = side.to_cell();
        Ok(row)
    }

    /// Remove the topmost token of `col`. Empty or out-of-range columns are
    /// left alone.
    pub fn retract(&mut self, col: usize) {
        if col >= COLS {
            warn!(col, "retract on a column outside the board");
            return;
        }
        match (0..ROWS).find(|&row| self.cells[row][col] != Cell::Empty) {
            Some(row) => self.cells[row][col] = Cell::Empty,
            None => warn!(col, "retract on an empty column"),
        }
    }

    /// Place a token and get a guard that retracts it when dropped.
    ///
    /// The guard dereferences to the board, so the caller can keep exploring
    /// through it; every exit path (including an early `break`) undoes the
    /// placement.
    pub fn place_guarded(&mut self, col: usize, side: Side) -> Option<Placement<'_>> {
        if self.place(col, side) {
            Some(Placement {
                board: self,
                column: col,
            })
        } else {
            None
        }
    }

    /// Every four-cell window on the board: rows first, then columns, then
    /// `\` diagonals, then `/` diagonals.
    pub fn lines() -> impl Iterator<Item = Line> {
        let horizontal =
            (0..ROWS).flat_map(|row| (0..=COLS - 4).map(move |col| line(row, col, 1, 0)));
        let vertical =
            (0..COLS).flat_map(|col| (0..=ROWS - 4).map(move |row| line(row, col, 0, 1)));
        let down_right =
            (0..=ROWS - 4).flat_map(|row| (0..=COLS - 4).map(move |col| line(row, col, 1, 1)));
        let down_left =
            (0..=ROWS - 4).flat_map(|row| (3..COLS).map(move |col| line(row, col, -1, 1)));
        horizontal.chain(vertical).chain(down_right).chain(down_left)
    }

    fn line_owner(&self, line: &Line) -> Option<Side> {
        let (row, col) = line[0];
        let side = self.cells[row][col].side()?;
        line.iter()
            .all(|&(r, c)| self.cells[r][c].side() == Some(side))
            .then_some(side)
    }

    /// The first line of four found in scan order, if any.
    pub fn winning_line(&self) -> Option<Line> {
        Self::lines().find(|line| self.line_owner(line).is_some())
    }

    pub fn has_win(&self) -> bool {
        self.winning_line().is_some()
    }

    /// A win for either side, or no empty cell left.
    pub fn is_terminal(&self) -> bool {
        self.has_win() || self.is_full()
    }

    pub fn check_win(&self) -> Outcome {
        if let Some(side) = self.winning_line().and_then(|line| self.line_owner(&line)) {
            Outcome::Win(side)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::NoWinYet
        }
    }

    /// Like [`Board::check_win`], but also overwrites the winning line with
    /// [`Cell::WinMarker`] for display.
    pub fn mark_win(&mut self) -> Outcome {
        let outcome = self.check_win();
        if let Some(line) = self.winning_line() {
            for (row, col) in line {
                self.cells[row][col] = Cell::WinMarker;
            }
        }
        outcome
    }

    /// 42 digits, row-major from the top row.
    pub fn encode(&self) -> String {
        self.cells.iter().flatten().map(|cell| cell.digit()).collect()
    }
}

fn line(row: usize, col: usize, d_col: isize, d_row: usize) -> Line {
    std::array::from_fn(|i| {
        let c = col as isize + d_col * i as isize;
        (row + d_row * i, c as usize)
    })
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != CELLS {
            return Err(ParseBoardError::Length(len));
        }

        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (i, c) in s.chars().enumerate() {
            cells[i / COLS][i % COLS] =
                Cell::from_digit(c).ok_or(ParseBoardError::InvalidDigit(c, i))?;
        }

        for col in 0..COLS {
            for row in 0..ROWS - 1 {
                if cells[row][col] != Cell::Empty && cells[row + 1][col] == Cell::Empty {
                    return Err(ParseBoardError::Floating { row, col });
                }
            }
        }

        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(COLS * 2 - 1);
        writeln!(f, "{rule}")?;
        for row in &self.cells {
            let glyphs: Vec<String> = row.iter().map(|cell| cell.glyph().to_string()).collect();
            writeln!(f, "{}", glyphs.join("|"))?;
        }
        writeln!(f, "{rule}")?;
        let ruler: Vec<String> = (1..=COLS).map(|col| col.to_string()).collect();
        write!(f, "{}", ruler.join(" "))
    }
}

/// A token placed through [`Board::place_guarded`]. Retracts on drop.
#[must_use = "dropping a placement retracts its token immediately"]
pub struct Placement<'a> {
    board: &'a mut Board,
    column: usize,
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.retract(self.column);
    }
}
