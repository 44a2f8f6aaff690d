use std::fmt;

use super::player::Player;
use super::window::windows;
use crate::error::{BoardParseError, IllegalMoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// A column index in `[0, cols)`.
pub type Move = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }

    fn symbol(self) -> char {
        self.owner().map_or('.', Player::symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Outcome {
    Winner(Player),
    Draw,
    Ongoing,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }
}

/// A Connect Four grid with gravity. Row 0 is the bottom row.
///
/// The only way to change a board from outside the crate is [`Board::apply`],
/// which drops a piece for the player to move and hands the turn over.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    heights: Vec<usize>,
    to_move: Player,
    moves_played: usize,
}

impl Board {
    /// Create an empty `rows × cols` board with Player One to move.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be positive");
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            heights: vec![0; cols],
            to_move: Player::One,
            moves_played: 0,
        }
    }

    /// The classic 6 × 7 board.
    pub fn standard() -> Self {
        Self::new(ROWS, COLS)
    }

    /// Parse a board from text rows, top row first. `X` is Player One, `O` is
    /// Player Two and `.` is empty. Whitespace inside a row is ignored.
    ///
    /// The player to move is derived from the piece counts.
    pub fn from_rows(lines: &[&str]) -> Result<Self, BoardParseError> {
        let parsed: Vec<Vec<char>> = lines
            .iter()
            .map(|line| line.chars().filter(|ch| !ch.is_whitespace()).collect())
            .collect();
        let rows = parsed.len();
        let cols = parsed.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(BoardParseError::Empty);
        }

        let mut board = Board::new(rows, cols);
        let (mut ones, mut twos) = (0, 0);
        for (line_idx, line) in parsed.iter().enumerate() {
            if line.len() != cols {
                return Err(BoardParseError::RaggedRow {
                    row: line_idx,
                    found: line.len(),
                    expected: cols,
                });
            }
            let row = rows - 1 - line_idx;
            for (col, &ch) in line.iter().enumerate() {
                let cell = match ch {
                    'X' | 'x' => {
                        ones += 1;
                        Cell::One
                    }
                    'O' | 'o' => {
                        twos += 1;
                        Cell::Two
                    }
                    '.' => Cell::Empty,
                    _ => return Err(BoardParseError::InvalidCell { row, col, ch }),
                };
                board.cells[row * cols + col] = cell;
            }
        }

        for col in 0..cols {
            let height = (0..rows)
                .take_while(|&row| board.get(row, col) != Cell::Empty)
                .count();
            if let Some(row) = (height..rows).find(|&row| board.get(row, col) != Cell::Empty) {
                return Err(BoardParseError::Floating { row, col });
            }
            board.heights[col] = height;
        }

        if ones != twos && ones != twos + 1 {
            return Err(BoardParseError::UnbalancedCounts {
                one: ones,
                two: twos,
            });
        }
        board.moves_played = ones + twos;
        board.to_move = Player::to_move_after(board.moves_played);
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Number of pieces in a column; also the row the next piece lands on.
    pub fn height(&self, col: usize) -> usize {
        self.heights[col]
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn empty_cells(&self) -> usize {
        self.rows * self.cols - self.moves_played
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.moves_played == self.rows * self.cols
    }

    /// A move is legal if the column exists and is not full.
    pub fn is_legal(&self, mv: Move) -> bool {
        mv < self.cols && self.heights[mv] < self.rows
    }

    /// All playable columns in ascending order.
    pub fn legal_moves(&self) -> Vec<Move> {
        (0..self.cols).filter(|&col| self.is_legal(col)).collect()
    }

    /// Drop a piece for the player to move and pass the turn.
    /// Returns the row where the piece landed.
    pub fn apply(&mut self, mv: Move) -> Result<usize, IllegalMoveError> {
        if mv >= self.cols {
            return Err(IllegalMoveError::OutOfRange {
                column: mv,
                cols: self.cols,
            });
        }
        let row = self.heights[mv];
        if row >= self.rows {
            return Err(IllegalMoveError::ColumnFull { column: mv });
        }

        self.cells[row * self.cols + mv] = self.to_move.to_cell();
        self.heights[mv] += 1;
        self.moves_played += 1;
        self.to_move = self.to_move.other();
        Ok(row)
    }

    /// Apply a move to a copy of this board.
    pub fn with_move(&self, mv: Move) -> Result<Board, IllegalMoveError> {
        let mut next = self.clone();
        next.apply(mv)?;
        Ok(next)
    }

    /// Take back the most recent `apply(mv)`. Only the search uses this, to
    /// restore its scratch board after exploring a child.
    pub(crate) fn undo(&mut self, mv: Move) {
        debug_assert!(self.heights[mv] > 0, "undo on empty column {mv}");
        let row = self.heights[mv] - 1;
        let mover = self.to_move.other();
        debug_assert_eq!(self.get(row, mv), mover.to_cell(), "undo out of order");

        self.cells[row * self.cols + mv] = Cell::Empty;
        self.heights[mv] = row;
        self.moves_played -= 1;
        self.to_move = mover;
    }

    /// Scan every four-in-a-row window for a single owner.
    pub fn outcome(&self) -> Outcome {
        for window in windows(self.rows, self.cols) {
            let (r0, c0) = window[0];
            let first = self.get(r0, c0);
            let Some(owner) = first.owner() else {
                continue;
            };
            if window[1..].iter().all(|&(r, c)| self.get(r, c) == first) {
                return Outcome::Winner(owner);
            }
        }

        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Clear the board back to the starting position.
    pub fn reset(&mut self) {
        *self = Board::new(self.rows, self.cols);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            let line: Vec<String> = (0..self.cols)
                .map(|col| self.get(row, col).symbol().to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let footer: Vec<String> = (0..self.cols).map(|col| (col % 10).to_string()).collect();
        write!(f, "{}", footer.join(" "))
    }
}
