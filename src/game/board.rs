use std::fmt;

use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom, row 5 is the top
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a piece can be dropped into a column
    pub fn is_valid_column(&self, col: usize) -> bool {
        col < COLS && self.cells[ROWS - 1][col] == Cell::Empty
    }

    /// Lowest empty row in a column, scanning bottom-up
    pub fn next_open_row(&self, col: usize) -> Result<usize, BoardError> {
        if col >= COLS {
            return Err(BoardError::InvalidColumn(col));
        }

        (0..ROWS)
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(BoardError::ColumnFull(col))
    }

    /// Set a cell. Callers must have validated the column and row.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        debug_assert_eq!(
            self.cells[row][col],
            Cell::Empty,
            "placing over an occupied cell at ({row}, {col})"
        );
        self.cells[row][col] = player.to_cell();
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, BoardError> {
        let row = self.next_open_row(col)?;
        self.place(row, col, player);
        Ok(row)
    }

    /// Number of pieces stacked in a column
    pub fn column_height(&self, col: usize) -> usize {
        self.next_open_row(col).unwrap_or(ROWS)
    }

    /// Check if no column can take another piece
    pub fn is_full(&self) -> bool {
        !(0..COLS).any(|col| self.is_valid_column(col))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Top row first, one character per cell
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                let symbol = match self.cells[row][col] {
                    Cell::Empty => '.',
                    Cell::PlayerOne => '1',
                    Cell::PlayerTwo => '2',
                };
                write!(f, "{symbol}")?;
            }
            if row > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
