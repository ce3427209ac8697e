use anyhow::{anyhow, Result};

use crate::error::GameError;
use crate::{HEIGHT, WIDTH};

/// One of the two competing marks.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// The 6x7 gravity board.
///
/// Cells are stored left-to-right, bottom-to-top: row 0 is the bottom row.
/// Within a column every empty cell sits strictly above every placed mark,
/// since the only mutation is a gravity drop.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Option<Mark>; WIDTH * HEIGHT],
    heights: [usize; WIDTH],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; WIDTH * HEIGHT],
            heights: [0; WIDTH],
        }
    }

    /// Builds a board from a digit string of 0-indexed columns, dropping
    /// alternating marks starting with `X`.
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut mark = Mark::X;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if column < WIDTH => {
                    board.drop_mark(column, mark)?;
                    mark = mark.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<Mark> {
        self.cells[column + WIDTH * row]
    }

    /// Number of marks already dropped into `column`.
    pub fn height(&self, column: usize) -> usize {
        self.heights[column]
    }

    pub fn is_column_legal(&self, column: usize) -> bool {
        column < WIDTH && self.heights[column] < HEIGHT
    }

    /// Columns whose top cell is empty, in ascending order. The stable
    /// ordering keeps tie-breaks elsewhere deterministic.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&c| self.is_column_legal(c)).collect()
    }

    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h == HEIGHT)
    }

    /// Drops `mark` into `column`, returning the row it landed in.
    pub fn drop_mark(&mut self, column: usize, mark: Mark) -> Result<usize, GameError> {
        if !self.is_column_legal(column) {
            return Err(GameError::InvalidMove(column));
        }
        let row = self.heights[column];
        self.cells[column + WIDTH * row] = Some(mark);
        self.heights[column] += 1;
        Ok(row)
    }

    /// Checks whether the mark just placed at `(last_row, last_col)`
    /// completed a run of four.
    ///
    /// Only the windows passing through the landed cell are scanned, one
    /// axis at a time. The vertical axis only looks downward, a drop cannot
    /// complete a run above itself.
    pub fn check_win(&self, mark: Mark, last_row: usize, last_col: usize) -> bool {
        let at = |row: isize, column: isize| self.cells[column as usize + WIDTH * row as usize];
        let (row, col) = (last_row as isize, last_col as isize);

        // horizontal
        for k in 0..4 {
            let c0 = col - k;
            if c0 >= 0
                && c0 + 3 < WIDTH as isize
                && (0..4).all(|i| at(row, c0 + i) == Some(mark))
            {
                return true;
            }
        }

        // vertical, downward from the landed cell
        if row >= 3 && (0..4).all(|i| at(row - i, col) == Some(mark)) {
            return true;
        }

        // diagonal (rising left to right)
        for k in 0..4 {
            let (r0, c0) = (row - k, col - k);
            if r0 >= 0
                && c0 >= 0
                && r0 + 3 < HEIGHT as isize
                && c0 + 3 < WIDTH as isize
                && (0..4).all(|i| at(r0 + i, c0 + i) == Some(mark))
            {
                return true;
            }
        }

        // diagonal (falling left to right)
        for k in 0..4 {
            let (r0, c0) = (row + k, col - k);
            if r0 - 3 >= 0
                && r0 < HEIGHT as isize
                && c0 >= 0
                && c0 + 3 < WIDTH as isize
                && (0..4).all(|i| at(r0 - i, c0 + i) == Some(mark))
            {
                return true;
            }
        }

        false
    }

    /// Whole-board scan for a run of four of `mark`, used by the search
    /// terminal test where no last-move anchor is available.
    pub fn has_connect_four(&self, mark: Mark) -> bool {
        let at = |row: usize, column: usize| self.cells[column + WIDTH * row];

        // horizontal
        for row in 0..HEIGHT {
            for col in 0..=WIDTH - 4 {
                if (0..4).all(|i| at(row, col + i) == Some(mark)) {
                    return true;
                }
            }
        }
        // vertical
        for col in 0..WIDTH {
            for row in 0..=HEIGHT - 4 {
                if (0..4).all(|i| at(row + i, col) == Some(mark)) {
                    return true;
                }
            }
        }
        // diagonals
        for row in 0..=HEIGHT - 4 {
            for col in 0..=WIDTH - 4 {
                if (0..4).all(|i| at(row + i, col + i) == Some(mark)) {
                    return true;
                }
                if (0..4).all(|i| at(row + 3 - i, col + i) == Some(mark)) {
                    return true;
                }
            }
        }

        false
    }

    pub fn winner(&self) -> Option<Mark> {
        if self.has_connect_four(Mark::X) {
            Some(Mark::X)
        } else if self.has_connect_four(Mark::O) {
            Some(Mark::O)
        } else {
            None
        }
    }

    /// Canonical position key: two packed 42-bit bitboards, one per mark.
    pub fn key(&self) -> u128 {
        let mut x_mask = 0u64;
        let mut o_mask = 0u64;
        for (i, cell) in self.cells.iter().enumerate() {
            match cell {
                Some(Mark::X) => x_mask |= 1 << i,
                Some(Mark::O) => o_mask |= 1 << i,
                None => {}
            }
        }
        (x_mask as u128) | ((o_mask as u128) << (WIDTH * HEIGHT))
    }

    // test setup helper, places a mark without gravity
    #[cfg(test)]
    pub(crate) fn set_cell(&mut self, row: usize, column: usize, mark: Mark) {
        self.cells[column + WIDTH * row] = Some(mark);
        self.heights[column] = self.heights[column].max(row + 1);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
