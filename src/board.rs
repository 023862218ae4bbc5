use std::collections::BTreeSet;

use thiserror::Error;

/// A `(row, col)` position on a [`Board`]. Ordered row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A set of live cells, as produced by a seeder.
pub type LiveSet = BTreeSet<Coord>;

/// Largest number of cells a seeded board may hold
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("The board must be at least {min_rows}x{min_cols}, got {rows}x{cols}")]
    InvalidBoardSize {
        rows: usize,
        cols: usize,
        min_rows: usize,
        min_cols: usize,
    },

    #[error("The board can hold at most {max_cells} cells, got {rows}x{cols}")]
    BoardTooLarge {
        rows: usize,
        cols: usize,
        max_cells: usize,
    },
}

/// Fails with [`BoardError::BoardTooLarge`] if a `rows x cols` board would exceed [`MAX_CELLS`]
pub fn check_capacity(rows: usize, cols: usize) -> Result<usize, BoardError> {
    rows.checked_mul(cols)
        .filter(|&n| n <= MAX_CELLS)
        .ok_or(BoardError::BoardTooLarge {
            rows,
            cols,
            max_cells: MAX_CELLS,
        })
}

/// A fixed-size grid of cells, each either alive or dead.
///
/// The dimensions are set at construction and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Number of rows
    rows: usize,

    /// Number of columns
    cols: usize,

    /// Row-major cell states
    cells: Vec<bool>,
}

impl Board {
    /// Create a board where every cell is dead.
    ///
    /// Panics if `rows * cols` overflows. Use [`check_capacity`] first for untrusted sizes.
    pub fn new(rows: usize, cols: usize) -> Self {
        let Some(n) = rows.checked_mul(cols) else {
            panic!("board is too large");
        };

        Self {
            rows,
            cols,
            cells: vec![false; n],
        }
    }

    /// Create a board whose live cells are exactly `live`.
    ///
    /// Panics if any coordinate lies outside the board.
    pub fn with_live_cells<I, C>(rows: usize, cols: usize, live: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Coord>,
    {
        let mut board = Self::new(rows, cols);

        for coord in live {
            let Coord { row, col } = coord.into();
            board.set(row, col, true);
        }

        board
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// State of the cell at `(row, col)`, or `None` if it is off the board
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.index(row, col)])
    }

    /// Whether `coord` is a live cell. Anything off the board is dead.
    pub fn is_alive(&self, coord: Coord) -> bool {
        self.get(coord.row, coord.col).unwrap_or(false)
    }

    /// Sets a single cell
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        assert!(row < self.rows, "row is out of bounds");
        assert!(col < self.cols, "col is out of bounds");

        let i = self.index(row, col);
        self.cells[i] = alive;
    }

    /// Live cells, in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| self.coord(i))
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterate over the rows of the board, top to bottom
    ///
    /// A board with rows but no columns yields that many empty rows.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[bool]> + '_ {
        (0..self.rows).map(move |row| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn coord(&self, i: usize) -> Coord {
        Coord::new(i / self.cols, i % self.cols)
    }
}
