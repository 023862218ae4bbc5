use tracing::debug;

use crate::board::Board;
use crate::board::BoardError;
use crate::pattern::Seeder;
use crate::rules::Fate;

/// Row and column offsets of the 8 neighbors, going clockwise from the top-left
///
///   0 1 2
///   7 . 3
///   6 5 4
///
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Count the live cells around `(row, col)`.
///
/// The board does not wrap: a neighbor only counts if `0 <= r < rows` and `0 <= c < cols`.
pub fn living_neighbor_count(board: &Board, row: usize, col: usize) -> u8 {
    let mut n = 0;

    for (dr, dc) in NEIGHBORS {
        let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };

        if let Some(true) = board.get(r, c) {
            n += 1;
        }
    }

    n
}

/// Owns a [`Board`] and steps it forward one generation at a time.
pub struct Life {
    /// The current generation
    board: Board,

    /// Number of times the board was advanced
    generation: u64,
}

impl Life {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            generation: 0,
        }
    }

    /// Start from a fresh `rows x cols` board seeded by `seeder`
    pub fn seeded(rows: usize, cols: usize, seeder: &dyn Seeder) -> Result<Self, BoardError> {
        let board = seeder.seed_board(rows, cols)?;

        Ok(Self::new(board))
    }

    pub fn current_state(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Compute the next generation, replace the current board with it and return it.
    pub fn advance(&mut self) -> &Board {
        let next = Self::next_board(&self.board);

        self.board = next;
        self.generation += 1;

        debug!(
            generation = self.generation,
            live = self.board.live_count(),
            "advanced board"
        );

        &self.board
    }

    /// Neighbors are always read from `board`, and results are only written to the new board.
    fn next_board(board: &Board) -> Board {
        let (rows, cols) = board.dimensions();
        let mut next = Board::new(rows, cols);

        for row in 0..rows {
            for col in 0..cols {
                let alive = board.get(row, col).unwrap_or(false);
                let neighbors = living_neighbor_count(board, row, col);

                next.set(row, col, Fate::of(alive, neighbors).is_alive());
            }
        }

        next
    }
}
