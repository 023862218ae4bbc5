use tracing::info;

use crate::board::Board;
use crate::board::BoardError;
use crate::board::Coord;
use crate::board::LiveSet;
use crate::board::check_capacity;

/// A seed shape that can be placed on an empty board.
pub trait Seeder {
    /// Name of the shape
    fn name(&self) -> &'static str;

    /// Smallest board, as `(rows, cols)`, the shape fits on
    fn min_size(&self) -> (usize, usize);

    /// The live cells of the shape on a `rows x cols` board
    fn seed(&self, rows: usize, cols: usize) -> Result<LiveSet, BoardError>;

    /// Build a `rows x cols` board holding this shape
    fn seed_board(&self, rows: usize, cols: usize) -> Result<Board, BoardError> {
        check_size(self, rows, cols)?;
        let live = self.seed(rows, cols)?;

        info!(
            pattern = self.name(),
            rows,
            cols,
            live = live.len(),
            "seeded board"
        );

        Ok(Board::with_live_cells(rows, cols, live))
    }
}

/// Fails with [`BoardError::InvalidBoardSize`] if `rows x cols` is smaller than `seeder`'s minimum,
/// or with [`BoardError::BoardTooLarge`] if it would hold more than
/// [`MAX_CELLS`](crate::board::MAX_CELLS) cells.
pub fn check_size<S>(seeder: &S, rows: usize, cols: usize) -> Result<(), BoardError>
where
    S: Seeder + ?Sized,
{
    let (min_rows, min_cols) = seeder.min_size();

    if rows < min_rows || cols < min_cols {
        return Err(BoardError::InvalidBoardSize {
            rows,
            cols,
            min_rows,
            min_cols,
        });
    }

    check_capacity(rows, cols)?;

    Ok(())
}

/// The smallest spaceship, placed around the middle of the board.
///
/// ```notrust
///  .O.
///  ..O
///  OOO
/// ```
///
/// See: https://conwaylife.com/wiki/Glider
#[derive(Debug, Clone, Copy, Default)]
pub struct Glider;

impl Seeder for Glider {
    fn name(&self) -> &'static str {
        "Glider"
    }

    fn min_size(&self) -> (usize, usize) {
        (3, 3)
    }

    fn seed(&self, rows: usize, cols: usize) -> Result<LiveSet, BoardError> {
        check_size(self, rows, cols)?;

        // At least 3x3, so the midpoint has a neighbor on every side
        let (r, c) = (rows / 2, cols / 2);

        Ok([
            Coord::new(r - 1, c),
            Coord::new(r, c + 1),
            Coord::new(r + 1, c - 1),
            Coord::new(r + 1, c),
            Coord::new(r + 1, c + 1),
        ]
        .into_iter()
        .collect())
    }
}
