use crate::board::Board;

/// Characters used to draw a [`Board`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub live: char,
    pub dead: char,
    pub border: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            live: 'O',
            dead: ' ',
            border: '*',
        }
    }
}

/// Draws boards as text, one line per row.
///
/// The outermost rows and columns are always drawn as the border glyph. This is only a frame
/// around the picture: those cells are still ordinary cells as far as the rules are concerned.
pub struct Frame {
    /// The frame buffer
    fb: String,

    glyphs: Glyphs,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(Glyphs::default())
    }
}

impl Frame {
    pub fn new(glyphs: Glyphs) -> Self {
        Self {
            fb: String::new(),
            glyphs,
        }
    }

    /// Redraw the frame buffer from `board`. Every row, including the last, ends with `\n`.
    pub fn render(&mut self, board: &Board) -> &str {
        let (rows, cols) = board.dimensions();

        self.fb.clear();
        // One char per cell plus a newline per row, assuming single byte glyphs
        self.fb.reserve(rows * (cols + 1));

        // `rows_iter` yields every row, even on a board with no columns
        for (i, row) in board.rows_iter().enumerate() {
            for (j, &alive) in row.iter().enumerate() {
                let c = if i == 0 || i == rows - 1 || j == 0 || j == cols - 1 {
                    self.glyphs.border
                } else if alive {
                    self.glyphs.live
                } else {
                    self.glyphs.dead
                };

                self.fb.push(c);
            }

            self.fb.push('\n');
        }

        &self.fb
    }
}
