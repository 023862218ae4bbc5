use std::io::BufRead;
use std::io::Write;

use anyhow::Context;
use crossterm::queue;
use crossterm::style;

use crate::engine::Life;
use crate::input;
use crate::pattern::Glider;
use crate::render::Frame;

const WELCOME: &str = "Welcome to the Game of Life.\n\
    Please enter the height and width of the game board you'd like to create:\n";

const NEXT_PROMPT: &str = "Press \"ENTER\" to move to the next generation.\n\n";

/// Prints a frame and flushes it
fn draw<W: Write>(out: &mut W, frame: &str) -> anyhow::Result<()> {
    queue!(out, style::Print(frame))?;
    out.flush()?;

    Ok(())
}

/// Run the interactive game.
///
/// Reads the board height and width from `input`, one per line, seeds a glider and draws it.
/// Every further line of input advances the board by one generation and draws it again. Returns
/// once `input` is exhausted.
pub fn run<R, W>(mut input: R, mut out: W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    draw(&mut out, WELCOME)?;

    let rows = input::read_dimension(&mut input, "height")?;
    let cols = input::read_dimension(&mut input, "width")?;

    let mut life = Life::seeded(rows, cols, &Glider).with_context(|| {
        format!("Failed to initialize the Game of Life with a {rows}x{cols} board")
    })?;

    let mut frame = Frame::default();
    draw(&mut out, frame.render(life.current_state()))?;

    loop {
        draw(&mut out, NEXT_PROMPT)?;

        let line = input::read_line(&mut input).context("Failed to read from input")?;
        if line.is_none() {
            break;
        }

        let board = life.advance();
        draw(&mut out, frame.render(board))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::board::BoardError;

    fn transcript(input: &str) -> (anyhow::Result<()>, String) {
        let mut out = Vec::new();
        let res = super::run(Cursor::new(input), &mut out);

        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn board_too_small() {
        let (res, _) = transcript("2\n2\n");

        let err = res.unwrap_err();
        assert_eq!(
            err.downcast_ref::<BoardError>(),
            Some(&BoardError::InvalidBoardSize {
                rows: 2,
                cols: 2,
                min_rows: 3,
                min_cols: 3,
            })
        );
    }

    #[test]
    fn missing_width() {
        let (res, out) = transcript("5\n");

        assert!(res.is_err());
        assert!(out.starts_with("Welcome to the Game of Life."));
    }

    #[test]
    fn stops_at_end_of_input() {
        let (res, out) = transcript("5\n5\n\n\n");

        res.unwrap();
        assert_eq!(out.matches("Press \"ENTER\"").count(), 3);
    }
}
