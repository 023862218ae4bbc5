use std::io;
use std::io::BufRead;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

pub type InputResult<T> = Result<T, InputError>;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Unexpected end of input, expected the board {what}")]
    Eof { what: &'static str },

    #[error("Failed to read the board {what}: {source}")]
    Io {
        what: &'static str,
        source: io::Error,
    },

    #[error("Failed to convert \"{input}\" into a board {what}")]
    NotANumber { what: &'static str, input: String },
}

/// Reads one line from `reader`, without its line break. `None` at end of input.
pub fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();

    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);

    Ok(Some(line))
}

/// Converts `s` to `T`, ignoring surrounding whitespace.
pub fn convert<T: FromStr>(what: &'static str, s: &str) -> InputResult<T> {
    s.trim().parse::<T>().map_err(|_| InputError::NotANumber {
        what,
        input: s.to_string(),
    })
}

/// Reads a line holding a single board dimension, like the height or width
pub fn read_dimension<R: BufRead>(reader: &mut R, what: &'static str) -> InputResult<usize> {
    let line = read_line(reader).map_err(|source| InputError::Io { what, source })?;

    let Some(line) = line else {
        warn!(what, "input ended before the board size was given");
        return Err(InputError::Eof { what });
    };

    convert(what, &line)
}
