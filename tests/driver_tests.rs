use std::io::Cursor;

use life::driver;

fn transcript(input: &str) -> anyhow::Result<String> {
    let mut out = Vec::new();
    driver::run(Cursor::new(input), &mut out)?;

    Ok(String::from_utf8(out)?)
}

#[test]
fn two_generations() -> anyhow::Result<()> {
    let out = transcript("5\n5\n\n")?;

    insta::assert_snapshot!(out.trim_end(), @r#"
    Welcome to the Game of Life.
    Please enter the height and width of the game board you'd like to create:
    *****
    * O *
    *  O*
    *OOO*
    *****
    Press "ENTER" to move to the next generation.

    *****
    *   *
    *O O*
    * OO*
    *****
    Press "ENTER" to move to the next generation.
    "#);

    Ok(())
}

#[test]
fn any_line_advances() -> anyhow::Result<()> {
    let out = transcript("8\n8\nnext\n\nq\n")?;

    assert_eq!(out.matches("Press \"ENTER\"").count(), 4);

    Ok(())
}

#[test]
fn bad_dimension() {
    let err = transcript("five\n5\n").unwrap_err();

    assert_eq!(
        format!("{err:#}"),
        "Failed to convert \"five\" into a board height"
    );
}

#[test]
fn board_too_small() {
    let err = transcript("3\n2\n").unwrap_err();

    assert_eq!(
        format!("{err:#}"),
        "Failed to initialize the Game of Life with a 3x2 board: \
         The board must be at least 3x3, got 3x2"
    );
}

#[test]
fn board_too_large() {
    let err = transcript("3\n18446744073709551615\n").unwrap_err();

    assert_eq!(
        format!("{err:#}"),
        "Failed to initialize the Game of Life with a 3x18446744073709551615 board: \
         The board can hold at most 16777216 cells, got 3x18446744073709551615"
    );

    assert!(transcript("100000\n100000\n").is_err());
}
