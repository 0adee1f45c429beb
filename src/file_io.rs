//! Reading, writing and printing of maze descriptions.
//!
//! A maze description is a whitespace separated sequence of tokens: the number of rows, the number
//! of columns and then one token per row made of the characters `0` (empty), `1` (wall), `2`
//! (start), `3` (goal) and `4` (path).

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use log::info;

use crate::{
    error::{MazeError, Result},
    grid::Grid,
    types::Cell,
};

/// Parses a maze description.
///
/// Row tokens must be exactly as long as the declared column count, and exactly as many row tokens
/// as declared must follow the header. Path cells are accepted and kept as already marked.
///
/// # Errors
///
/// Returns [`MazeError::Format`] if the header is missing or not a number, if the number of row
/// tokens differs from the declared one, or if a row has the wrong length or an unknown character.
pub fn parse(input: &str) -> Result<Grid> {
    let mut tokens = input.split_whitespace();
    let rows = parse_dimension(tokens.next(), "row count")?;
    let cols = parse_dimension(tokens.next(), "column count")?;

    let mut cells = Vec::new();
    for row in 0..rows {
        let token = tokens.next().ok_or_else(|| {
            MazeError::Format(format!("expected {rows} rows but found only {row}"))
        })?;
        cells.push(parse_row(token, row, cols)?);
    }

    if let Some(extra) = tokens.next() {
        return Err(MazeError::Format(format!(
            "unexpected token `{extra}` after the last of {rows} rows"
        )));
    }

    Grid::new(cols, cells)
}

/// Parses one of the two header numbers.
fn parse_dimension(token: Option<&str>, name: &str) -> Result<usize> {
    let token = token.ok_or_else(|| MazeError::Format(format!("missing {name}")))?;

    token
        .parse()
        .map_err(|err| MazeError::Format(format!("invalid {name} `{token}`: {err}")))
}

/// Parses the cells of a single row token.
fn parse_row(token: &str, row: usize, cols: usize) -> Result<Vec<Cell>> {
    let cells = token
        .chars()
        .enumerate()
        .map(|(col, symbol)| {
            Cell::from_char(symbol).ok_or_else(|| {
                MazeError::Format(format!(
                    "unknown cell `{symbol}` at row {row}, column {col}"
                ))
            })
        })
        .collect::<Result<Vec<Cell>>>()?;

    if cells.len() != cols {
        return Err(MazeError::Format(format!(
            "row {row} has {} cells, expected {cols}",
            cells.len()
        )));
    }

    Ok(cells)
}

/// Reads and parses the maze description stored at `path`.
///
/// # Errors
///
/// Returns [`MazeError::Io`] if the file cannot be read and [`MazeError::Format`] if its contents
/// are not a valid maze description.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|err| MazeError::io(path, err))?;
    let grid = parse(&contents)?;

    info!(
        "loaded {}x{} maze from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );

    Ok(grid)
}

/// Writes the grid rows, one per line, with no header.
///
/// # Errors
///
/// Propagates failures of the underlying writer.
pub fn print_to<W: Write>(grid: &Grid, writer: &mut W) -> io::Result<()> {
    for row in grid.iter_rows() {
        let line: String = row.iter().map(|cell| cell.symbol()).collect();
        writeln!(writer, "{line}")?;
    }

    Ok(())
}

/// Writes the grid as a maze description: row count, column count and one row per line.
///
/// # Errors
///
/// Propagates failures of the underlying writer.
pub fn write_to<W: Write>(grid: &Grid, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", grid.rows())?;
    writeln!(writer, "{}", grid.cols())?;

    print_to(grid, writer)
}

/// Stores the grid as a maze description at `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`MazeError::Io`] if the file cannot be created or written.
pub fn save<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|err| MazeError::io(path, err))?;
    let mut writer = BufWriter::new(file);

    write_to(grid, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(|err| MazeError::io(path, err))?;

    info!("saved maze to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::coord::Coord;

    #[test]
    fn test_parse_valid_maze() {
        let grid = parse("3 4\n2010\n0010\n0003\n").expect("valid maze should parse");

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.cell_at(Coord::new(0, 0)).ok(), Some(Cell::Start));
        assert_eq!(grid.cell_at(Coord::new(2, 1)).ok(), Some(Cell::Wall));
        assert_eq!(grid.cell_at(Coord::new(3, 2)).ok(), Some(Cell::Goal));
    }

    #[test]
    fn test_parse_ignores_incidental_whitespace() {
        let compact = parse("1 5 20003").expect("single line layout should parse");
        let spread = parse("  1\r\n\n5\t\n 20003  \n\n").expect("spread layout should parse");

        assert_eq!(compact, spread);
    }

    #[test]
    fn test_parse_tolerates_path_cells() {
        let grid = parse("1 4\n2443").expect("path cells are tolerated on input");

        assert_eq!(grid.count(Cell::Path), 2);
    }

    #[test]
    fn test_parse_missing_header() {
        assert!(
            matches!(parse(""), Err(MazeError::Format(_))),
            "empty input has no row count"
        );
        assert!(
            matches!(parse("3"), Err(MazeError::Format(_))),
            "column count missing"
        );
    }

    #[test]
    fn test_parse_invalid_header() {
        assert!(
            matches!(parse("x 3\n203"), Err(MazeError::Format(_))),
            "row count must be a number"
        );
        assert!(
            matches!(parse("1 -3\n203"), Err(MazeError::Format(_))),
            "column count must not be negative"
        );
    }

    #[test]
    fn test_parse_too_few_rows() {
        let result = parse("3 3\n200\n003");

        assert!(
            matches!(result, Err(MazeError::Format(ref message)) if message.contains("only 2")),
            "a missing row should be reported"
        );
    }

    #[test]
    fn test_parse_too_many_rows() {
        assert!(
            matches!(parse("1 3\n203\n000"), Err(MazeError::Format(_))),
            "surplus rows should be rejected"
        );
    }

    #[test]
    fn test_parse_rows_without_columns() {
        let result = parse("2 0");

        assert!(
            matches!(result, Err(MazeError::Format(_))),
            "rows without columns have no tokens to read"
        );
        assert!(
            matches!(parse("2 0\n\n\n"), Err(MazeError::Format(_))),
            "blank lines are not empty rows"
        );
    }

    #[test]
    fn test_parse_wrong_row_length() {
        assert!(
            matches!(parse("2 3\n2000\n003"), Err(MazeError::Format(_))),
            "long row should be rejected"
        );
        assert!(
            matches!(parse("2 3\n20\n003"), Err(MazeError::Format(_))),
            "short row should be rejected"
        );
    }

    #[test]
    fn test_parse_unknown_character() {
        let result = parse("1 3\n2x3");

        assert!(
            matches!(result, Err(MazeError::Format(ref message)) if message.contains("`x`")),
            "unknown characters should be named"
        );
    }

    #[test]
    fn test_print_to_renders_rows_only() {
        let grid = parse("2 3\n241\n003").expect("valid maze should parse");
        let mut output = Vec::new();

        print_to(&grid, &mut output).expect("writing to memory cannot fail");

        assert_eq!(String::from_utf8_lossy(&output), "241\n003\n");
    }

    #[test]
    fn test_write_to_includes_header() {
        let grid = parse("1 5\n24443").expect("valid maze should parse");
        let mut output = Vec::new();

        write_to(&grid, &mut output).expect("writing to memory cannot fail");

        assert_eq!(String::from_utf8_lossy(&output), "1\n5\n24443\n");
    }

    #[test]
    fn test_save_then_load_keeps_contents() {
        let dir = tempdir().expect("failed to create temporary directory");
        let path = dir.path().join("maze.txt");
        let grid = parse("3  3 201 \n 001\n\n403").expect("valid maze should parse");

        save(&grid, &path).expect("saving to a temporary directory should succeed");
        let reloaded = load(&path).expect("saved maze should load");

        assert_eq!(reloaded, grid);
        assert_eq!(
            fs::read_to_string(&path).expect("saved file should be readable"),
            "3\n3\n201\n001\n403\n"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().expect("failed to create temporary directory");
        let path = dir.path().join("absent.txt");

        let result = load(&path);
        assert!(
            matches!(result, Err(MazeError::Io { ref path, .. }) if path.ends_with("absent.txt")),
            "a missing file should be reported as an I/O error"
        );
    }

    #[test]
    fn test_save_to_missing_directory() {
        let dir = tempdir().expect("failed to create temporary directory");
        let path = dir.path().join("missing").join("result.txt");
        let grid = parse("1 2\n23").expect("valid maze should parse");

        let result = save(&grid, &path);
        assert!(
            matches!(result, Err(MazeError::Io { .. })),
            "writing into a missing directory should fail"
        );
    }
}
