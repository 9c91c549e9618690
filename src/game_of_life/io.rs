//! Text format I/O for Game of Life boards
//!
//! Format: the row count on the first line, the column count on the second,
//! then one line per row with `X` for alive cells and any other character
//! (conventionally `-`) for dead ones.

use super::{Board, BoardError, Cell};
use anyhow::{Context, Result};
use std::path::Path;

/// Load a board from a text file
pub fn load_board_from_file<P: AsRef<Path>>(path: P) -> Result<Board> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read board file: {}", path.as_ref().display()))?;

    let board = parse_board(&content)
        .with_context(|| format!("Failed to parse board from file: {}", path.as_ref().display()))?;

    log::debug!(
        "loaded {}x{} board with {} living cells from {}",
        board.rows(),
        board.cols(),
        board.living_count(),
        path.as_ref().display()
    );
    Ok(board)
}

/// Parse a board from its text representation.
///
/// Data lines lose a trailing `\r` and nothing else, so trailing spaces count
/// as cells. Anything after the declared rows is ignored.
pub fn parse_board(content: &str) -> Result<Board, BoardError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')));

    let rows = parse_dimension(lines.next(), 1, "row count")?;
    let cols = parse_dimension(lines.next(), 2, "column count")?;

    if rows.checked_mul(cols).is_none() {
        return Err(BoardError::malformed(2, format!("{}x{} board is too large", rows, cols)));
    }

    // Cells grow with the rows actually present, never from the declared size alone
    let mut cells = Vec::new();

    for row in 0..rows {
        let (line_no, line) = lines.next().ok_or_else(|| {
            BoardError::malformed(
                row + 3,
                format!("expected {} rows, found only {}", rows, row),
            )
        })?;

        let width = line.chars().count();
        if width != cols {
            return Err(BoardError::malformed(
                line_no,
                format!("row {} has {} cells, expected {}", row, width, cols),
            ));
        }

        cells.extend(line.chars().map(Cell::from_char));
    }

    Ok(Board::from_parts(rows, cols, cells))
}

fn parse_dimension(
    line: Option<(usize, &str)>,
    expected_line: usize,
    what: &str,
) -> Result<usize, BoardError> {
    let (line_no, text) =
        line.ok_or_else(|| BoardError::malformed(expected_line, format!("missing {}", what)))?;

    text.trim().parse().map_err(|_| {
        BoardError::malformed(line_no, format!("invalid {} '{}'", what, text.trim()))
    })
}

/// Convert a board to its text representation
pub fn board_to_string(board: &Board) -> String {
    format!("{}\n{}\n{}", board.rows(), board.cols(), board)
}

/// Save a board to a text file
pub fn save_board_to_file<P: AsRef<Path>>(board: &Board, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, board_to_string(board))
        .with_context(|| format!("Failed to write board to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Create example board files
pub fn create_example_boards<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let examples = [
        ("glider.txt", "6\n6\n-X----\n--X---\nXXX---\n------\n------\n------\n"),
        ("blinker.txt", "5\n5\n-----\n-----\n-XXX-\n-----\n-----\n"),
        ("block.txt", "4\n4\n----\n-XX-\n-XX-\n----\n"),
        (
            "simple-edge.txt",
            "5\n9\n--------X\n--------X\n--------X\n---------\n---------\n",
        ),
    ];

    for (name, content) in examples {
        std::fs::write(dir.join(name), content)
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}
