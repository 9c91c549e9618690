//! Board representation and topology-aware neighbor lookups

use super::error::BoardError;
use crate::config::TopologyMode;
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    pub const ALIVE_CHAR: char = 'X';
    pub const DEAD_CHAR: char = '-';

    /// `'X'` is alive, anything else is dead
    pub fn from_char(ch: char) -> Self {
        if ch == Self::ALIVE_CHAR {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Alive => Self::ALIVE_CHAR,
            Cell::Dead => Self::DEAD_CHAR,
        }
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

/// A fixed-size rectangular grid of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with every cell dead. A zero dimension gives an empty board.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Create a board from nested rows, all of which must have the same length
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(BoardError::malformed(
                    0,
                    format!("row {} has length {}, expected {}", i, row.len(), width),
                ));
            }
        }

        Ok(Self {
            rows: height,
            cols: width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Assemble a board from row-major cells already known to fit `rows x cols`
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if row < self.rows && col < self.cols {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Get the cell at the given coordinates
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[self.index(row, col)])
    }

    /// Set the cell at the given coordinates
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        self.check_bounds(row, col)?;
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Whether signed coordinates fall inside the board, without wrapping
    pub fn is_in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Count the live cells among the 8 surrounding `(row, col)`.
    ///
    /// Under [`TopologyMode::Wrapped`] coordinates are reduced with a
    /// non-negative modulo, so on boards narrower than 3 cells the same
    /// neighbor may be counted more than once.
    pub fn count_live_neighbors(&self, row: usize, col: usize, topology: TopologyMode) -> u8 {
        if self.rows == 0 || self.cols == 0 {
            return 0;
        }

        let (row, col) = (row as isize, col as isize);
        let count = iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&offset| offset != (0, 0))
            .filter(|&(dr, dc)| self.is_neighbor_alive(row + dr, col + dc, topology))
            .count();

        count as u8
    }

    fn is_neighbor_alive(&self, row: isize, col: isize, topology: TopologyMode) -> bool {
        match topology {
            TopologyMode::Bounded => {
                self.is_in_bounds(row, col)
                    && self.cells[self.index(row as usize, col as usize)].is_alive()
            }
            TopologyMode::Wrapped => {
                let wrapped_row = row.rem_euclid(self.rows as isize) as usize;
                let wrapped_col = col.rem_euclid(self.cols as isize) as usize;
                self.cells[self.index(wrapped_row, wrapped_col)].is_alive()
            }
        }
    }

    /// Iterate over `(row, col, cell)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / cols, idx % cols, cell))
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|&(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Check if the board has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}", self.cells[self.index(row, col)].to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
