//! Compare one tick of a board against an expected next generation

use crate::config::TopologyMode;
use crate::game_of_life::{tick, Board, Cell};
use serde::Serialize;
use std::fmt;

/// Checks that advancing a board once yields an expected board
#[derive(Debug, Clone, Copy)]
pub struct TickValidator {
    topology: TopologyMode,
}

/// Result of validating one transition
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub actual: Board,
    pub mismatches: Vec<CellMismatch>,
    pub error_message: Option<String>,
}

/// A cell whose computed next state differs from the expected board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellMismatch {
    pub position: (usize, usize),
    pub expected: Cell,
    pub actual: Cell,
    /// Live neighbors of the cell in the board before the tick
    pub neighbor_count: u8,
}

impl fmt::Display for CellMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cell ({}, {}) expected {} but got {} ({} neighbors)",
            self.position.0,
            self.position.1,
            self.expected.to_char(),
            self.actual.to_char(),
            self.neighbor_count
        )
    }
}

impl TickValidator {
    pub fn new(topology: TopologyMode) -> Self {
        Self { topology }
    }

    /// Tick `before` once and compare the result with `expected`
    pub fn validate(&self, before: &Board, expected: &Board) -> ValidationResult {
        let actual = tick(before, self.topology);

        if (before.rows(), before.cols()) != (expected.rows(), expected.cols()) {
            return ValidationResult {
                is_valid: false,
                actual,
                mismatches: Vec::new(),
                error_message: Some(format!(
                    "Board dimension mismatch: before {}x{}, expected {}x{}",
                    before.rows(),
                    before.cols(),
                    expected.rows(),
                    expected.cols()
                )),
            };
        }

        let mismatches: Vec<CellMismatch> = actual
            .iter()
            .zip(expected.iter())
            .filter(|((_, _, got), (_, _, want))| got != want)
            .map(|((row, col, got), (_, _, want))| CellMismatch {
                position: (row, col),
                expected: want,
                actual: got,
                neighbor_count: before.count_live_neighbors(row, col, self.topology),
            })
            .collect();

        let error_message = (!mismatches.is_empty()).then(|| {
            let mut message = format!("{} cells differ from the expected board", mismatches.len());
            for mismatch in mismatches.iter().take(3) {
                message.push_str(&format!("; {}", mismatch));
            }
            if mismatches.len() > 3 {
                message.push_str(&format!("; ... and {} more", mismatches.len() - 3));
            }
            message
        });

        ValidationResult {
            is_valid: mismatches.is_empty(),
            actual,
            mismatches,
            error_message,
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation Result: {}", if self.is_valid { "VALID" } else { "INVALID" })?;

        if let Some(ref error) = self.error_message {
            writeln!(f, "Error: {}", error)?;
        }

        writeln!(f, "Mismatched cells: {}", self.mismatches.len())?;
        Ok(())
    }
}
