//! Game of Life transition rules (B3/S23)

use super::{Board, Cell};
use crate::config::TopologyMode;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Next state of a cell given its current state and live neighbor count
pub fn next_cell(current: Cell, live_neighbors: u8) -> Cell {
    match live_neighbors {
        0..=1 => Cell::Dead,
        2 => current,
        3 => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Advance the board one generation.
///
/// Every cell is computed from `board` alone and written into a fresh board,
/// so the input is never observed half-updated.
pub fn tick(board: &Board, topology: TopologyMode) -> Board {
    let cells = board
        .iter()
        .map(|(row, col, cell)| next_cell(cell, board.count_live_neighbors(row, col, topology)))
        .collect();
    let next = Board::from_parts(board.rows(), board.cols(), cells);

    log::trace!(
        "tick {}x{} ({}): {} -> {} alive",
        board.rows(),
        board.cols(),
        topology,
        board.living_count(),
        next.living_count()
    );
    next
}

/// Advance the board `generations` times
pub fn tick_n(mut board: Board, topology: TopologyMode, generations: usize) -> Board {
    for _ in 0..generations {
        board = tick(&board, topology);
    }
    board
}

/// Endless iterator over the generations following a board
#[derive(Debug, Clone)]
pub struct Generations {
    current: Board,
    topology: TopologyMode,
}

impl Generations {
    pub fn new(board: Board, topology: TopologyMode) -> Self {
        Self {
            current: board,
            topology,
        }
    }
}

impl Iterator for Generations {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        let next = tick(&self.current, self.topology);
        self.current = next.clone();
        Some(next)
    }
}

/// Long-run behavior of a board, as far as it was followed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Evolution {
    /// No living cells remain from this generation on
    Extinct { generation: usize },
    /// The board stopped changing at this generation
    StillLife { generation: usize },
    /// The board repeats every `period` generations starting at `start`
    Oscillator { start: usize, period: usize },
    /// No repetition within the examined generations
    Unsettled { generations: usize },
}

impl fmt::Display for Evolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evolution::Extinct { generation } => write!(f, "extinct at generation {}", generation),
            Evolution::StillLife { generation } => {
                write!(f, "still life from generation {}", generation)
            }
            Evolution::Oscillator { start, period } => {
                write!(f, "oscillator with period {} from generation {}", period, start)
            }
            Evolution::Unsettled { generations } => {
                write!(f, "no repetition within {} generations", generations)
            }
        }
    }
}

/// Follow a board for up to `max_generations` and classify where it ends up
pub fn classify(board: &Board, topology: TopologyMode, max_generations: usize) -> Evolution {
    if board.is_empty() {
        return Evolution::Extinct { generation: 0 };
    }

    let mut seen = HashMap::new();
    seen.insert(board.clone(), 0);

    for (generation, next) in Generations::new(board.clone(), topology)
        .take(max_generations)
        .enumerate()
        .map(|(i, next)| (i + 1, next))
    {
        if next.is_empty() {
            return Evolution::Extinct { generation };
        }
        if let Some(&start) = seen.get(&next) {
            let period = generation - start;
            return if period == 1 {
                Evolution::StillLife { generation: start }
            } else {
                Evolution::Oscillator { start, period }
            };
        }
        seen.insert(next, generation);
    }

    Evolution::Unsettled {
        generations: max_generations,
    }
}
