//! Conway's Game of Life on a finite board
//!
//! The engine ([`game_of_life`]) owns the board model, neighbor counting under
//! bounded and wrapped topologies, and the generation transition. Everything
//! that reads, prints or prompts lives around it in [`driver`], [`verify`] and
//! [`utils`].

pub mod config;
pub mod driver;
pub mod game_of_life;
pub mod utils;
pub mod verify;

pub use config::{Settings, TopologyMode};
pub use game_of_life::{tick, Board, BoardError, Cell};

use anyhow::Result;
use std::path::Path;

/// Load a board from disk and advance it `generations` times
pub fn simulate_file<P: AsRef<Path>>(
    path: P,
    topology: TopologyMode,
    generations: usize,
) -> Result<Board> {
    let board = game_of_life::load_board_from_file(path)?;
    Ok(game_of_life::tick_n(board, topology, generations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_simulate_file_matches_fixture() {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let next = simulate_file(root.join("boards/simple-edge.txt"), TopologyMode::Wrapped, 1)
            .unwrap();
        let expected = game_of_life::load_board_from_file(
            root.join("boards-after-one-iteration/simple-edge-after1-wrap.txt"),
        )
        .unwrap();
        assert_eq!(next, expected);
    }

    #[test]
    fn test_simple_edge_neighbor_counts() {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let board = game_of_life::load_board_from_file(root.join("boards/simple.txt")).unwrap();
        assert_eq!(board.count_live_neighbors(2, 1, TopologyMode::Bounded), 0);

        let edge =
            game_of_life::load_board_from_file(root.join("boards/simple-edge.txt")).unwrap();
        assert_eq!(edge.count_live_neighbors(1, 0, TopologyMode::Wrapped), 3);
        assert_eq!(edge.count_live_neighbors(1, 0, TopologyMode::Bounded), 0);
    }
}
