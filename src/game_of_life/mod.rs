//! Game of Life core functionality

pub mod board;
pub mod error;
pub mod io;
pub mod rules;

pub use board::{Board, Cell};
pub use error::BoardError;
pub use io::{create_example_boards, load_board_from_file, parse_board, save_board_to_file};
pub use rules::{classify, tick, tick_n, Evolution, Generations};
