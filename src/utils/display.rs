//! Display and output formatting utilities

use crate::game_of_life::Board;

/// Format boards for terminal output
pub struct BoardFormatter;

impl BoardFormatter {
    /// The printer format: one row per line, `X` alive, `-` dead
    pub fn format_plain(board: &Board) -> String {
        board.to_string()
    }

    /// Format a board with row and column indices
    pub fn format_with_coords(board: &Board) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..board.cols() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for (row, line) in board.to_string().lines().enumerate() {
            output.push_str(&format!("{:2} ", row));
            for ch in line.chars() {
                output.push(' ');
                output.push(ch);
            }
            output.push('\n');
        }

        output
    }

    /// Two boards next to each other, e.g. a generation and its successor
    pub fn format_side_by_side(left: &Board, right: &Board) -> String {
        let left_text = left.to_string();
        let right_text = right.to_string();
        let left_lines: Vec<&str> = left_text.lines().collect();
        let right_lines: Vec<&str> = right_text.lines().collect();

        let height = left_lines.len().max(right_lines.len());
        let mut output = String::new();

        for i in 0..height {
            let l = left_lines.get(i).copied().unwrap_or("");
            let r = right_lines.get(i).copied().unwrap_or("");
            output.push_str(&format!("{:<width$}  |  {}\n", l, r, width = left.cols()));
        }

        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
