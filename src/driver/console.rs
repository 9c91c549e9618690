//! Line-oriented terminal frontend

use super::{Frontend, RunMode};
use crate::config::TopologyMode;
use crate::game_of_life::Board;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Prompts on `output`, reads answers line by line from `input`.
/// Invalid answers re-ask the same question.
pub struct ConsoleFrontend<R, W> {
    input: R,
    output: W,
}

impl ConsoleFrontend<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask until `parse` accepts the trimmed answer
    fn ask<T>(&mut self, question: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
        let mut line = String::new();
        loop {
            write!(self.output, "{}", question)?;
            self.output.flush()?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read answer")?;
            if read == 0 {
                anyhow::bail!("Input closed while waiting for: {}", question.trim());
            }

            if let Some(answer) = parse(line.trim()) {
                return Ok(answer);
            }
            log::debug!("rejected answer {:?}", line.trim());
        }
    }
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModeChoice {
    Animate,
    Tick,
    Quit,
}

fn parse_mode(answer: &str) -> Option<ModeChoice> {
    match answer.to_lowercase().as_str() {
        "a" => Some(ModeChoice::Animate),
        "t" => Some(ModeChoice::Tick),
        "q" => Some(ModeChoice::Quit),
        _ => None,
    }
}

fn parse_frames(answer: &str) -> Option<usize> {
    answer.parse().ok().filter(|&frames| frames > 0)
}

impl<R: BufRead, W: Write> Frontend for ConsoleFrontend<R, W> {
    /// Ask for a board file until an existing path is given
    fn choose_board_file(&mut self) -> Result<PathBuf> {
        self.ask("Grid input file name? ", |answer| {
            let path = PathBuf::from(answer);
            (!answer.is_empty() && path.is_file()).then_some(path)
        })
    }

    fn choose_frames(&mut self) -> Result<usize> {
        self.ask("How many frames: ", parse_frames)
    }

    fn choose_topology(&mut self) -> Result<TopologyMode> {
        let wrap = self.ask("Should the simulation wrap around the grid (y/n)? ", parse_yes_no)?;
        Ok(TopologyMode::from_wrap(wrap))
    }

    fn choose_mode(&mut self) -> Result<RunMode> {
        let mode = match self.ask("a)nimate, t)ick, q)uit? ", parse_mode)? {
            ModeChoice::Animate => RunMode::Animate {
                frames: self.choose_frames()?,
            },
            ModeChoice::Tick => RunMode::Tick,
            ModeChoice::Quit => RunMode::Quit,
        };
        Ok(mode)
    }

    fn show(&mut self, board: &Board) -> Result<()> {
        write!(self.output, "{}", board)?;
        self.output.flush()?;
        Ok(())
    }

    fn pause(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }

    fn clear(&mut self) -> Result<()> {
        write!(self.output, "{}", CLEAR_SCREEN)?;
        self.output.flush()?;
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(self.output, "Have a nice Life!")?;
        Ok(())
    }
}
