//! Interactive driver around the simulation engine
//!
//! Everything that talks to a person lives here: prompts, printing, frame
//! pacing. The engine in [`crate::game_of_life`] never sees any of it.

pub mod console;

pub use console::ConsoleFrontend;

use crate::config::TopologyMode;
use crate::game_of_life::{tick, Board, Generations};
use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

/// What the user asked the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Show the board, advance once, show the result
    Tick,
    /// Advance and show `frames` generations with a pause between them
    Animate { frames: usize },
    Quit,
}

/// The presentation surface a [`Session`] drives
pub trait Frontend {
    fn choose_board_file(&mut self) -> Result<PathBuf>;
    fn choose_topology(&mut self) -> Result<TopologyMode>;
    fn choose_mode(&mut self) -> Result<RunMode>;
    fn choose_frames(&mut self) -> Result<usize>;
    fn show(&mut self, board: &Board) -> Result<()>;
    fn pause(&mut self, delay: Duration);
    fn clear(&mut self) -> Result<()>;
    fn farewell(&mut self) -> Result<()>;
}

/// A mode picked before the session starts, without a frame count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeRequest {
    Tick,
    Animate,
    Quit,
}

/// Answers known before the session starts (command line, config file).
/// Anything left as `None` is asked for through the frontend.
#[derive(Debug, Clone, Default)]
pub struct Preset {
    pub board_file: Option<PathBuf>,
    pub topology: Option<TopologyMode>,
    pub mode: Option<ModeRequest>,
    pub frames: Option<usize>,
}

impl Preset {
    pub fn resolve_board_file<F: Frontend + ?Sized>(&self, frontend: &mut F) -> Result<PathBuf> {
        match self.board_file {
            Some(ref path) => Ok(path.clone()),
            None => frontend.choose_board_file(),
        }
    }

    pub fn resolve_topology<F: Frontend + ?Sized>(&self, frontend: &mut F) -> Result<TopologyMode> {
        match self.topology {
            Some(topology) => Ok(topology),
            None => frontend.choose_topology(),
        }
    }

    /// A preset frame count only applies once animation is chosen; with no
    /// preset mode the frontend asks for both.
    pub fn resolve_mode<F: Frontend + ?Sized>(&self, frontend: &mut F) -> Result<RunMode> {
        let mode = match self.mode {
            Some(ModeRequest::Tick) => RunMode::Tick,
            Some(ModeRequest::Quit) => RunMode::Quit,
            Some(ModeRequest::Animate) => RunMode::Animate {
                frames: match self.frames {
                    Some(frames) => frames,
                    None => frontend.choose_frames()?,
                },
            },
            None => frontend.choose_mode()?,
        };
        Ok(mode)
    }
}

/// One run of the simulator over a loaded board
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    topology: TopologyMode,
    frame_delay: Duration,
    clear_between_frames: bool,
}

impl Session {
    pub fn new(board: Board, topology: TopologyMode) -> Self {
        Self {
            board,
            topology,
            frame_delay: Duration::from_millis(100),
            clear_between_frames: true,
        }
    }

    pub fn with_frame_delay(mut self, frame_delay: Duration) -> Self {
        self.frame_delay = frame_delay;
        self
    }

    pub fn with_clear_between_frames(mut self, clear: bool) -> Self {
        self.clear_between_frames = clear;
        self
    }

    /// Carry out `mode` against the frontend and return the last board shown
    pub fn run<F: Frontend + ?Sized>(self, frontend: &mut F, mode: RunMode) -> Result<Board> {
        log::debug!(
            "running {:?} on {}x{} board ({})",
            mode,
            self.board.rows(),
            self.board.cols(),
            self.topology
        );

        match mode {
            RunMode::Tick => {
                frontend.show(&self.board)?;
                let next = tick(&self.board, self.topology);
                frontend.show(&next)?;
                Ok(next)
            }
            RunMode::Animate { frames } => {
                let mut last = self.board.clone();
                for next in Generations::new(self.board, self.topology).take(frames) {
                    frontend.show(&next)?;
                    frontend.pause(self.frame_delay);
                    if self.clear_between_frames {
                        frontend.clear()?;
                    }
                    last = next;
                }
                Ok(last)
            }
            RunMode::Quit => {
                frontend.farewell()?;
                Ok(self.board)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::parse_board;

    #[derive(Debug, PartialEq)]
    enum Event {
        Asked(&'static str),
        Show(String),
        Pause(Duration),
        Clear,
        Farewell,
    }

    #[derive(Default)]
    struct ScriptedFrontend {
        events: Vec<Event>,
    }

    impl ScriptedFrontend {
        fn asked(&self) -> Vec<&'static str> {
            self.events
                .iter()
                .filter_map(|event| match event {
                    Event::Asked(prompt) => Some(*prompt),
                    _ => None,
                })
                .collect()
        }
    }

    impl Frontend for ScriptedFrontend {
        fn choose_board_file(&mut self) -> Result<PathBuf> {
            self.events.push(Event::Asked("board"));
            Ok(PathBuf::from("prompted.txt"))
        }

        fn choose_topology(&mut self) -> Result<TopologyMode> {
            self.events.push(Event::Asked("topology"));
            Ok(TopologyMode::Wrapped)
        }

        fn choose_mode(&mut self) -> Result<RunMode> {
            self.events.push(Event::Asked("mode"));
            Ok(RunMode::Animate { frames: 7 })
        }

        fn choose_frames(&mut self) -> Result<usize> {
            self.events.push(Event::Asked("frames"));
            Ok(4)
        }

        fn show(&mut self, board: &Board) -> Result<()> {
            self.events.push(Event::Show(board.to_string()));
            Ok(())
        }

        fn pause(&mut self, delay: Duration) {
            self.events.push(Event::Pause(delay));
        }

        fn clear(&mut self) -> Result<()> {
            self.events.push(Event::Clear);
            Ok(())
        }

        fn farewell(&mut self) -> Result<()> {
            self.events.push(Event::Farewell);
            Ok(())
        }
    }

    fn blinker() -> Board {
        parse_board("5\n5\n-----\n-----\n-XXX-\n-----\n-----\n").unwrap()
    }

    #[test]
    fn test_tick_shows_before_and_after() {
        let mut frontend = ScriptedFrontend::default();
        let last = Session::new(blinker(), TopologyMode::Bounded)
            .run(&mut frontend, RunMode::Tick)
            .unwrap();

        assert_eq!(
            frontend.events,
            vec![
                Event::Show("-----\n-----\n-XXX-\n-----\n-----\n".to_string()),
                Event::Show("-----\n--X--\n--X--\n--X--\n-----\n".to_string()),
            ]
        );
        assert_eq!(last.living_cells(), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_animate_paces_and_clears_each_frame() {
        let mut frontend = ScriptedFrontend::default();
        let delay = Duration::from_millis(5);
        let last = Session::new(blinker(), TopologyMode::Bounded)
            .with_frame_delay(delay)
            .run(&mut frontend, RunMode::Animate { frames: 3 })
            .unwrap();

        assert_eq!(frontend.events.len(), 9);
        assert!(matches!(frontend.events[0], Event::Show(_)));
        assert_eq!(frontend.events[1], Event::Pause(delay));
        assert_eq!(frontend.events[2], Event::Clear);
        // Three ticks of a period-2 oscillator land on the vertical phase
        assert_eq!(last.living_cells(), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_animate_without_clearing() {
        let mut frontend = ScriptedFrontend::default();
        Session::new(blinker(), TopologyMode::Bounded)
            .with_frame_delay(Duration::ZERO)
            .with_clear_between_frames(false)
            .run(&mut frontend, RunMode::Animate { frames: 2 })
            .unwrap();

        assert!(!frontend.events.contains(&Event::Clear));
        assert_eq!(frontend.events.len(), 4);
    }

    #[test]
    fn test_zero_frames_returns_input() {
        let mut frontend = ScriptedFrontend::default();
        let last = Session::new(blinker(), TopologyMode::Wrapped)
            .run(&mut frontend, RunMode::Animate { frames: 0 })
            .unwrap();

        assert!(frontend.events.is_empty());
        assert_eq!(last, blinker());
    }

    #[test]
    fn test_quit_says_goodbye() {
        let mut frontend = ScriptedFrontend::default();
        let last = Session::new(blinker(), TopologyMode::Bounded)
            .run(&mut frontend, RunMode::Quit)
            .unwrap();

        assert_eq!(frontend.events, vec![Event::Farewell]);
        assert_eq!(last, blinker());
    }

    #[test]
    fn test_empty_preset_prompts_for_everything() {
        let mut frontend = ScriptedFrontend::default();
        let preset = Preset::default();

        assert_eq!(
            preset.resolve_board_file(&mut frontend).unwrap(),
            PathBuf::from("prompted.txt")
        );
        assert_eq!(preset.resolve_topology(&mut frontend).unwrap(), TopologyMode::Wrapped);
        assert_eq!(
            preset.resolve_mode(&mut frontend).unwrap(),
            RunMode::Animate { frames: 7 }
        );
        assert_eq!(frontend.asked(), vec!["board", "topology", "mode"]);
    }

    #[test]
    fn test_full_preset_skips_prompts() {
        let mut frontend = ScriptedFrontend::default();
        let preset = Preset {
            board_file: Some(PathBuf::from("boards/glider.txt")),
            topology: Some(TopologyMode::Bounded),
            mode: Some(ModeRequest::Animate),
            frames: Some(12),
        };

        assert_eq!(
            preset.resolve_board_file(&mut frontend).unwrap(),
            PathBuf::from("boards/glider.txt")
        );
        assert_eq!(preset.resolve_topology(&mut frontend).unwrap(), TopologyMode::Bounded);
        assert_eq!(
            preset.resolve_mode(&mut frontend).unwrap(),
            RunMode::Animate { frames: 12 }
        );
        assert!(frontend.asked().is_empty());
    }

    #[test]
    fn test_animate_without_frames_asks_only_for_frames() {
        let mut frontend = ScriptedFrontend::default();
        let preset = Preset {
            mode: Some(ModeRequest::Animate),
            ..Preset::default()
        };

        assert_eq!(
            preset.resolve_mode(&mut frontend).unwrap(),
            RunMode::Animate { frames: 4 }
        );
        assert_eq!(frontend.asked(), vec!["frames"]);
    }

    #[test]
    fn test_preset_frames_ignored_without_animate() {
        let mut frontend = ScriptedFrontend::default();
        let tick = Preset {
            mode: Some(ModeRequest::Tick),
            frames: Some(3),
            ..Preset::default()
        };
        assert_eq!(tick.resolve_mode(&mut frontend).unwrap(), RunMode::Tick);

        let unset = Preset {
            frames: Some(3),
            ..Preset::default()
        };
        assert_eq!(
            unset.resolve_mode(&mut frontend).unwrap(),
            RunMode::Animate { frames: 7 }
        );
        assert_eq!(frontend.asked(), vec!["mode"]);
    }
}
