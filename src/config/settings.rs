//! Configuration settings for the Game of Life simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub topology: TopologyMode,
    /// Frames shown by `animate` when no count is given on the command line
    pub frames: usize,
    pub frame_delay_ms: u64,
}

/// How neighbor lookups treat the edges of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopologyMode {
    /// Cells beyond the edge are permanently dead
    #[default]
    Bounded,
    /// Opposite edges are adjacent (torus)
    Wrapped,
}

impl TopologyMode {
    pub fn from_wrap(wrap: bool) -> Self {
        if wrap {
            TopologyMode::Wrapped
        } else {
            TopologyMode::Bounded
        }
    }

    pub fn is_wrapped(self) -> bool {
        self == TopologyMode::Wrapped
    }
}

impl fmt::Display for TopologyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyMode::Bounded => write!(f, "bounded"),
            TopologyMode::Wrapped => write!(f, "wrapped"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub board_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub clear_between_frames: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                topology: TopologyMode::Bounded,
                frames: 10,
                frame_delay_ms: 100,
            },
            input: InputConfig {
                board_file: PathBuf::from("boards/simple.txt"),
            },
            display: DisplayConfig {
                clear_between_frames: true,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.frames == 0 {
            anyhow::bail!("Number of frames must be positive");
        }

        if !self.input.board_file.exists() {
            anyhow::bail!(
                "Board file does not exist: {}",
                self.input.board_file.display()
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(topology) = cli_overrides.topology {
            self.simulation.topology = topology;
        }
        if let Some(frames) = cli_overrides.frames {
            self.simulation.frames = frames;
        }
        if let Some(delay) = cli_overrides.frame_delay_ms {
            self.simulation.frame_delay_ms = delay;
        }
        if let Some(ref board_file) = cli_overrides.board_file {
            self.input.board_file = board_file.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub topology: Option<TopologyMode>,
    pub frames: Option<usize>,
    pub frame_delay_ms: Option<u64>,
    pub board_file: Option<PathBuf>,
}
