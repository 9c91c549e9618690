//! Batch verification of board fixtures
//!
//! A fixture is a `<name>.txt` board paired with `<name>-after1.txt` (its next
//! generation on a bounded board) and/or `<name>-after1-wrap.txt` (its next
//! generation on a torus).

use super::TickValidator;
use crate::config::TopologyMode;
use crate::game_of_life::load_board_from_file;
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureCase {
    pub name: String,
    pub topology: TopologyMode,
    pub board_path: PathBuf,
    pub expected_path: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct FixtureOutcome {
    pub name: String,
    pub topology: TopologyMode,
    pub passed: bool,
    pub mismatched_cells: usize,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FixtureReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<FixtureOutcome>,
}

impl FixtureReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Pair every board in `boards_dir` with its expected next generations in `expected_dir`
pub fn discover_fixtures<P: AsRef<Path>, Q: AsRef<Path>>(
    boards_dir: P,
    expected_dir: Q,
) -> Result<Vec<FixtureCase>> {
    let boards_dir = boards_dir.as_ref();
    let expected_dir = expected_dir.as_ref();

    let dir = std::fs::read_dir(boards_dir)
        .with_context(|| format!("Failed to read directory: {}", boards_dir.display()))?;

    let mut cases = Vec::new();

    for entry in dir {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if !path.is_file() || path.extension().map_or(true, |ext| ext != "txt") {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        for (suffix, topology) in [
            ("after1", TopologyMode::Bounded),
            ("after1-wrap", TopologyMode::Wrapped),
        ] {
            let expected_path = expected_dir.join(format!("{}-{}.txt", name, suffix));
            if expected_path.is_file() {
                cases.push(FixtureCase {
                    name: name.to_string(),
                    topology,
                    board_path: path.clone(),
                    expected_path,
                });
            }
        }
    }

    if cases.is_empty() {
        log::warn!(
            "no fixtures found pairing {} with {}",
            boards_dir.display(),
            expected_dir.display()
        );
    }

    cases.sort_by(|a, b| {
        (&a.name, a.topology.is_wrapped()).cmp(&(&b.name, b.topology.is_wrapped()))
    });
    Ok(cases)
}

/// Check every case, in parallel, and collect the outcomes in input order
pub fn verify_fixtures(cases: &[FixtureCase]) -> FixtureReport {
    let outcomes: Vec<FixtureOutcome> = cases.par_iter().map(verify_case).collect();
    let passed = outcomes.iter().filter(|outcome| outcome.passed).count();

    FixtureReport {
        total: outcomes.len(),
        passed,
        failed: outcomes.len() - passed,
        outcomes,
    }
}

fn verify_case(case: &FixtureCase) -> FixtureOutcome {
    let loaded = load_board_from_file(&case.board_path)
        .and_then(|before| Ok((before, load_board_from_file(&case.expected_path)?)));

    let (passed, mismatched_cells, error) = match loaded {
        Ok((before, expected)) => {
            let result = TickValidator::new(case.topology).validate(&before, &expected);
            (result.is_valid, result.mismatches.len(), result.error_message)
        }
        Err(e) => {
            log::warn!("fixture {} could not be loaded: {:#}", case.name, e);
            (false, 0, Some(format!("{:#}", e)))
        }
    };

    log::debug!("fixture {} ({}): passed={}", case.name, case.topology, passed);

    FixtureOutcome {
        name: case.name.clone(),
        topology: case.topology,
        passed,
        mismatched_cells,
        error,
    }
}

impl fmt::Display for FixtureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            write!(
                f,
                "{:<24} {:<8} {}",
                outcome.name,
                outcome.topology,
                if outcome.passed { "ok" } else { "FAILED" }
            )?;
            if let Some(ref error) = outcome.error {
                write!(f, "  {}", error)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{} passed, {} failed, {} total", self.passed, self.failed, self.total)
    }
}
