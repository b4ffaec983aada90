//! Handoff of rendered text to a writer.
//!
//! Rendering never writes. A caller pairs each [`Target`] with a destination
//! and passes the text to an [`Emitter`], which decides whether the write
//! actually happens.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::target::Target;
use crate::unit::{render, RenderInputs};

/// Whether an emitter may skip writing identical content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Always write.
    Always,
    /// Leave the destination alone when its content already matches.
    SkipIfUnchanged,
}

/// What an emitter did with one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmitOutcome {
    Written,
    Unchanged,
}

/// Receives complete generated files.
pub trait Emitter {
    /// Deliver `text` for `destination` under `policy`.
    fn emit(&mut self, text: &str, destination: &Path, policy: WritePolicy) -> Result<EmitOutcome>;
}

/// Emitter that keeps files in memory.
///
/// Useful for dry runs: seed it with the current on-disk content and it
/// reports which destinations would change.
#[derive(Debug, Default, Clone)]
pub struct MemoryEmitter {
    files: BTreeMap<PathBuf, String>,
    writes: usize,
}

impl MemoryEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend `destination` already holds `text`.
    pub fn seed(&mut self, destination: impl Into<PathBuf>, text: impl Into<String>) {
        self.files.insert(destination.into(), text.into());
    }

    pub fn get(&self, destination: &Path) -> Option<&str> {
        self.files.get(destination).map(String::as_str)
    }

    /// Number of writes performed, skipped writes excluded.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Emitter for MemoryEmitter {
    fn emit(&mut self, text: &str, destination: &Path, policy: WritePolicy) -> Result<EmitOutcome> {
        if policy == WritePolicy::SkipIfUnchanged && self.get(destination) == Some(text) {
            return Ok(EmitOutcome::Unchanged);
        }
        self.files.insert(destination.to_path_buf(), text.to_string());
        self.writes += 1;
        Ok(EmitOutcome::Written)
    }
}

/// A destination and the target rendered into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub target: Target,
    pub path: PathBuf,
}

impl Output {
    pub fn new(target: Target, path: impl Into<PathBuf>) -> Self {
        Self {
            target,
            path: path.into(),
        }
    }
}

/// Result of emitting one output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmitReport {
    pub target: Target,
    pub path: PathBuf,
    pub outcome: EmitOutcome,
}

/// Render every output and hand it to `emitter`, in the given order.
///
/// Stops at the first emitter failure.
pub fn generate(
    outputs: &[Output],
    inputs: &RenderInputs<'_>,
    emitter: &mut dyn Emitter,
    policy: WritePolicy,
) -> Result<Vec<EmitReport>> {
    let mut reports = Vec::with_capacity(outputs.len());
    for output in outputs {
        let text = render(output.target, inputs);
        let outcome = emitter.emit(&text, &output.path, policy)?;
        match outcome {
            EmitOutcome::Written => info!(
                target_kind = %output.target,
                path = %output.path.display(),
                "wrote generated file"
            ),
            EmitOutcome::Unchanged => debug!(
                target_kind = %output.target,
                path = %output.path.display(),
                "generated file unchanged"
            ),
        }
        reports.push(EmitReport {
            target: output.target,
            path: output.path.clone(),
            outcome,
        });
    }
    Ok(reports)
}
