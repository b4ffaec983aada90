//! Filesystem emitter with change-skip semantics.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use platgen_emit::error::Result;
use platgen_emit::{EmitError, EmitOutcome, Emitter, WritePolicy};

/// Writes generated files to disk.
///
/// Under [`WritePolicy::SkipIfUnchanged`] an existing file with identical
/// content is left untouched, so its modification time does not change.
#[derive(Debug, Default)]
pub struct FileEmitter;

impl Emitter for FileEmitter {
    fn emit(&mut self, text: &str, destination: &Path, policy: WritePolicy) -> Result<EmitOutcome> {
        let io_err = |source: std::io::Error| EmitError::Io {
            path: destination.to_path_buf(),
            source,
        };

        if policy == WritePolicy::SkipIfUnchanged {
            match fs::read(destination) {
                Ok(existing) if existing == text.as_bytes() => return Ok(EmitOutcome::Unchanged),
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(io_err(e)),
            }
        }

        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        fs::write(destination, text).map_err(io_err)?;
        Ok(EmitOutcome::Written)
    }
}
