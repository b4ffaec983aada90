//! Errors raised at the emission seam.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for results within the emit crate.
pub type Result<T> = std::result::Result<T, EmitError>;

/// Errors an [`Emitter`](crate::emitter::Emitter) may report.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
