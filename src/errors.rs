use std::io;

use thiserror::Error;

/// Error type for ingestion, restore, and persistence failures.
///
/// City resolution and the transport policy are total functions and never
/// surface here; an unresolvable city degrades to a best-guess (possibly
/// empty) string instead of failing the pipeline.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("required column '{field}' has no mapped header")]
    MissingColumn { field: &'static str },
    #[error("roster board contains no usable rows")]
    EmptyBoard,
    #[error("restore failed: {0}")]
    Restore(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("state serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
