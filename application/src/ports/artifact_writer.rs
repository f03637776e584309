//! Artifact writer port.

use provision_domain::RenderedArtifact;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Failed to write {path}: {source}")]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl WriteError {
    pub fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

/// Persists rendered artifacts at their target path.
///
/// Implementations create missing parent directories and replace any
/// existing file.
pub trait ArtifactWriter: Send + Sync {
    fn write(&self, artifact: &RenderedArtifact) -> Result<(), WriteError>;
}
