use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for the preflight auditor
#[derive(Debug, Error)]
pub enum PreflightError {
    #[error("Failed to read artifact {path}: {source}")]
    ArtifactUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type specific to preflight operations
pub type PreflightResult<T> = Result<T, PreflightError>;
