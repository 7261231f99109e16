//! Error taxonomy for key generation and persistence

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the key provisioning pipeline.
///
/// Configuration errors abort a run before any key material exists.
/// Generation and persistence errors abort the batch at the failing
/// index; artifacts already written stay on disk.
#[derive(Debug, Error)]
pub enum KeygenError {
    #[error("count must be at least 1")]
    CountTooSmall,

    #[error("count cannot exceed {max} (safety limit)")]
    CountTooLarge { max: usize },

    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("key generation failed: {source}")]
    EntropyUnavailable { source: rand_core::Error },

    #[error("invalid {kind} key size: got {got}, expected {expected}")]
    InvalidKeySize {
        kind: &'static str,
        got: usize,
        expected: usize,
    },

    #[error("failed to write {artifact}: {source}")]
    WriteArtifact {
        artifact: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize key metadata: {0}")]
    SerializeMetadata(#[from] serde_yaml::Error),
}
