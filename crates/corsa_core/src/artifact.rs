//! Persisted output artifact type.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The file produced from a completion response.
///
/// Derived deterministically from a response; written once per run with
/// full truncation, never mutated afterwards.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct OutputArtifact {
    /// Destination file path
    file_path: PathBuf,
    /// Literal header written before the body
    header: String,
    /// Unmodified text body returned by the service
    body: String,
}

impl OutputArtifact {
    /// Creates a new artifact record.
    pub fn new(file_path: PathBuf, header: String, body: String) -> Self {
        Self {
            file_path,
            header,
            body,
        }
    }
}
