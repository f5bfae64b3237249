//! Reading and writing records on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::record::ResumeRecord;

/// Errors that can occur when loading a record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Resume data file not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Malformed resume data in {}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },
}

impl ResumeRecord {
    /// Load and validate a record from a JSON file.
    pub fn load(path: &Path) -> Result<Self, RecordError> {
        if !path.exists() {
            return Err(RecordError::NotFound(path.to_path_buf()));
        }

        let source = fs::read_to_string(path).map_err(|source| RecordError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let record = Self::from_json(&source).map_err(|e| RecordError::Malformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::debug!("Loaded resume data for {} from {}", record.name, path.display());

        Ok(record)
    }

    /// Parse a record from JSON text.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Serialize with two-space indentation, keys in declaration order.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
