//! Pack-specific error types.
//!
//! Every variant is a load failure for exactly one pack. The driver reports
//! it in place of that pack's violation list and carries on with the rest.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a content pack.
#[derive(Debug, Error)]
pub enum PackError {
    /// The pack file does not exist.
    #[error("required file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The pack file exists but could not be read (permissions, invalid
    /// UTF-8, ...).
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parsing failed.
    #[error("failed to parse YAML at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The document parsed but cannot be shaped into a pack (root is not a
    /// mapping, or a field holds the wrong kind of value).
    #[error("unexpected document shape at {path}: {detail}")]
    Shape { path: PathBuf, detail: String },
}

impl PackError {
    /// Path of the pack that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FileNotFound { path }
            | Self::Read { path, .. }
            | Self::YamlParse { path, .. }
            | Self::Shape { path, .. } => path,
        }
    }
}

/// Result type alias for pack operations.
pub type PackResult<T> = Result<T, PackError>;
