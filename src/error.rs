use std::path::{Path, PathBuf};

use thiserror::Error;

/// Unified error type for version-bump operations
#[derive(Error, Debug)]
pub enum VersionBumpError {
    #[error("No version source found (searched: {searched})")]
    NoVersionSource { searched: String },

    #[error("Malformed version '{raw}': {reason}")]
    MalformedVersion { raw: String, reason: String },

    #[error("Configuration field '{field}' missing in {location}")]
    ConfigFieldMissing { location: String, field: String },

    #[error("Configuration error in {location}: {message}")]
    ConfigParse { location: String, message: String },

    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results in version-bump
pub type Result<T> = std::result::Result<T, VersionBumpError>;

impl VersionBumpError {
    /// Create a missing-source error listing what was looked at
    pub fn no_source(searched: impl Into<String>) -> Self {
        VersionBumpError::NoVersionSource {
            searched: searched.into(),
        }
    }

    /// Create a malformed version error carrying the offending raw string
    pub fn malformed(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        VersionBumpError::MalformedVersion {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing config field error
    pub fn field_missing(location: impl Into<String>, field: impl Into<String>) -> Self {
        VersionBumpError::ConfigFieldMissing {
            location: location.into(),
            field: field.into(),
        }
    }

    /// Create a config parse error
    pub fn config(location: impl Into<String>, message: impl Into<String>) -> Self {
        VersionBumpError::ConfigParse {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        VersionBumpError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True when no backing store could be located at all.
    pub fn is_not_found(&self) -> bool {
        matches!(self, VersionBumpError::NoVersionSource { .. })
    }
}
