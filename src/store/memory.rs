use crate::error::{Result, VersionBumpError};
use crate::store::{ConfigStore, VERSION_FIELD};

/// In-memory config store for testing without touching the filesystem
#[derive(Debug, Clone)]
pub struct MemoryConfigStore {
    location: String,
    present: bool,
    version: Option<String>,
    writes: usize,
}

impl MemoryConfigStore {
    /// Create a store whose version field holds `version`
    pub fn new(version: impl Into<String>) -> Self {
        MemoryConfigStore {
            location: "memory".to_string(),
            present: true,
            version: Some(version.into()),
            writes: 0,
        }
    }

    /// Create a store that exists but has no version field
    pub fn without_field() -> Self {
        MemoryConfigStore {
            location: "memory".to_string(),
            present: true,
            version: None,
            writes: 0,
        }
    }

    /// Create a store whose backing config does not exist
    pub fn absent() -> Self {
        MemoryConfigStore {
            location: "memory".to_string(),
            present: false,
            version: None,
            writes: 0,
        }
    }

    /// Current stored value
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Number of successful `set_version` calls
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ConfigStore for MemoryConfigStore {
    fn location(&self) -> String {
        self.location.clone()
    }

    fn exists(&self) -> bool {
        self.present
    }

    fn get_version(&self) -> Result<String> {
        self.version
            .clone()
            .ok_or_else(|| VersionBumpError::field_missing(self.location(), VERSION_FIELD))
    }

    fn set_version(&mut self, version: &str) -> Result<()> {
        if self.version.is_none() {
            return Err(VersionBumpError::field_missing(
                self.location(),
                VERSION_FIELD,
            ));
        }
        self.version = Some(version.to_string());
        self.writes += 1;
        Ok(())
    }
}
