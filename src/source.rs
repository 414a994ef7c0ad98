//! Resolution, reading and writing of the authoritative version location.
//!
//! Two backing stores are supported: a plain text version file and a
//! structured config behind [ConfigStore]. A version file that exists always
//! wins; the config is only consulted otherwise.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::error::{Result, VersionBumpError};
use crate::store::{ConfigStore, TomlConfigStore};

/// Where a version was resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedSource {
    /// Plain text file holding only `major.minor.patch`
    VersionFile(PathBuf),
    /// Version field inside a structured config, identified by its location
    Config(String),
}

impl fmt::Display for ResolvedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedSource::VersionFile(path) => write!(f, "version file {}", path.display()),
            ResolvedSource::Config(location) => write!(f, "config {}", location),
        }
    }
}

/// Candidate version locations for one invocation.
#[derive(Debug, Clone)]
pub struct VersionSource<S = TomlConfigStore> {
    version_file: Option<PathBuf>,
    config: Option<S>,
}

impl VersionSource<TomlConfigStore> {
    /// Build a source from optional file paths; the config path is treated
    /// as a `pyproject.toml`.
    pub fn new(version_file: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        VersionSource {
            version_file,
            config: config_file.map(TomlConfigStore::new),
        }
    }
}

impl<S: ConfigStore> VersionSource<S> {
    /// Build a source over an arbitrary config store
    pub fn with_store(version_file: Option<PathBuf>, config: Option<S>) -> Self {
        VersionSource {
            version_file,
            config,
        }
    }

    pub fn config(&self) -> Option<&S> {
        self.config.as_ref()
    }

    /// True if at least one candidate location was supplied.
    pub fn has_candidates(&self) -> bool {
        self.version_file.is_some() || self.config.is_some()
    }

    /// Pick the authoritative location.
    ///
    /// # Returns
    /// * `Ok(ResolvedSource::VersionFile)` - version file given and present
    /// * `Ok(ResolvedSource::Config)` - otherwise, config given and present
    /// * `Err(NoVersionSource)` - nothing usable
    pub fn resolve(&self) -> Result<ResolvedSource> {
        if let Some(path) = &self.version_file {
            if path.is_file() {
                debug!(path = %path.display(), "using version file");
                return Ok(ResolvedSource::VersionFile(path.clone()));
            }
            debug!(path = %path.display(), "version file not present");
        }

        if let Some(store) = &self.config {
            if store.exists() {
                debug!(location = %store.location(), "using config");
                return Ok(ResolvedSource::Config(store.location()));
            }
            debug!(location = %store.location(), "config not present");
        }

        let searched = self.describe_candidates();
        warn!(%searched, "no version source found");
        Err(VersionBumpError::no_source(searched))
    }

    /// Raw version string from the resolved location.
    pub fn read(&self) -> Result<String> {
        match self.resolve()? {
            ResolvedSource::VersionFile(path) => {
                let content = fs::read_to_string(&path).map_err(|e| {
                    warn!(path = %path.display(), error = %e, "cannot read version file");
                    VersionBumpError::io(&path, e)
                })?;
                Ok(content.trim().to_string())
            }
            ResolvedSource::Config(location) => {
                let store = self
                    .config
                    .as_ref()
                    .ok_or_else(|| VersionBumpError::no_source(location))?;
                let raw = store.get_version()?;
                Ok(strip_quotes(&raw).to_string())
            }
        }
    }

    /// Persist `version` to the resolved location.
    ///
    /// The version file is overwritten whole, without a trailing newline.
    /// A config only has its version value replaced.
    pub fn write(&mut self, version: &str) -> Result<()> {
        match self.resolve()? {
            ResolvedSource::VersionFile(path) => {
                fs::write(&path, version).map_err(|e| {
                    warn!(path = %path.display(), error = %e, "cannot write version file");
                    VersionBumpError::io(&path, e)
                })?;
                info!(path = %path.display(), %version, "updated version file");
            }
            ResolvedSource::Config(location) => {
                let store = self
                    .config
                    .as_mut()
                    .ok_or_else(|| VersionBumpError::no_source(location.clone()))?;
                store.set_version(version)?;
                info!(%location, %version, "updated config");
            }
        }
        Ok(())
    }

    fn describe_candidates(&self) -> String {
        let mut searched = Vec::new();
        if let Some(path) = &self.version_file {
            searched.push(format!("version file {}", path.display()));
        }
        if let Some(store) = &self.config {
            searched.push(format!("config {}", store.location()));
        }
        if searched.is_empty() {
            "no --version-file or --pyproject-file given".to_string()
        } else {
            searched.join(", ")
        }
    }
}

fn strip_quotes(raw: &str) -> &str {
    raw.trim().trim_matches(&['"', '\''][..])
}
