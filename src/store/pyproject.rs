use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use toml_edit::{DocumentMut, Item};
use tracing::{debug, warn};

use crate::error::{Result, VersionBumpError};
use crate::store::{ConfigStore, VERSION_FIELD};

/// The subset of `pyproject.toml` this tool cares about.
///
/// Every other table and key is ignored on read.
#[derive(Debug, Deserialize, Default)]
struct PyProject {
    #[serde(default)]
    tool: Option<ToolSection>,
}

#[derive(Debug, Deserialize, Default)]
struct ToolSection {
    #[serde(default)]
    poetry: Option<PoetrySection>,
}

#[derive(Debug, Deserialize, Default)]
struct PoetrySection {
    #[serde(default)]
    version: Option<toml::Value>,
}

/// `pyproject.toml` backed store.
///
/// Reads go through serde into typed sections; writes go through
/// `toml_edit` so comments, ordering and every other key survive.
#[derive(Debug, Clone)]
pub struct TomlConfigStore {
    path: PathBuf,
}

impl TomlConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TomlConfigStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_content(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| {
            warn!(location = %self.path.display(), error = %e, "cannot read config");
            VersionBumpError::io(&self.path, e)
        })
    }

    fn missing_field(&self) -> VersionBumpError {
        warn!(
            location = %self.path.display(),
            field = VERSION_FIELD,
            "version field missing from config"
        );
        VersionBumpError::field_missing(self.location(), VERSION_FIELD)
    }
}

impl ConfigStore for TomlConfigStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn get_version(&self) -> Result<String> {
        let content = self.read_content()?;
        let project: PyProject = toml::from_str(&content).map_err(|e| {
            warn!(location = %self.path.display(), error = %e, "config is not valid TOML");
            VersionBumpError::config(self.location(), e.to_string())
        })?;

        let value = project
            .tool
            .and_then(|tool| tool.poetry)
            .and_then(|poetry| poetry.version)
            .ok_or_else(|| self.missing_field())?;

        match value {
            toml::Value::String(version) => {
                debug!(location = %self.path.display(), %version, "read version from config");
                Ok(version)
            }
            other => Err(VersionBumpError::malformed(
                other.to_string(),
                format!("{} is not a string", VERSION_FIELD),
            )),
        }
    }

    fn set_version(&mut self, version: &str) -> Result<()> {
        let content = self.read_content()?;
        let mut doc: DocumentMut = content.parse().map_err(|e: toml_edit::TomlError| {
            warn!(location = %self.path.display(), error = %e, "config is not valid TOML");
            VersionBumpError::config(self.location(), e.to_string())
        })?;

        // `Item::get_mut` would insert missing keys, so walk table-likes only.
        let item = doc
            .get_mut("tool")
            .and_then(Item::as_table_like_mut)
            .and_then(|tool| tool.get_mut("poetry"))
            .and_then(Item::as_table_like_mut)
            .and_then(|poetry| poetry.get_mut("version"))
            .filter(|version| !version.is_none())
            .ok_or_else(|| self.missing_field())?;

        if !item.is_str() {
            return Err(VersionBumpError::malformed(
                item.to_string().trim(),
                format!("{} is not a string", VERSION_FIELD),
            ));
        }

        // Keep surrounding whitespace and trailing comments of the old value.
        let decor = item.as_value().map(|value| value.decor().clone());
        *item = toml_edit::value(version);
        if let (Some(decor), Some(value)) = (decor, item.as_value_mut()) {
            *value.decor_mut() = decor;
        }

        fs::write(&self.path, doc.to_string()).map_err(|e| {
            warn!(location = %self.path.display(), error = %e, "cannot write config");
            VersionBumpError::io(&self.path, e)
        })?;
        debug!(location = %self.path.display(), %version, "wrote version to config");
        Ok(())
    }
}
