//! Structured configuration store abstraction
//!
//! A [ConfigStore] hides which file format holds the project's version field,
//! so [crate::source::VersionSource] only deals with "get the version" and
//! "set the version".
//!
//! - [pyproject::TomlConfigStore]: `pyproject.toml`, `[tool.poetry] version`
//! - [memory::MemoryConfigStore]: in-memory store for tests

pub mod memory;
pub mod pyproject;

pub use memory::MemoryConfigStore;
pub use pyproject::TomlConfigStore;

use crate::error::Result;

/// Dotted path of the version field inside a structured config.
pub const VERSION_FIELD: &str = "tool.poetry.version";

/// Capability over a structured config file that holds a version field.
///
/// ## Error Handling
///
/// Implementations report an absent section or key as
/// [crate::error::VersionBumpError::ConfigFieldMissing] and never substitute a
/// default version.
pub trait ConfigStore {
    /// Human-readable location, used in log events and error messages.
    fn location(&self) -> String;

    /// Whether the backing config exists at all.
    fn exists(&self) -> bool;

    /// Raw version value as stored, without any normalisation.
    fn get_version(&self) -> Result<String>;

    /// Replace the version value, leaving everything else untouched.
    fn set_version(&mut self, version: &str) -> Result<()>;
}
