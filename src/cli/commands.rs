//! `get-version` and `bump-version` as library calls
//!
//! These mirror the CLI subcommands but take plain arguments, so the
//! workflow can be driven programmatically without depending on clap.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::domain::{Version, VersionBump};
use crate::error::{Result, VersionBumpError};
use crate::source::VersionSource;
use crate::store::ConfigStore;

/// Arguments shared by both commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandArgs {
    /// Plain text file holding the version
    pub version_file: Option<PathBuf>,

    /// `pyproject.toml` holding `[tool.poetry] version`
    pub pyproject_file: Option<PathBuf>,

    /// Compute the bump but leave files untouched
    pub dry_run: bool,
}

impl CommandArgs {
    /// Build the version source, refusing when no location was given at all.
    pub fn source(&self) -> Result<VersionSource> {
        if self.version_file.is_none() && self.pyproject_file.is_none() {
            return Err(VersionBumpError::no_source(
                "no --version-file or --pyproject-file given",
            ));
        }
        Ok(VersionSource::new(
            self.version_file.clone(),
            self.pyproject_file.clone(),
        ))
    }
}

/// Result of a successful bump
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    /// Version before the bump
    pub previous: Version,

    /// Version after the bump
    pub current: Version,

    /// Component that was bumped
    pub bump: VersionBump,

    /// Whether the new version was persisted
    pub written: bool,
}

/// Read and parse the current version.
pub fn get_version(args: &CommandArgs) -> Result<Version> {
    let source = args.source()?;
    get_version_from(&source)
}

/// Read, bump, and (unless `dry_run`) write back the version.
pub fn bump_version(bump: VersionBump, args: &CommandArgs) -> Result<BumpOutcome> {
    let mut source = args.source()?;
    bump_version_in(&mut source, bump, args.dry_run)
}

pub fn get_version_from<S: ConfigStore>(source: &VersionSource<S>) -> Result<Version> {
    let raw = source.read()?;
    let version = Version::parse(&raw).map_err(|e| {
        warn!(%raw, error = %e, "cannot parse version");
        e
    })?;
    debug!(%version, "current version");
    Ok(version)
}

/// Bump the version held by an existing source.
///
/// Nothing is written if reading or parsing fails, so a malformed version
/// file never falls through to the config.
pub fn bump_version_in<S: ConfigStore>(
    source: &mut VersionSource<S>,
    bump: VersionBump,
    dry_run: bool,
) -> Result<BumpOutcome> {
    let previous = get_version_from(source)?;
    let current = previous.bump(bump)?;

    if dry_run {
        info!(%previous, %current, %bump, "dry run, not writing");
    } else {
        source.write(&current.to_string())?;
        info!(%previous, %current, %bump, "bumped version");
    }

    Ok(BumpOutcome {
        previous,
        current,
        bump,
        written: !dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryConfigStore;

    fn memory_source(version: &str) -> VersionSource<MemoryConfigStore> {
        VersionSource::with_store(None, Some(MemoryConfigStore::new(version)))
    }

    #[test]
    fn test_no_paths_is_not_found() {
        let args = CommandArgs::default();
        assert!(get_version(&args).unwrap_err().is_not_found());
        assert!(bump_version(VersionBump::Patch, &args)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_get_version_from_config() {
        let source = memory_source("2.0.1");
        assert_eq!(get_version_from(&source).unwrap(), Version::new(2, 0, 1));
    }

    #[test]
    fn test_bump_each_component_from_config() {
        let cases = [
            (VersionBump::Patch, "2.0.2"),
            (VersionBump::Minor, "2.1.0"),
            (VersionBump::Major, "3.0.0"),
        ];
        for (bump, expected) in cases {
            let mut source = memory_source("2.0.1");
            let outcome = bump_version_in(&mut source, bump, false).unwrap();
            assert_eq!(outcome.previous.to_string(), "2.0.1");
            assert_eq!(outcome.current.to_string(), expected);
            assert!(outcome.written);
            assert_eq!(source.config().unwrap().version(), Some(expected));
        }
    }

    #[test]
    fn test_malformed_version_is_not_written() {
        let mut source = memory_source("0.1.a");
        let err = bump_version_in(&mut source, VersionBump::Patch, false).unwrap_err();
        assert!(matches!(err, VersionBumpError::MalformedVersion { .. }));
        assert_eq!(source.config().unwrap().writes(), 0);
        assert_eq!(source.config().unwrap().version(), Some("0.1.a"));
    }

    #[test]
    fn test_dry_run_leaves_store_untouched() {
        let mut source = memory_source("1.4.9");
        let outcome = bump_version_in(&mut source, VersionBump::Minor, true).unwrap();
        assert_eq!(outcome.current, Version::new(1, 5, 0));
        assert!(!outcome.written);
        assert_eq!(source.config().unwrap().writes(), 0);
    }

    #[test]
    fn test_missing_field_on_get() {
        let source = VersionSource::with_store(None, Some(MemoryConfigStore::without_field()));
        let err = get_version_from(&source).unwrap_err();
        assert!(matches!(err, VersionBumpError::ConfigFieldMissing { .. }));
    }
}
