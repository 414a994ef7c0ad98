//! Domain logic - pure version arithmetic independent of any file format

pub mod version;

pub use version::{Version, VersionBump};
