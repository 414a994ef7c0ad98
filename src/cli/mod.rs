//! Command workflows invoked by the binary

pub mod commands;

pub use commands::{bump_version, get_version, BumpOutcome, CommandArgs};
