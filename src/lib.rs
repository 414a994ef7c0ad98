pub mod cli;
pub mod domain;
pub mod error;
pub mod logging;
pub mod source;
pub mod store;
pub mod ui;

pub use error::{Result, VersionBumpError};
