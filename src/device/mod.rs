//! Device property layer
//!
//! Reads build properties from the local system or an adb-connected device
//! and derives build metadata from them.

mod classify;
pub mod constants;
mod executor;
mod info;
mod manifest;
mod version;

pub use classify::{Advisory, Classification, advisory, classify, default_official_tags};
pub use executor::{PropertyReader, PropertySource, StaticProperties, Target};
pub use info::DeviceInfo;
pub use manifest::extract_projects;
pub use version::BuildVersion;

use std::io;
use thiserror::Error;

/// Errors that can occur when reading device properties
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("{0} is not installed or not in PATH")]
    CommandNotFound(&'static str),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}
