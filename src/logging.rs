//! File logger setup
//!
//! The TUI owns the terminal, so log records go to a file.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};

/// Default log file location
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("cmlog").join("cmlog.log"))
}

/// Install the logger writing to `path`.
///
/// `RUST_LOG` takes precedence; otherwise `info`, or `debug` when `verbose`.
pub fn init(path: &Path, verbose: bool) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let default_level = if verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(io::Error::other)
}
