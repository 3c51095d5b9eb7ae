//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::device::Target;

/// Browse the changelog of a CyanogenMod build
#[derive(Debug, Parser)]
#[command(name = "cmlog", version, about)]
pub struct Cli {
    /// Read properties from a device over adb instead of the local system
    #[arg(long)]
    pub adb: bool,

    /// adb device serial (implies --adb)
    #[arg(short, long, value_name = "SERIAL")]
    pub serial: Option<String>,

    /// Config file (default: <config dir>/cmlog/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Changelog feed base URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Log file (default: <cache dir>/cmlog/cmlog.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Skip the connectivity check and never fetch
    #[arg(long)]
    pub offline: bool,

    /// Print the effective config as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Where device properties are read from
    pub fn target(&self) -> Target {
        if self.adb || self.serial.is_some() {
            Target::Adb {
                serial: self.serial.clone(),
            }
        } else {
            Target::Local
        }
    }

    /// Override config values given on the command line
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref url) = self.url {
            config.changelog.base_url = url.clone();
        }
    }
}
