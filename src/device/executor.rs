//! Property executor
//!
//! Runs `getprop` and `cat` either on the host or through `adb shell`.

use std::collections::HashMap;
use std::process::Command;

use super::DeviceError;
use super::constants::{self, adb};

/// Source of system properties and target files
pub trait PropertySource {
    /// Read a system property (empty string when unset)
    fn get(&self, key: &str) -> Result<String, DeviceError>;

    /// Read a file on the target (empty string when absent)
    fn read_file(&self, path: &str) -> Result<String, DeviceError>;
}

/// Where commands are run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Target {
    /// The machine cmlog runs on
    #[default]
    Local,
    /// A device reached through `adb shell`
    Adb {
        /// Device serial (None = the only connected device)
        serial: Option<String>,
    },
}

/// Executor for property commands
#[derive(Debug, Clone, Default)]
pub struct PropertyReader {
    target: Target,
}

impl PropertyReader {
    /// Create a reader for the given target
    pub fn new(target: Target) -> Self {
        Self { target }
    }

    /// The target commands run on
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Build the command for `program args..` on the configured target
    fn command(&self, program: &'static str, args: &[&str]) -> (Command, &'static str) {
        match &self.target {
            Target::Local => {
                let mut cmd = Command::new(program);
                cmd.args(args);
                (cmd, program)
            }
            Target::Adb { serial } => {
                let mut cmd = Command::new(constants::ADB_COMMAND);
                if let Some(serial) = serial {
                    cmd.arg(adb::SERIAL).arg(serial);
                }
                cmd.arg(adb::SHELL).arg(program).args(args);
                (cmd, constants::ADB_COMMAND)
            }
        }
    }

    /// Run a command and capture stdout
    fn run(&self, program: &'static str, args: &[&str]) -> Result<String, DeviceError> {
        let (mut cmd, name) = self.command(program, args);

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DeviceError::CommandNotFound(name)
            } else {
                DeviceError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);
            Err(DeviceError::CommandFailed { stderr, exit_code })
        }
    }
}

impl PropertySource for PropertyReader {
    fn get(&self, key: &str) -> Result<String, DeviceError> {
        let output = self.run(constants::GETPROP_COMMAND, &[key])?;
        Ok(strip_newlines(&output))
    }

    fn read_file(&self, path: &str) -> Result<String, DeviceError> {
        match self.run(constants::CAT_COMMAND, &[path]) {
            Ok(content) => Ok(content),
            // cat exits non-zero when the file is missing
            Err(DeviceError::CommandFailed { stderr, .. }) => {
                log::debug!("Could not read {}: {}", path, stderr.trim());
                Ok(String::new())
            }
            Err(e) => Err(e),
        }
    }
}

/// In-memory property source
#[derive(Debug, Clone, Default)]
pub struct StaticProperties {
    props: HashMap<String, String>,
    files: HashMap<String, String>,
}

impl StaticProperties {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Set a file's content
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl PropertySource for StaticProperties {
    fn get(&self, key: &str) -> Result<String, DeviceError> {
        Ok(self.props.get(key).cloned().unwrap_or_default())
    }

    fn read_file(&self, path: &str) -> Result<String, DeviceError> {
        Ok(self.files.get(path).cloned().unwrap_or_default())
    }
}

/// `getprop` output ends with a newline (`\r\n` through an adb PTY)
fn strip_newlines(output: &str) -> String {
    output.trim_end_matches(['\r', '\n']).replace(['\r', '\n'], "")
}
