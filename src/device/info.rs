//! Device and build information
//!
//! Read once at startup and passed to the components that need it.

use std::collections::BTreeSet;

use super::constants::{COMMON_REPOS, COMMON_REPOS_QCOM, props};
use super::{BuildVersion, PropertySource, extract_projects};
use crate::config::DeviceConfig;

/// Information about the device and the running build
#[derive(Debug, Clone, Default)]
pub struct DeviceInfo {
    /// Manufacturer of the product (e.g. `lge`)
    pub manufacturer: String,
    /// Hardware name (e.g. `hammerhead`, `qcom`)
    pub hardware: String,
    /// Underlying board
    pub board: String,
    /// Device codename (e.g. `hammerhead`)
    pub device: String,
    /// Parsed `ro.cm.version`
    pub version: BuildVersion,
    /// Release channel (from the version string, else `ro.cm.releasetype`)
    pub release_type: String,
    /// Build date from `ro.build.date`
    pub build_date: String,
    /// Organization projects listed in the build manifest (empty when absent)
    pub projects: BTreeSet<String>,
    /// First property read error, if any
    pub read_error: Option<String>,
}

impl DeviceInfo {
    /// Read all properties from `source`.
    ///
    /// Failed reads leave the field empty and record the first error in `read_error`.
    pub fn load(source: &dyn PropertySource, config: &DeviceConfig) -> Self {
        let mut read_error = None;
        let mut get = |key: &str| match source.get(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Couldn't read {}: {}", key, e);
                read_error.get_or_insert_with(|| e.to_string());
                String::new()
            }
        };

        let manufacturer = get(props::MANUFACTURER).to_lowercase();
        let hardware = get(props::HARDWARE).to_lowercase();
        let board = get(props::BOARD).to_lowercase();
        let device = get(props::CM_DEVICE);
        let version = BuildVersion::parse(&get(props::CM_VERSION));
        let release_type = if version.release_type.is_empty() {
            get(props::CM_RELEASE_TYPE)
        } else {
            version.release_type.clone()
        };
        let build_date = get(props::BUILD_DATE);

        let projects = match source.read_file(&config.manifest_path) {
            Ok(manifest) if manifest.trim().is_empty() => {
                log::debug!("Couldn't find a build manifest at {}", config.manifest_path);
                BTreeSet::new()
            }
            Ok(manifest) => {
                log::debug!("Found build manifest at {}", config.manifest_path);
                let projects = extract_projects(&manifest, &config.org_marker);
                log::debug!("Number of projects: {}", projects.len());
                projects
            }
            Err(e) => {
                log::warn!("Couldn't read {}: {}", config.manifest_path, e);
                BTreeSet::new()
            }
        };

        let info = Self {
            manufacturer,
            hardware,
            board,
            device,
            version,
            release_type,
            build_date,
            projects,
            read_error,
        };
        log::debug!("{}", info.log_line());
        info
    }

    /// Text for the device info dialog
    pub fn summary(&self) -> String {
        format!(
            "Device: {}\n\nRunning: {}\n\nUpdate channel: {}",
            self.device, self.version.raw, self.release_type
        )
    }

    /// Whether the project (as named in the feed) is built for this device.
    ///
    /// Matches manifest projects, common repositories, and Qualcomm common
    /// repositories on Qualcomm hardware.
    pub fn is_device_project(&self, project: &str) -> bool {
        let repo = project.rsplit('/').next().unwrap_or(project);
        self.projects
            .iter()
            .any(|p| p == project || p.rsplit('/').next() == Some(repo))
            || COMMON_REPOS.contains(&repo)
            || (self.is_qcom() && COMMON_REPOS_QCOM.contains(&repo))
    }

    fn is_qcom(&self) -> bool {
        self.hardware.contains("qcom")
            || self.board.starts_with("msm")
            || self.board.starts_with("apq")
    }

    fn log_line(&self) -> String {
        format!(
            "Device: {{ MANUFACTURER:{}, HARDWARE:{}, BOARD:{}, BRANCH:{}, DEVICE:{}, \
             CM_VERSION:{}, CM_NUMBER:{}, CM_RELEASE_CHANNEL:{}, BUILD_DATE:{} }}",
            self.manufacturer,
            self.hardware,
            self.board,
            self.version.branch,
            self.device,
            self.version.raw,
            self.version.number,
            self.release_type,
            self.build_date
        )
    }
}
