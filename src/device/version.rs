//! Build version string parsing
//!
//! `ro.cm.version` has the form `<cm-number>-<date>-<releaseType>[-<extra>]`,
//! e.g. `13.0-20160101-NIGHTLY-hammerhead`.

use super::constants::channels;

/// Parsed CyanogenMod build version
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuildVersion {
    /// The full version string as read from the device
    pub raw: String,
    /// CyanogenMod version number (e.g. `13.0`)
    pub number: String,
    /// Build date segment (e.g. `20160101`)
    pub date: String,
    /// Release type token (e.g. `NIGHTLY`)
    pub release_type: String,
    /// Anything after the release type (device name or snapshot code)
    pub extra: String,
    /// Git branch this build was made from
    pub branch: String,
}

impl BuildVersion {
    /// Parse a version string. Never fails: missing segments stay empty.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::default();
        }

        let mut parts = raw.splitn(4, '-');
        let number = parts.next().unwrap_or_default().to_string();
        let date = parts.next().unwrap_or_default().to_string();
        let release_type = parts.next().unwrap_or_default().to_string();
        let extra = parts.next().unwrap_or_default().to_string();

        let branch = if release_type == channels::SNAPSHOT && !extra.is_empty() {
            let code: String = extra.chars().take(4).collect();
            format!("stable/cm-{}", code)
        } else {
            format!("cm-{}", number)
        };

        Self {
            raw: raw.to_string(),
            number,
            date,
            release_type,
            extra,
            branch,
        }
    }

    /// True when no version property was available
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}
