//! Change (changelog entry) data model

use chrono::NaiveDateTime;
use url::form_urlencoded::byte_serialize;

use crate::config::CHANGE_ID_PLACEHOLDER;

/// Pattern of the feed's last-updated field
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One merged change from the changelog feed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Change {
    /// First line of the commit message
    pub subject: String,

    /// Source project (e.g. `CyanogenMod/android_frameworks_base`)
    pub project: String,

    /// Last update time (`yyyy-MM-dd HH:mm`, may carry seconds)
    pub last_updated: String,

    /// Review identifier, when the feed provides one
    pub change_id: Option<String>,
}

impl Change {
    /// Create a change without a review identifier
    pub fn new(
        subject: impl Into<String>,
        project: impl Into<String>,
        last_updated: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            project: project.into(),
            last_updated: last_updated.into(),
            change_id: None,
        }
    }

    /// Attach a review identifier
    pub fn with_change_id(mut self, change_id: impl Into<String>) -> Self {
        self.change_id = Some(change_id.into());
        self
    }

    /// Project name with `prefix` removed from its last path segment
    ///
    /// `CyanogenMod/android_frameworks_base` → `CyanogenMod/frameworks_base`
    pub fn display_project(&self, prefix: &str) -> String {
        if prefix.is_empty() {
            return self.project.clone();
        }
        match self.project.rsplit_once('/') {
            Some((org, repo)) => {
                format!("{}/{}", org, repo.strip_prefix(prefix).unwrap_or(repo))
            }
            None => self
                .project
                .strip_prefix(prefix)
                .unwrap_or(&self.project)
                .to_string(),
        }
    }

    /// Review page URL built from `template`, if this change has an identifier.
    ///
    /// The identifier is percent-encoded (`project~branch~Id` ids carry `~`).
    pub fn review_url(&self, template: &str) -> Option<String> {
        self.change_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| {
                let encoded: String = byte_serialize(id.as_bytes()).collect();
                template.replace(CHANGE_ID_PLACEHOLDER, &encoded)
            })
    }
}

/// Re-format a last-updated value with [`TIMESTAMP_FORMAT`].
///
/// Text after the minutes (seconds, fractions) is ignored.
pub fn format_timestamp(raw: &str) -> Result<String, chrono::ParseError> {
    let (parsed, _rest) = NaiveDateTime::parse_and_remainder(raw.trim(), TIMESTAMP_FORMAT)?;
    Ok(parsed.format(TIMESTAMP_FORMAT).to_string())
}
