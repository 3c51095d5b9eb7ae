//! Build classification
//!
//! Decides whether the running build is official from its release-type token.

use super::constants::channels;

/// Official or unofficial build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Official,
    Unofficial,
}

/// Advisory shown once at startup for builds whose changelog may not apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// Self-built or third-party build
    Unofficial,
    /// Stable snapshot release
    Snapshot,
    /// Release type not recognized (holds the raw token)
    Unknown(String),
}

impl Advisory {
    /// Dialog title
    pub fn title(&self) -> &'static str {
        match self {
            Advisory::Unofficial => "Unofficial build",
            Advisory::Snapshot => "Stable build",
            Advisory::Unknown(_) => "Unknown build type",
        }
    }

    /// Dialog message
    pub fn message(&self) -> String {
        match self {
            Advisory::Unofficial => "You are running an unofficial build. \
                The changelog shows official changes and may not match your build."
                .to_string(),
            Advisory::Snapshot => "You are running a stable snapshot. \
                Changes listed here may land in a later release."
                .to_string(),
            Advisory::Unknown(token) if token.is_empty() => "unknown".to_string(),
            Advisory::Unknown(token) => token.clone(),
        }
    }
}

/// Release tags treated as official when no config overrides them
pub fn default_official_tags() -> Vec<String> {
    [channels::NIGHTLY, channels::SNAPSHOT]
        .iter()
        .chain(channels::SNAPSHOT_TAGS)
        .map(|s| s.to_string())
        .collect()
}

/// Classify a release type against the known official tags.
///
/// Tokens compare by value, ignoring ASCII case. An empty token is unofficial.
pub fn classify<S: AsRef<str>>(release_type: &str, known_official_tags: &[S]) -> Classification {
    let token = release_type.trim();
    if !token.is_empty()
        && known_official_tags
            .iter()
            .any(|tag| tag.as_ref().eq_ignore_ascii_case(token))
    {
        Classification::Official
    } else {
        Classification::Unofficial
    }
}

/// Decide which advisory, if any, to show for a release type
pub fn advisory<S: AsRef<str>>(release_type: &str, known_official_tags: &[S]) -> Option<Advisory> {
    let token = release_type.trim();
    let upper = token.to_ascii_uppercase();

    if upper.contains(channels::NIGHTLY) {
        None
    } else if upper.contains(channels::UNOFFICIAL) {
        Some(Advisory::Unofficial)
    } else if classify(token, known_official_tags) == Classification::Official {
        Some(Advisory::Snapshot)
    } else {
        Some(Advisory::Unknown(token.to_string()))
    }
}
