//! Changelog feed decoding
//!
//! The feed is a JSON array of Gerrit-style change objects:
//!
//! ```json
//! [{"subject": "...", "project": "CyanogenMod/android_...",
//!   "last_updated": "2016-01-29 15:30:00.000000000", "_number": 128734}]
//! ```

use serde::Deserialize;

use crate::model::Change;

/// Identifier fields may be numbers or strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdValue {
    Number(u64),
    Text(String),
}

impl IdValue {
    fn into_string(self) -> String {
        match self {
            IdValue::Number(n) => n.to_string(),
            IdValue::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FeedEntry {
    subject: String,
    project: String,
    last_updated: String,
    #[serde(default, rename = "_number")]
    number: Option<IdValue>,
    #[serde(default)]
    change_id: Option<IdValue>,
    #[serde(default)]
    id: Option<IdValue>,
}

impl From<FeedEntry> for Change {
    fn from(entry: FeedEntry) -> Self {
        // The review site resolves numeric ids directly; prefer them
        let change_id = entry
            .number
            .or(entry.change_id)
            .or(entry.id)
            .map(IdValue::into_string);

        Change {
            subject: entry.subject,
            project: entry.project,
            last_updated: entry.last_updated,
            change_id,
        }
    }
}

/// Decode a feed body into changes, preserving feed order
pub fn parse_feed(body: &str) -> Result<Vec<Change>, serde_json::Error> {
    let entries: Vec<FeedEntry> = serde_json::from_str(body)?;
    Ok(entries.into_iter().map(Change::from).collect())
}
