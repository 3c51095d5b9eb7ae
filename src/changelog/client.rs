//! Changelog HTTP client

use reqwest::blocking::Client;
use url::Url;

use super::{ChangelogError, parse_feed};
use crate::model::Change;

/// Path segment preceding `<version>/<device>`
const CHANGES_SEGMENT: &str = "changes";

/// Anything that can produce the changelog for a build
pub trait ChangelogSource: Send + Sync {
    /// Fetch changes for `version` (e.g. `13.0`) on `device` (e.g. `hammerhead`)
    fn fetch(&self, version: &str, device: &str) -> Result<Vec<Change>, ChangelogError>;
}

/// Blocking client for the changelog feed
#[derive(Debug, Clone)]
pub struct ChangelogClient {
    http: Client,
    base_url: Url,
}

impl ChangelogClient {
    /// Create a client for the feed at `base_url` (e.g. `http://api.cmxlog.com`)
    pub fn new(base_url: &str) -> Result<Self, ChangelogError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ChangelogError::CannotBeABase(base_url.to_string()));
        }

        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// The feed base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `<base>/changes/<version>/<device>` with both parameters percent-encoded
    pub fn changes_url(&self, version: &str, device: &str) -> Result<Url, ChangelogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ChangelogError::CannotBeABase(self.base_url.to_string()))?
            .pop_if_empty()
            .push(CHANGES_SEGMENT)
            .push(version)
            .push(device);
        Ok(url)
    }
}

impl ChangelogSource for ChangelogClient {
    fn fetch(&self, version: &str, device: &str) -> Result<Vec<Change>, ChangelogError> {
        let url = self.changes_url(version, device)?;
        log::info!("Fetching changelog from {}", url);

        let response = self.http.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ChangelogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text()?;
        let changes = parse_feed(&body)?;
        log::info!("Fetched {} changes", changes.len());
        Ok(changes)
    }
}
