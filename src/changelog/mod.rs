//! Changelog feed layer
//!
//! Fetches the list of merged changes for a build and decodes the feed.

mod client;
mod connectivity;
mod feed;
mod worker;

pub use client::{ChangelogClient, ChangelogSource};
pub use connectivity::{Connectivity, DnsConnectivity, StaticConnectivity};
pub use feed::parse_feed;
pub use worker::{FetchResult, RefreshStart, RefreshWorker};

use thiserror::Error;

/// Errors that can occur when fetching the changelog
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Invalid changelog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Changelog URL cannot take path segments: {0}")]
    CannotBeABase(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to parse changelog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No data connection")]
    Offline,

    #[error("Refresh worker exited without a result")]
    WorkerLost,
}
