//! Background refresh worker
//!
//! Runs one fetch per refresh on its own thread and hands the result back
//! to the UI thread through a channel. Only one fetch runs at a time.
//! The connectivity check runs on the same thread, before the fetch.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;

use super::{ChangelogError, ChangelogSource, Connectivity};
use crate::model::Change;

/// Outcome of one fetch
pub type FetchResult = Result<Vec<Change>, ChangelogError>;

/// Whether a refresh request started a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStart {
    Started,
    /// A fetch is still outstanding; the request was ignored
    AlreadyRunning,
}

/// Owns the in-flight fetch, if any
pub struct RefreshWorker {
    source: Arc<dyn ChangelogSource>,
    connectivity: Arc<dyn Connectivity>,
    pending: Option<Receiver<FetchResult>>,
}

impl std::fmt::Debug for RefreshWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshWorker")
            .field("running", &self.is_running())
            .finish()
    }
}

impl RefreshWorker {
    pub fn new(source: Arc<dyn ChangelogSource>, connectivity: Arc<dyn Connectivity>) -> Self {
        Self {
            source,
            connectivity,
            pending: None,
        }
    }

    /// Is a fetch outstanding?
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Spawn a fetch unless one is already running
    pub fn start(&mut self, version: &str, device: &str) -> RefreshStart {
        if self.is_running() {
            log::debug!("Refresh requested while a fetch is running, ignoring");
            return RefreshStart::AlreadyRunning;
        }

        let (tx, rx) = mpsc::channel();
        let source = Arc::clone(&self.source);
        let connectivity = Arc::clone(&self.connectivity);
        let version = version.to_string();
        let device = device.to_string();

        thread::spawn(move || {
            let result = if connectivity.is_connected() {
                source.fetch(&version, &device)
            } else {
                Err(ChangelogError::Offline)
            };
            // Receiver is gone only when the app is shutting down
            let _ = tx.send(result);
        });

        self.pending = Some(rx);
        RefreshStart::Started
    }

    /// Take the finished result without blocking
    pub fn poll(&mut self) -> Option<FetchResult> {
        let rx = self.pending.as_ref()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(ChangelogError::WorkerLost),
        };
        self.pending = None;
        Some(result)
    }

    /// Wait up to `timeout` for the outstanding fetch
    pub fn wait(&mut self, timeout: Duration) -> Option<FetchResult> {
        let rx = self.pending.as_ref()?;
        let result = match rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => return None,
            Err(RecvTimeoutError::Disconnected) => Err(ChangelogError::WorkerLost),
        };
        self.pending = None;
        Some(result)
    }
}
