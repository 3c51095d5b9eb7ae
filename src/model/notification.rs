//! Transient notices
//!
//! Short-lived messages shown in the title bar (refresh results, missing
//! connectivity, browser launches).

use std::time::{Duration, Instant};

/// How long a notice stays visible
pub const NOTICE_DURATION: Duration = Duration::from_secs(4);

/// Kind of notification (determines color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Operation completed (green)
    Success,
    /// Informational (cyan)
    Info,
    /// Something did not work, nothing was lost (yellow)
    Warning,
}

/// A notice to display to the user
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    /// Check if [`NOTICE_DURATION`] has elapsed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= NOTICE_DURATION
    }
}
