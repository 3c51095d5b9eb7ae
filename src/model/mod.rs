//! Data models for cmlog
//!
//! UI-independent data structures for changelog entries and notices.

mod change;
mod notification;

pub use change::{Change, TIMESTAMP_FORMAT, format_timestamp};
pub use notification::{Notification, NotificationKind};
