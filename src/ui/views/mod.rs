//! View components
//!
//! Each view represents a screen in the application.

mod changelog;

pub use changelog::{ChangeRow, ChangelogAction, ChangelogView, RenderContext};
