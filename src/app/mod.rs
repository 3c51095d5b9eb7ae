//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and view management
//! - `input`: Key event handling
//! - `refresh`: Changelog refresh flow
//! - `render`: UI rendering
//! - `browser`: Opening review pages

mod browser;
mod input;
mod refresh;
mod render;
mod state;

pub use browser::{Browser, SystemBrowser};
pub use state::{App, Services, View};
