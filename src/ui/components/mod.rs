//! Reusable UI components
//!
//! Common building blocks for views.

pub mod blocks;
pub mod dialog;
pub mod message;

pub use blocks::*;
pub use dialog::{Dialog, DialogCallback, DialogResult};
pub use message::*;
