//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the changelog list
pub mod changelog {
    use super::*;

    /// Last-updated column
    pub const TIMESTAMP: Color = Color::Yellow;
    /// Project column
    pub const PROJECT: Color = Color::Magenta;
    /// Subject column
    pub const SUBJECT: Color = Color::White;
    /// Marker for projects built into this device
    pub const DEVICE_MARKER: Color = Color::Green;
    /// Title bar
    pub const TITLE: Color = Color::Cyan;
}

/// Selected row
pub mod selection {
    use super::*;

    pub const FG: Color = Color::White;
    pub const BG: Color = Color::DarkGray;
}
