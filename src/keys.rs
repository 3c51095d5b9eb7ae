//! Keybinding definitions for cmlog
//!
//! All keybindings and their status-bar hints are defined here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+L (refresh)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+C (quit)
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application or close help
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Alternative quit
pub const ESC: KeyCode = KeyCode::Esc;

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Reload the changelog
pub const REFRESH: KeyCode = KeyCode::Char('r');

/// Show device info dialog
pub const DEVICE_INFO: KeyCode = KeyCode::Char('i');

// =============================================================================
// Navigation keys
// =============================================================================

pub const MOVE_UP: KeyCode = KeyCode::Char('k');
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;
pub const GO_TOP: KeyCode = KeyCode::Char('g');
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');
pub const PAGE_UP: KeyCode = KeyCode::PageUp;
pub const PAGE_DOWN: KeyCode = KeyCode::PageDown;

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Changelog keys
// =============================================================================

/// Open the selected change's review page
pub const OPEN_REVIEW: KeyCode = KeyCode::Enter;

/// Alternative open
pub const OPEN_REVIEW_ALT: KeyCode = KeyCode::Char('o');

// =============================================================================
// Hints
// =============================================================================

/// One key hint for the status bar and help panel
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

/// Status bar hints for the changelog view
pub const CHANGELOG_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "j/k",
        label: "Move",
        color: Color::Blue,
    },
    KeyHint {
        key: "Enter",
        label: "Open",
        color: Color::Green,
    },
    KeyHint {
        key: "r",
        label: "Refresh",
        color: Color::Yellow,
    },
    KeyHint {
        key: "i",
        label: "Device",
        color: Color::Magenta,
    },
    KeyHint {
        key: "?",
        label: "Help",
        color: Color::Cyan,
    },
    KeyHint {
        key: "q",
        label: "Quit",
        color: Color::Red,
    },
];

/// Status bar hints while a dialog is open
pub const DIALOG_HINTS: &[KeyHint] = &[KeyHint {
    key: "Enter",
    label: "OK",
    color: Color::Green,
}];

/// Status bar hints for the help view
pub const HELP_HINTS: &[KeyHint] = &[KeyHint {
    key: "q",
    label: "Back",
    color: Color::Red,
}];

/// Help panel entries: (key, description)
pub const HELP_ENTRIES: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j / ↓", "Move down"),
            ("k / ↑", "Move up"),
            ("g / G", "First / last change"),
            ("PgUp / PgDn", "Page up / down"),
        ],
    ),
    (
        "Changelog",
        &[
            ("Enter / o", "Open change in browser"),
            ("r / Ctrl+L", "Refresh changelog"),
            ("i", "Device info"),
        ],
    ),
    (
        "Global",
        &[("?", "Help"), ("q / Esc", "Quit or close"), ("Ctrl+C", "Quit")],
    ),
];
