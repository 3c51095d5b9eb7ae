//! Input handling for ChangelogView

use crossterm::event::KeyEvent;

use super::{ChangelogAction, ChangelogView};
use crate::keys;

impl ChangelogView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> ChangelogAction {
        match key.code {
            k if keys::is_move_down(k) => self.select_next(),
            k if keys::is_move_up(k) => self.select_prev(),
            keys::GO_TOP => self.select_first(),
            keys::GO_BOTTOM => self.select_last(),
            keys::PAGE_DOWN => self.page_down(),
            keys::PAGE_UP => self.page_up(),
            keys::OPEN_REVIEW | keys::OPEN_REVIEW_ALT => return self.activate_selected(),
            _ => {}
        }
        ChangelogAction::None
    }
}
