//! Changelog View: the scrollable list of merged changes

mod input;
mod render;

pub use render::RenderContext;

use crate::model::{Change, format_timestamp};
use crate::ui::navigation;

/// Action returned by the Changelog View after handling input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangelogAction {
    /// No action needed
    None,
    /// Open the review page at this URL
    OpenReview(String),
    /// The selected change has no review identifier
    MissingReviewId,
}

/// Display-ready values for one change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRow {
    /// Project with the organization prefix stripped
    pub project: String,
    /// Subject, verbatim
    pub subject: String,
    /// Re-formatted last-updated time, blank when unparseable
    pub last_updated: String,
}

impl ChangeRow {
    fn bind(change: &Change, project_prefix: &str) -> Self {
        let last_updated = match format_timestamp(&change.last_updated) {
            Ok(formatted) => formatted,
            Err(e) => {
                log::warn!(
                    "Unparseable last_updated {:?} for {:?}: {}",
                    change.last_updated,
                    change.subject,
                    e
                );
                String::new()
            }
        };

        Self {
            project: change.display_project(project_prefix),
            subject: change.subject.clone(),
            last_updated,
        }
    }
}

/// Changelog View state
///
/// Owns the change list. Every `clear` and `append` invalidates the display
/// once; rows are bound when appended.
#[derive(Debug)]
pub struct ChangelogView {
    pub(super) changes: Vec<Change>,
    pub(super) rows: Vec<ChangeRow>,
    pub(super) selected: usize,
    pub(super) scroll_offset: usize,
    /// Rows visible at last render (for page moves)
    pub(super) page_size: usize,
    project_prefix: String,
    review_url: String,
    invalidations: u64,
}

impl Default for ChangelogView {
    fn default() -> Self {
        let config = crate::config::ChangelogConfig::default();
        Self::new(config.project_prefix, config.review_url)
    }
}

impl ChangelogView {
    /// Create an empty view
    pub fn new(project_prefix: impl Into<String>, review_url: impl Into<String>) -> Self {
        Self {
            changes: Vec::new(),
            rows: Vec::new(),
            selected: 0,
            scroll_offset: 0,
            page_size: 10,
            project_prefix: project_prefix.into(),
            review_url: review_url.into(),
            invalidations: 0,
        }
    }

    /// Remove every change
    pub fn clear(&mut self) {
        self.changes.clear();
        self.rows.clear();
        self.selected = 0;
        self.scroll_offset = 0;
        self.invalidate();
    }

    /// Append changes after the existing ones
    pub fn append(&mut self, changes: impl IntoIterator<Item = Change>) {
        for change in changes {
            self.rows.push(ChangeRow::bind(&change, &self.project_prefix));
            self.changes.push(change);
        }
        self.invalidate();
    }

    /// Replace the list with the result of a successful fetch
    pub fn replace(&mut self, changes: Vec<Change>) {
        self.clear();
        self.append(changes);
    }

    /// Number of changes
    pub fn count(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of times the display was invalidated
    pub fn invalidations(&self) -> u64 {
        self.invalidations
    }

    fn invalidate(&mut self) {
        self.invalidations += 1;
    }

    /// Display values for the change at `index`
    pub fn row(&self, index: usize) -> Option<&ChangeRow> {
        self.rows.get(index)
    }

    /// All changes in feed order
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// Currently selected index
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Currently selected change
    pub fn selected_change(&self) -> Option<&Change> {
        self.changes.get(self.selected)
    }

    /// Action for activating the selected row
    pub fn activate_selected(&self) -> ChangelogAction {
        match self.selected_change() {
            Some(change) => match change.review_url(&self.review_url) {
                Some(url) => ChangelogAction::OpenReview(url),
                None => ChangelogAction::MissingReviewId,
            },
            None => ChangelogAction::None,
        }
    }

    fn max_index(&self) -> usize {
        self.changes.len().saturating_sub(1)
    }

    pub fn select_next(&mut self) {
        self.selected = navigation::select_next(self.selected, self.max_index());
    }

    pub fn select_prev(&mut self) {
        self.selected = navigation::select_prev(self.selected);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.max_index();
    }

    pub fn page_down(&mut self) {
        self.selected = navigation::page_down(self.selected, self.page_size, self.max_index());
    }

    pub fn page_up(&mut self) {
        self.selected = navigation::page_up(self.selected, self.page_size);
    }
}
