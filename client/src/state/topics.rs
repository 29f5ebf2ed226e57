//! Topics screen state: list, search, detail, and version history.
//!
//! DESIGN
//! ======
//! The editor modal has its own `RwSignal<TopicEditSession>`; this struct
//! only tracks what the list page shows around it.

#[cfg(test)]
#[path = "topics_test.rs"]
mod topics_test;

use desk::versions::{VersionComparison, VersionHistory};
use schema::{Id, Topic, TopicSearchType, TopicVersion};

/// Keywords shown inline in a table row before collapsing into `+N`.
pub const KEYWORD_PREVIEW: usize = 3;

#[derive(Clone, Debug, Default)]
pub struct TopicsState {
    pub items: Vec<Topic>,
    pub loading: bool,
    pub query: String,
    pub search_type: TopicSearchType,
    /// Topic shown in the detail modal.
    pub detail: Option<Topic>,
    pub history: Option<VersionHistory>,
    pub selected_version: Option<i64>,
    /// Restore confirmation is open for `selected_version`.
    pub confirm_restore: bool,
    pub pending_delete: Option<Id>,
}

impl TopicsState {
    /// Trimmed query and type to search for, or `None` when the query is
    /// blank and the full list should be reloaded instead.
    #[must_use]
    pub fn search_target(&self) -> Option<(String, TopicSearchType)> {
        let query = self.query.trim();
        (!query.is_empty()).then(|| (query.to_owned(), self.search_type))
    }

    pub fn replace_items(&mut self, items: Vec<Topic>) {
        self.items = items;
        self.loading = false;
    }

    #[must_use]
    pub fn total_label(&self) -> String {
        format!("총 {}개", self.items.len())
    }

    pub fn open_history(&mut self, topic: Topic, versions: Vec<TopicVersion>) {
        self.history = Some(VersionHistory::new(topic, versions));
        self.selected_version = None;
        self.confirm_restore = false;
    }

    pub fn close_history(&mut self) {
        self.history = None;
        self.selected_version = None;
        self.confirm_restore = false;
    }

    /// Comparison for the selected version, if both are present.
    #[must_use]
    pub fn comparison(&self) -> Option<VersionComparison<'_>> {
        self.history.as_ref()?.select(self.selected_version?)
    }
}

/// Leading keywords of `topic` and how many more are hidden.
#[must_use]
pub fn keyword_preview(topic: &Topic) -> (Vec<&str>, usize) {
    let shown = topic
        .keywords
        .iter()
        .take(KEYWORD_PREVIEW)
        .map(|k| k.keyword.as_str())
        .collect::<Vec<_>>();
    let hidden = topic.keywords.len().saturating_sub(KEYWORD_PREVIEW);
    (shown, hidden)
}
