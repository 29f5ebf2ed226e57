//! Dashboard screen state.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use desk::dashboard::DashboardStats;
use desk::notify::{Failure, Notice, text};
use desk::tree::CategoryArena;
use schema::{Category, Topic};

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub stats: Option<DashboardStats>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DashboardState {
    /// Settle the joined topics/category-tree fetch. Returns the notice to
    /// raise on failure.
    pub fn settle(&mut self, topics: Result<Vec<Topic>, Failure>, tree: Result<Vec<Category>, Failure>) -> Option<Notice> {
        self.loading = false;
        match topics.and_then(|topics| tree.map(|tree| (topics, tree))) {
            Ok((topics, tree)) => {
                let arena = CategoryArena::from_nested(tree);
                self.stats = Some(DashboardStats::compute(&topics, &arena));
                self.error = None;
                None
            }
            Err(failure) => {
                let notice = Notice::from_failure(&failure, text::DASHBOARD_LOAD_FAILED);
                self.error = Some(notice.text.clone());
                Some(notice)
            }
        }
    }
}
