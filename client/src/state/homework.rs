//! Homework screen state, seeded from the sample datasets.
//!
//! There is no homework endpoint; new assignments only live in this struct
//! for as long as the screen is mounted.

#[cfg(test)]
#[path = "homework_test.rs"]
mod homework_test;

use desk::homework::{HomeworkDraft, filter_by_kind, next_local_id, submissions_for};
use desk::notify::{DraftError, Notice, text};
use desk::sample;
use schema::{Homework, HomeworkKind, HomeworkTarget, Submission};

#[derive(Clone, Debug)]
pub struct HomeworkState {
    pub homeworks: Vec<Homework>,
    pub submissions: Vec<Submission>,
    pub targets: Vec<HomeworkTarget>,
    pub tab: HomeworkKind,
    pub draft: Option<HomeworkDraft>,
    pub detail: Option<String>,
}

impl Default for HomeworkState {
    fn default() -> Self {
        Self {
            homeworks: sample::homeworks(),
            submissions: sample::submissions(),
            targets: sample::homework_targets(),
            tab: HomeworkKind::default(),
            draft: None,
            detail: None,
        }
    }
}

impl HomeworkState {
    /// Assignments of the active tab.
    #[must_use]
    pub fn visible(&self) -> Vec<&Homework> {
        filter_by_kind(&self.homeworks, self.tab)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Homework> {
        let id = self.detail.as_deref()?;
        self.homeworks.iter().find(|h| h.id == id)
    }

    #[must_use]
    pub fn selected_submissions(&self) -> Vec<&Submission> {
        self.detail.as_deref().map_or_else(Vec::new, |id| submissions_for(&self.submissions, id))
    }

    /// Start an assignment of the active tab's kind.
    pub fn open_draft(&mut self) {
        self.draft = Some(HomeworkDraft::new(self.tab));
    }

    /// Validate the open draft and list it, stamped with `created_at`.
    /// Returns `None` when no draft is open.
    ///
    /// # Errors
    ///
    /// The draft fails validation; it stays open with its values.
    pub fn submit_draft(&mut self, created_at: String) -> Result<Option<Notice>, DraftError> {
        let Some(draft) = self.draft.clone() else {
            return Ok(None);
        };
        let id = next_local_id(&self.homeworks);
        let homework = draft.into_homework(id, created_at, &self.targets)?;
        self.tab = homework.kind;
        self.homeworks.push(homework);
        self.draft = None;
        Ok(Some(Notice::success(text::HOMEWORK_CREATED)))
    }
}
