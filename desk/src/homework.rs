//! Homework listing helpers and the local assignment form.
//!
//! There is no homework endpoint. Assignments created through the form are
//! appended to the locally held list only.

#[cfg(test)]
#[path = "homework_test.rs"]
mod homework_test;

use schema::{Homework, HomeworkKind, HomeworkTarget, Submission, SubmissionStats};

use crate::notify::DraftError;

/// Assignments of one kind, in list order.
#[must_use]
pub fn filter_by_kind(homeworks: &[Homework], kind: HomeworkKind) -> Vec<&Homework> {
    homeworks.iter().filter(|h| h.kind == kind).collect()
}

/// Submissions belonging to `homework_id`.
#[must_use]
pub fn submissions_for<'a>(submissions: &'a [Submission], homework_id: &str) -> Vec<&'a Submission> {
    submissions.iter().filter(|s| s.homework_id == homework_id).collect()
}

/// Counters for `homework_id` derived from its submissions.
#[must_use]
pub fn submission_stats(submissions: &[Submission], homework_id: &str) -> SubmissionStats {
    SubmissionStats::from_submissions(submissions_for(submissions, homework_id))
}

/// Assignment form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HomeworkDraft {
    pub title: String,
    pub category: String,
    pub kind: HomeworkKind,
    /// `YYYY-MM-DD` as entered in a date input.
    pub deadline: String,
    pub content: String,
    pub target_ids: Vec<String>,
}

impl HomeworkDraft {
    /// Empty draft for the given tab.
    #[must_use]
    pub fn new(kind: HomeworkKind) -> Self {
        Self { kind, ..Self::default() }
    }

    /// Check the required fields, in form order.
    ///
    /// # Errors
    ///
    /// Returns the first missing field.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::TitleRequired);
        }
        if self.category.trim().is_empty() {
            return Err(DraftError::CategoryRequired);
        }
        if self.deadline.trim().is_empty() {
            return Err(DraftError::DeadlineRequired);
        }
        if self.target_ids.is_empty() {
            return Err(DraftError::TargetsRequired);
        }
        Ok(())
    }

    /// Toggle a target in the selection, keeping selection order.
    pub fn toggle_target(&mut self, id: &str) {
        if let Some(pos) = self.target_ids.iter().position(|t| t == id) {
            self.target_ids.remove(pos);
        } else {
            self.target_ids.push(id.to_owned());
        }
    }

    /// Turn a valid draft into a listed assignment with no submissions yet.
    ///
    /// # Errors
    ///
    /// Fails validation, or names a target missing from `roster`.
    pub fn into_homework(
        self,
        id: String,
        created_at: String,
        roster: &[HomeworkTarget],
    ) -> Result<Homework, DraftError> {
        self.validate()?;
        let targets = self
            .target_ids
            .iter()
            .map(|tid| {
                roster
                    .iter()
                    .find(|t| &t.id == tid)
                    .cloned()
                    .ok_or_else(|| DraftError::UnknownTarget(tid.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let total = targets.len();
        Ok(Homework {
            id,
            title: self.title.trim().to_owned(),
            category: self.category.trim().to_owned(),
            kind: self.kind,
            deadline: self.deadline.trim().to_owned(),
            content: self.content,
            targets,
            created_at,
            submission_stats: SubmissionStats { total, submitted: 0, pending: total },
        })
    }
}

/// Next free id for a locally created assignment.
#[must_use]
pub fn next_local_id(homeworks: &[Homework]) -> String {
    let max = homeworks
        .iter()
        .filter_map(|h| h.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}
