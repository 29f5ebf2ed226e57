//! Weekly exam screen state.
//!
//! Exams and categories come from the backend. Scores are the sample table
//! from `desk::sample`; there is no score endpoint yet.

#[cfg(test)]
#[path = "weekly_exams_test.rs"]
mod weekly_exams_test;

use desk::exams::{ExamCard, ExamDraft, SESSION1_SLOTS, SESSION2_SLOTS, by_week_desc};
use desk::guard::SubmitKey;
use desk::sample;
use desk::scores::{SortKey, SortState, sorted_scores};
use schema::{Category, ExamScore, Id, WeeklyExam, WeeklyExamCreate};

#[derive(Clone, Debug)]
pub struct WeeklyExamsState {
    pub exams: Vec<WeeklyExam>,
    /// Flat category list for the create form.
    pub categories: Vec<Category>,
    pub loading: bool,
    pub draft: Option<ExamDraft>,
    pub detail: Option<Id>,
    pub sort: SortState,
    pub scores: Vec<ExamScore>,
}

impl Default for WeeklyExamsState {
    fn default() -> Self {
        Self {
            exams: Vec::new(),
            categories: Vec::new(),
            loading: false,
            draft: None,
            detail: None,
            sort: SortState::default(),
            scores: sample::exam_scores(),
        }
    }
}

impl WeeklyExamsState {
    pub fn replace_exams(&mut self, exams: Vec<WeeklyExam>) {
        self.exams = exams;
        self.loading = false;
    }

    #[must_use]
    pub fn cards(&self) -> Vec<ExamCard> {
        by_week_desc(&self.exams).into_iter().map(ExamCard::new).collect()
    }

    /// Open an exam's detail view with the score table unsorted.
    pub fn open_detail(&mut self, id: Id) {
        self.detail = Some(id);
        self.sort = SortState::default();
    }

    #[must_use]
    pub fn selected(&self) -> Option<&WeeklyExam> {
        let id = self.detail?;
        self.exams.iter().find(|e| e.id == id)
    }

    /// Score rows of the open exam in the current sort order.
    #[must_use]
    pub fn score_rows(&self) -> Vec<&ExamScore> {
        self.detail.map_or_else(Vec::new, |id| sorted_scores(&self.scores, id, &self.sort))
    }

    pub fn click_sort(&mut self, key: SortKey) {
        self.sort.click(key);
    }
}

/// Question numbers used as score-table columns for `session`.
///
/// Uses the exam's own numbering, or the full slot range when the exam has
/// no questions in that session.
#[must_use]
pub fn score_columns(exam: &WeeklyExam, session: u8) -> Vec<u32> {
    let numbers = exam
        .session_questions(session)
        .into_iter()
        .map(|q| q.question_number)
        .collect::<Vec<_>>();
    if !numbers.is_empty() {
        return numbers;
    }
    let slots = if session == 1 { SESSION1_SLOTS } else { SESSION2_SLOTS };
    (1..).take(slots).collect()
}

#[must_use]
pub fn create_key(payload: &WeeklyExamCreate) -> SubmitKey {
    SubmitKey::new("weekly-exam:create", payload)
}
