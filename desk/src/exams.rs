//! Weekly exam authoring.
//!
//! An exam has two sessions: 13 short-answer questions in session 1 and 6
//! essay questions in session 2. The form exposes a fixed slot per question;
//! unused slots are left blank and dropped on submit.

#[cfg(test)]
#[path = "exams_test.rs"]
mod exams_test;

use schema::{ExamQuestion, Id, QuestionType, WeeklyExam, WeeklyExamCreate};

use crate::notify::DraftError;

pub const SESSION1_SLOTS: usize = 13;
pub const SESSION2_SLOTS: usize = 6;

/// Create-exam form contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamDraft {
    /// `0` means not entered.
    pub week_number: u32,
    pub category_id: Option<Id>,
    pub session1: Vec<String>,
    pub session2: Vec<String>,
}

impl Default for ExamDraft {
    fn default() -> Self {
        Self {
            week_number: 0,
            category_id: None,
            session1: vec![String::new(); SESSION1_SLOTS],
            session2: vec![String::new(); SESSION2_SLOTS],
        }
    }
}

impl ExamDraft {
    /// Mutable slot for `session` (1 or 2), `index` from 0.
    pub fn slot_mut(&mut self, session: u8, index: usize) -> Option<&mut String> {
        match session {
            1 => self.session1.get_mut(index),
            2 => self.session2.get_mut(index),
            _ => None,
        }
    }

    /// Number of slots with text.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.session1
            .iter()
            .chain(&self.session2)
            .filter(|q| !q.trim().is_empty())
            .count()
    }

    /// Build the create payload.
    ///
    /// Blank slots are dropped and the remaining questions of each session
    /// are numbered from 1 in slot order.
    ///
    /// # Errors
    ///
    /// The week is missing (zero) or no category is selected.
    pub fn to_create(&self) -> Result<WeeklyExamCreate, DraftError> {
        if self.week_number < 1 {
            return Err(DraftError::WeekRequired);
        }
        let Some(category_id) = self.category_id else {
            return Err(DraftError::CategoryRequired);
        };
        let mut questions = numbered(&self.session1, 1, QuestionType::ShortAnswer);
        questions.extend(numbered(&self.session2, 2, QuestionType::Essay));
        Ok(WeeklyExamCreate { week_number: self.week_number, category_id, questions })
    }
}

fn numbered(slots: &[String], session: u8, question_type: QuestionType) -> Vec<ExamQuestion> {
    slots
        .iter()
        .filter(|text| !text.trim().is_empty())
        .zip(1..)
        .map(|(text, question_number)| ExamQuestion {
            id: None,
            session,
            question_number,
            question_text: text.clone(),
            question_type,
        })
        .collect()
}

/// Exam card summary line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamCard {
    pub id: Id,
    pub title: String,
    pub category: String,
    pub question_count: usize,
    pub registered: String,
}

impl ExamCard {
    #[must_use]
    pub fn new(exam: &WeeklyExam) -> Self {
        Self {
            id: exam.id,
            title: format!("{}주차 모의고사", exam.week_number),
            category: exam
                .category
                .as_ref()
                .map_or_else(|| crate::dashboard::UNCATEGORIZED.to_owned(), |c| c.name.clone()),
            question_count: exam.questions.len(),
            registered: crate::format::display_date(&exam.created_at),
        }
    }
}

/// Exams ordered by week, most recent week first.
#[must_use]
pub fn by_week_desc(exams: &[WeeklyExam]) -> Vec<&WeeklyExam> {
    let mut sorted = exams.iter().collect::<Vec<_>>();
    sorted.sort_by(|a, b| b.week_number.cmp(&a.week_number));
    sorted
}
