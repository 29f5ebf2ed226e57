//! Wire DTOs for the study-material REST backend.
//!
//! This crate owns the JSON representation shared by the browser console
//! (`client`) and the native admin tool (`cli`). The backend is authoritative
//! for every entity; these types only mirror what it sends and accepts.
//!
//! Rich-text fields (`content`) carry editor HTML and are passed through
//! verbatim, inline base64 images included.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub mod endpoints;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Backend row identifier.
pub type Id = i64;

// =============================================================================
// TOPICS
// =============================================================================

/// A keyword attached to a topic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    pub keyword: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<Id>,
}

/// A short memorable cue mapped to its fuller phrase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mnemonic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    pub mnemonic: String,
    pub full_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<Id>,
}

/// Mnemonic payload used when creating or replacing a topic's mnemonics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MnemonicInput {
    pub mnemonic: String,
    pub full_text: String,
}

/// A past exam appearance of a topic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExamHistory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    /// Exam round label, e.g. `"130회"`.
    pub exam_round: String,
    /// Question label within the round, e.g. `"1교시 3번"`.
    pub question_number: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<Id>,
}

/// A single knowledge item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: Id,
    pub title: String,
    /// Free-form category label. Matched against category names, not ids.
    #[serde(default)]
    pub category: Option<String>,
    /// Editor HTML.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub keywords: Vec<Keyword>,
    #[serde(default)]
    pub mnemonics: Vec<Mnemonic>,
    #[serde(default)]
    pub exam_histories: Vec<ExamHistory>,
}

impl Topic {
    /// Keyword strings in display order.
    #[must_use]
    pub fn keyword_texts(&self) -> Vec<String> {
        self.keywords.iter().map(|k| k.keyword.clone()).collect()
    }
}

/// Payload for `POST /api/topics/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCreate {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub mnemonics: Vec<MnemonicInput>,
}

/// Payload for `PUT /api/topics/{id}`. Absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mnemonics: Vec<MnemonicInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_reason: Option<String>,
}

/// Field selector for `GET /api/topics/search`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicSearchType {
    #[default]
    All,
    Title,
    Keyword,
    Mnemonic,
}

impl TopicSearchType {
    pub const ALL: [Self; 4] = [Self::All, Self::Title, Self::Keyword, Self::Mnemonic];

    /// Query-string value understood by the backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Title => "title",
            Self::Keyword => "keyword",
            Self::Mnemonic => "mnemonic",
        }
    }

    /// Parse a query-string value. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }

    /// Console label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "전체",
            Self::Title => "제목",
            Self::Keyword => "키워드",
            Self::Mnemonic => "암기법",
        }
    }
}

/// Server-retained snapshot of a topic, created as a side effect of updates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicVersion {
    pub id: Id,
    pub topic_id: Id,
    pub version: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub changed_by: String,
    pub change_reason: String,
    pub created_at: String,
}

// =============================================================================
// CATEGORIES
// =============================================================================

/// A category record. `children` is only populated by the tree endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Category>,
}

/// Payload for `POST /api/categories/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Id>,
}

/// Payload for `PUT /api/categories/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Id>,
}

// =============================================================================
// TEMPLATES
// =============================================================================

/// Reusable rich-text snippet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for `POST /api/templates/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateCreate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Payload for `PUT /api/templates/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

// =============================================================================
// WEEKLY EXAMS
// =============================================================================

/// Answer format of an exam question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Session 1: short-answer questions.
    ShortAnswer,
    /// Session 2: essay questions.
    Essay,
}

/// One question of a weekly mock exam.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamQuestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    /// Exam session (`1` or `2`).
    pub session: u8,
    pub question_number: u32,
    pub question_text: String,
    pub question_type: QuestionType,
}

/// Category summary embedded in weekly exam responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamCategory {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A weekly mock exam with its questions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyExam {
    pub id: Id,
    pub week_number: u32,
    pub category_id: Id,
    #[serde(default)]
    pub category: Option<ExamCategory>,
    #[serde(default)]
    pub questions: Vec<ExamQuestion>,
    pub created_at: String,
}

impl WeeklyExam {
    /// Questions of one session ordered by question number.
    #[must_use]
    pub fn session_questions(&self, session: u8) -> Vec<&ExamQuestion> {
        let mut questions = self
            .questions
            .iter()
            .filter(|q| q.session == session)
            .collect::<Vec<_>>();
        questions.sort_by_key(|q| q.question_number);
        questions
    }
}

/// Payload for `POST /api/weekly-exams/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyExamCreate {
    pub week_number: u32,
    pub category_id: Id,
    #[serde(default)]
    pub questions: Vec<ExamQuestion>,
}

/// A student on the roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: Id,
    pub name: String,
}

/// Per-student score sheet for one weekly exam.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExamScore {
    pub id: Id,
    pub student_id: Id,
    pub student_name: String,
    pub weekly_exam_id: Id,
    /// Session 1 scores keyed by question number.
    pub session1_scores: BTreeMap<u32, f64>,
    /// Session 2 scores keyed by question number.
    pub session2_scores: BTreeMap<u32, f64>,
    pub session1_total: f64,
    pub session2_total: f64,
    pub total: f64,
}

// =============================================================================
// HOMEWORK
// =============================================================================

/// Homework track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkKind {
    /// Per-chapter assignment.
    #[default]
    Chapter,
    /// Self-test in exam format.
    #[serde(rename = "selftest")]
    SelfTest,
}

impl HomeworkKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Chapter => "챕터별 숙제",
            Self::SelfTest => "셀프 테스트",
        }
    }
}

/// A student an assignment is addressed to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeworkTarget {
    pub id: String,
    pub name: String,
}

/// Submission counters shown next to each assignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionStats {
    pub total: usize,
    pub submitted: usize,
    pub pending: usize,
}

impl SubmissionStats {
    /// Tally a set of submissions. Late submissions count as submitted.
    #[must_use]
    pub fn from_submissions<'a>(submissions: impl IntoIterator<Item = &'a Submission>) -> Self {
        let mut stats = Self::default();
        for submission in submissions {
            stats.total += 1;
            match submission.status {
                SubmissionStatus::Submitted | SubmissionStatus::Late => stats.submitted += 1,
                SubmissionStatus::Pending => stats.pending += 1,
            }
        }
        stats
    }

    /// Submitted share as a whole percent. Zero when there are no targets.
    #[must_use]
    pub fn submitted_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let rounded = (self.submitted * 200 + self.total) / (self.total * 2);
        u32::try_from(rounded).unwrap_or(100)
    }
}

/// A homework assignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Homework {
    pub id: String,
    pub title: String,
    pub category: String,
    pub kind: HomeworkKind,
    /// Due date (`YYYY-MM-DD`).
    pub deadline: String,
    /// Editor HTML.
    pub content: String,
    pub targets: Vec<HomeworkTarget>,
    pub created_at: String,
    pub submission_stats: SubmissionStats,
}

/// Submission lifecycle of one target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Submitted,
    Pending,
    Late,
}

impl SubmissionStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Submitted => "제출완료",
            Self::Late => "지각제출",
            Self::Pending => "미제출",
        }
    }
}

/// One target's submission for an assignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub homework_id: String,
    pub target_name: String,
    #[serde(default)]
    pub submitted_at: Option<String>,
    pub status: SubmissionStatus,
    #[serde(default)]
    pub content: Option<String>,
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Extract the human-readable `detail` from a backend error body.
///
/// The backend answers failures with `{"detail": "..."}`; validation errors
/// carry a list of objects with a `msg` field instead. Anything else yields
/// `None` so callers fall back to a generic message.
#[must_use]
pub fn error_detail(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(text) if !text.trim().is_empty() => Some(text),
        serde_json::Value::Array(items) => {
            let messages = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect::<Vec<_>>();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
