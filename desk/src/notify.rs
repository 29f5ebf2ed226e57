//! Failure taxonomy and transient notices.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every API call in the console and the CLI resolves to either a value or a
//! [`Failure`]. Screens never crash on a failure; they raise a [`Notice`] and
//! keep whatever state the user had entered. The text shown prefers the
//! server's `detail`, then local validation text, then a per-action fallback.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Stable machine-readable code for an error, attached to warning logs.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}

/// Why an action did not complete.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Failure {
    /// The request never produced an HTTP response, or the body was unreadable.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    /// Local form validation failed before any request was sent.
    #[error("invalid input: {0}")]
    Invalid(String),
}

impl Failure {
    /// Build a rejection from a status and raw response body.
    #[must_use]
    pub fn rejected(status: u16, body: &str) -> Self {
        Self::Rejected { status, detail: schema::error_detail(body) }
    }

    /// Text to show the user.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { detail: Some(detail), .. } => detail.clone(),
            Self::Invalid(text) => text.clone(),
            _ => fallback.to_owned(),
        }
    }
}

impl ErrorCode for Failure {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "E_TRANSPORT",
            Self::Rejected { status, .. } if *status == 404 => "E_NOT_FOUND",
            Self::Rejected { .. } => "E_REJECTED",
            Self::Invalid(_) => "E_INVALID",
        }
    }
}

/// Validation failure of a local draft (weekly exam or homework form).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("주차를 입력하세요")]
    WeekRequired,
    #[error("카테고리를 선택하세요")]
    CategoryRequired,
    #[error("제목을 입력하세요")]
    TitleRequired,
    #[error("제출기한을 선택하세요")]
    DeadlineRequired,
    #[error("대상자를 선택하세요")]
    TargetsRequired,
    #[error("알 수 없는 대상자: {0}")]
    UnknownTarget(String),
}

impl ErrorCode for DraftError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownTarget(_) => "E_UNKNOWN_TARGET",
            _ => "E_REQUIRED",
        }
    }
}

impl From<DraftError> for Failure {
    fn from(err: DraftError) -> Self {
        Self::Invalid(err.to_string())
    }
}

/// Severity of a transient notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Error,
}

impl Level {
    /// CSS modifier used by the toast.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notice--success",
            Self::Warning => "notice--warning",
            Self::Error => "notice--error",
        }
    }
}

/// A transient message shown after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub text: String,
}

impl Notice {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self { level: Level::Success, text: text.into() }
    }

    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: Level::Warning, text: text.into() }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { level: Level::Error, text: text.into() }
    }

    /// Error notice for `failure`, falling back to `fallback` when nothing better is known.
    #[must_use]
    pub fn from_failure(failure: &Failure, fallback: &str) -> Self {
        let level = match failure {
            Failure::Invalid(_) => Level::Warning,
            _ => Level::Error,
        };
        Self { level, text: failure.user_message(fallback) }
    }
}

/// Localized fallback and success texts, one per console action.
pub mod text {
    pub const TOPICS_LOAD_FAILED: &str = "토픽 목록을 불러오는데 실패했습니다.";
    pub const TOPIC_LOAD_FAILED: &str = "토픽을 불러오는데 실패했습니다.";
    pub const TOPIC_CREATED: &str = "토픽이 생성되었습니다.";
    pub const TOPIC_UPDATED: &str = "토픽이 수정되었습니다.";
    pub const TOPIC_SAVE_FAILED: &str = "토픽 저장에 실패했습니다.";
    pub const TOPIC_DELETED: &str = "토픽이 삭제되었습니다.";
    pub const TOPIC_DELETE_FAILED: &str = "토픽 삭제에 실패했습니다.";
    pub const SEARCH_FAILED: &str = "검색에 실패했습니다.";
    pub const VERSIONS_LOAD_FAILED: &str = "버전 이력을 불러오는데 실패했습니다.";
    pub const VERSION_RESTORED: &str = "버전이 복원되었습니다.";
    pub const VERSION_RESTORE_FAILED: &str = "버전 복원에 실패했습니다.";

    pub const CATEGORIES_LOAD_FAILED: &str = "카테고리를 불러오는데 실패했습니다.";
    pub const CATEGORY_CREATED: &str = "카테고리가 생성되었습니다.";
    pub const CATEGORY_UPDATED: &str = "카테고리가 수정되었습니다.";
    pub const CATEGORY_SAVE_FAILED: &str = "카테고리 저장에 실패했습니다.";
    pub const CATEGORY_DELETED: &str = "카테고리가 삭제되었습니다.";
    pub const CATEGORY_DELETE_FAILED: &str = "카테고리 삭제에 실패했습니다.";

    pub const TEMPLATES_LOAD_FAILED: &str = "템플릿을 불러오는데 실패했습니다.";
    pub const TEMPLATE_CREATED: &str = "템플릿이 생성되었습니다.";
    pub const TEMPLATE_UPDATED: &str = "템플릿이 수정되었습니다.";
    pub const TEMPLATE_SAVE_FAILED: &str = "저장에 실패했습니다.";
    pub const TEMPLATE_DELETED: &str = "템플릿이 삭제되었습니다.";
    pub const TEMPLATE_DELETE_FAILED: &str = "삭제에 실패했습니다.";
    pub const TEMPLATE_CONTENT_REQUIRED: &str = "템플릿 내용을 입력하세요.";

    pub const EXAMS_LOAD_FAILED: &str = "주간모의고사를 불러오는데 실패했습니다.";
    pub const EXAM_CREATED: &str = "주간모의고사가 생성되었습니다.";
    pub const EXAM_CREATE_FAILED: &str = "주간모의고사 생성에 실패했습니다.";

    pub const HOMEWORK_CREATED: &str = "숙제가 등록되었습니다.";

    pub const DASHBOARD_LOAD_FAILED: &str = "대시보드 데이터를 불러오는데 실패했습니다.";

    pub const DUPLICATE_SUBMIT: &str = "이미 처리 중인 요청입니다.";
}
