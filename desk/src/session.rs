//! Topic create/edit session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The topic editor modal drives one [`TopicEditSession`]:
//!
//! ```text
//! Closed --open_create/open_edit--> Open(mode) --begin_save--> Saving(mode)
//!    ^                                  ^                          |
//!    |                                  +------ finish_save(Err) --+
//!    +------------------------------------------ finish_save(Ok) --+
//! ```
//!
//! While `Saving`, a second `begin_save` is refused, which is what keeps a
//! double click from sending two creates. A failed save reopens the form with
//! everything the user typed still in place.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use schema::{Id, MnemonicInput, Topic, TopicCreate, TopicUpdate};

use crate::editor::EditorDocument;
use crate::notify::{ErrorCode, Failure, Notice, text};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("편집 중인 토픽이 없습니다")]
    NotOpen,
    #[error("저장 중입니다")]
    SaveInFlight,
    #[error("제목을 입력하세요")]
    TitleRequired,
    #[error("키워드를 입력하세요")]
    BlankKeyword,
    #[error("이미 추가된 키워드입니다: {0}")]
    DuplicateKeyword(String),
}

impl ErrorCode for FormError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotOpen => "E_NOT_OPEN",
            Self::SaveInFlight => "E_SAVE_IN_FLIGHT",
            Self::TitleRequired => "E_TITLE_REQUIRED",
            Self::BlankKeyword => "E_BLANK_KEYWORD",
            Self::DuplicateKeyword(_) => "E_DUPLICATE_KEYWORD",
        }
    }
}

impl From<FormError> for Failure {
    fn from(err: FormError) -> Self {
        Self::Invalid(err.to_string())
    }
}

/// Values entered in the topic editor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopicForm {
    pub title: String,
    /// Category name; empty means none.
    pub category: String,
    pub keywords: Vec<String>,
    pub mnemonics: Vec<MnemonicInput>,
    pub document: EditorDocument,
}

impl TopicForm {
    /// Form filled from a topic's current values.
    #[must_use]
    pub fn from_topic(topic: &Topic) -> Self {
        Self {
            title: topic.title.clone(),
            category: topic.category.clone().unwrap_or_default(),
            keywords: topic.keyword_texts(),
            mnemonics: topic
                .mnemonics
                .iter()
                .map(|m| MnemonicInput { mnemonic: m.mnemonic.clone(), full_text: m.full_text.clone() })
                .collect(),
            document: EditorDocument::load(topic.content.clone().unwrap_or_default()),
        }
    }

    /// Append a keyword. Keywords are unique within a topic.
    ///
    /// # Errors
    ///
    /// The keyword is blank or already present.
    pub fn add_keyword(&mut self, raw: &str) -> Result<(), FormError> {
        let keyword = raw.trim();
        if keyword.is_empty() {
            return Err(FormError::BlankKeyword);
        }
        if self.keywords.iter().any(|k| k == keyword) {
            return Err(FormError::DuplicateKeyword(keyword.to_owned()));
        }
        self.keywords.push(keyword.to_owned());
        Ok(())
    }

    pub fn remove_keyword(&mut self, keyword: &str) {
        self.keywords.retain(|k| k != keyword);
    }

    /// Append an empty mnemonic row.
    pub fn add_mnemonic(&mut self) {
        self.mnemonics.push(MnemonicInput::default());
    }

    pub fn set_mnemonic(&mut self, index: usize, mnemonic: &str) {
        if let Some(row) = self.mnemonics.get_mut(index) {
            row.mnemonic = mnemonic.to_owned();
        }
    }

    pub fn set_full_text(&mut self, index: usize, full_text: &str) {
        if let Some(row) = self.mnemonics.get_mut(index) {
            row.full_text = full_text.to_owned();
        }
    }

    pub fn remove_mnemonic(&mut self, index: usize) {
        if index < self.mnemonics.len() {
            self.mnemonics.remove(index);
        }
    }

    /// Keyword list built one entry at a time with [`Self::add_keyword`].
    ///
    /// # Errors
    ///
    /// The first blank or repeated keyword.
    pub fn collect_keywords<'a>(raw: impl IntoIterator<Item = &'a str>) -> Result<Vec<String>, FormError> {
        let mut form = Self::default();
        for keyword in raw {
            form.add_keyword(keyword)?;
        }
        Ok(form.keywords)
    }

    fn kept_mnemonics(&self) -> Vec<MnemonicInput> {
        self.mnemonics
            .iter()
            .filter(|m| !m.mnemonic.trim().is_empty())
            .cloned()
            .collect()
    }

    fn category(&self) -> Option<String> {
        let category = self.category.trim();
        (!category.is_empty()).then(|| category.to_owned())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Edit(Id),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Closed,
    Open(EditMode),
    Saving(EditMode),
}

/// Request the caller must send after a successful `begin_save`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveRequest {
    Create(TopicCreate),
    Update { id: Id, update: TopicUpdate },
}

/// State of the topic editor modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopicEditSession {
    phase: Phase,
    pub form: TopicForm,
    last_error: Option<String>,
}

impl TopicEditSession {
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self.phase, Phase::Closed)
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        matches!(self.phase, Phase::Saving(_))
    }

    /// Message of the last failed save, kept until the next attempt.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Modal heading for the current mode.
    #[must_use]
    pub fn heading(&self) -> &'static str {
        match self.phase {
            Phase::Open(EditMode::Edit(_)) | Phase::Saving(EditMode::Edit(_)) => "토픽 수정",
            _ => "새 토픽 생성",
        }
    }

    pub fn open_create(&mut self) {
        self.phase = Phase::Open(EditMode::Create);
        self.form = TopicForm::default();
        self.last_error = None;
    }

    pub fn open_edit(&mut self, topic: &Topic) {
        self.phase = Phase::Open(EditMode::Edit(topic.id));
        self.form = TopicForm::from_topic(topic);
        self.last_error = None;
    }

    /// Validate the form and move to `Saving`.
    ///
    /// # Errors
    ///
    /// The session is closed, a save is already in flight, or the title is blank.
    pub fn begin_save(&mut self) -> Result<SaveRequest, FormError> {
        let mode = match self.phase {
            Phase::Open(mode) => mode,
            Phase::Saving(_) => return Err(FormError::SaveInFlight),
            Phase::Closed => return Err(FormError::NotOpen),
        };
        let title = self.form.title.trim();
        if title.is_empty() {
            return Err(FormError::TitleRequired);
        }

        let content = self.form.document.serialize();
        let request = match mode {
            EditMode::Create => SaveRequest::Create(TopicCreate {
                title: title.to_owned(),
                category: self.form.category(),
                content: Some(content),
                keywords: self.form.keywords.clone(),
                mnemonics: self.form.kept_mnemonics(),
            }),
            EditMode::Edit(id) => SaveRequest::Update {
                id,
                update: TopicUpdate {
                    title: Some(title.to_owned()),
                    category: self.form.category(),
                    content: Some(content),
                    keywords: self.form.keywords.clone(),
                    mnemonics: self.form.kept_mnemonics(),
                    change_reason: None,
                },
            },
        };
        self.phase = Phase::Saving(mode);
        self.last_error = None;
        Ok(request)
    }

    /// Settle the in-flight save. Returns the notice to show, or `None` when
    /// no save was in flight.
    pub fn finish_save(&mut self, outcome: Result<(), Failure>) -> Option<Notice> {
        let Phase::Saving(mode) = self.phase else {
            return None;
        };
        match outcome {
            Ok(()) => {
                self.phase = Phase::Closed;
                self.form = TopicForm::default();
                let text = match mode {
                    EditMode::Create => text::TOPIC_CREATED,
                    EditMode::Edit(_) => text::TOPIC_UPDATED,
                };
                Some(Notice::success(text))
            }
            Err(failure) => {
                self.phase = Phase::Open(mode);
                let notice = Notice::from_failure(&failure, text::TOPIC_SAVE_FAILED);
                self.last_error = Some(notice.text.clone());
                Some(notice)
            }
        }
    }

    /// Discard the session and its form.
    pub fn close(&mut self) {
        *self = Self::default();
    }
}
