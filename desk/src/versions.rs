//! Topic version history: browse, compare, restore.
//!
//! DESIGN
//! ======
//! Versions are created by the server as a side effect of updates; this
//! module never fabricates one. Comparison is a plain per-field inequality
//! between a snapshot and the live topic, reported as changed or unchanged.
//! Restoring is an ordinary topic update carrying the snapshot's fields, so
//! the server records the restore as a new version in turn.

#[cfg(test)]
#[path = "versions_test.rs"]
mod versions_test;

use schema::{Topic, TopicUpdate, TopicVersion};

/// Shown instead of the history when a topic has no versions.
pub const NO_HISTORY: &str = "버전 이력이 없습니다.";

/// Rendered in place of missing content.
pub const EMPTY_CONTENT: &str = "<p>내용이 없습니다.</p>";

const NONE_LABEL: &str = "없음";

/// A topic and its versions, newest first.
#[derive(Clone, Debug, PartialEq)]
pub struct VersionHistory {
    topic: Topic,
    versions: Vec<TopicVersion>,
}

impl VersionHistory {
    #[must_use]
    pub fn new(topic: Topic, mut versions: Vec<TopicVersion>) -> Self {
        versions.sort_by(|a, b| b.version.cmp(&a.version));
        Self { topic, versions }
    }

    #[must_use]
    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    #[must_use]
    pub fn versions(&self) -> &[TopicVersion] {
        &self.versions
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Modal heading.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} - 버전 이력", self.topic.title)
    }

    /// Compare version number `version` against the live topic.
    #[must_use]
    pub fn select(&self, version: i64) -> Option<VersionComparison<'_>> {
        self.versions
            .iter()
            .find(|v| v.version == version)
            .map(|v| VersionComparison { version: v, topic: &self.topic })
    }
}

/// One snapshot side by side with the live topic.
#[derive(Clone, Copy, Debug)]
pub struct VersionComparison<'a> {
    pub version: &'a TopicVersion,
    pub topic: &'a Topic,
}

impl VersionComparison<'_> {
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} - 버전 {} 비교", self.topic.title, self.version.version)
    }

    /// Snapshot content, with a placeholder when empty.
    #[must_use]
    pub fn version_pane(&self) -> &str {
        non_empty_content(self.version.content.as_deref())
    }

    /// Live content, with a placeholder when empty.
    #[must_use]
    pub fn current_pane(&self) -> &str {
        non_empty_content(self.topic.content.as_deref())
    }

    #[must_use]
    pub fn diff(&self) -> VersionDiff {
        diff(self.version, self.topic)
    }

    #[must_use]
    pub fn restore_request(&self) -> TopicUpdate {
        restore_request(self.version)
    }

    /// Confirmation prompt shown before restoring.
    #[must_use]
    pub fn confirm_prompt(&self) -> String {
        format!(
            "버전 {}으로 복원하시겠습니까? 현재 내용이 덮어쓰여집니다.",
            self.version.version
        )
    }

    #[must_use]
    pub fn restored_message(&self) -> String {
        format!("버전 {}으로 복원되었습니다.", self.version.version)
    }
}

fn non_empty_content(content: Option<&str>) -> &str {
    match content {
        Some(markup) if !markup.is_empty() => markup,
        _ => EMPTY_CONTENT,
    }
}

/// Whether one field differs between a snapshot and the live topic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldDiff {
    Unchanged,
    Changed { before: String, after: String },
}

impl FieldDiff {
    fn of(before: Option<&str>, after: Option<&str>) -> Self {
        if before == after {
            Self::Unchanged
        } else {
            Self::Changed {
                before: before.unwrap_or(NONE_LABEL).to_owned(),
                after: after.unwrap_or(NONE_LABEL).to_owned(),
            }
        }
    }

    #[must_use]
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }

    fn quoted(&self) -> String {
        match self {
            Self::Unchanged => "변경 없음".to_owned(),
            Self::Changed { before, after } => format!("\"{before}\" → \"{after}\""),
        }
    }
}

/// Per-field change summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionDiff {
    pub title: FieldDiff,
    pub category: FieldDiff,
    pub content: FieldDiff,
}

impl VersionDiff {
    /// Summary list shown under the comparison panes.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let content = if self.content.is_changed() { "변경됨" } else { "변경 없음" };
        vec![
            format!("제목: {}", self.title.quoted()),
            format!("카테고리: {}", self.category.quoted()),
            format!("내용: {content}"),
        ]
    }
}

/// Compare `version`'s snapshot against `topic`.
#[must_use]
pub fn diff(version: &TopicVersion, topic: &Topic) -> VersionDiff {
    VersionDiff {
        title: FieldDiff::of(version.title.as_deref(), Some(topic.title.as_str())),
        category: FieldDiff::of(version.category.as_deref(), topic.category.as_deref()),
        content: FieldDiff::of(version.content.as_deref(), topic.content.as_deref()),
    }
}

/// Update payload that puts `version`'s snapshot back.
///
/// Fields missing from the snapshot are omitted, leaving the live values.
#[must_use]
pub fn restore_request(version: &TopicVersion) -> TopicUpdate {
    TopicUpdate {
        title: version.title.clone(),
        category: version.category.clone(),
        content: version.content.clone(),
        change_reason: Some(format!("버전 {} 복원", version.version)),
        ..TopicUpdate::default()
    }
}
