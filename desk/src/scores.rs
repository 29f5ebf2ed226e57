//! Sortable weekly exam score table.

#[cfg(test)]
#[path = "scores_test.rs"]
mod scores_test;

use std::cmp::Ordering;
use std::fmt;

use schema::{ExamScore, Id};

/// Column a score table can be sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Session1Total,
    Session2Total,
    Total,
    /// Score of one session-1 question.
    Session1(u32),
    /// Score of one session-2 question.
    Session2(u32),
}

impl SortKey {
    /// Parse a column key such as `total` or `session2_3`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "name" => return Some(Self::Name),
            "session1_total" => return Some(Self::Session1Total),
            "session2_total" => return Some(Self::Session2Total),
            "total" => return Some(Self::Total),
            _ => {}
        }
        if let Some(n) = raw.strip_prefix("session1_") {
            return n.parse::<u32>().ok().filter(|n| *n > 0).map(Self::Session1);
        }
        if let Some(n) = raw.strip_prefix("session2_") {
            return n.parse::<u32>().ok().filter(|n| *n > 0).map(Self::Session2);
        }
        None
    }

    fn compare(self, a: &ExamScore, b: &ExamScore) -> Ordering {
        match self {
            Self::Name => a.student_name.to_lowercase().cmp(&b.student_name.to_lowercase()),
            Self::Session1Total => a.session1_total.total_cmp(&b.session1_total),
            Self::Session2Total => a.session2_total.total_cmp(&b.session2_total),
            Self::Total => a.total.total_cmp(&b.total),
            Self::Session1(n) => question(a, 1, n).total_cmp(&question(b, 1, n)),
            Self::Session2(n) => question(a, 2, n).total_cmp(&question(b, 2, n)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::Session1Total => f.write_str("session1_total"),
            Self::Session2Total => f.write_str("session2_total"),
            Self::Total => f.write_str("total"),
            Self::Session1(n) => write!(f, "session1_{n}"),
            Self::Session2(n) => write!(f, "session2_{n}"),
        }
    }
}

/// Score for question `n` of `session`; unanswered counts as zero.
#[must_use]
pub fn question(score: &ExamScore, session: u8, n: u32) -> f64 {
    let map = if session == 1 { &score.session1_scores } else { &score.session2_scores };
    map.get(&n).copied().unwrap_or(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Active sort column, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<(SortKey, Direction)>,
}

impl SortState {
    #[must_use]
    pub fn active(&self) -> Option<(SortKey, Direction)> {
        self.active
    }

    /// Header click: an ascending column flips to descending, anything else
    /// sorts ascending by `key`.
    pub fn click(&mut self, key: SortKey) {
        let direction = match self.active {
            Some((current, Direction::Asc)) if current == key => Direction::Desc,
            _ => Direction::Asc,
        };
        self.active = Some((key, direction));
    }

    /// Header arrow for `key`.
    #[must_use]
    pub fn indicator(&self, key: SortKey) -> &'static str {
        match self.active {
            Some((current, Direction::Asc)) if current == key => "↑",
            Some((current, Direction::Desc)) if current == key => "↓",
            _ => "⇅",
        }
    }
}

/// Scores of `exam_id`, stably sorted by `state`. Unsorted keeps input order.
#[must_use]
pub fn sorted_scores<'a>(scores: &'a [ExamScore], exam_id: Id, state: &SortState) -> Vec<&'a ExamScore> {
    let mut rows = scores
        .iter()
        .filter(|s| s.weekly_exam_id == exam_id)
        .collect::<Vec<_>>();
    if let Some((key, direction)) = state.active {
        rows.sort_by(|a, b| match direction {
            Direction::Asc => key.compare(a, b),
            Direction::Desc => key.compare(b, a),
        });
    }
    rows
}
