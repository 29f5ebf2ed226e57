use std::collections::BTreeMap;

use super::*;
use crate::sample;

fn score(id: Id, name: &str, exam: Id, total: f64, q1: Option<f64>) -> ExamScore {
    ExamScore {
        id,
        student_id: id,
        student_name: name.to_owned(),
        weekly_exam_id: exam,
        session1_scores: q1.map(|v| BTreeMap::from([(1, v)])).unwrap_or_default(),
        session2_scores: BTreeMap::new(),
        session1_total: total,
        session2_total: 0.0,
        total,
    }
}

fn names(rows: &[&ExamScore]) -> Vec<String> {
    rows.iter().map(|s| s.student_name.clone()).collect()
}

// =============================================================
// Keys
// =============================================================

#[test]
fn key_parse_and_display_agree() {
    for raw in ["name", "session1_total", "session2_total", "total", "session1_13", "session2_6"] {
        let key = SortKey::parse(raw).unwrap();
        assert_eq!(key.to_string(), raw);
    }
    assert_eq!(SortKey::parse("session1_4"), Some(SortKey::Session1(4)));
    assert_eq!(SortKey::parse("session1_x"), None);
    assert_eq!(SortKey::parse("session2_0"), None);
    assert_eq!(SortKey::parse("rank"), None);
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn click_toggles_asc_then_desc() {
    let mut state = SortState::default();
    state.click(SortKey::Total);
    assert_eq!(state.active(), Some((SortKey::Total, Direction::Asc)));
    state.click(SortKey::Total);
    assert_eq!(state.active(), Some((SortKey::Total, Direction::Desc)));
    state.click(SortKey::Total);
    assert_eq!(state.active(), Some((SortKey::Total, Direction::Asc)));
}

#[test]
fn click_on_new_key_resets_to_ascending() {
    let mut state = SortState::default();
    state.click(SortKey::Name);
    state.click(SortKey::Name);
    state.click(SortKey::Session2(3));
    assert_eq!(state.active(), Some((SortKey::Session2(3), Direction::Asc)));
}

#[test]
fn indicator_marks_only_the_active_column() {
    let mut state = SortState::default();
    assert_eq!(state.indicator(SortKey::Name), "⇅");
    state.click(SortKey::Name);
    assert_eq!(state.indicator(SortKey::Name), "↑");
    assert_eq!(state.indicator(SortKey::Total), "⇅");
    state.click(SortKey::Name);
    assert_eq!(state.indicator(SortKey::Name), "↓");
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn filters_to_exam_and_keeps_order_when_unsorted() {
    let scores = vec![
        score(1, "b", 1, 10.0, None),
        score(2, "x", 2, 99.0, None),
        score(3, "a", 1, 20.0, None),
    ];
    let rows = sorted_scores(&scores, 1, &SortState::default());
    assert_eq!(names(&rows), vec!["b", "a"]);
}

#[test]
fn names_compare_case_insensitively() {
    let scores = vec![
        score(1, "bob", 1, 0.0, None),
        score(2, "Alice", 1, 0.0, None),
        score(3, "carol", 1, 0.0, None),
    ];
    let mut state = SortState::default();
    state.click(SortKey::Name);
    assert_eq!(names(&sorted_scores(&scores, 1, &state)), vec!["Alice", "bob", "carol"]);
    state.click(SortKey::Name);
    assert_eq!(names(&sorted_scores(&scores, 1, &state)), vec!["carol", "bob", "Alice"]);
}

#[test]
fn missing_question_score_counts_as_zero() {
    let scores = vec![
        score(1, "a", 1, 0.0, Some(3.0)),
        score(2, "b", 1, 0.0, None),
        score(3, "c", 1, 0.0, Some(-1.0)),
    ];
    let mut state = SortState::default();
    state.click(SortKey::Session1(1));
    assert_eq!(names(&sorted_scores(&scores, 1, &state)), vec!["c", "b", "a"]);
}

#[test]
fn ties_keep_input_order_in_both_directions() {
    let scores = vec![
        score(1, "a", 1, 5.0, None),
        score(2, "b", 1, 5.0, None),
        score(3, "c", 1, 1.0, None),
    ];
    let mut state = SortState::default();
    state.click(SortKey::Total);
    assert_eq!(names(&sorted_scores(&scores, 1, &state)), vec!["c", "a", "b"]);
    state.click(SortKey::Total);
    assert_eq!(names(&sorted_scores(&scores, 1, &state)), vec!["a", "b", "c"]);
}

#[test]
fn sample_scores_sort_by_session2_question() {
    let scores = sample::exam_scores();
    let mut state = SortState::default();
    state.click(SortKey::Session2(4));
    state.click(SortKey::Session2(4));
    let rows = sorted_scores(&scores, 1, &state);
    assert_eq!(names(&rows), vec!["김영탁", "김기주"]);
    assert!((question(rows[0], 2, 4) - 14.9).abs() < f64::EPSILON);
}
