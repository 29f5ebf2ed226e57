use serde_json::json;

use super::*;

fn topic(keywords: &[&str]) -> Topic {
    serde_json::from_value(json!({
        "id": 3,
        "title": "DNS",
        "content": "<p>이름 해석</p>",
        "keywords": keywords.iter().map(|k| json!({ "keyword": k })).collect::<Vec<_>>()
    }))
    .unwrap()
}

fn version(n: i64) -> TopicVersion {
    TopicVersion {
        id: n,
        topic_id: 3,
        version: n,
        title: Some("DNS".to_owned()),
        content: None,
        category: None,
        changed_by: "admin".to_owned(),
        change_reason: "Content update".to_owned(),
        created_at: "2024-09-01T10:00:00".to_owned(),
    }
}

// =============================================================
// Search
// =============================================================

#[test]
fn blank_query_means_reload() {
    let mut state = TopicsState { query: "   ".to_owned(), ..TopicsState::default() };
    assert!(state.search_target().is_none());

    state.query = " 캐시 ".to_owned();
    state.search_type = TopicSearchType::Keyword;
    assert_eq!(state.search_target(), Some(("캐시".to_owned(), TopicSearchType::Keyword)));
}

#[test]
fn replace_items_clears_loading() {
    let mut state = TopicsState { loading: true, ..TopicsState::default() };
    state.replace_items(vec![topic(&[]), topic(&[])]);
    assert!(!state.loading);
    assert_eq!(state.total_label(), "총 2개");
}

#[test]
fn keyword_preview_collapses_overflow() {
    let t = topic(&["A", "B", "C", "D", "E"]);
    assert_eq!(keyword_preview(&t), (vec!["A", "B", "C"], 2));
    assert_eq!(keyword_preview(&topic(&["A"])), (vec!["A"], 0));
}

// =============================================================
// History
// =============================================================

#[test]
fn comparison_needs_history_and_selection() {
    let mut state = TopicsState::default();
    assert!(state.comparison().is_none());

    state.open_history(topic(&[]), vec![version(1), version(2)]);
    assert!(state.comparison().is_none());

    state.selected_version = Some(2);
    let cmp = state.comparison().unwrap();
    assert_eq!(cmp.heading(), "DNS - 버전 2 비교");

    state.selected_version = Some(9);
    assert!(state.comparison().is_none());
}

#[test]
fn close_history_resets_selection() {
    let mut state = TopicsState::default();
    state.open_history(topic(&[]), vec![version(1)]);
    state.selected_version = Some(1);
    state.confirm_restore = true;
    state.close_history();
    assert!(state.history.is_none());
    assert!(state.selected_version.is_none());
    assert!(!state.confirm_restore);
}
