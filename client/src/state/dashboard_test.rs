use serde_json::json;

use super::*;

fn topics() -> Vec<Topic> {
    serde_json::from_value(json!([
        { "id": 1, "title": "a", "category": "네트워크" },
        { "id": 2, "title": "b", "category": "TCP" },
        { "id": 3, "title": "c" }
    ]))
    .unwrap()
}

fn tree() -> Vec<Category> {
    serde_json::from_value(json!([
        { "id": 1, "name": "네트워크", "children": [{ "id": 2, "name": "TCP", "parent_id": 1 }] }
    ]))
    .unwrap()
}

#[test]
fn joined_fetch_computes_stats() {
    let mut state = DashboardState { loading: true, ..DashboardState::default() };
    assert!(state.settle(Ok(topics()), Ok(tree())).is_none());
    assert!(!state.loading);
    let stats = state.stats.unwrap();
    assert_eq!(stats.total_topics, 3);
    assert_eq!(stats.category_stats[0].category, "네트워크");
    assert_eq!(stats.category_stats[0].percentage, 67);
    assert_eq!(stats.category_stats[1].percentage, 33);
}

#[test]
fn either_failure_reports_and_keeps_previous_stats() {
    let mut state = DashboardState::default();
    state.settle(Ok(topics()), Ok(tree()));

    let notice = state.settle(Ok(topics()), Err(Failure::Transport("down".to_owned()))).unwrap();
    assert_eq!(notice.text, text::DASHBOARD_LOAD_FAILED);
    assert_eq!(state.error.as_deref(), Some(text::DASHBOARD_LOAD_FAILED));
    assert!(state.stats.is_some());

    let notice = state
        .settle(Err(Failure::rejected(500, r#"{"detail":"db offline"}"#)), Ok(tree()))
        .unwrap();
    assert_eq!(notice.text, "db offline");
}
