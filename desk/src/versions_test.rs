use serde_json::json;

use super::*;

fn topic() -> Topic {
    serde_json::from_value(json!({
        "id": 1,
        "title": "OSI 7계층",
        "category": "네트워크",
        "content": "<p>현재</p>"
    }))
    .unwrap()
}

fn version(n: i64, title: Option<&str>, content: Option<&str>) -> TopicVersion {
    TopicVersion {
        id: n * 10,
        topic_id: 1,
        version: n,
        title: title.map(str::to_owned),
        content: content.map(str::to_owned),
        category: Some("네트워크".to_owned()),
        changed_by: "admin".to_owned(),
        change_reason: "Content update".to_owned(),
        created_at: format!("2024-09-0{n}T10:00:00"),
    }
}

#[test]
fn history_is_sorted_newest_first() {
    let history = VersionHistory::new(
        topic(),
        vec![version(1, None, None), version(3, None, None), version(2, None, None)],
    );
    let numbers = history.versions().iter().map(|v| v.version).collect::<Vec<_>>();
    assert_eq!(numbers, vec![3, 2, 1]);
    assert_eq!(history.heading(), "OSI 7계층 - 버전 이력");
}

#[test]
fn empty_history_is_reported() {
    let history = VersionHistory::new(topic(), Vec::new());
    assert!(history.is_empty());
    assert!(history.select(1).is_none());
}

#[test]
fn select_builds_comparison_panes() {
    let history = VersionHistory::new(topic(), vec![version(2, Some("OSI"), None)]);
    let cmp = history.select(2).unwrap();
    assert_eq!(cmp.heading(), "OSI 7계층 - 버전 2 비교");
    assert_eq!(cmp.version_pane(), EMPTY_CONTENT);
    assert_eq!(cmp.current_pane(), "<p>현재</p>");
    assert!(history.select(7).is_none());
}

#[test]
fn diff_reports_binary_changes() {
    let diff = diff(&version(1, Some("OSI"), Some("<p>현재</p>")), &topic());
    assert_eq!(
        diff.title,
        FieldDiff::Changed { before: "OSI".to_owned(), after: "OSI 7계층".to_owned() }
    );
    assert_eq!(diff.category, FieldDiff::Unchanged);
    assert_eq!(diff.content, FieldDiff::Unchanged);
    assert_eq!(
        diff.summary_lines(),
        vec![
            "제목: \"OSI\" → \"OSI 7계층\"".to_owned(),
            "카테고리: 변경 없음".to_owned(),
            "내용: 변경 없음".to_owned(),
        ]
    );
}

#[test]
fn diff_of_missing_snapshot_fields_counts_as_changed() {
    let diff = diff(&version(1, None, Some("<p>이전</p>")), &topic());
    assert!(diff.title.is_changed());
    assert_eq!(diff.summary_lines()[0], "제목: \"없음\" → \"OSI 7계층\"");
    assert_eq!(diff.summary_lines()[2], "내용: 변경됨");
}

#[test]
fn restore_request_carries_snapshot_and_reason() {
    let update = restore_request(&version(2, Some("OSI"), Some("<p>이전</p>")));
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({
            "title": "OSI",
            "category": "네트워크",
            "content": "<p>이전</p>",
            "change_reason": "버전 2 복원"
        })
    );
}

#[test]
fn restore_request_omits_missing_fields() {
    let update = restore_request(&version(4, None, None));
    assert!(update.title.is_none());
    assert!(update.content.is_none());
    assert!(update.keywords.is_empty());
}

#[test]
fn confirmation_texts_name_the_version() {
    let history = VersionHistory::new(topic(), vec![version(5, None, None)]);
    let cmp = history.select(5).unwrap();
    assert_eq!(cmp.confirm_prompt(), "버전 5으로 복원하시겠습니까? 현재 내용이 덮어쓰여집니다.");
    assert_eq!(cmp.restored_message(), "버전 5으로 복원되었습니다.");
}
