use serde_json::json;

use super::*;

// =============================================================
// Topics
// =============================================================

#[test]
fn topic_deserializes_with_missing_collections() {
    let topic: Topic = serde_json::from_value(json!({
        "id": 1,
        "title": "OSI 7계층",
        "category": null,
        "content": "<p>본문</p>"
    }))
    .unwrap();
    assert_eq!(topic.id, 1);
    assert!(topic.category.is_none());
    assert!(topic.keywords.is_empty());
    assert!(topic.mnemonics.is_empty());
    assert!(topic.exam_histories.is_empty());
}

#[test]
fn topic_content_is_carried_verbatim() {
    let markup = r#"<p style="text-align: center"><img src="data:image/png;base64,iVBORw0KGgo="></p><table><tbody><tr><td>a</td></tr></tbody></table>"#;
    let topic: Topic = serde_json::from_value(json!({
        "id": 2,
        "title": "t",
        "content": markup,
    }))
    .unwrap();
    let back = serde_json::to_value(&topic).unwrap();
    assert_eq!(back["content"], markup);
}

#[test]
fn topic_update_skips_absent_fields() {
    let update = TopicUpdate {
        title: Some("새 제목".to_owned()),
        ..TopicUpdate::default()
    };
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value, json!({ "title": "새 제목" }));
}

#[test]
fn keyword_texts_preserve_order() {
    let topic: Topic = serde_json::from_value(json!({
        "id": 3,
        "title": "t",
        "keywords": [
            { "id": 1, "keyword": "TCP", "topic_id": 3 },
            { "id": 2, "keyword": "UDP", "topic_id": 3 }
        ]
    }))
    .unwrap();
    assert_eq!(topic.keyword_texts(), vec!["TCP".to_owned(), "UDP".to_owned()]);
}

#[test]
fn search_type_parse_and_labels() {
    assert_eq!(TopicSearchType::parse("mnemonic"), Some(TopicSearchType::Mnemonic));
    assert_eq!(TopicSearchType::parse("MNEMONIC"), None);
    assert_eq!(TopicSearchType::default(), TopicSearchType::All);
    assert_eq!(TopicSearchType::Title.label(), "제목");
    assert_eq!(serde_json::to_string(&TopicSearchType::Keyword).unwrap(), "\"keyword\"");
}

#[test]
fn topic_version_without_title_snapshot() {
    let version: TopicVersion = serde_json::from_value(json!({
        "id": 10,
        "topic_id": 1,
        "version": 2,
        "content": "<p>old</p>",
        "changed_by": "admin",
        "change_reason": "Content update",
        "created_at": "2024-09-01T10:00:00"
    }))
    .unwrap();
    assert!(version.title.is_none());
    assert_eq!(version.content.as_deref(), Some("<p>old</p>"));
}

// =============================================================
// Categories, exams, homework
// =============================================================

#[test]
fn category_tree_children_roundtrip() {
    let value = json!({
        "id": 1,
        "name": "네트워크",
        "description": null,
        "parent_id": null,
        "children": [
            { "id": 2, "name": "TCP/IP", "description": null, "parent_id": 1, "children": [] }
        ]
    });
    let category: Category = serde_json::from_value(value).unwrap();
    assert_eq!(category.children.len(), 1);
    assert_eq!(category.children[0].parent_id, Some(1));
    assert!(category.children[0].children.is_empty());
}

#[test]
fn question_type_is_snake_case() {
    assert_eq!(serde_json::to_string(&QuestionType::ShortAnswer).unwrap(), "\"short_answer\"");
    assert_eq!(serde_json::from_str::<QuestionType>("\"essay\"").unwrap(), QuestionType::Essay);
}

#[test]
fn exam_score_maps_accept_string_keys() {
    let score: ExamScore = serde_json::from_value(json!({
        "id": 1,
        "student_id": 1,
        "student_name": "김기주",
        "weekly_exam_id": 1,
        "session1_scores": { "1": 0.0, "2": 6.0 },
        "session2_scores": { "1": 13.9 },
        "session1_total": 46.7,
        "session2_total": 41.4,
        "total": 47.55
    }))
    .unwrap();
    assert_eq!(score.session1_scores.get(&2), Some(&6.0));
}

#[test]
fn session_questions_filter_and_order() {
    let exam: WeeklyExam = serde_json::from_value(json!({
        "id": 1,
        "week_number": 3,
        "category_id": 1,
        "created_at": "2024-09-01T00:00:00",
        "questions": [
            { "session": 2, "question_number": 1, "question_text": "서술", "question_type": "essay" },
            { "session": 1, "question_number": 2, "question_text": "b", "question_type": "short_answer" },
            { "session": 1, "question_number": 1, "question_text": "a", "question_type": "short_answer" }
        ]
    }))
    .unwrap();
    let first = exam.session_questions(1);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].question_text, "a");
    assert_eq!(exam.session_questions(2).len(), 1);
}

#[test]
fn homework_kind_wire_names() {
    assert_eq!(serde_json::to_string(&HomeworkKind::SelfTest).unwrap(), "\"selftest\"");
    assert_eq!(serde_json::to_string(&HomeworkKind::Chapter).unwrap(), "\"chapter\"");
    assert_eq!(SubmissionStatus::Late.label(), "지각제출");
}

#[test]
fn submission_stats_count_late_as_submitted() {
    let submissions: Vec<Submission> = serde_json::from_value(json!([
        { "id": "1", "homework_id": "1", "target_name": "a", "submitted_at": "2024-09-14", "status": "submitted" },
        { "id": "2", "homework_id": "1", "target_name": "b", "submitted_at": "2024-09-16", "status": "late" },
        { "id": "3", "homework_id": "1", "target_name": "c", "status": "pending" }
    ]))
    .unwrap();
    let stats = SubmissionStats::from_submissions(&submissions);
    assert_eq!(stats, SubmissionStats { total: 3, submitted: 2, pending: 1 });
    assert_eq!(stats.submitted_percent(), 67);
    assert_eq!(SubmissionStats::default().submitted_percent(), 0);
}

// =============================================================
// Error detail
// =============================================================

#[test]
fn error_detail_reads_string_detail() {
    let body = r#"{"detail":"Cannot delete category with children"}"#;
    assert_eq!(error_detail(body).as_deref(), Some("Cannot delete category with children"));
}

#[test]
fn error_detail_joins_validation_messages() {
    let body = r#"{"detail":[{"loc":["body","title"],"msg":"field required"},{"msg":"bad"}]}"#;
    assert_eq!(error_detail(body).as_deref(), Some("field required; bad"));
}

#[test]
fn error_detail_ignores_other_bodies() {
    assert!(error_detail("Internal Server Error").is_none());
    assert!(error_detail(r#"{"detail":"  "}"#).is_none());
    assert!(error_detail(r#"{"message":"x"}"#).is_none());
}
