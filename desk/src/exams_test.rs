use serde_json::json;

use super::*;

fn filled_draft() -> ExamDraft {
    let mut draft = ExamDraft { week_number: 3, category_id: Some(7), ..ExamDraft::default() };
    *draft.slot_mut(1, 0).unwrap() = "OSI 7계층".to_owned();
    *draft.slot_mut(1, 4).unwrap() = "TCP 3-way handshake".to_owned();
    *draft.slot_mut(1, 12).unwrap() = "   ".to_owned();
    *draft.slot_mut(2, 2).unwrap() = "라우팅 프로토콜 비교".to_owned();
    draft
}

#[test]
fn default_draft_has_fixed_slots() {
    let draft = ExamDraft::default();
    assert_eq!(draft.session1.len(), 13);
    assert_eq!(draft.session2.len(), 6);
    assert_eq!(draft.filled(), 0);
}

#[test]
fn slot_mut_rejects_unknown_session_and_index() {
    let mut draft = ExamDraft::default();
    assert!(draft.slot_mut(3, 0).is_none());
    assert!(draft.slot_mut(2, 6).is_none());
}

#[test]
fn to_create_drops_blanks_and_renumbers() {
    let create = filled_draft().to_create().unwrap();
    assert_eq!(create.week_number, 3);
    assert_eq!(create.category_id, 7);

    let summary = create
        .questions
        .iter()
        .map(|q| (q.session, q.question_number, q.question_type))
        .collect::<Vec<_>>();
    assert_eq!(
        summary,
        vec![
            (1, 1, QuestionType::ShortAnswer),
            (1, 2, QuestionType::ShortAnswer),
            (2, 1, QuestionType::Essay),
        ]
    );
    assert_eq!(create.questions[1].question_text, "TCP 3-way handshake");
}

#[test]
fn to_create_requires_week_and_category() {
    let mut draft = filled_draft();
    draft.week_number = 0;
    assert_eq!(draft.to_create(), Err(DraftError::WeekRequired));

    let mut draft = filled_draft();
    draft.category_id = None;
    assert_eq!(draft.to_create(), Err(DraftError::CategoryRequired));
}

#[test]
fn payload_serializes_for_the_backend() {
    let value = serde_json::to_value(filled_draft().to_create().unwrap()).unwrap();
    assert_eq!(
        value["questions"][2],
        json!({
            "session": 2,
            "question_number": 1,
            "question_text": "라우팅 프로토콜 비교",
            "question_type": "essay"
        })
    );
}

#[test]
fn card_summarizes_exam() {
    let exam: WeeklyExam = serde_json::from_value(json!({
        "id": 4,
        "week_number": 2,
        "category_id": 1,
        "category": { "id": 1, "name": "네트워크" },
        "questions": [
            { "session": 1, "question_number": 1, "question_text": "a", "question_type": "short_answer" }
        ],
        "created_at": "2024-09-02T09:30:00"
    }))
    .unwrap();
    let card = ExamCard::new(&exam);
    assert_eq!(card.title, "2주차 모의고사");
    assert_eq!(card.category, "네트워크");
    assert_eq!(card.question_count, 1);
    assert_eq!(card.registered, "2024-09-02");
}

#[test]
fn by_week_desc_orders_latest_first() {
    let exams: Vec<WeeklyExam> = serde_json::from_value(json!([
        { "id": 1, "week_number": 1, "category_id": 1, "created_at": "" },
        { "id": 2, "week_number": 3, "category_id": 1, "created_at": "" },
        { "id": 3, "week_number": 2, "category_id": 1, "created_at": "" }
    ]))
    .unwrap();
    let weeks = by_week_desc(&exams).iter().map(|e| e.week_number).collect::<Vec<_>>();
    assert_eq!(weeks, vec![3, 2, 1]);
}
