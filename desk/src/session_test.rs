use serde_json::json;

use super::*;
use crate::notify::Level;

fn topic() -> Topic {
    serde_json::from_value(json!({
        "id": 9,
        "title": "TCP",
        "category": "네트워크",
        "content": "<p>전송 계층</p>",
        "keywords": [{ "id": 1, "keyword": "3-way" }, { "id": 2, "keyword": "흐름제어" }],
        "mnemonics": [{ "id": 1, "mnemonic": "신흐혼", "full_text": "신뢰성 흐름 혼잡" }]
    }))
    .unwrap()
}

// =============================================================
// Form
// =============================================================

#[test]
fn keywords_are_unique_and_trimmed() {
    let mut form = TopicForm::default();
    form.add_keyword(" TCP ").unwrap();
    assert_eq!(form.add_keyword("TCP"), Err(FormError::DuplicateKeyword("TCP".to_owned())));
    assert_eq!(form.add_keyword("   "), Err(FormError::BlankKeyword));
    form.add_keyword("UDP").unwrap();
    form.remove_keyword("TCP");
    assert_eq!(form.keywords, vec!["UDP".to_owned()]);
}

#[test]
fn collected_keywords_reject_repeats_and_blanks() {
    let ok = TopicForm::collect_keywords([" TCP", "UDP "]).unwrap();
    assert_eq!(ok, vec!["TCP".to_owned(), "UDP".to_owned()]);
    assert_eq!(
        TopicForm::collect_keywords(["TCP", "TCP"]),
        Err(FormError::DuplicateKeyword("TCP".to_owned()))
    );
    assert_eq!(TopicForm::collect_keywords(["TCP", "  "]), Err(FormError::BlankKeyword));
    assert_eq!(TopicForm::collect_keywords(Vec::<&str>::new()), Ok(Vec::new()));
}

#[test]
fn mnemonic_rows_edit_in_place() {
    let mut form = TopicForm::default();
    form.add_mnemonic();
    form.add_mnemonic();
    form.set_mnemonic(1, "두음");
    form.set_full_text(1, "두 번째 음절");
    form.set_mnemonic(5, "ignored");
    form.remove_mnemonic(0);
    form.remove_mnemonic(3);
    assert_eq!(
        form.mnemonics,
        vec![MnemonicInput { mnemonic: "두음".to_owned(), full_text: "두 번째 음절".to_owned() }]
    );
}

#[test]
fn form_from_topic_snapshot() {
    let form = TopicForm::from_topic(&topic());
    assert_eq!(form.title, "TCP");
    assert_eq!(form.category, "네트워크");
    assert_eq!(form.keywords, vec!["3-way".to_owned(), "흐름제어".to_owned()]);
    assert_eq!(form.mnemonics[0].full_text, "신뢰성 흐름 혼잡");
    assert_eq!(form.document.serialize(), "<p>전송 계층</p>");
}

// =============================================================
// Session phases
// =============================================================

#[test]
fn create_flow_builds_create_request() {
    let mut session = TopicEditSession::default();
    session.open_create();
    session.form.title = "  UDP  ".to_owned();
    session.form.add_mnemonic();
    session.form.add_mnemonic();
    session.form.set_mnemonic(1, "비연결");
    session.form.document.sync("<p>데이터그램</p>");

    let SaveRequest::Create(create) = session.begin_save().unwrap() else {
        panic!("expected create");
    };
    assert_eq!(create.title, "UDP");
    assert!(create.category.is_none());
    assert_eq!(create.content.as_deref(), Some("<p>데이터그램</p>"));
    assert_eq!(create.mnemonics.len(), 1);
    assert_eq!(session.phase(), Phase::Saving(EditMode::Create));

    let notice = session.finish_save(Ok(())).unwrap();
    assert_eq!(notice, Notice::success(text::TOPIC_CREATED));
    assert_eq!(session.phase(), Phase::Closed);
    assert_eq!(session.form, TopicForm::default());
}

#[test]
fn edit_flow_builds_update_request() {
    let mut session = TopicEditSession::default();
    session.open_edit(&topic());
    assert_eq!(session.heading(), "토픽 수정");
    let SaveRequest::Update { id, update } = session.begin_save().unwrap() else {
        panic!("expected update");
    };
    assert_eq!(id, 9);
    assert_eq!(update.title.as_deref(), Some("TCP"));
    assert_eq!(update.category.as_deref(), Some("네트워크"));
    assert_eq!(update.keywords.len(), 2);
    assert!(update.change_reason.is_none());
}

#[test]
fn blank_title_keeps_session_open() {
    let mut session = TopicEditSession::default();
    session.open_create();
    session.form.title = " ".to_owned();
    assert_eq!(session.begin_save(), Err(FormError::TitleRequired));
    assert_eq!(session.phase(), Phase::Open(EditMode::Create));
}

#[test]
fn second_save_while_in_flight_is_refused() {
    let mut session = TopicEditSession::default();
    session.open_create();
    session.form.title = "a".to_owned();
    session.begin_save().unwrap();
    assert_eq!(session.begin_save(), Err(FormError::SaveInFlight));
    assert!(session.is_saving());
}

#[test]
fn save_outside_open_session_fails() {
    let mut session = TopicEditSession::default();
    assert_eq!(session.begin_save(), Err(FormError::NotOpen));
    assert!(session.finish_save(Ok(())).is_none());
}

#[test]
fn failed_save_reopens_with_values_kept() {
    let mut session = TopicEditSession::default();
    session.open_edit(&topic());
    session.form.add_keyword("혼잡제어").unwrap();
    session.begin_save().unwrap();

    let failure = Failure::rejected(404, r#"{"detail":"Topic not found"}"#);
    let notice = session.finish_save(Err(failure)).unwrap();
    assert_eq!(notice.level, Level::Error);
    assert_eq!(notice.text, "Topic not found");
    assert_eq!(session.last_error(), Some("Topic not found"));
    assert_eq!(session.phase(), Phase::Open(EditMode::Edit(9)));
    assert_eq!(session.form.keywords.len(), 3);

    let notice = {
        session.begin_save().unwrap();
        session.finish_save(Err(Failure::Transport("offline".to_owned()))).unwrap()
    };
    assert_eq!(notice.text, text::TOPIC_SAVE_FAILED);
}

#[test]
fn close_discards_everything() {
    let mut session = TopicEditSession::default();
    session.open_edit(&topic());
    session.close();
    assert!(!session.is_open());
    assert_eq!(session, TopicEditSession::default());
}
