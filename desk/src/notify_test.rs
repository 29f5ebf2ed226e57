use super::*;

#[test]
fn server_detail_wins_over_fallback() {
    let failure = Failure::rejected(400, r#"{"detail":"Cannot delete category with children"}"#);
    assert_eq!(
        failure.user_message(text::CATEGORY_DELETE_FAILED),
        "Cannot delete category with children"
    );
}

#[test]
fn rejection_without_detail_uses_fallback() {
    let failure = Failure::rejected(500, "Internal Server Error");
    assert_eq!(failure, Failure::Rejected { status: 500, detail: None });
    assert_eq!(failure.user_message(text::TOPIC_SAVE_FAILED), text::TOPIC_SAVE_FAILED);
}

#[test]
fn transport_failure_uses_fallback() {
    let failure = Failure::Transport("connection refused".to_owned());
    assert_eq!(failure.user_message("실패"), "실패");
    assert_eq!(failure.error_code(), "E_TRANSPORT");
}

#[test]
fn invalid_shows_validation_text_as_warning() {
    let failure = Failure::from(DraftError::WeekRequired);
    assert_eq!(failure.user_message("x"), "주차를 입력하세요");
    let notice = Notice::from_failure(&failure, "x");
    assert_eq!(notice.level, Level::Warning);
    assert_eq!(notice.text, "주차를 입력하세요");
}

#[test]
fn not_found_has_its_own_code() {
    assert_eq!(Failure::Rejected { status: 404, detail: None }.error_code(), "E_NOT_FOUND");
    assert_eq!(Failure::Rejected { status: 422, detail: None }.error_code(), "E_REJECTED");
}

#[test]
fn notice_constructors_set_level() {
    assert_eq!(Notice::success("ok").level, Level::Success);
    assert_eq!(Notice::error("no").level.css_class(), "notice--error");
}
