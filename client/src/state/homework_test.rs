use schema::SubmissionStatus;

use super::*;

#[test]
fn tabs_filter_sample_assignments() {
    let mut state = HomeworkState::default();
    assert_eq!(state.tab, HomeworkKind::Chapter);
    assert_eq!(state.visible().len(), 1);
    state.tab = HomeworkKind::SelfTest;
    assert_eq!(state.visible()[0].id, "2");
}

#[test]
fn detail_lists_its_submissions() {
    let mut state = HomeworkState { detail: Some("1".to_owned()), ..HomeworkState::default() };
    assert_eq!(state.selected().map(|h| h.title.is_empty()), Some(false));
    let subs = state.selected_submissions();
    assert_eq!(subs.len(), 4);
    assert!(subs.iter().all(|s| s.homework_id == "1"));
    assert_eq!(subs.iter().filter(|s| s.status == SubmissionStatus::Pending).count(), 1);

    state.detail = None;
    assert!(state.selected_submissions().is_empty());
}

#[test]
fn invalid_draft_stays_open() {
    let mut state = HomeworkState::default();
    assert_eq!(state.submit_draft(String::new()), Ok(None));
    state.open_draft();
    let err = state.submit_draft("2024-09-10T00:00:00".to_owned()).unwrap_err();
    assert_eq!(err, DraftError::TitleRequired);
    assert!(state.draft.is_some());
    assert_eq!(state.homeworks.len(), 2);
}

#[test]
fn valid_draft_is_listed_under_its_tab() {
    let mut state = HomeworkState { tab: HomeworkKind::SelfTest, ..HomeworkState::default() };
    state.open_draft();
    if let Some(draft) = state.draft.as_mut() {
        draft.title = "3장 정리".to_owned();
        draft.category = "네트워크".to_owned();
        draft.deadline = "2024-09-20".to_owned();
        draft.toggle_target("2");
    }
    let notice = state.submit_draft("2024-09-10T00:00:00".to_owned()).unwrap();
    assert_eq!(notice, Some(Notice::success(text::HOMEWORK_CREATED)));
    assert!(state.draft.is_none());
    let added = state.homeworks.last().unwrap();
    assert_eq!(added.id, "3");
    assert_eq!(added.kind, HomeworkKind::SelfTest);
    assert_eq!(added.submission_stats.pending, 1);
    assert_eq!(state.visible().len(), 2);
}
