//! Homework page: chapter and self-test tabs, submission detail, assignment form.

use desk::editor::EditorDocument;
use desk::homework::HomeworkDraft;
use desk::notify::Notice;
use leptos::prelude::*;
use schema::{Homework, HomeworkKind, Submission, SubmissionStatus};

use crate::components::notice_toast::notify;
use crate::components::rich_text::RichTextEditor;
use crate::state::homework::HomeworkState;
use crate::state::notice::NoticeState;
use crate::util::dom;

const TABS: [HomeworkKind; 2] = [HomeworkKind::Chapter, HomeworkKind::SelfTest];

fn status_class(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Submitted => "status status--submitted",
        SubmissionStatus::Late => "status status--late",
        SubmissionStatus::Pending => "status status--pending",
    }
}

#[component]
pub fn HomeworkPage() -> impl IntoView {
    let homework = expect_context::<RwSignal<HomeworkState>>();

    view! {
        <div class="page homework-page">
            <header class="page__header">
                <h1>"숙제 관리"</h1>
                <button class="btn btn--primary" on:click=move |_| homework.update(HomeworkState::open_draft)>
                    "+ 숙제 등록"
                </button>
            </header>
            <nav class="tabs">
                {TABS
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || homework.with(|h| h.tab == kind)
                                on:click=move |_| homework.update(|h| {
                                    h.tab = kind;
                                    h.detail = None;
                                })
                            >
                                {kind.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="homework-grid">
                {move || {
                    homework.with(|h| h.visible().into_iter().cloned().collect::<Vec<_>>())
                        .into_iter()
                        .map(|item| homework_card(item, homework))
                        .collect::<Vec<_>>()
                }}
            </div>
            <Show when=move || homework.with(|h| h.visible().is_empty())>
                <p class="page__empty">"등록된 숙제가 없습니다."</p>
            </Show>
            <Show when=move || homework.with(|h| h.selected().is_some())>
                <HomeworkDetail/>
            </Show>
            <Show when=move || homework.with(|h| h.draft.is_some())>
                <HomeworkForm/>
            </Show>
        </div>
    }
}

fn homework_card(item: Homework, homework: RwSignal<HomeworkState>) -> impl IntoView {
    let stats = item.submission_stats;
    let percent = stats.submitted_percent();
    let id = item.id.clone();

    view! {
        <div class="card homework-card" on:click=move |_| homework.update(|h| h.detail = Some(id.clone()))>
            <div class="homework-card__header">
                <span class="badge">{item.category.clone()}</span>
                <span class="homework-card__deadline">"마감 " {item.deadline.clone()}</span>
            </div>
            <h3>{item.title.clone()}</h3>
            <div class="progress">
                <div class="progress__bar" style=format!("width: {percent}%")></div>
            </div>
            <p class="homework-card__stats">
                {format!("제출 {} / {} ({percent}%) · 미제출 {}", stats.submitted, stats.total, stats.pending)}
            </p>
        </div>
    }
}

fn submission_row(submission: Submission) -> impl IntoView {
    let submitted_at = submission
        .submitted_at
        .as_deref()
        .map_or_else(|| "-".to_owned(), desk::format::display_timestamp);
    view! {
        <tr>
            <td>{submission.target_name}</td>
            <td>
                <span class=status_class(submission.status)>{submission.status.label()}</span>
            </td>
            <td>{submitted_at}</td>
            <td>{desk::format::display_text(submission.content.as_deref())}</td>
        </tr>
    }
}

#[component]
fn HomeworkDetail() -> impl IntoView {
    let homework = expect_context::<RwSignal<HomeworkState>>();
    let close = move || homework.update(|h| h.detail = None);
    let selected = move || homework.with(|h| h.selected().cloned());

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                {move || {
                    selected()
                        .map(|item| {
                            let targets = item.targets.iter().map(|t| t.name.clone()).collect::<Vec<_>>().join(", ");
                            view! {
                                <h2>{item.title.clone()}</h2>
                                <p class="homework-detail__meta">
                                    {format!("{} · {} · 마감 {}", item.kind.label(), item.category, item.deadline)}
                                </p>
                                <p class="homework-detail__targets">"대상자: " {targets}</p>
                                <div class="content-view" inner_html=item.content.clone()></div>
                            }
                        })
                }}
                <table class="table submissions-table">
                    <thead>
                        <tr>
                            <th>"학생"</th>
                            <th>"상태"</th>
                            <th>"제출일시"</th>
                            <th>"내용"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            homework.with(|h| h.selected_submissions().into_iter().cloned().collect::<Vec<_>>())
                                .into_iter()
                                .map(submission_row)
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close()>
                        "닫기"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn HomeworkForm() -> impl IntoView {
    let homework = expect_context::<RwSignal<HomeworkState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let document = RwSignal::new(EditorDocument::default());

    let draft = move || homework.with(|h| h.draft.clone());
    let cancel = move || homework.update(|h| h.draft = None);
    let set_field = move |apply: &dyn Fn(&mut HomeworkDraft)| {
        homework.update(|h| {
            if let Some(draft) = h.draft.as_mut() {
                apply(draft);
            }
        });
    };

    let save = move || {
        let content = document.get_untracked().serialize();
        set_field(&|d| d.content.clone_from(&content));
        let mut outcome = Ok(None);
        homework.update(|h| outcome = h.submit_draft(dom::now_iso()));
        match outcome {
            Ok(Some(notice)) => notify(notices, notice),
            Ok(None) => {}
            Err(err) => notify(notices, Notice::warning(err.to_string())),
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| cancel()>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || draft().map(|d| format!("{} 등록", d.kind.label())).unwrap_or_default()}</h2>
                <label class="dialog__label">
                    "제목"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft().map(|d| d.title).unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_field(&|d| d.title.clone_from(&value));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "카테고리"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft().map(|d| d.category).unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_field(&|d| d.category.clone_from(&value));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "유형"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            let kind = if event_target_value(&ev) == "selftest" {
                                HomeworkKind::SelfTest
                            } else {
                                HomeworkKind::Chapter
                            };
                            set_field(&|d| d.kind = kind);
                        }
                    >
                        <option value="chapter" selected=move || draft().is_some_and(|d| d.kind == HomeworkKind::Chapter)>
                            {HomeworkKind::Chapter.label()}
                        </option>
                        <option value="selftest" selected=move || draft().is_some_and(|d| d.kind == HomeworkKind::SelfTest)>
                            {HomeworkKind::SelfTest.label()}
                        </option>
                    </select>
                </label>
                <label class="dialog__label">
                    "제출기한"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || draft().map(|d| d.deadline).unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_field(&|d| d.deadline.clone_from(&value));
                        }
                    />
                </label>
                <fieldset class="dialog__label homework-targets">
                    <legend>"대상자"</legend>
                    {move || {
                        homework
                            .with(|h| h.targets.clone())
                            .into_iter()
                            .map(|target| {
                                let id = target.id.clone();
                                let checked_id = target.id.clone();
                                view! {
                                    <label class="homework-targets__item">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || {
                                                draft().is_some_and(|d| d.target_ids.contains(&checked_id))
                                            }
                                            on:change=move |_| set_field(&|d| d.toggle_target(&id))
                                        />
                                        {target.name}
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </fieldset>
                <div class="dialog__label">
                    "내용"
                    <RichTextEditor document=document placeholder="숙제 내용을 입력하세요"/>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| cancel()>
                        "취소"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| save()>
                        "등록"
                    </button>
                </div>
            </div>
        </div>
    }
}
