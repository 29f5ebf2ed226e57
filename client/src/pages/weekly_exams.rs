//! Weekly exams page: cards, create form, question detail and score table.

use desk::exams::{ExamCard, ExamDraft, SESSION1_SLOTS, SESSION2_SLOTS};
use desk::guard::SubmitGuard;
use desk::notify::{Failure, Notice, text};
use desk::scores::{self, SortKey};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use schema::{ExamScore, WeeklyExam};

use crate::components::notice_toast::notify;
use crate::net::api;
use crate::state::notice::NoticeState;
use crate::state::weekly_exams::{WeeklyExamsState, create_key, score_columns};
use crate::util::submit;

fn refresh(exams: RwSignal<WeeklyExamsState>, notices: RwSignal<NoticeState>) {
    exams.update(|e| e.loading = true);
    leptos::task::spawn_local(async move {
        let (listed, categories) = futures::join!(api::fetch_weekly_exams(), api::fetch_categories());
        match listed {
            Ok(items) => exams.update(|e| e.replace_exams(items)),
            Err(failure) => {
                exams.update(|e| e.loading = false);
                notify(notices, Notice::from_failure(&failure, text::EXAMS_LOAD_FAILED));
            }
        }
        match categories {
            Ok(categories) => exams.update(|e| e.categories = categories),
            Err(failure) => notify(notices, Notice::from_failure(&failure, text::CATEGORIES_LOAD_FAILED)),
        }
    });
}

#[component]
pub fn WeeklyExamsPage() -> impl IntoView {
    let exams = expect_context::<RwSignal<WeeklyExamsState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    Effect::new(move |_| refresh(exams, notices));

    view! {
        <div class="page exams-page">
            <header class="page__header">
                <h1>"주간모의고사"</h1>
                <button
                    class="btn btn--primary"
                    on:click=move |_| exams.update(|e| e.draft = Some(ExamDraft::default()))
                >
                    "+ 모의고사 생성"
                </button>
            </header>
            <Show when=move || !exams.with(|e| e.loading) fallback=|| view! { <p>"불러오는 중..."</p> }>
                <div class="exam-grid">
                    {move || exams.with(WeeklyExamsState::cards).into_iter().map(|card| exam_card(card, exams)).collect::<Vec<_>>()}
                </div>
                <Show when=move || exams.with(|e| e.exams.is_empty())>
                    <p class="page__empty">"등록된 모의고사가 없습니다."</p>
                </Show>
            </Show>
            <Show when=move || exams.with(|e| e.selected().is_some())>
                <ExamDetail/>
            </Show>
            <Show when=move || exams.with(|e| e.draft.is_some())>
                <ExamForm on_saved=Callback::new(move |()| refresh(exams, notices))/>
            </Show>
        </div>
    }
}

fn exam_card(card: ExamCard, exams: RwSignal<WeeklyExamsState>) -> impl IntoView {
    let id = card.id;
    view! {
        <div class="card exam-card" on:click=move |_| exams.update(|e| e.open_detail(id))>
            <h3>{card.title}</h3>
            <p class="exam-card__category">{card.category}</p>
            <p class="exam-card__meta">{format!("{}문항 · 등록일 {}", card.question_count, card.registered)}</p>
        </div>
    }
}

fn question_list(exam: &WeeklyExam, session: u8) -> impl IntoView + use<> {
    let items = exam
        .session_questions(session)
        .into_iter()
        .map(|q| {
            view! {
                <li>
                    <span class="question__number">{format!("{}.", q.question_number)}</span>
                    <span class="question__text">{q.question_text.clone()}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();
    let empty = items.is_empty();
    view! {
        <section class="exam-session">
            <h3>{format!("{session}교시")}</h3>
            <ol class="exam-session__questions">{items}</ol>
            <Show when=move || empty>
                <p class="page__empty">"문항이 없습니다."</p>
            </Show>
        </section>
    }
}

fn sort_header(label: String, key: SortKey, exams: RwSignal<WeeklyExamsState>) -> impl IntoView {
    view! {
        <th class="sortable" on:click=move |_| exams.update(|e| e.click_sort(key))>
            {label}
            " "
            <span class="sortable__indicator">{move || exams.with(|e| e.sort.indicator(key))}</span>
        </th>
    }
}

fn score_row(score: &ExamScore, session1: &[u32], session2: &[u32]) -> impl IntoView + use<> {
    let cells = session1
        .iter()
        .map(|n| scores::question(score, 1, *n))
        .chain(std::iter::once(score.session1_total))
        .chain(session2.iter().map(|n| scores::question(score, 2, *n)))
        .chain([score.session2_total, score.total])
        .map(|value| view! { <td class="score">{value.to_string()}</td> })
        .collect::<Vec<_>>();
    view! {
        <tr>
            <td>{score.student_name.clone()}</td>
            {cells}
        </tr>
    }
}

#[component]
fn ExamDetail() -> impl IntoView {
    let exams = expect_context::<RwSignal<WeeklyExamsState>>();
    let close = move || exams.update(|e| e.detail = None);

    let body = move || {
        let exam = exams.with(|e| e.selected().cloned())?;
        let session1 = score_columns(&exam, 1);
        let session2 = score_columns(&exam, 2);

        let mut headers = vec![sort_header("이름".to_owned(), SortKey::Name, exams).into_any()];
        headers.extend(session1.iter().map(|n| sort_header(format!("1-{n}"), SortKey::Session1(*n), exams).into_any()));
        headers.push(sort_header("1교시 합계".to_owned(), SortKey::Session1Total, exams).into_any());
        headers.extend(session2.iter().map(|n| sort_header(format!("2-{n}"), SortKey::Session2(*n), exams).into_any()));
        headers.push(sort_header("2교시 합계".to_owned(), SortKey::Session2Total, exams).into_any());
        headers.push(sort_header("총점".to_owned(), SortKey::Total, exams).into_any());

        let rows = move || {
            exams.with(|e| {
                e.score_rows()
                    .into_iter()
                    .map(|score| score_row(score, &session1, &session2))
                    .collect::<Vec<_>>()
            })
        };
        let title = format!("{}주차 모의고사", exam.week_number);

        Some(view! {
            <h2>{title}</h2>
            <div class="exam-detail__sessions">
                {question_list(&exam, 1)}
                {question_list(&exam, 2)}
            </div>
            <h3>"성적"</h3>
            <div class="table-scroll">
                <table class="table scores-table">
                    <thead>
                        <tr>{headers}</tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        })
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                {body}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close()>
                        "닫기"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn slot_inputs(session: u8, slots: usize, exams: RwSignal<WeeklyExamsState>) -> impl IntoView {
    let inputs = (0..slots)
        .map(|index| {
            let value = move || {
                exams.with(|e| {
                    e.draft
                        .as_ref()
                        .and_then(|d| if session == 1 { d.session1.get(index) } else { d.session2.get(index) })
                        .cloned()
                        .unwrap_or_default()
                })
            };
            view! {
                <label class="exam-slot">
                    <span class="exam-slot__number">{format!("{}.", index + 1)}</span>
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=value
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            exams.update(|e| {
                                if let Some(slot) = e.draft.as_mut().and_then(|d| d.slot_mut(session, index)) {
                                    *slot = text;
                                }
                            });
                        }
                    />
                </label>
            }
        })
        .collect::<Vec<_>>();
    view! {
        <fieldset class="exam-form__session">
            <legend>{format!("{session}교시")}</legend>
            {inputs}
        </fieldset>
    }
}

#[component]
fn ExamForm(on_saved: Callback<()>) -> impl IntoView {
    let exams = expect_context::<RwSignal<WeeklyExamsState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let guard = expect_context::<RwSignal<SubmitGuard>>();

    let cancel = move || exams.update(|e| e.draft = None);

    let save = move || {
        let Some(draft) = exams.get_untracked().draft else {
            return;
        };
        let payload = match draft.to_create() {
            Ok(payload) => payload,
            Err(err) => {
                notify(notices, Notice::warning(err.to_string()));
                return;
            }
        };
        let Some(ticket) = submit::acquire(guard, notices, create_key(&payload)) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let outcome: Result<(), Failure> = api::create_weekly_exam(payload).await.map(|_| ());
            match outcome {
                Ok(()) => {
                    exams.update(|e| e.draft = None);
                    notify(notices, Notice::success(text::EXAM_CREATED));
                    on_saved.run(());
                }
                Err(failure) => notify(notices, Notice::from_failure(&failure, text::EXAM_CREATE_FAILED)),
            }
            submit::release(guard, ticket);
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| cancel()>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"주간모의고사 생성"</h2>
                <label class="dialog__label">
                    "주차"
                    <input
                        class="dialog__input"
                        type="number"
                        min="1"
                        prop:value=move || {
                            exams.with(|e| {
                                e.draft.as_ref().filter(|d| d.week_number > 0).map(|d| d.week_number.to_string())
                            })
                            .unwrap_or_default()
                        }
                        on:input=move |ev| {
                            let week = event_target_value(&ev).trim().parse::<u32>().unwrap_or(0);
                            exams.update(|e| {
                                if let Some(draft) = e.draft.as_mut() {
                                    draft.week_number = week;
                                }
                            });
                        }
                    />
                </label>
                <label class="dialog__label">
                    "카테고리"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            let category = event_target_value(&ev).parse().ok();
                            exams.update(|e| {
                                if let Some(draft) = e.draft.as_mut() {
                                    draft.category_id = category;
                                }
                            });
                        }
                    >
                        <option value="">"카테고리 선택"</option>
                        {move || {
                            exams
                                .with(|e| e.categories.clone())
                                .into_iter()
                                .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                {slot_inputs(1, SESSION1_SLOTS, exams)}
                {slot_inputs(2, SESSION2_SLOTS, exams)}
                <p class="exam-form__filled">
                    {move || format!("입력된 문항 {}개", exams.with(|e| e.draft.as_ref().map_or(0, ExamDraft::filled)))}
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| cancel()>
                        "취소"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| save()>
                        "생성"
                    </button>
                </div>
            </div>
        </div>
    }
}
