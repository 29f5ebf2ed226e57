//! Topics page: search, list, detail, create/edit, history, delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every mutation is followed by a full list re-fetch. A blank search query
//! reloads the unfiltered list. Categories and templates are fetched once on
//! mount to feed the editor's pickers.

use desk::guard::{SubmitGuard, SubmitKey};
use desk::notify::{Notice, text};
use desk::session::TopicEditSession;
use desk::tree::{CategoryArena, ParentOption};
use leptos::prelude::*;
use schema::{Id, Template, Topic, TopicSearchType};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::notice_toast::notify;
use crate::components::topic_editor::TopicEditor;
use crate::components::version_history::{VersionHistory, reload_history};
use crate::net::api;
use crate::state::notice::NoticeState;
use crate::state::topics::{TopicsState, keyword_preview};
use crate::util::submit;

/// Re-fetch the list, honoring the current search.
fn refresh(topics: RwSignal<TopicsState>, notices: RwSignal<NoticeState>) {
    let target = topics.with_untracked(TopicsState::search_target);
    topics.update(|t| t.loading = true);
    leptos::task::spawn_local(async move {
        let (result, fallback) = match target {
            Some((query, search_type)) => (api::search_topics(query, search_type).await, text::SEARCH_FAILED),
            None => (api::fetch_topics(None).await, text::TOPICS_LOAD_FAILED),
        };
        match result {
            Ok(items) => topics.update(|t| t.replace_items(items)),
            Err(failure) => {
                topics.update(|t| t.loading = false);
                notify(notices, Notice::from_failure(&failure, fallback));
            }
        }
    });
}

#[component]
pub fn TopicsPage() -> impl IntoView {
    let topics = expect_context::<RwSignal<TopicsState>>();
    let session = expect_context::<RwSignal<TopicEditSession>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let guard = expect_context::<RwSignal<SubmitGuard>>();
    let category_options = RwSignal::new(Vec::<ParentOption>::new());
    let templates = RwSignal::new(Vec::<Template>::new());

    Effect::new(move |_| {
        refresh(topics, notices);
        leptos::task::spawn_local(async move {
            let (categories, loaded_templates) = futures::join!(api::fetch_categories(), api::fetch_templates(None));
            match categories {
                Ok(flat) => category_options.set(CategoryArena::from_flat(flat).parent_options(None)),
                Err(failure) => notify(notices, Notice::from_failure(&failure, text::CATEGORIES_LOAD_FAILED)),
            }
            match loaded_templates {
                Ok(items) => templates.set(items),
                Err(failure) => notify(notices, Notice::from_failure(&failure, text::TEMPLATES_LOAD_FAILED)),
            }
        });
    });

    let on_search = move || refresh(topics, notices);
    let on_reset = move |_| {
        topics.update(|t| t.query.clear());
        refresh(topics, notices);
    };

    let open_detail = move |id: Id| {
        leptos::task::spawn_local(async move {
            match api::fetch_topic(id).await {
                Ok(topic) => topics.update(|t| t.detail = Some(topic)),
                Err(failure) => notify(notices, Notice::from_failure(&failure, text::TOPIC_LOAD_FAILED)),
            }
        });
    };
    let open_edit = move |id: Id| {
        leptos::task::spawn_local(async move {
            match api::fetch_topic(id).await {
                Ok(topic) => session.update(|s| s.open_edit(&topic)),
                Err(failure) => notify(notices, Notice::from_failure(&failure, text::TOPIC_LOAD_FAILED)),
            }
        });
    };
    let open_history = move |id: Id| {
        leptos::task::spawn_local(reload_history(topics, notices, id));
    };

    let confirm_delete = Callback::new(move |()| {
        let Some(id) = topics.get_untracked().pending_delete else {
            return;
        };
        topics.update(|t| t.pending_delete = None);
        let Some(ticket) = submit::acquire(guard, notices, SubmitKey::bare(format!("topic:{id}:delete"))) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::delete_topic(id).await {
                Ok(()) => {
                    notify(notices, Notice::success(text::TOPIC_DELETED));
                    refresh(topics, notices);
                }
                Err(failure) => notify(notices, Notice::from_failure(&failure, text::TOPIC_DELETE_FAILED)),
            }
            submit::release(guard, ticket);
        });
    });

    let on_saved = Callback::new(move |()| refresh(topics, notices));

    view! {
        <div class="page topics-page">
            <header class="page__header">
                <h1>"토픽 관리"</h1>
                <span class="page__count">{move || topics.with(TopicsState::total_label)}</span>
                <button class="btn btn--primary" on:click=move |_| session.update(TopicEditSession::open_create)>
                    "+ 새 토픽"
                </button>
            </header>

            <div class="search-bar">
                <select
                    class="search-bar__type"
                    prop:value=move || topics.with(|t| t.search_type.as_str())
                    on:change=move |ev| {
                        if let Some(kind) = TopicSearchType::parse(&event_target_value(&ev)) {
                            topics.update(|t| t.search_type = kind);
                        }
                    }
                >
                    {TopicSearchType::ALL
                        .into_iter()
                        .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <input
                    class="search-bar__input"
                    type="search"
                    placeholder="검색어를 입력하세요"
                    prop:value=move || topics.with(|t| t.query.clone())
                    on:input=move |ev| topics.update(|t| t.query = event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            on_search();
                        }
                    }
                />
                <button class="btn btn--primary" on:click=move |_| on_search()>
                    "검색"
                </button>
                <button class="btn" on:click=on_reset>
                    "초기화"
                </button>
            </div>

            <Show when=move || !topics.with(|t| t.loading) fallback=|| view! { <p>"불러오는 중..."</p> }>
                <table class="table topics-table">
                    <thead>
                        <tr>
                            <th>"제목"</th>
                            <th>"카테고리"</th>
                            <th>"키워드"</th>
                            <th>"수정일"</th>
                            <th>"작업"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            topics
                                .get()
                                .items
                                .into_iter()
                                .map(|topic| topic_row(topic, open_detail, open_edit, open_history, topics))
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
                <Show when=move || topics.with(|t| t.items.is_empty())>
                    <p class="page__empty">"토픽이 없습니다."</p>
                </Show>
            </Show>

            <Show when=move || topics.with(|t| t.detail.is_some())>
                <TopicDetail/>
            </Show>
            <Show when=move || session.with(TopicEditSession::is_open)>
                <TopicEditor categories=category_options templates=templates on_saved=on_saved/>
            </Show>
            <Show when=move || topics.with(|t| t.history.is_some())>
                <VersionHistory on_restored=on_saved/>
            </Show>
            <Show when=move || topics.with(|t| t.pending_delete.is_some())>
                <ConfirmDialog
                    title="토픽 삭제"
                    message=Signal::derive(|| "정말 삭제하시겠습니까?".to_owned())
                    confirm_label="삭제"
                    danger=true
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |()| topics.update(|t| t.pending_delete = None))
                />
            </Show>
        </div>
    }
}

fn topic_row(
    topic: Topic,
    open_detail: impl Fn(Id) + Copy + Send + Sync + 'static,
    open_edit: impl Fn(Id) + Copy + Send + Sync + 'static,
    open_history: impl Fn(Id) + Copy + Send + Sync + 'static,
    topics: RwSignal<TopicsState>,
) -> impl IntoView {
    let id = topic.id;
    let (keywords, hidden) = keyword_preview(&topic);
    let tags = keywords
        .into_iter()
        .map(|k| view! { <span class="tag">{k.to_owned()}</span> })
        .collect::<Vec<_>>();
    let more = (hidden > 0).then(|| view! { <span class="tag tag--more">{format!("+{hidden}")}</span> });
    let category = desk::format::display_text(topic.category.as_deref());
    let updated = topic
        .updated_at
        .as_deref()
        .or(topic.created_at.as_deref())
        .map(desk::format::display_date)
        .unwrap_or_else(|| "-".to_owned());

    view! {
        <tr>
            <td>
                <button class="link" on:click=move |_| open_detail(id)>
                    {topic.title}
                </button>
            </td>
            <td>{category}</td>
            <td class="tag-list">{tags}{more}</td>
            <td>{updated}</td>
            <td class="table__actions">
                <button class="btn" on:click=move |_| open_edit(id)>
                    "수정"
                </button>
                <button class="btn" on:click=move |_| open_history(id)>
                    "이력"
                </button>
                <button class="btn btn--danger" on:click=move |_| topics.update(|t| t.pending_delete = Some(id))>
                    "삭제"
                </button>
            </td>
        </tr>
    }
}

/// Read-only topic view with keywords, mnemonics, exam history, and content.
#[component]
fn TopicDetail() -> impl IntoView {
    let topics = expect_context::<RwSignal<TopicsState>>();
    let close = move || topics.update(|t| t.detail = None);

    let body = move || {
        topics.get().detail.map(|topic| {
            let keywords = topic
                .keywords
                .iter()
                .map(|k| view! { <span class="tag">{k.keyword.clone()}</span> })
                .collect::<Vec<_>>();
            let mnemonics = topic
                .mnemonics
                .iter()
                .map(|m| view! { <span class="tag tag--mnemonic" title=m.full_text.clone()>{m.mnemonic.clone()}</span> })
                .collect::<Vec<_>>();
            let histories = topic
                .exam_histories
                .iter()
                .map(|h| {
                    let score = h.score.map_or_else(|| "-".to_owned(), |s| format!("{s}점"));
                    view! {
                        <tr>
                            <td>{h.exam_round.clone()}</td>
                            <td>{h.question_number.clone()}</td>
                            <td>{score}</td>
                        </tr>
                    }
                })
                .collect::<Vec<_>>();
            let has_histories = !topic.exam_histories.is_empty();
            let created = topic.created_at.as_deref().map(desk::format::display_timestamp).unwrap_or_default();
            let updated = topic.updated_at.as_deref().map(desk::format::display_timestamp).unwrap_or_default();
            let content = topic.content.clone().filter(|c| !c.is_empty()).unwrap_or_else(|| desk::versions::EMPTY_CONTENT.to_owned());

            view! {
                <h2>{topic.title.clone()}</h2>
                <dl class="topic-detail__meta">
                    <dt>"카테고리"</dt>
                    <dd>{desk::format::display_text(topic.category.as_deref())}</dd>
                    <dt>"키워드"</dt>
                    <dd class="tag-list">{keywords}</dd>
                    <dt>"암기법"</dt>
                    <dd class="tag-list">{mnemonics}</dd>
                    <dt>"생성일"</dt>
                    <dd>{created}</dd>
                    <dt>"수정일"</dt>
                    <dd>{updated}</dd>
                </dl>
                <Show when=move || has_histories>
                    <h3>"출제 이력"</h3>
                </Show>
                <table class="table topic-detail__history">
                    <tbody>{histories}</tbody>
                </table>
                <div class="content-view" inner_html=content></div>
            }
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
