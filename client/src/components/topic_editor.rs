//! Topic create/edit modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Driven by the shared `RwSignal<TopicEditSession>`. The rich-text surface
//! edits a local copy of the form's document, which is written back into the
//! session right before `begin_save`. While the session is `Saving` the save
//! button is disabled and a second `begin_save` is refused anyway.

use desk::notify::Notice;
use desk::session::{SaveRequest, TopicEditSession};
use desk::tree::ParentOption;
use leptos::prelude::*;
use schema::Template;

use crate::components::notice_toast::notify;
use crate::components::rich_text::RichTextEditor;
use crate::net::api;
use crate::state::categories::option_label;
use crate::state::notice::NoticeState;

#[component]
pub fn TopicEditor(
    #[prop(into)] categories: Signal<Vec<ParentOption>>,
    #[prop(into)] templates: Signal<Vec<Template>>,
    /// Runs after a successful save so the page can re-fetch.
    on_saved: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<TopicEditSession>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let document = RwSignal::new(session.get_untracked().form.document);
    let keyword_input = RwSignal::new(String::new());

    let close = move || {
        if !session.get_untracked().is_saving() {
            session.update(TopicEditSession::close);
        }
    };

    let add_keyword = move || {
        let raw = keyword_input.get_untracked();
        let mut result = Ok(());
        session.update(|s| result = s.form.add_keyword(&raw));
        match result {
            Ok(()) => keyword_input.set(String::new()),
            Err(err) => notify(notices, Notice::warning(err.to_string())),
        }
    };

    let save = move || {
        let mut begun = None;
        session.update(|s| {
            s.form.document = document.get_untracked();
            begun = Some(s.begin_save());
        });
        let request = match begun {
            Some(Ok(request)) => request,
            Some(Err(err)) => {
                notify(notices, Notice::warning(err.to_string()));
                return;
            }
            None => return,
        };
        leptos::task::spawn_local(async move {
            let outcome = match request {
                SaveRequest::Create(payload) => api::create_topic(payload).await.map(|_| ()),
                SaveRequest::Update { id, update } => api::update_topic(id, update).await.map(|_| ()),
            };
            let saved = outcome.is_ok();
            let mut notice = None;
            session.update(|s| notice = s.finish_save(outcome));
            if let Some(notice) = notice {
                notify(notices, notice);
            }
            if saved {
                on_saved.run(());
            }
        });
    };

    let mnemonic_count = move || session.with(|s| s.form.mnemonics.len());

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || session.with(TopicEditSession::heading)}</h2>
                <Show when=move || session.with(|s| s.last_error().is_some())>
                    <p class="dialog__danger">{move || session.with(|s| s.last_error().unwrap_or_default().to_owned())}</p>
                </Show>

                <label class="dialog__label">
                    "제목"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || session.with(|s| s.form.title.clone())
                        on:input=move |ev| session.update(|s| s.form.title = event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "카테고리"
                    <select
                        class="dialog__input"
                        prop:value=move || session.with(|s| s.form.category.clone())
                        on:change=move |ev| session.update(|s| s.form.category = event_target_value(&ev))
                    >
                        <option value="">"선택 안 함"</option>
                        {move || {
                            categories
                                .get()
                                .into_iter()
                                .map(|opt| {
                                    let label = option_label(&opt);
                                    view! { <option value=opt.name>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>

                <div class="dialog__label">
                    "키워드"
                    <div class="topic-editor__keyword-row">
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="키워드 입력 후 Enter"
                            prop:value=move || keyword_input.get()
                            on:input=move |ev| keyword_input.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    add_keyword();
                                }
                            }
                        />
                        <button class="btn" on:click=move |_| add_keyword()>
                            "추가"
                        </button>
                    </div>
                    <div class="tag-list">
                        {move || {
                            session
                                .get()
                                .form
                                .keywords
                                .into_iter()
                                .map(|keyword| {
                                    let remove = keyword.clone();
                                    view! {
                                        <span class="tag">
                                            {keyword}
                                            <button
                                                class="tag__remove"
                                                title="삭제"
                                                on:click=move |_| session.update(|s| s.form.remove_keyword(&remove))
                                            >
                                                "✕"
                                            </button>
                                        </span>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </div>

                <div class="dialog__label">
                    "암기법"
                    <For each=move || 0..mnemonic_count() key=|i| *i let:index>
                        <div class="topic-editor__mnemonic-row">
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="두음"
                                prop:value=move || session.with(|s| s.form.mnemonics.get(index).map(|m| m.mnemonic.clone()).unwrap_or_default())
                                on:input=move |ev| session.update(|s| s.form.set_mnemonic(index, &event_target_value(&ev)))
                            />
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="전체 문장"
                                prop:value=move || session.with(|s| s.form.mnemonics.get(index).map(|m| m.full_text.clone()).unwrap_or_default())
                                on:input=move |ev| session.update(|s| s.form.set_full_text(index, &event_target_value(&ev)))
                            />
                            <button class="btn btn--danger" on:click=move |_| session.update(|s| s.form.remove_mnemonic(index))>
                                "삭제"
                            </button>
                        </div>
                    </For>
                    <button class="btn" on:click=move |_| session.update(|s| s.form.add_mnemonic())>
                        "+ 암기법 추가"
                    </button>
                </div>

                <div class="dialog__label">
                    "내용"
                    <RichTextEditor document=document templates=templates placeholder="토픽 내용을 입력하세요"/>
                </div>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close() disabled=move || session.with(TopicEditSession::is_saving)>
                        "취소"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| save()
                        disabled=move || session.with(TopicEditSession::is_saving)
                    >
                        {move || if session.with(TopicEditSession::is_saving) { "저장 중..." } else { "저장" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
