//! Templates page: list with category filter, preview, create/edit, delete.

use desk::guard::SubmitGuard;
use desk::notify::{Failure, Notice, text};
use leptos::prelude::*;
use schema::{Id, Template, TemplateCreate, TemplateUpdate};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::notice_toast::notify;
use crate::components::rich_text::RichTextEditor;
use crate::net::api;
use crate::state::notice::NoticeState;
use crate::state::templates::{TemplateForm, TemplatesState, create_key, delete_key, update_key};
use crate::util::submit;

fn refresh(templates: RwSignal<TemplatesState>, notices: RwSignal<NoticeState>) {
    let filter = templates.with_untracked(TemplatesState::filter);
    templates.update(|t| t.loading = true);
    leptos::task::spawn_local(async move {
        match api::fetch_templates(filter).await {
            Ok(items) => templates.update(|t| t.replace_items(items)),
            Err(failure) => {
                templates.update(|t| t.loading = false);
                notify(notices, Notice::from_failure(&failure, text::TEMPLATES_LOAD_FAILED));
            }
        }
    });
}

#[component]
pub fn TemplatesPage() -> impl IntoView {
    let templates = expect_context::<RwSignal<TemplatesState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let guard = expect_context::<RwSignal<SubmitGuard>>();

    Effect::new(move |_| refresh(templates, notices));

    let confirm_delete = Callback::new(move |()| {
        let Some(id) = templates.get_untracked().pending_delete else {
            return;
        };
        templates.update(|t| t.pending_delete = None);
        let Some(ticket) = submit::acquire(guard, notices, delete_key(id)) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::delete_template(id).await {
                Ok(()) => {
                    notify(notices, Notice::success(text::TEMPLATE_DELETED));
                    refresh(templates, notices);
                }
                Err(failure) => notify(notices, Notice::from_failure(&failure, text::TEMPLATE_DELETE_FAILED)),
            }
            submit::release(guard, ticket);
        });
    });

    view! {
        <div class="page templates-page">
            <header class="page__header">
                <h1>"템플릿 관리"</h1>
                <button
                    class="btn btn--primary"
                    on:click=move |_| templates.update(|t| t.form = Some(TemplateForm::default()))
                >
                    "+ 새 템플릿"
                </button>
            </header>
            <div class="search-bar">
                <input
                    class="search-bar__input"
                    type="text"
                    placeholder="카테고리로 필터"
                    prop:value=move || templates.with(|t| t.category_filter.clone())
                    on:input=move |ev| templates.update(|t| t.category_filter = event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            refresh(templates, notices);
                        }
                    }
                />
                <button class="btn" on:click=move |_| refresh(templates, notices)>
                    "적용"
                </button>
            </div>
            <Show when=move || !templates.with(|t| t.loading) fallback=|| view! { <p>"불러오는 중..."</p> }>
                <table class="table templates-table">
                    <thead>
                        <tr>
                            <th>"이름"</th>
                            <th>"카테고리"</th>
                            <th>"설명"</th>
                            <th>"수정일"</th>
                            <th>"작업"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            templates
                                .get()
                                .items
                                .into_iter()
                                .map(|template| template_row(template, templates))
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
                <Show when=move || templates.with(|t| t.items.is_empty())>
                    <p class="page__empty">"템플릿이 없습니다."</p>
                </Show>
            </Show>
            <Show when=move || templates.with(|t| t.preview.is_some())>
                <TemplatePreview/>
            </Show>
            <Show when=move || templates.with(|t| t.form.is_some())>
                <TemplateDialog on_saved=Callback::new(move |()| refresh(templates, notices))/>
            </Show>
            <Show when=move || templates.with(|t| t.pending_delete.is_some())>
                <ConfirmDialog
                    title="템플릿 삭제"
                    message=Signal::derive(|| "정말 삭제하시겠습니까?".to_owned())
                    confirm_label="삭제"
                    danger=true
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |()| templates.update(|t| t.pending_delete = None))
                />
            </Show>
        </div>
    }
}

fn template_row(template: Template, templates: RwSignal<TemplatesState>) -> impl IntoView {
    let id: Id = template.id;
    let updated = template
        .updated_at
        .as_deref()
        .or(template.created_at.as_deref())
        .map_or_else(|| "-".to_owned(), desk::format::display_date);
    let category = desk::format::display_text(template.category.as_deref());
    let description = desk::format::display_text(template.description.as_deref());
    let name = template.name.clone();
    let for_preview = template.clone();

    view! {
        <tr>
            <td>{name}</td>
            <td>{category}</td>
            <td>{description}</td>
            <td>{updated}</td>
            <td class="table__actions">
                <button class="btn" on:click=move |_| templates.update(|t| t.preview = Some(for_preview.clone()))>
                    "미리보기"
                </button>
                <button class="btn" on:click=move |_| templates.update(|t| t.form = Some(TemplateForm::edit(&template)))>
                    "수정"
                </button>
                <button class="btn btn--danger" on:click=move |_| templates.update(|t| t.pending_delete = Some(id))>
                    "삭제"
                </button>
            </td>
        </tr>
    }
}

/// Read-only render of a template's markup.
#[component]
fn TemplatePreview() -> impl IntoView {
    let templates = expect_context::<RwSignal<TemplatesState>>();
    let close = move || templates.update(|t| t.preview = None);
    let preview = move || templates.with(|t| t.preview.clone());

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || preview().map(|t| t.name).unwrap_or_default()}</h2>
                <div class="content-view" inner_html=move || preview().map(|t| t.content).unwrap_or_default()></div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close()>
                        "닫기"
                    </button>
                </div>
            </div>
        </div>
    }
}

enum Sent {
    Create(TemplateCreate),
    Update(Id, TemplateUpdate),
}

#[component]
fn TemplateDialog(on_saved: Callback<()>) -> impl IntoView {
    let templates = expect_context::<RwSignal<TemplatesState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let guard = expect_context::<RwSignal<SubmitGuard>>();
    let document = RwSignal::new(
        templates.with_untracked(|t| t.form.as_ref().map(|f| f.document.clone()).unwrap_or_default()),
    );

    let form = move || templates.with(|t| t.form.clone());
    let cancel = move || templates.update(|t| t.form = None);
    let set_field = move |apply: &dyn Fn(&mut TemplateForm)| {
        templates.update(|t| {
            if let Some(form) = t.form.as_mut() {
                apply(form);
            }
        });
    };

    let save = move || {
        let Some(mut current) = templates.get_untracked().form else {
            return;
        };
        current.document = document.get_untracked();
        let sent = match current.id {
            None => current
                .to_create()
                .map(|payload| (create_key(&payload), text::TEMPLATE_CREATED, Sent::Create(payload))),
            Some(id) => current
                .to_update()
                .map(|payload| (update_key(id, &payload), text::TEMPLATE_UPDATED, Sent::Update(id, payload))),
        };
        let (key, success, request) = match sent {
            Ok(sent) => sent,
            Err(failure) => {
                notify(notices, Notice::from_failure(&failure, text::TEMPLATE_SAVE_FAILED));
                return;
            }
        };
        let Some(ticket) = submit::acquire(guard, notices, key) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let outcome: Result<(), Failure> = match request {
                Sent::Create(payload) => api::create_template(payload).await.map(|_| ()),
                Sent::Update(id, payload) => api::update_template(id, payload).await.map(|_| ()),
            };
            match outcome {
                Ok(()) => {
                    templates.update(|t| t.form = None);
                    notify(notices, Notice::success(success));
                    on_saved.run(());
                }
                Err(failure) => notify(notices, Notice::from_failure(&failure, text::TEMPLATE_SAVE_FAILED)),
            }
            submit::release(guard, ticket);
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| cancel()>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || form().map(|f| f.heading()).unwrap_or_default()}</h2>
                <label class="dialog__label">
                    "이름"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form().map(|f| f.name).unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_field(&|f| f.name.clone_from(&value));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "카테고리"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form().map(|f| f.category).unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_field(&|f| f.category.clone_from(&value));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "설명"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form().map(|f| f.description).unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_field(&|f| f.description.clone_from(&value));
                        }
                    />
                </label>
                <div class="dialog__label">
                    "내용"
                    <RichTextEditor document=document placeholder="템플릿 내용을 입력하세요"/>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| cancel()>
                        "취소"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| save()>
                        "저장"
                    </button>
                </div>
            </div>
        </div>
    }
}
