//! Categories page: nested tree with add-child, edit, and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! The tree endpoint is the only read. The form's parent picker comes from
//! the arena and never offers the edited category or its descendants.
//! Deleting a category that still has children is refused by the backend;
//! its `detail` is shown as-is.

use desk::guard::SubmitGuard;
use desk::notify::{Failure, Notice, text};
use desk::tree::CategoryNode;
use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::notice_toast::notify;
use crate::net::api;
use crate::state::categories::{
    CategoriesState, CategoryForm, CategoryFormMode, create_key, delete_key, option_label, parse_parent, update_key,
};
use crate::state::notice::NoticeState;
use crate::util::submit;

fn refresh(categories: RwSignal<CategoriesState>, notices: RwSignal<NoticeState>) {
    categories.update(|c| c.loading = true);
    leptos::task::spawn_local(async move {
        match api::fetch_category_tree().await {
            Ok(roots) => categories.update(|c| c.replace_tree(roots)),
            Err(failure) => {
                categories.update(|c| c.loading = false);
                notify(notices, Notice::from_failure(&failure, text::CATEGORIES_LOAD_FAILED));
            }
        }
    });
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let categories = expect_context::<RwSignal<CategoriesState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let guard = expect_context::<RwSignal<SubmitGuard>>();

    Effect::new(move |_| refresh(categories, notices));

    let confirm_delete = Callback::new(move |()| {
        let Some(id) = categories.get_untracked().pending_delete else {
            return;
        };
        categories.update(|c| c.pending_delete = None);
        let Some(ticket) = submit::acquire(guard, notices, delete_key(id)) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::delete_category(id).await {
                Ok(()) => {
                    notify(notices, Notice::success(text::CATEGORY_DELETED));
                    refresh(categories, notices);
                }
                Err(failure) => notify(notices, Notice::from_failure(&failure, text::CATEGORY_DELETE_FAILED)),
            }
            submit::release(guard, ticket);
        });
    });

    let delete_prompt = Signal::derive(move || {
        categories.with(|c| {
            c.pending_delete_name()
                .map(|name| format!("'{name}' 카테고리를 삭제하시겠습니까?"))
                .unwrap_or_default()
        })
    });

    view! {
        <div class="page categories-page">
            <header class="page__header">
                <h1>"카테고리 관리"</h1>
                <button
                    class="btn btn--primary"
                    on:click=move |_| categories.update(|c| c.form = Some(CategoryForm::create(None)))
                >
                    "+ 새 카테고리"
                </button>
            </header>
            <Show when=move || !categories.with(|c| c.loading) fallback=|| view! { <p>"불러오는 중..."</p> }>
                <ul class="category-tree">
                    {move || {
                        categories
                            .with(|c| c.arena.display_tree())
                            .into_iter()
                            .map(|node| tree_node(node, categories))
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <Show when=move || categories.with(|c| c.arena.is_empty())>
                    <p class="page__empty">"카테고리가 없습니다."</p>
                </Show>
            </Show>
            <Show when=move || categories.with(|c| c.form.is_some())>
                <CategoryDialog on_saved=Callback::new(move |()| refresh(categories, notices))/>
            </Show>
            <Show when=move || categories.with(|c| c.pending_delete.is_some())>
                <ConfirmDialog
                    title="카테고리 삭제"
                    message=delete_prompt
                    confirm_label="삭제"
                    danger=true
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |()| categories.update(|c| c.pending_delete = None))
                />
            </Show>
        </div>
    }
}

fn tree_node(node: CategoryNode, categories: RwSignal<CategoriesState>) -> AnyView {
    let id = node.category.id;
    let edit_source = node.category.clone();
    let description = node.category.description.clone().unwrap_or_default();
    let children = node
        .children
        .into_iter()
        .map(|child| tree_node(child, categories))
        .collect::<Vec<_>>();
    let nested = (!children.is_empty()).then(|| view! { <ul class="category-tree__children">{children}</ul> });

    view! {
        <li class="category-tree__node">
            <div class="category-tree__row">
                <span class="category-tree__name">{node.category.name}</span>
                <span class="category-tree__description">{description}</span>
                <span class="category-tree__actions">
                    <button
                        class="btn"
                        title="하위 카테고리 추가"
                        on:click=move |_| categories.update(|c| c.form = Some(CategoryForm::create(Some(id))))
                    >
                        "+ 하위"
                    </button>
                    <button
                        class="btn"
                        on:click=move |_| categories.update(|c| c.form = Some(CategoryForm::edit(&edit_source)))
                    >
                        "수정"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| categories.update(|c| c.pending_delete = Some(id))>
                        "삭제"
                    </button>
                </span>
            </div>
            {nested}
        </li>
    }
    .into_any()
}

#[component]
fn CategoryDialog(on_saved: Callback<()>) -> impl IntoView {
    let categories = expect_context::<RwSignal<CategoriesState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let guard = expect_context::<RwSignal<SubmitGuard>>();

    let form = move || categories.with(|c| c.form.clone());
    let edit_form = move |apply: &dyn Fn(&mut CategoryForm)| {
        categories.update(|c| {
            if let Some(form) = c.form.as_mut() {
                apply(form);
            }
        });
    };
    let cancel = move || categories.update(|c| c.form = None);

    let submit_form = move || {
        let Some(current) = categories.get_untracked().form else {
            return;
        };
        let sent = match current.mode {
            CategoryFormMode::Create => current.to_create().map(|payload| {
                (create_key(&payload), text::CATEGORY_CREATED, Sent::Create(payload))
            }),
            CategoryFormMode::Edit(id) => current.to_update().map(|payload| {
                (update_key(id, &payload), text::CATEGORY_UPDATED, Sent::Update(id, payload))
            }),
        };
        let (key, success, request) = match sent {
            Ok(sent) => sent,
            Err(failure) => {
                notify(notices, Notice::from_failure(&failure, text::CATEGORY_SAVE_FAILED));
                return;
            }
        };
        let Some(ticket) = submit::acquire(guard, notices, key) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let outcome: Result<(), Failure> = match request {
                Sent::Create(payload) => api::create_category(payload).await.map(|_| ()),
                Sent::Update(id, payload) => api::update_category(id, payload).await.map(|_| ()),
            };
            match outcome {
                Ok(()) => {
                    categories.update(|c| c.form = None);
                    notify(notices, Notice::success(success));
                    on_saved.run(());
                }
                Err(failure) => notify(notices, Notice::from_failure(&failure, text::CATEGORY_SAVE_FAILED)),
            }
            submit::release(guard, ticket);
        });
    };

    let parent_options = move || {
        let editing = form().and_then(|f| f.editing());
        categories
            .with(|c| c.arena.parent_options(editing))
            .into_iter()
            .map(|opt| {
                let label = option_label(&opt);
                view! { <option value=opt.id.to_string()>{label}</option> }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| cancel()>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || form().map(|f| f.heading()).unwrap_or_default()}</h2>
                <label class="dialog__label">
                    "이름"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form().map(|f| f.name).unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit_form(&|f| f.name.clone_from(&value));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "설명"
                    <textarea
                        class="dialog__input"
                        prop:value=move || form().map(|f| f.description).unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit_form(&|f| f.description.clone_from(&value));
                        }
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "상위 카테고리"
                    <select
                        class="dialog__input"
                        prop:value=move || form().and_then(|f| f.parent_id).map(|id| id.to_string()).unwrap_or_default()
                        on:change=move |ev| {
                            let parent = parse_parent(&event_target_value(&ev));
                            edit_form(&|f| f.parent_id = parent);
                        }
                    >
                        <option value="">"최상위"</option>
                        {parent_options}
                    </select>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| cancel()>
                        "취소"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit_form()>
                        "저장"
                    </button>
                </div>
            </div>
        </div>
    }
}

enum Sent {
    Create(schema::CategoryCreate),
    Update(schema::Id, schema::CategoryUpdate),
}
