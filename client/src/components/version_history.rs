//! Version history modal: list, side-by-side comparison, and restore.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `TopicsState::history`. Restoring sends the snapshot as a topic
//! update after an explicit confirmation, then re-fetches the topic and its
//! versions so the new server-side entry shows up.

use desk::guard::{SubmitGuard, SubmitKey};
use desk::notify::{Notice, text};
use desk::versions::NO_HISTORY;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use schema::Id;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::notice_toast::notify;
use crate::net::api;
use crate::state::notice::NoticeState;
use crate::state::topics::TopicsState;
use crate::util::submit;

/// Re-fetch `id` and its versions into the open history.
pub async fn reload_history(topics: RwSignal<TopicsState>, notices: RwSignal<NoticeState>, id: Id) {
    let (topic, versions) = futures::join!(api::fetch_topic(id), api::fetch_topic_versions(id));
    match (topic, versions) {
        (Ok(topic), Ok(versions)) => topics.update(|t| t.open_history(topic, versions)),
        (Err(failure), _) | (_, Err(failure)) => {
            notify(notices, Notice::from_failure(&failure, text::VERSIONS_LOAD_FAILED));
        }
    }
}

#[component]
pub fn VersionHistory(
    /// Runs after a restore so the page can refresh its list.
    on_restored: Callback<()>,
) -> impl IntoView {
    let topics = expect_context::<RwSignal<TopicsState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let guard = expect_context::<RwSignal<SubmitGuard>>();

    let close = move || topics.update(TopicsState::close_history);
    let back = move || topics.update(|t| t.selected_version = None);

    let restore = Callback::new(move |()| {
        let Some((id, update, message)) = topics.with_untracked(|t| {
            t.comparison().map(|cmp| (cmp.topic.id, cmp.restore_request(), cmp.restored_message()))
        }) else {
            return;
        };
        topics.update(|t| t.confirm_restore = false);
        let Some(ticket) = submit::acquire(guard, notices, SubmitKey::new(format!("topic:{id}:restore"), &update)) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::update_topic(id, update).await {
                Ok(_) => {
                    notify(notices, Notice::success(message));
                    reload_history(topics, notices, id).await;
                    on_restored.run(());
                }
                Err(failure) => notify(notices, Notice::from_failure(&failure, text::VERSION_RESTORE_FAILED)),
            }
            submit::release(guard, ticket);
        });
    });

    let history_list = move || {
        topics.with(|t| {
            let Some(history) = t.history.as_ref() else {
                return view! { <p></p> }.into_any();
            };
            if history.is_empty() {
                return view! { <p class="version-history__empty">{NO_HISTORY}</p> }.into_any();
            }
            let rows = history
                .versions()
                .iter()
                .map(|v| {
                    let number = v.version;
                    let created = desk::format::display_timestamp(&v.created_at);
                    view! {
                        <tr>
                            <td>{format!("v{number}")}</td>
                            <td>{v.changed_by.clone()}</td>
                            <td>{v.change_reason.clone()}</td>
                            <td>{created}</td>
                            <td>
                                <button
                                    class="btn"
                                    on:click=move |_| topics.update(|t| t.selected_version = Some(number))
                                >
                                    "비교"
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <table class="table version-history__table">
                    <thead>
                        <tr>
                            <th>"버전"</th>
                            <th>"변경자"</th>
                            <th>"변경 사유"</th>
                            <th>"변경 일시"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            }
            .into_any()
        })
    };

    let comparison = move || {
        topics.with(|t| {
            t.comparison().map(|cmp| {
                let summary = cmp
                    .diff()
                    .summary_lines()
                    .into_iter()
                    .map(|line| view! { <li>{line}</li> })
                    .collect::<Vec<_>>();
                let version_label = format!("버전 {}", cmp.version.version);
                view! {
                    <div class="version-compare">
                        <h3>{cmp.heading()}</h3>
                        <div class="version-compare__panes">
                            <section class="version-compare__pane">
                                <h4>{version_label}</h4>
                                <div class="content-view" inner_html=cmp.version_pane().to_owned()></div>
                            </section>
                            <section class="version-compare__pane">
                                <h4>"현재"</h4>
                                <div class="content-view" inner_html=cmp.current_pane().to_owned()></div>
                            </section>
                        </div>
                        <ul class="version-compare__summary">{summary}</ul>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| back()>
                                "목록으로"
                            </button>
                            <button class="btn btn--primary" on:click=move |_| topics.update(|t| t.confirm_restore = true)>
                                "이 버전으로 복원"
                            </button>
                        </div>
                    </div>
                }
            })
        })
    };

    let heading = move || topics.with(|t| t.history.as_ref().map(|h| h.heading()).unwrap_or_default());
    let prompt = Signal::derive(move || {
        topics.with(|t| t.comparison().map(|cmp| cmp.confirm_prompt()).unwrap_or_default())
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{heading}</h2>
                <Show when=move || topics.with(|t| t.selected_version.is_none()) fallback=comparison>
                    {history_list}
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close()>
                        "닫기"
                    </button>
                </div>
            </div>
        </div>
        <Show when=move || topics.with(|t| t.confirm_restore)>
            <ConfirmDialog
                title="버전 복원"
                message=prompt
                confirm_label="복원"
                on_confirm=restore
                on_cancel=Callback::new(move |()| topics.update(|t| t.confirm_restore = false))
            />
        </Show>
    }
}
