//! Toast notice shown over every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages raise notices through [`notify`]; the toast reads the shared
//! `RwSignal<NoticeState>` and clears itself after a fixed delay.

use desk::notify::Notice;
use leptos::prelude::*;

use crate::state::notice::NoticeState;

/// Show `notice` and arm its dismissal timer.
pub fn notify(notices: RwSignal<NoticeState>, notice: Notice) {
    let mut seq = 0;
    notices.update(|n| seq = n.push(notice));
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::state::notice::DISMISS_AFTER_MS).await;
            notices.update(|n| n.dismiss(seq));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = seq;
    }
}

#[component]
pub fn NoticeToast() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        {move || {
            notices.get().current.map(|notice| {
                let seq = notices.get_untracked().seq;
                view! {
                    <div class=format!("notice {}", notice.level.css_class()) role="status">
                        <span class="notice__text">{notice.text}</span>
                        <button
                            class="notice__close"
                            title="닫기"
                            on:click=move |_| notices.update(|n| n.dismiss(seq))
                        >
                            "✕"
                        </button>
                    </div>
                }
            })
        }}
    }
}
