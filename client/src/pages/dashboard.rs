//! Dashboard page: headline figures and topic share per top-level category.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. Topics and the category tree are fetched
//! together and aggregated by `desk::dashboard`; student and generation
//! figures are fixed sample values.

use leptos::prelude::*;

use crate::components::notice_toast::notify;
use crate::net::api;
use crate::state::dashboard::DashboardState;
use crate::state::notice::NoticeState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let load = move || {
        dashboard.update(|d| d.loading = true);
        leptos::task::spawn_local(async move {
            let (topics, tree) = futures::join!(api::fetch_topics(None), api::fetch_category_tree());
            let mut notice = None;
            dashboard.update(|d| notice = d.settle(topics, tree));
            if let Some(notice) = notice {
                notify(notices, notice);
            }
        });
    };
    Effect::new(move |_| load());

    let stats = move || dashboard.get().stats;

    view! {
        <div class="page dashboard-page">
            <header class="page__header">
                <h1>"대시보드"</h1>
                <button class="btn" on:click=move |_| load() disabled=move || dashboard.get().loading>
                    "새로고침"
                </button>
            </header>
            <Show when=move || dashboard.get().error.is_some()>
                <p class="page__error">{move || dashboard.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || stats().is_some()
                fallback=move || view! { <p>"불러오는 중..."</p> }
            >
                <div class="stat-cards">
                    <div class="stat-card">
                        <span class="stat-card__label">"전체 토픽"</span>
                        <span class="stat-card__value">{move || stats().map(|s| s.total_topics).unwrap_or_default()}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"수강생"</span>
                        <span class="stat-card__value">{move || stats().map(|s| s.total_students).unwrap_or_default()}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"현재 기수"</span>
                        <span class="stat-card__value">
                            {move || stats().map(|s| format!("{}기", s.current_generation)).unwrap_or_default()}
                        </span>
                    </div>
                </div>
                <section class="category-share">
                    <h2>"카테고리별 토픽 분포"</h2>
                    <ul class="category-share__list">
                        {move || {
                            stats()
                                .map(|s| s.category_stats)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|stat| {
                                    view! {
                                        <li class="category-share__row">
                                            <span class="category-share__name">{stat.category}</span>
                                            <span class="category-share__bar">
                                                <span
                                                    class="category-share__fill"
                                                    style=format!("width: {}%", stat.percentage)
                                                ></span>
                                            </span>
                                            <span class="category-share__count">
                                                {format!("{}개 ({}%)", stat.count, stat.percentage)}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </section>
            </Show>
        </div>
    }
}
