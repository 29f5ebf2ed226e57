//! Side navigation between console screens.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

const LINKS: &[(&str, &str)] = &[
    ("/", "대시보드"),
    ("/topics", "토픽 관리"),
    ("/categories", "카테고리 관리"),
    ("/templates", "템플릿 관리"),
    ("/homework", "숙제 관리"),
    ("/weekly-exams", "주간모의고사"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="nav">
            <div class="nav__brand">"학습자료 관리"</div>
            <ul class="nav__links">
                {LINKS
                    .iter()
                    .map(|&(href, label)| {
                        let class = move || {
                            if location.pathname.get() == href { "nav__link nav__link--active" } else { "nav__link" }
                        };
                        view! {
                            <li>
                                <a href=href class=class>
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}
