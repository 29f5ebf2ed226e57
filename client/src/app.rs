//! Root application component with routing and context providers.

use desk::guard::SubmitGuard;
use desk::session::TopicEditSession;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav::Nav;
use crate::components::notice_toast::NoticeToast;
use crate::pages::{
    categories::CategoriesPage, dashboard::DashboardPage, homework::HomeworkPage, templates::TemplatesPage,
    topics::TopicsPage, weekly_exams::WeeklyExamsPage,
};
use crate::state::{
    categories::CategoriesState, dashboard::DashboardState, homework::HomeworkState, notice::NoticeState,
    templates::TemplatesState, topics::TopicsState, weekly_exams::WeeklyExamsState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides every screen's state and the shared submit guard, then routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let notices = RwSignal::new(NoticeState::default());
    let guard = RwSignal::new(SubmitGuard::default());
    let topics = RwSignal::new(TopicsState::default());
    let session = RwSignal::new(TopicEditSession::default());
    let categories = RwSignal::new(CategoriesState::default());
    let templates = RwSignal::new(TemplatesState::default());
    let exams = RwSignal::new(WeeklyExamsState::default());
    let homework = RwSignal::new(HomeworkState::default());
    let dashboard = RwSignal::new(DashboardState::default());

    provide_context(notices);
    provide_context(guard);
    provide_context(topics);
    provide_context(session);
    provide_context(categories);
    provide_context(templates);
    provide_context(exams);
    provide_context(homework);
    provide_context(dashboard);

    view! {
        <Stylesheet id="leptos" href="/pkg/studydesk.css"/>
        <Title text="학습자료 관리"/>

        <Router>
            <div class="layout">
                <Nav/>
                <main class="layout__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=DashboardPage/>
                        <Route path=StaticSegment("topics") view=TopicsPage/>
                        <Route path=StaticSegment("categories") view=CategoriesPage/>
                        <Route path=StaticSegment("templates") view=TemplatesPage/>
                        <Route path=StaticSegment("homework") view=HomeworkPage/>
                        <Route path=StaticSegment("weekly-exams") view=WeeklyExamsPage/>
                    </Routes>
                </main>
            </div>
            <NoticeToast/>
        </Router>
    }
}
