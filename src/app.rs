//! PlacementPro Console App
//!
//! Session bootstrap, shared context, and the sidebar shell around the
//! current page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{Sidebar, TopBar};
use crate::config::AppConfig;
use crate::context::{unauthorized_hook, AppContext, Page};
use crate::pages::{
    AlumniPage, DashboardPage, DriveCreatorPage, DriveListPage, LoginPage, SchedulerPage, StudentListPage,
    TemplatesPage,
};
use crate::session::SessionStore;
use crate::store::ConsoleState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let sessions = SessionStore::browser();
    let restored = sessions.load();
    let start = if restored.is_some() { Page::Dashboard } else { Page::Login };
    log::info!("[App] starting on {:?}, api={}", start, config.api_base_url);

    let session = RwSignal::new(restored);
    let page = RwSignal::new(start);

    let client = ApiClient::new(&config, sessions, unauthorized_hook(session, page));
    provide_context(AppContext::new(session, page, client));
    provide_context(Store::new(ConsoleState::default()));

    let shell = |content: AnyView| {
        view! {
            <div class="app-layout">
                <Sidebar />
                <div class="main-column">
                    <TopBar />
                    <main class="main-content">{content}</main>
                </div>
            </div>
        }
        .into_any()
    };

    move || match page.get() {
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::Dashboard => shell(view! { <DashboardPage /> }.into_any()),
        Page::CreateDrive => shell(view! { <DriveCreatorPage /> }.into_any()),
        Page::Drives => shell(view! { <DriveListPage /> }.into_any()),
        Page::Students => shell(view! { <StudentListPage /> }.into_any()),
        Page::Scheduler => shell(view! { <SchedulerPage /> }.into_any()),
        Page::Templates => shell(view! { <TemplatesPage /> }.into_any()),
        Page::Alumni => shell(view! { <AlumniPage /> }.into_any()),
    }
}
