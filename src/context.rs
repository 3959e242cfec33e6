//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{ApiClient, UnauthorizedHook};
use crate::session::Session;

/// Top-level screens; the sidebar switches between them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Dashboard,
    CreateDrive,
    Drives,
    Students,
    Scheduler,
    Templates,
    Alumni,
}

impl Page {
    /// Sidebar entries, in display order
    pub const NAV: [Page; 7] = [
        Page::Dashboard,
        Page::CreateDrive,
        Page::Drives,
        Page::Students,
        Page::Scheduler,
        Page::Templates,
        Page::Alumni,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Login => "Sign in",
            Page::Dashboard => "Dashboard",
            Page::CreateDrive => "Create Drive",
            Page::Drives => "Active Drives",
            Page::Students => "Students",
            Page::Scheduler => "Scheduler",
            Page::Templates => "Resume Templates",
            Page::Alumni => "Alumni Connect",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Login => "🔑",
            Page::Dashboard => "📊",
            Page::CreateDrive => "➕",
            Page::Drives => "💼",
            Page::Students => "🎓",
            Page::Scheduler => "📅",
            Page::Templates => "📄",
            Page::Alumni => "🤝",
        }
    }

    /// Heading shown in the shell's top bar
    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Sign in",
            Page::Dashboard => "Dashboard",
            Page::CreateDrive => "Create Placement Drive",
            Page::Drives => "Placement Drives",
            Page::Students => "Student List",
            Page::Scheduler => "Interview Scheduler",
            Page::Templates => "Resume Templates",
            Page::Alumni => "Alumni Management",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signed-in TPO, None on the login page
    pub session: RwSignal<Option<Session>>,
    /// Current screen
    pub page: RwSignal<Page>,
    client: StoredValue<ApiClient>,
}

impl AppContext {
    pub fn new(session: RwSignal<Option<Session>>, page: RwSignal<Page>, client: ApiClient) -> Self {
        Self {
            session,
            page,
            client: StoredValue::new(client),
        }
    }

    /// Backend client; cheap to clone into async blocks
    pub fn api(&self) -> ApiClient {
        self.client.get_value()
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("[App] navigate to {:?}", page);
        self.page.set(page);
    }

    /// Persist a fresh session and enter the dashboard
    pub fn sign_in(&self, session: Session) {
        self.client.with_value(|client| client.session().save(&session));
        log::info!("[App] signed in to {}", session.college_id);
        self.session.set(Some(session));
        self.page.set(Page::Dashboard);
    }

    pub fn logout(&self) {
        self.client.with_value(|client| client.session().clear());
        log::info!("[App] signed out");
        self.session.set(None);
        self.page.set(Page::Login);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Hook handed to the client: drop the session signal and show the login page.
/// Storage has already been cleared by the client when it runs.
pub fn unauthorized_hook(session: RwSignal<Option<Session>>, page: RwSignal<Page>) -> UnauthorizedHook {
    Arc::new(move || {
        session.try_set(None);
        page.try_set(Page::Login);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::session::SessionStore;

    fn signed_in() -> Session {
        Session {
            token: "jwt".into(),
            college_id: "C001".into(),
            name: "Asha".into(),
        }
    }

    #[test]
    fn test_expired_token_routes_to_login() {
        let owner = Owner::new();
        owner.set();

        let sessions = SessionStore::in_memory();
        sessions.save(&signed_in());
        let session = RwSignal::new(sessions.load());
        let page = RwSignal::new(Page::Drives);
        let client = ApiClient::new(&AppConfig::default(), sessions, unauthorized_hook(session, page));

        let err = client.check_status(401, r#"{"detail":"Token expired"}"#).unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(session.get_untracked(), None);
        assert_eq!(page.get_untracked(), Page::Login);
        assert_eq!(client.session().load(), None);
    }

    #[test]
    fn test_server_error_keeps_page() {
        let owner = Owner::new();
        owner.set();

        let sessions = SessionStore::in_memory();
        sessions.save(&signed_in());
        let session = RwSignal::new(sessions.load());
        let page = RwSignal::new(Page::Students);
        let client = ApiClient::new(&AppConfig::default(), sessions, unauthorized_hook(session, page));

        assert!(client.check_status(500, "").is_err());
        assert_eq!(session.get_untracked(), Some(signed_in()));
        assert_eq!(page.get_untracked(), Page::Students);
    }
}
