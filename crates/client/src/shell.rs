//! Client shell: wires the session store, the route table, and the
//! navigator, and collects user-visible notices (the toast analog).

use tutorhub_auth::{AccessDecision, Credentials, Route, SessionState, SessionStore, decide};

use crate::navigator::Navigator;
use crate::routes::{RouteAccess, RouteSpec, find, route_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A dismissable user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

pub struct ClientShell {
    store: SessionStore,
    navigator: Navigator,
    routes: Vec<RouteSpec>,
    notices: Vec<Notice>,
}

impl ClientShell {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            navigator: Navigator::new(),
            routes: route_table(),
            notices: Vec::new(),
        }
    }

    /// Run the startup session restore. Call once before opening routes.
    pub async fn start(&mut self) {
        self.store.restore().await;
    }

    pub fn session(&self) -> &SessionState {
        self.store.state()
    }

    pub fn location(&self) -> &Route {
        self.navigator.location()
    }

    /// Drain pending notices (they are shown once, then dismissed).
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Open a path: evaluate the guard for it and perform the resulting
    /// navigation. Unknown paths fall through to the public not-found page.
    pub fn open(&mut self, path: &str) -> AccessDecision {
        let requested = Route::new(path.to_string());

        let decision = match find(&self.routes, path).map(|spec| &spec.access) {
            None | Some(RouteAccess::Public) => AccessDecision::Render,
            Some(RouteAccess::Protected(allowed)) => {
                decide(self.store.state(), allowed, &requested)
            }
        };

        match &decision {
            AccessDecision::Render => self.navigator.go_to(requested),
            AccessDecision::Pending => {
                tracing::debug!(path, "session not settled; holding placeholder");
            }
            AccessDecision::Redirect(redirect) => {
                tracing::debug!(path, to = %redirect.to, "guard redirect");
                self.navigator.apply(&decision);
            }
        }

        decision
    }

    /// Sign in and land on the post-login target (the recorded return path,
    /// or the role home). Returns whether the login succeeded; failures are
    /// surfaced as an error notice only.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> bool {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.store.login(&credentials).await {
            Ok(identity) => {
                self.notices
                    .push(Notice::info(format!("Welcome back, {}!", identity.display_name)));
                let target = self.navigator.post_login_target(identity.role);
                self.open(target.as_str());
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "login failed");
                self.notices.push(Notice::error(err.to_string()));
                false
            }
        }
    }

    /// Sign out and return to the sign-in page.
    pub fn sign_out(&mut self) {
        self.store.logout();
        self.notices.push(Notice::info("You have been logged out"));
        self.navigator.go_to(Route::sign_in());
    }
}
