//! Navigation side effects.
//!
//! The guard only *decides*; this thin caller performs the redirect, keeps
//! the current location, and remembers the requested route for
//! return-after-login.

use tutorhub_auth::{AccessDecision, Role, Route, home_route};

pub struct Navigator {
    location: Route,
    return_to: Option<Route>,
    history: Vec<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            location: Route::new("/"),
            return_to: None,
            history: Vec::new(),
        }
    }

    pub fn location(&self) -> &Route {
        &self.location
    }

    /// Visited routes, oldest first. The current location is the last entry
    /// once at least one navigation happened.
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub fn go_to(&mut self, route: Route) {
        tracing::debug!(to = %route, "navigate");
        self.history.push(route.clone());
        self.location = route;
    }

    /// Perform the navigation a guard decision asks for.
    ///
    /// `Pending` and `Render` leave the location alone (the caller shows a
    /// placeholder or the children); a redirect moves and records the
    /// return-to path when one is carried.
    pub fn apply(&mut self, decision: &AccessDecision) {
        if let AccessDecision::Redirect(redirect) = decision {
            if let Some(return_to) = &redirect.return_to {
                self.return_to = Some(return_to.clone());
            }
            self.go_to(redirect.to.clone());
        }
    }

    /// Where to land after a successful login: the recorded return path if
    /// one exists (consumed), otherwise the role's home.
    pub fn post_login_target(&mut self, role: Role) -> Route {
        self.return_to.take().unwrap_or_else(|| home_route(role))
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutorhub_auth::Redirect;

    #[test]
    fn redirect_with_return_path_is_recorded_and_consumed() {
        let mut nav = Navigator::new();
        nav.apply(&AccessDecision::Redirect(Redirect {
            to: Route::sign_in(),
            return_to: Some(Route::new("/admin-dashboard/users")),
        }));

        assert_eq!(nav.location(), &Route::sign_in());
        assert_eq!(
            nav.post_login_target(Role::Administrator),
            Route::new("/admin-dashboard/users")
        );
        // Consumed: the next login falls back to the role home.
        assert_eq!(
            nav.post_login_target(Role::Administrator),
            home_route(Role::Administrator)
        );
    }

    #[test]
    fn pending_and_render_do_not_move() {
        let mut nav = Navigator::new();
        nav.go_to(Route::new("/register"));
        nav.apply(&AccessDecision::Pending);
        nav.apply(&AccessDecision::Render);
        assert_eq!(nav.location(), &Route::new("/register"));
    }
}
