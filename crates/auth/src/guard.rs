//! Access guard: render vs redirect for a protected subtree.
//!
//! The decision is a pure function over the session state, an allow-list, and
//! the requested route:
//! - No IO
//! - No panics
//! - No side effects (navigation is performed by the caller)

use serde::{Deserialize, Serialize};

use crate::{Role, Route, SessionState, home_route};

/// Set of roles permitted to view a protected subtree.
///
/// Empty means "authentication required, any role accepted".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowedRoles(Vec<Role>);

impl AllowedRoles {
    /// Any authenticated role.
    pub fn any() -> Self {
        Self(Vec::new())
    }

    pub fn only(roles: impl IntoIterator<Item = Role>) -> Self {
        Self(roles.into_iter().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    /// Whether the given role may view the subtree.
    pub fn permits(&self, role: Role) -> bool {
        self.is_empty() || self.contains(role)
    }
}

impl FromIterator<Role> for AllowedRoles {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Navigation target produced by a guard decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: Route,
    /// Originally requested route, recorded for return-after-login. Only set
    /// on the unauthenticated redirect.
    pub return_to: Option<Route>,
}

/// Outcome of evaluating the guard for one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// The session has not settled yet; show a neutral placeholder. Never
    /// renders children, never redirects.
    Pending,
    /// Render the protected children.
    Render,
    /// Navigate away instead of rendering.
    Redirect(Redirect),
}

impl AccessDecision {
    fn to_sign_in(requested: &Route) -> Self {
        AccessDecision::Redirect(Redirect {
            to: Route::sign_in(),
            return_to: Some(requested.clone()),
        })
    }

    fn to_role_home(role: Role) -> Self {
        AccessDecision::Redirect(Redirect {
            to: home_route(role),
            return_to: None,
        })
    }
}

/// Decide render vs redirect for a protected route.
///
/// Decision table:
/// - loading                                → `Pending`
/// - no identity                            → redirect to sign-in, requested
///   route recorded for post-login return
/// - role not in a non-empty allow-list     → redirect to that role's home
///   (total map; a `Guest` home is sign-in)
/// - otherwise                              → `Render`
pub fn decide(session: &SessionState, allowed: &AllowedRoles, requested: &Route) -> AccessDecision {
    if session.is_loading() {
        return AccessDecision::Pending;
    }

    let Some(identity) = session.identity() else {
        return AccessDecision::to_sign_in(requested);
    };

    if !allowed.permits(identity.role) {
        return AccessDecision::to_role_home(identity.role);
    }

    AccessDecision::Render
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
