use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::Role;

/// Application route path.
///
/// Routes are opaque strings at this layer; the client crate owns the route
/// table and the navigation side effects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(Cow<'static, str>);

impl Route {
    pub fn new(path: impl Into<Cow<'static, str>>) -> Self {
        Self(path.into())
    }

    /// The sign-in route, used as the fallback target for every redirect
    /// that cannot land on a role home.
    pub fn sign_in() -> Self {
        Self::new(SIGN_IN)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Route {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

pub const SIGN_IN: &str = "/login";
pub const LEARNER_HOME: &str = "/student-dashboard";
pub const INSTRUCTOR_HOME: &str = "/teacher-dashboard";
pub const ADMIN_HOME: &str = "/admin-dashboard";

/// Default landing route per role.
///
/// Total over [`Role`]: the guard and post-login navigation share this one
/// definition of "home", so they cannot diverge. `Guest` lands on sign-in,
/// which preserves the legacy behavior for accounts without a dashboard.
pub fn home_route(role: Role) -> Route {
    match role {
        Role::Guest => Route::new(SIGN_IN),
        Role::Learner => Route::new(LEARNER_HOME),
        Role::Instructor => Route::new(INSTRUCTOR_HOME),
        Role::Administrator => Route::new(ADMIN_HOME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_a_home() {
        for role in Role::ALL {
            assert!(!home_route(role).as_str().is_empty());
        }
    }

    #[test]
    fn guest_home_is_sign_in() {
        assert_eq!(home_route(Role::Guest), Route::sign_in());
    }
}
