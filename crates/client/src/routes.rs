//! Route table: every path the client knows, with its allow-list.

use tutorhub_auth::{ADMIN_HOME, AllowedRoles, INSTRUCTOR_HOME, LEARNER_HOME, Role, SIGN_IN};

/// Who may open a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    /// No guard at all (landing page, sign-in, registration).
    Public,
    /// Guarded; the allow-list may be empty ("any authenticated role").
    Protected(AllowedRoles),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    pub path: &'static str,
    pub access: RouteAccess,
}

fn learner(path: &'static str) -> RouteSpec {
    RouteSpec {
        path,
        access: RouteAccess::Protected(AllowedRoles::only([Role::Learner])),
    }
}

fn instructor(path: &'static str) -> RouteSpec {
    RouteSpec {
        path,
        access: RouteAccess::Protected(AllowedRoles::only([Role::Instructor])),
    }
}

fn admin(path: &'static str) -> RouteSpec {
    RouteSpec {
        path,
        access: RouteAccess::Protected(AllowedRoles::only([Role::Administrator])),
    }
}

fn public(path: &'static str) -> RouteSpec {
    RouteSpec {
        path,
        access: RouteAccess::Public,
    }
}

/// The full route table.
pub fn route_table() -> Vec<RouteSpec> {
    vec![
        public("/"),
        public(SIGN_IN),
        public("/register"),
        // Learner dashboard
        learner(LEARNER_HOME),
        learner("/student-dashboard/courses"),
        learner("/student-dashboard/sessions"),
        learner("/student-dashboard/homework"),
        learner("/student-dashboard/payments"),
        learner("/student-dashboard/tickets"),
        // Instructor dashboard
        instructor(INSTRUCTOR_HOME),
        instructor("/teacher-dashboard/sessions"),
        instructor("/teacher-dashboard/students"),
        instructor("/teacher-dashboard/homework"),
        instructor("/teacher-dashboard/earnings"),
        instructor("/teacher-dashboard/tickets"),
        // Admin dashboard
        admin(ADMIN_HOME),
        admin("/admin-dashboard/users"),
        admin("/admin-dashboard/courses"),
        admin("/admin-dashboard/sessions"),
        admin("/admin-dashboard/finances"),
        admin("/admin-dashboard/tickets"),
        admin("/admin-dashboard/analytics"),
        admin("/admin-dashboard/settings"),
    ]
}

/// Exact-path lookup. Unknown paths resolve to the not-found page, which is
/// public, so callers treat `None` as unguarded.
pub fn find<'a>(table: &'a [RouteSpec], path: &str) -> Option<&'a RouteSpec> {
    table.iter().find(|spec| spec.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboards_are_role_gated() {
        let table = route_table();
        let spec = find(&table, "/teacher-dashboard").unwrap();
        let RouteAccess::Protected(allowed) = &spec.access else {
            panic!("expected a protected route");
        };
        assert!(allowed.permits(Role::Instructor));
        assert!(!allowed.permits(Role::Learner));
    }

    #[test]
    fn sign_in_is_public() {
        let table = route_table();
        let spec = find(&table, SIGN_IN).unwrap();
        assert_eq!(spec.access, RouteAccess::Public);
    }

    #[test]
    fn unknown_path_is_absent() {
        let table = route_table();
        assert!(find(&table, "/no-such-page").is_none());
    }
}
