use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role of an authenticated identity.
///
/// The set is closed on purpose: every branch over roles is exhaustive, and
/// the role-to-home map is a total function. Role data that fails to parse is
/// rejected at the profile boundary instead of flowing through as an
/// "unknown" role.
///
/// `Guest` is the role of accounts that authenticated but were never granted
/// a dashboard; their home is the sign-in route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    /// Legacy wire name: "student".
    #[serde(alias = "student")]
    Learner,
    /// Legacy wire name: "teacher".
    #[serde(alias = "teacher")]
    Instructor,
    /// Legacy wire name: "admin".
    #[serde(alias = "admin")]
    Administrator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Learner => "learner",
            Role::Instructor => "instructor",
            Role::Administrator => "administrator",
        }
    }

    /// All roles, in no particular order. Handy for allow-list tests.
    pub const ALL: [Role; 4] = [
        Role::Guest,
        Role::Learner,
        Role::Instructor,
        Role::Administrator,
    ];
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role: {0:?}")]
pub struct RoleParseError(String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(Role::Guest),
            "learner" | "student" => Ok(Role::Learner),
            "instructor" | "teacher" => Ok(Role::Instructor),
            "administrator" | "admin" => Ok(Role::Administrator),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_and_legacy_names() {
        assert_eq!("learner".parse::<Role>().unwrap(), Role::Learner);
        assert_eq!("student".parse::<Role>().unwrap(), Role::Learner);
        assert_eq!("teacher".parse::<Role>().unwrap(), Role::Instructor);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Administrator);
    }

    #[test]
    fn rejects_unknown_role() {
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn serde_accepts_legacy_aliases() {
        let role: Role = serde_json::from_str("\"student\"").unwrap();
        assert_eq!(role, Role::Learner);
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"learner\"");
    }
}
