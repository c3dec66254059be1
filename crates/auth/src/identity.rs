use serde::{Deserialize, Serialize};

use tutorhub_core::UserId;

use crate::Role;

/// The authenticated user's identity.
///
/// # Invariants
/// - The role is immutable for the lifetime of a session: the session store
///   replaces the whole identity on login/restore and never mutates it in
///   place. Changing role requires a new session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub display_name: String,
    pub email: String,
    pub role: Role,
    pub avatar_url: Option<String>,
}

/// Profile payload returned by the persisted-profile lookup.
///
/// The credential exchange yields id + email; the profile lookup fills in the
/// rest. Role strings that fail to parse fail deserialization here, which the
/// session store treats like any other lookup failure (logged out).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub display_name: String,
    pub role: Role,
    pub avatar_url: Option<String>,
}

impl Identity {
    /// Assemble an identity from the credential session and its profile.
    ///
    /// Fields are carried over verbatim, no transformation.
    pub fn from_parts(user_id: UserId, email: String, profile: Profile) -> Self {
        Self {
            id: user_id,
            display_name: profile.display_name,
            email,
            role: profile.role,
            avatar_url: profile.avatar_url,
        }
    }
}
