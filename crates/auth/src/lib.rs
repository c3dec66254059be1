//! `tutorhub-auth` — session/role gate for the marketplace client.
//!
//! This crate is intentionally decoupled from rendering and transport: the
//! guard is a pure decision function, and the session store talks to its
//! collaborators through trait objects.

pub mod guard;
pub mod home;
pub mod identity;
pub mod role;
pub mod session;

pub use guard::{AccessDecision, AllowedRoles, Redirect, decide};
pub use home::{ADMIN_HOME, INSTRUCTOR_HOME, LEARNER_HOME, Route, SIGN_IN, home_route};
pub use identity::{Identity, Profile};
pub use role::{Role, RoleParseError};
pub use session::{
    AuthError, AuthSession, CredentialService, Credentials, ProfileStore, SessionState,
    SessionStore, SessionToken, TokenVault,
};
