//! Session state and the store that owns it.
//!
//! The store is an explicitly owned, injectable object: no ambient singleton,
//! no global state. Consumers hold a reference to the store (or just to its
//! [`SessionState`]) and must not branch on the identity while `loading` is
//! true.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use tutorhub_core::UserId;

use crate::{Identity, Profile};

// ─────────────────────────────────────────────────────────────────────────────
// Collaborator boundary
// ─────────────────────────────────────────────────────────────────────────────

/// Sign-in form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Opaque persisted credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Result of a successful credential exchange.
///
/// Carries only what the credential service knows; the profile lookup fills
/// in display name, role, and avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub user_id: UserId,
    pub email: String,
    pub token: SessionToken,
}

/// Authentication/profile failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("session token rejected")]
    SessionExpired,

    #[error("no profile found for user {0}")]
    ProfileMissing(UserId),

    #[error("malformed profile data: {0}")]
    MalformedProfile(String),

    #[error("auth service unavailable: {0}")]
    Service(String),
}

/// External credential-exchange service.
///
/// Opaque collaborator: given email+password or a stored token, it returns an
/// authenticated session or an error. Transport is out of scope here.
#[async_trait]
pub trait CredentialService: Send + Sync {
    /// Exchange email+password for a session.
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, AuthError>;

    /// Exchange a persisted token for a session.
    async fn resume(&self, token: &SessionToken) -> Result<AuthSession, AuthError>;
}

/// External persisted-profile lookup.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn fetch(&self, user_id: UserId) -> Result<Profile, AuthError>;
}

/// Persisted token storage (localStorage analog).
pub trait TokenVault: Send + Sync {
    fn load(&self) -> Option<SessionToken>;
    fn save(&self, token: &SessionToken);
    fn clear(&self);
}

// ─────────────────────────────────────────────────────────────────────────────
// Session state
// ─────────────────────────────────────────────────────────────────────────────

/// Current session: who is logged in, and whether that answer is settled yet.
///
/// # Invariants
/// - While `loading` is true, `identity` is not authoritative and consumers
///   must not branch on it (the guard returns `Pending`).
/// - Mutated only by the session store; read-only everywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    identity: Option<Identity>,
    loading: bool,
}

impl SessionState {
    /// Startup state: the asynchronous restore has not settled yet.
    pub fn booting() -> Self {
        Self {
            identity: None,
            loading: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            identity: None,
            loading: false,
        }
    }

    pub fn signed_in(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            loading: false,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.identity.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::booting()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Session store
// ─────────────────────────────────────────────────────────────────────────────

/// Single source of truth for "who is logged in".
///
/// Owns the [`SessionState`] exclusively; collaborators are injected at
/// construction so the store can be exercised in isolation.
pub struct SessionStore {
    state: SessionState,
    credentials: Arc<dyn CredentialService>,
    profiles: Arc<dyn ProfileStore>,
    vault: Arc<dyn TokenVault>,
}

impl SessionStore {
    /// Create a store in the booting state. Call [`SessionStore::restore`]
    /// once before evaluating any guard.
    pub fn new(
        credentials: Arc<dyn CredentialService>,
        profiles: Arc<dyn ProfileStore>,
        vault: Arc<dyn TokenVault>,
    ) -> Self {
        Self {
            state: SessionState::booting(),
            credentials,
            profiles,
            vault,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Restore a previous session from the persisted token, if any.
    ///
    /// Failure is swallowed and logged, never fatal: the visible effect of a
    /// failed restore is simply "logged out". Loading clears on every path,
    /// error included.
    pub async fn restore(&mut self) {
        let identity = match self.try_restore().await {
            Ok(identity) => identity,
            Err(err) => {
                tracing::warn!(error = %err, "session restore failed; continuing signed out");
                None
            }
        };

        self.state = match identity {
            Some(identity) => {
                tracing::info!(user_id = %identity.id, role = %identity.role, "session restored");
                SessionState::signed_in(identity)
            }
            None => SessionState::signed_out(),
        };
    }

    async fn try_restore(&self) -> Result<Option<Identity>, AuthError> {
        let Some(token) = self.vault.load() else {
            return Ok(None);
        };

        let session = self.credentials.resume(&token).await?;
        let profile = self.profiles.fetch(session.user_id).await?;

        Ok(Some(Identity::from_parts(
            session.user_id,
            session.email,
            profile,
        )))
    }

    /// Exchange credentials for an identity.
    ///
    /// On success the identity is stored verbatim and the token persisted.
    /// On failure the state is unchanged (still logged out) and the error is
    /// returned for the caller to surface; the caller may simply re-invoke,
    /// there is no retry here.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<Identity, AuthError> {
        let session = self.credentials.sign_in(credentials).await?;
        let profile = self.profiles.fetch(session.user_id).await?;

        self.vault.save(&session.token);

        let identity = Identity::from_parts(session.user_id, session.email, profile);
        tracing::info!(user_id = %identity.id, role = %identity.role, "signed in");

        self.state = SessionState::signed_in(identity.clone());
        Ok(identity)
    }

    /// Clear the identity and the persisted token.
    ///
    /// Idempotent: calling while already logged out is a no-op.
    pub fn logout(&mut self) {
        if self.state.identity().is_some() {
            tracing::info!("signed out");
        }
        self.vault.clear();
        self.state = SessionState::signed_out();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::Role;

    const TOKEN: &str = "tok-1";

    /// Single-account credential service; `healthy = false` simulates an
    /// unreachable backend.
    struct StubCredentials {
        user_id: UserId,
        email: String,
        password: String,
        healthy: bool,
    }

    #[async_trait]
    impl CredentialService for StubCredentials {
        async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, AuthError> {
            if !self.healthy {
                return Err(AuthError::Service("connection refused".to_string()));
            }
            if credentials.email == self.email && credentials.password == self.password {
                Ok(AuthSession {
                    user_id: self.user_id,
                    email: self.email.clone(),
                    token: SessionToken::new(TOKEN),
                })
            } else {
                Err(AuthError::InvalidCredentials)
            }
        }

        async fn resume(&self, token: &SessionToken) -> Result<AuthSession, AuthError> {
            if !self.healthy {
                return Err(AuthError::Service("connection refused".to_string()));
            }
            if token.as_str() == TOKEN {
                Ok(AuthSession {
                    user_id: self.user_id,
                    email: self.email.clone(),
                    token: token.clone(),
                })
            } else {
                Err(AuthError::SessionExpired)
            }
        }
    }

    struct StubProfiles {
        user_id: UserId,
        profile: Profile,
    }

    #[async_trait]
    impl ProfileStore for StubProfiles {
        async fn fetch(&self, user_id: UserId) -> Result<Profile, AuthError> {
            if user_id == self.user_id {
                Ok(self.profile.clone())
            } else {
                Err(AuthError::ProfileMissing(user_id))
            }
        }
    }

    #[derive(Default)]
    struct MemoryVault(Mutex<Option<SessionToken>>);

    impl TokenVault for MemoryVault {
        fn load(&self) -> Option<SessionToken> {
            self.0.lock().unwrap().clone()
        }

        fn save(&self, token: &SessionToken) {
            *self.0.lock().unwrap() = Some(token.clone());
        }

        fn clear(&self) {
            *self.0.lock().unwrap() = None;
        }
    }

    fn profile() -> Profile {
        Profile {
            display_name: "Alex Johnson".to_string(),
            role: Role::Learner,
            avatar_url: Some("/placeholder.svg".to_string()),
        }
    }

    fn store_with(healthy: bool, vault: Arc<MemoryVault>) -> SessionStore {
        let user_id = UserId::new();
        SessionStore::new(
            Arc::new(StubCredentials {
                user_id,
                email: "student@example.com".to_string(),
                password: "password123".to_string(),
                healthy,
            }),
            Arc::new(StubProfiles {
                user_id,
                profile: profile(),
            }),
            vault,
        )
    }

    #[tokio::test]
    async fn restore_without_token_ends_signed_out() {
        let mut store = store_with(true, Arc::new(MemoryVault::default()));
        assert!(store.state().is_loading());

        store.restore().await;

        assert!(!store.state().is_loading());
        assert!(store.state().identity().is_none());
    }

    #[tokio::test]
    async fn restore_failure_is_swallowed_and_clears_loading() {
        let vault = Arc::new(MemoryVault::default());
        vault.save(&SessionToken::new(TOKEN));

        // Backend down: resume rejects with a service error.
        let mut store = store_with(false, vault);
        store.restore().await;

        assert!(!store.state().is_loading());
        assert!(store.state().identity().is_none());
    }

    #[tokio::test]
    async fn restore_with_valid_token_populates_identity() {
        let vault = Arc::new(MemoryVault::default());
        vault.save(&SessionToken::new(TOKEN));

        let mut store = store_with(true, vault);
        store.restore().await;

        let identity = store.state().identity().unwrap();
        assert_eq!(identity.role, Role::Learner);
        assert_eq!(identity.email, "student@example.com");
    }

    #[tokio::test]
    async fn login_success_stores_profile_verbatim_and_persists_token() {
        let vault = Arc::new(MemoryVault::default());
        let mut store = store_with(true, Arc::clone(&vault));
        store.restore().await;

        let identity = store
            .login(&Credentials {
                email: "student@example.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();

        let expected = profile();
        assert_eq!(identity.display_name, expected.display_name);
        assert_eq!(identity.role, expected.role);
        assert_eq!(identity.avatar_url, expected.avatar_url);
        assert_eq!(identity.email, "student@example.com");
        assert_eq!(store.state().identity(), Some(&identity));
        assert_eq!(vault.load().unwrap().as_str(), TOKEN);
    }

    #[tokio::test]
    async fn login_failure_leaves_state_unchanged() {
        let mut store = store_with(true, Arc::new(MemoryVault::default()));
        store.restore().await;

        let err = store
            .login(&Credentials {
                email: "student@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, AuthError::InvalidCredentials);
        assert!(store.state().identity().is_none());
        assert!(!store.state().is_loading());
    }

    #[tokio::test]
    async fn logout_clears_identity_and_token_and_is_idempotent() {
        let vault = Arc::new(MemoryVault::default());
        let mut store = store_with(true, Arc::clone(&vault));
        store.restore().await;
        store
            .login(&Credentials {
                email: "student@example.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();

        store.logout();
        assert!(store.state().identity().is_none());
        assert!(vault.load().is_none());

        // Second logout is a no-op, no error.
        store.logout();
        assert!(store.state().identity().is_none());
    }
}
