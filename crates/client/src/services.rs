//! In-memory collaborator services.
//!
//! Demo/test doubles for the external credential exchange and profile
//! lookup: a fixed account directory, uuid tokens held in a map, and a
//! mutex-held token vault standing in for browser storage.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use tutorhub_auth::{
    AuthError, AuthSession, CredentialService, Credentials, Profile, ProfileStore, Role,
    SessionToken, TokenVault,
};
use tutorhub_catalog::DemoData;
use tutorhub_core::UserId;

/// One account in the demo directory.
#[derive(Debug, Clone)]
pub struct DemoAccount {
    pub user_id: UserId,
    pub email: String,
    pub password: String,
    pub profile: Profile,
}

/// Fixed directory of demo accounts.
#[derive(Debug, Clone)]
pub struct DemoDirectory {
    accounts: Vec<DemoAccount>,
}

impl DemoDirectory {
    pub fn new(accounts: Vec<DemoAccount>) -> Self {
        Self { accounts }
    }

    /// The standard demo trio (learner, instructor, administrator), wired to
    /// the ids the demo dataset uses.
    pub fn with_standard_accounts(data: &DemoData) -> Self {
        Self::new(vec![
            DemoAccount {
                user_id: data.learner_id,
                email: "student@example.com".to_string(),
                password: "password123".to_string(),
                profile: Profile {
                    display_name: "Alex Johnson".to_string(),
                    role: Role::Learner,
                    avatar_url: Some("/placeholder.svg".to_string()),
                },
            },
            DemoAccount {
                user_id: data.instructor_id,
                email: "teacher@example.com".to_string(),
                password: "password123".to_string(),
                profile: Profile {
                    display_name: "Prof. Sarah Miller".to_string(),
                    role: Role::Instructor,
                    avatar_url: Some("/placeholder.svg".to_string()),
                },
            },
            DemoAccount {
                user_id: data.admin_id,
                email: "admin@example.com".to_string(),
                password: "password123".to_string(),
                profile: Profile {
                    display_name: "Admin User".to_string(),
                    role: Role::Administrator,
                    avatar_url: Some("/placeholder.svg".to_string()),
                },
            },
        ])
    }

    fn by_email(&self, email: &str) -> Option<&DemoAccount> {
        self.accounts.iter().find(|a| a.email == email)
    }

    fn by_id(&self, user_id: UserId) -> Option<&DemoAccount> {
        self.accounts.iter().find(|a| a.user_id == user_id)
    }
}

/// Credential exchange over the demo directory. Issued tokens live in a map,
/// so a restart invalidates them like a real short-lived session.
pub struct InMemoryCredentialService {
    directory: Arc<DemoDirectory>,
    issued: Mutex<HashMap<String, UserId>>,
}

impl InMemoryCredentialService {
    pub fn new(directory: Arc<DemoDirectory>) -> Self {
        Self {
            directory,
            issued: Mutex::new(HashMap::new()),
        }
    }

    /// Pre-issue a token for a user, as if a previous run had signed in.
    pub fn issue_for(&self, user_id: UserId) -> SessionToken {
        let token = SessionToken::new(Uuid::now_v7().to_string());
        self.issued
            .lock()
            .unwrap()
            .insert(token.as_str().to_string(), user_id);
        token
    }
}

#[async_trait]
impl CredentialService for InMemoryCredentialService {
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, AuthError> {
        let account = self
            .directory
            .by_email(&credentials.email)
            .filter(|a| a.password == credentials.password)
            .ok_or(AuthError::InvalidCredentials)?;

        let token = self.issue_for(account.user_id);
        Ok(AuthSession {
            user_id: account.user_id,
            email: account.email.clone(),
            token,
        })
    }

    async fn resume(&self, token: &SessionToken) -> Result<AuthSession, AuthError> {
        let user_id = self
            .issued
            .lock()
            .unwrap()
            .get(token.as_str())
            .copied()
            .ok_or(AuthError::SessionExpired)?;

        let account = self
            .directory
            .by_id(user_id)
            .ok_or(AuthError::ProfileMissing(user_id))?;

        Ok(AuthSession {
            user_id,
            email: account.email.clone(),
            token: token.clone(),
        })
    }
}

/// Profile lookup over the demo directory.
pub struct InMemoryProfileStore {
    directory: Arc<DemoDirectory>,
}

impl InMemoryProfileStore {
    pub fn new(directory: Arc<DemoDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn fetch(&self, user_id: UserId) -> Result<Profile, AuthError> {
        self.directory
            .by_id(user_id)
            .map(|a| a.profile.clone())
            .ok_or(AuthError::ProfileMissing(user_id))
    }
}

/// Token vault standing in for browser local storage.
#[derive(Default)]
pub struct InMemoryTokenVault(Mutex<Option<SessionToken>>);

impl TokenVault for InMemoryTokenVault {
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
