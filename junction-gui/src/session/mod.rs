pub mod store;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::services::auth::api::UserProfile;

pub use store::FileSessionStore;

/// Which of the two login routes the form was mounted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Worker,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Worker => write!(f, "worker"),
        }
    }
}

/// Durable session written on the login success path, the only writer.
/// Field names match the storage keys of the original web client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "userType")]
    pub role: Role,
    #[serde(rename = "jwtToken")]
    pub token: String,
    pub user: UserProfile,
}

/// Process-wide session state: published once on successful login and read
/// by the dashboard guard.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub role: Role,
    pub user: UserProfile,
    pub token: String,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

impl From<SessionRecord> for Session {
    fn from(record: SessionRecord) -> Self {
        Self {
            role: record.role,
            user: record.user,
            token: record.token,
        }
    }
}

#[derive(Debug, Clone)]
pub enum SessionError {
    ReadingFile(String),
    WritingFile(String),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
            Self::WritingFile(e) => write!(f, "Error while writing file: {}", e),
        }
    }
}

/// Durable client-side storage for the session. Injected into the form
/// instead of being reached as an ambient global so tests can observe writes.
#[async_trait]
pub trait SessionStore: std::fmt::Debug + Send + Sync {
    async fn save(&self, record: &SessionRecord) -> Result<(), SessionError>;
    async fn load(&self) -> Result<Option<SessionRecord>, SessionError>;
    async fn clear(&self) -> Result<(), SessionError>;
}
