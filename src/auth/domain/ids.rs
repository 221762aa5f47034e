//! Identifier types for viewers and browser sessions.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an authenticated user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a user identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an anonymous browser session.
///
/// Resolved once when a UI session starts and passed explicitly wherever an
/// unauthenticated viewer needs a stable scope (section preferences on a
/// shared project view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random session identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a session identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identity a request acts under: a signed-in user or an anonymous
/// browser session.
///
/// Preference rows are keyed by this value so that signed-in and anonymous
/// viewers of the same project never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewerIdentity {
    /// An authenticated account.
    User {
        /// The signed-in account identifier.
        user_id: UserId,
    },
    /// An anonymous browser session, typically viewing a shared project.
    Session {
        /// The per-browser-session identifier.
        session_id: SessionId,
    },
}

impl ViewerIdentity {
    /// Creates an identity for a signed-in user.
    #[must_use]
    pub const fn user(user_id: UserId) -> Self {
        Self::User { user_id }
    }

    /// Creates an identity for an anonymous browser session.
    #[must_use]
    pub const fn session(session_id: SessionId) -> Self {
        Self::Session { session_id }
    }

    /// Resolves the identity for a request: the signed-in user when one is
    /// present, otherwise the anonymous session.
    #[must_use]
    pub const fn resolve(current_user: Option<UserId>, session_id: SessionId) -> Self {
        match current_user {
            Some(user_id) => Self::User { user_id },
            None => Self::Session { session_id },
        }
    }

    /// Returns the user identifier when the viewer is signed in.
    #[must_use]
    pub const fn user_id(&self) -> Option<UserId> {
        match self {
            Self::User { user_id } => Some(*user_id),
            Self::Session { .. } => None,
        }
    }
}

impl fmt::Display for ViewerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User { user_id } => write!(f, "user:{user_id}"),
            Self::Session { session_id } => write!(f, "session:{session_id}"),
        }
    }
}
