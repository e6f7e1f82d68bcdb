//! Anonymous like records and the tokens that key them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors raised by [`AnonymousToken`] constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenValidationError {
    /// The token string was empty.
    #[error("anonymous token must not be empty")]
    EmptyToken,
    /// The token string was not a valid UUID.
    #[error("anonymous token must be a valid UUID")]
    InvalidToken,
}

/// A locally generated, client-persisted token standing in for identity.
///
/// The token is not an identity: the server never verifies it against
/// anything and stores nothing about it until a like is recorded. It only
/// keys like deduplication for one browser's persisted lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AnonymousToken(Uuid, String);

impl AnonymousToken {
    /// Validate and construct a token from borrowed input.
    pub fn new(token: impl AsRef<str>) -> Result<Self, TokenValidationError> {
        Self::from_owned(token.as_ref().to_owned())
    }

    /// Mint a fresh random token for clients that hold none yet.
    pub fn mint() -> Self {
        let uuid = Uuid::new_v4();
        Self(uuid, uuid.to_string())
    }

    fn from_owned(token: String) -> Result<Self, TokenValidationError> {
        if token.is_empty() {
            return Err(TokenValidationError::EmptyToken);
        }
        if token.trim() != token {
            return Err(TokenValidationError::InvalidToken);
        }

        let parsed = Uuid::parse_str(&token).map_err(|_| TokenValidationError::InvalidToken)?;
        Ok(Self(parsed, token))
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for AnonymousToken {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for AnonymousToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<AnonymousToken> for String {
    fn from(value: AnonymousToken) -> Self {
        let AnonymousToken(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for AnonymousToken {
    type Error = TokenValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// A recorded like: one anonymous token endorsing one question.
///
/// ## Invariants
/// - At most one record exists per `(question_id, token)` pair. The storage
///   layer enforces this with a composite key; callers treat a duplicate
///   insert as "already liked", not as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeRecord {
    question_id: Uuid,
    token: AnonymousToken,
    created_at: DateTime<Utc>,
}

impl LikeRecord {
    /// Build a like record for the given question and token.
    pub fn new(question_id: Uuid, token: AnonymousToken, created_at: DateTime<Utc>) -> Self {
        Self {
            question_id,
            token,
            created_at,
        }
    }

    /// Question the like applies to.
    pub fn question_id(&self) -> Uuid {
        self.question_id
    }

    /// Token that recorded the like.
    pub fn token(&self) -> &AnonymousToken {
        &self.token
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
