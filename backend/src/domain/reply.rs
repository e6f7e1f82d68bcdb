//! Replies to board questions.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Maximum length of a reply in characters.
pub const REPLY_MAX: usize = 4000;

/// Validation errors raised while constructing a [`Reply`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplyValidationError {
    /// The content was empty after trimming.
    #[error("reply content must not be empty")]
    EmptyContent,
    /// The content exceeded [`REPLY_MAX`] characters.
    #[error("reply content must be at most {max} characters")]
    ContentTooLong {
        /// Permitted maximum.
        max: usize,
    },
}

/// Input payload for [`Reply::new`].
#[derive(Debug, Clone)]
pub struct ReplyDraft {
    /// Identifier assigned by the caller.
    pub id: Uuid,
    /// Question the reply belongs to.
    pub question_id: Uuid,
    /// Reply content as submitted.
    pub content: String,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A reply to a question. Immutable once created.
///
/// ## Invariants
/// - `content` is non-empty once trimmed and at most [`REPLY_MAX`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    id: Uuid,
    question_id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
}

impl Reply {
    /// Creates a validated reply.
    pub fn new(draft: ReplyDraft) -> Result<Self, ReplyValidationError> {
        let ReplyDraft {
            id,
            question_id,
            content,
            created_at,
        } = draft;

        if content.trim().is_empty() {
            return Err(ReplyValidationError::EmptyContent);
        }
        if content.chars().count() > REPLY_MAX {
            return Err(ReplyValidationError::ContentTooLong { max: REPLY_MAX });
        }

        Ok(Self {
            id,
            question_id,
            content,
            created_at,
        })
    }

    /// Reconstruct a reply from storage without re-validating content.
    pub fn from_stored(draft: ReplyDraft) -> Self {
        Self {
            id: draft.id,
            question_id: draft.question_id,
            content: draft.content,
            created_at: draft.created_at,
        }
    }

    /// Stable reply identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Identifier of the question this reply belongs to.
    pub fn question_id(&self) -> Uuid {
        self.question_id
    }

    /// Reply content.
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn draft(content: &str) -> ReplyDraft {
        ReplyDraft {
            id: Uuid::new_v4(),
            question_id: Uuid::new_v4(),
            content: content.to_owned(),
            created_at: Utc::now(),
        }
    }

    #[rstest]
    fn valid_reply_is_accepted() {
        let reply = Reply::new(draft("You are not alone.")).expect("valid reply");
        assert_eq!(reply.content(), "You are not alone.");
    }

    #[rstest]
    #[case("")]
    #[case("   \n")]
    fn blank_content_is_rejected(#[case] content: &str) {
        let err = Reply::new(draft(content)).expect_err("content must be rejected");
        assert_eq!(err, ReplyValidationError::EmptyContent);
    }

    #[rstest]
    fn over_long_content_is_rejected() {
        let content = "r".repeat(REPLY_MAX + 1);
        let err = Reply::new(draft(&content)).expect_err("too long");
        assert_eq!(err, ReplyValidationError::ContentTooLong { max: REPLY_MAX });
    }
}
