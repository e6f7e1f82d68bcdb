//! Question aggregate for the anonymous Q&A board.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Maximum length of a question title in characters.
pub const TITLE_MAX: usize = 160;
/// Maximum length of a question body in characters.
pub const BODY_MAX: usize = 4000;

/// Validation errors raised while constructing a [`Question`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionValidationError {
    /// The title was empty after trimming.
    #[error("question title must not be empty")]
    EmptyTitle,
    /// The title exceeded [`TITLE_MAX`] characters.
    #[error("question title must be at most {max} characters")]
    TitleTooLong {
        /// Permitted maximum.
        max: usize,
    },
    /// The body was empty after trimming.
    #[error("question body must not be empty")]
    EmptyBody,
    /// The body exceeded [`BODY_MAX`] characters.
    #[error("question body must be at most {max} characters")]
    BodyTooLong {
        /// Permitted maximum.
        max: usize,
    },
}

/// Fixed set of categories a question may be filed under.
///
/// The set mirrors the topics the community site offers when submitting a
/// question; the wire format is kebab-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Coming out to family, friends, and yourself.
    ComingOut,
    /// General peer support.
    Support,
    /// Questions specific to trans experiences.
    TransIssues,
    /// Finding and building community.
    Community,
    /// Anxiety, depression, and other mental health topics.
    MentalHealth,
}

impl Category {
    /// All categories in presentation order.
    pub const ALL: [Category; 5] = [
        Category::ComingOut,
        Category::Support,
        Category::TransIssues,
        Category::Community,
        Category::MentalHealth,
    ];

    /// Kebab-case identifier used on the wire and in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::ComingOut => "coming-out",
            Category::Support => "support",
            Category::TransIssues => "trans-issues",
            Category::Community => "community",
            Category::MentalHealth => "mental-health",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {value}")]
pub struct CategoryParseError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CategoryParseError {
                value: s.to_owned(),
            })
    }
}

/// Input payload for [`Question::new`].
#[derive(Debug, Clone)]
pub struct QuestionDraft {
    /// Identifier assigned by the caller.
    pub id: Uuid,
    /// Question title as submitted.
    pub title: String,
    /// Question body as submitted.
    pub body: String,
    /// Category the question is filed under.
    pub category: Category,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A question on the anonymous board.
///
/// ## Invariants
/// - `title` is non-empty once trimmed and at most [`TITLE_MAX`] characters.
/// - `body` is non-empty once trimmed and at most [`BODY_MAX`] characters.
/// - `reply_count` and `upvote_count` are denormalised counters maintained
///   by the board service; they never decrease in the observed scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: Uuid,
    title: String,
    body: String,
    category: Category,
    reply_count: u32,
    upvote_count: u32,
    created_at: DateTime<Utc>,
}

impl Question {
    /// Creates a validated question with zeroed counters.
    pub fn new(draft: QuestionDraft) -> Result<Self, QuestionValidationError> {
        let QuestionDraft {
            id,
            title,
            body,
            category,
            created_at,
        } = draft;

        if title.trim().is_empty() {
            return Err(QuestionValidationError::EmptyTitle);
        }
        if title.chars().count() > TITLE_MAX {
            return Err(QuestionValidationError::TitleTooLong { max: TITLE_MAX });
        }
        if body.trim().is_empty() {
            return Err(QuestionValidationError::EmptyBody);
        }
        if body.chars().count() > BODY_MAX {
            return Err(QuestionValidationError::BodyTooLong { max: BODY_MAX });
        }

        Ok(Self {
            id,
            title,
            body,
            category,
            reply_count: 0,
            upvote_count: 0,
            created_at,
        })
    }

    /// Reconstruct a question from storage without re-validating content.
    ///
    /// Storage adapters own the persisted invariants; validation happens on
    /// the submission path.
    pub fn from_stored(draft: QuestionDraft, reply_count: u32, upvote_count: u32) -> Self {
        Self {
            id: draft.id,
            title: draft.title,
            body: draft.body,
            category: draft.category,
            reply_count,
            upvote_count,
            created_at: draft.created_at,
        }
    }

    /// Stable question identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Question title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Question body.
    pub fn body(&self) -> &str {
        self.body.as_str()
    }

    /// Category the question is filed under.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Number of replies recorded against this question.
    pub fn reply_count(&self) -> u32 {
        self.reply_count
    }

    /// Number of distinct anonymous likes recorded against this question.
    pub fn upvote_count(&self) -> u32 {
        self.upvote_count
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
