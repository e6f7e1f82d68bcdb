//! Domain ports for the hexagonal boundary.
//!
//! Driving ports ([`BoardCommand`], [`BoardQuery`], [`ContentQuery`]) are
//! implemented by domain services and consumed by inbound adapters.
//! Driven ports ([`QuestionRepository`], [`ReplyRepository`],
//! [`LikeRepository`]) are implemented by outbound storage adapters.

mod board;
mod content_catalogue;
mod like_repository;
mod question_repository;
mod reply_repository;

pub use board::{
    BoardCommand, BoardQuery, FixtureBoardCommand, FixtureBoardQuery, LikeQuestionRequest,
    LikeQuestionResponse, ListQuestionsResponse, ListRepliesRequest, ListRepliesResponse,
    SubmitQuestionRequest, SubmitReplyRequest,
};
pub(crate) use board::{question_validation_error, reply_validation_error};
pub use content_catalogue::{BuiltinContentCatalogue, ContentQuery};
#[cfg(test)]
pub use like_repository::MockLikeRepository;
pub use like_repository::{FixtureLikeRepository, LikeInsertOutcome, LikeRepository};
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
pub use question_repository::{FixtureQuestionRepository, QuestionRepository};
#[cfg(test)]
pub use reply_repository::MockReplyRepository;
pub use reply_repository::{FixtureReplyRepository, ReplyRepository};

/// Storage errors raised by board repository adapters.
///
/// Two categories are distinguished because they map to different HTTP
/// outcomes: an unreachable store is retryable by the caller (503), a
/// failed query is not (500).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// Repository connection could not be established.
    #[error("board repository connection failed: {message}")]
    Connection {
        /// Underlying failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("board repository query failed: {message}")]
    Query {
        /// Underlying failure description.
        message: String,
    },
}

impl RepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}
