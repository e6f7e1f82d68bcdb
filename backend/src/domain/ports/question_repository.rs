//! Port for question persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Question;

use super::RepositoryError;

/// Port for writing and reading board questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Persist a new question.
    async fn insert(&self, question: &Question) -> Result<(), RepositoryError>;

    /// Find a question by id.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Question>, RepositoryError>;

    /// Read all questions ordered newest-first.
    async fn list_newest_first(&self) -> Result<Vec<Question>, RepositoryError>;

    /// Increment the denormalised reply counter for a question.
    async fn increment_reply_count(&self, id: &Uuid) -> Result<(), RepositoryError>;

    /// Increment the denormalised upvote counter, returning the new value.
    async fn increment_upvote_count(&self, id: &Uuid) -> Result<u32, RepositoryError>;
}

/// Fixture implementation for wiring without a database: an empty board.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureQuestionRepository;

#[async_trait]
impl QuestionRepository for FixtureQuestionRepository {
    async fn insert(&self, _question: &Question) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn find_by_id(&self, _id: &Uuid) -> Result<Option<Question>, RepositoryError> {
        Ok(None)
    }

    async fn list_newest_first(&self) -> Result<Vec<Question>, RepositoryError> {
        Ok(Vec::new())
    }

    async fn increment_reply_count(&self, _id: &Uuid) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn increment_upvote_count(&self, _id: &Uuid) -> Result<u32, RepositoryError> {
        Ok(1)
    }
}
