//! Port for reply persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Reply;

use super::RepositoryError;

/// Port for writing and reading question replies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Persist a new reply.
    async fn insert(&self, reply: &Reply) -> Result<(), RepositoryError>;

    /// Read all replies for a question, oldest-first.
    async fn list_for_question(&self, question_id: &Uuid) -> Result<Vec<Reply>, RepositoryError>;
}

/// Fixture implementation for wiring without a database.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReplyRepository;

#[async_trait]
impl ReplyRepository for FixtureReplyRepository {
    async fn insert(&self, _reply: &Reply) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn list_for_question(&self, _question_id: &Uuid) -> Result<Vec<Reply>, RepositoryError> {
        Ok(Vec::new())
    }
}
