//! Port for anonymous like persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{AnonymousToken, LikeRecord};

use super::RepositoryError;

/// Result of attempting to insert a like record.
///
/// A duplicate `(question, token)` pair is an expected outcome, not an
/// error: the pre-insert existence check has a race window, and the
/// storage key closes it by reporting the collision here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeInsertOutcome {
    /// The like was recorded.
    Recorded,
    /// A like for this `(question, token)` pair already existed.
    AlreadyLiked,
}

/// Port for recording and checking anonymous likes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Report whether a like exists for the `(question, token)` pair.
    async fn exists(
        &self,
        question_id: &Uuid,
        token: &AnonymousToken,
    ) -> Result<bool, RepositoryError>;

    /// Insert a like record, reporting a duplicate as
    /// [`LikeInsertOutcome::AlreadyLiked`].
    async fn insert(&self, like: &LikeRecord) -> Result<LikeInsertOutcome, RepositoryError>;
}

/// Fixture implementation for wiring without a database: records nothing
/// and never reports a duplicate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLikeRepository;

#[async_trait]
impl LikeRepository for FixtureLikeRepository {
    async fn exists(
        &self,
        _question_id: &Uuid,
        _token: &AnonymousToken,
    ) -> Result<bool, RepositoryError> {
        Ok(false)
    }

    async fn insert(&self, _like: &LikeRecord) -> Result<LikeInsertOutcome, RepositoryError> {
        Ok(LikeInsertOutcome::Recorded)
    }
}
