//! PostgreSQL-backed [`LikeRepository`] implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{LikeInsertOutcome, LikeRepository, RepositoryError};
use crate::domain::{AnonymousToken, LikeRecord};

use super::models::NewLikeRow;
use super::pool::DbPool;
use super::schema::question_likes;
use super::{map_diesel_error, map_pool_error};

/// Diesel-backed implementation of the [`LikeRepository`] port.
///
/// The table's composite primary key on `(question_id, anon_token)` makes
/// the at-most-one-like invariant a storage guarantee: a raced duplicate
/// insert touches zero rows and is reported as
/// [`LikeInsertOutcome::AlreadyLiked`].
#[derive(Clone)]
pub struct DieselLikeRepository {
    pool: DbPool,
}

impl DieselLikeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for DieselLikeRepository {
    async fn exists(
        &self,
        question_id: &Uuid,
        token: &AnonymousToken,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            question_likes::table
                .filter(question_likes::question_id.eq(question_id))
                .filter(question_likes::anon_token.eq(token.as_uuid())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn insert(&self, like: &LikeRecord) -> Result<LikeInsertOutcome, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let inserted = diesel::insert_into(question_likes::table)
            .values(NewLikeRow::from_domain(like))
            .on_conflict_do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if inserted == 0 {
            Ok(LikeInsertOutcome::AlreadyLiked)
        } else {
            Ok(LikeInsertOutcome::Recorded)
        }
    }
}
