//! PostgreSQL-backed [`ReplyRepository`] implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::Reply;
use crate::domain::ports::{ReplyRepository, RepositoryError};

use super::models::{NewReplyRow, ReplyRow, row_to_reply};
use super::pool::DbPool;
use super::schema::replies;
use super::{map_diesel_error, map_pool_error};

/// Diesel-backed implementation of the [`ReplyRepository`] port.
#[derive(Clone)]
pub struct DieselReplyRepository {
    pool: DbPool,
}

impl DieselReplyRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for DieselReplyRepository {
    async fn insert(&self, reply: &Reply) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(replies::table)
            .values(NewReplyRow::from_domain(reply))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list_for_question(&self, question_id: &Uuid) -> Result<Vec<Reply>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ReplyRow> = replies::table
            .filter(replies::question_id.eq(question_id))
            .order(replies::created_at.asc())
            .select(ReplyRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_reply).collect())
    }
}
