//! PostgreSQL-backed [`QuestionRepository`] implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::Question;
use crate::domain::ports::{QuestionRepository, RepositoryError};

use super::models::{NewQuestionRow, QuestionRow, cast_counter_from_db, row_to_question};
use super::pool::DbPool;
use super::schema::questions;
use super::{map_diesel_error, map_pool_error};

/// Diesel-backed implementation of the [`QuestionRepository`] port.
///
/// Counter updates are relative SQL increments, so concurrent replies and
/// likes cannot lose updates to each other.
#[derive(Clone)]
pub struct DieselQuestionRepository {
    pool: DbPool,
}

impl DieselQuestionRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for DieselQuestionRepository {
    async fn insert(&self, question: &Question) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(questions::table)
            .values(NewQuestionRow::from_domain(question))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Question>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<QuestionRow> = questions::table
            .filter(questions::id.eq(id))
            .select(QuestionRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_question))
    }

    async fn list_newest_first(&self) -> Result<Vec<Question>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<QuestionRow> = questions::table
            .order(questions::created_at.desc())
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_question).collect())
    }

    async fn increment_reply_count(&self, id: &Uuid) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(questions::table.filter(questions::id.eq(id)))
            .set(questions::reply_count.eq(questions::reply_count + 1))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if updated == 0 {
            return Err(RepositoryError::query("question not found for counter update"));
        }
        Ok(())
    }

    async fn increment_upvote_count(&self, id: &Uuid) -> Result<u32, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_count: i32 = diesel::update(questions::table.filter(questions::id.eq(id)))
            .set(questions::upvote_count.eq(questions::upvote_count + 1))
            .returning(questions::upvote_count)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(cast_counter_from_db(new_count))
    }
}
