//! Row types mapping Diesel tables to and from domain entities.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use tracing::warn;
use uuid::Uuid;

use crate::domain::{Category, LikeRecord, Question, QuestionDraft, Reply, ReplyDraft};

use super::schema::{question_likes, questions, replies};

/// Read model for the `questions` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = questions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct QuestionRow {
    /// Primary key.
    pub id: Uuid,
    /// Question title.
    pub title: String,
    /// Question body.
    pub body: String,
    /// Category identifier, kebab-case.
    pub category: String,
    /// Denormalised reply counter.
    pub reply_count: i32,
    /// Denormalised upvote counter.
    pub upvote_count: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for the `questions` table.
#[derive(Debug, Insertable)]
#[diesel(table_name = questions)]
pub struct NewQuestionRow<'a> {
    /// Primary key.
    pub id: Uuid,
    /// Question title.
    pub title: &'a str,
    /// Question body.
    pub body: &'a str,
    /// Category identifier, kebab-case.
    pub category: &'a str,
    /// Denormalised reply counter.
    pub reply_count: i32,
    /// Denormalised upvote counter.
    pub upvote_count: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl<'a> NewQuestionRow<'a> {
    /// Build an insert row from a domain question.
    pub fn from_domain(question: &'a Question) -> Self {
        Self {
            id: question.id(),
            title: question.title(),
            body: question.body(),
            category: question.category().as_str(),
            reply_count: cast_counter_for_db(question.reply_count()),
            upvote_count: cast_counter_for_db(question.upvote_count()),
            created_at: question.created_at(),
        }
    }
}

/// Read model for the `replies` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = replies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReplyRow {
    /// Primary key.
    pub id: Uuid,
    /// Question this reply belongs to.
    pub question_id: Uuid,
    /// Reply content.
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for the `replies` table.
#[derive(Debug, Insertable)]
#[diesel(table_name = replies)]
pub struct NewReplyRow<'a> {
    /// Primary key.
    pub id: Uuid,
    /// Question this reply belongs to.
    pub question_id: Uuid,
    /// Reply content.
    pub content: &'a str,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl<'a> NewReplyRow<'a> {
    /// Build an insert row from a domain reply.
    pub fn from_domain(reply: &'a Reply) -> Self {
        Self {
            id: reply.id(),
            question_id: reply.question_id(),
            content: reply.content(),
            created_at: reply.created_at(),
        }
    }
}

/// Insert model for the `question_likes` table.
#[derive(Debug, Insertable)]
#[diesel(table_name = question_likes)]
pub struct NewLikeRow {
    /// Question the like applies to.
    pub question_id: Uuid,
    /// Anonymous token that recorded the like.
    pub anon_token: Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl NewLikeRow {
    /// Build an insert row from a domain like record.
    pub fn from_domain(like: &LikeRecord) -> Self {
        Self {
            question_id: like.question_id(),
            anon_token: *like.token().as_uuid(),
            created_at: like.created_at(),
        }
    }
}

/// Cast a domain counter (u32) to its database representation (i32).
#[expect(
    clippy::cast_possible_wrap,
    reason = "board counters stay far below i32::MAX"
)]
fn cast_counter_for_db(counter: u32) -> i32 {
    counter as i32
}

/// Cast a database counter (i32) to its domain representation (u32).
#[expect(
    clippy::cast_sign_loss,
    reason = "counters are never negative in the database"
)]
pub(super) fn cast_counter_from_db(counter: i32) -> u32 {
    counter as u32
}

/// Convert a database row to a domain question.
///
/// An unrecognised category value is logged and mapped to
/// [`Category::Support`] so one bad row cannot take the whole list down.
pub fn row_to_question(row: QuestionRow) -> Question {
    let category = match row.category.parse::<Category>() {
        Ok(category) => category,
        Err(err) => {
            warn!(
                value = err.value,
                question_id = %row.id,
                "unrecognised category value, defaulting to support"
            );
            Category::Support
        }
    };

    Question::from_stored(
        QuestionDraft {
            id: row.id,
            title: row.title,
            body: row.body,
            category,
            created_at: row.created_at,
        },
        cast_counter_from_db(row.reply_count),
        cast_counter_from_db(row.upvote_count),
    )
}

/// Convert a database row to a domain reply.
pub fn row_to_reply(row: ReplyRow) -> Reply {
    Reply::from_stored(ReplyDraft {
        id: row.id,
        question_id: row.question_id,
        content: row.content,
        created_at: row.created_at,
    })
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    fn question_row(category: &str) -> QuestionRow {
        QuestionRow {
            id: Uuid::new_v4(),
            title: "Dealing with school bullying".to_owned(),
            body: "What can I do?".to_owned(),
            category: category.to_owned(),
            reply_count: 15,
            upvote_count: 31,
            created_at: Utc::now(),
        }
    }

    #[rstest]
    fn row_to_question_converts_counters() {
        let question = row_to_question(question_row("support"));
        assert_eq!(question.reply_count(), 15);
        assert_eq!(question.upvote_count(), 31);
        assert_eq!(question.category(), Category::Support);
    }

    #[rstest]
    fn row_to_question_defaults_unknown_category() {
        let question = row_to_question(question_row("astrology"));
        assert_eq!(question.category(), Category::Support);
    }

    #[rstest]
    fn new_question_row_mirrors_domain_values() {
        let question = Question::from_stored(
            QuestionDraft {
                id: Uuid::new_v4(),
                title: "Finding LGBTQ+ friends".to_owned(),
                body: "How can I meet people?".to_owned(),
                category: Category::Community,
                created_at: Utc::now(),
            },
            20,
            42,
        );
        let row = NewQuestionRow::from_domain(&question);
        assert_eq!(row.category, "community");
        assert_eq!(row.reply_count, 20);
        assert_eq!(row.upvote_count, 42);
    }

    #[rstest]
    fn new_like_row_copies_the_token_uuid() {
        use crate::domain::AnonymousToken;

        let token = AnonymousToken::mint();
        let like = LikeRecord::new(Uuid::new_v4(), token.clone(), Utc::now());
        let row = NewLikeRow::from_domain(&like);
        assert_eq!(row.anon_token, *token.as_uuid());
    }
}
