//! Driving ports for the anonymous Q&A board.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::domain::{
    AnonymousToken, Category, Error, Question, QuestionDraft, Reply, ReplyDraft,
};

/// Request payload for [`BoardCommand::submit_question`].
#[derive(Debug, Clone)]
pub struct SubmitQuestionRequest {
    /// Title as submitted, validated by the domain.
    pub title: String,
    /// Body as submitted, validated by the domain.
    pub body: String,
    /// Category from the fixed set.
    pub category: Category,
}

/// Request payload for [`BoardCommand::submit_reply`].
#[derive(Debug, Clone)]
pub struct SubmitReplyRequest {
    /// Target question.
    pub question_id: Uuid,
    /// Reply content as submitted, validated by the domain.
    pub content: String,
}

/// Request payload for [`BoardCommand::like_question`].
#[derive(Debug, Clone)]
pub struct LikeQuestionRequest {
    /// Target question.
    pub question_id: Uuid,
    /// Client-persisted anonymous token.
    pub token: AnonymousToken,
}

/// Response payload for [`BoardCommand::like_question`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeQuestionResponse {
    /// Upvote count after the like was recorded.
    pub upvote_count: u32,
}

/// Response payload for [`BoardQuery::list_questions`].
#[derive(Debug, Clone)]
pub struct ListQuestionsResponse {
    /// All questions, newest first.
    pub questions: Vec<Question>,
}

/// Request payload for [`BoardQuery::list_replies`].
#[derive(Debug, Clone)]
pub struct ListRepliesRequest {
    /// Question whose replies are requested.
    pub question_id: Uuid,
}

/// Response payload for [`BoardQuery::list_replies`].
#[derive(Debug, Clone)]
pub struct ListRepliesResponse {
    /// Replies in submission order.
    pub replies: Vec<Reply>,
}

/// Driving port for board mutations.
#[async_trait]
pub trait BoardCommand: Send + Sync {
    /// Validate and persist a new question.
    async fn submit_question(&self, request: SubmitQuestionRequest) -> Result<Question, Error>;

    /// Validate and persist a reply, bumping the question's reply counter.
    async fn submit_reply(&self, request: SubmitReplyRequest) -> Result<Reply, Error>;

    /// Record a like unless the token already liked the question.
    async fn like_question(
        &self,
        request: LikeQuestionRequest,
    ) -> Result<LikeQuestionResponse, Error>;
}

/// Driving port for board reads.
#[async_trait]
pub trait BoardQuery: Send + Sync {
    /// List all questions, newest first.
    async fn list_questions(&self) -> Result<ListQuestionsResponse, Error>;

    /// List replies for a question.
    async fn list_replies(&self, request: ListRepliesRequest)
    -> Result<ListRepliesResponse, Error>;
}

/// Map a domain validation failure on the question submission path.
pub(crate) fn question_validation_error(
    err: crate::domain::QuestionValidationError,
) -> Error {
    use crate::domain::QuestionValidationError as V;
    let field = match err {
        V::EmptyTitle | V::TitleTooLong { .. } => "title",
        V::EmptyBody | V::BodyTooLong { .. } => "body",
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field }))
}

/// Map a domain validation failure on the reply submission path.
pub(crate) fn reply_validation_error(err: crate::domain::ReplyValidationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({ "field": "content" }))
}

/// Fixture command implementation: validates input and fabricates results
/// without touching storage. Used when no database is configured and by
/// handler tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBoardCommand;

#[async_trait]
impl BoardCommand for FixtureBoardCommand {
    async fn submit_question(&self, request: SubmitQuestionRequest) -> Result<Question, Error> {
        Question::new(QuestionDraft {
            id: Uuid::new_v4(),
            title: request.title,
            body: request.body,
            category: request.category,
            created_at: Utc::now(),
        })
        .map_err(question_validation_error)
    }

    async fn submit_reply(&self, request: SubmitReplyRequest) -> Result<Reply, Error> {
        Reply::new(ReplyDraft {
            id: Uuid::new_v4(),
            question_id: request.question_id,
            content: request.content,
            created_at: Utc::now(),
        })
        .map_err(reply_validation_error)
    }

    async fn like_question(
        &self,
        _request: LikeQuestionRequest,
    ) -> Result<LikeQuestionResponse, Error> {
        Ok(LikeQuestionResponse { upvote_count: 1 })
    }
}

/// Fixture query implementation: an empty board.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBoardQuery;

#[async_trait]
impl BoardQuery for FixtureBoardQuery {
    async fn list_questions(&self) -> Result<ListQuestionsResponse, Error> {
        Ok(ListQuestionsResponse {
            questions: Vec::new(),
        })
    }

    async fn list_replies(
        &self,
        _request: ListRepliesRequest,
    ) -> Result<ListRepliesResponse, Error> {
        Ok(ListRepliesResponse {
            replies: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    #[tokio::test]
    async fn fixture_submit_question_honours_validation() {
        let command = FixtureBoardCommand;
        let err = command
            .submit_question(SubmitQuestionRequest {
                title: "  ".to_owned(),
                body: "something".to_owned(),
                category: Category::Support,
            })
            .await
            .expect_err("blank title rejected");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_submit_question_returns_fresh_question() {
        let command = FixtureBoardCommand;
        let question = command
            .submit_question(SubmitQuestionRequest {
                title: "Finding LGBTQ+ friends".to_owned(),
                body: "How can I meet people?".to_owned(),
                category: Category::Community,
            })
            .await
            .expect("fixture submit");
        assert_eq!(question.reply_count(), 0);
        assert_eq!(question.category(), Category::Community);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_query_lists_empty_board() {
        let query = FixtureBoardQuery;
        let response = query.list_questions().await.expect("fixture list");
        assert!(response.questions.is_empty());
    }
}
