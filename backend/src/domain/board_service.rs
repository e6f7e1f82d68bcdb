//! Question board domain service.
//!
//! Implements the board driving ports over the repository ports. All
//! validation happens here, before any storage call, so a rejected
//! submission never reaches the repositories.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use uuid::Uuid;

use crate::domain::ports::{
    BoardCommand, BoardQuery, LikeInsertOutcome, LikeQuestionRequest, LikeQuestionResponse,
    LikeRepository, ListQuestionsResponse, ListRepliesRequest, ListRepliesResponse,
    QuestionRepository, ReplyRepository, RepositoryError, SubmitQuestionRequest,
    SubmitReplyRequest, question_validation_error, reply_validation_error,
};
use crate::domain::{Error, LikeRecord, Question, QuestionDraft, Reply, ReplyDraft};

fn map_repository_error(error: RepositoryError) -> Error {
    match error {
        RepositoryError::Connection { message } => {
            Error::service_unavailable(format!("board storage unavailable: {message}"))
        }
        RepositoryError::Query { message } => {
            Error::internal(format!("board storage error: {message}"))
        }
    }
}

fn already_liked_error(question_id: Uuid) -> Error {
    Error::conflict("this question was already liked from this browser").with_details(json!({
        "code": "already_liked",
        "questionId": question_id,
    }))
}

/// Board service implementing [`BoardCommand`] and [`BoardQuery`].
#[derive(Clone)]
pub struct QuestionBoard<Q, R, L> {
    questions: Arc<Q>,
    replies: Arc<R>,
    likes: Arc<L>,
    clock: Arc<dyn Clock>,
}

impl<Q, R, L> QuestionBoard<Q, R, L> {
    /// Create a board service over the given repositories.
    pub fn new(questions: Arc<Q>, replies: Arc<R>, likes: Arc<L>, clock: Arc<dyn Clock>) -> Self {
        Self {
            questions,
            replies,
            likes,
            clock,
        }
    }
}

impl<Q, R, L> QuestionBoard<Q, R, L>
where
    Q: QuestionRepository,
{
    async fn require_question(&self, question_id: Uuid) -> Result<Question, Error> {
        self.questions
            .find_by_id(&question_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("question {question_id} not found")))
    }
}

#[async_trait]
impl<Q, R, L> BoardCommand for QuestionBoard<Q, R, L>
where
    Q: QuestionRepository,
    R: ReplyRepository,
    L: LikeRepository,
{
    async fn submit_question(&self, request: SubmitQuestionRequest) -> Result<Question, Error> {
        let question = Question::new(QuestionDraft {
            id: Uuid::new_v4(),
            title: request.title,
            body: request.body,
            category: request.category,
            created_at: self.clock.utc(),
        })
        .map_err(question_validation_error)?;

        self.questions
            .insert(&question)
            .await
            .map_err(map_repository_error)?;

        Ok(question)
    }

    async fn submit_reply(&self, request: SubmitReplyRequest) -> Result<Reply, Error> {
        let reply = Reply::new(ReplyDraft {
            id: Uuid::new_v4(),
            question_id: request.question_id,
            content: request.content,
            created_at: self.clock.utc(),
        })
        .map_err(reply_validation_error)?;

        self.require_question(request.question_id).await?;

        self.replies
            .insert(&reply)
            .await
            .map_err(map_repository_error)?;
        self.questions
            .increment_reply_count(&request.question_id)
            .await
            .map_err(map_repository_error)?;

        Ok(reply)
    }

    async fn like_question(
        &self,
        request: LikeQuestionRequest,
    ) -> Result<LikeQuestionResponse, Error> {
        let LikeQuestionRequest { question_id, token } = request;

        self.require_question(question_id).await?;

        // Fast path: report a duplicate before attempting the insert. The
        // storage key still catches the race this check cannot.
        let already_liked = self
            .likes
            .exists(&question_id, &token)
            .await
            .map_err(map_repository_error)?;
        if already_liked {
            return Err(already_liked_error(question_id));
        }

        let like = LikeRecord::new(question_id, token, self.clock.utc());
        match self
            .likes
            .insert(&like)
            .await
            .map_err(map_repository_error)?
        {
            LikeInsertOutcome::AlreadyLiked => Err(already_liked_error(question_id)),
            LikeInsertOutcome::Recorded => {
                let upvote_count = self
                    .questions
                    .increment_upvote_count(&question_id)
                    .await
                    .map_err(map_repository_error)?;
                Ok(LikeQuestionResponse { upvote_count })
            }
        }
    }
}

#[async_trait]
impl<Q, R, L> BoardQuery for QuestionBoard<Q, R, L>
where
    Q: QuestionRepository,
    R: ReplyRepository,
    L: LikeRepository,
{
    async fn list_questions(&self) -> Result<ListQuestionsResponse, Error> {
        let questions = self
            .questions
            .list_newest_first()
            .await
            .map_err(map_repository_error)?;
        Ok(ListQuestionsResponse { questions })
    }

    async fn list_replies(
        &self,
        request: ListRepliesRequest,
    ) -> Result<ListRepliesResponse, Error> {
        self.require_question(request.question_id).await?;

        let replies = self
            .replies
            .list_for_question(&request.question_id)
            .await
            .map_err(map_repository_error)?;
        Ok(ListRepliesResponse { replies })
    }
}

#[cfg(test)]
#[path = "board_service_tests.rs"]
mod tests;
