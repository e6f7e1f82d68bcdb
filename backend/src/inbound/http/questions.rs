//! Question HTTP handlers.
//!
//! ```text
//! GET  /api/v1/questions
//! POST /api/v1/questions
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Question;
use crate::domain::ports::SubmitQuestionRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_category;

/// Request payload for posting a question.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequestBody {
    /// Question title.
    #[schema(example = "How do I come out to my family?")]
    pub title: String,
    /// Question body with more detail.
    pub body: String,
    /// Category identifier from the fixed set, kebab-case.
    #[schema(example = "coming-out")]
    pub category: String,
}

/// A question as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponseBody {
    /// Stable question identifier.
    #[schema(format = "uuid")]
    pub id: String,
    /// Question title.
    pub title: String,
    /// Question body.
    pub body: String,
    /// Category identifier, kebab-case.
    pub category: String,
    /// Number of replies.
    pub reply_count: u32,
    /// Number of anonymous likes.
    pub upvote_count: u32,
    /// Creation timestamp, RFC 3339.
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<Question> for QuestionResponseBody {
    fn from(value: Question) -> Self {
        Self {
            id: value.id().to_string(),
            title: value.title().to_owned(),
            body: value.body().to_owned(),
            category: value.category().to_string(),
            reply_count: value.reply_count(),
            upvote_count: value.upvote_count(),
            created_at: value.created_at().to_rfc3339(),
        }
    }
}

/// Response payload for listing questions.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListResponseBody {
    /// All questions, newest first.
    pub questions: Vec<QuestionResponseBody>,
}

/// List all questions, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/questions",
    responses(
        (status = 200, description = "Questions, newest first", body = QuestionListResponseBody),
        (status = 503, description = "Storage unavailable", body = crate::domain::Error),
        (status = 500, description = "Internal server error", body = crate::domain::Error)
    ),
    tags = ["board"],
    operation_id = "listQuestions"
)]
#[get("/questions")]
pub async fn list_questions(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<QuestionListResponseBody>> {
    let response = state.board_query.list_questions().await?;

    Ok(web::Json(QuestionListResponseBody {
        questions: response
            .questions
            .into_iter()
            .map(QuestionResponseBody::from)
            .collect(),
    }))
}

/// Post a new anonymous question.
///
/// Title, body, and a category from the fixed set are required; validation
/// failures are rejected before any storage call.
#[utoipa::path(
    post,
    path = "/api/v1/questions",
    request_body = CreateQuestionRequestBody,
    responses(
        (status = 200, description = "Question created", body = QuestionResponseBody),
        (status = 400, description = "Invalid request", body = crate::domain::Error),
        (status = 503, description = "Storage unavailable", body = crate::domain::Error)
    ),
    tags = ["board"],
    operation_id = "createQuestion"
)]
#[post("/questions")]
pub async fn create_question(
    state: web::Data<HttpState>,
    payload: web::Json<CreateQuestionRequestBody>,
) -> ApiResult<web::Json<QuestionResponseBody>> {
    let CreateQuestionRequestBody {
        title,
        body,
        category,
    } = payload.into_inner();
    let category = parse_category(&category)?;

    let question = state
        .board
        .submit_question(SubmitQuestionRequest {
            title,
            body,
            category,
        })
        .await?;

    Ok(web::Json(QuestionResponseBody::from(question)))
}
