//! Reply HTTP handlers.
//!
//! ```text
//! GET  /api/v1/questions/{id}/replies
//! POST /api/v1/questions/{id}/replies
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Reply;
use crate::domain::ports::{ListRepliesRequest, SubmitReplyRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

/// Request payload for posting a reply.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReplyRequestBody {
    /// Reply content.
    pub content: String,
}

/// A reply as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplyResponseBody {
    /// Stable reply identifier.
    #[schema(format = "uuid")]
    pub id: String,
    /// Question the reply belongs to.
    #[schema(format = "uuid")]
    pub question_id: String,
    /// Reply content.
    pub content: String,
    /// Creation timestamp, RFC 3339.
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<Reply> for ReplyResponseBody {
    fn from(value: Reply) -> Self {
        Self {
            id: value.id().to_string(),
            question_id: value.question_id().to_string(),
            content: value.content().to_owned(),
            created_at: value.created_at().to_rfc3339(),
        }
    }
}

/// Response payload for listing replies.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplyListResponseBody {
    /// Replies in submission order.
    pub replies: Vec<ReplyResponseBody>,
}

/// List replies for a question.
#[utoipa::path(
    get,
    path = "/api/v1/questions/{id}/replies",
    params(("id" = String, Path, description = "Question identifier")),
    responses(
        (status = 200, description = "Replies in submission order", body = ReplyListResponseBody),
        (status = 400, description = "Invalid question id", body = crate::domain::Error),
        (status = 404, description = "Question not found", body = crate::domain::Error)
    ),
    tags = ["board"],
    operation_id = "listReplies"
)]
#[get("/questions/{id}/replies")]
pub async fn list_replies(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ReplyListResponseBody>> {
    let question_id = parse_uuid(&path.into_inner(), FieldName::new("id"))?;

    let response = state
        .board_query
        .list_replies(ListRepliesRequest { question_id })
        .await?;

    Ok(web::Json(ReplyListResponseBody {
        replies: response
            .replies
            .into_iter()
            .map(ReplyResponseBody::from)
            .collect(),
    }))
}

/// Post a reply to a question.
///
/// On success the question's reply counter is incremented; the board list
/// is not reloaded here.
#[utoipa::path(
    post,
    path = "/api/v1/questions/{id}/replies",
    params(("id" = String, Path, description = "Question identifier")),
    request_body = CreateReplyRequestBody,
    responses(
        (status = 200, description = "Reply created", body = ReplyResponseBody),
        (status = 400, description = "Invalid request", body = crate::domain::Error),
        (status = 404, description = "Question not found", body = crate::domain::Error)
    ),
    tags = ["board"],
    operation_id = "createReply"
)]
#[post("/questions/{id}/replies")]
pub async fn create_reply(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CreateReplyRequestBody>,
) -> ApiResult<web::Json<ReplyResponseBody>> {
    let question_id = parse_uuid(&path.into_inner(), FieldName::new("id"))?;

    let reply = state
        .board
        .submit_reply(SubmitReplyRequest {
            question_id,
            content: payload.into_inner().content,
        })
        .await?;

    Ok(web::Json(ReplyResponseBody::from(reply)))
}
