//! Like HTTP handlers.
//!
//! ```text
//! POST /api/v1/questions/{id}/likes
//! ```
//!
//! The client presents its persisted anonymous token in the
//! `X-Anon-Token` header; one like is recorded per (question, token) pair.

use actix_web::{HttpRequest, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{LikeQuestionRequest, LikeQuestionResponse};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, anon_token_from_request, parse_uuid};

/// Response payload for recording a like.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponseBody {
    /// Question that was liked.
    #[schema(format = "uuid")]
    pub question_id: String,
    /// Upvote count after this like was recorded.
    pub upvote_count: u32,
}

/// Record an anonymous like for a question.
///
/// A repeated like from the same token is rejected with 409 and the stable
/// detail code `already_liked`; nothing is inserted on that path.
#[utoipa::path(
    post,
    path = "/api/v1/questions/{id}/likes",
    params(
        ("id" = String, Path, description = "Question identifier"),
        ("X-Anon-Token" = String, Header, description = "Client-persisted anonymous token")
    ),
    responses(
        (status = 200, description = "Like recorded", body = LikeResponseBody),
        (status = 400, description = "Invalid request", body = crate::domain::Error),
        (status = 404, description = "Question not found", body = crate::domain::Error),
        (status = 409, description = "Already liked from this token", body = crate::domain::Error)
    ),
    tags = ["board"],
    operation_id = "likeQuestion"
)]
#[post("/questions/{id}/likes")]
pub async fn like_question(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> ApiResult<web::Json<LikeResponseBody>> {
    let question_id = parse_uuid(&path.into_inner(), FieldName::new("id"))?;
    let token = anon_token_from_request(&req)?;

    let LikeQuestionResponse { upvote_count } = state
        .board
        .like_question(LikeQuestionRequest { question_id, token })
        .await?;

    Ok(web::Json(LikeResponseBody {
        question_id: question_id.to_string(),
        upvote_count,
    }))
}

#[cfg(test)]
mod tests {
    //! Tests for like HTTP handlers against fixture ports.

    use actix_web::{App, http::StatusCode, test as actix_test, web};
    use serde_json::Value;

    use super::*;
    use crate::inbound::http::validation::ANON_TOKEN_HEADER;

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(HttpState::fixtures()))
            .service(web::scope("/api/v1").service(like_question))
    }

    #[actix_web::test]
    async fn like_requires_the_token_header() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/questions/3fa85f64-5717-4562-b3fc-2c963f66afa6/likes")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["details"]["code"], "missing_header");
    }

    #[actix_web::test]
    async fn like_returns_the_new_upvote_count() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/questions/3fa85f64-5717-4562-b3fc-2c963f66afa6/likes")
            .insert_header((ANON_TOKEN_HEADER, "00000000-0000-0000-0000-000000000007"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["upvoteCount"], 1);
        assert_eq!(
            body["questionId"],
            "3fa85f64-5717-4562-b3fc-2c963f66afa6"
        );
    }

    #[actix_web::test]
    async fn like_rejects_malformed_token() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/questions/3fa85f64-5717-4562-b3fc-2c963f66afa6/likes")
            .insert_header((ANON_TOKEN_HEADER, "definitely-not-a-uuid"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
