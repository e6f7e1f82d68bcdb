//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: board, content, and health endpoints from the inbound layer
//! - **Schemas**: request/response bodies and the shared error envelope
//!
//! The generated specification is served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{
    CommunityEvent, CrisisLine, Error, ErrorCode, EventKind, ResourceCollection, ResourceLink,
};
use crate::inbound::http::likes::LikeResponseBody;
use crate::inbound::http::questions::{
    CreateQuestionRequestBody, QuestionListResponseBody, QuestionResponseBody,
};
use crate::inbound::http::replies::{
    CreateReplyRequestBody, ReplyListResponseBody, ReplyResponseBody,
};
use crate::inbound::http::tokens::AnonTokenResponseBody;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SafeSpace backend API",
        description = "Anonymous Q&A board and curated support content for the SafeSpace community site."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::questions::list_questions,
        crate::inbound::http::questions::create_question,
        crate::inbound::http::replies::list_replies,
        crate::inbound::http::replies::create_reply,
        crate::inbound::http::likes::like_question,
        crate::inbound::http::tokens::mint_anon_token,
        crate::inbound::http::content::list_crisis_lines,
        crate::inbound::http::content::list_resource_collections,
        crate::inbound::http::content::list_events,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        QuestionResponseBody,
        QuestionListResponseBody,
        CreateQuestionRequestBody,
        ReplyResponseBody,
        ReplyListResponseBody,
        CreateReplyRequestBody,
        LikeResponseBody,
        AnonTokenResponseBody,
        CrisisLine,
        ResourceLink,
        ResourceCollection,
        CommunityEvent,
        EventKind,
    )),
    tags(
        (name = "board", description = "Anonymous Q&A board operations"),
        (name = "content", description = "Curated support content"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
