//! Anonymous token minting.
//!
//! ```text
//! POST /api/v1/anon-token
//! ```
//!
//! Clients persist the returned token locally and present it in
//! `X-Anon-Token` when liking. The server stores nothing about a minted
//! token until a like is recorded with it.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::AnonymousToken;
use crate::inbound::http::ApiResult;

/// Response payload carrying a freshly minted token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnonTokenResponseBody {
    /// Opaque anonymous token for the client to persist.
    #[schema(format = "uuid")]
    pub token: String,
}

/// Mint a fresh anonymous token.
#[utoipa::path(
    post,
    path = "/api/v1/anon-token",
    responses(
        (status = 200, description = "Token minted", body = AnonTokenResponseBody)
    ),
    tags = ["board"],
    operation_id = "mintAnonToken"
)]
#[post("/anon-token")]
pub async fn mint_anon_token() -> ApiResult<web::Json<AnonTokenResponseBody>> {
    Ok(web::Json(AnonTokenResponseBody {
        token: AnonymousToken::mint().to_string(),
    }))
}
