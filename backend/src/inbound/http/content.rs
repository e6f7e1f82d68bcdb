//! Curated content HTTP handlers.
//!
//! ```text
//! GET /api/v1/crisis-lines
//! GET /api/v1/resources
//! GET /api/v1/events
//! ```
//!
//! Read-only catalogue data rendered by the informational pages and the
//! site-wide crisis banner.

use actix_web::{get, web};

use crate::domain::{CommunityEvent, CrisisLine, ResourceCollection};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// List crisis support services, most urgent first.
#[utoipa::path(
    get,
    path = "/api/v1/crisis-lines",
    responses(
        (status = 200, description = "Crisis support services", body = [CrisisLine])
    ),
    tags = ["content"],
    operation_id = "listCrisisLines"
)]
#[get("/crisis-lines")]
pub async fn list_crisis_lines(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<CrisisLine>>> {
    Ok(web::Json(state.content.crisis_lines().await?))
}

/// List themed resource collections.
#[utoipa::path(
    get,
    path = "/api/v1/resources",
    responses(
        (status = 200, description = "Resource collections", body = [ResourceCollection])
    ),
    tags = ["content"],
    operation_id = "listResourceCollections"
)]
#[get("/resources")]
pub async fn list_resource_collections(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ResourceCollection>>> {
    Ok(web::Json(state.content.resource_collections().await?))
}

/// List upcoming community events in date order.
#[utoipa::path(
    get,
    path = "/api/v1/events",
    responses(
        (status = 200, description = "Upcoming community events", body = [CommunityEvent])
    ),
    tags = ["content"],
    operation_id = "listEvents"
)]
#[get("/events")]
pub async fn list_events(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<CommunityEvent>>> {
    Ok(web::Json(state.content.events().await?))
}
