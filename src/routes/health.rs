use axum::{routing::get, Json, Router};
use utoipa::ToSchema;

/// Liveness payload.
#[derive(Debug, serde::Serialize, ToSchema)]
pub struct Health {
    ok: bool,
}

/// Create a router to serve health checks.
pub fn create_router() -> Router {
    Router::new().route("/", get(is_alive))
}

/// Simple liveness endpoint that always answers `{"ok": true}`.
/// Used to indicate when the webserver is up and running.
#[tracing::instrument]
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = OK, description = "Check if service is alive", body = Health))
)]
pub(crate) async fn is_alive() -> Json<Health> {
    tracing::debug!("Service is alive");
    Json(Health { ok: true })
}
