use crate::state::AppState;
use axum::Router;

pub mod docs;
pub mod health;
pub mod profile;
pub mod request;
pub mod subscribe;
pub mod testimonials;

pub fn build_router(app_state: &AppState) -> Router {
    Router::new()
        .nest("/api/health", health::create_router())
        .nest("/api/testimonials", testimonials::create_router())
        .nest(
            "/api/subscribe",
            subscribe::create_router().with_state(app_state.clone()),
        )
        .nest(
            "/api/request",
            request::create_router().with_state(app_state.clone()),
        )
        .nest(
            "/api/profile",
            profile::create_router().with_state(app_state.clone()),
        )
        .nest("/api/docs", docs::create_router())
}
