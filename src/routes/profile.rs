use crate::{
    domain::SubscriberEmail,
    error::ApiError,
    service::profile::{Profile, ProfileService},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

#[derive(Debug, serde::Deserialize)]
pub struct ProfileParams {
    email: String,
}

#[derive(Debug, serde::Serialize)]
pub struct ProfileResponse {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<Profile>,
}

/// Create a router to serve profile lookups.
pub fn create_router() -> Router<AppState> {
    Router::new().route("/", get(show))
}

/// Look up a stored profile by email.
///
/// Unknown and malformed emails both answer `{"ok": false}` — the landing
/// page only branches on `ok`.
#[tracing::instrument(name = "Looking up a profile", skip(profiles, params))]
#[utoipa::path(
    get,
    path = "/api/profile",
    params(("email" = String, Query, description = "Email the profile was registered with")),
    responses((status = OK, description = "The profile when found, `ok: false` otherwise"))
)]
pub(crate) async fn show(
    State(profiles): State<ProfileService>,
    Query(params): Query<ProfileParams>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let Ok(email) = SubscriberEmail::parse(params.email) else {
        return Ok(Json(ProfileResponse {
            ok: false,
            profile: None,
        }));
    };

    let profile = profiles.find(&email.identity()).await?;

    Ok(Json(ProfileResponse {
        ok: profile.is_some(),
        profile,
    }))
}
