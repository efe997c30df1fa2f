use crate::{
    domain::{Inquiry, NewSubscriber},
    error::ApiError,
    service::request::RequestService,
    share::{self, ShareLink},
    state::AppState,
};
use axum::{extract::State, routing::post, Json, Router};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, serde::Deserialize, ToSchema)]
pub struct RequestBody {
    email: String,
    name: Option<String>,
    budget: Option<String>,
    timing: Option<String>,
    location: Option<String>,
    details: Option<String>,
    desired_details: Option<String>,
    undesired_details: Option<String>,
    #[serde(default)]
    send_to: Vec<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct RequestResponse {
    ok: bool,
    saved: String,
    links: BTreeMap<&'static str, ShareLink>,
}

/// Create a router to serve inquiry submissions.
pub fn create_router() -> Router<AppState> {
    Router::new().route("/", post(submit))
}

/// Submit a service inquiry.
///
/// The inquiry is appended under the submitter's profile (created on the
/// fly when missing) and answered with share links for the requested
/// destinations.
#[tracing::instrument(
    name = "Submitting a service inquiry",
    skip(requests, body),
    fields(subscriber_email = %body.email)
)]
#[utoipa::path(
    post,
    path = "/api/request",
    request_body = RequestBody,
    responses(
        (status = OK, description = "Inquiry saved; share links for the requested destinations"),
        (status = BAD_REQUEST, description = "The email failed validation"),
        (status = INTERNAL_SERVER_ERROR, description = "The inquiry could not be stored"),
    )
)]
pub(crate) async fn submit(
    State(requests): State<RequestService>,
    Json(body): Json<RequestBody>,
) -> Result<Json<RequestResponse>, ApiError> {
    let subscriber = NewSubscriber::parse(body.email, body.name)?;
    let inquiry = Inquiry {
        budget: body.budget,
        timing: body.timing,
        location: body.location,
        details: body.details,
        desired_details: body.desired_details,
        undesired_details: body.undesired_details,
    }
    .normalized();

    let saved = requests.append(&subscriber, &inquiry, &body.send_to).await?;
    let links = share::build_share_links(subscriber.display_name(), &inquiry, &body.send_to);

    Ok(Json(RequestResponse {
        ok: true,
        saved: saved.to_string(),
        links,
    }))
}
