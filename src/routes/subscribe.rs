use crate::{
    domain::NewSubscriber,
    email_client::EmailClient,
    error::ApiError,
    service::profile::ProfileService,
    state::AppState,
};
use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;
use utoipa::ToSchema;

pub const REGISTERED_MESSAGE: &str = "تم التسجيل بنجاح";
pub const ALREADY_REGISTERED_MESSAGE: &str = "تم التسجيل سابقاً";

#[derive(Debug, serde::Deserialize, ToSchema)]
pub struct SubscribeBody {
    email: String,
    name: Option<String>,
}

#[derive(Debug, serde::Serialize, ToSchema)]
pub struct SubscribeResponse {
    ok: bool,
    message: String,
    id: String,
}

/// Create a router to serve subscriptions.
pub fn create_router() -> Router<AppState> {
    Router::new().route("/", post(subscribe))
}

/// Subscribe with an email and an optional name.
///
/// Subscribing twice with the same normalized email is a no-op: the second
/// call answers "already registered" and changes nothing. A first
/// registration dispatches a welcome email on a detached task.
#[tracing::instrument(
    name = "Adding a new subscriber",
    skip(profiles, notifier, body),
    fields(subscriber_email = %body.email)
)]
#[utoipa::path(
    post,
    path = "/api/subscribe",
    request_body = SubscribeBody,
    responses(
        (status = OK, description = "Registered, or already registered", body = SubscribeResponse),
        (status = BAD_REQUEST, description = "The email failed validation"),
    )
)]
pub(crate) async fn subscribe(
    State(profiles): State<ProfileService>,
    State(notifier): State<Arc<Option<EmailClient>>>,
    Json(body): Json<SubscribeBody>,
) -> Result<Json<SubscribeResponse>, ApiError> {
    let new_subscriber = NewSubscriber::parse(body.email, body.name)?;
    let outcome = profiles.upsert(&new_subscriber).await?;

    let message = if outcome.created {
        send_welcome_email(notifier, new_subscriber);
        REGISTERED_MESSAGE
    } else {
        ALREADY_REGISTERED_MESSAGE
    };

    Ok(Json(SubscribeResponse {
        ok: true,
        message: message.to_string(),
        id: outcome.identity.to_string(),
    }))
}

/// Dispatch the welcome email on a detached task.
///
/// Delivery is best effort: the response never waits for it, a failure is
/// logged and never retried, and without a configured notifier this is a
/// no-op.
fn send_welcome_email(notifier: Arc<Option<EmailClient>>, subscriber: NewSubscriber) {
    tokio::spawn(async move {
        let Some(client) = notifier.as_ref() else {
            tracing::debug!("No notifier configured, skipping the welcome email");
            return;
        };

        let greeting = format!("أهلاً بك في RealHelper يا {}!", subscriber.display_name());
        let text_body = format!("{greeting}\nسنوافيك بكل جديد على بريدك.");
        let html_body = format!("{greeting}<br/>سنوافيك بكل جديد على بريدك.");

        if let Err(e) = client
            .send_email(&subscriber.email, "أهلاً بك في RealHelper", &html_body, &text_body)
            .await
        {
            tracing::warn!("Failed to send the welcome email: {e:?}");
        }
    });
}
