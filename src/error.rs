use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::ParseSubscriberError;

/// Client-visible messages. The whole product surface is Arabic, so the
/// API answers in kind; internals stay in the logs, in English.
pub const INVALID_EMAIL_MESSAGE: &str = "البريد الإلكتروني غير صالح";
pub const INVALID_NAME_MESSAGE: &str = "الاسم غير صالح";
pub const STORAGE_FAILURE_MESSAGE: &str = "حدث خطأ في الخادم";

/// Write a formatted version of the error and its inner source chain.
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }

    Ok(())
}

/// A common error type that can be returned in a `Result` from an API
/// handler function.
///
/// Validation failures carry the localized message the client shows as-is
/// and map to 400. Storage failures map to 500 with a generic message —
/// the cause is logged server-side and never leaves the process.
#[derive(thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("a storage operation failed")]
    Storage(#[from] sqlx::Error),
}

impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<ParseSubscriberError> for ApiError {
    fn from(e: ParseSubscriberError) -> Self {
        match e {
            ParseSubscriberError::InvalidEmail(_) => {
                Self::Validation(INVALID_EMAIL_MESSAGE.to_string())
            }
            ParseSubscriberError::InvalidName(_) => {
                Self::Validation(INVALID_NAME_MESSAGE.to_string())
            }
        }
    }
}

/// JSON error body, shaped like every other response of the API.
#[derive(Debug, serde::Serialize)]
struct ErrorBody {
    ok: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            Self::Storage(e) => {
                tracing::error!("storage failure: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    STORAGE_FAILURE_MESSAGE.to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                ok: false,
                error: message,
            }),
        )
            .into_response()
    }
}
