use crate::{
    domain::{Identity, Inquiry, NewSubscriber},
    service::profile::ProfileService,
    state::AppState,
};
use axum::extract::FromRef;
use chrono::Utc;
use sqlx::SqlitePool;
use std::fmt::Display;
use std::sync::Arc;

/// Storage port for service inquiries.
///
/// Appends only: stored requests are never mutated or deleted, and their
/// ids are millisecond timestamps so arrival order is well defined.
pub struct RequestService {
    db_pool: Arc<SqlitePool>,
    profiles: ProfileService,
}

/// Reference to a stored inquiry, `identity/request_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRef {
    pub identity: Identity,
    pub request_id: i64,
}

impl Display for RequestRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.identity, self.request_id)
    }
}

impl RequestService {
    /// Durably append an inquiry under the subscriber's identity.
    ///
    /// A request may arrive before any subscription, so the profile row is
    /// upserted first. The id starts from the current millisecond and is
    /// bumped past a same-profile collision, which keeps ids unique per
    /// profile and monotonic in arrival order.
    #[tracing::instrument(
        name = "Appending service inquiry",
        skip(self, subscriber, inquiry, send_to),
        fields(subscriber_email = %subscriber.email)
    )]
    pub async fn append(
        &self,
        subscriber: &NewSubscriber,
        inquiry: &Inquiry,
        send_to: &[String],
    ) -> Result<RequestRef, sqlx::Error> {
        let outcome = self.profiles.upsert(subscriber).await?;
        let identity = outcome.identity;

        // A list of plain strings always serializes.
        let send_to = serde_json::to_string(send_to).unwrap_or_else(|_| "[]".into());
        let created_at = Utc::now();
        let mut request_id = created_at.timestamp_millis();

        loop {
            let result = sqlx::query(
                r#"INSERT INTO requests
                   (identity, request_id, budget, timing, location, details,
                    desired_details, undesired_details, send_to, created_at)
                   VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                   ON CONFLICT (identity, request_id) DO NOTHING"#,
            )
            .bind(identity.as_str())
            .bind(request_id)
            .bind(&inquiry.budget)
            .bind(&inquiry.timing)
            .bind(&inquiry.location)
            .bind(&inquiry.details)
            .bind(&inquiry.desired_details)
            .bind(&inquiry.undesired_details)
            .bind(&send_to)
            .bind(created_at)
            .execute(self.db_pool.as_ref())
            .await
            .map_err(|e| {
                tracing::error!("Failed to execute query: {e:?}");
                e
            })?;

            if result.rows_affected() > 0 {
                tracing::info!(%identity, request_id, "New inquiry has been saved");
                return Ok(RequestRef {
                    identity,
                    request_id,
                });
            }

            // Another request landed on the same millisecond for this
            // profile; take the next id.
            request_id += 1;
        }
    }
}

impl FromRef<AppState> for RequestService {
    fn from_ref(state: &AppState) -> Self {
        RequestService {
            db_pool: state.db_pool().clone(),
            profiles: ProfileService::from_ref(state),
        }
    }
}
