use crate::{
    domain::{Identity, NewSubscriber},
    state::AppState,
};
use axum::extract::FromRef;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Storage port for subscriber profiles.
///
/// Owns the profile lifecycle: rows are created here and never updated or
/// deleted afterwards.
pub struct ProfileService {
    db_pool: Arc<SqlitePool>,
}

/// A stored subscriber profile.
#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct Profile {
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// What an idempotent upsert found out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertOutcome {
    pub identity: Identity,
    /// `false` when a profile already existed for the normalized email.
    pub created: bool,
}

impl ProfileService {
    /// Insert a profile unless one already exists for the normalized email.
    ///
    /// Idempotency rests on the primary key: a second write for the same
    /// identity is ignored by the store and reported through
    /// `created = false`, leaving name and creation time untouched.
    #[tracing::instrument(
        name = "Upserting subscriber profile",
        skip(self, subscriber),
        fields(subscriber_email = %subscriber.email)
    )]
    pub async fn upsert(&self, subscriber: &NewSubscriber) -> Result<UpsertOutcome, sqlx::Error> {
        let identity = subscriber.email.identity();
        let result = sqlx::query(
            r#"INSERT INTO profiles (identity, email, name, created_at)
               VALUES ($1, $2, $3, $4)
               ON CONFLICT (identity) DO NOTHING"#,
        )
        .bind(identity.as_str())
        .bind(subscriber.email.normalized())
        .bind(subscriber.name.as_ref().map(|n| n.as_ref().to_owned()))
        .bind(Utc::now())
        .execute(self.db_pool.as_ref())
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {e:?}");
            e
        })?;

        let created = result.rows_affected() > 0;
        if created {
            tracing::info!("New subscriber profile has been saved");
        }

        Ok(UpsertOutcome { identity, created })
    }

    /// Look up a stored profile by its identity.
    #[tracing::instrument(name = "Fetching subscriber profile", skip(self))]
    pub async fn find(&self, identity: &Identity) -> Result<Option<Profile>, sqlx::Error> {
        sqlx::query_as::<_, Profile>(
            r#"SELECT email, name, created_at FROM profiles WHERE identity = $1"#,
        )
        .bind(identity.as_str())
        .fetch_optional(self.db_pool.as_ref())
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {e:?}");
            e
        })
    }
}

impl FromRef<AppState> for ProfileService {
    fn from_ref(state: &AppState) -> Self {
        ProfileService {
            db_pool: state.db_pool().clone(),
        }
    }
}
