use crate::email_client::EmailClient;
use axum::extract::FromRef;
use derive_getters::Getters;
use duplicate::duplicate_item;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Everything a request handler can reach: the durable store and the
/// optional notifier. No other cross-request state exists.
#[derive(Debug, Clone, Getters)]
pub struct AppState {
    db_pool: Arc<SqlitePool>,
    notifier: Arc<Option<EmailClient>>,
}

impl AppState {
    pub fn create(db_pool: SqlitePool, notifier: Option<EmailClient>) -> Self {
        Self {
            db_pool: Arc::new(db_pool),
            notifier: Arc::new(notifier),
        }
    }
}

#[duplicate_item(
    service_type              field;
    [ SqlitePool ]            [ db_pool ];
    [ Option<EmailClient> ]   [ notifier ];
)]
impl FromRef<AppState> for Arc<service_type> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.field.clone()
    }
}
