pub mod configuration;
pub mod domain;
mod email_client;
mod error;
mod routes;
mod service;
pub mod share;
mod state;
pub mod telemetry;

use axum::{http::Request, Router, Server};
use state::AppState;
use std::{net::TcpListener, path::Path};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{configuration::Settings, email_client::EmailClient};

#[derive(Debug)]
pub struct App {
    listener: TcpListener,
    router: Router,
}

impl App {
    /// Build the application from its settings: open the store and run any
    /// pending migrations, resolve the optional notifier once, and bind
    /// the listener.
    pub async fn build(config: Settings) -> anyhow::Result<Self> {
        let db_pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(*config.database().max_connections())
            .connect_with(config.database().connect_options())
            .await?;
        sqlx::migrate!("./migrations").run(&db_pool).await?;

        let notifier = match config.email_client() {
            Some(settings) => Some(EmailClient::try_from(settings).map_err(anyhow::Error::msg)?),
            None => {
                tracing::info!("No notifier credentials configured, outbound email is disabled");
                None
            }
        };

        let listener = TcpListener::bind(config.application().address())?;
        let app_state = AppState::create(db_pool, notifier);
        let router = Self::build_router(&app_state, config.application().static_dir());

        Ok(Self { listener, router })
    }

    pub fn port(&self) -> u16 {
        self.listener.local_addr().unwrap().port()
    }

    /// Serve this app until the process is stopped.
    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        tracing::info!("Server running at {}", self.listener.local_addr()?);

        Server::from_tcp(self.listener)?
            .serve(self.router.into_make_service())
            .await?;
        Ok(())
    }

    /// Build the router for the application: the JSON API, with every
    /// other path falling through to the static landing page.
    fn build_router(app_state: &AppState, static_dir: &str) -> Router {
        let spa = ServeDir::new(static_dir)
            .fallback(ServeFile::new(Path::new(static_dir).join("index.html")));

        routes::build_router(app_state)
            .fallback_service(spa)
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                    let id = uuid::Uuid::new_v4();
                    tracing::info_span!(
                        "request",
                        method = ?request.method(),
                        uri = ?request.uri(),
                        %id,
                    )
                }),
            )
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
    }
}
