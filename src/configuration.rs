use config::{Config, File, FileFormat};
use derive_getters::Getters;
use reqwest::Url;
use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::sqlite::SqliteConnectOptions;

use crate::domain::SubscriberEmail;

/// Retrieve the configuration for the application: `configuration.yaml`
/// merged with `APP`-prefixed environment variables, so e.g.
/// `APP_APPLICATION__PORT=9000` overrides the listening port.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    Config::builder()
        .add_source(File::new("configuration.yaml", FileFormat::Yaml))
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?
        .try_deserialize()
}

#[derive(Debug, serde::Deserialize, Getters)]
pub struct Settings {
    application: ApplicationSettings,
    database: DatabaseSettings,
    /// Leaving the section out disables outbound email entirely.
    email_client: Option<EmailClientSettings>,
}

impl Settings {
    pub fn set_application_port(&mut self, port: u16) {
        self.application.port = port;
    }

    pub fn set_database_path(&mut self, path: impl Into<String>) {
        self.database.path = path.into();
    }

    pub fn set_email_client(&mut self, email_client: EmailClientSettings) {
        self.email_client = Some(email_client);
    }
}

#[derive(Debug, serde::Deserialize, Getters)]
pub struct ApplicationSettings {
    host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    port: u16,
    static_dir: String,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, serde::Deserialize, Getters)]
pub struct DatabaseSettings {
    path: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    max_connections: u32,
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true)
            .foreign_keys(true)
    }
}

#[derive(Debug, serde::Deserialize, Getters)]
pub struct EmailClientSettings {
    base_url: String,
    sender_email: String,
    authorization_token: Secret<String>,
}

impl EmailClientSettings {
    pub fn new(
        base_url: impl Into<String>,
        sender_email: impl Into<String>,
        authorization_token: Secret<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            sender_email: sender_email.into(),
            authorization_token,
        }
    }

    pub fn url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)
    }

    pub fn sender(&self) -> Result<SubscriberEmail, String> {
        SubscriberEmail::parse(self.sender_email.clone())
    }
}
