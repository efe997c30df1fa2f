use derive_getters::Getters;
use once_cell::sync::Lazy;
use realhelper::{
    configuration::{get_configuration, Settings},
    telemetry::{get_subscriber, init_subscriber},
    App,
};
use sqlx::SqlitePool;
use uuid::Uuid;

static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber("test".into(), std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber("test".into(), std::io::sink);
        init_subscriber(subscriber);
    };
});

#[derive(Debug, Getters)]
pub struct TestApp {
    pub address: String,
    pub db_pool: SqlitePool,
}

/// Spawn an instance of the app on a random port with its own database.
pub async fn spawn_app() -> anyhow::Result<TestApp> {
    spawn_app_with(|_| {}).await
}

/// Spawn the app after applying `customize` to the test configuration.
pub async fn spawn_app_with(customize: impl FnOnce(&mut Settings)) -> anyhow::Result<TestApp> {
    Lazy::force(&TRACING);
    let config = {
        let mut c = get_configuration().expect("Failed to read configuration");

        // A unique store per test, and the OS picks the port.
        let db_path = std::env::temp_dir().join(format!("realhelper-test-{}.db", Uuid::new_v4()));
        c.set_database_path(db_path.to_str().expect("temp path should be valid UTF-8"));
        c.set_application_port(0);
        customize(&mut c);

        c
    };

    let db_pool = SqlitePool::connect_with(config.database().connect_options()).await?;

    let app = App::build(config).await?;
    let application_port = app.port();

    // Start server
    let _ = tokio::spawn(app.run_until_stopped());

    let address = format!("http://127.0.0.1:{application_port}");
    Ok(TestApp { address, db_pool })
}
