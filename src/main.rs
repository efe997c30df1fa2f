use realhelper::{configuration::get_configuration, telemetry, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().expect("Failed to read configuration.");

    telemetry::init_subscriber(telemetry::get_subscriber(
        "realhelper".to_string(),
        std::io::stdout,
    ));

    let app = App::build(configuration).await?;
    app.run_until_stopped().await?;

    Ok(())
}
