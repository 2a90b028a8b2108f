use location_directory::config::Settings;
use location_directory::observability::init_tracing;
use location_directory::startup::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("info");

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    Ok(())
}
