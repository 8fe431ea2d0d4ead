use library_services::borrowing;
use library_services::core::domain::Configuration;
use library_services::core::server::serve;
use library_services::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = Configuration::borrowing().from_env()?;
    tracing::info!(service = %config.service_name, addr = %config.bind_addr,
        availability = %config.availability, catalog = %config.catalog_url, "starting borrowing service");

    let app = borrowing::app(&config)?;
    serve(app, config.bind_addr).await
}
