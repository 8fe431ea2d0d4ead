use library_services::catalog;
use library_services::core::domain::Configuration;
use library_services::core::server::serve;
use library_services::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = Configuration::catalog().from_env()?;
    tracing::info!(service = %config.service_name, addr = %config.bind_addr, "starting catalog service");

    let app = catalog::app(&config);
    serve(app, config.bind_addr).await
}
