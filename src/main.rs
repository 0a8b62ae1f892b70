use pizza_catalog::api::{create_router, AppState, Server};
use pizza_catalog::lifecycle::{seed_demo_data, setup_tracing, AppConfig, CatalogSystem};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = AppConfig::from_env()?;
    info!(?config, "Starting pizza catalog");

    let system = CatalogSystem::new(config.actor_buffer);
    if config.seed {
        seed_demo_data(&system.catalog).await?;
    }

    let router = create_router(AppState::new(system.catalog.clone()));
    Server::new(config.server_config()).run(router).await?;

    // The router and its state are gone once the server returns.
    system.shutdown().await?;
    Ok(())
}
