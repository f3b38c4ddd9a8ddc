use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let dotenv = config::load_dotenv()?;

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    if let Some(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    info!("Connecting to MongoDB at {}", config.mongodb.redacted_uri());

    let mongo_client = database::mongodb::connect_from_config(&config.mongodb).await?;
    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    observability::init_metrics().map_err(|e| eyre::eyre!("Metrics setup failed: {}", e))?;

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes);
    let app = router.merge(health_router(state.config.app));

    let AppState {
        config,
        mongo_client,
        ..
    } = state;

    info!("Starting Pet Catalog API with graceful shutdown (30s timeout)");

    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            mongo_client.shutdown().await;
            info!("MongoDB connection closed successfully");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Pet Catalog API shutdown complete");
    Ok(())
}
