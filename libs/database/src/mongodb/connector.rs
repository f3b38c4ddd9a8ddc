use mongodb::{Client, bson::doc, options::ClientOptions};
use std::time::Duration;
use tracing::{error, info};

use super::MongoConfig;
use crate::common::{DatabaseError, DatabaseResult};

/// Connect to MongoDB with the default pool settings
///
/// # Example
/// ```ignore
/// use database::mongodb::connect;
///
/// let client = connect("mongodb://localhost:27017").await?;
/// let db = client.database("pet_store");
/// ```
pub async fn connect(uri: &str) -> DatabaseResult<Client> {
    connect_from_config(&MongoConfig::new(uri)).await
}

/// Connect using a MongoConfig and ping the server once
///
/// The driver connects lazily, so an unreachable server or bad credentials
/// only surface on the probe. Failure is reported as
/// [`DatabaseError::ConnectionFailed`] and nothing is retried.
///
/// ```ignore
/// use core_config::FromEnv;
/// use database::mongodb::{MongoConfig, connect_from_config};
///
/// let config = MongoConfig::from_env()?;
/// let client = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    info!(uri = %config.redacted_uri(), database = %config.database, "Connecting to MongoDB");

    let mut options = ClientOptions::parse(config.uri()).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| {
            error!(error = %e, "MongoDB ping failed");
            DatabaseError::ConnectionFailed(e.to_string())
        })?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}
