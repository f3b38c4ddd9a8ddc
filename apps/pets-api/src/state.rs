//! Shared application state handed to the route builders.

use mongodb::{Client, Database};

/// Cloned into each router; the MongoDB handles share one connection pool.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// Kept for readiness pings and shutdown
    pub mongo_client: Client,
    /// Database holding the `pets` collection
    pub db: Database,
}
