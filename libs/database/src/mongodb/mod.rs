//! MongoDB connection management
//!
//! Builds a pooled [`Client`] from [`MongoConfig`] and probes the server so a
//! bad connection string fails at startup instead of on the first request.

mod config;
mod connector;
mod health;

pub use config::{DEFAULT_DATABASE, MongoConfig};
pub use connector::{connect, connect_from_config};
pub use health::{HealthStatus, check_health, check_health_detailed};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
