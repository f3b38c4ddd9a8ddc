//! Database connectors for the pet catalog.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client construction and health checks
//! - `config` - `core_config::FromEnv` support for [`mongodb::MongoConfig`]
//! - `all` - everything above
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_from_config};
//!
//! let config = MongoConfig::new("mongodb://localhost:27017");
//! let client = connect_from_config(&config).await?;
//! let pets = client.database(config.database()).collection::<Document>("pets");
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
