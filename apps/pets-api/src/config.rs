use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::mongodb::MongoConfig;
use eyre::WrapErr;
use std::path::PathBuf;

pub use core_config::Environment;

/// Configuration of the pets API, composed from the shared config pieces
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    /// Reads `APP_ENV`, `MONGODB_*`, `HOST` and `PORT`.
    ///
    /// A missing `MONGODB_URI` is an error: the service has nothing to serve without a store.
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
        })
    }
}

/// Load `.env` into the process environment.
///
/// A missing file is fine; the variables may come from the environment. A file
/// that exists but cannot be read or parsed is an error.
pub fn load_dotenv() -> eyre::Result<Option<PathBuf>> {
    tolerate_missing(dotenvy::dotenv())
}

fn tolerate_missing(result: dotenvy::Result<PathBuf>) -> eyre::Result<Option<PathBuf>> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e).wrap_err("Failed to load .env file"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_file(name: &str, contents: &str) -> PathBuf {
        let file_name = format!("pets_api_{}_{}.env", name, std::process::id());
        let path = std::env::temp_dir().join(file_name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_env_file_is_tolerated() {
        let path = std::env::temp_dir().join("pets_api_no_such_file.env");
        let loaded = tolerate_missing(dotenvy::from_path(&path).map(|()| path.clone())).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_malformed_env_file_is_an_error() {
        let path = env_file("malformed", "PETS_API_BROKEN='unterminated\n");
        let result = tolerate_missing(dotenvy::from_path(&path).map(|()| path.clone()));
        std::fs::remove_file(&path).ok();

        let err = result.unwrap_err();
        assert!(err.to_string().contains(".env"));
    }

    #[test]
    fn test_valid_env_file_reports_its_path() {
        let path = env_file("valid", "PETS_API_DOTENV_CHECK=1\n");
        temp_env::with_var_unset("PETS_API_DOTENV_CHECK", || {
            let loaded =
                tolerate_missing(dotenvy::from_path(&path).map(|()| path.clone())).unwrap();
            assert_eq!(loaded.as_deref(), Some(path.as_path()));
            assert_eq!(std::env::var("PETS_API_DOTENV_CHECK").as_deref(), Ok("1"));
        });
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_from_env_composes_sections() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("MONGODB_URI", Some("mongodb://mongo:27017")),
                ("MONGODB_URL", None),
                ("MONGODB_DATABASE", None),
                ("HOST", Some("127.0.0.1")),
                ("PORT", Some("9000")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "pets_api");
                assert_eq!(config.environment, Environment::Production);
                assert_eq!(config.mongodb.uri(), "mongodb://mongo:27017");
                assert_eq!(config.mongodb.database(), "pet_store");
                assert_eq!(config.server.address().to_string(), "127.0.0.1:9000");
            },
        );
    }

    #[test]
    fn test_missing_connection_string_is_fatal() {
        temp_env::with_vars(
            [("MONGODB_URI", None::<&str>), ("MONGODB_URL", None::<&str>)],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("MONGODB_URI"));
            },
        );
    }
}
