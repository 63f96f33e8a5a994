//! Configuration for the Menu API

use core_config::{server::ServerConfig, FromEnv};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub database: PostgresConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let database = PostgresConfig::from_env()?;

        Ok(Self {
            server,
            database,
            environment,
        })
    }
}
