use serde::Deserialize;
use service_core::config::{self as core_config, MongoConfig};
use service_core::error::AppError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
}

impl AuthConfig {
    pub fn load() -> Result<Self, AppError> {
        Ok(AuthConfig {
            common: core_config::Config::load(DEFAULT_PORT)?,
            mongodb: MongoConfig::from_env()?,
        })
    }
}
