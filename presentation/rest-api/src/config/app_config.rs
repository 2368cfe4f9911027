use super::{
    auth_config::AuthConfig, cors_config, server_config::ServerConfig,
    store_config::BasketStoreConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub auth: AuthConfig,
    pub store: BasketStoreConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            auth: AuthConfig::from_env()?,
            store: BasketStoreConfig::from_env()?,
        })
    }
}
