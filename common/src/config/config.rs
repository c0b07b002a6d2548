use config::{Config, ConfigError};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "api-config.toml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub server: Option<ServerConfig>,
    pub sys: Option<SysConfig>,
}

impl AppConfig {
    /// Loads `file` (optional) and overlays `APP_`-prefixed environment variables,
    /// e.g. `APP_SERVER__PORT=9000` or `APP_SYS__JWT_SECRET=...`.
    pub fn new(file: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(config::Environment::with_prefix("APP").prefix_separator("_").separator("__"))
            .build()?;
        config.try_deserialize::<AppConfig>()
    }

    pub fn get_server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }
    pub fn get_sys(&self) -> SysConfig {
        self.sys.clone().unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// actix worker count, 0 = one per core
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 8080, workers: 0 }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SysConfig {
    // global log level
    pub log_level: String,
    // HS256 signing secret for bearer tokens
    pub jwt_secret: String,
    // load the built-in blog articles at startup
    pub seed_articles: bool,
}

impl Default for SysConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            jwt_secret: "change-me-in-production".to_string(),
            seed_articles: true,
        }
    }
}
