use serde::Deserialize;

use crate::ga::controller::GaParams;

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_json_payload_limit_bytes() -> usize {
    2 * 1024 * 1024
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ga_defaults: GaParams,
    #[serde(default = "default_json_payload_limit_bytes")]
    pub json_payload_limit_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::new().separator("__"))
            .build()?;
        cfg.try_deserialize()
    }
}
