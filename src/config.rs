use tracing::trace;

use crate::error::{Error, Result};

/// Runtime configuration, read once at startup and never mutated.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub miele: MieleConfig,
    pub pushover: PushoverConfig,

    /// Seconds between poll cycles
    #[serde(default = "default_interval")]
    pub interval: u64,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct MieleConfig {
    /// Status endpoint of the laundry room
    pub url: String,
    /// Static value for the `Authorization` header, sent verbatim
    pub auth: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct PushoverConfig {
    /// Pushover user key
    pub user: String,
    /// Pushover application token
    pub key: String,
}

fn default_interval() -> u64 {
    60
}

pub fn read_config_file(path: &str) -> Result<Config> {
    let file_content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("cannot read {path}: {e}")))?;
    serde_json::from_str(&file_content)
        .map_err(|e| Error::Config(format!("invalid configuration file: {e}")))
        .inspect(|config| trace!("loaded config: {config:?}"))
}
