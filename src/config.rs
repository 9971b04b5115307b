use serde::Deserialize;

use crate::resolver::classify::EmptyListingPolicy;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub resolver: ResolverConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Empty-listing classification, matching the backend revision in use:
    /// `try-raw-read` or `directory`.
    pub empty_listing: EmptyListingPolicy,
}

impl Config {
    /// Loads YAML config from `CASGATE_CONFIG` (default `casgate.yaml`).
    /// A missing file yields defaults; `LISTEN` overrides the bind address.
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var("CASGATE_CONFIG").unwrap_or_else(|_| "casgate.yaml".to_string());

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(text) => serde_yaml::from_str(&text)?,
            Err(_) => Config::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }

        Ok(cfg)
    }
}
