//! Server configuration: listen address plus the formatter configuration.

use anyhow::{Context, Result};
use mf_core::FormatterConfig;
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_ENV: &str = "MF_CONFIG";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub formatter: FormatterConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            formatter: FormatterConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load from `path`, else from `$MF_CONFIG`, else defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let from_env = std::env::var(CONFIG_ENV).ok();
        match path.or(from_env.as_deref()) {
            Some(p) => Self::load_from(p),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: ServerConfig = serde_json::from_str(content)?;
        config.formatter.validate()?;
        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
