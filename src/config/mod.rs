mod file_config;

pub use file_config::FileConfig;

use anyhow::{bail, Result};

use crate::albums::DEFAULT_MAX_PAGES;
use crate::client::normalize_host;

pub const DEFAULT_TIMEOUT_SEC: u64 = 30;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub host: Option<String>,
    pub timeout_sec: u64,
    pub user_agent: Option<String>,
    pub max_pages: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            host: None,
            timeout_sec: DEFAULT_TIMEOUT_SEC,
            user_agent: None,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bare host name, scheme and trailing slash removed.
    pub host: String,
    pub timeout_sec: u64,
    pub user_agent: String,
    pub max_pages: usize,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let host = file
            .host
            .or_else(|| cli.host.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("host must be specified via --host or in config file")
            })?;
        let host = normalize_host(&host);
        if host.is_empty() {
            bail!("host must not be empty");
        }

        let timeout_sec = file.timeout_sec.unwrap_or(cli.timeout_sec);
        if timeout_sec == 0 {
            bail!("timeout_sec must be greater than zero");
        }

        let max_pages = file.max_pages.unwrap_or(cli.max_pages);
        if max_pages == 0 {
            bail!("max_pages must be greater than zero");
        }

        let user_agent = file
            .user_agent
            .or_else(|| cli.user_agent.clone())
            .unwrap_or_else(default_user_agent);

        Ok(Self {
            host,
            timeout_sec,
            user_agent,
            max_pages,
        })
    }
}

fn default_user_agent() -> String {
    format!("catalog-scraper/{}", env!("CARGO_PKG_VERSION"))
}
