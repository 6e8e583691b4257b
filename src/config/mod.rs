//! Configuration management for linkcaster.
//!
//! Configuration is read from `~/.config/linkcaster/config.toml` unless a
//! path is given. If the file doesn't exist, a default configuration with
//! comments is created. API credentials never live here; they come from the
//! environment (see [`Credentials`]).

pub mod bot;
pub mod credentials;

pub use bot::BotConfig;
pub use credentials::{Credentials, Requirements};

use crate::discovery::DiscoveryConfig;
use crate::fetcher::FetchConfig;
use crate::pacing::{Pacer, PacingConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Persistence location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding the JSON documents (default: `<data dir>/linkcaster`)
    pub data_dir: Option<PathBuf>,
}

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bot: BotConfig,
    pub discovery: DiscoveryConfig,
    pub fetch: FetchConfig,
    pub pacing: PacingConfig,
    pub store: StoreConfig,
}

impl Config {
    /// Load configuration from `path`, or from the default path when `None`.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            tracing::info!(path = %config_path.display(), "Created default config");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path,
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path: `~/.config/linkcaster/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("linkcaster").join("config.toml"))
    }

    /// Directory for the store, falling back to the platform data dir.
    pub fn data_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.store.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => {
                let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
                Ok(data_dir.join("linkcaster"))
            }
        }
    }

    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch.strategies.is_empty() {
            return Err(ConfigError::Invalid(
                "fetch.strategies must name at least one strategy".into(),
            ));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::Invalid("fetch.timeout_secs must be positive".into()));
        }
        Pacer::from_config(&self.pacing)?;
        Ok(())
    }

    /// Credentials a run needs with this configuration.
    pub fn credential_requirements(&self) -> Requirements {
        Requirements {
            firecrawl: self.discovery.needs_firecrawl() || self.fetch.needs_firecrawl(),
            serpapi: self.discovery.needs_serpapi(),
            x: !self.bot.safe_mode,
        }
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# linkcaster configuration
#
# API credentials are read from the environment, never from this file:
#   SERPAPI_KEY      - required when discovery.sources contains "serpapi"
#   FIRECRAWL_KEY    - required by any firecrawl source or fetch strategy
#   X_BEARER_TOKEN   - required when safe_mode = false

[bot]
# Log messages instead of posting them
safe_mode = true

# Maximum posts per run
daily_post_cap = 3

# Maximum new domains learned per run
daily_new_domain_cap = 5

# Use URLs from domains that are neither trusted nor blacklisted right away.
# When false, only trusted domains are used (new ones are still learned).
admit_unknown_domains = true

# Domains containing any of these are ignored entirely
excluded_domain_fragments = ["reddit.com", "youtube.com"]

# Built-in trusted domains
trusted_domains = [
    "medium.com",
    "huggingface.co",
    "deeplearning.ai",
    "classcentral.com",
    "edx.org",
    "coursera.org",
    "towardsdatascience.com",
    "ai.googleblog.com",
    "openai.com",
    "arxiv.org",
]

[discovery]
# Any of: "serpapi", "firecrawl_search", "firecrawl_crawl"
sources = ["serpapi"]

queries = [
    "Agentic AI",
    "free AI courses",
    "AI prompting tips",
    "AI tutorials",
    "free AI certificates",
]
results_per_query = 10

# Start pages for "firecrawl_crawl"
seed_urls = [
    "https://medium.com/tag/agentic-ai",
    "https://huggingface.co/blog",
    "https://deeplearning.ai/resources/",
    "https://www.classcentral.com/subject/ai",
]
seed_crawl_depth = 2

# Unique candidates considered per run (0 = unlimited)
max_candidates = 0

[fetch]
# Tried in order until one returns content.
# Any of: "firecrawl_crawl", "firecrawl_scrape", "direct", "discovery"
strategies = ["firecrawl_crawl", "firecrawl_scrape"]
timeout_secs = 30
crawl_depth = 1

[pacing]
# Probability of skipping a whole run, e.g. 0.15
off_day_chance = 0.0

# Random delay before each post, e.g. "4h" and "8h"
post_delay_min = "0s"
post_delay_max = "0s"

[store]
# data_dir = "/var/lib/linkcaster"
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
