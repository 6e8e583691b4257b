use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Content fetch strategies, tried in the configured order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Firecrawl `/crawl` limited to the page itself
    FirecrawlCrawl,
    /// Firecrawl `/scrape`
    FirecrawlScrape,
    /// Plain GET, title read from the HTML `<title>`
    Direct,
    /// Reuse the title the discovery source already returned
    Discovery,
}

impl StrategyKind {
    pub fn needs_firecrawl(self) -> bool {
        matches!(self, Self::FirecrawlCrawl | Self::FirecrawlScrape)
    }
}

/// HTTP and fetch-chain configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Strategies tried in order until one yields content
    pub strategies: Vec<StrategyKind>,

    /// Request timeout in seconds for every API call (default: 30)
    pub timeout_secs: u64,

    /// Depth passed to Firecrawl crawl requests (default: 1)
    pub crawl_depth: u32,

    /// User agent for all HTTP requests
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            strategies: vec![StrategyKind::FirecrawlCrawl, StrategyKind::FirecrawlScrape],
            timeout_secs: 30,
            crawl_depth: 1,
            user_agent: format!("linkcaster/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn needs_firecrawl(&self) -> bool {
        self.strategies.iter().any(|s| s.needs_firecrawl())
    }
}
