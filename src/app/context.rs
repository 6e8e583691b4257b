use std::path::PathBuf;
use std::sync::Arc;

use reqwest::Client;

use crate::app::error::{LinkcasterError, Result};
use crate::clients::{build_http_client, FirecrawlClient, SerpApiClient, XClient};
use crate::config::credentials::{FIRECRAWL_KEY, SERPAPI_KEY, X_BEARER_TOKEN};
use crate::config::{Config, Credentials};
use crate::discovery::{
    FirecrawlCrawlSource, FirecrawlSearchSource, SerpApiSource, Source, SourceKind,
};
use crate::fetcher::firecrawl::{FirecrawlCrawlFetcher, FirecrawlScrapeFetcher};
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::passthrough::DiscoveryMetadataFetcher;
use crate::fetcher::{FetchChain, Strategy, StrategyKind};
use crate::pacing::Pacer;
use crate::pipeline::{RunPolicy, Runner};
use crate::publisher::{Publisher, SafeModePublisher, XPublisher};
use crate::store::JsonStore;

pub struct AppContext {
    pub config: Config,
    pub store: Arc<JsonStore>,
}

impl AppContext {
    /// Open the store under `data_dir`, or the directory the config names.
    pub fn new(config: Config, data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => config.data_dir()?,
        };

        let store = Arc::new(JsonStore::new(&data_dir)?);
        tracing::debug!(dir = %data_dir.display(), "Opened store");

        Ok(Self { config, store })
    }

    /// Wire a runner from the configuration.
    ///
    /// Fails before any network or store work when a credential the
    /// configuration needs is missing.
    pub fn runner(&self, credentials: &Credentials) -> Result<Runner<JsonStore>> {
        credentials.check(self.config.credential_requirements())?;

        let http = build_http_client(self.config.fetch.timeout(), &self.config.fetch.user_agent)?;

        let firecrawl = match &credentials.firecrawl_key {
            Some(key) if self.config.credential_requirements().firecrawl => {
                Some(Arc::new(FirecrawlClient::new(http.clone(), key.clone())))
            }
            _ => None,
        };

        let sources = self.sources(&http, credentials, firecrawl.as_ref())?;
        let chain = self.fetch_chain(&http, firecrawl.as_ref())?;
        let publisher = self.publisher(&http, credentials)?;

        Ok(Runner::new(
            self.store.clone(),
            sources,
            chain,
            publisher,
            Pacer::from_config(&self.config.pacing)?,
            RunPolicy::from_config(&self.config),
        ))
    }

    fn sources(
        &self,
        http: &Client,
        credentials: &Credentials,
        firecrawl: Option<&Arc<FirecrawlClient>>,
    ) -> Result<Vec<Source>> {
        let discovery = &self.config.discovery;

        discovery
            .sources
            .iter()
            .map(|kind| -> Result<Source> {
                let source: Source = match kind {
                    SourceKind::Serpapi => {
                        let key = require(&credentials.serpapi_key, SERPAPI_KEY)?;
                        Box::new(SerpApiSource::new(
                            SerpApiClient::new(http.clone(), key),
                            discovery.queries.clone(),
                            discovery.results_per_query,
                        ))
                    }
                    SourceKind::FirecrawlSearch => Box::new(FirecrawlSearchSource::new(
                        firecrawl_client(firecrawl)?,
                        discovery.queries.clone(),
                        discovery.results_per_query,
                    )),
                    SourceKind::FirecrawlCrawl => Box::new(FirecrawlCrawlSource::new(
                        firecrawl_client(firecrawl)?,
                        discovery.seed_urls.clone(),
                        discovery.seed_crawl_depth,
                    )),
                };
                Ok(source)
            })
            .collect()
    }

    fn fetch_chain(
        &self,
        http: &Client,
        firecrawl: Option<&Arc<FirecrawlClient>>,
    ) -> Result<FetchChain> {
        let fetch = &self.config.fetch;

        let strategies = fetch
            .strategies
            .iter()
            .map(|kind| -> Result<Strategy> {
                let strategy: Strategy = match kind {
                    StrategyKind::FirecrawlCrawl => Arc::new(FirecrawlCrawlFetcher::new(
                        firecrawl_client(firecrawl)?,
                        fetch.crawl_depth,
                    )),
                    StrategyKind::FirecrawlScrape => {
                        Arc::new(FirecrawlScrapeFetcher::new(firecrawl_client(firecrawl)?))
                    }
                    StrategyKind::Direct => Arc::new(HttpFetcher::new(http.clone())),
                    StrategyKind::Discovery => Arc::new(DiscoveryMetadataFetcher),
                };
                Ok(strategy)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(FetchChain::new(strategies))
    }

    fn publisher(
        &self,
        http: &Client,
        credentials: &Credentials,
    ) -> Result<Box<dyn Publisher + Send + Sync>> {
        if self.config.bot.safe_mode {
            tracing::info!("Safe mode: messages are logged, not posted");
            return Ok(Box::new(SafeModePublisher));
        }

        let token = require(&credentials.x_bearer_token, X_BEARER_TOKEN)?;
        Ok(Box::new(XPublisher::new(XClient::new(http.clone(), token))))
    }
}

fn require(value: &Option<String>, name: &'static str) -> Result<String> {
    value
        .clone()
        .ok_or(LinkcasterError::MissingCredential(name))
}

fn firecrawl_client(client: Option<&Arc<FirecrawlClient>>) -> Result<Arc<FirecrawlClient>> {
    client
        .cloned()
        .ok_or(LinkcasterError::MissingCredential(FIRECRAWL_KEY))
}
