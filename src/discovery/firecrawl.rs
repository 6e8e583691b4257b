use std::sync::Arc;

use async_trait::async_trait;

use crate::app::Result;
use crate::clients::{FirecrawlClient, FirecrawlDocument};
use crate::discovery::DiscoverySource;
use crate::domain::Candidate;

fn to_candidates(documents: Vec<FirecrawlDocument>, source: &str) -> Vec<Candidate> {
    documents
        .into_iter()
        .filter_map(|doc| {
            let url = doc.url?;
            Some(
                Candidate::new(url, source)
                    .with_title(doc.title)
                    .with_content(doc.description),
            )
        })
        .collect()
}

/// Firecrawl web search over a list of queries.
pub struct FirecrawlSearchSource {
    client: Arc<FirecrawlClient>,
    queries: Vec<String>,
    limit: usize,
}

impl FirecrawlSearchSource {
    pub fn new(client: Arc<FirecrawlClient>, queries: Vec<String>, limit: usize) -> Self {
        Self {
            client,
            queries,
            limit,
        }
    }
}

#[async_trait]
impl DiscoverySource for FirecrawlSearchSource {
    fn name(&self) -> &str {
        "firecrawl_search"
    }

    fn inputs(&self) -> &[String] {
        &self.queries
    }

    async fn discover(&self, query: &str) -> Result<Vec<Candidate>> {
        let documents = self.client.search(query, self.limit).await?;
        Ok(to_candidates(documents, self.name()))
    }
}

/// Crawls seed pages and offers every page found as a candidate.
pub struct FirecrawlCrawlSource {
    client: Arc<FirecrawlClient>,
    seed_urls: Vec<String>,
    max_depth: u32,
}

impl FirecrawlCrawlSource {
    pub fn new(client: Arc<FirecrawlClient>, seed_urls: Vec<String>, max_depth: u32) -> Self {
        Self {
            client,
            seed_urls,
            max_depth,
        }
    }
}

#[async_trait]
impl DiscoverySource for FirecrawlCrawlSource {
    fn name(&self) -> &str {
        "firecrawl_crawl"
    }

    fn inputs(&self) -> &[String] {
        &self.seed_urls
    }

    async fn discover(&self, seed_url: &str) -> Result<Vec<Candidate>> {
        let documents = self.client.crawl(seed_url, self.max_depth).await?;
        Ok(to_candidates(documents, self.name()))
    }
}
