use std::sync::Arc;

use async_trait::async_trait;

use crate::app::Result;
use crate::clients::{FirecrawlClient, FirecrawlDocument};
use crate::domain::{Candidate, PageEntry};
use crate::fetcher::ContentFetcher;

/// Map Firecrawl documents to page entries, defaulting to the requested URL.
fn to_entries(candidate: &Candidate, documents: Vec<FirecrawlDocument>) -> Vec<PageEntry> {
    documents
        .into_iter()
        .map(|doc| {
            let url = doc.url.unwrap_or_else(|| candidate.url.clone());
            let title = doc.title.or_else(|| candidate.title.clone());
            PageEntry::new(url, title)
        })
        .collect()
}

pub struct FirecrawlCrawlFetcher {
    client: Arc<FirecrawlClient>,
    max_depth: u32,
}

impl FirecrawlCrawlFetcher {
    pub fn new(client: Arc<FirecrawlClient>, max_depth: u32) -> Self {
        Self { client, max_depth }
    }
}

#[async_trait]
impl ContentFetcher for FirecrawlCrawlFetcher {
    fn name(&self) -> &str {
        "firecrawl_crawl"
    }

    async fn fetch(&self, candidate: &Candidate) -> Result<Vec<PageEntry>> {
        let documents = self.client.crawl(&candidate.url, self.max_depth).await?;
        Ok(to_entries(candidate, documents))
    }
}

pub struct FirecrawlScrapeFetcher {
    client: Arc<FirecrawlClient>,
}

impl FirecrawlScrapeFetcher {
    pub fn new(client: Arc<FirecrawlClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentFetcher for FirecrawlScrapeFetcher {
    fn name(&self) -> &str {
        "firecrawl_scrape"
    }

    async fn fetch(&self, candidate: &Candidate) -> Result<Vec<PageEntry>> {
        let documents = self.client.scrape(&candidate.url).await?;
        Ok(to_entries(candidate, documents))
    }
}
