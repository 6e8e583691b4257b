use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{Candidate, PageEntry};
use crate::fetcher::ContentFetcher;

/// Uses what discovery already knows about the page; needs no network.
///
/// Yields nothing for candidates without a title so the chain can fall
/// through to a real fetch.
pub struct DiscoveryMetadataFetcher;

#[async_trait]
impl ContentFetcher for DiscoveryMetadataFetcher {
    fn name(&self) -> &str {
        "discovery"
    }

    async fn fetch(&self, candidate: &Candidate) -> Result<Vec<PageEntry>> {
        Ok(candidate
            .title
            .as_ref()
            .map(|title| vec![PageEntry::new(candidate.url.clone(), Some(title.clone()))])
            .unwrap_or_default())
    }
}
