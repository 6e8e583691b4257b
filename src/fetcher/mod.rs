pub mod chain;
pub mod config;
pub mod firecrawl;
pub mod http_fetcher;
pub mod passthrough;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{Candidate, PageEntry};

pub use chain::{FetchChain, FetchOutcome, Strategy};
pub use config::{FetchConfig, StrategyKind};

/// One way of turning a candidate URL into postable pages.
///
/// `Ok(vec![])` means the strategy ran but found nothing usable; the chain
/// moves on to the next strategy in both that case and on `Err`.
#[async_trait]
pub trait ContentFetcher {
    fn name(&self) -> &str;

    async fn fetch(&self, candidate: &Candidate) -> Result<Vec<PageEntry>>;
}
