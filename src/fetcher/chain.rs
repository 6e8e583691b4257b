use std::sync::Arc;

use crate::domain::{Candidate, PageEntry};
use crate::fetcher::ContentFetcher;

/// Result of running every strategy of a [`FetchChain`] for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Content {
        strategy: String,
        entries: Vec<PageEntry>,
    },
    /// No strategy produced usable content.
    Exhausted {
        /// At least one strategy was refused with HTTP 429
        rate_limited: bool,
    },
}

/// Ordered list of fetch strategies, tried until one yields content.
#[derive(Clone, Default)]
pub struct FetchChain {
    strategies: Vec<Strategy>,
}

pub type Strategy = Arc<dyn ContentFetcher + Send + Sync>;

impl FetchChain {
    pub fn new(strategies: Vec<Strategy>) -> Self {
        Self { strategies }
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub async fn fetch(&self, candidate: &Candidate) -> FetchOutcome {
        let mut rate_limited = false;

        for strategy in &self.strategies {
            match strategy.fetch(candidate).await {
                Ok(entries) if !entries.is_empty() => {
                    tracing::debug!(
                        url = %candidate.url,
                        strategy = strategy.name(),
                        entries = entries.len(),
                        "Fetched content"
                    );
                    return FetchOutcome::Content {
                        strategy: strategy.name().to_string(),
                        entries,
                    };
                }
                Ok(_) => {
                    tracing::warn!(
                        url = %candidate.url,
                        strategy = strategy.name(),
                        "No usable data, trying next strategy"
                    );
                }
                Err(e) => {
                    rate_limited |= e.is_rate_limited();
                    tracing::warn!(
                        url = %candidate.url,
                        strategy = strategy.name(),
                        error = %e,
                        "Fetch failed"
                    );
                }
            }
        }

        FetchOutcome::Exhausted { rate_limited }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::app::{LinkcasterError, Result};

    /// Scripted strategy for tests: replies by URL, records every call.
    pub(crate) struct ScriptedFetcher {
        pub name: String,
        pub replies: Vec<(String, std::result::Result<Vec<PageEntry>, u16>)>,
        pub calls: Mutex<Vec<String>>,
    }

    impl ScriptedFetcher {
        pub fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                replies: Vec::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn ok(mut self, url: &str, entries: Vec<PageEntry>) -> Self {
            self.replies.push((url.to_string(), Ok(entries)));
            self
        }

        pub fn fail(mut self, url: &str, status: u16) -> Self {
            self.replies.push((url.to_string(), Err(status)));
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ContentFetcher for ScriptedFetcher {
        fn name(&self) -> &str {
            &self.name
        }

        async fn fetch(&self, candidate: &Candidate) -> Result<Vec<PageEntry>> {
            self.calls.lock().unwrap().push(candidate.url.clone());
            match self.replies.iter().find(|(url, _)| url == &candidate.url) {
                Some((_, Ok(entries))) => Ok(entries.clone()),
                Some((_, Err(status))) => Err(LinkcasterError::Api {
                    status: *status,
                    message: "scripted".into(),
                }),
                // Unscripted URLs echo themselves back as a page
                None => Ok(vec![PageEntry::new(candidate.url.clone(), Some("Echo".into()))]),
            }
        }
    }

    struct CountingEmpty(AtomicUsize);

    #[async_trait]
    impl ContentFetcher for CountingEmpty {
        fn name(&self) -> &str {
            "empty"
        }

        async fn fetch(&self, _candidate: &Candidate) -> Result<Vec<PageEntry>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    fn candidate(url: &str) -> Candidate {
        Candidate::new(url, "test")
    }

    #[tokio::test]
    async fn test_first_strategy_with_content_wins() {
        let first = Arc::new(ScriptedFetcher::new("crawl").ok(
            "https://a.com/x",
            vec![PageEntry::new("https://a.com/x", Some("A".into()))],
        ));
        let second = Arc::new(ScriptedFetcher::new("scrape"));
        let strategies: Vec<Strategy> = vec![first, second.clone()];
        let chain = FetchChain::new(strategies);

        let outcome = chain.fetch(&candidate("https://a.com/x")).await;
        match outcome {
            FetchOutcome::Content { strategy, entries } => {
                assert_eq!(strategy, "crawl");
                assert_eq!(entries.len(), 1);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(second.calls().is_empty());
    }

    #[tokio::test]
    async fn test_falls_back_after_empty_result() {
        let empty = Arc::new(CountingEmpty(AtomicUsize::new(0)));
        let scrape = Arc::new(ScriptedFetcher::new("scrape"));
        let strategies: Vec<Strategy> = vec![empty.clone(), scrape];
        let chain = FetchChain::new(strategies);

        let outcome = chain.fetch(&candidate("https://a.com/x")).await;
        assert!(matches!(outcome, FetchOutcome::Content { ref strategy, .. } if strategy == "scrape"));
        assert_eq!(empty.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rate_limit_then_success_is_content() {
        let crawl = Arc::new(ScriptedFetcher::new("crawl").fail("https://a.com/x", 429));
        let scrape = Arc::new(ScriptedFetcher::new("scrape"));
        let strategies: Vec<Strategy> = vec![crawl, scrape];
        let chain = FetchChain::new(strategies);

        let outcome = chain.fetch(&candidate("https://a.com/x")).await;
        assert!(matches!(outcome, FetchOutcome::Content { .. }));
    }

    #[tokio::test]
    async fn test_exhausted_reports_rate_limit() {
        let crawl = Arc::new(ScriptedFetcher::new("crawl").fail("https://a.com/x", 429));
        let scrape = Arc::new(ScriptedFetcher::new("scrape").fail("https://a.com/x", 500));
        let strategies: Vec<Strategy> = vec![crawl, scrape];
        let chain = FetchChain::new(strategies);

        let outcome = chain.fetch(&candidate("https://a.com/x")).await;
        assert_eq!(outcome, FetchOutcome::Exhausted { rate_limited: true });
    }

    #[tokio::test]
    async fn test_exhausted_without_rate_limit() {
        let crawl = Arc::new(ScriptedFetcher::new("crawl").fail("https://a.com/x", 503));
        let strategies: Vec<Strategy> = vec![crawl];
        let chain = FetchChain::new(strategies);

        let outcome = chain.fetch(&candidate("https://a.com/x")).await;
        assert_eq!(outcome, FetchOutcome::Exhausted { rate_limited: false });
    }

    #[tokio::test]
    async fn test_empty_chain_is_exhausted() {
        let chain = FetchChain::default();
        assert!(chain.is_empty());
        let outcome = chain.fetch(&candidate("https://a.com/x")).await;
        assert_eq!(outcome, FetchOutcome::Exhausted { rate_limited: false });
    }
}
