//! Candidate discovery.
//!
//! Each source is queried once per input (a search query or a seed URL),
//! strictly one after another. A failing input is logged and contributes no
//! candidates; it never aborts the run.

mod config;
mod firecrawl;
mod serpapi;

pub use config::{DiscoveryConfig, SourceKind};
pub use firecrawl::{FirecrawlCrawlSource, FirecrawlSearchSource};
pub use serpapi::SerpApiSource;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::Candidate;

#[async_trait]
pub trait DiscoverySource {
    fn name(&self) -> &str;

    /// Inputs this source is run with, in order.
    fn inputs(&self) -> &[String];

    async fn discover(&self, input: &str) -> Result<Vec<Candidate>>;
}

pub type Source = Box<dyn DiscoverySource + Send + Sync>;

/// Run every source over all of its inputs, in order.
pub async fn discover_all(sources: &[Source]) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for source in sources {
        for input in source.inputs() {
            tracing::info!(source = source.name(), input = %input, "Discovering");
            match source.discover(input).await {
                Ok(found) => {
                    tracing::info!(
                        source = source.name(),
                        input = %input,
                        found = found.len(),
                        "Discovery finished"
                    );
                    candidates.extend(found);
                }
                Err(e) => {
                    tracing::error!(
                        source = source.name(),
                        input = %input,
                        error = %e,
                        "Discovery failed"
                    );
                }
            }
        }
    }

    candidates
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::app::LinkcasterError;

    /// Returns fixed candidates per input; inputs named "fail" error out.
    pub(crate) struct StaticSource {
        pub inputs: Vec<String>,
        pub results: Vec<(String, Vec<Candidate>)>,
    }

    impl StaticSource {
        pub fn with_urls(urls: &[&str]) -> Self {
            Self {
                inputs: vec!["q".to_string()],
                results: vec![(
                    "q".to_string(),
                    urls.iter().map(|u| Candidate::new(*u, "static")).collect(),
                )],
            }
        }
    }

    #[async_trait]
    impl DiscoverySource for StaticSource {
        fn name(&self) -> &str {
            "static"
        }

        fn inputs(&self) -> &[String] {
            &self.inputs
        }

        async fn discover(&self, input: &str) -> Result<Vec<Candidate>> {
            if input == "fail" {
                return Err(LinkcasterError::Api {
                    status: 500,
                    message: "boom".into(),
                });
            }
            Ok(self
                .results
                .iter()
                .find(|(i, _)| i == input)
                .map(|(_, c)| c.clone())
                .unwrap_or_default())
        }
    }

    #[tokio::test]
    async fn test_discover_all_keeps_order_and_skips_failures() {
        let source = StaticSource {
            inputs: vec!["a".into(), "fail".into(), "b".into()],
            results: vec![
                ("a".into(), vec![Candidate::new("https://a.com/1", "static")]),
                ("b".into(), vec![Candidate::new("https://b.com/2", "static")]),
            ],
        };
        let sources: Vec<Source> = vec![Box::new(source)];

        let found = discover_all(&sources).await;
        let urls: Vec<&str> = found.iter().map(|c| c.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a.com/1", "https://b.com/2"]);
    }
}
