use async_trait::async_trait;

use crate::app::Result;
use crate::clients::SerpApiClient;
use crate::discovery::DiscoverySource;
use crate::domain::Candidate;

pub struct SerpApiSource {
    client: SerpApiClient,
    queries: Vec<String>,
    results_per_query: usize,
}

impl SerpApiSource {
    pub fn new(client: SerpApiClient, queries: Vec<String>, results_per_query: usize) -> Self {
        Self {
            client,
            queries,
            results_per_query,
        }
    }
}

#[async_trait]
impl DiscoverySource for SerpApiSource {
    fn name(&self) -> &str {
        "serpapi"
    }

    fn inputs(&self) -> &[String] {
        &self.queries
    }

    async fn discover(&self, query: &str) -> Result<Vec<Candidate>> {
        let results = self.client.search(query, self.results_per_query).await?;
        Ok(results
            .into_iter()
            .map(|r| {
                Candidate::new(r.link, self.name())
                    .with_title(r.title.map(|t| html_escape::decode_html_entities(&t).into_owned()))
                    .with_content(r.snippet)
            })
            .collect())
    }
}
