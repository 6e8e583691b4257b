use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// SerpAPI Google search over `queries`
    Serpapi,
    /// Firecrawl web search over `queries`
    FirecrawlSearch,
    /// Firecrawl crawl of each of `seed_urls`
    FirecrawlCrawl,
}

/// Discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    pub sources: Vec<SourceKind>,

    /// Search queries for search-based sources
    pub queries: Vec<String>,

    /// Results requested per query (default: 10)
    pub results_per_query: usize,

    /// Start pages for crawl-based discovery
    pub seed_urls: Vec<String>,

    /// Crawl depth for seed URLs (default: 2)
    pub seed_crawl_depth: u32,

    /// Cap on unique candidates per run; 0 means unlimited (default: 0)
    pub max_candidates: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            sources: vec![SourceKind::Serpapi],
            queries: [
                "Agentic AI",
                "free AI courses",
                "AI prompting tips",
                "AI tutorials",
                "free AI certificates",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            results_per_query: 10,
            seed_urls: [
                "https://medium.com/tag/agentic-ai",
                "https://huggingface.co/blog",
                "https://deeplearning.ai/resources/",
                "https://www.classcentral.com/subject/ai",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            seed_crawl_depth: 2,
            max_candidates: 0,
        }
    }
}

impl DiscoveryConfig {
    pub fn needs_serpapi(&self) -> bool {
        self.sources.contains(&SourceKind::Serpapi)
    }

    pub fn needs_firecrawl(&self) -> bool {
        self.sources
            .iter()
            .any(|s| matches!(s, SourceKind::FirecrawlSearch | SourceKind::FirecrawlCrawl))
    }
}
