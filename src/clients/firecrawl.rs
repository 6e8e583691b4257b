use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Value};

use crate::app::Result;
use crate::clients::{ensure_success, str_field};

const BASE_URL: &str = "https://api.firecrawl.dev/v1";

/// A page as reported by Firecrawl. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirecrawlDocument {
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CrawlRequest<'a> {
    url: &'a str,
    max_depth: u32,
    max_discovery_depth: u32,
    crawl_entire_domain: bool,
    allow_external_links: bool,
    allow_subdomains: bool,
    scrape_options: Value,
}

pub struct FirecrawlClient {
    client: Client,
    api_key: String,
}

impl FirecrawlClient {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }

    /// `POST /search`: web search returning page URLs and titles.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<FirecrawlDocument>> {
        let body = json!({ "query": query, "limit": limit });
        let value = self.post("search", &body).await?;
        Ok(parse_documents(&value))
    }

    /// `POST /crawl` for a single URL, restricted to its own pages.
    pub async fn crawl(&self, url: &str, max_depth: u32) -> Result<Vec<FirecrawlDocument>> {
        let request = CrawlRequest {
            url,
            max_depth,
            max_discovery_depth: max_depth,
            crawl_entire_domain: false,
            allow_external_links: false,
            allow_subdomains: false,
            scrape_options: json!({
                "onlyMainContent": true,
                "removeBase64Images": true,
                "blockAds": true,
                "formats": ["markdown"]
            }),
        };
        let value = self.post("crawl", &request).await?;
        Ok(parse_documents(&value))
    }

    /// `POST /scrape` for a single URL.
    pub async fn scrape(&self, url: &str) -> Result<Vec<FirecrawlDocument>> {
        let body = json!({ "url": url, "formats": ["markdown"] });
        let value = self.post("scrape", &body).await?;
        Ok(parse_documents(&value))
    }

    async fn post<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<Value> {
        let url = format!("{}/{}", BASE_URL, endpoint);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        tracing::debug!(endpoint, status = %response.status(), "Firecrawl response");
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }
}

/// Extract documents from a Firecrawl payload.
///
/// `data` may be a list of pages or a single page object; anything else
/// yields no documents. Non-object list entries become empty documents so
/// the caller can substitute the requested URL.
pub fn parse_documents(value: &Value) -> Vec<FirecrawlDocument> {
    match value.get("data") {
        Some(Value::Array(items)) => items.iter().map(parse_document).collect(),
        Some(item @ Value::Object(_)) => vec![parse_document(item)],
        _ => Vec::new(),
    }
}

fn parse_document(item: &Value) -> FirecrawlDocument {
    let metadata = item.get("metadata").unwrap_or(&Value::Null);
    FirecrawlDocument {
        url: str_field(item, "url")
            .or_else(|| str_field(metadata, "sourceURL"))
            .or_else(|| str_field(metadata, "url")),
        title: str_field(item, "title").or_else(|| str_field(metadata, "title")),
        description: str_field(item, "description")
            .or_else(|| str_field(metadata, "description")),
    }
}
