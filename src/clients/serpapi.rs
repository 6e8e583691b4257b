use reqwest::Client;
use serde_json::Value;

use crate::app::Result;
use crate::clients::{ensure_success, str_field};

const SEARCH_URL: &str = "https://serpapi.com/search.json";

/// One entry of `organic_results`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganicResult {
    pub link: String,
    pub title: Option<String>,
    pub snippet: Option<String>,
}

pub struct SerpApiClient {
    client: Client,
    api_key: String,
}

impl SerpApiClient {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }

    pub async fn search(&self, query: &str, num: usize) -> Result<Vec<OrganicResult>> {
        let num = num.to_string();
        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("q", query),
                ("api_key", self.api_key.as_str()),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let value: Value = response.json().await?;
        Ok(parse_organic_results(&value))
    }
}

/// Results without a `link` are dropped.
pub fn parse_organic_results(value: &Value) -> Vec<OrganicResult> {
    let Some(results) = value.get("organic_results").and_then(Value::as_array) else {
        return Vec::new();
    };

    results
        .iter()
        .filter_map(|res| {
            Some(OrganicResult {
                link: str_field(res, "link")?,
                title: str_field(res, "title"),
                snippet: str_field(res, "snippet"),
            })
        })
        .collect()
}
