//! Thin REST clients for the third-party APIs the bot talks to.
//!
//! Responses are parsed leniently: missing keys and unexpected shapes yield
//! empty results rather than errors. HTTP failures surface as
//! [`LinkcasterError::Api`] so callers can spot rate limiting.

pub mod firecrawl;
pub mod serpapi;
pub mod x;

use std::time::Duration;

use reqwest::{Client, Response};

use crate::app::{LinkcasterError, Result};

pub use firecrawl::{FirecrawlClient, FirecrawlDocument};
pub use serpapi::{OrganicResult, SerpApiClient};
pub use x::XClient;

/// Build the shared HTTP client. All API calls go through one instance.
pub fn build_http_client(timeout: Duration, user_agent: &str) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .gzip(true)
        .brotli(true)
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Turn a non-2xx response into an API error carrying the status and body.
pub(crate) async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(LinkcasterError::Api {
        status: status.as_u16(),
        message: truncate_body(&body),
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 300;
    if body.chars().count() <= MAX {
        body.trim().to_string()
    } else {
        let head: String = body.chars().take(MAX).collect();
        format!("{}…", head.trim())
    }
}

/// Read a string field, treating blanks as absent.
pub(crate) fn str_field(value: &serde_json::Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
