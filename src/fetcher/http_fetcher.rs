use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::app::Result;
use crate::clients::ensure_success;
use crate::domain::{Candidate, PageEntry};
use crate::fetcher::ContentFetcher;

/// Fetches the page itself and reads its `<title>`.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    fn name(&self) -> &str {
        "direct"
    }

    async fn fetch(&self, candidate: &Candidate) -> Result<Vec<PageEntry>> {
        let response = self.client.get(&candidate.url).send().await?;
        let response = ensure_success(response).await?;

        // Redirects may land elsewhere; post the final URL
        let final_url = response.url().to_string();
        let body = response.text().await?;

        let title = extract_title(&body).or_else(|| candidate.title.clone());
        Ok(vec![PageEntry::new(final_url, title)])
    }
}

/// Text of the document's `<title>`, whitespace collapsed.
///
/// Prefers `head > title`; falls back to the first `title` anywhere.
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    ["head > title", "title"].iter().find_map(|css| {
        let selector = Selector::parse(css).ok()?;
        document
            .select(&selector)
            .map(|el| el.text().collect::<Vec<_>>().join(" "))
            .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
            .find(|text| !text.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title() {
        let html = "<html><head><TITLE lang=\"en\">\n  Agents &amp; Tools\n</TITLE></head></html>";
        assert_eq!(extract_title(html), Some("Agents & Tools".into()));
    }

    #[test]
    fn test_extract_title_missing_or_empty() {
        assert_eq!(extract_title("<html><body>hi</body></html>"), None);
        assert_eq!(extract_title("<title>   </title>"), None);
        assert_eq!(extract_title("<head></head><p>title</p>"), None);
    }

    #[test]
    fn test_extract_title_ignores_tags_named_like_title() {
        let html = "<html><head><titlebar>Site chrome</titlebar><title>Real Title</title></head></html>";
        assert_eq!(extract_title(html), Some("Real Title".into()));
    }

    #[test]
    fn test_extract_title_prefers_head() {
        let html = "<html><head><title>Page</title></head><body><svg><title>Icon</title></svg></body></html>";
        assert_eq!(extract_title(html), Some("Page".into()));
    }

    #[test]
    fn test_extract_title_non_ascii() {
        let html = "<title>Café — IA générative</title>";
        assert_eq!(extract_title(html), Some("Café — IA générative".into()));
    }
}
