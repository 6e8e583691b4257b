use serde::{Deserialize, Serialize};

use crate::domain::host::extract_domain;

/// A URL surfaced by a discovery source, not yet filtered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub url: String,
    pub title: Option<String>,
    pub content: Option<String>,
    /// Name of the discovery source that produced it
    pub source: String,
}

impl Candidate {
    pub fn new(url: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            content: None,
            source: source.into(),
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn with_content(mut self, content: Option<String>) -> Self {
        self.content = content.filter(|c| !c.trim().is_empty());
        self
    }

    pub fn domain(&self) -> String {
        extract_domain(&self.url)
    }
}

/// A page produced by a fetch strategy, ready to be formatted and posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    pub url: String,
    pub title: Option<String>,
}

impl PageEntry {
    pub fn new(url: impl Into<String>, title: Option<String>) -> Self {
        Self {
            url: url.into(),
            title: title.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().map(str::trim).unwrap_or("Untitled")
    }
}
