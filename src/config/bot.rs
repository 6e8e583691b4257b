use serde::{Deserialize, Serialize};

/// Selection and posting policy for a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Log messages instead of posting them (default: true)
    pub safe_mode: bool,

    /// Maximum posts per run (default: 3)
    pub daily_post_cap: usize,

    /// Maximum domains learned per run (default: 5)
    pub daily_new_domain_cap: usize,

    /// Admit URLs from domains that are neither trusted nor blacklisted
    /// into the current run (default: true)
    pub admit_unknown_domains: bool,

    /// Domains containing any of these fragments are dropped at discovery
    pub excluded_domain_fragments: Vec<String>,

    /// Built-in trusted domains; never written to the learned file
    pub trusted_domains: Vec<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            safe_mode: true,
            daily_post_cap: 3,
            daily_new_domain_cap: 5,
            admit_unknown_domains: true,
            excluded_domain_fragments: vec!["reddit.com".to_string(), "youtube.com".to_string()],
            trusted_domains: [
                "medium.com",
                "huggingface.co",
                "deeplearning.ai",
                "classcentral.com",
                "edx.org",
                "coursera.org",
                "towardsdatascience.com",
                "ai.googleblog.com",
                "openai.com",
                "arxiv.org",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}
