//! The per-run bookkeeping: which candidates are eligible, which domains are
//! learned or blacklisted, and how many posts go out.
//!
//! ```text
//! discover → screen (blacklist / exclusions / trust) → learn → dedup
//!          → history check → cap check → fetch chain → format → publish
//! ```
//!
//! History, learned domains and the blacklist are persisted as soon as they
//! change, so a crash mid-run leaves a consistent store.

mod runner;
mod screen;
mod state;

pub use runner::Runner;
pub use screen::{screen, Screening};
pub use state::{Outcome, RejectReason, RunReport, RunState};

use crate::config::Config;
use crate::domain::normalize_domain;

/// Selection limits and trust policy for a run.
#[derive(Debug, Clone)]
pub struct RunPolicy {
    pub post_cap: usize,
    pub new_domain_cap: usize,
    pub admit_unknown_domains: bool,
    pub excluded_domain_fragments: Vec<String>,
    pub trusted_domains: Vec<String>,
    /// 0 means unlimited
    pub max_candidates: usize,
}

impl Default for RunPolicy {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl RunPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            post_cap: config.bot.daily_post_cap,
            new_domain_cap: config.bot.daily_new_domain_cap,
            admit_unknown_domains: config.bot.admit_unknown_domains,
            excluded_domain_fragments: config
                .bot
                .excluded_domain_fragments
                .iter()
                .map(|f| f.trim().to_lowercase())
                .filter(|f| !f.is_empty())
                .collect(),
            trusted_domains: config
                .bot
                .trusted_domains
                .iter()
                .map(|d| normalize_domain(d))
                .collect(),
            max_candidates: config.discovery.max_candidates,
        }
    }

    pub fn is_excluded(&self, domain: &str) -> bool {
        self.excluded_domain_fragments
            .iter()
            .any(|f| domain.contains(f.as_str()))
    }
}
