use std::collections::{BTreeSet, HashSet};

use crate::domain::Candidate;

/// Why a candidate was dropped without being fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// URL has no parseable host
    NoDomain,
    /// Domain matches an excluded fragment
    Excluded,
    Blacklisted,
    /// Unknown domain under the trusted-only policy
    Untrusted,
    /// Already in history, or already in this run's pool
    Duplicate,
}

/// Terminal state of a candidate in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rejected(RejectReason),
    /// Number of pages posted from this candidate
    Posted(usize),
    FetchFailed { blacklisted: bool },
    PublishFailed,
}

/// Summary of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub off_day: bool,
    pub discovered: usize,
    pub pooled: usize,
    pub learned: Vec<String>,
    pub posted: usize,
    pub duplicates: usize,
    pub rejected: usize,
    pub fetch_failed: usize,
    pub publish_failed: usize,
    pub blacklisted: Vec<String>,
    /// Pool entries never processed because the cap was hit
    pub skipped_by_cap: usize,
}

/// Ephemeral bookkeeping for a single run.
#[derive(Debug)]
pub struct RunState {
    pool: Vec<Candidate>,
    pooled_urls: HashSet<String>,
    new_domains: BTreeSet<String>,
    post_cap: usize,
    report: RunReport,
}

impl RunState {
    pub fn new(post_cap: usize) -> Self {
        Self {
            pool: Vec::new(),
            pooled_urls: HashSet::new(),
            new_domains: BTreeSet::new(),
            post_cap,
            report: RunReport::default(),
        }
    }

    pub fn note_discovered(&mut self) {
        self.report.discovered += 1;
    }

    /// Add to the pool unless the URL is already there. First occurrence wins.
    pub fn add_candidate(&mut self, candidate: Candidate) -> bool {
        if !self.pooled_urls.insert(candidate.url.clone()) {
            return false;
        }
        self.pool.push(candidate);
        true
    }

    pub fn note_new_domain(&mut self, domain: String) {
        self.new_domains.insert(domain);
    }

    pub fn new_domains(&self) -> &BTreeSet<String> {
        &self.new_domains
    }

    /// Keep at most `max` pooled candidates; 0 keeps everything.
    pub fn limit_pool(&mut self, max: usize) {
        if max > 0 && self.pool.len() > max {
            tracing::info!(kept = max, dropped = self.pool.len() - max, "Limiting candidate pool");
            self.pool.truncate(max);
        }
    }

    pub fn take_pool(&mut self) -> Vec<Candidate> {
        self.report.pooled = self.pool.len();
        std::mem::take(&mut self.pool)
    }

    pub fn posted(&self) -> usize {
        self.report.posted
    }

    pub fn cap_reached(&self) -> bool {
        self.report.posted >= self.post_cap
    }

    /// Count one successful post. Never exceeds the cap.
    pub fn record_post(&mut self) -> bool {
        if self.cap_reached() {
            return false;
        }
        self.report.posted += 1;
        true
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Rejected(RejectReason::Duplicate) => self.report.duplicates += 1,
            Outcome::Rejected(_) => self.report.rejected += 1,
            Outcome::Posted(_) => {}
            Outcome::FetchFailed { .. } => self.report.fetch_failed += 1,
            Outcome::PublishFailed => self.report.publish_failed += 1,
        }
    }

    pub fn record_blacklisted(&mut self, domain: &str) {
        self.report.blacklisted.push(domain.to_string());
    }

    pub fn skip_by_cap(&mut self, count: usize) {
        self.report.skipped_by_cap += count;
    }

    pub fn finish(self, learned: Vec<String>) -> RunReport {
        RunReport {
            learned,
            ..self.report
        }
    }
}
