use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::app::Result;
use crate::discovery::{discover_all, Source};
use crate::domain::{Blacklist, Candidate, PageEntry, TrustedDomains};
use crate::fetcher::{FetchChain, FetchOutcome};
use crate::message;
use crate::pacing::Pacer;
use crate::pipeline::{screen, Outcome, RejectReason, RunPolicy, RunReport, RunState, Screening};
use crate::publisher::Publisher;
use crate::store::{History, Store};

/// Executes one bot run against a store.
pub struct Runner<S: Store> {
    store: Arc<S>,
    sources: Vec<Source>,
    chain: FetchChain,
    publisher: Box<dyn Publisher + Send + Sync>,
    pacer: Pacer,
    policy: RunPolicy,
}

impl<S: Store> Runner<S> {
    pub fn new(
        store: Arc<S>,
        sources: Vec<Source>,
        chain: FetchChain,
        publisher: Box<dyn Publisher + Send + Sync>,
        pacer: Pacer,
        policy: RunPolicy,
    ) -> Self {
        Self {
            store,
            sources,
            chain,
            publisher,
            pacer,
            policy,
        }
    }

    /// Whether posts leave the process.
    pub fn is_live(&self) -> bool {
        self.publisher.is_live()
    }

    pub fn strategy_names(&self) -> Vec<&str> {
        self.chain.names()
    }

    pub async fn run(&self) -> Result<RunReport> {
        let off_day = self.pacer.is_off_day(&mut rand::thread_rng());
        if off_day {
            info!("Off day, nothing will be posted");
            return Ok(RunReport {
                off_day: true,
                ..RunReport::default()
            });
        }

        let mut history = self.store.load_history()?;
        let mut trusted = TrustedDomains::new(
            &self.policy.trusted_domains,
            self.store.load_learned_domains()?,
        );
        let mut blacklist = Blacklist::new(self.store.load_blacklist()?);

        info!(
            publisher = self.publisher.name(),
            live = self.publisher.is_live(),
            history = history.len(),
            trusted = trusted.len(),
            blacklisted = blacklist.len(),
            strategies = ?self.chain.names(),
            "Starting run"
        );

        let mut state = RunState::new(self.policy.post_cap);
        for candidate in discover_all(&self.sources).await {
            state.note_discovered();
            self.consider(candidate, &trusted, &blacklist, &mut state);
        }

        let learned = self.commit_learning(&mut trusted, state.new_domains())?;

        state.limit_pool(self.policy.max_candidates);
        let pool = state.take_pool();
        info!(candidates = pool.len(), cap = self.policy.post_cap, "Processing candidates");

        let mut pool = pool.into_iter();
        while let Some(candidate) = pool.next() {
            if state.cap_reached() {
                info!(cap = self.policy.post_cap, "Reached post cap");
                state.skip_by_cap(1 + pool.len());
                break;
            }

            let outcome = self
                .process(&candidate, &mut state, &mut history, &mut blacklist)
                .await?;
            debug!(url = %candidate.url, ?outcome, "Candidate done");
            state.record(outcome);
        }

        let report = state.finish(learned);
        info!(
            discovered = report.discovered,
            pooled = report.pooled,
            posted = report.posted,
            duplicates = report.duplicates,
            fetch_failed = report.fetch_failed,
            blacklisted = report.blacklisted.len(),
            learned = report.learned.len(),
            "Run complete"
        );
        if !self.publisher.is_live() {
            info!("Safe mode run complete, nothing was posted");
        }

        Ok(report)
    }

    /// Screen a discovered candidate and pool it if eligible.
    fn consider(
        &self,
        candidate: Candidate,
        trusted: &TrustedDomains,
        blacklist: &Blacklist,
        state: &mut RunState,
    ) {
        let admitted = match screen(&candidate, trusted, blacklist, &self.policy) {
            Screening::Admitted => true,
            Screening::NewDomain { domain, admitted } => {
                debug!(domain = %domain, "New candidate domain");
                state.note_new_domain(domain);
                if !admitted {
                    state.record(Outcome::Rejected(RejectReason::Untrusted));
                }
                admitted
            }
            Screening::Rejected(reason) => {
                debug!(url = %candidate.url, ?reason, "Rejected at discovery");
                state.record(Outcome::Rejected(reason));
                false
            }
        };

        if admitted && !state.add_candidate(candidate) {
            state.record(Outcome::Rejected(RejectReason::Duplicate));
        }
    }

    /// Learn up to the daily cap of new domains and persist the delta.
    fn commit_learning(
        &self,
        trusted: &mut TrustedDomains,
        new_domains: &BTreeSet<String>,
    ) -> Result<Vec<String>> {
        if new_domains.is_empty() {
            return Ok(Vec::new());
        }

        let learned = trusted.commit_learning(new_domains, self.policy.new_domain_cap);
        if learned.is_empty() {
            return Ok(learned);
        }

        info!(
            domains = ?learned,
            surfaced = new_domains.len(),
            cap = self.policy.new_domain_cap,
            "Learning new trusted domains"
        );
        self.store.save_learned_domains(&trusted.learned())?;
        Ok(learned)
    }

    async fn process(
        &self,
        candidate: &Candidate,
        state: &mut RunState,
        history: &mut History,
        blacklist: &mut Blacklist,
    ) -> Result<Outcome> {
        if history.contains(&candidate.url) {
            info!(url = %candidate.url, "Skipping duplicate from history");
            return Ok(Outcome::Rejected(RejectReason::Duplicate));
        }

        // The domain may have been blacklisted earlier in this run
        let domain = candidate.domain();
        if blacklist.contains(&domain) {
            info!(url = %candidate.url, domain = %domain, "Skipping blacklisted domain");
            return Ok(Outcome::Rejected(RejectReason::Blacklisted));
        }

        match self.chain.fetch(candidate).await {
            FetchOutcome::Content { entries, .. } => {
                self.publish_entries(candidate, entries, state, history)
                    .await
            }
            FetchOutcome::Exhausted { rate_limited } => {
                warn!(url = %candidate.url, rate_limited, "No usable data");
                let blacklisted = rate_limited && blacklist.insert(&domain);
                if blacklisted {
                    warn!(domain = %domain, "Blacklisting domain after rate limiting");
                    self.store.save_blacklist(blacklist.as_slice())?;
                    state.record_blacklisted(&domain);
                }
                Ok(Outcome::FetchFailed { blacklisted })
            }
        }
    }

    async fn publish_entries(
        &self,
        candidate: &Candidate,
        entries: Vec<PageEntry>,
        state: &mut RunState,
        history: &mut History,
    ) -> Result<Outcome> {
        let mut posted = 0;
        let mut failed = 0;

        for entry in entries {
            if state.cap_reached() {
                break;
            }
            if entry.url.trim().is_empty() {
                continue;
            }
            if history.contains(&entry.url) {
                debug!(url = %entry.url, "Page already in history");
                continue;
            }

            let text = message::compose(entry.display_title(), &entry.url, &mut rand::thread_rng());
            self.pacer.wait_before_post(&entry.url).await;

            match self.publisher.publish(&text).await {
                Ok(_) => {
                    history.insert(&entry.url);
                    history.insert(&candidate.url);
                    self.store.save_history(history)?;
                    state.record_post();
                    posted += 1;
                }
                Err(e) => {
                    error!(url = %entry.url, error = %e, "Publish failed");
                    failed += 1;
                }
            }
        }

        Ok(if posted > 0 {
            Outcome::Posted(posted)
        } else if failed > 0 {
            Outcome::PublishFailed
        } else {
            Outcome::Rejected(RejectReason::Duplicate)
        })
    }
}
