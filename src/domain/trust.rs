use std::collections::{BTreeSet, HashSet};

use crate::domain::host::normalize_domain;

/// How a domain is treated when selecting candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainClass {
    Trusted,
    Unknown,
    Blacklisted,
}

/// Built-in domains plus those learned on earlier runs.
///
/// Only the learned delta is ever persisted; a built-in domain is never part
/// of it.
#[derive(Debug, Clone, Default)]
pub struct TrustedDomains {
    builtin: BTreeSet<String>,
    learned: BTreeSet<String>,
}

impl TrustedDomains {
    pub fn new<B, L>(builtin: B, learned: L) -> Self
    where
        B: IntoIterator,
        B::Item: AsRef<str>,
        L: IntoIterator,
        L::Item: AsRef<str>,
    {
        let builtin: BTreeSet<String> = builtin
            .into_iter()
            .map(|d| normalize_domain(d.as_ref()))
            .filter(|d| !d.is_empty())
            .collect();

        let learned = learned
            .into_iter()
            .map(|d| normalize_domain(d.as_ref()))
            .filter(|d| !d.is_empty() && !builtin.contains(d))
            .collect();

        Self { builtin, learned }
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.builtin.contains(domain) || self.learned.contains(domain)
    }

    pub fn is_builtin(&self, domain: &str) -> bool {
        self.builtin.contains(domain)
    }

    /// The persisted delta beyond the built-in list, sorted.
    pub fn learned(&self) -> Vec<String> {
        self.learned.iter().cloned().collect()
    }

    pub fn builtin(&self) -> impl Iterator<Item = &str> {
        self.builtin.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.builtin.len() + self.learned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Learn at most `cap` new domains, taken in lexicographic order.
    ///
    /// Domains already trusted and the empty domain are ignored and do not
    /// consume the cap. Returns the domains actually added.
    pub fn commit_learning<I>(&mut self, new_domains: I, cap: usize) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let pending: BTreeSet<String> = new_domains
            .into_iter()
            .map(|d| normalize_domain(d.as_ref()))
            .filter(|d| !d.is_empty() && !self.contains(d))
            .collect();

        let accepted: Vec<String> = pending.into_iter().take(cap).collect();
        self.learned.extend(accepted.iter().cloned());
        accepted
    }
}

/// Domains permanently excluded from candidate selection.
///
/// Insertion order is kept so the persisted file reads chronologically.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    domains: Vec<String>,
    index: HashSet<String>,
}

impl Blacklist {
    pub fn new<I>(domains: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut blacklist = Self::default();
        for domain in domains {
            blacklist.insert(domain.as_ref());
        }
        blacklist
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.index.contains(domain)
    }

    /// Returns false if the domain was empty or already present.
    pub fn insert(&mut self, domain: &str) -> bool {
        let domain = normalize_domain(domain);
        if domain.is_empty() || !self.index.insert(domain.clone()) {
            return false;
        }
        self.domains.push(domain);
        true
    }

    pub fn remove(&mut self, domain: &str) -> bool {
        let domain = normalize_domain(domain);
        if !self.index.remove(&domain) {
            return false;
        }
        self.domains.retain(|d| d != &domain);
        true
    }

    pub fn as_slice(&self) -> &[String] {
        &self.domains
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Classify a normalized domain. The blacklist always wins over trust.
pub fn classify(domain: &str, trusted: &TrustedDomains, blacklist: &Blacklist) -> DomainClass {
    if blacklist.contains(domain) {
        DomainClass::Blacklisted
    } else if trusted.contains(domain) {
        DomainClass::Trusted
    } else {
        DomainClass::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trusted(builtin: &[&str], learned: &[&str]) -> TrustedDomains {
        TrustedDomains::new(builtin.iter(), learned.iter())
    }

    #[test]
    fn test_classify_blacklist_beats_trust() {
        let trusted = trusted(&["c.com"], &[]);
        let blacklist = Blacklist::new(["c.com"]);
        assert_eq!(classify("c.com", &trusted, &blacklist), DomainClass::Blacklisted);
    }

    #[test]
    fn test_classify_trusted_and_unknown() {
        let trusted = trusted(&["medium.com"], &["learned.io"]);
        let blacklist = Blacklist::default();
        assert_eq!(classify("medium.com", &trusted, &blacklist), DomainClass::Trusted);
        assert_eq!(classify("learned.io", &trusted, &blacklist), DomainClass::Trusted);
        assert_eq!(classify("new.dev", &trusted, &blacklist), DomainClass::Unknown);
    }

    #[test]
    fn test_empty_domain_is_never_trusted() {
        let trusted = trusted(&["medium.com", ""], &[""]);
        assert_eq!(
            classify("", &trusted, &Blacklist::default()),
            DomainClass::Unknown
        );
    }

    #[test]
    fn test_learned_excludes_builtin_on_load() {
        let trusted = trusted(&["medium.com"], &["medium.com", "www.blog.dev"]);
        assert_eq!(trusted.learned(), vec!["blog.dev"]);
        assert_eq!(trusted.len(), 2);
    }

    #[test]
    fn test_commit_learning_respects_cap_in_sorted_order() {
        let mut trusted = trusted(&["medium.com"], &[]);
        let learned = trusted.commit_learning(["zeta.io", "alpha.io", "mid.io"], 2);
        assert_eq!(learned, vec!["alpha.io", "mid.io"]);
        assert!(trusted.contains("alpha.io"));
        assert!(!trusted.contains("zeta.io"));
    }

    #[test]
    fn test_commit_learning_never_adds_builtin_to_delta() {
        let mut trusted = trusted(&["medium.com"], &[]);
        let learned = trusted.commit_learning(["medium.com", "new.io"], 5);
        assert_eq!(learned, vec!["new.io"]);
        assert_eq!(trusted.learned(), vec!["new.io"]);
    }

    #[test]
    fn test_commit_learning_zero_cap() {
        let mut trusted = trusted(&[], &[]);
        assert!(trusted.commit_learning(["a.io"], 0).is_empty());
        assert!(trusted.learned().is_empty());
    }

    #[test]
    fn test_commit_learning_skips_empty_domain() {
        let mut trusted = trusted(&[], &[]);
        assert_eq!(trusted.commit_learning(["", "b.io"], 1), vec!["b.io"]);
    }

    #[test]
    fn test_blacklist_insert_and_remove() {
        let mut blacklist = Blacklist::default();
        assert!(blacklist.insert("www.Slow.com"));
        assert!(!blacklist.insert("slow.com"));
        assert!(!blacklist.insert(""));
        assert!(blacklist.contains("slow.com"));
        assert_eq!(blacklist.as_slice(), &["slow.com".to_string()]);

        assert!(blacklist.remove("slow.com"));
        assert!(!blacklist.remove("slow.com"));
        assert!(blacklist.is_empty());
    }
}
