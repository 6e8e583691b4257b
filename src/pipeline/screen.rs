use crate::domain::{classify, Blacklist, Candidate, DomainClass, TrustedDomains};
use crate::pipeline::{RejectReason, RunPolicy};

/// Decision taken for a freshly discovered candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screening {
    /// Trusted domain; goes into the pool
    Admitted,
    /// Unknown domain, surfaced for learning; pooled only if `admitted`
    NewDomain { domain: String, admitted: bool },
    Rejected(RejectReason),
}

/// Classify a candidate's domain against the current trust state.
pub fn screen(
    candidate: &Candidate,
    trusted: &TrustedDomains,
    blacklist: &Blacklist,
    policy: &RunPolicy,
) -> Screening {
    let domain = candidate.domain();
    if domain.is_empty() {
        return Screening::Rejected(RejectReason::NoDomain);
    }
    if policy.is_excluded(&domain) {
        return Screening::Rejected(RejectReason::Excluded);
    }

    match classify(&domain, trusted, blacklist) {
        DomainClass::Blacklisted => Screening::Rejected(RejectReason::Blacklisted),
        DomainClass::Trusted => Screening::Admitted,
        DomainClass::Unknown => Screening::NewDomain {
            domain,
            admitted: policy.admit_unknown_domains,
        },
    }
}
