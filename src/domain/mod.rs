pub mod candidate;
pub mod host;
pub mod trust;

pub use candidate::{Candidate, PageEntry};
pub use host::{extract_domain, normalize_domain};
pub use trust::{classify, Blacklist, DomainClass, TrustedDomains};
