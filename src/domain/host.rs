use url::Url;

/// Extract the normalized host of a URL: lowercase, leading `www.` removed.
///
/// Malformed URLs and URLs without a host yield an empty string, which
/// matches no trusted domain and is never blacklisted.
pub fn extract_domain(url: &str) -> String {
    Url::parse(url.trim())
        .ok()
        .and_then(|u| u.host_str().map(normalize_domain))
        .unwrap_or_default()
}

/// Normalize a domain typed by a user or read from config.
pub fn normalize_domain(domain: &str) -> String {
    let domain = domain.trim().trim_end_matches('.').to_lowercase();
    match domain.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => domain,
    }
}
