//! URL field parsing and validation

use std::net::IpAddr;

use serde_json::Value;
use url::{Host, Url};

use super::requote;

/// Split the raw `url` field into candidate URLs.
///
/// One leading and one trailing quote character are stripped before the
/// quote swap. A JSON array yields its string items; anything else yields
/// the sanitized text as a single candidate.
pub fn parse_urls(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix(['\'', '"'])
        .unwrap_or(trimmed);
    let trimmed = trimmed
        .strip_suffix(['\'', '"'])
        .unwrap_or(trimmed);
    let sanitized = requote(trimmed);

    if sanitized.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Value>(&sanitized) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => vec![sanitized],
    }
}

/// Parse a candidate into an absolute http(s) URL.
///
/// Candidates without a scheme are read as `https://`.
pub fn normalize_url(candidate: &str) -> Option<Url> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return None;
    }

    let lowered = candidate.to_ascii_lowercase();
    let with_scheme = if lowered.starts_with("http://") || lowered.starts_with("https://") {
        candidate.to_string()
    } else {
        format!("https://{}", candidate)
    };

    let url = Url::parse(&with_scheme).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    let host_ok = match url.host()? {
        Host::Ipv4(_) | Host::Ipv6(_) => true,
        Host::Domain(domain) => is_plausible_domain(domain),
    };
    host_ok.then_some(url)
}

/// Whether a candidate is a well-formed absolute web URL.
///
/// # Examples
/// ```
/// use research_core::is_valid_url;
/// assert!(is_valid_url("http://a.com"));
/// assert!(is_valid_url("doi.org/10.1000/182"));
/// assert!(!is_valid_url("bad"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    normalize_url(candidate).is_some()
}

/// Candidates from the raw field that pass validation, as given.
pub fn valid_links(raw: &str) -> Vec<String> {
    let links: Vec<String> = parse_urls(raw)
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| is_valid_url(c))
        .collect();
    if links.is_empty() && !raw.trim().is_empty() {
        tracing::debug!(raw, "no valid links in url field");
    }
    links
}

fn is_plausible_domain(domain: &str) -> bool {
    if domain == "localhost" || domain.parse::<IpAddr>().is_ok() {
        return true;
    }
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let mut labels = domain.split('.');
    let first_ok = labels.next().is_some_and(|l| !l.is_empty());
    let rest: Vec<&str> = labels.collect();
    first_ok && !rest.is_empty() && rest.iter().all(|l| !l.is_empty())
}
