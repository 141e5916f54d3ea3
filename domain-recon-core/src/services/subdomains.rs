//! Bounded candidate-list subdomain probing.

use futures::future::join_all;
use log::debug;

use crate::services::resolver::SHARED_RESOLVER;
use crate::types::SubdomainHit;

/// Candidate labels probed under the target domain.
const SUBDOMAIN_CANDIDATES: &[&str] = &[
    "www", "mail", "ftp", "admin", "test", "dev", "api", "blog", "shop", "forum",
];

/// Hard cap on the number of probes, regardless of candidate-list growth.
const MAX_PROBES: usize = 10;

/// Probe each candidate label under `domain` via forward resolution.
///
/// Candidates that resolve contribute a [`SubdomainHit`] with their first
/// address; candidates that do not exist (or time out) are silently
/// discarded. Output preserves candidate-list order. Never probes more than
/// [`MAX_PROBES`] names — this is a demonstration-scale enumerator, not a
/// discovery tool.
pub(crate) async fn probe_subdomains(domain: &str) -> Vec<SubdomainHit> {
    debug!("[SUBDOMAINS] probing {} candidates under {domain}", MAX_PROBES.min(SUBDOMAIN_CANDIDATES.len()));

    let probes = SUBDOMAIN_CANDIDATES
        .iter()
        .take(MAX_PROBES)
        .map(|label| {
            let host = format!("{label}.{domain}");
            async move {
                let lookup = SHARED_RESOLVER.lookup_ip(host.as_str()).await.ok()?;
                let ip = lookup.iter().next()?;
                Some(SubdomainHit {
                    ip: ip.to_string(),
                    subdomain: host,
                })
            }
        });

    // join_all keeps candidate order; failed probes collapse to None.
    join_all(probes).await.into_iter().flatten().collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_list_within_probe_cap() {
        assert!(SUBDOMAIN_CANDIDATES.len() <= MAX_PROBES);
    }

    #[test]
    fn test_candidate_list_starts_with_www() {
        // Output ordering follows the candidate list, so the list itself is
        // part of the contract.
        assert_eq!(SUBDOMAIN_CANDIDATES.first(), Some(&"www"));
        assert_eq!(SUBDOMAIN_CANDIDATES.len(), 10);
    }

    // ==================== integration tests ====================

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_probe_subdomains_real() {
        let hits = probe_subdomains("google.com").await;
        assert!(
            hits.iter().any(|h| h.subdomain == "www.google.com"),
            "www.google.com should resolve"
        );
        // Order must follow the candidate list.
        let positions: Vec<usize> = hits
            .iter()
            .map(|h| {
                let label = h.subdomain.split('.').next().unwrap();
                SUBDOMAIN_CANDIDATES.iter().position(|c| *c == label).unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_probe_subdomains_nonexistent_domain_is_empty() {
        let hits = probe_subdomains("this-domain-does-not-exist-4b1c9d.invalid").await;
        assert!(hits.is_empty());
    }
}
