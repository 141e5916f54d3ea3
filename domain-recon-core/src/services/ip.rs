//! Primary IP address resolution.

use log::debug;

use crate::error::{ReconError, ReconResult};
use crate::services::resolver::SHARED_RESOLVER;

/// Resolve a domain to its primary IP address.
///
/// First answer wins, matching the behavior of a basic system resolver —
/// exactly one address is returned even when several exist.
pub(crate) async fn resolve_ip(domain: &str) -> ReconResult<String> {
    debug!("[IP] resolving {domain}");
    match SHARED_RESOLVER.lookup_ip(domain).await {
        Ok(lookup) => lookup
            .iter()
            .next()
            .map(|ip| ip.to_string())
            .ok_or_else(|| {
                ReconError::Lookup(format!("IP lookup failed: no address records for {domain}"))
            }),
        Err(e) => Err(ReconError::Lookup(format!("IP lookup failed: {e}"))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // ==================== integration tests ====================
    // NOTE: These depend on external networks; failures may be due to
    // network issues, not code bugs.

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_resolve_ip_real() {
        let ip = resolve_ip("example.com").await.unwrap();
        assert!(ip.parse::<std::net::IpAddr>().is_ok());
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_resolve_ip_nxdomain() {
        let result = resolve_ip("this-domain-does-not-exist-4b1c9d.invalid").await;
        assert!(matches!(result, Err(ReconError::Lookup(_))));
    }
}
