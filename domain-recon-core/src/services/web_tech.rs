//! Web server fingerprinting via a single HTTP GET.

use std::sync::LazyLock;

use log::debug;
use reqwest::header::HeaderMap;
use reqwest::Client;

use crate::error::{ReconError, ReconResult};
use crate::types::WebFingerprint;

const REQUEST_TIMEOUT_SECS: u64 = 5;

/// Sentinel used when a fingerprint header is absent.
const ABSENT: &str = "N/A";

/// Shared HTTP client with configured timeout and redirect policy.
static HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::limited(5))
        .user_agent(concat!("domain-recon/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default()
});

/// Fetch the domain over HTTP and extract header-derived signals.
///
/// Prefixes `http://` when no scheme is present, follows redirects, and
/// reports the final status code plus the `Server` and `X-Powered-By`
/// headers (`"N/A"` when absent). Any transport failure — refused
/// connection, timeout, DNS, TLS — becomes a descriptive error value.
pub(crate) async fn web_fingerprint(domain: &str) -> ReconResult<WebFingerprint> {
    let url = if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("http://{domain}")
    };
    debug!("[WEB] fetching {url}");

    let response = HTTP_CLIENT
        .get(&url)
        .send()
        .await
        .map_err(|e| ReconError::Lookup(format!("Web tech detection failed: {e}")))?;

    let fingerprint = fingerprint_from(response.status().as_u16(), response.headers());
    debug!(
        "[WEB] {url}: status={}, server={}",
        fingerprint.status_code, fingerprint.server
    );
    Ok(fingerprint)
}

/// Build a fingerprint from a status code and response headers.
fn fingerprint_from(status_code: u16, headers: &HeaderMap) -> WebFingerprint {
    let header_or_absent = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(ABSENT)
            .to_string()
    };

    WebFingerprint {
        server: header_or_absent("server"),
        powered_by: header_or_absent("x-powered-by"),
        status_code,
    }
}
