//! Fixed-set DNS record collection.

use log::debug;

use hickory_resolver::TokioResolver;

use crate::services::resolver::SHARED_RESOLVER;
use crate::types::DnsRecordSet;

/// Query the four fixed record types (A, MX, NS, TXT) for a domain.
///
/// The four queries run concurrently and are fully independent: any failure
/// — NXDOMAIN, timeout, type simply not present — leaves that type's list
/// empty and never affects the others. Absence of a record type is a normal
/// outcome here, not an error.
pub(crate) async fn collect_records(domain: &str) -> DnsRecordSet {
    debug!("[DNS] collecting records for {domain}");
    let resolver = &*SHARED_RESOLVER;

    let (a, mx, ns, txt) = tokio::join!(
        lookup_a(resolver, domain),
        lookup_mx(resolver, domain),
        lookup_ns(resolver, domain),
        lookup_txt(resolver, domain),
    );

    DnsRecordSet { a, mx, ns, txt }
}

async fn lookup_a(resolver: &TokioResolver, domain: &str) -> Vec<String> {
    let mut values = Vec::new();
    if let Ok(response) = resolver.ipv4_lookup(domain).await {
        for ip in response.iter() {
            values.push(ip.to_string());
        }
    }
    values
}

async fn lookup_mx(resolver: &TokioResolver, domain: &str) -> Vec<String> {
    let mut values = Vec::new();
    if let Ok(response) = resolver.mx_lookup(domain).await {
        for mx in response.iter() {
            values.push(format!(
                "{} {}",
                mx.preference(),
                mx.exchange().to_string().trim_end_matches('.')
            ));
        }
    }
    values
}

async fn lookup_ns(resolver: &TokioResolver, domain: &str) -> Vec<String> {
    let mut values = Vec::new();
    if let Ok(response) = resolver.ns_lookup(domain).await {
        for ns in response.iter() {
            values.push(ns.to_string().trim_end_matches('.').to_string());
        }
    }
    values
}

async fn lookup_txt(resolver: &TokioResolver, domain: &str) -> Vec<String> {
    let mut values = Vec::new();
    if let Ok(response) = resolver.txt_lookup(domain).await {
        for txt in response.iter() {
            let txt_data: String = txt
                .iter()
                .map(|data| String::from_utf8_lossy(data).to_string())
                .collect::<String>();
            values.push(txt_data);
        }
    }
    values
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
    async fn test_collect_records_real() {
        let records = collect_records("example.com").await;
        assert!(!records.a.is_empty(), "example.com should have A records");
        assert!(!records.ns.is_empty(), "example.com should have NS records");
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_collect_records_nxdomain_yields_empty_set() {
        // One failing type must not poison the struct: for a non-existent
        // domain every list is empty but the set itself is still complete.
        let records = collect_records("this-domain-does-not-exist-4b1c9d.invalid").await;
        assert_eq!(records, DnsRecordSet::default());
    }
}
