//! WHOIS registration lookup.

use regex::Regex;
use tokio::time::{timeout, Duration};
use whois_rust::{WhoIs, WhoIsLookupOptions};

use crate::error::{ReconError, ReconResult};
use crate::types::RegistrationRecord;

const WHOIS_TIMEOUT_SECS: u64 = 10;

/// Query a registration database for a domain.
///
/// `whois_servers` is the embedded TLD → server JSON map. Every failure mode
/// — unreachable server, unsupported TLD, timeout — comes back as a
/// descriptive error value; the caller always receives a result.
pub(crate) async fn whois_lookup(
    domain: &str,
    whois_servers: &str,
) -> ReconResult<RegistrationRecord> {
    timeout(
        Duration::from_secs(WHOIS_TIMEOUT_SECS),
        whois_lookup_inner(domain, whois_servers),
    )
    .await
    .map_err(|_| {
        ReconError::Lookup(format!(
            "WHOIS lookup failed: timed out ({WHOIS_TIMEOUT_SECS}s)"
        ))
    })?
}

async fn whois_lookup_inner(
    domain: &str,
    whois_servers: &str,
) -> ReconResult<RegistrationRecord> {
    let whois = WhoIs::from_string(whois_servers)
        .map_err(|e| ReconError::Lookup(format!("WHOIS lookup failed: {e}")))?;

    let options = WhoIsLookupOptions::from_string(domain)
        .map_err(|e| ReconError::Lookup(format!("WHOIS lookup failed: {e}")))?;

    let raw = whois
        .lookup_async(options)
        .await
        .map_err(|e| ReconError::Lookup(format!("WHOIS lookup failed: {e}")))?;

    Ok(parse_whois_response(domain, &raw))
}

/// Parse structured registration fields from a raw WHOIS response.
///
/// Registries disagree on field labels and date formats, so each field is
/// tried against several known dialects and kept as a display string.
fn parse_whois_response(domain: &str, raw: &str) -> RegistrationRecord {
    RegistrationRecord {
        domain_name: extract_field(raw, &[r"(?i)Domain Name:\s*(.+)", r"(?im)^domain:\s*(.+)"])
            .map(|name| name.to_lowercase())
            .or_else(|| Some(domain.to_string())),
        registrar: extract_field(
            raw,
            &[
                r"(?i)Registrar:\s*(.+)",
                r"(?i)Registrar Name:\s*(.+)",
                r"(?i)Sponsoring Registrar:\s*(.+)",
            ],
        ),
        creation_date: extract_field(
            raw,
            &[
                r"(?i)Creation Date:\s*(.+)",
                r"(?i)Created Date:\s*(.+)",
                r"(?i)Created:\s*(.+)",
                r"(?i)Registration Time:\s*(.+)",
                r"(?i)Registration Date:\s*(.+)",
            ],
        ),
        expiration_date: extract_field(
            raw,
            &[
                r"(?i)Expir(?:y|ation) Date:\s*(.+)",
                r"(?i)Registry Expiry Date:\s*(.+)",
                r"(?i)Expiration Time:\s*(.+)",
                r"(?i)paid-till:\s*(.+)",
            ],
        ),
        name_servers: extract_name_servers(raw),
        emails: extract_emails(raw),
    }
}

/// Try multiple regex patterns and return the first match.
fn extract_field(text: &str, patterns: &[&str]) -> Option<String> {
    for pattern in patterns {
        let Ok(re) = Regex::new(pattern) else {
            continue;
        };
        if let Some(value) = re
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
        {
            if !value.is_empty() {
                return Some(value);
            }
        }
    }
    None
}

/// Extract name servers from WHOIS text, lowercased and deduplicated.
fn extract_name_servers(text: &str) -> Vec<String> {
    let mut servers = Vec::new();
    let patterns = [
        r"(?i)Name Server:\s*(.+)",
        r"(?i)nserver:\s*(.+)",
        r"(?i)DNS:\s*(.+)",
    ];

    for pattern in patterns {
        let Ok(re) = Regex::new(pattern) else {
            continue;
        };
        for caps in re.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                let server = m.as_str().trim().to_lowercase();
                if !server.is_empty() && !servers.contains(&server) {
                    servers.push(server);
                }
            }
        }
    }

    servers
}

/// Extract contact email addresses from WHOIS text, deduplicated.
fn extract_emails(text: &str) -> Vec<String> {
    let mut emails = Vec::new();
    let Ok(re) = Regex::new(r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}") else {
        return emails;
    };
    for m in re.find_iter(text) {
        let email = m.as_str().to_lowercase();
        if !emails.contains(&email) {
            emails.push(email);
        }
    }
    emails
}
