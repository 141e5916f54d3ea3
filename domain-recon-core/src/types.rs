//! Public types returned by reconnaissance operations.

use serde::{Deserialize, Serialize};

use crate::error::{ReconError, ReconResult};

/// Per-source result embedded in a [`Report`].
///
/// Serializes transparently: a successful value is emitted as-is, a failed
/// source becomes `{"error": "<message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Sourced<T> {
    // The error arm must come first: untagged deserialization tries the
    // variants in order, and payloads whose fields are all optional would
    // otherwise swallow `{"error": ...}` objects.
    /// The source failed; carries a human-readable message.
    Err {
        /// Description of the failure.
        error: String,
    },
    /// The source produced a value.
    Ok(T),
}

impl<T> Sourced<T> {
    /// Returns `true` for the success arm.
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns the success value, if any.
    pub const fn as_ok(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err { .. } => None,
        }
    }

    /// Returns the error message, if any.
    pub fn as_err(&self) -> Option<&str> {
        match self {
            Self::Ok(_) => None,
            Self::Err { error } => Some(error),
        }
    }
}

impl<T> From<ReconResult<T>> for Sourced<T> {
    fn from(result: ReconResult<T>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(e) => Self::Err {
                error: e.to_string(),
            },
        }
    }
}

impl<T> From<ReconError> for Sourced<T> {
    fn from(e: ReconError) -> Self {
        Self::Err {
            error: e.to_string(),
        }
    }
}

/// WHOIS registration data parsed from the raw registry response.
///
/// Registry output has no fixed schema, so every field is a display string
/// that may simply be absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationRecord {
    /// The domain name as reported by the registry (falls back to the
    /// queried domain).
    pub domain_name: Option<String>,
    /// Sponsoring registrar (e.g. "Cloudflare, Inc.").
    pub registrar: Option<String>,
    /// Registration creation date, verbatim registry formatting.
    pub creation_date: Option<String>,
    /// Registration expiration date, verbatim registry formatting.
    pub expiration_date: Option<String>,
    /// Authoritative name servers, lowercased and deduplicated.
    pub name_servers: Vec<String>,
    /// Contact email addresses found in the response, deduplicated.
    pub emails: Vec<String>,
}

/// Values of the four fixed DNS record types queried for a domain.
///
/// A type with no records maps to an empty list; the serialized form always
/// carries all four keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DnsRecordSet {
    /// IPv4 address records.
    #[serde(rename = "A")]
    pub a: Vec<String>,
    /// Mail exchange records, rendered as `"preference exchange"`.
    #[serde(rename = "MX")]
    pub mx: Vec<String>,
    /// Name server records, trailing dots removed.
    #[serde(rename = "NS")]
    pub ns: Vec<String>,
    /// Text records, character-strings concatenated.
    #[serde(rename = "TXT")]
    pub txt: Vec<String>,
}

/// A candidate subdomain that resolved successfully.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubdomainHit {
    /// Fully qualified probed name (e.g. `www.example.com`).
    pub subdomain: String,
    /// First IP address the name resolved to.
    pub ip: String,
}

/// Header-derived signals from the domain's web server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebFingerprint {
    /// `Server` response header, `"N/A"` when absent.
    pub server: String,
    /// `X-Powered-By` response header, `"N/A"` when absent.
    pub powered_by: String,
    /// HTTP status code of the final response after redirects.
    pub status_code: u16,
}

/// Combined reconnaissance report for one domain.
///
/// Built fresh per request; the sources are independent, so any subset of
/// `whois`, `ip`, and `web_tech` may carry an error while the rest are
/// populated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    /// The validated, normalized target domain.
    pub domain: String,
    /// Registration data, or the WHOIS failure.
    pub whois: Sourced<RegistrationRecord>,
    /// Primary IP address, or the resolution failure.
    pub ip: Sourced<String>,
    /// Records for the four fixed DNS record types.
    pub dns: DnsRecordSet,
    /// Candidate subdomains that resolved, in candidate-list order.
    pub subdomains: Vec<SubdomainHit>,
    /// Web server fingerprint, or the HTTP failure.
    pub web_tech: Sourced<WebFingerprint>,
}
