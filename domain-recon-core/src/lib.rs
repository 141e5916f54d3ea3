//! Lightweight domain reconnaissance.
//!
//! Given a target domain, this crate queries several independent data
//! sources — WHOIS registration data, forward DNS, a bounded list of
//! candidate subdomains, and the domain's HTTP response headers — and
//! merges everything into a single [`Report`]. Every source is allowed
//! to fail on its own: a dead WHOIS server or an unresolvable host
//! degrades one report field, never the whole report.

mod error;
mod services;
mod types;

pub use error::{ReconError, ReconResult};
pub use services::ReconService;
pub use types::{
    DnsRecordSet, RegistrationRecord, Report, Sourced, SubdomainHit, WebFingerprint,
};
