//! Shared DNS resolver used across service modules.

use std::sync::LazyLock;

use hickory_resolver::{
    config::{ResolverConfig, ResolverOpts},
    name_server::TokioConnectionProvider,
    TokioResolver,
};

/// Shared default DNS resolver.
///
/// On Unix/Windows this uses the host system configuration (e.g.
/// `/etc/resolv.conf`). If the system configuration cannot be loaded, it
/// falls back to Hickory's default upstream set (Google Public DNS).
pub(crate) static SHARED_RESOLVER: LazyLock<TokioResolver> = LazyLock::new(build_system_resolver);

/// Build a resolver from the host system DNS configuration (with fallback).
fn build_system_resolver() -> TokioResolver {
    #[cfg(any(unix, target_os = "windows"))]
    {
        match TokioResolver::builder_tokio() {
            Ok(builder) => return builder.build(),
            Err(e) => {
                log::warn!("Failed to load system DNS configuration, falling back to defaults: {e}");
            }
        }
    }

    let provider = TokioConnectionProvider::default();
    TokioResolver::builder_with_config(ResolverConfig::default(), provider)
        .with_options(ResolverOpts::default())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_resolver_accessible() {
        // Accessing the lazy static should not panic.
        let _resolver = &*SHARED_RESOLVER;
    }
}
