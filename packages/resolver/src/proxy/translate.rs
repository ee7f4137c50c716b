//! Translation from platform proxy configuration to engine descriptors.

use url::Url;

use crate::config::{ConfigSources, keys};
use crate::repository::RepositoryDescriptor;

use super::candidate::ProxyCandidate;
use super::descriptor::{Credentials, ProxyDescriptor};
use super::selector::ProxySelector;

/// Attach a proxy to `repository` when the selector routes its URL through
/// one.
///
/// Only the first candidate counts; alternates from an ordered selector are
/// ignored. An unparseable repository URL or an unsupported proxy kind
/// degrades to a direct connection with a warning, so session setup never
/// fails here.
#[must_use]
pub fn attach_proxy(
    repository: RepositoryDescriptor,
    sources: &ConfigSources,
    selector: &dyn ProxySelector,
) -> RepositoryDescriptor {
    let target = match Url::parse(repository.url()) {
        Ok(target) => target,
        Err(error) => {
            tracing::warn!(
                target: "mortar::proxy",
                url = %repository.url(),
                error = %error,
                "Cannot select a proxy for an unparseable repository URL; connecting directly"
            );
            return repository;
        }
    };

    match selector.select(&target).into_iter().next() {
        None | Some(ProxyCandidate::Direct) => repository,
        Some(ProxyCandidate::Http { host, port }) => {
            // The descriptor carries the target's scheme; the engine keys
            // proxy applicability off the repository protocol.
            let descriptor =
                ProxyDescriptor::new(target.scheme(), host, port, proxy_credentials(sources));
            repository.with_proxy(descriptor)
        }
        Some(ProxyCandidate::Unsupported { scheme }) => {
            tracing::warn!(
                target: "mortar::proxy",
                url = %repository.url(),
                scheme = %scheme,
                "Configured proxy kind is not supported; connecting directly"
            );
            repository
        }
    }
}

/// Proxy credentials from host properties.
///
/// Present only when `http.proxyUser` resolves to a non-empty username; the
/// password defaults to the empty string.
#[must_use]
pub fn proxy_credentials(sources: &ConfigSources) -> Option<Credentials> {
    let username = sources.resolve(&keys::PROXY_USER);
    if username.is_empty() {
        return None;
    }

    Some(Credentials::new(
        username,
        sources.resolve(&keys::PROXY_PASSWORD),
    ))
}
