//! Proxy selectors and the platform environment implementation.

use url::Url;

use crate::config::ConfigSources;

use super::bypass::BypassList;
use super::candidate::ProxyCandidate;

/// Supplies proxy candidates for a target URL, in preference order.
///
/// Consumers look at the first candidate only; an empty list means the
/// selector has no opinion and the connection is made directly.
pub trait ProxySelector: Send + Sync {
    /// Proxy candidates for `target`, best first.
    fn select(&self, target: &Url) -> Vec<ProxyCandidate>;
}

/// Proxy selector reading the de-facto Unix environment convention.
///
/// `HTTPS_PROXY`/`https_proxy` applies to `https` targets and
/// `HTTP_PROXY`/`http_proxy` to `http` targets, with `ALL_PROXY`/`all_proxy`
/// as the fallback for any scheme. Uppercase names win over lowercase, empty
/// values count as unset, and hosts matched by `NO_PROXY`/`no_proxy` yield a
/// direct candidate. All values come from a [`ConfigSources`] snapshot, never
/// from live process state.
#[derive(Debug, Clone)]
pub struct SystemProxySelector {
    http_proxy: Option<String>,
    https_proxy: Option<String>,
    all_proxy: Option<String>,
    bypass: BypassList,
}

impl SystemProxySelector {
    /// Read the proxy environment out of a configuration snapshot.
    #[must_use]
    pub fn from_sources(sources: &ConfigSources) -> Self {
        Self {
            http_proxy: proxy_var(sources, "HTTP_PROXY", "http_proxy"),
            https_proxy: proxy_var(sources, "HTTPS_PROXY", "https_proxy"),
            all_proxy: proxy_var(sources, "ALL_PROXY", "all_proxy"),
            bypass: BypassList::from_string(
                env_var(sources, "NO_PROXY")
                    .or_else(|| env_var(sources, "no_proxy"))
                    .unwrap_or(""),
            ),
        }
    }

    /// The configured bypass rules.
    #[must_use]
    pub fn bypass(&self) -> &BypassList {
        &self.bypass
    }
}

impl ProxySelector for SystemProxySelector {
    fn select(&self, target: &Url) -> Vec<ProxyCandidate> {
        if let Some(host) = target.host_str() {
            if self.bypass.matches(host) {
                return vec![ProxyCandidate::Direct];
            }
        }

        let raw = match target.scheme() {
            "https" => self.https_proxy.as_deref(),
            "http" => self.http_proxy.as_deref(),
            _ => None,
        }
        .or(self.all_proxy.as_deref());

        match raw.and_then(parse_candidate) {
            Some(candidate) => vec![candidate],
            None => Vec::new(),
        }
    }
}

/// Environment variable pair lookup: uppercase first, then lowercase.
/// An empty value counts as unset and falls through.
fn proxy_var(sources: &ConfigSources, upper: &str, lower: &str) -> Option<String> {
    env_var(sources, upper)
        .or_else(|| env_var(sources, lower))
        .map(str::to_owned)
}

/// Set, non-empty environment variable from the snapshot.
fn env_var<'a>(sources: &'a ConfigSources, name: &str) -> Option<&'a str> {
    sources.env(name).filter(|value| !value.is_empty())
}

/// Parse one proxy variable value into a candidate.
///
/// Values that fail to parse as a URL or carry no host are dropped with a
/// warning. Schemes other than `http`/`https` become unsupported candidates
/// so the caller can report them.
fn parse_candidate(raw: &str) -> Option<ProxyCandidate> {
    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(error) => {
            tracing::warn!(
                target: "mortar::proxy",
                value = %raw,
                error = %error,
                "Ignoring unparseable proxy environment value"
            );
            return None;
        }
    };

    if !url.username().is_empty() || url.password().is_some() {
        // Credentials embedded in the URL are never forwarded.
        tracing::warn!(
            target: "mortar::proxy",
            host = %url.host_str().unwrap_or("<none>"),
            "Ignoring credentials embedded in a proxy variable; configure http.proxyUser instead"
        );
    }

    let Some(host) = url.host_str() else {
        tracing::warn!(
            target: "mortar::proxy",
            value = %raw,
            "Ignoring proxy environment value without a host"
        );
        return None;
    };
    let host = host.to_owned();

    match url.scheme() {
        "http" | "https" => match url.port_or_known_default() {
            Some(port) => Some(ProxyCandidate::Http { host, port }),
            None => {
                tracing::warn!(
                    target: "mortar::proxy",
                    value = %raw,
                    "Ignoring proxy environment value without a usable port"
                );
                None
            }
        },
        other => Some(ProxyCandidate::Unsupported {
            scheme: other.to_owned(),
        }),
    }
}
