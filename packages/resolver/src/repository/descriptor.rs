//! Repository descriptors.

use serde::{Deserialize, Serialize};

use crate::proxy::ProxyDescriptor;

/// On-disk layout of a repository.
///
/// Modern repositories all use the default layout; `Legacy` exists for the
/// flat pre-2005 structure some mirrors still serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryLayout {
    Default,
    Legacy,
}

impl RepositoryLayout {
    /// Layout identifier as the resolution engine spells it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RepositoryLayout::Default => "default",
            RepositoryLayout::Legacy => "legacy",
        }
    }
}

impl Default for RepositoryLayout {
    fn default() -> Self {
        RepositoryLayout::Default
    }
}

/// One repository the resolution engine consults: an identifier, a layout,
/// a URL and an optional proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
    id: String,
    layout: RepositoryLayout,
    url: String,
    proxy: Option<ProxyDescriptor>,
}

impl RepositoryDescriptor {
    /// New repository without a proxy.
    pub fn new(id: impl Into<String>, layout: RepositoryLayout, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            layout,
            url: url.into(),
            proxy: None,
        }
    }

    /// Repository identifier, unique within one setup.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// On-disk layout of the repository.
    #[must_use]
    pub fn layout(&self) -> RepositoryLayout {
        self.layout
    }

    /// Repository URL as configured, unnormalized.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Proxy to reach this repository through, when one applies.
    #[must_use]
    pub fn proxy(&self) -> Option<&ProxyDescriptor> {
        self.proxy.as_ref()
    }

    /// Route this repository through `proxy`.
    #[must_use]
    pub fn with_proxy(mut self, proxy: ProxyDescriptor) -> Self {
        self.proxy = Some(proxy);
        self
    }
}
