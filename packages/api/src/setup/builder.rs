//! Core `SetupBuilder` structure and the assembled `ResolutionSetup`
//!
//! Contains the main `SetupBuilder` struct and the foundational methods for
//! wiring configuration sources, proxy selection and listeners into the
//! inputs a resolution engine consumes.

use std::fmt;

use mortar_resolver::{
    ConfigSources, ProxySelector, RepositoryDescriptor, Session, SetupError, SystemProxySelector,
    central_repository, local_repository,
};

/// Everything a resolution engine needs for one run.
///
/// The repository list is ordered: the central remote repository first, the
/// local filesystem repository second.
#[derive(Debug)]
pub struct ResolutionSetup {
    /// Configured session with the local cache location and listeners
    pub session: Session,
    /// Repositories to consult, in consultation order
    pub repositories: Vec<RepositoryDescriptor>,
}

/// Fluent builder for a [`ResolutionSetup`]
///
/// By default the builder snapshots the process environment and consults the
/// platform proxy convention; both can be replaced for embedding hosts and
/// tests.
pub struct SetupBuilder {
    sources: Option<ConfigSources>,
    selector: Option<Box<dyn ProxySelector>>,
    cache_sub_path: String,
    tracing: bool,
}

impl SetupBuilder {
    /// Start a new setup with process configuration and the system proxy
    /// selector
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: None,
            selector: None,
            cache_sub_path: String::new(),
            tracing: false,
        }
    }

    /// Replace the configuration snapshot
    ///
    /// # Arguments
    /// * `sources` - Explicit environment and property snapshot
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn sources(mut self, sources: ConfigSources) -> Self {
        self.sources = Some(sources);
        self
    }

    /// Replace the proxy selector consulted for the central repository
    ///
    /// # Arguments
    /// * `selector` - Custom proxy selector implementation
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn proxy_selector(mut self, selector: impl ProxySelector + 'static) -> Self {
        self.selector = Some(Box::new(selector));
        self
    }

    /// Set the directory under the configured home where artifacts are
    /// cached
    ///
    /// # Arguments
    /// * `sub_path` - Cache directory relative to the configured home
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn cache_sub_path(mut self, sub_path: impl Into<String>) -> Self {
        self.cache_sub_path = sub_path.into();
        self
    }

    /// Attach debug-level tracing listeners to the session
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn tracing(mut self, enabled: bool) -> Self {
        self.tracing = enabled;
        self
    }

    /// Assemble the session and the ordered repository list
    ///
    /// # Errors
    ///
    /// Fails when the cache sub-path is empty, the working directory is
    /// unavailable, or no user home exists for the local repository. An
    /// unusable proxy configuration is not an error; it degrades to a
    /// direct connection with a warning.
    pub fn build(self) -> Result<ResolutionSetup, SetupError> {
        let SetupBuilder {
            sources,
            selector,
            cache_sub_path,
            tracing,
        } = self;

        let sources = sources.unwrap_or_else(|| ConfigSources::from_process().clone());

        let session = Session::builder()
            .sources(sources.clone())
            .cache_sub_path(cache_sub_path)
            .tracing(tracing)
            .build()?;

        let central = match &selector {
            Some(selector) => central_repository(&sources, selector.as_ref()),
            None => central_repository(&sources, &SystemProxySelector::from_sources(&sources)),
        };
        let local = local_repository(&sources)?;

        Ok(ResolutionSetup {
            session,
            repositories: vec![central, local],
        })
    }
}

impl Default for SetupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SetupBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetupBuilder")
            .field("sources", &self.sources.is_some())
            .field("selector", &self.selector.is_some())
            .field("cache_sub_path", &self.cache_sub_path)
            .field("tracing", &self.tracing)
            .finish()
    }
}
