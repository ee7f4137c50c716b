//! Resolution session assembly.
//!
//! A [`Session`] bundles what the resolution engine needs for one run: the
//! local artifact cache location and optional observational listeners.
//! Listener slots stay empty unless tracing is requested or a listener is
//! attached explicitly, so normal operation carries no observation overhead.

use std::fmt;

use crate::config::{ConfigSources, ConfiguredPath, resolve_cache_dir};
use crate::error::SetupError;

pub mod events;

pub use events::{
    RepositoryEvent, RepositoryListener, TracingRepositoryListener, TracingTransferListener,
    TransferEvent, TransferListener,
};

/// Configured resolution session.
pub struct Session {
    local_cache: ConfiguredPath,
    transfer_listener: Option<Box<dyn TransferListener>>,
    repository_listener: Option<Box<dyn RepositoryListener>>,
}

impl Session {
    /// Start building a session.
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Absolute directory of the local artifact cache.
    #[must_use]
    pub fn local_cache(&self) -> &ConfiguredPath {
        &self.local_cache
    }

    /// The attached transfer listener, if any.
    #[must_use]
    pub fn transfer_listener(&self) -> Option<&dyn TransferListener> {
        self.transfer_listener.as_deref()
    }

    /// The attached repository listener, if any.
    #[must_use]
    pub fn repository_listener(&self) -> Option<&dyn RepositoryListener> {
        self.repository_listener.as_deref()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("local_cache", &self.local_cache)
            .field("transfer_listener", &self.transfer_listener.is_some())
            .field("repository_listener", &self.repository_listener.is_some())
            .finish()
    }
}

/// Builder for [`Session`].
pub struct SessionBuilder {
    sources: ConfigSources,
    cache_sub_path: String,
    tracing: bool,
    transfer_listener: Option<Box<dyn TransferListener>>,
    repository_listener: Option<Box<dyn RepositoryListener>>,
}

impl SessionBuilder {
    /// Start from a snapshot of the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: ConfigSources::from_process().clone(),
            cache_sub_path: String::new(),
            tracing: false,
            transfer_listener: None,
            repository_listener: None,
        }
    }

    /// Replace the configuration snapshot. Embedding hosts and tests use
    /// this instead of the process environment.
    #[must_use]
    pub fn sources(mut self, sources: ConfigSources) -> Self {
        self.sources = sources;
        self
    }

    /// Directory under the configured home where artifacts are cached.
    #[must_use]
    pub fn cache_sub_path(mut self, sub_path: impl Into<String>) -> Self {
        self.cache_sub_path = sub_path.into();
        self
    }

    /// Attach debug-level tracing listeners to any slot left empty.
    #[must_use]
    pub fn tracing(mut self, enabled: bool) -> Self {
        self.tracing = enabled;
        self
    }

    /// Attach a transfer listener. Takes precedence over the tracing flag.
    #[must_use]
    pub fn transfer_listener(mut self, listener: impl TransferListener + 'static) -> Self {
        self.transfer_listener = Some(Box::new(listener));
        self
    }

    /// Attach a repository listener. Takes precedence over the tracing flag.
    #[must_use]
    pub fn repository_listener(mut self, listener: impl RepositoryListener + 'static) -> Self {
        self.repository_listener = Some(Box::new(listener));
        self
    }

    /// Resolve the cache directory and assemble the session.
    ///
    /// # Errors
    ///
    /// Fails when the cache sub-path is empty or the working directory is
    /// unavailable while absolutizing a relative home.
    pub fn build(self) -> Result<Session, SetupError> {
        let local_cache = resolve_cache_dir(&self.sources, &self.cache_sub_path)?;

        let (transfer_listener, repository_listener) = if self.tracing {
            (
                self.transfer_listener
                    .or_else(|| Some(Box::new(TracingTransferListener))),
                self.repository_listener
                    .or_else(|| Some(Box::new(TracingRepositoryListener))),
            )
        } else {
            (self.transfer_listener, self.repository_listener)
        };

        Ok(Session {
            local_cache,
            transfer_listener,
            repository_listener,
        })
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionBuilder")
            .field("cache_sub_path", &self.cache_sub_path)
            .field("tracing", &self.tracing)
            .field("transfer_listener", &self.transfer_listener.is_some())
            .field("repository_listener", &self.repository_listener.is_some())
            .finish()
    }
}
