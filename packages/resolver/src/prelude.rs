//! Mortar Resolver Prelude
//!
//! This module contains the essential types consumers need to assemble a
//! resolution session. Only canonical types that are part of the public API
//! belong here.

// Layered configuration - snapshot, keys, and the resolved values
pub use crate::config::{
    ConfigSources, ConfiguredPath, SettingKey, default_repository_url, resolve_cache_dir, user_home,
};

// Error types
pub use crate::error::SetupError;

// Proxy detection and translation
pub use crate::proxy::{
    BypassList, Credentials, ProxyCandidate, ProxyDescriptor, ProxySelector, SystemProxySelector,
    attach_proxy, proxy_credentials,
};

// Repository descriptors and the built-in repositories
pub use crate::repository::{
    RepositoryDescriptor, RepositoryLayout, central_repository, local_repository,
};

// Session assembly and observational listeners
pub use crate::session::{
    RepositoryEvent, RepositoryListener, Session, SessionBuilder, TransferEvent, TransferListener,
};

// HTTP standard types from http crate
pub use ::http::HeaderValue;

// URL handling
pub use url::Url;
