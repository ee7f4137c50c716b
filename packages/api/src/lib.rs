//! Mortar Public API
//!
//! Dependency-resolution session configuration with a fluent builder pattern.
//! One call chain resolves the local artifact cache, the repository list and
//! the platform proxy into the inputs a resolution engine consumes.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod setup;

// Re-export all public API components
pub use setup::*;

// Re-export important types from resolver package
pub use mortar_resolver::{
    ConfigSources, ConfiguredPath, Credentials, ProxyCandidate, ProxyDescriptor, ProxySelector,
    RepositoryDescriptor, RepositoryLayout, Session, SessionBuilder, SetupError,
    SystemProxySelector, Url,
};

/// Main Mortar entry point providing static builder methods
pub struct Mortar;

impl Mortar {
    /// Start a resolution setup from the process environment
    ///
    /// Shorthand for `SetupBuilder::new()`
    #[must_use]
    pub fn setup() -> SetupBuilder {
        SetupBuilder::new()
    }

    /// Start a resolution setup over an explicit configuration snapshot
    ///
    /// Shorthand for `SetupBuilder::new().sources(sources)`
    #[must_use]
    pub fn with_sources(sources: ConfigSources) -> SetupBuilder {
        SetupBuilder::new().sources(sources)
    }
}

/// Start a resolution setup from the process environment
///
/// Shorthand for `SetupBuilder::new()`
#[must_use]
pub fn setup() -> SetupBuilder {
    SetupBuilder::new()
}

/// Start a resolution setup over an explicit configuration snapshot
///
/// Shorthand for `SetupBuilder::new().sources(sources)`
#[must_use]
pub fn with_sources(sources: ConfigSources) -> SetupBuilder {
    SetupBuilder::new().sources(sources)
}
