//! Platform proxy detection and translation.
//!
//! A [`ProxySelector`] inspects proxy configuration for a target repository
//! URL and yields [`ProxyCandidate`]s; [`attach_proxy`] turns the first
//! candidate into the [`ProxyDescriptor`] the resolution engine consumes.
//! Unsupported proxy kinds and unparseable URLs degrade to a direct
//! connection with a warning rather than failing setup.

pub mod bypass;
pub mod candidate;
pub mod descriptor;
pub mod selector;
pub mod translate;

pub use bypass::BypassList;
pub use candidate::ProxyCandidate;
pub use descriptor::{Credentials, ProxyDescriptor};
pub use selector::{ProxySelector, SystemProxySelector};
pub use translate::{attach_proxy, proxy_credentials};
