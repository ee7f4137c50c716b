//! The built-in central and local repositories.

use crate::config::{ConfigSources, default_repository_url, user_home};
use crate::error::{Result, SetupError};
use crate::proxy::{ProxySelector, attach_proxy};

use super::descriptor::{RepositoryDescriptor, RepositoryLayout};

/// Identifier of the default remote repository.
pub const CENTRAL_ID: &str = "central";

/// Identifier of the fixed local filesystem repository.
pub const LOCAL_ID: &str = "local";

/// The default remote repository, with a proxy attached when the selector
/// routes its URL through one.
#[must_use]
pub fn central_repository(
    sources: &ConfigSources,
    selector: &dyn ProxySelector,
) -> RepositoryDescriptor {
    let repository = RepositoryDescriptor::new(
        CENTRAL_ID,
        RepositoryLayout::Default,
        default_repository_url(sources),
    );
    attach_proxy(repository, sources, selector)
}

/// The fixed `file://` repository under the user's `.m2` directory.
///
/// Filesystem access never goes through a proxy, so no selector is
/// consulted.
///
/// # Errors
///
/// Returns [`SetupError::HomeUnavailable`] when no user home directory can
/// be determined.
pub fn local_repository(sources: &ConfigSources) -> Result<RepositoryDescriptor> {
    let home = user_home(sources).ok_or(SetupError::HomeUnavailable)?;
    let url = format!("file://{}/.m2/repository", home.display());
    Ok(RepositoryDescriptor::new(
        LOCAL_ID,
        RepositoryLayout::Default,
        url,
    ))
}
