//! Filesystem path resolution for the local artifact cache.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::SetupError;

use super::keys;
use super::sources::ConfigSources;

/// Absolute path produced by configuration resolution.
///
/// Only [`resolve_cache_dir`] constructs these; the wrapped path is always
/// absolute, though `..` segments are preserved as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredPath(PathBuf);

impl ConfiguredPath {
    pub(crate) fn new(path: PathBuf) -> Self {
        debug_assert!(path.is_absolute());
        Self(path)
    }

    /// The resolved path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Consume the wrapper and take the path.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for ConfiguredPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ConfiguredPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.display().fmt(f)
    }
}

/// Resolve the local artifact cache directory.
///
/// `sub_path` is joined onto the configured home directory and the result is
/// absolutized against the working directory when it comes out relative.
/// `..` segments are kept as-is rather than collapsed, so the value stays
/// correct in the presence of symlinks.
///
/// # Errors
///
/// Returns [`SetupError::EmptyCachePath`] when `sub_path` is empty and
/// [`SetupError::WorkingDir`] when the working directory cannot be read.
pub fn resolve_cache_dir(
    sources: &ConfigSources,
    sub_path: &str,
) -> Result<ConfiguredPath, SetupError> {
    if sub_path.is_empty() {
        return Err(SetupError::EmptyCachePath);
    }

    let home = sources.resolve(&keys::HOME);
    let joined = Path::new(home).join(sub_path);
    let absolute = if joined.is_absolute() {
        joined
    } else {
        std::env::current_dir()?.join(joined)
    };

    Ok(ConfiguredPath::new(absolute))
}

/// User home directory, if one can be determined.
///
/// The `user.home` property a polyglot host forwards takes precedence over
/// the platform environment (`HOME`, then `USERPROFILE`). An empty value
/// counts as absent and falls through to the next source.
#[must_use]
pub fn user_home(sources: &ConfigSources) -> Option<PathBuf> {
    non_empty(sources.property("user.home"))
        .or_else(|| non_empty(sources.env("HOME")))
        .or_else(|| non_empty(sources.env("USERPROFILE")))
        .map(PathBuf::from)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
