//! Error types for session assembly.

use std::io;

/// Result type alias using [`SetupError`].
pub type Result<T> = std::result::Result<T, SetupError>;

/// Errors raised while assembling a resolution setup.
///
/// Proxy detection never produces one of these; an unusable proxy
/// configuration degrades to a direct connection with a warning instead.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// The cache sub-path was empty. Callers must always name a directory
    /// for the local artifact cache.
    #[error("cache sub-path must not be empty")]
    EmptyCachePath,

    /// The working directory could not be read while absolutizing a
    /// relative home directory.
    #[error("working directory unavailable: {0}")]
    WorkingDir(#[from] io::Error),

    /// No user home directory could be determined for the local
    /// filesystem repository.
    #[error("no user home directory available")]
    HomeUnavailable,

    /// Proxy credentials contained bytes that cannot appear in an
    /// `Authorization` header.
    #[error("proxy credentials cannot be encoded as an authorization header")]
    CredentialEncoding,
}
