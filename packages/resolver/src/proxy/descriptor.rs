//! Proxy descriptors handed to the resolution engine.

use std::fmt;
use std::io::Write;

use base64::prelude::BASE64_STANDARD;
use base64::write::EncoderWriter;
use http::HeaderValue;
use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// Username and password for a proxied connection.
///
/// Only constructed when a non-empty proxy username is configured; an unset
/// username never turns into an empty-string credential pair. The password
/// may legitimately be empty.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The proxy username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The proxy password. Empty when only a username was configured.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Preformed Basic `Authorization` value for engines that speak headers.
    ///
    /// The returned value is marked sensitive so header logging skips it.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::CredentialEncoding`] when the credentials
    /// contain bytes a header value cannot carry.
    pub fn basic_header(&self) -> Result<HeaderValue, SetupError> {
        let mut buf = b"Basic ".to_vec();
        {
            let mut encoder = EncoderWriter::new(&mut buf, &BASE64_STANDARD);
            let _ = write!(encoder, "{}:{}", self.username, self.password);
        }
        let mut header =
            HeaderValue::from_bytes(&buf).map_err(|_| SetupError::CredentialEncoding)?;
        header.set_sensitive(true);
        Ok(header)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Proxy endpoint in the shape the resolution engine consumes.
///
/// The scheme is the **target repository URL's** scheme, not the proxy's
/// own; the engine keys proxy applicability off the protocol of the
/// repository it downloads from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyDescriptor {
    scheme: String,
    host: String,
    port: u16,
    credentials: Option<Credentials>,
}

impl ProxyDescriptor {
    pub fn new(
        scheme: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        credentials: Option<Credentials>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port,
            credentials,
        }
    }

    /// Scheme of the repository URL this proxy was selected for.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Proxy host name or address.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Proxy port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Credentials for the proxy, when any are configured.
    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }
}
