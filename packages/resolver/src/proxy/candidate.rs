//! Proxy selection outcomes.

/// Outcome of consulting a proxy selector for one target URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyCandidate {
    /// No proxy applies; connect directly.
    Direct,
    /// An HTTP-capable proxy endpoint.
    Http {
        /// Proxy host name or address.
        host: String,
        /// Proxy port, with the scheme default filled in when omitted.
        port: u16,
    },
    /// A proxy whose scheme this subsystem cannot route through, such as
    /// SOCKS. Carries the scheme for diagnostics.
    Unsupported {
        /// The unsupported proxy scheme, lowercase.
        scheme: String,
    },
}

impl ProxyCandidate {
    /// True when this candidate means "connect directly".
    #[must_use]
    pub fn is_direct(&self) -> bool {
        matches!(self, ProxyCandidate::Direct)
    }
}
