//! Proxy bypass rules parsed from a `NO_PROXY`-style list.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// One parsed bypass entry.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BypassRule {
    /// `*` matches every host.
    All,
    /// Domain name, stored lowercase without its optional leading dot.
    /// Matches the domain itself and all subdomains.
    Domain(String),
    /// Exact IP address.
    Address(IpAddr),
    /// CIDR block, e.g. `192.168.1.0/24` or `2001:db8::/32`.
    Cidr { network: IpAddr, prefix_len: u8 },
}

/// Hosts that must not be routed through a proxy.
///
/// Entries are comma-separated; whitespace around entries is ignored and
/// entries that parse as neither `*`, an IP address nor a CIDR block are
/// treated as domain names. `google.com` and `.google.com` are equivalent
/// and both match `google.com` and `www.google.com`, but not
/// `notgoogle.com`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BypassList {
    rules: Vec<BypassRule>,
}

impl BypassList {
    /// Parse a `NO_PROXY`-style rule list.
    #[must_use]
    pub fn from_string(raw: &str) -> Self {
        let rules = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(parse_rule)
            .collect();

        Self { rules }
    }

    /// True when no rules are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check whether `host` should bypass the proxy.
    ///
    /// `host` may be a domain name, an IP address, or a bracketed IPv6
    /// literal as it appears in a URL authority.
    #[must_use]
    pub fn matches(&self, host: &str) -> bool {
        let host = host
            .trim_start_matches('[')
            .trim_end_matches(']')
            .to_ascii_lowercase();
        let host_ip = host.parse::<IpAddr>().ok();

        self.rules.iter().any(|rule| match rule {
            BypassRule::All => true,
            BypassRule::Domain(domain) => {
                host == *domain || host.ends_with(&format!(".{domain}"))
            }
            BypassRule::Address(address) => host_ip == Some(*address),
            BypassRule::Cidr { network, prefix_len } => {
                host_ip.is_some_and(|ip| ip_in_subnet(ip, *network, *prefix_len))
            }
        })
    }
}

fn parse_rule(entry: &str) -> BypassRule {
    if entry == "*" {
        return BypassRule::All;
    }
    if let Some((network, prefix_len)) = parse_cidr(entry) {
        return BypassRule::Cidr { network, prefix_len };
    }
    if let Ok(address) = entry.parse::<IpAddr>() {
        return BypassRule::Address(address);
    }

    let domain = entry.strip_prefix('.').unwrap_or(entry);
    BypassRule::Domain(domain.to_ascii_lowercase())
}

/// Parse CIDR notation into its network address and prefix length.
fn parse_cidr(entry: &str) -> Option<(IpAddr, u8)> {
    let (network, prefix) = entry.split_once('/')?;
    let network = network.parse::<IpAddr>().ok()?;
    let prefix_len = prefix.parse::<u8>().ok()?;

    let max_prefix = match network {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    };

    (prefix_len <= max_prefix).then_some((network, prefix_len))
}

fn ip_in_subnet(ip: IpAddr, network: IpAddr, prefix_len: u8) -> bool {
    match (ip, network) {
        (IpAddr::V4(ip), IpAddr::V4(network)) => ipv4_in_subnet(ip, network, prefix_len),
        (IpAddr::V6(ip), IpAddr::V6(network)) => ipv6_in_subnet(ip, network, prefix_len),
        // Different IP versions never match
        _ => false,
    }
}

fn ipv4_in_subnet(ip: Ipv4Addr, network: Ipv4Addr, prefix_len: u8) -> bool {
    if prefix_len == 0 {
        // 0.0.0.0/0 matches everything
        return true;
    }
    if prefix_len > 32 {
        return false;
    }

    let mask = !((1u32 << (32 - prefix_len)) - 1);
    (u32::from(ip) & mask) == (u32::from(network) & mask)
}

fn ipv6_in_subnet(ip: Ipv6Addr, network: Ipv6Addr, prefix_len: u8) -> bool {
    if prefix_len == 0 {
        // ::/0 matches everything
        return true;
    }
    if prefix_len > 128 {
        return false;
    }

    let ip = ip.octets();
    let network = network.octets();

    let full_bytes = usize::from(prefix_len / 8);
    if ip[..full_bytes] != network[..full_bytes] {
        return false;
    }

    let remaining_bits = prefix_len % 8;
    if remaining_bits == 0 || full_bytes == 16 {
        return true;
    }

    let mask = 0xFFu8 << (8 - remaining_bits);
    (ip[full_bytes] & mask) == (network[full_bytes] & mask)
}
