//! Connectivity check performed before a refresh
//!
//! Checks may block (DNS), so they run on the refresh worker thread.

use std::net::ToSocketAddrs;

use url::Url;

/// Answers whether a data connection is available
pub trait Connectivity: Send + Sync {
    fn is_connected(&self) -> bool;
}

/// Treats the feed host as reachable when its name resolves
#[derive(Debug, Clone)]
pub struct DnsConnectivity {
    host: String,
    port: u16,
}

impl DnsConnectivity {
    /// Check against the host of `url`
    pub fn for_url(url: &Url) -> Self {
        Self {
            host: url.host_str().unwrap_or_default().to_string(),
            port: url.port_or_known_default().unwrap_or(80),
        }
    }
}

impl Connectivity for DnsConnectivity {
    fn is_connected(&self) -> bool {
        if self.host.is_empty() {
            return false;
        }
        match (self.host.as_str(), self.port).to_socket_addrs() {
            Ok(mut addrs) => addrs.next().is_some(),
            Err(e) => {
                log::debug!("Cannot resolve {}: {}", self.host, e);
                false
            }
        }
    }
}

/// Fixed answer (used with `--offline` and in tests)
#[derive(Debug, Clone, Copy)]
pub struct StaticConnectivity(pub bool);

impl Connectivity for StaticConnectivity {
    fn is_connected(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_url() {
        let url = Url::parse("http://api.cmxlog.com/changes").unwrap();
        let check = DnsConnectivity::for_url(&url);
        assert_eq!(check.host, "api.cmxlog.com");
        assert_eq!(check.port, 80);

        let url = Url::parse("https://example.org:8443").unwrap();
        let check = DnsConnectivity::for_url(&url);
        assert_eq!(check.port, 8443);
    }

    #[test]
    fn test_loopback_resolves() {
        let url = Url::parse("http://127.0.0.1:9").unwrap();
        assert!(DnsConnectivity::for_url(&url).is_connected());
    }

    #[test]
    fn test_static_connectivity() {
        assert!(StaticConnectivity(true).is_connected());
        assert!(!StaticConnectivity(false).is_connected());
    }
}
