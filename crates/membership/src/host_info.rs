//! Host record identifying a single cluster member.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::address::{join_host_port, parse_port, split_host_port};
use crate::config::HostInfoConfig;
use crate::error::MembershipError;
use crate::port_map::PortMap;

/// Info about a cluster host: its address, identity and named ports.
///
/// The record is never mutated after construction. The ip and primary port
/// are derived from the address once; if the address cannot be split, the ip
/// is left unset and any ip-based comparison reports no match. A well-formed
/// address with an empty host (`":7933"`) still compares by plain equality.
///
/// # Examples
///
/// ```
/// use meshring_membership::{HostInfo, PortMap, PORT_GRPC};
///
/// let host = HostInfo::detailed("10.0.0.1:7933", "node-a", PortMap::from([(PORT_GRPC, 7941)]));
///
/// assert_eq!(host.identity(), "node-a");
/// assert_eq!(host.named_address(PORT_GRPC).unwrap(), "10.0.0.1:7941");
/// assert!(host.belongs("10.0.0.1:7941").unwrap());
/// assert!(!host.belongs("10.0.0.2:7941").unwrap());
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "HostInfoConfig", into = "HostInfoConfig")]
pub struct HostInfo {
    addr: String,
    ip: Option<String>,
    port: Option<u16>,
    identity: String,
    ports: PortMap,
}

impl HostInfo {
    /// Creates a host with only an address
    #[must_use]
    pub fn new(addr: impl Into<String>) -> Self {
        Self::detailed(addr, String::new(), PortMap::new())
    }

    /// Creates a host with identity and named port information
    #[must_use]
    pub fn detailed(
        addr: impl Into<String>,
        identity: impl Into<String>,
        ports: impl Into<PortMap>,
    ) -> Self {
        let addr = addr.into();

        let (ip, port) = match split_host_port(&addr) {
            Ok((host, port)) => (Some(host.to_string()), parse_port(port)),
            Err(e) => {
                debug!(address = %addr, error = %e, "host address not splittable, ip left empty");
                (None, None)
            }
        };

        Self {
            addr,
            ip,
            port,
            identity: identity.into(),
            ports: ports.into(),
        }
    }

    /// Returns the address exactly as supplied
    #[must_use]
    pub fn address(&self) -> &str {
        &self.addr
    }

    /// Returns the ip part of the address, empty if the address was malformed
    #[must_use]
    pub fn ip(&self) -> &str {
        self.ip.as_deref().unwrap_or_default()
    }

    /// Returns the port of the primary address, if it is a valid port number
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the named port table
    #[must_use]
    pub const fn ports(&self) -> &PortMap {
        &self.ports
    }

    /// Returns true if an explicit identity was assigned
    #[must_use]
    pub fn has_identity(&self) -> bool {
        !self.identity.is_empty()
    }

    /// Returns the identity used by membership and hash-ring layers.
    ///
    /// Falls back to the address when no identity was assigned.
    #[must_use]
    pub fn identity(&self) -> &str {
        if self.identity.is_empty() {
            &self.addr
        } else {
            &self.identity
        }
    }

    /// Returns the `ip:port` address for the port registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipError::PortNotConfigured`] if no port is registered
    /// under `name`.
    pub fn named_address(&self, name: &str) -> Result<String, MembershipError> {
        self.ports
            .get(name)
            .map(|port| join_host_port(self.ip(), port))
            .ok_or_else(|| MembershipError::PortNotConfigured {
                port: name.to_string(),
                host: self.to_string(),
            })
    }

    /// Tells whether `address` is assigned to this host.
    ///
    /// An address belongs to the host when it equals the primary address, or
    /// when its ip equals the host's ip and its port is the primary port or
    /// one of the named ports. Ports are compared numerically.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipError::MalformedAddress`] if `address` cannot be
    /// split into host and port.
    pub fn belongs(&self, address: &str) -> Result<bool, MembershipError> {
        if self.addr == address {
            return Ok(true);
        }

        let (ip, port) = split_host_port(address)?;

        if self.ip.as_deref() != Some(ip) {
            return Ok(false);
        }

        Ok(parse_port(port)
            .is_some_and(|port| self.port == Some(port) || self.ports.contains_port(port)))
    }
}

impl fmt::Display for HostInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "addr: {}, identity: {}, portMap: {}",
            self.addr, self.identity, self.ports
        )
    }
}

impl FromStr for HostInfo {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for HostInfo {
    fn from(addr: &str) -> Self {
        Self::new(addr)
    }
}

impl From<String> for HostInfo {
    fn from(addr: String) -> Self {
        Self::new(addr)
    }
}

impl From<HostInfoConfig> for HostInfo {
    fn from(config: HostInfoConfig) -> Self {
        Self::detailed(
            config.address,
            config.identity.unwrap_or_default(),
            config.ports,
        )
    }
}

impl From<HostInfo> for HostInfoConfig {
    fn from(host: HostInfo) -> Self {
        Self {
            address: host.addr,
            identity: (!host.identity.is_empty()).then_some(host.identity),
            ports: host.ports,
        }
    }
}
