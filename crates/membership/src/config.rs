//! Serializable host description.

use serde::{Deserialize, Serialize};

use crate::host_info::HostInfo;
use crate::port_map::PortMap;

/// Configuration describing a single host, as supplied by a peer provider.
///
/// ```toml
/// address = "10.0.0.1:7933"
/// identity = "node-a"
///
/// [ports]
/// grpc = 7941
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct HostInfoConfig {
    /// Primary `ip:port` address
    pub address: String,

    /// Optional stable identity, defaults to the address when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,

    /// Named ports
    #[serde(default, skip_serializing_if = "PortMap::is_empty")]
    pub ports: PortMap,
}

impl HostInfoConfig {
    /// Builds the host record described by this configuration
    #[must_use]
    pub fn into_host_info(self) -> HostInfo {
        self.into()
    }
}
