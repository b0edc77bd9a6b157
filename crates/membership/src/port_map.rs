//! Named port table for a host.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Port name used for the TChannel protocol.
pub const PORT_TCHANNEL: &str = "tchannel";

/// Port name used for the gRPC protocol.
pub const PORT_GRPC: &str = "grpc";

/// A map of port names to port numbers.
///
/// Entries are kept ordered by name so that formatting is stable.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortMap(BTreeMap<String, u16>);

impl PortMap {
    /// Creates an empty port map
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the map with `name` set to `port`, replacing any previous value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, port: u16) -> Self {
        self.0.insert(name.into(), port);
        self
    }

    /// Gets the port registered under `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<u16> {
        self.0.get(name).copied()
    }

    /// Returns true if any name maps to `port`
    #[must_use]
    pub fn contains_port(&self, port: u16) -> bool {
        self.0.values().any(|&number| number == port)
    }

    /// Number of named ports
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no ports are configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, port)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> {
        self.0.iter().map(|(name, &port)| (name.as_str(), port))
    }
}

impl<K: Into<String>> FromIterator<(K, u16)> for PortMap {
    fn from_iter<I: IntoIterator<Item = (K, u16)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, port)| (name.into(), port)).collect())
    }
}

impl From<BTreeMap<String, u16>> for PortMap {
    fn from(ports: BTreeMap<String, u16>) -> Self {
        Self(ports)
    }
}

impl From<HashMap<String, u16>> for PortMap {
    fn from(ports: HashMap<String, u16>) -> Self {
        ports.into_iter().collect()
    }
}

impl<const N: usize> From<[(&str, u16); N]> for PortMap {
    fn from(ports: [(&str, u16); N]) -> Self {
        ports.into_iter().collect()
    }
}

impl fmt::Display for PortMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, port)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}:{port}")?;
        }
        Ok(())
    }
}
