//! Cluster membership host records.
//!
//! This crate provides:
//! - `HostInfo`, the record identifying a single cluster member
//! - Named port tables and `host:port` address handling
//! - The `Member` capability consumed by hash-ring implementations
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod address;
pub mod config;
pub mod error;
pub mod host_info;
pub mod member;
pub mod port_map;

pub use config::HostInfoConfig;
pub use error::{AddressError, ErrorKind, MembershipError};
pub use host_info::HostInfo;
pub use member::Member;
pub use port_map::{PORT_GRPC, PORT_TCHANNEL, PortMap};
