//! IPv4 addresses and networks.
//!
//! Parse dotted-decimal addresses and `address/CIDR` or `address/netmask` networks,
//! compute network and broadcast addresses, test membership and walk the
//! addresses of a network.
//!
//! ```
//! use ipv4_network::{Ipv4Address, Ipv4Network};
//!
//! let net: Ipv4Network = "192.168.123.123/19".parse().unwrap();
//! assert_eq!(net.network_address().to_string(), "192.168.96.0");
//! assert_eq!(net.broadcast_address().to_string(), "192.168.127.255");
//! assert!(net.contains(Ipv4Address::new(192, 168, 100, 1)));
//! ```
//!
//! The crate logs through the `log` facade and never installs a logger itself.

pub mod error;
pub mod models;
pub mod processing;

pub use error::{Ipv4Error, Ipv4Result};
pub use models::{
    get_cidr_mask, parse_netmask, IpAddress, IpVersion, Ipv4Address, Ipv4Network, Ipv6Address,
    BITS_PER_BYTE, INVALID_CIDR, IPV4_ADDRESS_SIZE, IPV6_ADDRESS_SIZE, MAX_LENGTH,
};
pub use processing::Ipv4NetworkIterator;
