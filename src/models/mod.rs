//! IPv4 value types.
//!
//! This module contains the core data structures of the crate:
//! - [`Ipv4Address`] - 4 octet address with text and `u32` conversions
//! - [`Ipv4Network`] - Address plus netmask, network/broadcast arithmetic
//! - [`IpAddress`] - Version-tagged address family (IPv4, placeholder IPv6)
//! - Netmask validation and CIDR conversion helpers

mod ip_address;
mod ipv4;
mod netmask;
mod network;

// Re-export public types
pub use ip_address::{IpAddress, IpVersion, Ipv6Address, IPV6_ADDRESS_SIZE};
pub use ipv4::{Ipv4Address, BITS_PER_BYTE, IPV4_ADDRESS_SIZE};
pub use netmask::{get_cidr_mask, parse_netmask, INVALID_CIDR, MAX_LENGTH};
pub use network::Ipv4Network;
