//! IPv4 network (address plus netmask) model.
//!
//! Provides [`Ipv4Network`] along with the network/broadcast calculations and
//! the `address/suffix` text parser.

use crate::error::{Ipv4Error, Ipv4Result};
use crate::processing::Ipv4NetworkIterator;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ipv4::Ipv4Address;
use super::netmask::{get_cidr_mask, parse_netmask};

/// IPv4 address paired with its netmask.
///
/// Two networks are equal only when both the address and the netmask match, so
/// "10.0.0.1/24" and "10.0.0.2/24" are different values of the same block.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Ipv4Network {
    /// The IPv4 address, host bits included.
    pub address: Ipv4Address,
    /// The netmask. Only checked for contiguity when parsed from text.
    pub netmask: Ipv4Address,
}

impl Ipv4Network {
    /// Assemble a network without validating the netmask.
    pub const fn new(address: Ipv4Address, netmask: Ipv4Address) -> Self {
        Ipv4Network { address, netmask }
    }

    /// Create a network from an address and a CIDR prefix length (0-32).
    pub fn from_cidr(address: Ipv4Address, len: u8) -> Ipv4Result<Self> {
        let netmask = Ipv4Address::from_u32(get_cidr_mask(len)?);
        Ok(Ipv4Network { address, netmask })
    }

    /// Create a new [`Ipv4Network`] from "address/CIDR" or "address/netmask".
    ///
    /// # Examples
    /// ```
    /// use ipv4_network::Ipv4Network;
    /// let net = Ipv4Network::parse("192.168.1.123/255.255.224.0").unwrap();
    /// assert_eq!(net.to_string(), "192.168.1.123/19");
    /// assert!(Ipv4Network::parse("192.168.1.123").is_err());
    /// ```
    pub fn parse(network: &str) -> Ipv4Result<Self> {
        let network = network.trim();

        // all network strings need exactly one slash between address and netmask
        let (addr, mask) = match network.split_once('/') {
            Some((addr, mask)) if !mask.contains('/') => (addr, mask),
            _ => {
                log::debug!("expected one CIDR or netmask for the network: {network}");
                return Err(Ipv4Error::MalformedNetwork(network.to_string()));
            }
        };

        let address = Ipv4Address::parse(addr)?;
        let netmask = parse_netmask(mask)?;

        Ok(Ipv4Network { address, netmask })
    }

    /// Lowest address in the network (host bits cleared).
    pub fn network_address(&self) -> Ipv4Address {
        Ipv4Address::from_u32(self.address.to_u32() & self.netmask.to_u32())
    }

    /// Highest address in the network (host bits set).
    pub fn broadcast_address(&self) -> Ipv4Address {
        Ipv4Address::from_u32(self.address.to_u32() | !self.netmask.to_u32())
    }

    /// Same netmask, address replaced by the network address.
    pub fn network_network(&self) -> Ipv4Network {
        Ipv4Network {
            address: self.network_address(),
            netmask: self.netmask,
        }
    }

    /// Same netmask, address replaced by the broadcast address.
    pub fn broadcast_network(&self) -> Ipv4Network {
        Ipv4Network {
            address: self.broadcast_address(),
            netmask: self.netmask,
        }
    }

    /// Check if `addr` lies between the network and broadcast addresses, inclusive.
    pub fn contains(&self, addr: Ipv4Address) -> bool {
        (self.network_address()..=self.broadcast_address()).contains(&addr)
    }

    /// CIDR prefix length of the netmask, `None` for a non contiguous netmask.
    pub fn prefix_len(&self) -> Option<u8> {
        self.netmask.prefix_len()
    }

    /// Walk the network from its network address to its broadcast address.
    ///
    /// With `hosts_only` the network and broadcast addresses are skipped.
    pub fn iterate(&self, hosts_only: bool) -> Ipv4NetworkIterator {
        Ipv4NetworkIterator::new(self, hosts_only)
    }

    /// Usable host addresses, network and broadcast excluded.
    pub fn hosts(&self) -> Ipv4NetworkIterator {
        self.iterate(true)
    }

    /// Every address in the block, network and broadcast included.
    pub fn addresses(&self) -> Ipv4NetworkIterator {
        self.iterate(false)
    }
}

impl fmt::Display for Ipv4Network {
    /// Renders as `address/CIDR`; a non contiguous netmask shows as `/-1`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.netmask.to_cidr())
    }
}

impl FromStr for Ipv4Network {
    type Err = Ipv4Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Network::parse(s)
    }
}

/// Serializes as the `Display` form. A network assembled with a non contiguous
/// netmask renders as `address/-1`, which does not deserialize back.
impl Serialize for Ipv4Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ipv4Network {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Network::parse(&s).map_err(de::Error::custom)
    }
}
