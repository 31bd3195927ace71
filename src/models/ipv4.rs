//! IPv4 address codec.
//!
//! Provides [`Ipv4Address`], a fixed 4 octet value that converts between
//! dotted-decimal text, raw bytes and a big-endian `u32`.

use crate::error::{Ipv4Error, Ipv4Result};
use lazy_static::lazy_static;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use regex::Regex;

use super::IpVersion;

/// Number of octets in an IPv4 address.
pub const IPV4_ADDRESS_SIZE: usize = 4;

/// Number of bits in one octet.
pub const BITS_PER_BYTE: usize = 8;

lazy_static! {
    // Four octets 0-255, no leading zeros.
    pub(crate) static ref ADDRESS_RE: Regex = {
        let octet = r"(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])";
        Regex::new(&format!(r"^{octet}\.{octet}\.{octet}\.{octet}$")).expect("Invalid Regex?")
    };
}

/// IPv4 address stored as 4 octets, most significant first.
///
/// Ordering follows the numeric value of the address.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Ipv4Address([u8; IPV4_ADDRESS_SIZE]);

impl Ipv4Address {
    /// Build an address from its four octets.
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Ipv4Address([a, b, c, d])
    }

    /// Create an [`Ipv4Address`] from a slice that must hold exactly 4 bytes.
    ///
    /// # Examples
    /// ```
    /// use ipv4_network::Ipv4Address;
    /// let addr = Ipv4Address::from_bytes(&[192, 168, 1, 123]).unwrap();
    /// assert_eq!(addr.to_string(), "192.168.1.123");
    /// assert!(Ipv4Address::from_bytes(&[10, 0, 0]).is_err());
    /// ```
    pub fn from_bytes(value: &[u8]) -> Ipv4Result<Self> {
        let octets: [u8; IPV4_ADDRESS_SIZE] =
            value.try_into().map_err(|_| Ipv4Error::LengthMismatch {
                expected: IPV4_ADDRESS_SIZE,
                actual: value.len(),
            })?;
        Ok(Ipv4Address(octets))
    }

    /// Every `u32` is a valid address, octet 0 is the most significant byte.
    pub const fn from_u32(value: u32) -> Self {
        Ipv4Address(value.to_be_bytes())
    }

    pub const fn to_u32(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    pub const fn octets(&self) -> [u8; IPV4_ADDRESS_SIZE] {
        self.0
    }

    pub fn version(&self) -> IpVersion {
        IpVersion::V4
    }

    /// Parse a dotted-decimal address (e.g., "192.168.1.123").
    ///
    /// Surrounding whitespace is ignored. A single `/suffix` is dropped before
    /// validation so "10.0.0.1/24" yields "10.0.0.1"; the suffix itself is not checked.
    /// More than one `/` is rejected.
    pub fn parse(address: &str) -> Ipv4Result<Self> {
        let address = address.trim();

        let candidate = match address.split_once('/') {
            Some((_, rest)) if rest.contains('/') => {
                log::debug!("too many slashes in the provided address: {address}");
                return Err(Ipv4Error::MalformedAddress(address.to_string()));
            }
            Some((addr, _)) => addr,
            None => address,
        };

        let caps = ADDRESS_RE.captures(candidate).ok_or_else(|| {
            log::debug!("address does not match dotted-decimal grammar: {address}");
            Ipv4Error::MalformedAddress(address.to_string())
        })?;

        let mut octets = [0u8; IPV4_ADDRESS_SIZE];
        for (i, octet) in octets.iter_mut().enumerate() {
            *octet = caps[i + 1].parse().map_err(|_| {
                log::debug!("octet {} out of range in {address}", &caps[i + 1]);
                Ipv4Error::MalformedAddress(address.to_string())
            })?;
        }

        Ok(Ipv4Address(octets))
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl FromStr for Ipv4Address {
    type Err = Ipv4Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Address::parse(s)
    }
}

impl From<[u8; IPV4_ADDRESS_SIZE]> for Ipv4Address {
    fn from(octets: [u8; IPV4_ADDRESS_SIZE]) -> Self {
        Ipv4Address(octets)
    }
}

impl TryFrom<&[u8]> for Ipv4Address {
    type Error = Ipv4Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Ipv4Address::from_bytes(value)
    }
}

impl From<u32> for Ipv4Address {
    fn from(value: u32) -> Self {
        Ipv4Address::from_u32(value)
    }
}

impl From<Ipv4Address> for u32 {
    fn from(addr: Ipv4Address) -> Self {
        addr.to_u32()
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4Address(addr.octets())
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(addr: Ipv4Address) -> Self {
        Ipv4Addr::from(addr.0)
    }
}

impl Serialize for Ipv4Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ipv4Address {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Address::parse(&s).map_err(de::Error::custom)
    }
}
