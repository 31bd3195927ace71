//! Version-tagged IP address family.
//!
//! Only IPv4 carries behaviour. [`Ipv6Address`] exists so callers can hold either
//! family behind [`IpAddress`]; it has no parsing and no arithmetic.

use std::fmt;

use super::ipv4::Ipv4Address;

/// Number of octets in an IPv6 address.
pub const IPV6_ADDRESS_SIZE: usize = 16;

/// IP version tag, numeric values match the protocol version.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Default)]
#[repr(u8)]
pub enum IpVersion {
    #[default]
    Unknown = 0,
    V4 = 4,
    V6 = 6,
}

/// IPv6 address placeholder.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Ipv6Address(pub [u8; IPV6_ADDRESS_SIZE]);

impl Ipv6Address {
    pub fn version(&self) -> IpVersion {
        IpVersion::V6
    }
}

impl fmt::Display for Ipv6Address {
    // eight uncompressed hex groups, no "::" shortening
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, pair) in self.0.chunks_exact(2).enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{:x}", u16::from_be_bytes([pair[0], pair[1]]))?;
        }
        Ok(())
    }
}

/// An address of either IP family.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum IpAddress {
    V4(Ipv4Address),
    V6(Ipv6Address),
}

impl IpAddress {
    /// Text form of the wrapped address.
    pub fn format(&self) -> String {
        self.to_string()
    }

    pub fn version(&self) -> IpVersion {
        match self {
            IpAddress::V4(addr) => addr.version(),
            IpAddress::V6(addr) => addr.version(),
        }
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IpAddress::V4(addr) => fmt::Display::fmt(addr, f),
            IpAddress::V6(addr) => fmt::Display::fmt(addr, f),
        }
    }
}

impl From<Ipv4Address> for IpAddress {
    fn from(addr: Ipv4Address) -> Self {
        IpAddress::V4(addr)
    }
}

impl From<Ipv6Address> for IpAddress {
    fn from(addr: Ipv6Address) -> Self {
        IpAddress::V6(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_tags() {
        assert_eq!(IpVersion::Unknown as u8, 0);
        assert_eq!(IpVersion::V4 as u8, 4);
        assert_eq!(IpVersion::V6 as u8, 6);
        assert_eq!(IpVersion::default(), IpVersion::Unknown);
    }

    #[test]
    fn test_ipv4_variant() {
        let ip = IpAddress::from(Ipv4Address::new(192, 168, 1, 123));
        assert_eq!(ip.version(), IpVersion::V4);
        assert_eq!(ip.format(), "192.168.1.123");
    }

    #[test]
    fn test_ipv6_variant() {
        let mut octets = [0u8; IPV6_ADDRESS_SIZE];
        octets[0] = 0x20;
        octets[1] = 0x01;
        octets[2] = 0x0d;
        octets[3] = 0xb8;
        octets[15] = 1;
        let ip = IpAddress::from(Ipv6Address(octets));
        assert_eq!(ip.version(), IpVersion::V6);
        assert_eq!(ip.format(), "2001:db8:0:0:0:0:0:1");
    }
}
