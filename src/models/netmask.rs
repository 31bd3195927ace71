//! Netmask validation and CIDR conversion.
//!
//! A netmask is valid when all of its set bits come before all of its unset bits,
//! i.e. it equals `0xFFFFFFFF << (32 - n)` for some prefix length `n` in 0..=32.

use crate::error::{Ipv4Error, Ipv4Result};
use lazy_static::lazy_static;
use regex::Regex;

use super::ipv4::{Ipv4Address, ADDRESS_RE};

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Sentinel returned by [`Ipv4Address::to_cidr`] for a non contiguous netmask.
pub const INVALID_CIDR: i32 = -1;

lazy_static! {
    static ref CIDR_RE: Regex =
        Regex::new(r"^([0-9]|[12][0-9]|3[0-2])$").expect("Invalid Regex?");
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_network::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Ipv4Result<u32> {
    if len > MAX_LENGTH {
        Err(Ipv4Error::MalformedNetmask(len.to_string()))
    } else {
        // shifting by the full width yields no network bits at all
        Ok(u32::MAX.checked_shl(u32::from(MAX_LENGTH - len)).unwrap_or(0))
    }
}

impl Ipv4Address {
    /// True when no set bit follows an unset bit, reading from the most significant bit.
    ///
    /// `0.0.0.0` and `255.255.255.255` are both valid netmasks.
    pub fn is_valid_netmask(&self) -> bool {
        let bits = self.to_u32();
        bits.leading_ones() + bits.trailing_zeros() == u32::from(MAX_LENGTH)
    }

    /// Number of leading set bits, or `None` if this is not a valid netmask.
    pub fn prefix_len(&self) -> Option<u8> {
        if !self.is_valid_netmask() {
            return None;
        }
        u8::try_from(self.to_u32().leading_ones()).ok()
    }

    /// CIDR prefix length of this netmask, [`INVALID_CIDR`] (-1) if it is not contiguous.
    pub fn to_cidr(&self) -> i32 {
        self.prefix_len().map_or(INVALID_CIDR, i32::from)
    }
}

/// Parse a netmask given either as a CIDR prefix ("19") or dotted ("255.255.224.0").
///
/// The CIDR form is tried first. A dotted value that is a well formed address but
/// has non contiguous bits is rejected with [`Ipv4Error::InvalidNetmaskBits`].
pub fn parse_netmask(netmask: &str) -> Ipv4Result<Ipv4Address> {
    let netmask = netmask.trim();

    if CIDR_RE.is_match(netmask) {
        let cidr: u8 = netmask
            .parse()
            .map_err(|_| Ipv4Error::MalformedNetmask(netmask.to_string()))?;
        return Ok(Ipv4Address::from_u32(get_cidr_mask(cidr)?));
    }

    if ADDRESS_RE.is_match(netmask) {
        let address = Ipv4Address::parse(netmask)
            .map_err(|_| Ipv4Error::MalformedNetmask(netmask.to_string()))?;
        if !address.is_valid_netmask() {
            log::debug!("netmask bits are not contiguous: {netmask}");
            return Err(Ipv4Error::InvalidNetmaskBits(netmask.to_string()));
        }
        return Ok(address);
    }

    log::debug!("netmask is neither CIDR nor dotted-decimal: {netmask}");
    Err(Ipv4Error::MalformedNetmask(netmask.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(1).unwrap(), 0x80000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(19).unwrap(), 0xFFFFE000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_is_valid_netmask() {
        let addr = Ipv4Address::parse("255.255.224.0").unwrap();
        assert!(addr.is_valid_netmask());

        let addr = Ipv4Address::parse("255.255.0.224").unwrap();
        assert!(!addr.is_valid_netmask());

        assert!(Ipv4Address::new(0, 0, 0, 0).is_valid_netmask());
        assert!(Ipv4Address::new(255, 255, 255, 255).is_valid_netmask());
        assert!(!Ipv4Address::new(0, 0, 0, 1).is_valid_netmask());
        assert!(!Ipv4Address::new(127, 0, 0, 0).is_valid_netmask());
        assert!(!Ipv4Address::new(255, 255, 255, 253).is_valid_netmask());
    }

    #[test]
    fn test_every_prefix_is_valid() {
        for len in 0..=MAX_LENGTH {
            let mask = Ipv4Address::from_u32(get_cidr_mask(len).unwrap());
            assert!(mask.is_valid_netmask(), "/{len} should be valid");
            assert_eq!(mask.to_cidr(), i32::from(len));
            assert_eq!(mask.prefix_len(), Some(len));
        }
    }

    #[test]
    fn test_to_cidr() {
        assert_eq!(Ipv4Address::parse("0.0.0.0").unwrap().to_cidr(), 0);
        assert_eq!(Ipv4Address::parse("255.255.255.255").unwrap().to_cidr(), 32);
        assert_eq!(Ipv4Address::parse("255.255.224.0").unwrap().to_cidr(), 19);
        assert_eq!(Ipv4Address::parse("255.255.0.224").unwrap().to_cidr(), -1);
        assert_eq!(Ipv4Address::parse("255.255.0.224").unwrap().prefix_len(), None);
    }

    #[test]
    fn test_parse_netmask_cidr() {
        let addr = parse_netmask("19").unwrap();
        assert_eq!(addr.to_cidr(), 19);
        assert_eq!(addr.to_string(), "255.255.224.0");

        assert_eq!(parse_netmask(" 0 ").unwrap().to_string(), "0.0.0.0");
        assert_eq!(parse_netmask("32").unwrap().to_string(), "255.255.255.255");
    }

    #[test]
    fn test_parse_netmask_cidr_round_trip() {
        for len in 0..=MAX_LENGTH {
            let mask = parse_netmask(&len.to_string()).unwrap();
            assert_eq!(mask.to_cidr(), i32::from(len));
        }
    }

    #[test]
    fn test_parse_netmask_dotted() {
        let addr = parse_netmask("255.255.248.0").unwrap();
        assert_eq!(addr.to_cidr(), 21);
        assert_eq!(addr.to_string(), "255.255.248.0");
    }

    #[test]
    fn test_parse_netmask_invalid() {
        assert_eq!(
            parse_netmask("1.2.3.4").unwrap_err(),
            Ipv4Error::InvalidNetmaskBits("1.2.3.4".to_string())
        );
        assert_eq!(
            parse_netmask("35").unwrap_err(),
            Ipv4Error::MalformedNetmask("35".to_string())
        );
        assert_eq!(
            parse_netmask("07").unwrap_err(),
            Ipv4Error::MalformedNetmask("07".to_string())
        );
        assert_eq!(
            parse_netmask("255.255.256.0").unwrap_err(),
            Ipv4Error::MalformedNetmask("255.255.256.0".to_string())
        );
        assert_eq!(
            parse_netmask("255.255.255.000").unwrap_err(),
            Ipv4Error::MalformedNetmask("255.255.255.000".to_string())
        );
        assert!(parse_netmask("").is_err());
        assert!(parse_netmask("-1").is_err());
        assert!(parse_netmask("/24").is_err());
        assert!(parse_netmask("255.255.0").is_err());
    }
}
