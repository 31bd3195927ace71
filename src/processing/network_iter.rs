//! Address enumeration over an IPv4 network.
//!
//! [`Ipv4NetworkIterator`] walks a network in ascending order, yielding one
//! [`Ipv4Network`] per address with the original netmask.

use crate::error::{Ipv4Error, Ipv4Result};
use crate::models::{Ipv4Address, Ipv4Network};
use std::iter::FusedIterator;

#[derive(Eq, PartialEq, Debug, Copy, Clone)]
enum IterState {
    NotStarted,
    InRange,
    Exhausted,
}

/// Forward only cursor over the addresses of a network.
///
/// Bounds are copied out of the network at creation, the iterator does not
/// borrow it. In hosts only mode the network and broadcast addresses are skipped.
///
/// # Examples
/// ```
/// use ipv4_network::Ipv4Network;
/// let net = Ipv4Network::parse("192.168.1.123/30").unwrap();
/// let hosts: Vec<String> = net.hosts().map(|n| n.address.to_string()).collect();
/// assert_eq!(hosts, vec!["192.168.1.121", "192.168.1.122"]);
/// ```
#[derive(Debug, Clone)]
pub struct Ipv4NetworkIterator {
    hosts_only: bool,
    state: IterState,
    address: u32,
    netmask: u32,
    network_address: u32,
    broadcast_address: u32,
}

impl Ipv4NetworkIterator {
    pub fn new(network: &Ipv4Network, hosts_only: bool) -> Self {
        let network_address = network.network_address().to_u32();
        Ipv4NetworkIterator {
            hosts_only,
            state: IterState::NotStarted,
            address: network_address,
            netmask: network.netmask.to_u32(),
            network_address,
            broadcast_address: network.broadcast_address().to_u32(),
        }
    }

    pub fn is_hosts_only(&self) -> bool {
        self.hosts_only
    }

    /// Current cursor position.
    pub fn current(&self) -> Ipv4Address {
        Ipv4Address::from_u32(self.address)
    }

    /// Step the cursor forward, failing at the broadcast address.
    pub fn inc(&mut self) -> Ipv4Result<()> {
        if self.address == self.broadcast_address {
            return Err(Ipv4Error::IterationExhausted);
        }
        self.address += 1;
        Ok(())
    }

    /// Step the cursor back, failing at the network address.
    pub fn dec(&mut self) -> Ipv4Result<()> {
        if self.address == self.network_address {
            return Err(Ipv4Error::IterationExhausted);
        }
        self.address -= 1;
        Ok(())
    }

    fn finish(&mut self) -> Option<Ipv4Network> {
        log::trace!("iteration exhausted at {}", Ipv4Address::from_u32(self.address));
        self.state = IterState::Exhausted;
        None
    }
}

impl Iterator for Ipv4NetworkIterator {
    type Item = Ipv4Network;

    fn next(&mut self) -> Option<Ipv4Network> {
        match self.state {
            IterState::Exhausted => return None,
            IterState::NotStarted => {
                log::trace!(
                    "iteration started at {} (hosts_only={})",
                    Ipv4Address::from_u32(self.address),
                    self.hosts_only
                );
                self.state = IterState::InRange;
                // a /32 has nothing to skip to, the broadcast check below ends it
                if self.hosts_only && self.address != self.broadcast_address {
                    self.address += 1;
                }
            }
            IterState::InRange => {
                if self.inc().is_err() {
                    return self.finish();
                }
            }
        }

        if self.hosts_only && self.address == self.broadcast_address {
            return self.finish();
        }

        Some(Ipv4Network::new(
            Ipv4Address::from_u32(self.address),
            Ipv4Address::from_u32(self.netmask),
        ))
    }
}

impl FusedIterator for Ipv4NetworkIterator {}
