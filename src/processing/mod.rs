//! Stateful processing over network values.
//!
//! - [`network_iter`] - Lazy enumeration of the addresses in a network

mod network_iter;

pub use network_iter::Ipv4NetworkIterator;
