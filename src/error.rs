//! Error types for address, netmask and network operations.

use thiserror::Error;

/// Errors reported while building or walking IPv4 values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Ipv4Error {
    /// Byte sequence handed to address construction has the wrong length.
    #[error("expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Text is not a dotted-decimal IPv4 address.
    #[error("invalid IP address provided: {0}")]
    MalformedAddress(String),

    /// Network text does not hold exactly one `/`.
    #[error("expected one CIDR or netmask for the network: {0}")]
    MalformedNetwork(String),

    /// Suffix is neither a CIDR (0-32) nor a dotted netmask.
    #[error("invalid netmask value: {0}")]
    MalformedNetmask(String),

    /// Suffix is a well formed address but its bits are not contiguous.
    #[error("invalid netmask, set bits are not contiguous: {0}")]
    InvalidNetmaskBits(String),

    #[error("no more addresses")]
    IterationExhausted,
}

/// Result type for IPv4 operations
pub type Ipv4Result<T> = Result<T, Ipv4Error>;
