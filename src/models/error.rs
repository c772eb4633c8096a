//! Errors raised when building a [`Prefix`](super::Prefix) from untrusted input.

use thiserror::Error;

/// Invalid prefix input, reported before any entry reaches the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefixError {
    #[error("invalid CIDR format, expected addr/len: {0}")]
    InvalidFormat(String),
    #[error("invalid IP address: {0}")]
    InvalidAddress(String),
    #[error("invalid prefix length: {0}")]
    InvalidLength(String),
    #[error("prefix length /{len} is too long for a {width}-bit address")]
    LengthTooLong { len: u8, width: u8 },
    #[error("host bits set in {0}")]
    HostBitsSet(String),
}
