//! Domain models for CIDR aggregation.
//!
//! This module contains the value types shared by the engine and its adapters:
//! - [`Prefix`] - IPv4/IPv6 network prefix in canonical form
//! - [`CidrEntry`] - Capability the aggregator needs from an entry
//! - [`BasicEntry`] and [`CountedEntry`] - Ready-made entry types

mod entry;
mod error;
mod prefix;

// Re-export public types
pub use entry::{BasicEntry, CidrEntry, CountedEntry};
pub use error::PrefixError;
pub use prefix::{
    addr_to_u128, get_cidr_mask, host_mask, u128_to_addr, AddressFamily, Prefix,
};
