//! IP network prefix (CIDR) value type.
//!
//! Provides [`Prefix`] for IPv4 and IPv6 networks in canonical form, along with
//! the numeric helpers the aggregation engine and adapters share.

use super::PrefixError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Address family of a prefix, which fixes its bit width.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// Family of the given address.
    pub fn of(addr: IpAddr) -> AddressFamily {
        match addr {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }

    /// Number of bits in an address of this family (32 or 128).
    pub fn width(self) -> u8 {
        match self {
            AddressFamily::V4 => 32,
            AddressFamily::V6 => 128,
        }
    }
}

/// Numeric value of an address, right-aligned in a `u128`.
pub fn addr_to_u128(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u128::from(u32::from(v4)),
        IpAddr::V6(v6) => u128::from(v6),
    }
}

/// Build an address of `family` from its numeric value.
///
/// Bits above the family width are discarded for IPv4.
pub fn u128_to_addr(value: u128, family: AddressFamily) -> IpAddr {
    match family {
        AddressFamily::V4 => IpAddr::V4(Ipv4Addr::from(value as u32)),
        AddressFamily::V6 => IpAddr::V6(Ipv6Addr::from(value)),
    }
}

/// All-ones value for the low `width` bits.
fn width_mask(width: u8) -> u128 {
    if width >= 128 {
        u128::MAX
    } else {
        (1u128 << width) - 1
    }
}

/// Mask of the host bits of a `/len` network in a `width`-bit family.
///
/// # Examples
/// ```
/// use cidr_aggregate::models::host_mask;
/// assert_eq!(host_mask(32, 24), 0xFF);
/// assert_eq!(host_mask(128, 0), u128::MAX);
/// ```
pub fn host_mask(width: u8, len: u8) -> u128 {
    width_mask(width.saturating_sub(len))
}

/// Convert a prefix length to a network mask in the family's bit width.
///
/// # Examples
/// ```
/// use cidr_aggregate::models::{get_cidr_mask, AddressFamily};
/// assert_eq!(get_cidr_mask(AddressFamily::V4, 24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(family: AddressFamily, len: u8) -> Result<u128, PrefixError> {
    let width = family.width();
    if len > width {
        return Err(PrefixError::LengthTooLong { len, width });
    }
    Ok(width_mask(width) & !host_mask(width, len))
}

/// IP network prefix in canonical form (all host bits zero).
///
/// Ordering is by address, IPv4 before IPv6, then by prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Prefix {
    addr: IpAddr,
    len: u8,
}

impl Prefix {
    /// Create a prefix, rejecting lengths beyond the family width and set host bits.
    pub fn new(addr: IpAddr, len: u8) -> Result<Prefix, PrefixError> {
        let family = AddressFamily::of(addr);
        let mask = get_cidr_mask(family, len)?;
        if addr_to_u128(addr) & !mask != 0 {
            return Err(PrefixError::HostBitsSet(format!("{addr}/{len}")));
        }
        Ok(Prefix { addr, len })
    }

    /// Create a prefix, clearing any host bits in `addr`.
    pub fn new_truncating(addr: IpAddr, len: u8) -> Result<Prefix, PrefixError> {
        let family = AddressFamily::of(addr);
        let mask = get_cidr_mask(family, len)?;
        Ok(Prefix {
            addr: u128_to_addr(addr_to_u128(addr) & mask, family),
            len,
        })
    }

    /// Build a prefix the caller already knows to be canonical.
    pub(crate) fn from_canonical(addr: IpAddr, len: u8) -> Prefix {
        debug_assert!(
            Prefix::new(addr, len).is_ok(),
            "{addr}/{len} is not a canonical prefix"
        );
        Prefix { addr, len }
    }

    /// Parse `addr/len`, rejecting host bits (e.g. "10.0.0.0/24").
    pub fn parse(addr_cidr: &str) -> Result<Prefix, PrefixError> {
        let (addr, len) = split_cidr(addr_cidr)?;
        Prefix::new(addr, len)
    }

    /// Parse `addr/len`, masking host bits (e.g. "10.0.0.7/24" is 10.0.0.0/24).
    pub fn parse_truncating(addr_cidr: &str) -> Result<Prefix, PrefixError> {
        let (addr, len) = split_cidr(addr_cidr)?;
        Prefix::new_truncating(addr, len)
    }

    /// Network address.
    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    /// Prefix length in bits.
    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    pub fn family(&self) -> AddressFamily {
        AddressFamily::of(self.addr)
    }

    /// Address bit width of the family (32 or 128).
    pub fn width(&self) -> u8 {
        self.family().width()
    }

    /// Lowest (network) address in the prefix.
    pub fn first(&self) -> IpAddr {
        self.addr
    }

    /// Highest address in the prefix.
    pub fn last(&self) -> IpAddr {
        let value = addr_to_u128(self.addr) | host_mask(self.width(), self.len);
        u128_to_addr(value, self.family())
    }

    /// Number of addresses covered, `None` when it is 2^128 (`::/0`).
    pub fn size(&self) -> Option<u128> {
        host_mask(self.width(), self.len).checked_add(1)
    }

    /// True if `addr` is of the same family and falls inside this prefix.
    pub fn contains(&self, addr: IpAddr) -> bool {
        if AddressFamily::of(addr) != self.family() {
            return false;
        }
        let value = addr_to_u128(addr);
        addr_to_u128(self.first()) <= value && value <= addr_to_u128(self.last())
    }

    /// True if `other` is of the same family and lies completely within this prefix.
    pub fn covers(&self, other: &Prefix) -> bool {
        self.len <= other.len && self.contains(other.addr)
    }
}

/// Split `addr/len` into its parts without checking the host bits.
fn split_cidr(addr_cidr: &str) -> Result<(IpAddr, u8), PrefixError> {
    let addr_cidr = addr_cidr.trim();
    let parts: Vec<&str> = addr_cidr.split('/').collect();
    if parts.len() != 2 {
        return Err(PrefixError::InvalidFormat(addr_cidr.to_string()));
    }
    let addr: IpAddr = parts[0]
        .parse()
        .map_err(|_| PrefixError::InvalidAddress(parts[0].to_string()))?;
    let len: u8 = parts[1]
        .parse()
        .map_err(|_| PrefixError::InvalidLength(parts[1].to_string()))?;
    Ok((addr, len))
}

impl FromStr for Prefix {
    type Err = PrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prefix::parse(s)
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.len)
    }
}

impl Serialize for Prefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D>(deserializer: D) -> Result<Prefix, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Prefix::parse(&s).map_err(de::Error::custom)
    }
}
