//! Conversion of prefixes to numeric address ranges.
//!
//! Both address families share one `u128` domain. A range keeps its inclusive
//! last address rather than the end-exclusive bound, because `::/0` ends at
//! 2^128 which does not fit in a `u128`.

use crate::models::{addr_to_u128, host_mask, u128_to_addr, AddressFamily, Prefix};
use std::net::IpAddr;

/// Numeric form of one prefix: `[start, last]` plus its current length.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AddressRange {
    start: u128,
    last: u128,
    len: u8,
    family: AddressFamily,
}

impl AddressRange {
    /// Convert a canonical prefix to its address range.
    pub fn from_prefix(prefix: &Prefix) -> AddressRange {
        let family = prefix.family();
        let start = addr_to_u128(prefix.addr());
        AddressRange {
            start,
            last: start | host_mask(family.width(), prefix.prefix_len()),
            len: prefix.prefix_len(),
            family,
        }
    }

    /// Numeric value of the network address.
    pub fn start(&self) -> u128 {
        self.start
    }

    /// Numeric value of the last address in the range.
    pub fn last(&self) -> u128 {
        self.last
    }

    /// First address past the range, `None` when that is 2^128.
    ///
    /// Library API for callers that want the end-exclusive form; the engine
    /// itself only compares inclusive `last` addresses.
    pub fn end_exclusive(&self) -> Option<u128> {
        self.last.checked_add(1)
    }

    /// Number of addresses, `None` when that is 2^128. Library API, not used
    /// by the engine.
    pub fn size(&self) -> Option<u128> {
        (self.last - self.start).checked_add(1)
    }

    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    pub fn width(&self) -> u8 {
        self.family.width()
    }

    /// True if this range reaches at least as far as `other`.
    ///
    /// Ranges are visited in `(start, len)` order, so with `self` first this
    /// means `other` lies entirely inside `self`.
    pub(crate) fn covers_end_of(&self, other: &AddressRange) -> bool {
        self.last >= other.last
    }

    /// True if `self` and `next` are the lower and upper halves of one parent block.
    pub(crate) fn is_lower_sibling_of(&self, next: &AddressRange) -> bool {
        self.len == next.len
            && self.last.checked_add(1) == Some(next.start)
            && alignment_of(self.start, self.width()) < self.len
    }

    /// Grow into the parent block of `self` and its upper sibling `next`.
    pub(crate) fn absorb_sibling(&mut self, next: &AddressRange) {
        debug_assert!(self.len > 0, "a /0 block has no parent");
        self.last = next.last;
        self.len -= 1;
    }

    /// Prefix described by the (possibly enlarged) range.
    pub fn to_prefix(&self) -> Prefix {
        Prefix::from_canonical(u128_to_addr(self.start, self.family), self.len)
    }
}

impl std::fmt::Display for AddressRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", u128_to_addr(self.start, self.family), self.len)
    }
}

/// Shortest prefix length a block starting at `start` could have.
fn alignment_of(start: u128, width: u8) -> u8 {
    let trailing_zeros = start.trailing_zeros().min(u32::from(width)) as u8;
    width - trailing_zeros
}

/// Calculate the minimum prefix length for an address based on trailing zeros.
///
/// # Examples
/// ```
/// use cidr_aggregate::processing::alignment;
/// assert_eq!(alignment("8.8.8.0".parse().unwrap()), 21);
/// ```
pub fn alignment(addr: IpAddr) -> u8 {
    alignment_of(addr_to_u128(addr), AddressFamily::of(addr).width())
}
