//! Entries handed to the aggregator.
//!
//! The aggregator only needs to read and rewrite an entry's prefix, so any
//! caller type can take part by implementing [`CidrEntry`].

use super::Prefix;
use serde::{Deserialize, Serialize};

/// Access to the network prefix carried by an entry.
pub trait CidrEntry {
    /// Current prefix of the entry.
    fn network(&self) -> Prefix;
    /// Replace the prefix, called once per surviving entry after aggregation.
    fn set_network(&mut self, prefix: Prefix);
}

impl<T: CidrEntry + ?Sized> CidrEntry for &mut T {
    fn network(&self) -> Prefix {
        (**self).network()
    }

    fn set_network(&mut self, prefix: Prefix) {
        (**self).set_network(prefix)
    }
}

impl<T: CidrEntry + ?Sized> CidrEntry for Box<T> {
    fn network(&self) -> Prefix {
        (**self).network()
    }

    fn set_network(&mut self, prefix: Prefix) {
        (**self).set_network(prefix)
    }
}

/// Entry carrying nothing but its prefix.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BasicEntry {
    pub prefix: Prefix,
}

impl BasicEntry {
    pub fn new(prefix: Prefix) -> Self {
        BasicEntry { prefix }
    }
}

impl CidrEntry for BasicEntry {
    fn network(&self) -> Prefix {
        self.prefix
    }

    fn set_network(&mut self, prefix: Prefix) {
        self.prefix = prefix;
    }
}

impl From<Prefix> for BasicEntry {
    fn from(prefix: Prefix) -> Self {
        BasicEntry::new(prefix)
    }
}

fn default_count() -> u64 {
    1
}

/// Entry with a counter and a free-form note, as read by the command line tool.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CountedEntry {
    /// Network prefix.
    pub prefix: Prefix,
    /// Number of source records folded into this entry.
    #[serde(default = "default_count")]
    pub count: u64,
    /// Annotation carried along unchanged by [`CountedEntry::merge_add_count`].
    #[serde(default)]
    pub note: String,
}

impl CountedEntry {
    pub fn new(prefix: Prefix, count: u64, note: &str) -> Self {
        CountedEntry {
            prefix,
            count,
            note: note.to_string(),
        }
    }

    /// Merge that adds the deleted entry's count into the kept entry,
    /// saturating at `u64::MAX`.
    pub fn merge_add_count(keep: &mut CountedEntry, delete: &mut CountedEntry) {
        keep.count = keep.count.saturating_add(delete.count);
    }
}

impl CidrEntry for CountedEntry {
    fn network(&self) -> Prefix {
        self.prefix
    }

    fn set_network(&mut self, prefix: Prefix) {
        self.prefix = prefix;
    }
}
