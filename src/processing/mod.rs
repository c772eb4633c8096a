//! CIDR aggregation engine.
//!
//! The pipeline runs in this order:
//! - [`range`] - Conversion of prefixes to numeric address ranges
//! - `chain` - Sorting and linking ranges
//! - `compact` - Removal of ranges covered by an earlier range
//! - `sibling` - Folding sibling blocks into their parent supernet
//! - `materialize` - Writing the final prefixes back onto the entries

mod aggregate;
mod chain;
mod compact;
mod materialize;
mod merge;
pub mod range;
mod sibling;

// Re-export public functions
pub use aggregate::{aggregate, aggregate_prefixes};
pub use merge::{no_merge, Merge};
pub use range::{alignment, AddressRange};
