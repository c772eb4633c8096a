//! Removal of ranges already covered by an earlier range.

use super::chain::Chain;
use super::merge::{merge_at, Merge};

/// Unlink every node whose range lies inside the node before it.
///
/// `current` only moves forward when it does not cover `next`, so a wide
/// block swallows all of its nested blocks in one sweep.
pub(crate) fn unlink_covered<E, M: Merge<E>>(chain: &mut Chain, entries: &mut [E], merge: &mut M) {
    let Some(mut current) = chain.head() else {
        return;
    };
    let before = chain.live();

    while let Some(next) = chain.next(current) {
        let (cur_node, next_node) = (chain.node(current), chain.node(next));
        if cur_node.range.covers_end_of(&next_node.range) {
            log::trace!("{} covers {}", cur_node.range, next_node.range);
            let (keep, delete) = (cur_node.entry, next_node.entry);
            merge_at(merge, entries, keep, delete);
            chain.unlink_next(current, next);
        } else {
            current = next;
        }
    }

    log::debug!(
        "unlink_covered: {} -> {} ranges",
        before,
        chain.live()
    );
}
