//! Promotion of sibling blocks into their parent supernet.

use super::chain::Chain;
use super::merge::{merge_at, Merge};

/// Fold every lower/upper sibling pair into its parent, repeating until no pair is left.
///
/// After a fold the enlarged block is compared with its predecessor again, so
/// runs such as four /26s climb all the way to one /24. Expects the chain to
/// be free of covered ranges.
pub(crate) fn merge_siblings<E, M: Merge<E>>(chain: &mut Chain, entries: &mut [E], merge: &mut M) {
    let Some(mut current) = chain.head() else {
        return;
    };
    let before = chain.live();
    let mut next = chain.next(current);

    while let Some(nx) = next {
        let next_range = chain.node(nx).range;
        if !chain.node(current).range.is_lower_sibling_of(&next_range) {
            current = nx;
            next = chain.next(current);
            continue;
        }

        let cur_node = chain.node_mut(current);
        log::trace!("{} + {} -> /{}", cur_node.range, next_range, cur_node.range.prefix_len() - 1);
        cur_node.range.absorb_sibling(&next_range);
        let keep = cur_node.entry;
        let delete = chain.node(nx).entry;
        merge_at(merge, entries, keep, delete);
        chain.unlink_next(current, nx);

        match chain.prev(current) {
            Some(prev) => {
                next = Some(current);
                current = prev;
            }
            None => next = chain.next(current),
        }
    }

    log::debug!(
        "merge_siblings: {} -> {} ranges",
        before,
        chain.live()
    );
}
