//! Writing aggregated prefixes back onto the surviving entries.

use super::chain::Chain;
use crate::models::CidrEntry;

/// Set the final prefix on each linked entry and return them in chain order.
///
/// Entries whose node was unlinked are dropped.
pub(crate) fn collect_entries<E: CidrEntry>(chain: &Chain, entries: Vec<E>) -> Vec<E> {
    let mut slots: Vec<Option<E>> = entries.into_iter().map(Some).collect();
    let mut result = Vec::with_capacity(chain.live());

    for idx in chain.iter() {
        let node = chain.node(idx);
        let mut entry = slots[node.entry]
            .take()
            .expect("collect_entries: entry reached twice from the chain");
        entry.set_network(node.range.to_prefix());
        result.push(entry);
    }

    result
}
