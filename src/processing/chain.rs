//! Ordered, doubly linked chain of ranges used by the aggregation passes.
//!
//! Nodes live in one `Vec` and refer to their neighbours by index, so a node
//! can be unlinked in O(1) without shuffling the others.

use super::range::AddressRange;

/// One range in the chain, pointing back at the entry it came from.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) range: AddressRange,
    /// Index of the owning entry in the caller's input.
    pub(crate) entry: usize,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

/// Nodes sorted by `(start, prefix_len)` and linked in that order.
#[derive(Debug)]
pub(crate) struct Chain {
    nodes: Vec<Node>,
    head: Option<usize>,
    live: usize,
}

impl Chain {
    /// Sort the ranges and link them. `ranges[i]` belongs to entry `i`.
    ///
    /// IPv4 and IPv6 ranges are ordered by raw numeric value, so they may
    /// interleave.
    pub(crate) fn build(ranges: Vec<AddressRange>) -> Chain {
        let mut nodes: Vec<Node> = ranges
            .into_iter()
            .enumerate()
            .map(|(entry, range)| Node {
                range,
                entry,
                prev: None,
                next: None,
            })
            .collect();

        nodes.sort_unstable_by_key(|n| (n.range.start(), n.range.prefix_len()));

        for i in 1..nodes.len() {
            nodes[i - 1].next = Some(i);
            nodes[i].prev = Some(i - 1);
        }

        let live = nodes.len();
        Chain {
            head: if nodes.is_empty() { None } else { Some(0) },
            nodes,
            live,
        }
    }

    pub(crate) fn head(&self) -> Option<usize> {
        self.head
    }

    /// Number of nodes still linked.
    pub(crate) fn live(&self) -> usize {
        self.live
    }

    pub(crate) fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut Node {
        &mut self.nodes[idx]
    }

    pub(crate) fn next(&self, idx: usize) -> Option<usize> {
        self.nodes[idx].next
    }

    pub(crate) fn prev(&self, idx: usize) -> Option<usize> {
        self.nodes[idx].prev
    }

    /// Unlink `idx`, which must be the direct successor of `prev_idx`.
    ///
    /// The detached node keeps its own links; only its neighbours are rewired.
    pub(crate) fn unlink_next(&mut self, prev_idx: usize, idx: usize) {
        assert_eq!(
            self.nodes[prev_idx].next,
            Some(idx),
            "unlink_next: node {idx} is not linked after node {prev_idx}"
        );
        let after = self.nodes[idx].next;
        self.nodes[prev_idx].next = after;
        if let Some(after) = after {
            self.nodes[after].prev = Some(prev_idx);
        }
        self.live -= 1;
    }

    /// Linked node indices from the head onward.
    pub(crate) fn iter(&self) -> ChainIter<'_> {
        ChainIter {
            chain: self,
            cursor: self.head,
        }
    }
}

pub(crate) struct ChainIter<'a> {
    chain: &'a Chain,
    cursor: Option<usize>,
}

impl Iterator for ChainIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let idx = self.cursor?;
        self.cursor = self.chain.next(idx);
        Some(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Prefix;

    fn build(prefixes: &[&str]) -> Chain {
        Chain::build(
            prefixes
                .iter()
                .map(|s| AddressRange::from_prefix(&Prefix::parse(s).unwrap()))
                .collect(),
        )
    }

    fn order(chain: &Chain) -> Vec<String> {
        chain
            .iter()
            .map(|i| chain.node(i).range.to_string())
            .collect()
    }

    #[test]
    fn test_build_sorted_by_start_then_len() {
        let chain = build(&["8.8.8.8/29", "8.8.8.0/29", "8.8.8.0/24", "1.0.0.0/8"]);
        assert_eq!(
            order(&chain),
            vec!["1.0.0.0/8", "8.8.8.0/24", "8.8.8.0/29", "8.8.8.8/29"]
        );
        assert_eq!(chain.live(), 4);
        assert_eq!(chain.head(), Some(0));
        assert_eq!(chain.prev(0), None);
        assert_eq!(chain.next(3), None);
        // entries still point at their input position
        assert_eq!(chain.node(0).entry, 3);
        assert_eq!(chain.node(3).entry, 0);
    }

    #[test]
    fn test_build_mixed_families_interleave_numerically() {
        let chain = build(&["10.0.0.0/8", "::/96", "2001:db8::/32"]);
        assert_eq!(order(&chain), vec!["::/96", "10.0.0.0/8", "2001:db8::/32"]);
    }

    #[test]
    fn test_build_empty() {
        let chain = build(&[]);
        assert_eq!(chain.head(), None);
        assert_eq!(chain.iter().count(), 0);
    }

    #[test]
    fn test_unlink_next() {
        let mut chain = build(&["10.0.0.0/24", "10.0.1.0/24", "10.0.2.0/24"]);
        chain.unlink_next(0, 1);
        assert_eq!(order(&chain), vec!["10.0.0.0/24", "10.0.2.0/24"]);
        assert_eq!(chain.prev(2), Some(0));
        assert_eq!(chain.live(), 2);

        chain.unlink_next(0, 2);
        assert_eq!(chain.next(0), None);
        assert_eq!(chain.live(), 1);
    }

    #[test]
    #[should_panic(expected = "is not linked after")]
    fn test_unlink_next_detached() {
        let mut chain = build(&["10.0.0.0/24", "10.0.1.0/24", "10.0.2.0/24"]);
        chain.unlink_next(0, 2);
    }
}
