use std::cmp::Ordering;

use crate::{Cost, NodeId};

/// Priority-queue entry of the shortest-path search.
///
/// `key` is the tentative cost plus the heuristic estimate, or the
/// tentative cost alone when no estimate applies. Ordering is reversed
/// for use in the max-heap `BinaryHeap`; equal keys settle the lowest
/// node id first.
#[derive(Debug, Clone, Copy)]
pub(super) struct QueueEntry {
    pub(super) key: Cost,
    pub(super) cost: Cost,
    pub(super) node: NodeId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_pops_cheapest_key_and_lowest_id_first() {
        let mut heap = BinaryHeap::new();
        for (key, node) in [(3.0, 1), (1.0, 9), (1.0, 2), (2.0, 5)] {
            heap.push(QueueEntry {
                key,
                cost: key,
                node,
            });
        }
        let order: Vec<NodeId> = std::iter::from_fn(|| heap.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec![2, 9, 5, 1]);
    }
}
