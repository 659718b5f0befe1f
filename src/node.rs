//! Search vertices and the ordering used by the open set.
//!
//! Two relations are kept apart here. Domain equality of states is coordinate identity and is
//! what the node table and the closed set deduplicate on. The priority queue ordering is the
//! separate [SmallestCostHolder] comparator, which only looks at cost and discovery sequence.
use std::cmp::Ordering;

/// Open set entry. Entries become stale when the state they point to is relaxed or settled.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SmallestCostHolder<K> {
    pub cost: K,
    /// Discovery sequence of this entry, used to break cost ties first-in first-out.
    pub sequence: usize,
    /// Index of the state in the node table.
    pub index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that the max-heap pops the cheapest, then earliest pushed, entry
        match other.cost.cmp(&self.cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Mutable bookkeeping for a discovered state, keyed by its coordinate in the node table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeRecord<C> {
    pub cost_to_come: C,
    /// Settle index of the predecessor on the best known path.
    pub parent: Option<usize>,
    pub settle_index: Option<usize>,
}

impl<C> NodeRecord<C> {
    pub fn is_closed(&self) -> bool {
        self.settle_index.is_some()
    }
}

/// A state moved to the closed set. Its cost and parent are final. Only the search engine
/// creates these, so holding one proves the state was settled.
#[derive(Clone, Debug)]
pub struct SettledNode<N, C> {
    node: N,
    settle_index: usize,
    parent: Option<usize>,
    cost_to_come: C,
}

impl<N, C: Copy> SettledNode<N, C> {
    pub(crate) fn new(node: N, settle_index: usize, record: &NodeRecord<C>) -> Self {
        SettledNode {
            node,
            settle_index,
            parent: record.parent,
            cost_to_come: record.cost_to_come,
        }
    }
    pub fn node(&self) -> &N {
        &self.node
    }
    /// Position in settlement order, starting at 0 for the start state.
    pub fn settle_index(&self) -> usize {
        self.settle_index
    }
    /// Settle index of the predecessor, [None] for the start state.
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }
    pub fn cost_to_come(&self) -> C {
        self.cost_to_come
    }
}

impl<N: PartialEq, C> PartialEq for SettledNode<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<N: Eq, C> Eq for SettledNode<N, C> {}
