//! Uniform-cost search over an implicit graph. Structured like
//! [pathfinding's dijkstra function](https://docs.rs/pathfinding/latest/pathfinding/directed/dijkstra/index.html),
//! but keeps the full settlement history so that paths and the explored region can be
//! inspected after the search.
//!
//! Relaxation pushes a fresh heap entry instead of decreasing a key in place. Superseded
//! entries stay in the heap and are dropped when popped, since their state is already closed
//! by then.
use crate::error::SearchLimit;
use crate::node::{NodeRecord, SettledNode, SmallestCostHolder};
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, warn};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::collections::BinaryHeap;
use std::hash::Hash;
use std::ops::Add;
use std::time::{Duration, Instant};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Optional limits on a single search, checked once at the top of every iteration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximal number of states to settle.
    #[serde(default)]
    pub max_expansions: Option<usize>,
    /// Wall clock budget in milliseconds, measured from the start of the search.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl SearchConfig {
    pub fn unlimited() -> SearchConfig {
        SearchConfig::default()
    }
    pub fn with_max_expansions(mut self, max_expansions: usize) -> SearchConfig {
        self.max_expansions = Some(max_expansions);
        self
    }
    pub fn with_timeout(mut self, timeout: Duration) -> SearchConfig {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }
}

/// How a search run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was settled with the given settle index.
    Reached(usize),
    /// The open set ran empty.
    Exhausted,
    /// A limit of the [SearchConfig] stopped the search.
    LimitReached(SearchLimit),
}

/// Open and closed sets of one search run. Nothing is shared between runs; create a new
/// value per planning request.
pub struct DijkstraSearch<N, C> {
    to_see: BinaryHeap<SmallestCostHolder<C>>,
    /// Every discovered state, keyed by node, in discovery order.
    nodes: FxIndexMap<N, NodeRecord<C>>,
    /// Settled states in settlement order.
    closed: Vec<SettledNode<N, C>>,
    sequence: usize,
    relaxations: usize,
    stale_pops: usize,
}

impl<N, C> Default for DijkstraSearch<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    fn default() -> Self {
        DijkstraSearch::new()
    }
}

impl<N, C> DijkstraSearch<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    pub fn new() -> Self {
        DijkstraSearch {
            to_see: BinaryHeap::new(),
            nodes: FxIndexMap::default(),
            closed: Vec::new(),
            sequence: 0,
            relaxations: 0,
            stale_pops: 0,
        }
    }

    fn push(&mut self, cost: C, index: usize) {
        self.to_see.push(SmallestCostHolder {
            cost,
            sequence: self.sequence,
            index,
        });
        self.sequence += 1;
    }

    /// Settles states in order of cost-to-come until `success` holds for a settled state,
    /// the open set is empty or a limit is hit. Successor costs must be strictly positive.
    pub fn run<FN, IN, FS>(
        &mut self,
        start: &N,
        mut successors: FN,
        mut success: FS,
        config: &SearchConfig,
    ) -> SearchOutcome
    where
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, C)>,
        FS: FnMut(&N) -> bool,
        C: Add<Output = C>,
    {
        let deadline = config
            .timeout_ms
            .map(|ms| (Duration::from_millis(ms), Instant::now()));
        let (start_index, _) = self.nodes.insert_full(
            start.clone(),
            NodeRecord {
                cost_to_come: Zero::zero(),
                parent: None,
                settle_index: None,
            },
        );
        self.push(Zero::zero(), start_index);

        while let Some(SmallestCostHolder { index, .. }) = self.to_see.pop() {
            let (node, record) = self
                .nodes
                .get_index_mut(index)
                .expect("heap entries point into the node table");
            // A cheaper entry for this state was popped earlier
            if record.is_closed() {
                self.stale_pops += 1;
                continue;
            }

            // Limits only apply when a live state is about to be settled
            if let Some(max) = config.max_expansions {
                if self.closed.len() >= max {
                    warn!("Expansion budget of {} states exhausted", max);
                    return SearchOutcome::LimitReached(SearchLimit::Expansions(max));
                }
            }
            if let Some((budget, started)) = deadline {
                if started.elapsed() >= budget {
                    warn!("Search deadline of {:?} passed", budget);
                    return SearchOutcome::LimitReached(SearchLimit::Deadline(budget));
                }
            }

            let settle_index = self.closed.len();
            record.settle_index = Some(settle_index);
            let (node, current) = (node.clone(), *record);
            self.closed
                .push(SettledNode::new(node.clone(), settle_index, &current));

            if success(&node) {
                debug!(
                    "Goal settled as state {} after {} relaxations and {} stale entries",
                    settle_index, self.relaxations, self.stale_pops
                );
                return SearchOutcome::Reached(settle_index);
            }

            for (successor, move_cost) in successors(&node) {
                let new_cost = current.cost_to_come + move_cost;
                let n;
                match self.nodes.entry(successor) {
                    Vacant(e) => {
                        n = e.index();
                        e.insert(NodeRecord {
                            cost_to_come: new_cost,
                            parent: Some(settle_index),
                            settle_index: None,
                        });
                    }
                    Occupied(mut e) => {
                        let record = e.get_mut();
                        if record.is_closed() || record.cost_to_come <= new_cost {
                            continue;
                        }
                        record.cost_to_come = new_cost;
                        record.parent = Some(settle_index);
                        n = e.index();
                        self.relaxations += 1;
                    }
                }
                self.push(new_cost, n);
            }
        }
        SearchOutcome::Exhausted
    }

    /// Settled states in settlement order.
    pub fn history(&self) -> &[SettledNode<N, C>] {
        &self.closed
    }

    pub fn into_history(self) -> Vec<SettledNode<N, C>> {
        self.closed
    }

    /// Number of states discovered so far, settled or not.
    pub fn discovered(&self) -> usize {
        self.nodes.len()
    }

    /// Best known cost-to-come of a discovered state.
    pub fn cost_to_come(&self, node: &N) -> Option<C> {
        self.nodes.get(node).map(|r| r.cost_to_come)
    }

    /// Whether the state has been settled.
    pub fn is_closed(&self, node: &N) -> bool {
        self.nodes.get(node).is_some_and(|r| r.is_closed())
    }

    /// Number of in-place cost improvements of open states.
    pub fn relaxations(&self) -> usize {
        self.relaxations
    }
}
