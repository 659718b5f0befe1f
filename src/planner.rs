use crate::convert_cost_to_unit_cost_float;
use crate::dijkstra::{DijkstraSearch, SearchConfig, SearchOutcome};
use crate::error::{Endpoint, PlanError};
use crate::neighbors::expand;
use crate::node::SettledNode;
use crate::occupancy::ObstacleMap;
use crate::path::{path_points, reconstruct};
use grid_util::point::Point;
use log::{debug, info};
use serde::Serialize;

/// Plans a path on `map` with no search limits.
pub fn plan_path<M: ObstacleMap>(
    map: &M,
    start: Point,
    goal: Point,
) -> Result<PlanResult, PlanError> {
    Planner::new(map).plan(start, goal)
}

/// Plans minimum-cost paths on an [ObstacleMap]. Each call to [plan](Self::plan) runs an
/// independent search, so a single [Planner] over an immutable map can serve concurrent
/// requests from several threads.
#[derive(Clone, Debug)]
pub struct Planner<'a, M: ?Sized> {
    map: &'a M,
    pub config: SearchConfig,
}

impl<'a, M: ObstacleMap + ?Sized> Planner<'a, M> {
    pub fn new(map: &'a M) -> Planner<'a, M> {
        Planner {
            map,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(map: &'a M, config: SearchConfig) -> Planner<'a, M> {
        Planner { map, config }
    }

    fn check_endpoints(&self, start: Point, goal: Point) -> Result<(), PlanError> {
        for (endpoint, point) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
            if self.map.is_occupied(point) {
                debug!("Rejecting {} {}: occupied", endpoint, point);
                return Err(PlanError::InvalidStartOrGoal { endpoint, point });
            }
        }
        Ok(())
    }

    /// Computes a minimum-cost path from `start` to `goal` using Dijkstra's algorithm over
    /// the 8-connected grid. Fails without searching if either endpoint is occupied.
    pub fn plan(&self, start: Point, goal: Point) -> Result<PlanResult, PlanError> {
        self.check_endpoints(start, goal)?;
        info!("Planning from {} to {}", start, goal);
        let mut search: DijkstraSearch<Point, i32> = DijkstraSearch::new();
        let outcome = search.run(
            &start,
            |node| expand(self.map, node),
            |node| *node == goal,
            &self.config,
        );
        let discovered = search.discovered();
        let history = search.into_history();
        match outcome {
            SearchOutcome::Reached(goal_index) => {
                let goal_state = &history[goal_index];
                let path = path_points(&reconstruct(&history, goal_state));
                let cost = goal_state.cost_to_come();
                info!(
                    "Found path of {} steps with cost {} after settling {} of {} discovered states",
                    path.len() - 1,
                    convert_cost_to_unit_cost_float(cost),
                    history.len(),
                    discovered
                );
                Ok(PlanResult {
                    start,
                    goal,
                    path,
                    cost,
                    history,
                })
            }
            SearchOutcome::Exhausted => {
                info!("{} is not reachable from {}", goal, start);
                Err(PlanError::NoPathFound {
                    start,
                    goal,
                    settled: history.len(),
                })
            }
            SearchOutcome::LimitReached(limit) => Err(PlanError::SearchLimitReached {
                limit,
                settled: history.len(),
            }),
        }
    }
}

/// A solved planning request: the optimal path and every state settled to find it.
#[derive(Clone, Debug)]
pub struct PlanResult {
    pub start: Point,
    pub goal: Point,
    /// Coordinates from start to goal, both included.
    pub path: Vec<Point>,
    /// Total path cost in integer cost units, see [convert_cost_to_unit_cost_float].
    pub cost: i32,
    /// Settled states in settlement order.
    pub history: Vec<SettledNode<Point, i32>>,
}

impl PlanResult {
    pub fn cost_float(&self) -> f64 {
        convert_cost_to_unit_cost_float(self.cost)
    }

    /// Number of moves along the path.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn settled(&self) -> usize {
        self.history.len()
    }

    pub fn summary(&self) -> String {
        format!(
            "Cost of the optimal path: {} ({} steps, {} states explored)",
            self.cost_float(),
            self.steps(),
            self.settled()
        )
    }

    /// Read-only data shape handed to visualization: path and settlement history.
    pub fn report(&self) -> PlanReport {
        PlanReport {
            start: [self.start.x, self.start.y],
            goal: [self.goal.x, self.goal.y],
            cost: self.cost_float(),
            path: self.path.iter().map(|p| [p.x, p.y]).collect(),
            history: self
                .history
                .iter()
                .map(|s| SettlementRecord {
                    x: s.node().x,
                    y: s.node().y,
                    settle_index: s.settle_index(),
                    parent: s.parent(),
                    cost_to_come: convert_cost_to_unit_cost_float(s.cost_to_come()),
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SettlementRecord {
    pub x: i32,
    pub y: i32,
    pub settle_index: usize,
    pub parent: Option<usize>,
    pub cost_to_come: f64,
}

/// Serializable form of a [PlanResult].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlanReport {
    pub start: [i32; 2],
    pub goal: [i32; 2],
    pub cost: f64,
    pub path: Vec<[i32; 2]>,
    pub history: Vec<SettlementRecord>,
}
