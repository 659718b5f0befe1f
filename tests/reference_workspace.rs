use clearance_pathfinding::config::SearchConfig;
use clearance_pathfinding::error::SearchLimit;
use clearance_pathfinding::neighbors::action_between;
use clearance_pathfinding::occupancy::{GridMap, ObstacleMap};
use clearance_pathfinding::workspace::Workspace;
use clearance_pathfinding::{plan_path, Endpoint, PlanError, Planner, C, D};
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use std::cell::Cell;

const REFERENCE_TOML: &str = include_str!("../assets/reference_workspace.toml");

/// Cheapest possible 8-connected cost between two points, ignoring obstacles.
fn octile(p1: &Point, p2: &Point) -> i32 {
    let delta_x = (p1.x - p2.x).abs();
    let delta_y = (p1.y - p2.y).abs();
    D * delta_x.min(delta_y) + C * (delta_x - delta_y).abs()
}

#[test]
fn bundled_toml_matches_built_in_table() {
    let workspace = Workspace::from_toml_str(REFERENCE_TOML).unwrap();
    assert_eq!(workspace, Workspace::reference());
}

/// The loaded table and the built-in one agree cell by cell.
#[test]
fn rasterized_occupancy_matches() {
    let workspace = Workspace::reference();
    let raster = GridMap::rasterize(&workspace, workspace.width(), workspace.height());
    for x in 0..workspace.width() as i32 {
        for y in 0..workspace.height() as i32 {
            let p = Point::new(x, y);
            assert_eq!(raster.is_occupied(p), workspace.is_occupied(p), "at {p}");
        }
    }
}

/// Wraps the workspace and counts every oracle query the planner makes.
struct RecordingWorkspace {
    workspace: Workspace,
    queries: Cell<usize>,
}

impl ObstacleMap for RecordingWorkspace {
    fn is_occupied(&self, point: Point) -> bool {
        self.queries.set(self.queries.get() + 1);
        self.workspace.is_occupied(point)
    }
}

#[test]
fn circle_center_is_rejected_without_search() {
    let center = Point::new(300, 185);
    for (start, goal, endpoint, queries) in [
        (center, Point::new(6, 6), Endpoint::Start, 1),
        (Point::new(6, 6), center, Endpoint::Goal, 2),
    ] {
        let map = RecordingWorkspace {
            workspace: Workspace::reference(),
            queries: Cell::new(0),
        };
        let err = plan_path(&map, start, goal).unwrap_err();
        assert_eq!(
            err,
            PlanError::InvalidStartOrGoal {
                endpoint,
                point: center
            }
        );
        assert_eq!(err.settled(), 0);
        // Only the endpoint checks reached the oracle, no neighbours were generated
        assert_eq!(map.queries.get(), queries);
    }
}

#[test]
fn border_and_out_of_range_are_rejected() {
    let workspace = Workspace::reference();
    for p in [Point::new(5, 100), Point::new(-3, 100), Point::new(200, 251)] {
        assert!(matches!(
            plan_path(&workspace, p, Point::new(6, 6)),
            Err(PlanError::InvalidStartOrGoal { .. })
        ));
    }
}

/// Nothing lies between the two points, so the path is a pure diagonal.
#[test]
fn unobstructed_diagonal() {
    let workspace = Workspace::reference();
    let (start, goal) = (Point::new(6, 6), Point::new(50, 50));
    let result = plan_path(&workspace, start, goal).unwrap();
    assert_eq!(result.cost, octile(&start, &goal));
    assert_eq!(result.cost_float(), 61.6);
    assert_eq!(result.steps(), 44);
}

/// Crossing the whole workspace has to go around obstacles.
#[test]
fn corner_to_corner() {
    let workspace = Workspace::reference();
    let (start, goal) = (Point::new(6, 6), Point::new(394, 244));
    let result = plan_path(&workspace, start, goal).unwrap();
    assert_eq!(result.path.first(), Some(&start));
    assert_eq!(result.path.last(), Some(&goal));
    assert!(result.cost >= octile(&start, &goal));
    for pair in result.path.windows(2) {
        assert!(action_between(&pair[0], &pair[1]).is_some());
    }
    assert!(result.path.iter().all(|p| workspace.is_free(*p)));
    let costs: Vec<i32> = result.history.iter().map(|s| s.cost_to_come()).collect();
    assert!(costs.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(result.history.last().map(|s| *s.node()), Some(goal));
}

/// Walling off the goal leaves it unreachable, and the whole free region around the start
/// gets settled before giving up.
#[test]
fn enclosed_goal_has_no_path() {
    let workspace = Workspace::reference();
    let mut raster = GridMap::rasterize(&workspace, workspace.width(), workspace.height());
    for i in 25..=35 {
        raster.set(i, 25, true);
        raster.set(i, 35, true);
        raster.set(25, i, true);
        raster.set(35, i, true);
    }
    let err = plan_path(&raster, Point::new(6, 6), Point::new(30, 30)).unwrap_err();
    let outside = raster.free_count() - 9 * 9;
    assert_eq!(
        err,
        PlanError::NoPathFound {
            start: Point::new(6, 6),
            goal: Point::new(30, 30),
            settled: outside
        }
    );
}

#[test]
fn expansion_budget_stops_long_search() {
    let workspace = Workspace::reference();
    let config = SearchConfig::unlimited().with_max_expansions(100);
    let err = Planner::with_config(&workspace, config)
        .plan(Point::new(6, 6), Point::new(394, 244))
        .unwrap_err();
    assert_eq!(
        err,
        PlanError::SearchLimitReached {
            limit: SearchLimit::Expansions(100),
            settled: 100
        }
    );
}

/// Independent requests over the same workspace can run on separate threads.
#[test]
fn concurrent_requests() {
    let workspace = Workspace::reference();
    let goals = [Point::new(50, 50), Point::new(100, 30), Point::new(30, 100)];
    let costs: Vec<i32> = std::thread::scope(|s| {
        let handles: Vec<_> = goals
            .iter()
            .map(|goal| {
                let workspace = &workspace;
                s.spawn(move || plan_path(workspace, Point::new(6, 6), *goal).map(|r| r.cost))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect()
    });
    for (goal, cost) in goals.iter().zip(costs) {
        assert_eq!(cost, plan_path(&workspace, Point::new(6, 6), *goal).unwrap().cost);
    }
}
