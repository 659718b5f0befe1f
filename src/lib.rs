//! # clearance_pathfinding
//!
//! Minimum-cost paths for a point robot on an integer grid populated with
//! clearance-inflated obstacles. Uses a uniform-cost
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) search over the implicit
//! 8-connected grid, where axis moves cost 1 and diagonal moves cost 1.4.
//!
//! The obstacle layout is a [Workspace](workspace::Workspace): a table of half-plane and
//! circle inequalities that already include the clearance margin. Any other occupancy source
//! can be searched by implementing [ObstacleMap](occupancy::ObstacleMap), such as the raster
//! [GridMap](occupancy::GridMap).
//!
//! ```
//! use clearance_pathfinding::{plan_path, workspace::Workspace};
//! use grid_util::Point;
//!
//! let workspace = Workspace::reference();
//! let result = plan_path(&workspace, Point::new(6, 6), Point::new(10, 6)).unwrap();
//! assert_eq!(result.cost_float(), 4.0);
//! ```
pub mod config;
pub mod dijkstra;
pub mod error;
pub mod neighbors;
pub mod node;
pub mod occupancy;
pub mod path;
pub mod planner;
pub mod render;
pub mod workspace;

pub use error::{ConfigError, Endpoint, PlanError};
pub use planner::{plan_path, PlanReport, PlanResult, Planner};

/// Cost of an axis-aligned move in integer cost units.
pub const C: i32 = 10;
/// Cost of a diagonal move in integer cost units, approximating `C * sqrt(2)` as 1.4.
pub const D: i32 = 14;

/// Maximal number of successors of a single grid cell.
pub const N_SMALLVEC_SIZE: usize = 8;

/// Converts the integer cost to the floating point equivalent where axis moves have cost 1.0.
pub fn convert_cost_to_unit_cost_float(cost: i32) -> f64 {
    (cost as f64) / (C as f64)
}
