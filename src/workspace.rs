//! Obstacle layout of a rectangular workspace, described as a table of inequality systems.
//!
//! Every shape is stored with its clearance already applied, so a coordinate satisfying a
//! shape's inequalities is too close to the real obstacle and is considered occupied.
use crate::error::ConfigError;
use crate::occupancy::ObstacleMap;
use grid_util::point::Point;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which side of a boundary line belongs to the shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The shape is where the boundary expression is `<= 0`.
    NonPositive,
    /// The shape is where the boundary expression is `>= 0`.
    NonNegative,
}

/// A closed half-plane `y_coef * y + x_coef * x + offset (<= | >=) 0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HalfPlane {
    pub x_coef: f64,
    #[serde(default = "unit_coef")]
    pub y_coef: f64,
    pub offset: f64,
    pub side: Side,
}

fn unit_coef() -> f64 {
    1.0
}

impl HalfPlane {
    /// Boundary of the form `y + x_coef * x + offset`.
    pub const fn new(x_coef: f64, offset: f64, side: Side) -> HalfPlane {
        HalfPlane {
            x_coef,
            y_coef: 1.0,
            offset,
            side,
        }
    }
    /// Boundary of the form `x + offset`, a vertical line.
    pub const fn vertical(offset: f64, side: Side) -> HalfPlane {
        HalfPlane {
            x_coef: 1.0,
            y_coef: 0.0,
            offset,
            side,
        }
    }
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        self.y_coef * y + self.x_coef * x + self.offset
    }
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let value = self.evaluate(x, y);
        match self.side {
            Side::NonPositive => value <= 0.0,
            Side::NonNegative => value >= 0.0,
        }
    }
}

/// An inflated obstacle. Non-convex obstacles are listed as several convex pieces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Obstacle {
    /// Intersection of half-planes.
    Convex {
        name: String,
        boundary: Vec<HalfPlane>,
    },
    /// Closed disc, `radius` already including the clearance.
    Circle {
        name: String,
        center_x: f64,
        center_y: f64,
        radius: f64,
    },
}

impl Obstacle {
    pub fn name(&self) -> &str {
        match self {
            Obstacle::Convex { name, .. } | Obstacle::Circle { name, .. } => name,
        }
    }
    pub fn contains(&self, x: f64, y: f64) -> bool {
        match self {
            Obstacle::Convex { boundary, .. } => boundary.iter().all(|h| h.contains(x, y)),
            Obstacle::Circle {
                center_x,
                center_y,
                radius,
                ..
            } => (x - center_x).powi(2) + (y - center_y).powi(2) - radius.powi(2) <= 0.0,
        }
    }
}

/// Outer rectangle `[0, width] x [0, height]`. Coordinates within `clearance` of an edge
/// (inclusive) or beyond it are occupied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
    pub clearance: i32,
}

impl Bounds {
    pub fn contains(&self, point: Point) -> bool {
        point.x > self.clearance
            && point.x < self.width - self.clearance
            && point.y > self.clearance
            && point.y < self.height - self.clearance
    }
}

/// A workspace: bounds plus a table of inflated obstacles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub bounds: Bounds,
    #[serde(default, rename = "obstacle")]
    pub obstacles: Vec<Obstacle>,
}

impl Workspace {
    /// The 400 x 250 workspace with a hexagon, a circle and a concave quadrilateral, every
    /// obstacle and the border inflated by a clearance of 5.
    pub fn reference() -> Workspace {
        use Side::{NonNegative as Ge, NonPositive as Le};
        Workspace {
            bounds: Bounds {
                width: 400,
                height: 250,
                clearance: 5,
            },
            obstacles: vec![
                Obstacle::Convex {
                    name: "hexagon".to_owned(),
                    boundary: vec![
                        HalfPlane::new(0.58, -260.84, Le),
                        HalfPlane::vertical(-240.0, Le),
                        HalfPlane::new(-0.57, 60.84, Ge),
                        HalfPlane::new(0.57, -170.02, Ge),
                        HalfPlane::vertical(-160.0, Ge),
                        HalfPlane::new(-0.58, -29.98, Le),
                    ],
                },
                Obstacle::Circle {
                    name: "circle".to_owned(),
                    center_x: 300.0,
                    center_y: 185.0,
                    radius: 45.0,
                },
                // The concave quadrilateral is split along y + 0.15x - 191.89 = 0
                Obstacle::Convex {
                    name: "quadrilateral_upper".to_owned(),
                    boundary: vec![
                        HalfPlane::new(-0.31, -178.85, Le),
                        HalfPlane::new(-0.85, -104.83, Ge),
                        HalfPlane::new(0.15, -191.89, Ge),
                    ],
                },
                Obstacle::Convex {
                    name: "quadrilateral_lower".to_owned(),
                    boundary: vec![
                        HalfPlane::new(1.23, -221.40, Ge),
                        HalfPlane::new(3.20, -452.77, Le),
                        HalfPlane::new(0.15, -191.89, Le),
                    ],
                },
            ],
        }
    }

    pub fn width(&self) -> usize {
        self.bounds.width.max(0) as usize + 1
    }
    pub fn height(&self) -> usize {
        self.bounds.height.max(0) as usize + 1
    }

    /// First obstacle of the table containing the point, if any. The border is not reported.
    pub fn obstacle_at(&self, point: Point) -> Option<&Obstacle> {
        let (x, y) = (point.x as f64, point.y as f64);
        self.obstacles.iter().find(|o| o.contains(x, y))
    }

    pub fn from_toml_str(s: &str) -> Result<Workspace, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Workspace, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let workspace = Workspace::from_toml_str(&contents)?;
        info!(
            "Loaded workspace {}x{} with {} obstacles from {}",
            workspace.bounds.width,
            workspace.bounds.height,
            workspace.obstacles.len(),
            path.display()
        );
        Ok(workspace)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

impl Default for Workspace {
    fn default() -> Workspace {
        Workspace::reference()
    }
}

impl ObstacleMap for Workspace {
    fn is_occupied(&self, point: Point) -> bool {
        !self.bounds.contains(point) || self.obstacle_at(point).is_some()
    }
}
