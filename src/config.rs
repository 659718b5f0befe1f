//! Loading planning requests from text.
//!
//! An endpoints file holds the start on its first non-empty line and the goal on the second,
//! each as two integers separated by whitespace or a comma:
//!
//! ```text
//! 6 6
//! 390, 240
//! ```
pub use crate::dijkstra::SearchConfig;
use crate::error::ConfigError;
use grid_util::point::Point;
use std::path::Path;

/// Start and goal of a planning request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub start: Point,
    pub goal: Point,
}

fn parse_point(line: usize, text: &str) -> Result<Point, ConfigError> {
    let fields: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect();
    let &[x, y] = fields.as_slice() else {
        return Err(ConfigError::Endpoints {
            line,
            reason: format!("expected two coordinates, found {}", fields.len()),
        });
    };
    let coord = |s: &str| {
        s.parse::<i32>().map_err(|e| ConfigError::Endpoints {
            line,
            reason: format!("{s:?}: {e}"),
        })
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}

impl Endpoints {
    pub fn parse(text: &str) -> Result<Endpoints, ConfigError> {
        let mut points = text
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty())
            .map(|(i, l)| parse_point(i + 1, l));
        let start = points.next().transpose()?;
        let goal = points.next().transpose()?;
        match (start, goal) {
            (Some(start), Some(goal)) => Ok(Endpoints { start, goal }),
            _ => Err(ConfigError::Endpoints {
                line: text.lines().count(),
                reason: "expected a start line and a goal line".to_owned(),
            }),
        }
    }

    pub fn load(path: &Path) -> Result<Endpoints, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Endpoints::parse(&text)
    }
}
