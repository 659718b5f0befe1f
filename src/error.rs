use core::fmt;
use grid_util::point::Point;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// One of the two endpoints of a planning request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "initial point"),
            Endpoint::Goal => write!(f, "goal point"),
        }
    }
}

/// A limit that made the search give up before the goal was settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchLimit {
    Expansions(usize),
    Deadline(Duration),
}

impl fmt::Display for SearchLimit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchLimit::Expansions(n) => write!(f, "expansion budget of {n} states exhausted"),
            SearchLimit::Deadline(d) => write!(f, "deadline of {d:?} passed"),
        }
    }
}

/// Reasons a planning request can fail. None of these are retried internally, since the
/// search is deterministic for a fixed obstacle map and fixed endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The start or the goal is occupied or out of bounds; no search was performed.
    #[error("{endpoint} {point} lies in obstacle space, run again with a new {endpoint}")]
    InvalidStartOrGoal { endpoint: Endpoint, point: Point },
    /// Every state reachable from the start was settled without reaching the goal.
    #[error("no path from {start} to {goal}: open set exhausted after settling {settled} states")]
    NoPathFound {
        start: Point,
        goal: Point,
        settled: usize,
    },
    /// A caller supplied limit stopped the search.
    #[error("search abandoned after settling {settled} states: {limit}")]
    SearchLimitReached { limit: SearchLimit, settled: usize },
}

impl PlanError {
    /// Number of states that were settled before the search ended.
    pub fn settled(&self) -> usize {
        match self {
            PlanError::InvalidStartOrGoal { .. } => 0,
            PlanError::NoPathFound { settled, .. }
            | PlanError::SearchLimitReached { settled, .. } => *settled,
        }
    }
}

/// Errors while loading a workspace or endpoints from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid workspace description: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize workspace: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid endpoints on line {line}: {reason}")]
    Endpoints { line: usize, reason: String },
}
