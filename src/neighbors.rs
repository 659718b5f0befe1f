use crate::occupancy::ObstacleMap;
use crate::{C, D, N_SMALLVEC_SIZE};
use grid_util::point::Point;
use smallvec::SmallVec;

/// A move of the point robot: offset and cost in integer cost units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Action {
    pub dx: i32,
    pub dy: i32,
    pub cost: i32,
}

impl Action {
    const fn new(dx: i32, dy: i32, cost: i32) -> Action {
        Action { dx, dy, cost }
    }
    pub fn diagonal(&self) -> bool {
        self.dx != 0 && self.dy != 0
    }
    pub fn apply(&self, point: &Point) -> Point {
        Point::new(point.x + self.dx, point.y + self.dy)
    }
}

/// The 8-connected action set, in expansion order. Axis moves cost [C], diagonals [D].
pub const ACTIONS: [Action; 8] = [
    Action::new(0, 1, C),
    Action::new(0, -1, C),
    Action::new(1, 0, C),
    Action::new(-1, 0, C),
    Action::new(1, 1, D),
    Action::new(1, -1, D),
    Action::new(-1, 1, D),
    Action::new(-1, -1, D),
];

/// Returns the action leading from `from` to `to`, if they are 8-neighbours.
pub fn action_between(from: &Point, to: &Point) -> Option<Action> {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    ACTIONS.iter().copied().find(|a| a.dx == dx && a.dy == dy)
}

/// Successors of `pos` with their edge costs. Candidates the map reports occupied produce no
/// edge.
pub fn expand<M: ObstacleMap + ?Sized>(
    map: &M,
    pos: &Point,
) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
    ACTIONS
        .iter()
        .map(|a| (a.apply(pos), a.cost))
        .filter(|(p, _)| !map.is_occupied(*p))
        .collect::<SmallVec<[_; N_SMALLVEC_SIZE]>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupancy::GridMap;
    use grid_util::grid::ValueGrid;

    #[test]
    fn open_cell_has_eight_successors() {
        let map = GridMap::new(3, 3, false);
        let succ = expand(&map, &Point::new(1, 1));
        assert_eq!(succ.len(), 8);
        assert_eq!(succ[0], (Point::new(1, 2), C));
        assert_eq!(succ[4], (Point::new(2, 2), D));
        assert_eq!(succ.iter().filter(|(_, c)| *c == D).count(), 4);
    }

    /// Occupied and out of bounds candidates are dropped.
    #[test]
    fn occupied_candidates_are_filtered() {
        //  ___
        // |   |
        // | # |
        // |S  |
        //  ___
        let mut map = GridMap::new(3, 3, false);
        map.set(1, 1, true);
        let succ = expand(&map, &Point::new(0, 0));
        assert_eq!(
            succ.into_vec(),
            vec![(Point::new(0, 1), C), (Point::new(1, 0), C)]
        );
    }

    #[test]
    fn action_lookup() {
        let p = Point::new(4, 4);
        assert_eq!(action_between(&p, &Point::new(3, 5)), Some(ACTIONS[6]));
        assert!(action_between(&p, &Point::new(3, 5)).unwrap().diagonal());
        assert_eq!(action_between(&p, &Point::new(4, 6)), None);
        assert_eq!(action_between(&p, &p), None);
    }
}
