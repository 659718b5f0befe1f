use crate::neighbors::action_between;
use crate::node::SettledNode;
use grid_util::point::Point;
use itertools::Itertools;

/// Follows parent links from `goal` back to the state without a parent and returns the
/// visited states in start-to-goal order. `history` must be the settlement history `goal`
/// was taken from.
pub fn reconstruct<N, C>(
    history: &[SettledNode<N, C>],
    goal: &SettledNode<N, C>,
) -> Vec<SettledNode<N, C>>
where
    N: Clone,
    C: Copy,
{
    let mut path: Vec<SettledNode<N, C>> = std::iter::successors(Some(goal), |settled| {
        settled.parent().map(|p| {
            debug_assert!(p < settled.settle_index());
            &history[p]
        })
    })
    .cloned()
    .collect();
    path.reverse();
    path
}

/// Coordinates of a reconstructed path.
pub fn path_points<C: Copy>(path: &[SettledNode<Point, C>]) -> Vec<Point> {
    path.iter().map(|s| *s.node()).collect()
}

/// Sums the action costs along a path of adjacent points. Returns [None] if two consecutive
/// points are not 8-neighbours.
pub fn path_cost(path: &[Point]) -> Option<i32> {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| action_between(a, b).map(|action| action.cost))
        .sum()
}
