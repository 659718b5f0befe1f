use crate::occupancy::ObstacleMap;
use crate::planner::PlanResult;
use fxhash::FxHashSet;
use grid_util::point::Point;

/// Renders the `width` by `height` window at the origin as text, highest `y` on top:
/// `#` occupied, `.` settled, `*` path, `S` start, `G` goal and a space for anything else.
pub fn render_ascii<M: ObstacleMap + ?Sized>(
    map: &M,
    width: usize,
    height: usize,
    result: Option<&PlanResult>,
) -> String {
    let (settled, path): (FxHashSet<Point>, FxHashSet<Point>) = match result {
        Some(r) => (
            r.history.iter().map(|s| *s.node()).collect(),
            r.path.iter().copied().collect(),
        ),
        None => Default::default(),
    };
    let mut out = String::with_capacity((width + 1) * height);
    for y in (0..height as i32).rev() {
        for x in 0..width as i32 {
            let p = Point::new(x, y);
            let c = match result {
                Some(r) if r.start == p => 'S',
                Some(r) if r.goal == p => 'G',
                _ if path.contains(&p) => '*',
                _ if settled.contains(&p) => '.',
                _ if map.is_occupied(p) => '#',
                _ => ' ',
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}
