use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;

/// Answers whether a grid coordinate is unavailable to the robot. Implementations must be pure:
/// the same coordinate always yields the same answer during a search.
pub trait ObstacleMap {
    /// Returns [true] if the point lies inside an (inflated) obstacle or outside the workspace.
    /// Total over all integer coordinates.
    fn is_occupied(&self, point: Point) -> bool;

    fn is_free(&self, point: Point) -> bool {
        !self.is_occupied(point)
    }
}

impl<M: ObstacleMap + ?Sized> ObstacleMap for &M {
    fn is_occupied(&self, point: Point) -> bool {
        (**self).is_occupied(point)
    }
}

/// [GridMap] is a raster occupancy map backed by a [BoolGrid], where [true] marks an occupied
/// cell. Coordinates outside the raster count as occupied. Mostly useful for synthetic maps.
#[derive(Clone, Debug, Default)]
pub struct GridMap {
    pub grid: BoolGrid,
}

impl GridMap {
    /// Marks every cell of row `y` as occupied, splitting the map into two halves. Rows
    /// outside the raster are already occupied and are left alone.
    pub fn block_row(&mut self, y: i32) {
        if !self.grid.point_in_bounds(Point::new(0, y)) {
            return;
        }
        for x in 0..self.grid.width() as i32 {
            self.grid.set(x, y, true);
        }
    }

    /// Rasterizes any other [ObstacleMap] over the `width` by `height` window at the origin.
    pub fn rasterize<M: ObstacleMap>(map: &M, width: usize, height: usize) -> GridMap {
        let mut grid_map = GridMap::new(width, height, false);
        for x in 0..width as i32 {
            for y in 0..height as i32 {
                if map.is_occupied(Point::new(x, y)) {
                    grid_map.grid.set(x, y, true);
                }
            }
        }
        grid_map
    }

    /// Number of free cells in the raster.
    pub fn free_count(&self) -> usize {
        let mut count = 0;
        for x in 0..self.grid.width() as i32 {
            for y in 0..self.grid.height() as i32 {
                if !self.grid.get(x, y) {
                    count += 1;
                }
            }
        }
        count
    }
}

impl ObstacleMap for GridMap {
    fn is_occupied(&self, point: Point) -> bool {
        !self.grid.point_in_bounds(point) || self.grid.get_point(point)
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in (0..self.grid.height() as i32).rev() {
            let values = (0..self.grid.width() as i32)
                .map(|x| self.grid.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

impl ValueGrid<bool> for GridMap {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        GridMap {
            grid: BoolGrid::new(width, height, default_value),
        }
    }
    fn get(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y)
    }
    fn set(&mut self, x: i32, y: i32, blocked: bool) {
        self.grid.set(x, y, blocked);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
