//! The [`Pathfinder`] query facade.
//!
//! Orchestrates mapper → graph search → mapper and caches the last
//! successful path for visualization callers.

use log::{debug, trace};
use tilenav_core::{Point, TileGrid, Vec2};

use crate::PathRange;
use crate::graph::{GridGraph, Movement};
use crate::mapper::CoordMapper;

/// World-space pathfinding over a tile map.
///
/// The grid is injected explicitly; the facade owns a snapshot of its
/// walkability (via [`GridGraph`]), so the caller's map can be dropped or
/// reloaded independently. Searches run synchronously on the calling
/// thread.
///
/// The last *successful* path is retained even after a later search fails,
/// so debug overlays keep drawing the route a mover is still following.
pub struct Pathfinder {
    graph: GridGraph,
    mapper: CoordMapper,
    range: PathRange,
    last_path: Vec<Point>,
}

impl Pathfinder {
    /// Create a pathfinder over the given grid.
    ///
    /// `TileGrid` construction already validated the walkability layer, so
    /// building the graph cannot fail.
    pub fn new(grid: &TileGrid, movement: Movement) -> Self {
        let graph = GridGraph::new(grid, movement);
        let range = PathRange::new(graph.bounds());
        Self {
            graph,
            mapper: CoordMapper::new(grid),
            range,
            last_path: Vec::new(),
        }
    }

    /// Replace the grid after a map reload.
    ///
    /// Full replace-then-publish: the old graph stays intact until the new
    /// snapshot is built, and no search can observe a half-rebuilt graph.
    /// The cached last path is kept; it may no longer be walkable on the
    /// new map, which is the caller's signal to re-search.
    pub fn set_grid(&mut self, grid: &TileGrid, movement: Movement) {
        debug!(
            "rebuilding grid graph: {}x{} cells, {:?} movement",
            grid.width(),
            grid.height(),
            movement
        );
        self.graph = GridGraph::new(grid, movement);
        self.mapper = CoordMapper::new(grid);
        self.range.set_range(self.graph.bounds());
    }

    /// Find a route between two world-space points.
    ///
    /// Both endpoints are clamped into the map, then the shortest cell path
    /// is searched and returned as world-space waypoints (cell centers).
    /// Returns `None` when no route exists; the cached last path is only
    /// updated on success.
    pub fn find_path(&mut self, start: Vec2, end: Vec2) -> Option<Vec<Vec2>> {
        let from = self.mapper.world_to_grid(start);
        let to = self.mapper.world_to_grid(end);
        match self.graph.search(&mut self.range, from, to) {
            Some(path) => {
                trace!("path {from} -> {to}: {} cells", path.len());
                let waypoints = path.iter().map(|&c| self.mapper.grid_to_world(c)).collect();
                self.last_path = path;
                Some(waypoints)
            }
            None => {
                trace!("no path {from} -> {to}");
                None
            }
        }
    }

    /// The cells of the last successful search, oldest first.
    ///
    /// Empty until the first successful search.
    pub fn last_path(&self) -> &[Point] {
        &self.last_path
    }

    /// The last successful path as world-space waypoints.
    ///
    /// Pure read for visualization callers; empty until the first
    /// successful search.
    pub fn last_path_world_points(&self) -> Vec<Vec2> {
        self.last_path
            .iter()
            .map(|&c| self.mapper.grid_to_world(c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(s: &str, tile: i32) -> TileGrid {
        let rows: Vec<&str> = s.lines().map(str::trim).collect();
        let width = rows[0].len() as i32;
        let height = rows.len() as i32;
        let walkable = rows
            .iter()
            .flat_map(|r| r.bytes().map(|b| b != b'#'))
            .collect();
        TileGrid::new(tile, tile, width, height, walkable).unwrap()
    }

    /// World-space center of cell (x, y) for square tiles.
    fn center(x: i32, y: i32, tile: i32) -> Vec2 {
        Vec2::new(
            (x * tile) as f32 + tile as f32 * 0.5,
            (y * tile) as f32 + tile as f32 * 0.5,
        )
    }

    #[test]
    fn waypoints_are_cell_centers() {
        let grid = grid_from(
            "...
             ...
             ...",
            16,
        );
        let mut pf = Pathfinder::new(&grid, Movement::Cardinal);
        let waypoints = pf.find_path(center(0, 0, 16), center(2, 2, 16)).unwrap();
        assert_eq!(waypoints.len(), 5);
        assert_eq!(waypoints[0], center(0, 0, 16));
        assert_eq!(*waypoints.last().unwrap(), center(2, 2, 16));
        for w in &waypoints {
            assert_eq!((w.x - 8.0) % 16.0, 0.0);
            assert_eq!((w.y - 8.0) % 16.0, 0.0);
        }
    }

    #[test]
    fn eightway_shortens_diagonal_route() {
        let grid = grid_from(
            "...
             ...
             ...",
            16,
        );
        let mut pf = Pathfinder::new(&grid, Movement::Eightway);
        let waypoints = pf.find_path(center(0, 0, 16), center(2, 2, 16)).unwrap();
        assert_eq!(
            waypoints,
            vec![center(0, 0, 16), center(1, 1, 16), center(2, 2, 16)]
        );
    }

    #[test]
    fn endpoints_clamp_to_map_edge() {
        let grid = grid_from(
            "....
             ....",
            16,
        );
        let mut pf = Pathfinder::new(&grid, Movement::Cardinal);
        // Click far outside the map: clamps to (0,0) and (3,1).
        let waypoints = pf
            .find_path(Vec2::new(-100.0, -100.0), Vec2::new(500.0, 500.0))
            .unwrap();
        assert_eq!(waypoints[0], center(0, 0, 16));
        assert_eq!(*waypoints.last().unwrap(), center(3, 1, 16));
    }

    #[test]
    fn failed_search_keeps_last_path() {
        let grid = grid_from(
            "..#..
             ..#..",
            16,
        );
        let mut pf = Pathfinder::new(&grid, Movement::Cardinal);
        assert!(pf.last_path_world_points().is_empty());

        // Success within the left region.
        let first = pf.find_path(center(0, 0, 16), center(1, 1, 16)).unwrap();
        assert_eq!(pf.last_path_world_points(), first);

        // Crossing the wall fails and must not clear the cache.
        assert_eq!(pf.find_path(center(0, 0, 16), center(4, 0, 16)), None);
        assert_eq!(pf.last_path_world_points(), first);
        assert_eq!(pf.last_path().len(), first.len());
    }

    #[test]
    fn last_path_empty_when_nothing_ever_succeeded() {
        let grid = grid_from(
            ".#.
             .#.",
            16,
        );
        let mut pf = Pathfinder::new(&grid, Movement::Cardinal);
        assert_eq!(pf.find_path(center(0, 0, 16), center(2, 0, 16)), None);
        assert!(pf.last_path_world_points().is_empty());
        assert!(pf.last_path().is_empty());
    }

    #[test]
    fn unwalkable_start_degrades_gracefully() {
        let grid = grid_from(
            "#..
             ...",
            16,
        );
        let mut pf = Pathfinder::new(&grid, Movement::Cardinal);
        assert_eq!(pf.find_path(center(0, 0, 16), center(2, 1, 16)), None);
    }

    #[test]
    fn find_path_is_idempotent() {
        let grid = grid_from(
            "....
             .##.
             ....",
            16,
        );
        let mut pf = Pathfinder::new(&grid, Movement::Cardinal);
        let a = pf.find_path(center(0, 0, 16), center(3, 2, 16));
        let b = pf.find_path(center(0, 0, 16), center(3, 2, 16));
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn set_grid_replaces_walkability() {
        let blocked = grid_from(
            ".#.
             .#.
             .#.",
            16,
        );
        let mut pf = Pathfinder::new(&blocked, Movement::Cardinal);
        assert_eq!(pf.find_path(center(0, 0, 16), center(2, 2, 16)), None);

        let open = grid_from(
            "...
             ...
             ...",
            16,
        );
        pf.set_grid(&open, Movement::Cardinal);
        assert!(pf.find_path(center(0, 0, 16), center(2, 2, 16)).is_some());
    }

    #[test]
    fn set_grid_resizes_search_range() {
        let small = grid_from("..", 16);
        let mut pf = Pathfinder::new(&small, Movement::Cardinal);
        assert!(pf.find_path(center(0, 0, 16), center(1, 0, 16)).is_some());

        let big = grid_from(
            ".....
             .....
             .....
             .....",
            16,
        );
        pf.set_grid(&big, Movement::Cardinal);
        let waypoints = pf.find_path(center(0, 0, 16), center(4, 3, 16)).unwrap();
        assert_eq!(waypoints.len(), 8);
    }

    #[test]
    fn set_grid_keeps_cached_path() {
        let open = grid_from(
            "...
             ...",
            16,
        );
        let mut pf = Pathfinder::new(&open, Movement::Cardinal);
        let first = pf.find_path(center(0, 0, 16), center(2, 0, 16)).unwrap();

        let blocked = grid_from(
            ".#.
             .#.",
            16,
        );
        pf.set_grid(&blocked, Movement::Cardinal);
        assert_eq!(pf.last_path_world_points(), first);
    }

    #[test]
    fn mover_scenario_waypoints_scale_with_tile_size() {
        let grid = grid_from(
            "...
             ...
             ...",
            32,
        );
        let mut pf = Pathfinder::new(&grid, Movement::Cardinal);
        let waypoints = pf.find_path(Vec2::new(0.0, 0.0), Vec2::new(95.0, 95.0)).unwrap();
        assert_eq!(waypoints[0], Vec2::new(16.0, 16.0));
        assert_eq!(*waypoints.last().unwrap(), Vec2::new(80.0, 80.0));
    }
}
