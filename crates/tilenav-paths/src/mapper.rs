//! World-space ↔ grid-space coordinate conversion.

use tilenav_core::{Point, Range, TileGrid, Vec2};

/// Converts between world-space points and grid cells.
///
/// Holds only the tile dimensions and grid bounds, copied from the source
/// [`TileGrid`] at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordMapper {
    tile_width: i32,
    tile_height: i32,
    bounds: Range,
}

impl CoordMapper {
    /// Create a mapper for the given grid.
    pub fn new(grid: &TileGrid) -> Self {
        Self {
            tile_width: grid.tile_width(),
            tile_height: grid.tile_height(),
            bounds: grid.bounds(),
        }
    }

    /// The cell containing the world point, clamped to the nearest valid
    /// cell when the point lies outside the map.
    ///
    /// Clamping means callers can click anywhere near the map edge without
    /// triggering an error path.
    pub fn world_to_grid(&self, world: Vec2) -> Point {
        let cell = Point::new(
            (world.x / self.tile_width as f32).floor() as i32,
            (world.y / self.tile_height as f32).floor() as i32,
        );
        self.bounds.clamp(cell)
    }

    /// The world-space center of a cell.
    pub fn grid_to_world(&self, cell: Point) -> Vec2 {
        Vec2::new(
            (cell.x * self.tile_width) as f32 + self.tile_width as f32 * 0.5,
            (cell.y * self.tile_height) as f32 + self.tile_height as f32 * 0.5,
        )
    }
}
