//! The [`TileGrid`] walkability layer.
//!
//! A `TileGrid` describes a loaded tile map as far as pathfinding is
//! concerned: tile pixel dimensions, grid dimensions, and a row-major
//! per-cell walkability flag. It is immutable after construction; a map
//! reload builds a fresh grid.

use std::fmt;

use crate::geom::{Point, Range};

/// Walkability layer of a tile map.
///
/// Construction validates dimensions and data length, so every `TileGrid`
/// in existence is well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    tile_width: i32,
    tile_height: i32,
    width: i32,
    height: i32,
    /// Row-major, `width * height` entries.
    walkable: Vec<bool>,
}

impl TileGrid {
    /// Create a grid from explicit walkability data.
    ///
    /// `walkable` is row-major with `width * height` entries. Fails with
    /// [`TileGridError`] when any dimension is non-positive or the data
    /// length does not match.
    pub fn new(
        tile_width: i32,
        tile_height: i32,
        width: i32,
        height: i32,
        walkable: Vec<bool>,
    ) -> Result<Self, TileGridError> {
        if tile_width <= 0 || tile_height <= 0 {
            return Err(TileGridError::BadTileSize {
                tile_width,
                tile_height,
            });
        }
        if width <= 0 || height <= 0 {
            return Err(TileGridError::EmptyGrid { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if walkable.len() != expected {
            return Err(TileGridError::LayerSizeMismatch {
                expected,
                actual: walkable.len(),
            });
        }
        Ok(Self {
            tile_width,
            tile_height,
            width,
            height,
            walkable,
        })
    }

    /// Create a fully-walkable grid, for tests and procedural maps.
    pub fn open(tile_width: i32, tile_height: i32, width: i32, height: i32) -> Result<Self, TileGridError> {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        Self::new(tile_width, tile_height, width, height, vec![true; len])
    }

    /// Tile width in world units.
    #[inline]
    pub fn tile_width(&self) -> i32 {
        self.tile_width
    }

    /// Tile height in world units.
    #[inline]
    pub fn tile_height(&self) -> i32 {
        self.tile_height
    }

    /// Grid width in columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The grid rectangle, `[(0,0), (width,height))`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether `p` is a walkable in-bounds cell. Out-of-bounds is false.
    #[inline]
    pub fn walkable(&self, p: Point) -> bool {
        if !self.bounds().contains(p) {
            return false;
        }
        self.walkable[(p.y * self.width + p.x) as usize]
    }

    /// The row-major walkability data.
    #[inline]
    pub fn walkable_cells(&self) -> &[bool] {
        &self.walkable
    }
}

/// Errors from [`TileGrid`] construction.
///
/// These are fatal: a grid that fails validation cannot back a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileGridError {
    /// A tile dimension is zero or negative.
    BadTileSize { tile_width: i32, tile_height: i32 },
    /// The grid has no cells.
    EmptyGrid { width: i32, height: i32 },
    /// The walkability layer length does not match the grid dimensions.
    LayerSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for TileGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadTileSize {
                tile_width,
                tile_height,
            } => write!(f, "tile grid: non-positive tile size {tile_width}x{tile_height}"),
            Self::EmptyGrid { width, height } => {
                write!(f, "tile grid: empty grid {width}x{height}")
            }
            Self::LayerSizeMismatch { expected, actual } => write!(
                f,
                "tile grid: walkability layer has {actual} cells, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for TileGridError {}
