//! The grid graph built from a [`TileGrid`] walkability layer.

use tilenav_core::{Point, Range, TileGrid};

use crate::PathRange;
use crate::distance::{chebyshev, manhattan};
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Which moves connect adjacent cells.
///
/// `Cardinal` is the default: diagonal movement changes path lengths and
/// the admissible heuristic, so it is opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    /// Orthogonal moves only (4-way).
    #[default]
    Cardinal,
    /// Orthogonal and diagonal moves (8-way).
    Eightway,
}

/// Graph of traversable cells over a walkability snapshot.
///
/// Nodes are the walkable cells of the source [`TileGrid`]; edges connect
/// adjacent walkable cells per the [`Movement`] mode, with uniform cost 1.
/// The graph owns its snapshot, so rebuilding on a map reload is a full
/// replace rather than an in-place mutation.
pub struct GridGraph {
    bounds: Range,
    width: i32,
    walkable: Vec<bool>,
    movement: Movement,
}

impl GridGraph {
    /// Build a graph from the grid's walkability layer.
    pub fn new(grid: &TileGrid, movement: Movement) -> Self {
        Self {
            bounds: grid.bounds(),
            width: grid.width(),
            walkable: grid.walkable_cells().to_vec(),
            movement,
        }
    }

    /// The grid rectangle the graph covers.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// The movement mode the graph was built with.
    #[inline]
    pub fn movement(&self) -> Movement {
        self.movement
    }

    /// Whether `p` is a walkable in-bounds cell.
    #[inline]
    pub fn walkable(&self, p: Point) -> bool {
        self.bounds.contains(p) && self.walkable[(p.y * self.width + p.x) as usize]
    }

    /// Shortest path between two cells, or `None` when no route exists.
    ///
    /// A non-walkable start or end degrades to `None` rather than failing;
    /// absence of a path is a normal outcome. Equal walkable endpoints
    /// yield the trivial one-cell path.
    pub fn search(&self, pr: &mut PathRange, from: Point, to: Point) -> Option<Vec<Point>> {
        if !self.walkable(from) || !self.walkable(to) {
            return None;
        }
        pr.astar_path(self, from, to)
    }
}

impl Pather for GridGraph {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        if !self.walkable(p) {
            return;
        }
        match self.movement {
            Movement::Cardinal => {
                for n in p.neighbors_4() {
                    if self.walkable(n) {
                        buf.push(n);
                    }
                }
            }
            Movement::Eightway => {
                for n in p.neighbors_8() {
                    if self.walkable(n) {
                        buf.push(n);
                    }
                }
            }
        }
    }
}

impl WeightedPather for GridGraph {
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

impl AstarPather for GridGraph {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        match self.movement {
            Movement::Cardinal => manhattan(from, to),
            Movement::Eightway => chebyshev(from, to),
        }
    }
}
