//! Pathfinding over tile-map walkability grids.
//!
//! Given a [`TileGrid`](tilenav_core::TileGrid) walkability layer, this
//! crate builds a grid graph, runs A* between two cells, and converts the
//! result back to world-space waypoints a mover can follow:
//!
//! - [`GridGraph`] — the graph of traversable cells built from a grid
//! - [`PathRange::astar_path`] — A* over any [`AstarPather`]
//! - [`CoordMapper`] — world ↔ grid coordinate conversion
//! - [`Pathfinder`] — the query facade, caching the last successful path
//!   for visualization
//!
//! ```
//! use tilenav_core::{TileGrid, Vec2};
//! use tilenav_paths::{Movement, Pathfinder};
//!
//! let grid = TileGrid::open(16, 16, 8, 8)?;
//! let mut pf = Pathfinder::new(&grid, Movement::Cardinal);
//! if let Some(waypoints) = pf.find_path(Vec2::new(5.0, 5.0), Vec2::new(120.0, 120.0)) {
//!     assert_eq!(waypoints[0], Vec2::new(8.0, 8.0));
//! }
//! # Ok::<(), tilenav_core::TileGridError>(())
//! ```
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | edge costs |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`GridGraph`] implements the full stack; custom graphs can plug into
//! the same search by implementing it themselves.

mod astar;
mod distance;
mod graph;
mod mapper;
mod pathfinder;
mod pathrange;
mod traits;

pub use distance::{chebyshev, manhattan};
pub use graph::{GridGraph, Movement};
pub use mapper::CoordMapper;
pub use pathfinder::Pathfinder;
pub use pathrange::{PathRange, UNREACHABLE};
pub use traits::{AstarPather, Pather, WeightedPather};
