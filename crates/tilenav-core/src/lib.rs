//! **tilenav-core** — Tile-grid pathfinding (core types).
//!
//! This crate provides the foundational types used across the *tilenav*
//! workspace: integer grid geometry ([`Point`], [`Range`]), float world-space
//! geometry ([`Vec2`]), and the [`TileGrid`] walkability layer that
//! pathfinding queries run against.

pub mod geom;
pub mod tilegrid;

pub use geom::{Point, Range, Vec2};
pub use tilegrid::{TileGrid, TileGridError};
