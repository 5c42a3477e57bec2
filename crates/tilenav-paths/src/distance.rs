use tilenav_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible heuristic for 4-way movement with unit step cost.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
///
/// Admissible heuristic for 8-way movement with unit step cost.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
