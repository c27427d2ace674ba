//! Geometric transforms over grid points.
//!
//! All functions are pure. Rotation is always the same quarter turn about an
//! anchor: `(x', y') = (-(y - ay) + ax, (x - ax) + ay)`. With `y` growing
//! downward this turns a piece clockwise on screen.

use arrayvec::ArrayVec;

use crate::types::Point;

/// Maximum number of non-anchor cells a [`PointSet`] holds.
pub const MAX_OTHERS: usize = 3;

/// Shift a point by `(dx, dy)`.
#[inline]
pub fn translate(point: Point, dx: i32, dy: i32) -> Point {
    point.offset(dx, dy)
}

/// Rotate `point` a quarter turn about `anchor`.
#[inline]
pub fn rotate90(point: Point, anchor: Point) -> Point {
    let rx = point.x - anchor.x;
    let ry = point.y - anchor.y;
    Point::new(-ry + anchor.x, rx + anchor.y)
}

/// Integer scale; only the renderer uses this.
#[inline]
pub fn scale(point: Point, sx: i32, sy: i32) -> Point {
    Point::new(point.x * sx, point.y * sy)
}

/// The cells of one piece, with the rotation anchor kept apart from the rest.
///
/// Iteration always yields the anchor first, followed by the other cells in
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointSet {
    anchor: Point,
    others: ArrayVec<Point, MAX_OTHERS>,
}

impl PointSet {
    /// Build a set from an anchor and up to [`MAX_OTHERS`] further cells.
    ///
    /// Extra cells beyond the capacity are a caller bug; debug builds panic,
    /// release builds ignore them.
    pub fn new(anchor: Point, others: impl IntoIterator<Item = Point>) -> Self {
        let mut iter = others.into_iter();
        let kept: ArrayVec<Point, MAX_OTHERS> = iter.by_ref().take(MAX_OTHERS).collect();
        debug_assert!(
            iter.next().is_none(),
            "a point set holds at most {} cells besides the anchor",
            MAX_OTHERS
        );
        Self {
            anchor,
            others: kept,
        }
    }

    /// A set holding only its anchor.
    pub fn single(anchor: Point) -> Self {
        Self {
            anchor,
            others: ArrayVec::new(),
        }
    }

    /// Build a set from an anchor and cell offsets relative to it.
    pub fn from_offsets(anchor: Point, offsets: &[(i32, i32)]) -> Self {
        Self::new(
            anchor,
            offsets.iter().map(|&(dx, dy)| anchor.offset(dx, dy)),
        )
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn others(&self) -> &[Point] {
        &self.others
    }

    pub fn len(&self) -> usize {
        1 + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Anchor first, then the remaining cells.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.anchor).chain(self.others.iter().copied())
    }

    /// All cells as a stack array, anchor first.
    pub fn points(&self) -> ArrayVec<Point, { MAX_OTHERS + 1 }> {
        self.iter().collect()
    }

    /// The whole set shifted by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            anchor: translate(self.anchor, dx, dy),
            others: self.others.iter().map(|&p| translate(p, dx, dy)).collect(),
        }
    }

    /// The set rotated a quarter turn about its anchor.
    ///
    /// The anchor itself never moves and the cell order is preserved.
    pub fn rotated(&self) -> Self {
        let anchor = self.anchor;
        Self {
            anchor,
            others: self.others.iter().map(|&p| rotate90(p, anchor)).collect(),
        }
    }
}
