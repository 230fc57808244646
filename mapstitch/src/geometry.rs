//! World-space rectangle arithmetic.
//!
//! Minecraft maps are laid out on the X/Z plane, so the vertical axis of every
//! rectangle here is Z. Rectangles are half-open: `min` is inside, `max` is not.
//!
//! Coordinates are `i64` so that any pair of `i32` map centers, plus half a
//! map width on either side, lays out without overflow.

use std::fmt;

/// Axis-aligned, half-open rectangle in world coordinates.
///
/// A rectangle is empty when either extent is zero or negative. All empty
/// rectangles behave the same under [`Rect::union`] and [`Rect::intersect`].
///
/// # Example
///
/// ```
/// use mapstitch::geometry::Rect;
///
/// let a = Rect::new(0, 0, 128, 128);
/// let b = a.translate(-64, -64);
/// assert_eq!(b, Rect::new(-64, -64, 64, 64));
/// assert_eq!(a.union(&b), Rect::new(-64, -64, 128, 128));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub min_x: i64,
    pub min_z: i64,
    pub max_x: i64,
    pub max_z: i64,
}

impl Rect {
    /// The canonical empty rectangle.
    pub const EMPTY: Rect = Rect {
        min_x: 0,
        min_z: 0,
        max_x: 0,
        max_z: 0,
    };

    /// Create a rectangle from its corners.
    pub fn new(min_x: i64, min_z: i64, max_x: i64, max_z: i64) -> Self {
        Self {
            min_x,
            min_z,
            max_x,
            max_z,
        }
    }

    /// Width along X. Zero for empty rectangles.
    pub fn width(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.max_x.abs_diff(self.min_x)
        }
    }

    /// Height along Z. Zero for empty rectangles.
    pub fn height(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.max_z.abs_diff(self.min_z)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_z >= self.max_z
    }

    /// Whether the point `(x, z)` lies inside the rectangle.
    pub fn contains(&self, x: i64, z: i64) -> bool {
        self.min_x <= x && x < self.max_x && self.min_z <= z && z < self.max_z
    }

    /// Shift the rectangle by `(dx, dz)`.
    pub fn translate(&self, dx: i64, dz: i64) -> Self {
        Self {
            min_x: self.min_x + dx,
            min_z: self.min_z + dz,
            max_x: self.max_x + dx,
            max_z: self.max_z + dz,
        }
    }

    /// Smallest rectangle containing both. An empty operand is ignored.
    pub fn union(&self, other: &Rect) -> Self {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => return Self::EMPTY,
            (true, false) => return *other,
            (false, true) => return *self,
            (false, false) => {}
        }
        Self {
            min_x: self.min_x.min(other.min_x),
            min_z: self.min_z.min(other.min_z),
            max_x: self.max_x.max(other.max_x),
            max_z: self.max_z.max(other.max_z),
        }
    }

    /// Largest rectangle contained in both, or [`Rect::EMPTY`].
    pub fn intersect(&self, other: &Rect) -> Self {
        let r = Self {
            min_x: self.min_x.max(other.min_x),
            min_z: self.min_z.max(other.min_z),
            max_x: self.max_x.min(other.max_x),
            max_z: self.max_z.min(other.max_z),
        };
        if r.is_empty() {
            Self::EMPTY
        } else {
            r
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{})",
            self.min_x, self.min_z, self.max_x, self.max_z
        )
    }
}
