//! The map tile record.

use crate::geometry::Rect;

use super::{fields, Dimension, ExtractionError};

/// Cells per side of a map's color grid.
pub const TILE_SIZE: usize = 128;

/// Number of palette indices a map stores.
pub const TILE_INDEX_COUNT: usize = TILE_SIZE * TILE_SIZE;

/// Largest zoom scale the game produces.
pub const MAX_SCALE: u8 = 4;

/// One decoded map item.
///
/// A tile is a 128×128 grid of palette indices centered on a world
/// coordinate. At scale `s` every cell covers `2^s × 2^s` blocks, so the
/// tile spans `128 << s` blocks per side.
///
/// Tiles are immutable once built. The world-space [`region`](Tile::region)
/// is derived from scale and center on every call.
///
/// # Example
///
/// ```
/// use mapstitch::geometry::Rect;
/// use mapstitch::map::{Dimension, Tile, TILE_INDEX_COUNT};
///
/// let tile = Tile::new(1, Dimension::PrimaryWorld, (64, -64), vec![0; TILE_INDEX_COUNT]).unwrap();
/// assert_eq!(tile.width(), 256);
/// assert_eq!(tile.region(), Rect::new(-64, -192, 192, 64));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    scale: u8,
    dimension: Dimension,
    center: (i32, i32),
    indices: Box<[u8]>,
}

impl Tile {
    /// Build a tile, validating every field.
    ///
    /// # Errors
    ///
    /// - [`ExtractionError::ScaleOutOfRange`] if `scale > 4`
    /// - [`ExtractionError::MalformedLength`] if `indices` is not exactly 16384 bytes
    pub fn new(
        scale: u8,
        dimension: Dimension,
        center: (i32, i32),
        indices: impl Into<Vec<u8>>,
    ) -> Result<Self, ExtractionError> {
        if scale > MAX_SCALE {
            return Err(ExtractionError::ScaleOutOfRange {
                scale: scale as i32,
            });
        }
        let indices = indices.into();
        check_index_count(indices.len())?;

        Ok(Self {
            scale,
            dimension,
            center,
            indices: indices.into_boxed_slice(),
        })
    }

    /// Zoom exponent, `0..=4`. Larger is coarser.
    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    /// World `(x, z)` the grid is centered on.
    pub fn center(&self) -> (i32, i32) {
        self.center
    }

    /// Row-major palette indices, exactly [`TILE_INDEX_COUNT`] long.
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Blocks covered per side: `128 << scale`.
    pub fn width(&self) -> u32 {
        (TILE_SIZE as u32) << self.scale
    }

    /// World rectangle covered by this tile.
    ///
    /// A `width`×`width` square shifted by half its width and then by the
    /// center, so the center is the square's geometric middle. Computed in
    /// `i64`, so every `i32` center is valid.
    pub fn region(&self) -> Rect {
        let width = i64::from(self.width());
        let half = width / 2;
        Rect::new(0, 0, width, width)
            .translate(-half, -half)
            .translate(i64::from(self.center.0), i64::from(self.center.1))
    }

    /// Palette index covering world point `(x, z)`, or `None` outside the region.
    pub fn index_at(&self, x: i64, z: i64) -> Option<u8> {
        let region = self.region();
        if !region.contains(x, z) {
            return None;
        }
        let col = ((x - region.min_x) >> self.scale) as usize;
        let row = ((z - region.min_z) >> self.scale) as usize;
        Some(self.indices[col + row * TILE_SIZE])
    }
}

pub(super) fn check_index_count(actual: usize) -> Result<(), ExtractionError> {
    if actual != TILE_INDEX_COUNT {
        return Err(ExtractionError::MalformedLength {
            field: fields::COLORS,
            expected: TILE_INDEX_COUNT,
            actual,
        });
    }
    Ok(())
}
