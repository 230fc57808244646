//! Resolution-ordered tile compositing.
//!
//! Tiles are drawn coarsest first (scale 4) and finest last (scale 0), each
//! one overwriting whatever is beneath it. Where a detailed map overlaps an
//! overview map, the detailed one is what ends up on the canvas, including
//! its transparent cells.
//!
//! # Architecture
//!
//! ```text
//! &[Tile] ──► union_region ──► Canvas::new
//!    │
//!    └──► draw_order (4 → 0) ──► TileView (PixelSource) ──► draw ──► Canvas
//! ```
//!
//! Rows of a single draw are disjoint and are written in parallel; tiles are
//! drawn strictly one after another, so ordering between scales holds.

use image::Rgba;
use rayon::prelude::*;
use tracing::debug;

use crate::canvas::Canvas;
use crate::geometry::Rect;
use crate::map::{Tile, MAX_SCALE};
use crate::palette::{Palette, MINECRAFT};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// A rectangular, indexable source of pixels in world coordinates.
pub trait PixelSource {
    /// World rectangle the source covers.
    fn bounds(&self) -> Rect;

    /// Color at world `(x, z)`. Only called for points inside [`bounds`](Self::bounds).
    fn pixel(&self, x: i64, z: i64) -> Rgba<u8>;
}

/// A tile rendered through a palette.
#[derive(Debug, Clone, Copy)]
pub struct TileView<'a> {
    tile: &'a Tile,
    palette: &'a Palette,
}

impl<'a> TileView<'a> {
    pub fn new(tile: &'a Tile, palette: &'a Palette) -> Self {
        Self { tile, palette }
    }
}

impl PixelSource for TileView<'_> {
    fn bounds(&self) -> Rect {
        self.tile.region()
    }

    fn pixel(&self, x: i64, z: i64) -> Rgba<u8> {
        self.tile
            .index_at(x, z)
            .map(|index| self.palette.color(index))
            .unwrap_or(TRANSPARENT)
    }
}

/// Composite tiles with the game's palette.
///
/// See [`composite_with`].
pub fn composite(tiles: &[Tile]) -> Canvas {
    composite_with(tiles, &MINECRAFT)
}

/// Composite tiles into one canvas covering all of them.
///
/// The canvas is the union of every tile region, initially transparent.
/// Tiles are drawn by descending scale; tiles sharing a scale are drawn in
/// input order, so if they overlap the later one wins. No tie-break is
/// applied beyond that.
///
/// Empty input produces a 0×0 canvas.
///
/// # Panics
///
/// If the union region is wider or taller than `u32::MAX` pixels. Check
/// [`union_region`] with [`Canvas::fits`] first when tiles are untrusted.
///
/// # Example
///
/// ```
/// use mapstitch::compositor::composite;
/// use mapstitch::map::{Dimension, Tile, TILE_INDEX_COUNT};
///
/// let coarse = Tile::new(1, Dimension::PrimaryWorld, (0, 0), vec![4; TILE_INDEX_COUNT]).unwrap();
/// let fine = Tile::new(0, Dimension::PrimaryWorld, (0, 0), vec![8; TILE_INDEX_COUNT]).unwrap();
///
/// // Input order does not matter; the finer tile ends up on top
/// let canvas = composite(&[fine.clone(), coarse.clone()]);
/// assert_eq!(canvas.width(), 256);
/// assert_eq!(canvas.pixel(0, 0), composite(&[fine]).pixel(0, 0));
/// ```
pub fn composite_with(tiles: &[Tile], palette: &Palette) -> Canvas {
    let bounds = union_region(tiles);
    debug!(
        tiles = tiles.len(),
        bounds = %bounds,
        width = bounds.width(),
        height = bounds.height(),
        "Compositing map tiles"
    );

    let mut canvas = Canvas::new(bounds);
    for tile in draw_order(tiles) {
        draw(&mut canvas, &TileView::new(tile, palette));
    }
    canvas
}

/// Smallest rectangle containing every tile's region. Empty for no tiles.
pub fn union_region(tiles: &[Tile]) -> Rect {
    tiles
        .iter()
        .fold(Rect::EMPTY, |acc, tile| acc.union(&tile.region()))
}

/// Tiles in drawing order: scale 4 first, scale 0 last, input order within a scale.
pub fn draw_order(tiles: &[Tile]) -> impl Iterator<Item = &Tile> {
    (0..=MAX_SCALE)
        .rev()
        .flat_map(move |scale| tiles.iter().filter(move |tile| tile.scale() == scale))
}

/// Copy `source` onto `canvas` wherever they overlap.
///
/// Destination pixels are replaced, not blended.
pub fn draw<S>(canvas: &mut Canvas, source: &S)
where
    S: PixelSource + Sync + ?Sized,
{
    let origin = canvas.bounds();
    let area = origin.intersect(&source.bounds());
    if area.is_empty() {
        return;
    }

    let stride = origin.width() as usize * 4;
    let first_row = (area.min_z - origin.min_z) as usize;
    let rows = area.height() as usize;
    let first_col = (area.min_x - origin.min_x) as usize;
    let cols = area.width() as usize;

    let buffer: &mut [u8] = canvas.image_mut();
    buffer[first_row * stride..(first_row + rows) * stride]
        .par_chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(row, line)| {
            let z = area.min_z + row as i64;
            let span = &mut line[first_col * 4..(first_col + cols) * 4];
            for (col, px) in span.chunks_exact_mut(4).enumerate() {
                let x = area.min_x + col as i64;
                px.copy_from_slice(&source.pixel(x, z).0);
            }
        });
}
