//! World-aligned RGBA pixel buffer.

use image::{Rgba, RgbaImage};

use crate::geometry::Rect;

/// An RGBA image whose top-left pixel sits at a world coordinate.
///
/// Pixel `(0, 0)` of the image is world block `(bounds.min_x, bounds.min_z)`;
/// one pixel per block. A new canvas is fully transparent.
///
/// # Example
///
/// ```
/// use image::Rgba;
/// use mapstitch::canvas::Canvas;
/// use mapstitch::geometry::Rect;
///
/// let canvas = Canvas::new(Rect::new(-64, -64, 64, 64));
/// assert_eq!(canvas.width(), 128);
/// assert_eq!(canvas.pixel(-64, -64), Some(Rgba([0, 0, 0, 0])));
/// assert_eq!(canvas.pixel(64, 0), None);
/// ```
#[derive(Debug, Clone)]
pub struct Canvas {
    bounds: Rect,
    image: RgbaImage,
}

impl Canvas {
    /// Allocate a transparent canvas covering `bounds`.
    ///
    /// Any empty rectangle yields a 0×0 canvas with [`Rect::EMPTY`] bounds.
    ///
    /// # Panics
    ///
    /// Panics if a side exceeds `u32::MAX` pixels, which no image can
    /// address. Callers bound the area first (see [`Canvas::fits`]).
    pub fn new(bounds: Rect) -> Self {
        let bounds = if bounds.is_empty() {
            Rect::EMPTY
        } else {
            bounds
        };
        let width = u32::try_from(bounds.width());
        let height = u32::try_from(bounds.height());
        let (width, height) = match (width, height) {
            (Ok(width), Ok(height)) => (width, height),
            _ => panic!("canvas {} is too large to address", bounds),
        };
        Self {
            bounds,
            image: RgbaImage::new(width, height),
        }
    }

    /// Whether a canvas covering `bounds` stays within `max_pixels`.
    pub fn fits(bounds: Rect, max_pixels: u64) -> bool {
        u32::try_from(bounds.width()).is_ok()
            && u32::try_from(bounds.height()).is_ok()
            && bounds.width().saturating_mul(bounds.height()) <= max_pixels
    }

    /// World rectangle this canvas covers.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Whether the canvas has zero area.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Sample the pixel at world `(x, z)`. `None` outside the bounds.
    pub fn pixel(&self, x: i64, z: i64) -> Option<Rgba<u8>> {
        if !self.bounds.contains(x, z) {
            return None;
        }
        let px = (x - self.bounds.min_x) as u32;
        let pz = (z - self.bounds.min_z) as u32;
        Some(*self.image.get_pixel(px, pz))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub(crate) fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    /// Consume the canvas, keeping only the image.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
