//! PNG output for composited canvases.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use image::{ImageError, ImageFormat};
use thiserror::Error;
use tracing::info;

use crate::canvas::Canvas;

/// Errors that can occur while writing a canvas.
#[derive(Debug, Error)]
pub enum OutputError {
    /// A 0×0 canvas has no PNG representation.
    #[error("Nothing to write: the canvas is empty")]
    EmptyCanvas,

    /// The destination file could not be created or flushed.
    #[error("Failed to write {}: {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },

    /// PNG encoding failed.
    #[error("Failed to encode {}: {source}", .path.display())]
    Encode { path: PathBuf, source: ImageError },
}

/// Encode `canvas` as PNG into `writer`.
pub fn encode_png<W: Write + io::Seek>(canvas: &Canvas, writer: &mut W) -> Result<(), ImageError> {
    canvas.image().write_to(writer, ImageFormat::Png)
}

/// Write `canvas` as a PNG file at `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`OutputError::EmptyCanvas`] for a 0×0 canvas, otherwise the
/// underlying I/O or encoding failure.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<(), OutputError> {
    if canvas.is_empty() {
        return Err(OutputError::EmptyCanvas);
    }

    let create_err = |source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(create_err)?;
    let mut writer = BufWriter::new(file);
    encode_png(canvas, &mut writer).map_err(|source| OutputError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(create_err)?;

    info!(
        path = %path.display(),
        width = canvas.width(),
        height = canvas.height(),
        "Wrote PNG"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use image::{GenericImageView, Rgba};
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_write_png_rejects_empty_canvas() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.png");

        let err = write_png(&Canvas::new(Rect::EMPTY), &path).unwrap_err();
        assert!(matches!(err, OutputError::EmptyCanvas));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_png_roundtrips_pixels() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.png");

        let mut canvas = Canvas::new(Rect::new(-1, -1, 2, 1));
        canvas.image_mut().put_pixel(2, 1, Rgba([10, 20, 30, 255]));
        write_png(&canvas, &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(2, 1), Rgba([10, 20, 30, 255]));
        assert_eq!(decoded.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_encode_png_writes_signature() {
        let canvas = Canvas::new(Rect::new(0, 0, 1, 1));
        let mut buffer = Cursor::new(Vec::new());
        encode_png(&canvas, &mut buffer).unwrap();
        assert_eq!(&buffer.get_ref()[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_write_png_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.png");

        let canvas = Canvas::new(Rect::new(0, 0, 1, 1));
        let err = write_png(&canvas, &path).unwrap_err();
        assert!(matches!(err, OutputError::Create { .. }));
    }
}
