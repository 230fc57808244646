//! Reading map files from disk.
//!
//! A map file is read whole, stripped of its gzip framing, decoded as NBT and
//! handed to [`extract_tile`]. Batches are loaded in parallel with rayon;
//! each file gets its own result so one bad file never stops the rest.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use mapstitch::loader::{collect_map_files, load_tiles};
//!
//! let files = collect_map_files(Path::new("world/data")).unwrap();
//! for (path, result) in load_tiles(&files) {
//!     match result {
//!         Ok(tile) => println!("{}: scale {}", path.display(), tile.scale()),
//!         Err(e) => eprintln!("{}", e),
//!     }
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

use crate::map::{extract_tile, ExtractionError, Tile};
use crate::nbt::{decode, decompress, NbtError};

/// Errors that can occur while loading one map file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    /// The file is not a valid NBT stream.
    #[error("{}: {source}", .path.display())]
    Decode { path: PathBuf, source: NbtError },

    /// The NBT tree is not a well-formed map item.
    #[error("{}: {source}", .path.display())]
    Extract {
        path: PathBuf,
        source: ExtractionError,
    },
}

impl LoadError {
    /// The file this error belongs to.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Decode { path, .. }
            | LoadError::Extract { path, .. } => path,
        }
    }
}

/// Expand a command-line path into the map files it names.
///
/// A file yields itself. A directory yields its direct children that are
/// files, sorted by name; subdirectories are not descended into.
///
/// # Errors
///
/// Returns the I/O error if the path does not exist or cannot be listed.
pub fn collect_map_files(path: &Path) -> io::Result<Vec<PathBuf>> {
    let metadata = fs::metadata(path)?;
    if !metadata.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry_path = entry?.path();
        match fs::metadata(&entry_path) {
            Ok(m) if m.is_file() => files.push(entry_path),
            Ok(_) => debug!(path = %entry_path.display(), "Skipping non-file entry"),
            Err(e) => warn!(
                path = %entry_path.display(),
                error = %e,
                "Failed to stat directory entry"
            ),
        }
    }
    files.sort();

    debug!(
        directory = %path.display(),
        files = files.len(),
        "Collected map files"
    );
    Ok(files)
}

/// Load a single map file.
pub fn load_tile(path: &Path) -> Result<Tile, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decode_err = |source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let raw = decompress(&bytes).map_err(decode_err)?;
    let root = decode(&raw).map_err(decode_err)?;
    extract_tile(&root.tag).map_err(|source| LoadError::Extract {
        path: path.to_path_buf(),
        source,
    })
}

/// Load many map files in parallel.
///
/// Results come back in the same order as `paths`.
pub fn load_tiles(paths: &[PathBuf]) -> Vec<(PathBuf, Result<Tile, LoadError>)> {
    paths
        .par_iter()
        .map(|path| (path.clone(), load_tile(path)))
        .collect()
}
