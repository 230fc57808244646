//! Map item tiles.
//!
//! A map item is a 128×128 grid of palette indices covering a square of the
//! world. This module defines the [`Tile`] record and [`extract_tile`], which
//! builds one from a decoded NBT tree.
//!
//! # Example
//!
//! ```
//! use mapstitch::map::{extract_tile, ExtractionError};
//! use mapstitch::nbt::{Compound, Tag};
//!
//! let mut data = Compound::new();
//! data.insert("scale".into(), Tag::Byte(0));
//! data.insert("dimension".into(), Tag::Int(0));
//! data.insert("xCenter".into(), Tag::Int(64));
//! data.insert("zCenter".into(), Tag::Int(64));
//! data.insert("colors".into(), Tag::ByteArray(vec![0; 10]));
//! let mut root = Compound::new();
//! root.insert("data".into(), Tag::Compound(data));
//!
//! let err = extract_tile(&Tag::Compound(root)).unwrap_err();
//! assert!(matches!(err, ExtractionError::MalformedLength { actual: 10, .. }));
//! ```

mod dimension;
mod error;
mod extract;
pub mod fields;
mod tile;

pub use dimension::Dimension;
pub use error::ExtractionError;
pub use extract::extract_tile;
pub use tile::{Tile, MAX_SCALE, TILE_INDEX_COUNT, TILE_SIZE};
