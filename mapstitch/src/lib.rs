//! mapstitch - Minecraft map item compositing
//!
//! This library reads `map_<n>.dat` files (gzip-framed NBT), extracts the
//! 128×128 color grid each one stores, and stitches many of them into a
//! single world-aligned RGBA image. Finer zoom levels always overdraw
//! coarser ones where they overlap.
//!
//! # Architecture
//!
//! ```text
//! map_*.dat ──► loader ──► nbt::decode ──► map::extract_tile ──► Tile
//!                                                                  │
//!                        output::write_png ◄── Canvas ◄── compositor::composite
//! ```
//!
//! # Example
//!
//! ```
//! use mapstitch::compositor::composite;
//! use mapstitch::map::{Dimension, Tile, TILE_INDEX_COUNT};
//!
//! let tile = Tile::new(0, Dimension::PrimaryWorld, (0, 0), vec![0; TILE_INDEX_COUNT]).unwrap();
//! let canvas = composite(&[tile]);
//! assert_eq!((canvas.width(), canvas.height()), (128, 128));
//! ```

pub mod canvas;
pub mod compositor;
pub mod config;
pub mod geometry;
pub mod loader;
pub mod logging;
pub mod map;
pub mod nbt;
pub mod output;
pub mod palette;
