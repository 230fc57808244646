//! Named Binary Tag (NBT) decoding.
//!
//! Minecraft stores map items as a gzip-compressed NBT stream: a tree of
//! typed, named values rooted at a single compound. This module turns that
//! stream into a [`Tag`] tree that the map extractor walks.
//!
//! Only decoding is supported; nothing here writes NBT.
//!
//! # Example
//!
//! ```
//! use mapstitch::nbt::{decode, decompress, TagKind};
//!
//! let raw = [10u8, 0, 0, 0]; // empty unnamed compound
//! let bytes = decompress(&raw).unwrap();
//! let root = decode(&bytes).unwrap();
//! assert_eq!(root.tag.kind(), TagKind::Compound);
//! ```

mod decoder;
mod error;
mod tag;

pub use decoder::{decode, decompress, MAX_DEPTH, MAX_INFLATED_SIZE};
pub use error::{NbtError, NbtResult};
pub use tag::{Compound, NamedTag, Tag, TagKind};
