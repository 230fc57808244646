//! Error types for NBT decoding.

use std::io;

use thiserror::Error;

use super::TagKind;

/// Result type for NBT operations.
pub type NbtResult<T> = Result<T, NbtError>;

/// Errors that can occur while decoding an NBT stream.
#[derive(Debug, Error)]
pub enum NbtError {
    /// The stream ended in the middle of a value.
    #[error("Unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    /// A tag id outside the known range was encountered.
    #[error("Invalid tag id {0}")]
    InvalidTagId(u8),

    /// An End tag appeared where a value was required.
    #[error("Unexpected End tag")]
    UnexpectedEnd,

    /// An array or list declared a negative length.
    #[error("Negative length {0}")]
    NegativeLength(i32),

    /// Compounds and lists nested deeper than the decoder allows.
    #[error("Nesting depth exceeds {0}")]
    DepthLimitExceeded(usize),

    /// The root tag was not a compound.
    #[error("Root tag must be a Compound, found {0}")]
    RootNotCompound(TagKind),

    /// Bytes were left over after the root compound.
    #[error("{0} trailing bytes after root tag")]
    TrailingBytes(usize),

    /// The gzip stream inflates past the accepted size.
    #[error("Inflated stream exceeds {0} bytes")]
    InflatedTooLarge(u64),

    /// Decompression failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
