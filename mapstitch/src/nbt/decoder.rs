//! Binary NBT decoding.
//!
//! All multi-byte values are big-endian. Every read checks the remaining
//! input first, so truncated or hostile streams produce an [`NbtError`]
//! instead of a panic, and declared lengths are validated against the
//! remaining input before anything is allocated for them.

use std::borrow::Cow;
use std::io::Read;

use bytes::Buf;
use flate2::read::GzDecoder;
use tracing::trace;

use super::{Compound, NamedTag, NbtError, NbtResult, Tag, TagKind};

/// Maximum nesting of compounds and lists.
pub const MAX_DEPTH: usize = 512;

/// Largest inflated stream accepted, in bytes.
///
/// A map item inflates to about 16.5 KiB.
pub const MAX_INFLATED_SIZE: u64 = 1 << 20;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Strip gzip framing if present.
///
/// Map files are always gzip-compressed on disk, but already-inflated input
/// is passed through unchanged so callers can hand in either.
///
/// Inflation stops after [`MAX_INFLATED_SIZE`] bytes; a longer stream is
/// rejected with [`NbtError::InflatedTooLarge`].
pub fn decompress(input: &[u8]) -> NbtResult<Cow<'_, [u8]>> {
    if !input.starts_with(&GZIP_MAGIC) {
        return Ok(Cow::Borrowed(input));
    }

    let mut out = Vec::with_capacity(input.len() * 4);
    GzDecoder::new(input)
        .take(MAX_INFLATED_SIZE + 1)
        .read_to_end(&mut out)?;
    if out.len() as u64 > MAX_INFLATED_SIZE {
        return Err(NbtError::InflatedTooLarge(MAX_INFLATED_SIZE));
    }
    trace!(compressed = input.len(), inflated = out.len(), "Inflated gzip stream");
    Ok(Cow::Owned(out))
}

/// Decode an uncompressed NBT stream.
///
/// The stream must hold exactly one named Compound tag.
///
/// # Example
///
/// ```
/// use mapstitch::nbt::{decode, Tag};
///
/// // Compound "" { Byte "scale" = 2 }
/// let bytes = [10, 0, 0, 1, 0, 5, b's', b'c', b'a', b'l', b'e', 2, 0];
/// let root = decode(&bytes).unwrap();
/// assert_eq!(root.tag.get("scale"), Some(&Tag::Byte(2)));
/// ```
pub fn decode(input: &[u8]) -> NbtResult<NamedTag> {
    let mut decoder = Decoder { buf: input };

    let kind = decoder.read_kind()?;
    if kind != TagKind::Compound {
        return Err(NbtError::RootNotCompound(kind));
    }
    let name = decoder.read_string()?;
    let tag = decoder.read_payload(kind, 0)?;

    if decoder.buf.has_remaining() {
        return Err(NbtError::TrailingBytes(decoder.buf.remaining()));
    }

    Ok(NamedTag { name, tag })
}

struct Decoder<'a> {
    buf: &'a [u8],
}

impl<'a> Decoder<'a> {
    fn need(&self, needed: usize) -> NbtResult<()> {
        let remaining = self.buf.remaining();
        if remaining < needed {
            return Err(NbtError::UnexpectedEof { needed, remaining });
        }
        Ok(())
    }

    fn read_u8(&mut self) -> NbtResult<u8> {
        self.need(1)?;
        Ok(self.buf.get_u8())
    }

    fn read_i8(&mut self) -> NbtResult<i8> {
        self.need(1)?;
        Ok(self.buf.get_i8())
    }

    fn read_i16(&mut self) -> NbtResult<i16> {
        self.need(2)?;
        Ok(self.buf.get_i16())
    }

    fn read_u16(&mut self) -> NbtResult<u16> {
        self.need(2)?;
        Ok(self.buf.get_u16())
    }

    fn read_i32(&mut self) -> NbtResult<i32> {
        self.need(4)?;
        Ok(self.buf.get_i32())
    }

    fn read_i64(&mut self) -> NbtResult<i64> {
        self.need(8)?;
        Ok(self.buf.get_i64())
    }

    fn read_f32(&mut self) -> NbtResult<f32> {
        self.need(4)?;
        Ok(self.buf.get_f32())
    }

    fn read_f64(&mut self) -> NbtResult<f64> {
        self.need(8)?;
        Ok(self.buf.get_f64())
    }

    fn read_kind(&mut self) -> NbtResult<TagKind> {
        let id = self.read_u8()?;
        TagKind::from_id(id).ok_or(NbtError::InvalidTagId(id))
    }

    /// Read an `i32` length prefix and check that `len * elem_size` bytes remain.
    fn read_len(&mut self, elem_size: usize) -> NbtResult<usize> {
        let len = self.read_i32()?;
        if len < 0 {
            return Err(NbtError::NegativeLength(len));
        }
        let len = len as usize;
        self.need(len.saturating_mul(elem_size))?;
        Ok(len)
    }

    fn take(&mut self, len: usize) -> NbtResult<&'a [u8]> {
        self.need(len)?;
        let (head, rest) = self.buf.split_at(len);
        self.buf = rest;
        Ok(head)
    }

    /// Strings are Java "modified UTF-8"; anything that is not plain UTF-8
    /// is decoded lossily.
    fn read_string(&mut self) -> NbtResult<String> {
        let len = self.read_u16()? as usize;
        let bytes = self.take(len)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    fn read_payload(&mut self, kind: TagKind, depth: usize) -> NbtResult<Tag> {
        let tag = match kind {
            TagKind::End => return Err(NbtError::UnexpectedEnd),
            TagKind::Byte => Tag::Byte(self.read_i8()?),
            TagKind::Short => Tag::Short(self.read_i16()?),
            TagKind::Int => Tag::Int(self.read_i32()?),
            TagKind::Long => Tag::Long(self.read_i64()?),
            TagKind::Float => Tag::Float(self.read_f32()?),
            TagKind::Double => Tag::Double(self.read_f64()?),
            TagKind::ByteArray => {
                let len = self.read_len(1)?;
                Tag::ByteArray(self.take(len)?.to_vec())
            }
            TagKind::String => Tag::String(self.read_string()?),
            TagKind::List => self.read_list(depth + 1)?,
            TagKind::Compound => self.read_compound(depth + 1)?,
            TagKind::IntArray => {
                let len = self.read_len(4)?;
                let mut values = Vec::with_capacity(len);
                for _ in 0..len {
                    values.push(self.buf.get_i32());
                }
                Tag::IntArray(values)
            }
            TagKind::LongArray => {
                let len = self.read_len(8)?;
                let mut values = Vec::with_capacity(len);
                for _ in 0..len {
                    values.push(self.buf.get_i64());
                }
                Tag::LongArray(values)
            }
        };
        Ok(tag)
    }

    fn read_list(&mut self, depth: usize) -> NbtResult<Tag> {
        if depth > MAX_DEPTH {
            return Err(NbtError::DepthLimitExceeded(MAX_DEPTH));
        }

        let element = self.read_kind()?;
        let len = self.read_len(element.min_payload_size())?;

        // Empty lists are written with an End element type
        if element == TagKind::End {
            if len == 0 {
                return Ok(Tag::List(Vec::new()));
            }
            return Err(NbtError::UnexpectedEnd);
        }

        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            items.push(self.read_payload(element, depth)?);
        }
        Ok(Tag::List(items))
    }

    fn read_compound(&mut self, depth: usize) -> NbtResult<Tag> {
        if depth > MAX_DEPTH {
            return Err(NbtError::DepthLimitExceeded(MAX_DEPTH));
        }

        let mut entries = Compound::new();
        loop {
            let kind = self.read_kind()?;
            if kind == TagKind::End {
                break;
            }
            let name = self.read_string()?;
            let value = self.read_payload(kind, depth)?;
            entries.insert(name, value);
        }
        Ok(Tag::Compound(entries))
    }
}
