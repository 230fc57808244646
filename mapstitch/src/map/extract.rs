//! Tag tree to [`Tile`] extraction.
//!
//! Every field goes through a typed accessor that checks the declared tag
//! kind before converting, so malformed files produce an
//! [`ExtractionError`] naming the offending field instead of a panic.

use tracing::trace;

use crate::nbt::{Compound, Tag, TagKind};

use super::tile::check_index_count;
use super::{fields, Dimension, ExtractionError, Tile, MAX_SCALE};

/// Extract a map tile from a decoded map file.
///
/// Expects the layout the game writes:
///
/// ```text
/// Compound ""
/// └── Compound "data"
///     ├── Byte      "scale"
///     ├── Int       "dimension"   (or String on newer versions)
///     ├── Int       "xCenter"
///     ├── Int       "zCenter"
///     └── ByteArray "colors"      (16384 bytes)
/// ```
///
/// Other keys are ignored. Dimension filtering is left to the caller.
///
/// # Errors
///
/// Returns an [`ExtractionError`] for a missing key, a wrong tag kind, a
/// color grid that is not 16384 bytes, or a scale outside `0..=4`.
pub fn extract_tile(root: &Tag) -> Result<Tile, ExtractionError> {
    let root = typed(root, fields::ROOT, TagKind::Compound, Tag::as_compound)?;
    let data = field(root, "data", fields::DATA, TagKind::Compound, Tag::as_compound)?;

    let scale = field(data, "scale", fields::SCALE, TagKind::Byte, Tag::as_byte)?;
    let dimension = dimension_field(data)?;
    let x_center = field(data, "xCenter", fields::X_CENTER, TagKind::Int, Tag::as_int)?;
    let z_center = field(data, "zCenter", fields::Z_CENTER, TagKind::Int, Tag::as_int)?;
    let colors = field(
        data,
        "colors",
        fields::COLORS,
        TagKind::ByteArray,
        Tag::as_byte_array,
    )?;

    let scale = u8::try_from(scale)
        .ok()
        .filter(|s| *s <= MAX_SCALE)
        .ok_or(ExtractionError::ScaleOutOfRange {
            scale: scale as i32,
        })?;

    // Check before copying so an oversized array is never duplicated
    check_index_count(colors.len())?;

    let tile = Tile::new(scale, dimension, (x_center, z_center), colors)?;
    trace!(
        scale = tile.scale(),
        dimension = %tile.dimension(),
        region = %tile.region(),
        "Extracted map tile"
    );
    Ok(tile)
}

/// Convert a tag with `get`, reporting a mismatch against `expected`.
fn typed<'a, T>(
    tag: &'a Tag,
    field: &'static str,
    expected: TagKind,
    get: impl FnOnce(&'a Tag) -> Option<T>,
) -> Result<T, ExtractionError> {
    get(tag).ok_or(ExtractionError::TypeMismatch {
        field,
        expected,
        found: tag.kind(),
    })
}

/// Look up `key` in `parent` and convert it with `get`.
fn field<'a, T>(
    parent: &'a Compound,
    key: &str,
    field: &'static str,
    expected: TagKind,
    get: impl FnOnce(&'a Tag) -> Option<T>,
) -> Result<T, ExtractionError> {
    let tag = parent
        .get(key)
        .ok_or(ExtractionError::MissingField { field })?;
    typed(tag, field, expected, get)
}

/// The dimension is an Int id in older saves and a String id in newer ones.
fn dimension_field(data: &Compound) -> Result<Dimension, ExtractionError> {
    let tag = data.get("dimension").ok_or(ExtractionError::MissingField {
        field: fields::DIMENSION,
    })?;

    match tag {
        Tag::Int(id) => Ok(Dimension::from_id(*id)),
        Tag::String(name) => Ok(Dimension::from_name(name)),
        other => Err(ExtractionError::TypeMismatch {
            field: fields::DIMENSION,
            expected: TagKind::Int,
            found: other.kind(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::TILE_INDEX_COUNT;

    /// A well-formed map tree, returned as the `data` compound for tweaking.
    fn map_data(scale: i8, x: i32, z: i32, colors: Vec<u8>) -> Compound {
        let mut data = Compound::new();
        data.insert("scale".to_string(), Tag::Byte(scale));
        data.insert("dimension".to_string(), Tag::Int(0));
        data.insert("xCenter".to_string(), Tag::Int(x));
        data.insert("zCenter".to_string(), Tag::Int(z));
        data.insert("colors".to_string(), Tag::ByteArray(colors));
        data.insert("trackingPosition".to_string(), Tag::Byte(1));
        data
    }

    fn wrap(data: Compound) -> Tag {
        let mut root = Compound::new();
        root.insert("data".to_string(), Tag::Compound(data));
        root.insert("DataVersion".to_string(), Tag::Int(3465));
        Tag::Compound(root)
    }

    #[test]
    fn test_extract_well_formed_tile() {
        let mut colors = vec![0u8; TILE_INDEX_COUNT];
        colors[0] = 34;
        let tree = wrap(map_data(2, 448, -64, colors.clone()));

        let tile = extract_tile(&tree).unwrap();
        assert_eq!(tile.scale(), 2);
        assert_eq!(tile.dimension(), &Dimension::PrimaryWorld);
        assert_eq!(tile.center(), (448, -64));
        assert_eq!(tile.indices(), &colors[..]);
        assert_eq!(tile.region().width(), 512);
        assert_eq!(tile.region().min_x, 448 - 256);
    }

    #[test]
    fn test_extract_accepts_extreme_centers() {
        let max = i64::from(i32::MAX);
        let min = i64::from(i32::MIN);

        let tile = extract_tile(&wrap(map_data(
            1,
            i32::MAX,
            i32::MIN,
            vec![0; TILE_INDEX_COUNT],
        )))
        .unwrap();
        assert_eq!(tile.center(), (i32::MAX, i32::MIN));
        assert_eq!(
            tile.region(),
            crate::geometry::Rect::new(max - 128, min - 128, max + 128, min + 128)
        );

        let tile = extract_tile(&wrap(map_data(
            0,
            1_100_000_000,
            i32::MAX - 1000,
            vec![0; TILE_INDEX_COUNT],
        )))
        .unwrap();
        assert_eq!(tile.region().min_x, 1_100_000_000 - 64);
        assert_eq!(tile.region().max_z, max - 1000 + 64);
    }

    #[test]
    fn test_extract_reports_other_dimensions() {
        let mut data = map_data(0, 0, 0, vec![0; TILE_INDEX_COUNT]);
        data.insert("dimension".to_string(), Tag::Int(-1));
        let tile = extract_tile(&wrap(data)).unwrap();
        assert_eq!(tile.dimension(), &Dimension::LowerWorld);
    }

    #[test]
    fn test_extract_accepts_string_dimension() {
        let mut data = map_data(0, 0, 0, vec![0; TILE_INDEX_COUNT]);
        data.insert(
            "dimension".to_string(),
            Tag::String("minecraft:the_end".to_string()),
        );
        let tile = extract_tile(&wrap(data)).unwrap();
        assert_eq!(tile.dimension(), &Dimension::EndWorld);
    }

    #[test]
    fn test_extract_rejects_wrong_dimension_kind() {
        let mut data = map_data(0, 0, 0, vec![0; TILE_INDEX_COUNT]);
        data.insert("dimension".to_string(), Tag::Byte(0));
        let err = extract_tile(&wrap(data)).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::TypeMismatch {
                field: fields::DIMENSION,
                expected: TagKind::Int,
                found: TagKind::Byte,
            }
        );
    }

    #[test]
    fn test_extract_rejects_short_colors() {
        let tree = wrap(map_data(0, 0, 0, vec![0; 16383]));
        let err = extract_tile(&tree).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::MalformedLength {
                field: fields::COLORS,
                expected: TILE_INDEX_COUNT,
                actual: 16383,
            }
        );
    }

    #[test]
    fn test_extract_rejects_empty_colors() {
        let tree = wrap(map_data(0, 0, 0, Vec::new()));
        let err = extract_tile(&tree).unwrap_err();
        assert!(matches!(err, ExtractionError::MalformedLength { actual: 0, .. }));
    }

    #[test]
    fn test_extract_rejects_int_scale() {
        let mut data = map_data(0, 0, 0, vec![0; TILE_INDEX_COUNT]);
        data.insert("scale".to_string(), Tag::Int(1));
        let err = extract_tile(&wrap(data)).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::TypeMismatch {
                field: fields::SCALE,
                expected: TagKind::Byte,
                found: TagKind::Int,
            }
        );
    }

    #[test]
    fn test_extract_rejects_out_of_range_scale() {
        for scale in [-1i8, 5, 127] {
            let tree = wrap(map_data(scale, 0, 0, vec![0; TILE_INDEX_COUNT]));
            let err = extract_tile(&tree).unwrap_err();
            assert_eq!(
                err,
                ExtractionError::ScaleOutOfRange {
                    scale: scale as i32
                }
            );
        }
    }

    #[test]
    fn test_extract_rejects_colors_as_int_array() {
        let mut data = map_data(0, 0, 0, Vec::new());
        data.insert("colors".to_string(), Tag::IntArray(vec![0; 4096]));
        let err = extract_tile(&wrap(data)).unwrap_err();
        assert_eq!(err.field(), fields::COLORS);
        assert!(matches!(
            err,
            ExtractionError::TypeMismatch {
                found: TagKind::IntArray,
                ..
            }
        ));
    }

    #[test]
    fn test_extract_reports_missing_field() {
        let mut data = map_data(0, 0, 0, vec![0; TILE_INDEX_COUNT]);
        data.remove("zCenter");
        let err = extract_tile(&wrap(data)).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::MissingField {
                field: fields::Z_CENTER
            }
        );
    }

    #[test]
    fn test_extract_reports_missing_data() {
        let err = extract_tile(&Tag::Compound(Compound::new())).unwrap_err();
        assert_eq!(err, ExtractionError::MissingField { field: fields::DATA });
    }

    #[test]
    fn test_extract_rejects_non_compound_data() {
        let mut root = Compound::new();
        root.insert("data".to_string(), Tag::List(vec![]));
        let err = extract_tile(&Tag::Compound(root)).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::TypeMismatch {
                field: fields::DATA,
                expected: TagKind::Compound,
                found: TagKind::List,
            }
        );
    }

    #[test]
    fn test_extract_rejects_non_compound_root() {
        let err = extract_tile(&Tag::Int(0)).unwrap_err();
        assert_eq!(err.field(), fields::ROOT);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_wrong_color_length_always_fails(len in 0usize..40_000) {
                prop_assume!(len != TILE_INDEX_COUNT);
                let tree = wrap(map_data(0, 0, 0, vec![0; len]));
                let result = extract_tile(&tree);
                prop_assert!(
                    matches!(
                        result,
                        Err(ExtractionError::MalformedLength { actual, .. }) if actual == len
                    ),
                    "expected MalformedLength for {} bytes",
                    len
                );
            }
        }
    }
}
