//! Error types for map tile extraction.

use thiserror::Error;

use crate::nbt::TagKind;

/// Why a tag tree could not be turned into a [`Tile`](super::Tile).
///
/// Every variant names the field that failed, as a dotted path from the
/// root compound (e.g. `data.colors`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// A required key is absent.
    #[error("Missing field '{field}'")]
    MissingField { field: &'static str },

    /// A field holds a value of the wrong tag kind.
    #[error("Field '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        field: &'static str,
        expected: TagKind,
        found: TagKind,
    },

    /// The color grid is not exactly 128×128 bytes.
    #[error("Field '{field}': expected {expected} bytes, found {actual}")]
    MalformedLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Zoom scale outside `0..=4`.
    #[error("Field 'data.scale': {scale} is outside 0..=4")]
    ScaleOutOfRange { scale: i32 },
}

impl ExtractionError {
    /// The dotted path of the field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            ExtractionError::MissingField { field }
            | ExtractionError::TypeMismatch { field, .. }
            | ExtractionError::MalformedLength { field, .. } => field,
            ExtractionError::ScaleOutOfRange { .. } => super::fields::SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::fields;

    #[test]
    fn test_extraction_error_display_type_mismatch() {
        let err = ExtractionError::TypeMismatch {
            field: fields::SCALE,
            expected: TagKind::Byte,
            found: TagKind::Int,
        };
        assert_eq!(
            err.to_string(),
            "Field 'data.scale': expected Byte, found Int"
        );
    }

    #[test]
    fn test_extraction_error_display_malformed_length() {
        let err = ExtractionError::MalformedLength {
            field: fields::COLORS,
            expected: 16384,
            actual: 100,
        };
        assert_eq!(
            err.to_string(),
            "Field 'data.colors': expected 16384 bytes, found 100"
        );
    }

    #[test]
    fn test_extraction_error_field() {
        let err = ExtractionError::MissingField {
            field: fields::X_CENTER,
        };
        assert_eq!(err.field(), "data.xCenter");

        let err = ExtractionError::ScaleOutOfRange { scale: 9 };
        assert_eq!(err.field(), "data.scale");
    }
}
