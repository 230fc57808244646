//! Dotted field paths reported in extraction errors.

/// The root compound itself.
pub const ROOT: &str = "<root>";
pub const DATA: &str = "data";
pub const SCALE: &str = "data.scale";
pub const DIMENSION: &str = "data.dimension";
pub const X_CENTER: &str = "data.xCenter";
pub const Z_CENTER: &str = "data.zCenter";
pub const COLORS: &str = "data.colors";
