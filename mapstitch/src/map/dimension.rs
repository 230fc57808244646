//! World dimension a map was drawn in.

use std::fmt;

/// The dimension a map item belongs to.
///
/// Older saves store the dimension as an integer id, newer ones as a
/// namespaced string. Both forms map onto the same variants; anything else
/// is kept verbatim so callers can report it before discarding the tile.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// The overworld (id 0).
    PrimaryWorld,
    /// The nether (id -1).
    LowerWorld,
    /// The end (id 1).
    EndWorld,
    /// An integer id with no known meaning.
    Unknown(i32),
    /// A namespaced id with no known meaning (e.g. from a mod).
    Custom(String),
}

impl Dimension {
    /// Map a legacy integer id.
    pub fn from_id(id: i32) -> Self {
        match id {
            0 => Dimension::PrimaryWorld,
            -1 => Dimension::LowerWorld,
            1 => Dimension::EndWorld,
            other => Dimension::Unknown(other),
        }
    }

    /// Map a namespaced id such as `minecraft:overworld`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "minecraft:overworld" => Dimension::PrimaryWorld,
            "minecraft:the_nether" => Dimension::LowerWorld,
            "minecraft:the_end" => Dimension::EndWorld,
            other => Dimension::Custom(other.to_string()),
        }
    }

    /// Whether tiles of this dimension take part in compositing.
    pub fn is_primary(&self) -> bool {
        matches!(self, Dimension::PrimaryWorld)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::PrimaryWorld => f.write_str("overworld"),
            Dimension::LowerWorld => f.write_str("nether"),
            Dimension::EndWorld => f.write_str("end"),
            Dimension::Unknown(id) => write!(f, "unknown({})", id),
            Dimension::Custom(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        assert_eq!(Dimension::from_id(0), Dimension::PrimaryWorld);
        assert_eq!(Dimension::from_id(-1), Dimension::LowerWorld);
        assert_eq!(Dimension::from_id(1), Dimension::EndWorld);
        assert_eq!(Dimension::from_id(7), Dimension::Unknown(7));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            Dimension::from_name("minecraft:overworld"),
            Dimension::PrimaryWorld
        );
        assert_eq!(
            Dimension::from_name("minecraft:the_nether"),
            Dimension::LowerWorld
        );
        assert_eq!(Dimension::from_name("minecraft:the_end"), Dimension::EndWorld);
        assert_eq!(
            Dimension::from_name("twilight:forest"),
            Dimension::Custom("twilight:forest".to_string())
        );
    }

    #[test]
    fn test_only_overworld_is_primary() {
        assert!(Dimension::PrimaryWorld.is_primary());
        assert!(!Dimension::LowerWorld.is_primary());
        assert!(!Dimension::EndWorld.is_primary());
        assert!(!Dimension::Unknown(0x7f).is_primary());
    }

    #[test]
    fn test_display() {
        assert_eq!(Dimension::PrimaryWorld.to_string(), "overworld");
        assert_eq!(Dimension::Unknown(-5).to_string(), "unknown(-5)");
        assert_eq!(Dimension::Custom("a:b".into()).to_string(), "a:b");
    }
}
