//! Map color palette.
//!
//! Map items store one byte per pixel. The byte selects one of 62 base
//! colors (`index / 4`) and one of four brightness shades (`index % 4`).
//! Base color 0 is "no data" and renders fully transparent in every shade,
//! as do indices past the last base color.

use image::Rgba;

/// Number of entries in a palette.
pub const PALETTE_SIZE: usize = 256;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Brightness multipliers (out of 255) for shades 0..=3.
const SHADE_MULTIPLIERS: [u32; 4] = [180, 220, 255, 135];

/// Base map colors as `0xRRGGBB`. Entry 0 is unused (transparent).
const BASE_COLORS: [u32; 62] = [
    0x000000, // none
    0x7FB238, // grass
    0xF7E9A3, // sand
    0xC7C7C7, // wool
    0xFF0000, // fire
    0xA0A0FF, // ice
    0xA7A7A7, // metal
    0x007C00, // plant
    0xFFFFFF, // snow
    0xA4A8B8, // clay
    0x976D4D, // dirt
    0x707070, // stone
    0x4040FF, // water
    0x8F7748, // wood
    0xFFFCF5, // quartz
    0xD87F33, // orange
    0xB24CD8, // magenta
    0x6699D8, // light blue
    0xE5E533, // yellow
    0x7FCC19, // lime
    0xF27FA5, // pink
    0x4C4C4C, // gray
    0x999999, // light gray
    0x4C7F99, // cyan
    0x7F3FB2, // purple
    0x334CB2, // blue
    0x664C33, // brown
    0x667F33, // green
    0x993333, // red
    0x191919, // black
    0xFAEE4D, // gold
    0x5CDBD5, // diamond
    0x4A80FF, // lapis
    0x00D93A, // emerald
    0x815631, // podzol
    0x700200, // nether
    0xD1B1A1, // white terracotta
    0x9F5224, // orange terracotta
    0x95576C, // magenta terracotta
    0x706C8A, // light blue terracotta
    0xBA8524, // yellow terracotta
    0x677535, // lime terracotta
    0xA04D4E, // pink terracotta
    0x392923, // gray terracotta
    0x876B62, // light gray terracotta
    0x575C5C, // cyan terracotta
    0x7A4958, // purple terracotta
    0x4C3E5C, // blue terracotta
    0x4C3223, // brown terracotta
    0x4C522A, // green terracotta
    0x8E3C2E, // red terracotta
    0x251610, // black terracotta
    0xBD3031, // crimson nylium
    0x943F61, // crimson stem
    0x5C191D, // crimson hyphae
    0x167E86, // warped nylium
    0x3A8E8C, // warped stem
    0x562C3E, // warped hyphae
    0x14B485, // warped wart block
    0x646464, // deepslate
    0xD8AF93, // raw iron
    0x7FA796, // glow lichen
];

/// The game's map palette.
pub static MINECRAFT: Palette = Palette::minecraft();

/// Immutable table of 256 RGBA colors indexed by raw map byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgba<u8>; PALETTE_SIZE],
}

impl Palette {
    /// Build the game's map palette.
    ///
    /// Evaluated at compile time for [`MINECRAFT`].
    pub const fn minecraft() -> Self {
        let mut colors = [TRANSPARENT; PALETTE_SIZE];

        // Base color 0 stays transparent
        let mut base = 1;
        while base < BASE_COLORS.len() {
            let rgb = BASE_COLORS[base];
            let mut shade = 0;
            while shade < SHADE_MULTIPLIERS.len() {
                let m = SHADE_MULTIPLIERS[shade];
                let r = ((rgb >> 16) & 0xFF) * m / 255;
                let g = ((rgb >> 8) & 0xFF) * m / 255;
                let b = (rgb & 0xFF) * m / 255;
                colors[base * 4 + shade] = Rgba([r as u8, g as u8, b as u8, 255]);
                shade += 1;
            }
            base += 1;
        }

        Self { colors }
    }

    /// Build a palette from an explicit table.
    pub fn from_colors(colors: [Rgba<u8>; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// Color for a raw map byte.
    #[inline]
    pub fn color(&self, index: u8) -> Rgba<u8> {
        self.colors[index as usize]
    }

    pub fn colors(&self) -> &[Rgba<u8>; PALETTE_SIZE] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        MINECRAFT.clone()
    }
}
