//! xterm 256-color palette and nearest-color quantization
//!
//! The palette layout is the one every xterm-compatible terminal uses:
//! - 0-7: ANSI base colors
//! - 8-15: bright variants of the base colors
//! - 16-231: 6×6×6 color cube over [`QUANTIZATION_AXIS`]
//! - 232-255: 24-step grayscale ramp from `080808` to `eeeeee`
//!
//! Quantization snaps each channel to the axis on its own and then looks the
//! snapped color up in the reverse table. It is deliberately not a Euclidean
//! nearest-neighbor search: grays such as `808080` land on the cube
//! (`878787`) rather than on the identical grayscale entry.

use crate::error::{PaintError, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

/// An 8-bit-per-channel RGB triple
pub type Rgb = [u8; 3];

/// Number of palette entries
pub const PALETTE_SIZE: usize = 256;

/// Reference channel values of the 6×6×6 color cube, ascending
pub const QUANTIZATION_AXIS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

/// First index of the color cube
const CUBE_START: usize = 16;

/// First index of the grayscale ramp
const GRAY_START: usize = 232;

/// The 16 system colors, in xterm's default rendition
const SYSTEM_COLORS: [Rgb; 16] = [
    // Base colors
    [0x00, 0x00, 0x00],
    [0x80, 0x00, 0x00],
    [0x00, 0x80, 0x00],
    [0x80, 0x80, 0x00],
    [0x00, 0x00, 0x80],
    [0x80, 0x00, 0x80],
    [0x00, 0x80, 0x80],
    [0xc0, 0xc0, 0xc0],

    // Bright variants
    [0x80, 0x80, 0x80],
    [0xff, 0x00, 0x00],
    [0x00, 0xff, 0x00],
    [0xff, 0xff, 0x00],
    [0x00, 0x00, 0xff],
    [0xff, 0x00, 0xff],
    [0x00, 0xff, 0xff],
    [0xff, 0xff, 0xff],
];

static GLOBAL_PALETTE: OnceLock<Palette> = OnceLock::new();

/// One palette slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub index: u8,
    pub rgb: Rgb,
}

/// The fixed 256-entry palette plus its reverse lookup table
#[derive(Debug, Clone)]
pub struct Palette {
    entries: [PaletteEntry; PALETTE_SIZE],
    /// Packed `0xRRGGBB` → palette index
    reverse: HashMap<u32, u8>,
}

impl Palette {
    /// Build the palette table and its reverse lookup
    ///
    /// Several colors appear twice (for example `000000` at 0 and 16). The
    /// reverse table is folded in table order, so the later index wins.
    pub fn new() -> Self {
        let entries: [PaletteEntry; PALETTE_SIZE] = std::array::from_fn(|index| PaletteEntry {
            index: index as u8,
            rgb: entry_rgb(index),
        });

        let reverse = entries
            .iter()
            .fold(HashMap::with_capacity(PALETTE_SIZE), |mut map, entry| {
                map.insert(pack(entry.rgb), entry.index);
                map
            });

        log::trace!("built palette with {} distinct colors", reverse.len());

        Self { entries, reverse }
    }

    /// The process-wide palette, built on first use
    pub fn global() -> &'static Palette {
        GLOBAL_PALETTE.get_or_init(Palette::new)
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Stored color of a palette index
    pub fn rgb(&self, index: u8) -> Rgb {
        self.entries[index as usize].rgb
    }

    /// Canonical index of an exact palette color, if it is one
    pub fn index_of(&self, rgb: Rgb) -> Option<u8> {
        self.reverse.get(&pack(rgb)).copied()
    }

    /// Quantize an arbitrary color to the palette
    ///
    /// # Returns
    /// The palette index and the palette's stored color for that index
    ///
    /// # Errors
    /// [`PaintError::PaletteLookup`] if the snapped color is missing from the
    /// reverse table. Every snapped color is a cube color, so this only
    /// happens with a broken table.
    pub fn quantize(&self, rgb: Rgb) -> Result<(u8, Rgb)> {
        let snapped = rgb.map(snap_channel);

        let index = self
            .index_of(snapped)
            .ok_or_else(|| PaintError::PaletteLookup {
                key: hex_key(snapped),
            })?;

        Ok((index, self.rgb(index)))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

/// Snap one channel value to the nearest [`QUANTIZATION_AXIS`] value
///
/// The value snaps to the upper end of its axis interval when it is at or
/// above the interval's integer midpoint, so ties go to the larger value.
pub fn snap_channel(value: u8) -> u8 {
    QUANTIZATION_AXIS
        .windows(2)
        .find(|pair| pair[0] <= value && value <= pair[1])
        .map(|pair| {
            let (lo, hi) = (pair[0], pair[1]);
            let midpoint = ((lo as u16 + hi as u16) / 2) as u8;
            if value >= midpoint { hi } else { lo }
        })
        // The axis spans 0..=255, so every value has an interval
        .unwrap_or(value)
}

/// Lowercase 6-digit hex form of a color, e.g. `00afd7`
pub fn hex_key(rgb: Rgb) -> String {
    format!("{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

fn pack(rgb: Rgb) -> u32 {
    ((rgb[0] as u32) << 16) | ((rgb[1] as u32) << 8) | rgb[2] as u32
}

fn entry_rgb(index: usize) -> Rgb {
    match index {
        0..CUBE_START => SYSTEM_COLORS[index],
        CUBE_START..GRAY_START => {
            let n = index - CUBE_START;
            [
                QUANTIZATION_AXIS[n / 36],
                QUANTIZATION_AXIS[(n / 6) % 6],
                QUANTIZATION_AXIS[n % 6],
            ]
        }
        _ => {
            let level = (0x08 + 10 * (index - GRAY_START)) as u8;
            [level, level, level]
        }
    }
}
