//! Glyph lookup table
//!
//! The ramp orders characters by how much ink they put on a terminal cell.

use crate::error::{PaintError, Result};

/// Number of glyphs in a ramp
pub const RAMP_LEN: usize = 24;

/// Default ramp, from blank to densest
pub const DEFAULT_GLYPHS: [char; RAMP_LEN] = [
    ' ', // 0: blank
    '.', '\'', ',', ':', ';',
    'i', 'r', 's', 'X', 'A',
    '2', '5', '3', 'h', 'M',
    'H', 'G', 'S', '#', '9',
    'B', '&',
    '@', // 23: densest
];

/// An ordered, immutable sequence of 24 glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: [char; RAMP_LEN],
}

impl GlyphRamp {
    pub const fn new(glyphs: [char; RAMP_LEN]) -> Self {
        Self { glyphs }
    }

    /// Parse a ramp written as a string, least dense glyph first
    ///
    /// # Errors
    /// [`PaintError::InvalidConfig`] unless the string has exactly 24 characters
    pub fn parse(ramp: &str) -> Result<Self> {
        let chars: Vec<char> = ramp.chars().collect();
        let glyphs: [char; RAMP_LEN] = chars.try_into().map_err(|chars: Vec<char>| {
            PaintError::InvalidConfig(format!(
                "glyph ramp must have exactly {RAMP_LEN} characters, got {}",
                chars.len()
            ))
        })?;
        Ok(Self { glyphs })
    }

    pub const fn len(&self) -> usize {
        RAMP_LEN
    }

    /// Largest valid glyph index
    pub const fn max_index(&self) -> usize {
        RAMP_LEN - 1
    }

    /// Glyph at `index`; indices past the end give the densest glyph
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index.min(self.max_index())]
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self::new(DEFAULT_GLYPHS)
    }
}
