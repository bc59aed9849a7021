use crate::error::{PaintError, Result};
use crate::lut::GlyphRamp;

/// How each cell's color is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Quantized to the xterm 256-color palette
    #[default]
    Indexed256,
    /// Full 24-bit color
    TrueColor,
}

/// Which terminal dimension the output is fitted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitAxis {
    /// Output height matches the terminal height
    #[default]
    Height,
    /// Output width matches the terminal width
    Width,
}

/// Configuration for painting an image as colored text
#[derive(Debug, Clone)]
pub struct PaintConfig {
    /// Glyph mapping
    pub gamma: f32,              // > 0, default 1.0
    pub ramp: GlyphRamp,         // 24 glyphs, blank first

    /// Colors
    pub color_mode: ColorMode,   // default Indexed256
    pub saturation: f32,         // >= 0, default 1.0 (unchanged)

    /// Output size
    pub scale: f32,              // > 0, default 1.0
    pub pixel_ratio: f32,        // cell height / width, default 1.9
    pub fit: FitAxis,            // default Height
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            // Glyph mapping
            gamma: 1.0,
            ramp: GlyphRamp::default(),

            // Colors
            color_mode: ColorMode::Indexed256,
            saturation: 1.0,

            // Output size
            scale: 1.0,
            pixel_ratio: 1.9,
            fit: FitAxis::Height,
        }
    }
}

impl PaintConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(invalid(format!("gamma must be positive, got {}", self.gamma)));
        }
        if !self.saturation.is_finite() || self.saturation < 0.0 {
            return Err(invalid(format!(
                "saturation must be non-negative, got {}",
                self.saturation
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(invalid(format!("scale must be positive, got {}", self.scale)));
        }
        if !self.pixel_ratio.is_finite() || self.pixel_ratio <= 0.0 {
            return Err(invalid(format!(
                "pixel_ratio must be positive, got {}",
                self.pixel_ratio
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> PaintError {
    PaintError::InvalidConfig(message)
}
