//! Brightness field to glyph index mapping
//!
//! The raw field is stretched to [0, 1] (darkest cell → 0, brightest → 1),
//! inverted, raised to the gamma exponent and scaled onto the ramp.
//! Brighter cells therefore get lighter glyphs.

use crate::error::{PaintError, Result};
use crate::grid::Grid;
use crate::lut::GlyphRamp;
use rayon::prelude::*;

/// Maps an intensity grid to indices into a [`GlyphRamp`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityMapper {
    gamma: f32,
    ramp: GlyphRamp,
}

impl IntensityMapper {
    /// # Errors
    /// [`PaintError::InvalidConfig`] if `gamma` is not a finite positive number
    pub fn new(gamma: f32, ramp: GlyphRamp) -> Result<Self> {
        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(PaintError::InvalidConfig(format!(
                "gamma must be a finite positive number, got {gamma}"
            )));
        }
        Ok(Self { gamma, ramp })
    }

    /// Convert raw per-cell intensities into glyph indices
    ///
    /// A field with no variance (including a single cell) maps every cell
    /// to the densest glyph.
    ///
    /// # Errors
    /// - [`PaintError::InvalidDimensions`] for a grid with no rows or no columns
    /// - [`PaintError::NonFiniteIntensity`] if any value is NaN or infinite
    pub fn map_to_glyphs(&self, intensities: &Grid<f32>) -> Result<Grid<usize>> {
        if intensities.is_empty() {
            return Err(PaintError::InvalidDimensions {
                rows: intensities.rows(),
                cols: intensities.cols(),
            });
        }

        if let Some(position) = intensities.cells().iter().position(|v| !v.is_finite()) {
            return Err(PaintError::NonFiniteIntensity {
                row: position / intensities.cols(),
                col: position % intensities.cols(),
            });
        }

        let min = intensities.cells().iter().copied().fold(f32::INFINITY, f32::min);
        let max = intensities
            .cells()
            .iter()
            .map(|v| v - min)
            .fold(0.0, f32::max);

        log::trace!(
            "mapping {}x{} intensities (min {min}, range {max}, gamma {})",
            intensities.rows(),
            intensities.cols(),
            self.gamma
        );

        let cols = intensities.cols();
        let indices: Vec<usize> = intensities
            .cells()
            .par_chunks(cols)
            .flat_map_iter(|row| row.iter().map(move |&v| self.index_for(v - min, max)))
            .collect();

        Grid::new(intensities.rows(), cols, indices)
    }

    /// Glyph index of one shifted intensity, given the field's range
    fn index_for(&self, shifted: f32, range: f32) -> usize {
        let normalized = if range > 0.0 {
            (shifted / range).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let corrected = (1.0 - normalized).powf(self.gamma);
        let index = (corrected * self.ramp.max_index() as f32).floor();

        // Float casts saturate, so only the upper bound needs guarding
        (index as usize).min(self.ramp.max_index())
    }
}

impl Default for IntensityMapper {
    fn default() -> Self {
        Self {
            gamma: 1.0,
            ramp: GlyphRamp::default(),
        }
    }
}
