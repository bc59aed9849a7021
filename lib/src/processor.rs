use crate::ascii::{Cell, compose_cells};
use crate::config::{FitAxis, PaintConfig};
use crate::error::{PaintError, Result};
use crate::filters::{enhance_saturation, intensity_field, pixel_grid};
use crate::grid::Grid;
use crate::intensity::IntensityMapper;
use crate::palette::Palette;
use image::{RgbImage, imageops};

/// Largest number of cells allowed along either axis of the output grid
pub const MAX_GRID_DIMENSION: u32 = u16::MAX as u32;

/// Size of the terminal in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub cols: u16,
    pub rows: u16,
}

impl Default for TerminalSize {
    /// The conventional 80×24 used when the real size is unknown
    fn default() -> Self {
        Self { cols: 80, rows: 24 }
    }
}

/// Compute the output grid size for an image
///
/// The image is scaled so that the chosen axis fills the terminal, then by
/// `config.scale`. Columns are stretched by `config.pixel_ratio` because a
/// character cell is taller than it is wide. Halves round to even.
///
/// # Returns
/// `(cols, rows)` of the output grid
///
/// # Errors
/// [`PaintError::InvalidDimensions`] if either size is not finite or exceeds
/// [`MAX_GRID_DIMENSION`]
pub fn output_dimensions(
    image_width: u32,
    image_height: u32,
    terminal: TerminalSize,
    config: &PaintConfig,
) -> Result<(u32, u32)> {
    let width = image_width as f64;
    let height = image_height as f64;
    let scale = config.scale as f64;
    let ratio = config.pixel_ratio as f64;

    let fit_factor = match config.fit {
        FitAxis::Height => terminal.rows as f64 / height,
        FitAxis::Width => terminal.cols as f64 / (width * ratio),
    };

    let cols = (width * scale * ratio * fit_factor).round_ties_even();
    let rows = (height * scale * fit_factor).round_ties_even();

    let limit = MAX_GRID_DIMENSION as f64;
    if !cols.is_finite() || !rows.is_finite() || cols > limit || rows > limit {
        return Err(PaintError::InvalidDimensions {
            rows: rows as usize,
            cols: cols as usize,
        });
    }

    Ok((cols as u32, rows as u32))
}

/// Paints an image as a grid of colored glyphs sized for a terminal
///
/// Pipeline:
/// 1. Compute the output grid size from the image and terminal sizes
/// 2. Resize the image to one pixel per cell
/// 3. Pick glyphs from the summed channel intensities
/// 4. Pick colors from the saturation-adjusted pixels
///
/// # Errors
/// - [`PaintError::InvalidConfig`] for an invalid configuration
/// - [`PaintError::InvalidDimensions`] if the image or the computed grid is
///   empty, or the grid is larger than [`MAX_GRID_DIMENSION`] on either axis
pub fn paint(
    input: &RgbImage,
    terminal: TerminalSize,
    config: &PaintConfig,
) -> Result<Grid<Cell>> {
    config.validate()?;

    let (width, height) = input.dimensions();
    if width == 0 || height == 0 {
        return Err(PaintError::InvalidDimensions {
            rows: height as usize,
            cols: width as usize,
        });
    }

    let (cols, rows) = output_dimensions(width, height, terminal, config)?;
    log::debug!(
        "image {width}x{height} on {}x{} terminal -> {cols}x{rows} cells",
        terminal.cols,
        terminal.rows
    );

    paint_grid(input, cols, rows, config)
}

/// Paints an image into a grid of exactly `cols` × `rows` cells
///
/// # Errors
/// Same as [`paint`]
pub fn paint_grid(
    input: &RgbImage,
    cols: u32,
    rows: u32,
    config: &PaintConfig,
) -> Result<Grid<Cell>> {
    config.validate()?;

    let out_of_range = |n: u32| n == 0 || n > MAX_GRID_DIMENSION;
    if out_of_range(cols) || out_of_range(rows) || input.width() == 0 || input.height() == 0 {
        return Err(PaintError::InvalidDimensions {
            rows: rows as usize,
            cols: cols as usize,
        });
    }

    let resized = resize_to_grid(input, cols, rows);

    let intensities = intensity_field(&resized)?;
    let colors = pixel_grid(&enhance_saturation(&resized, config.saturation))?;

    let mapper = IntensityMapper::new(config.gamma, config.ramp)?;
    let glyphs = mapper.map_to_glyphs(&intensities)?;

    compose_cells(&colors, &glyphs, &config.ramp, config.color_mode, Palette::global())
}

/// Resize image to one pixel per output cell
///
/// Returns the input unchanged when it already has the target size.
fn resize_to_grid(input: &RgbImage, cols: u32, rows: u32) -> RgbImage {
    if input.dimensions() == (cols, rows) {
        return input.clone();
    }

    imageops::resize(input, cols, rows, imageops::FilterType::CatmullRom)
}
