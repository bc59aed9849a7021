use crate::error::Result;
use crate::grid::Grid;
use crate::palette::Rgb;
use image::{GrayImage, Luma, Rgb as Pixel, RgbImage};

/// Calculate ITU-R 601-2 luma from an RGB image
///
/// Formula: L = 0.299*R + 0.587*G + 0.114*B, in 16.16 fixed point with
/// rounding, which is what common image libraries use for RGB → L.
///
/// # Arguments
/// * `img` - Input RGB image
///
/// # Returns
/// Grayscale image with luma values
pub fn calculate_luma(img: &RgbImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let [r, g, b] = img.get_pixel(x, y).0;
            let luma = (r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16;
            output.put_pixel(x, y, Luma([luma as u8]));
        }
    }

    output
}

/// Adjust color saturation
///
/// Blends between the grayscale version of the image (factor 0.0) and the
/// image itself (factor 1.0). Factors above 1.0 extrapolate away from gray.
/// Channels are clamped to [0, 255] and truncated.
///
/// # Arguments
/// * `img` - Input RGB image
/// * `factor` - Saturation factor, non-negative
///
/// # Returns
/// The adjusted image; a copy of the input when `factor` is 1.0
pub fn enhance_saturation(img: &RgbImage, factor: f32) -> RgbImage {
    if factor == 1.0 {
        return img.clone();
    }

    let (width, height) = img.dimensions();
    let gray = calculate_luma(img);
    let mut output = RgbImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let base = gray.get_pixel(x, y)[0] as f32;
            let color = img.get_pixel(x, y).0;
            let blended = color.map(|channel| {
                let value = base + factor * (channel as f32 - base);
                value.clamp(0.0, 255.0) as u8
            });
            output.put_pixel(x, y, Pixel(blended));
        }
    }

    output
}

/// Per-pixel brightness as the plain sum of the three channels, in [0, 765]
pub fn intensity_field(img: &RgbImage) -> Result<Grid<f32>> {
    let (width, height) = img.dimensions();
    let cells = img
        .pixels()
        .map(|p| p.0.iter().map(|&c| c as u16).sum::<u16>() as f32)
        .collect();

    Grid::new(height as usize, width as usize, cells)
}

/// Copy the pixels of an image into a row-major grid
pub fn pixel_grid(img: &RgbImage) -> Result<Grid<Rgb>> {
    let (width, height) = img.dimensions();
    let cells = img.pixels().map(|p| p.0).collect();

    Grid::new(height as usize, width as usize, cells)
}
