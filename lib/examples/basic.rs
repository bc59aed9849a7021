/// Basic example: paint a synthetic test image in both color modes
///
/// This creates a test image with a color gradient and a bright disc, then
/// prints it as 256-color and truecolor text.
use ascii_painter::{ColorMode, LineStyle, PaintConfig, paint_grid, write_cells};
use image::{Rgb, RgbImage};

fn main() -> ascii_painter::Result<()> {
    println!("ASCII Painter - Basic Example");
    println!("=============================\n");

    // Create a 240x120 test image
    let width = 240;
    let height = 120;
    let mut img = RgbImage::new(width, height);

    // Horizontal hue gradient, darker towards the bottom
    for y in 0..height {
        for x in 0..width {
            let fade = 1.0 - y as f32 / height as f32;
            let r = (x as f32 / width as f32 * 255.0 * fade) as u8;
            let g = (128.0 * fade) as u8;
            let b = ((1.0 - x as f32 / width as f32) * 255.0 * fade) as u8;
            img.put_pixel(x, y, Rgb([r, g, b]));
        }
    }

    // Bright disc in the center
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 35.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            if (dx * dx + dy * dy).sqrt() < radius {
                img.put_pixel(x, y, Rgb([255, 240, 200]));
            }
        }
    }

    println!("Created test image: {}x{}\n", width, height);

    let stdout = std::io::stdout();
    for mode in [ColorMode::Indexed256, ColorMode::TrueColor] {
        let config = PaintConfig {
            color_mode: mode,
            gamma: 1.2,
            saturation: 1.3,
            ..Default::default()
        };

        println!("Mode: {:?}", mode);
        let cells = paint_grid(&img, 76, 20, &config)?;
        write_cells(&cells, &mut stdout.lock(), LineStyle::Terminal)
            .expect("Failed to write to stdout");
        println!();
    }

    Ok(())
}
