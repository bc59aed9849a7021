//! ASCII Painter - colored character-grid rendering of images for terminals
//!
//! Each output cell gets a glyph chosen from the cell's brightness and a
//! color that is either the cell's full 24-bit color or its nearest entry in
//! the xterm 256-color palette.
//!
//! # Example
//! ```no_run
//! use ascii_painter::{paint, write_cells, LineStyle, PaintConfig, TerminalSize};
//! use image;
//!
//! let input = image::open("photo.jpg").unwrap().to_rgb8();
//! let config = PaintConfig::default();
//! let cells = paint(&input, TerminalSize::default(), &config).unwrap();
//! write_cells(&cells, &mut std::io::stdout(), LineStyle::Terminal).unwrap();
//! ```

pub mod ascii;
pub mod config;
pub mod error;
pub mod filters;
pub mod grid;
pub mod intensity;
pub mod lut;
pub mod palette;
pub mod processor;

// Re-export main types for convenience
pub use ascii::{Cell, ColorSpec, LineStyle, compose_cells, write_cells};
pub use config::{ColorMode, FitAxis, PaintConfig};
pub use error::{PaintError, Result};
pub use grid::Grid;
pub use intensity::IntensityMapper;
pub use lut::GlyphRamp;
pub use palette::{Palette, PaletteEntry, Rgb};
pub use processor::{TerminalSize, output_dimensions, paint, paint_grid};
