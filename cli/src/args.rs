//! Command-line arguments

use ascii_painter::{ColorMode, FitAxis, GlyphRamp, PaintConfig};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Transforms an image into ASCII style colored text on your terminal
#[derive(Parser, Debug)]
#[command(name = "ascii-painter")]
#[command(version, about, long_about = None)]
#[command(after_help = "Only the input image is mandatory.")]
pub struct Args {
    /// Path to the input image
    #[arg(short, long)]
    pub input: PathBuf,

    /// Also write the output to this file, one `$display("...");` per line
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Color palette: xterm 256 colors, or 24-bit RGB if your terminal supports truecolor
    #[arg(short, long, default_value = "256")]
    pub mode: Mode,

    /// Glyph level correction exponent; above 1.0 favors lighter glyphs
    #[arg(short, long, default_value_t = 1.0, value_name = "FLOAT")]
    pub ascii: f32,

    /// Color saturation factor; 0.0 is grayscale, 1.0 leaves colors unchanged
    #[arg(short, long, default_value_t = 1.0, value_name = "FLOAT")]
    pub color: f32,

    /// Fit the output to the terminal height (h) or width (w)
    #[arg(long, default_value = "h")]
    pub auto: Fit,

    /// Rescale the output by this factor
    #[arg(short, long, default_value_t = 1.0, value_name = "FLOAT")]
    pub scale: f32,

    /// Height/width ratio of a character cell
    #[arg(short, long, default_value_t = 1.9, value_name = "FLOAT")]
    pub pixel: f32,

    /// Custom glyph ramp of exactly 24 characters, lightest first
    #[arg(long, value_name = "GLYPHS")]
    pub ramp: Option<String>,
}

/// Output color mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    #[default]
    #[value(name = "256")]
    Indexed,
    #[value(name = "rgb", alias = "RGB")]
    Rgb,
}

impl From<Mode> for ColorMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Indexed => ColorMode::Indexed256,
            Mode::Rgb => ColorMode::TrueColor,
        }
    }
}

/// Terminal axis to fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Fit {
    #[default]
    H,
    W,
}

impl From<Fit> for FitAxis {
    fn from(f: Fit) -> Self {
        match f {
            Fit::H => FitAxis::Height,
            Fit::W => FitAxis::Width,
        }
    }
}

impl Args {
    /// Build the painting configuration described by the arguments
    pub fn paint_config(&self) -> ascii_painter::Result<PaintConfig> {
        let ramp = match &self.ramp {
            Some(glyphs) => GlyphRamp::parse(glyphs)?,
            None => GlyphRamp::default(),
        };

        let config = PaintConfig {
            gamma: self.ascii,
            ramp,
            color_mode: self.mode.into(),
            saturation: self.color,
            scale: self.scale,
            pixel_ratio: self.pixel,
            fit: self.auto.into(),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["ascii-painter", "-i", "photo.png"]);
        assert_eq!(args.input, PathBuf::from("photo.png"));
        assert!(args.output.is_none());
        assert_eq!(args.mode, Mode::Indexed);
        assert_eq!(args.ascii, 1.0);
        assert_eq!(args.color, 1.0);
        assert_eq!(args.auto, Fit::H);
        assert_eq!(args.scale, 1.0);
        assert_eq!(args.pixel, 1.9);
        assert!(args.ramp.is_none());
    }

    #[test]
    fn test_args_input_is_required() {
        assert!(Args::try_parse_from(["ascii-painter"]).is_err());
    }

    #[test]
    fn test_args_mode_values() {
        let args = Args::parse_from(["ascii-painter", "-i", "a.png", "-m", "rgb"]);
        assert_eq!(args.mode, Mode::Rgb);

        let args = Args::parse_from(["ascii-painter", "-i", "a.png", "--mode", "RGB"]);
        assert_eq!(args.mode, Mode::Rgb);

        let args = Args::parse_from(["ascii-painter", "-i", "a.png", "--mode", "256"]);
        assert_eq!(args.mode, Mode::Indexed);

        assert!(Args::try_parse_from(["ascii-painter", "-i", "a.png", "-m", "16"]).is_err());
    }

    #[test]
    fn test_args_numeric_options() {
        let args = Args::parse_from([
            "ascii-painter", "-i", "a.png", "-a", "2.2", "-c", "1.5", "-s", "0.5", "-p", "2.0",
            "--auto", "w",
        ]);
        assert_eq!(args.ascii, 2.2);
        assert_eq!(args.color, 1.5);
        assert_eq!(args.scale, 0.5);
        assert_eq!(args.pixel, 2.0);
        assert_eq!(args.auto, Fit::W);
    }

    #[test]
    fn test_paint_config_mapping() {
        let args = Args::parse_from(["ascii-painter", "-i", "a.png", "-m", "rgb", "--auto", "w"]);
        let config = args.paint_config().unwrap();
        assert_eq!(config.color_mode, ColorMode::TrueColor);
        assert_eq!(config.fit, FitAxis::Width);
        assert_eq!(config.ramp, GlyphRamp::default());
    }

    #[test]
    fn test_paint_config_rejects_bad_values() {
        let args = Args::parse_from(["ascii-painter", "-i", "a.png", "-a", "0"]);
        assert!(args.paint_config().is_err());

        let args = Args::parse_from(["ascii-painter", "-i", "a.png", "--ramp", "short"]);
        assert!(args.paint_config().is_err());
    }
}
