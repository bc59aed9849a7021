use crate::config::ColorMode;
use crate::error::{PaintError, Result};
use crate::grid::Grid;
use crate::lut::GlyphRamp;
use crate::palette::{Palette, Rgb};
use rayon::prelude::*;
use std::io::{self, Write};

/// SGR sequence that resets all attributes
pub const RESET: &str = "\x1b[0m";

/// Foreground color of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    /// 24-bit color, emitted as `ESC[38;2;R;G;Bm`
    TrueColor(Rgb),
    /// xterm palette index, emitted as `ESC[38;5;Nm`
    Indexed(u8),
}

impl ColorSpec {
    /// SGR escape that selects this color as the foreground
    pub fn escape(&self) -> String {
        match self {
            ColorSpec::TrueColor([r, g, b]) => format!("\x1b[38;2;{r};{g};{b}m"),
            ColorSpec::Indexed(index) => format!("\x1b[38;5;{index}m"),
        }
    }
}

/// One character cell of the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: ColorSpec,
}

/// Line framing used when writing a cell grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// Each row followed by a newline, for printing to a terminal
    #[default]
    Terminal,
    /// Each row wrapped as `$display("...");`, for pasting into a testbench
    Display,
}

/// Pick the color of a single pixel for the given mode
///
/// # Errors
/// Propagates [`PaintError::PaletteLookup`] from the quantizer in indexed mode
pub fn select_color(rgb: Rgb, mode: ColorMode, palette: &Palette) -> Result<ColorSpec> {
    match mode {
        ColorMode::TrueColor => Ok(ColorSpec::TrueColor(rgb)),
        ColorMode::Indexed256 => palette
            .quantize(rgb)
            .map(|(index, _)| ColorSpec::Indexed(index)),
    }
}

/// Combine a pixel grid and a glyph index grid into output cells
///
/// Cells are computed in parallel and reassembled in row-major order.
///
/// # Errors
/// - [`PaintError::ShapeMismatch`] if the two grids differ in shape
/// - [`PaintError::PaletteLookup`] from the quantizer in indexed mode
pub fn compose_cells(
    pixels: &Grid<Rgb>,
    glyphs: &Grid<usize>,
    ramp: &GlyphRamp,
    mode: ColorMode,
    palette: &Palette,
) -> Result<Grid<Cell>> {
    if pixels.rows() != glyphs.rows() || pixels.cols() != glyphs.cols() {
        return Err(PaintError::ShapeMismatch {
            expected: pixels.shape(),
            actual: glyphs.shape(),
        });
    }

    let cells = pixels
        .cells()
        .par_iter()
        .zip(glyphs.cells().par_iter())
        .map(|(&rgb, &index)| -> Result<Cell> {
            Ok(Cell {
                glyph: ramp.glyph(index),
                color: select_color(rgb, mode, palette)?,
            })
        })
        .collect::<Result<Vec<Cell>>>()?;

    Grid::new(pixels.rows(), pixels.cols(), cells)
}

/// Serialize one row of cells; every cell carries its own color and reset
pub fn render_line(row: &[Cell]) -> String {
    let mut line = String::with_capacity(row.len() * 20);
    for cell in row {
        line.push_str(&cell.color.escape());
        line.push(cell.glyph);
        line.push_str(RESET);
    }
    line
}

/// Escape `"` and `\` so a line can sit inside a `$display("...")` string
fn escape_string_literal(line: &str) -> String {
    let mut escaped = String::with_capacity(line.len());
    for c in line.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Write a cell grid to `out` using the given line framing
pub fn write_cells<W: Write>(
    cells: &Grid<Cell>,
    out: &mut W,
    style: LineStyle,
) -> io::Result<()> {
    for row in cells.iter_rows() {
        let line = render_line(row);
        match style {
            LineStyle::Terminal => writeln!(out, "{line}")?,
            LineStyle::Display => {
                writeln!(out, "$display(\"{}\");", escape_string_literal(&line))?
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(glyph: char, color: ColorSpec) -> Cell {
        Cell { glyph, color }
    }

    #[test]
    fn test_escape_sequences() {
        assert_eq!(ColorSpec::TrueColor([13, 173, 214]).escape(), "\x1b[38;2;13;173;214m");
        assert_eq!(ColorSpec::Indexed(38).escape(), "\x1b[38;5;38m");
    }

    #[test]
    fn test_select_color_modes() {
        let palette = Palette::new();
        assert_eq!(
            select_color([13, 173, 214], ColorMode::TrueColor, &palette),
            Ok(ColorSpec::TrueColor([13, 173, 214]))
        );
        assert_eq!(
            select_color([13, 173, 214], ColorMode::Indexed256, &palette),
            Ok(ColorSpec::Indexed(38))
        );
    }

    #[test]
    fn test_compose_cells_preserves_positions() {
        let palette = Palette::new();
        let ramp = GlyphRamp::default();
        let pixels = Grid::from_rows(vec![
            vec![[0, 0, 0], [255, 255, 255]],
            vec![[255, 0, 0], [13, 173, 214]],
        ])
        .unwrap();
        let glyphs = Grid::from_rows(vec![vec![23, 0], vec![1, 22]]).unwrap();

        let cells =
            compose_cells(&pixels, &glyphs, &ramp, ColorMode::Indexed256, &palette).unwrap();

        assert_eq!(cells.get(0, 0), Some(&cell('@', ColorSpec::Indexed(16))));
        assert_eq!(cells.get(0, 1), Some(&cell(' ', ColorSpec::Indexed(231))));
        assert_eq!(cells.get(1, 0), Some(&cell('.', ColorSpec::Indexed(196))));
        assert_eq!(cells.get(1, 1), Some(&cell('&', ColorSpec::Indexed(38))));
    }

    #[test]
    fn test_compose_cells_large_grid_order() {
        let palette = Palette::new();
        let ramp = GlyphRamp::default();
        let (rows, cols) = (37, 53);
        let pixels = Grid::new(
            rows,
            cols,
            (0..rows * cols).map(|i| [(i % 256) as u8, 0, 0]).collect(),
        )
        .unwrap();
        let glyphs = Grid::new(rows, cols, (0..rows * cols).map(|i| i % 24).collect()).unwrap();

        let cells =
            compose_cells(&pixels, &glyphs, &ramp, ColorMode::TrueColor, &palette).unwrap();

        for (i, c) in cells.cells().iter().enumerate() {
            assert_eq!(c.glyph, ramp.glyph(i % 24));
            assert_eq!(c.color, ColorSpec::TrueColor([(i % 256) as u8, 0, 0]));
        }
    }

    #[test]
    fn test_compose_cells_shape_mismatch() {
        let palette = Palette::new();
        let pixels = Grid::new(1, 2, vec![[0, 0, 0]; 2]).unwrap();
        let glyphs = Grid::new(2, 1, vec![0; 2]).unwrap();
        let result = compose_cells(
            &pixels,
            &glyphs,
            &GlyphRamp::default(),
            ColorMode::TrueColor,
            &palette,
        );
        assert!(matches!(result, Err(PaintError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_render_line() {
        let row = [
            cell('@', ColorSpec::Indexed(16)),
            cell('.', ColorSpec::TrueColor([1, 2, 3])),
        ];
        assert_eq!(
            render_line(&row),
            "\x1b[38;5;16m@\x1b[0m\x1b[38;2;1;2;3m.\x1b[0m"
        );
    }

    #[test]
    fn test_write_cells_styles() {
        let cells = Grid::from_rows(vec![
            vec![cell('#', ColorSpec::Indexed(1))],
            vec![cell(' ', ColorSpec::Indexed(2))],
        ])
        .unwrap();

        let mut terminal = Vec::new();
        write_cells(&cells, &mut terminal, LineStyle::Terminal).unwrap();
        assert_eq!(
            String::from_utf8(terminal).unwrap(),
            "\x1b[38;5;1m#\x1b[0m\n\x1b[38;5;2m \x1b[0m\n"
        );

        let mut display = Vec::new();
        write_cells(&cells, &mut display, LineStyle::Display).unwrap();
        assert_eq!(
            String::from_utf8(display).unwrap(),
            "$display(\"\x1b[38;5;1m#\x1b[0m\");\n$display(\"\x1b[38;5;2m \x1b[0m\");\n"
        );
    }

    #[test]
    fn test_write_cells_terminal_one_line_per_row() {
        let cells = Grid::new(3, 2, vec![cell('x', ColorSpec::Indexed(0)); 6]).unwrap();
        let mut out = Vec::new();
        write_cells(&cells, &mut out, LineStyle::Terminal).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().all(|l| l.matches('x').count() == 2));
    }

    #[test]
    fn test_display_style_escapes_quotes_and_backslashes() {
        let cells = Grid::from_rows(vec![vec![
            cell('"', ColorSpec::Indexed(1)),
            cell('\\', ColorSpec::Indexed(2)),
        ]])
        .unwrap();

        let mut display = Vec::new();
        write_cells(&cells, &mut display, LineStyle::Display).unwrap();
        assert_eq!(
            String::from_utf8(display).unwrap(),
            "$display(\"\x1b[38;5;1m\\\"\x1b[0m\x1b[38;5;2m\\\\\x1b[0m\");\n"
        );

        // Terminal output is written verbatim
        let mut terminal = Vec::new();
        write_cells(&cells, &mut terminal, LineStyle::Terminal).unwrap();
        assert_eq!(
            String::from_utf8(terminal).unwrap(),
            "\x1b[38;5;1m\"\x1b[0m\x1b[38;5;2m\\\x1b[0m\n"
        );
    }
}
