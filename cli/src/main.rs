mod args;

use anyhow::{Context, Result};
use args::Args;
use ascii_painter::{Cell, Grid, LineStyle, TerminalSize, paint, write_cells};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

fn main() -> Result<()> {
    // Configure logging
    env_logger::init();

    let args = Args::parse();
    let config = args.paint_config()?;

    let input = image::open(&args.input)
        .with_context(|| format!("Failed to open image {}", args.input.display()))?
        .to_rgb8();

    let terminal = terminal_size();
    let cells = paint(&input, terminal, &config)?;
    log::info!("Painted {}x{} cells", cells.cols(), cells.rows());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_cells(&cells, &mut out, LineStyle::Terminal)?;
    out.flush()?;

    if let Some(path) = &args.output {
        save_output(&cells, path)?;
        log::info!("Saved output to {}", path.display());
    }

    Ok(())
}

/// Current terminal size, or 80x24 when it cannot be queried
fn terminal_size() -> TerminalSize {
    match crossterm::terminal::size() {
        Ok((cols, rows)) if cols > 0 && rows > 0 => TerminalSize { cols, rows },
        Ok(_) => TerminalSize::default(),
        Err(e) => {
            log::warn!("Could not query terminal size ({e}), assuming 80x24");
            TerminalSize::default()
        }
    }
}

/// Write the cells to a file as `$display("...");` lines
fn save_output(cells: &Grid<Cell>, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_cells(cells, &mut writer, LineStyle::Display)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ascii_painter::ColorSpec;

    #[test]
    fn test_save_output_writes_display_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");
        let cells = Grid::from_rows(vec![
            vec![Cell { glyph: '@', color: ColorSpec::Indexed(16) }],
            vec![Cell { glyph: ' ', color: ColorSpec::Indexed(231) }],
        ])
        .unwrap();

        save_output(&cells, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "$display(\"\x1b[38;5;16m@\x1b[0m\");");
        assert!(lines[1].starts_with("$display(\"\x1b[38;5;231m"));
    }

    #[test]
    fn test_save_output_reports_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("output.txt");
        let cell = Cell { glyph: 'x', color: ColorSpec::Indexed(0) };
        let cells = Grid::new(1, 1, vec![cell]).unwrap();
        assert!(save_output(&cells, &path).is_err());
    }
}
