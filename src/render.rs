//! Text output for glyph grids.

use crate::glyph::GlyphGrid;
use crate::{PicasciiError, Result};
use serde::Serialize;
use std::io::Write;

/// Write one newline-terminated line per row, in row order.
pub fn render<W: Write>(grid: &GlyphGrid, mut out: W) -> Result<()> {
    for line in grid.lines() {
        writeln!(out, "{line}").map_err(PicasciiError::Output)?;
    }
    out.flush().map_err(PicasciiError::Output)
}

/// The whole grid as a single string, as [`render`] would write it.
pub fn render_to_string(grid: &GlyphGrid) -> String {
    grid.lines().map(|line| line + "\n").collect()
}

#[derive(Serialize)]
struct JsonArt {
    width: usize,
    height: usize,
    lines: Vec<String>,
}

/// Write the grid as `{"width": .., "height": .., "lines": [..]}` plus a newline.
pub fn render_json<W: Write>(grid: &GlyphGrid, mut out: W) -> Result<()> {
    let art = JsonArt { width: grid.width(), height: grid.height(), lines: grid.lines().collect() };
    serde_json::to_writer(&mut out, &art).map_err(|e| PicasciiError::Output(e.into()))?;
    writeln!(out).map_err(PicasciiError::Output)?;
    out.flush().map_err(PicasciiError::Output)
}
