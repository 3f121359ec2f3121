//! Luminance to character mapping.

use crate::decode::{Pixel, PixelGrid};

pub const RAMP_LEN: usize = 10;

const BUCKET_WIDTH: f64 = 256.0 / RAMP_LEN as f64;

/// Ten characters ordered from sparsest (lowest intensity) to densest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRamp([char; RAMP_LEN]);

impl Default for GlyphRamp {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl GlyphRamp {
    pub const STANDARD: GlyphRamp = GlyphRamp([' ', '.', ':', '-', '=', '+', '*', '#', '%', '@']);

    pub const fn new(glyphs: [char; RAMP_LEN]) -> Self {
        Self(glyphs)
    }

    pub fn glyphs(&self) -> &[char; RAMP_LEN] {
        &self.0
    }

    /// Bucket index for an intensity in `[0, 255]`.
    pub fn index_for(intensity: f64) -> usize {
        let index = (intensity / BUCKET_WIDTH).floor();
        if index <= 0.0 {
            // also catches NaN
            0
        } else {
            (index as usize).min(RAMP_LEN - 1)
        }
    }

    pub fn glyph_for(&self, pixel: &Pixel) -> char {
        self.0[Self::index_for(intensity(pixel))]
    }
}

/// Perceptual luma; alpha is ignored.
pub fn intensity(pixel: &Pixel) -> f64 {
    0.299 * pixel.r as f64 + 0.587 * pixel.g as f64 + 0.114 * pixel.b as f64
}

/// Row-major grid of glyphs, one per resampled pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphGrid {
    rows: Vec<Vec<char>>,
}

impl GlyphGrid {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Each row's glyphs concatenated, no separator.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|row| row.iter().collect())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphMapper {
    ramp: GlyphRamp,
}

impl GlyphMapper {
    pub fn new(ramp: GlyphRamp) -> Self {
        Self { ramp }
    }

    pub fn map(&self, grid: &PixelGrid) -> GlyphGrid {
        let map_row = |row: &Vec<Pixel>| -> Vec<char> { row.iter().map(|p| self.ramp.glyph_for(p)).collect() };

        // collect() on an indexed parallel iterator keeps row order
        #[cfg(not(target_arch = "wasm32"))]
        let rows = {
            use rayon::prelude::*;
            grid.rows().par_iter().map(map_row).collect()
        };
        #[cfg(target_arch = "wasm32")]
        let rows = grid.rows().iter().map(map_row).collect();

        GlyphGrid { rows }
    }
}
