//! Nearest-neighbor resampling to a fixed character-grid width.

use crate::decode::{Pixel, PixelGrid};
use crate::{PicasciiError, Result};

pub const DEFAULT_WIDTH: usize = 60;
// Terminal cells are roughly twice as tall as they are wide
pub const DEFAULT_VERTICAL_CORRECTION: f64 = 0.5;
/// Upper bound on output cells (rows * cols).
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resampler {
    target_width: Option<usize>,
    vertical_correction: f64,
}

impl Default for Resampler {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_VERTICAL_CORRECTION)
    }
}

impl Resampler {
    pub fn new(target_width: usize, vertical_correction: f64) -> Self {
        Self { target_width: Some(target_width), vertical_correction }
    }

    /// Keeps every source pixel; [`Resampler::resize`] returns a copy.
    pub fn identity() -> Self {
        Self { target_width: None, vertical_correction: 1.0 }
    }

    pub fn target_width(&self) -> Option<usize> {
        self.target_width
    }

    pub fn vertical_correction(&self) -> f64 {
        self.vertical_correction
    }

    /// Output dimensions `(rows, cols)` for a `height` × `width` source.
    ///
    /// `rows = floor(height * (target_width / width) * vertical_correction)`.
    /// A result with zero rows or columns is a resize error.
    pub fn target_dims(&self, height: usize, width: usize) -> Result<(usize, usize)> {
        if height == 0 || width == 0 {
            return Err(PicasciiError::Resize(format!("empty source grid {height}x{width}")));
        }
        let Some(target_width) = self.target_width else {
            return Ok((height, width));
        };
        if target_width == 0 {
            return Err(PicasciiError::Resize("target width must be positive".into()));
        }
        if target_width > MAX_CELLS {
            return Err(PicasciiError::Resize(format!("target width {target_width} exceeds {MAX_CELLS}")));
        }
        if !self.vertical_correction.is_finite() || self.vertical_correction <= 0.0 {
            return Err(PicasciiError::Resize(format!(
                "vertical correction must be positive, got {}",
                self.vertical_correction
            )));
        }

        let scale = target_width as f64 / width as f64;
        let rows = (height as f64 * scale * self.vertical_correction).floor();
        if rows < 1.0 {
            return Err(PicasciiError::Resize(format!(
                "{height}x{width} image collapses to zero rows at width {target_width}"
            )));
        }
        // rows is bounded by MAX_CELLS before the cast
        if rows * target_width as f64 > MAX_CELLS as f64 {
            return Err(PicasciiError::Resize(format!(
                "{rows}x{target_width} output exceeds {MAX_CELLS} cells"
            )));
        }
        Ok((rows as usize, target_width))
    }

    pub fn resize(&self, source: &PixelGrid) -> Result<PixelGrid> {
        let (src_h, src_w) = (source.height(), source.width());
        let (out_h, out_w) = self.target_dims(src_h, src_w)?;
        log::debug!("resampling {src_h}x{src_w} -> {out_h}x{out_w}");

        let rows = source.rows();
        let resized: Vec<Vec<Pixel>> = (0..out_h)
            .map(|i| {
                let sy = nearest(i, src_h, out_h);
                log::trace!("row {i} <- source row {sy}");
                (0..out_w).map(|j| rows[sy][nearest(j, src_w, out_w)]).collect()
            })
            .collect();
        PixelGrid::from_rows(resized)
    }
}

/// Source index for target index `i` when mapping `src` cells onto `dst`,
/// clamped against float rounding.
fn nearest(i: usize, src: usize, dst: usize) -> usize {
    let s = (i as f64 * src as f64 / dst as f64) as usize;
    s.min(src - 1)
}
