//! Image to ASCII art converter.
//!
//! The pipeline is decode -> resample -> glyph mapping -> render, each stage
//! producing a fresh grid for the next one.

pub mod decode;
pub mod glyph;
pub mod render;
pub mod resample;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use decode::{decode, Pixel, PixelGrid};
pub use glyph::{GlyphGrid, GlyphMapper, GlyphRamp};
pub use resample::Resampler;

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PicasciiError {
    #[error("open error: {}: {source}", path.display())]
    Open { path: PathBuf, source: std::io::Error },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("resize error: {0}")]
    Resize(String),
    #[error("output error: {0}")]
    Output(std::io::Error),
}

impl From<image::ImageError> for PicasciiError {
    fn from(err: image::ImageError) -> Self {
        PicasciiError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PicasciiError>;

/// Main converter: resampling parameters plus the glyph ramp.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    resampler: Resampler,
    mapper: GlyphMapper,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.resampler = Resampler::new(width, self.resampler.vertical_correction());
        self
    }

    pub fn with_vertical_correction(mut self, correction: f64) -> Self {
        let width = self.resampler.target_width().unwrap_or(resample::DEFAULT_WIDTH);
        self.resampler = Resampler::new(width, correction);
        self
    }

    /// Map every source pixel to one glyph, skipping resampling.
    pub fn without_resize(mut self) -> Self {
        self.resampler = Resampler::identity();
        self
    }

    pub fn with_ramp(mut self, ramp: GlyphRamp) -> Self {
        self.mapper = GlyphMapper::new(ramp);
        self
    }

    /// Target width, or `None` when resampling is disabled.
    pub fn width(&self) -> Option<usize> {
        self.resampler.target_width()
    }

    pub fn vertical_correction(&self) -> f64 {
        self.resampler.vertical_correction()
    }

    pub fn convert_grid(&self, grid: &PixelGrid) -> Result<GlyphGrid> {
        let resized = self.resampler.resize(grid)?;
        Ok(self.mapper.map(&resized))
    }

    pub fn convert_reader<R: BufRead + Seek>(&self, reader: R) -> Result<GlyphGrid> {
        self.convert_grid(&decode(reader)?)
    }

    /// Convert an in-memory encoded image straight to newline-terminated text.
    pub fn convert_bytes(&self, data: &[u8]) -> Result<String> {
        let glyphs = self.convert_reader(Cursor::new(data))?;
        Ok(render::render_to_string(&glyphs))
    }

    /// Open, decode and convert the image at `path`. The file is closed on return.
    pub fn convert_path(&self, path: impl AsRef<Path>) -> Result<GlyphGrid> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PicasciiError::Open { path: path.to_path_buf(), source })?;
        log::debug!("opened {}", path.display());
        self.convert_reader(BufReader::new(file))
    }
}
