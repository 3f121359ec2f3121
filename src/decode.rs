//! Image decoding - turns an encoded stream into an 8-bit RGBA pixel grid.

use crate::{PicasciiError, Result};
use image::{ImageBuffer, ImageReader, Rgba};
use std::io::{BufRead, Seek};

pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// 16-bit to 8-bit channel scaling factor (65535 / 255).
const CHANNEL_SCALE: u16 = 257;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Quantize a 16-bit RGBA sample down to 8 bits per channel.
    pub fn from_rgba16(channels: [u16; 4]) -> Self {
        let [r, g, b, a] = channels.map(|c| (c / CHANNEL_SCALE) as u8);
        Self { r, g, b, a }
    }
}

/// Row-major grid of pixels, indexed `grid[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    rows: Vec<Vec<Pixel>>,
    width: usize,
}

impl PixelGrid {
    /// Build a grid from rows. All rows must share the same length.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(PicasciiError::Decode("ragged pixel rows".into()));
        }
        Ok(Self { rows, width })
    }

    /// Convert a decoded 16-bit RGBA buffer. Rejects zero-sized images.
    pub fn from_rgba16(image: &Rgba16Image) -> Result<Self> {
        let (w, h) = image.dimensions();
        if w == 0 || h == 0 {
            return Err(PicasciiError::Decode("empty image".into()));
        }

        let rows = (0..h)
            .map(|y| (0..w).map(|x| Pixel::from_rgba16(image.get_pixel(x, y).0)).collect())
            .collect();
        Ok(Self { rows, width: w as usize })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, y: usize, x: usize) -> Option<&Pixel> {
        self.rows.get(y)?.get(x)
    }

    pub fn rows(&self) -> &[Vec<Pixel>] {
        &self.rows
    }
}

/// Decode an encoded image (JPEG, PNG, GIF, ...) into a [`PixelGrid`].
///
/// The format is sniffed from the stream contents, not from a file name.
pub fn decode<R: BufRead + Seek>(reader: R) -> Result<PixelGrid> {
    let image = ImageReader::new(reader)
        .with_guessed_format()
        .map_err(|e| PicasciiError::Decode(e.to_string()))?
        .decode()?;
    log::debug!("decoded {}x{} image ({:?})", image.width(), image.height(), image.color());
    PixelGrid::from_rgba16(&image.to_rgba16())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn encode(image: &RgbaImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        image.write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    #[test]
    fn scales_16_bit_channels() {
        assert_eq!(Pixel::from_rgba16([65535, 0, 257 * 128, 65534]), Pixel::new(255, 0, 128, 254));
    }

    #[test]
    fn decodes_png_row_major() {
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(2, 0, Rgba([10, 20, 30, 255]));
        img.put_pixel(0, 1, Rgba([200, 100, 50, 128]));

        let grid = decode(Cursor::new(encode(&img, ImageFormat::Png))).unwrap();
        assert_eq!((grid.height(), grid.width()), (2, 3));
        assert_eq!(grid.get(0, 2), Some(&Pixel::new(10, 20, 30, 255)));
        assert_eq!(grid.get(1, 0), Some(&Pixel::new(200, 100, 50, 128)));
        assert_eq!(grid.get(0, 0), Some(&Pixel::new(0, 0, 0, 0)));
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn decodes_jpeg() {
        let img = RgbaImage::from_pixel(16, 8, Rgba([255, 255, 255, 255]));
        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img).to_rgb8().write_to(&mut buf, ImageFormat::Jpeg).unwrap();

        let grid = decode(Cursor::new(buf.into_inner())).unwrap();
        assert_eq!((grid.height(), grid.width()), (8, 16));
        let p = grid.get(4, 8).unwrap();
        assert!(p.r > 250 && p.g > 250 && p.b > 250, "{p:?}");
        assert_eq!(p.a, 255);
    }

    #[test]
    fn rejects_empty_stream() {
        let err = decode(Cursor::new(Vec::new())).unwrap_err();
        assert!(matches!(err, PicasciiError::Decode(_)), "{err}");
    }

    #[test]
    fn rejects_garbage_and_truncated() {
        assert!(matches!(decode(Cursor::new(b"not an image".to_vec())), Err(PicasciiError::Decode(_))));

        let img = RgbaImage::from_fn(64, 64, |x, y| Rgba([(x * 7 + y) as u8, (x ^ y) as u8, (y * 13) as u8, 255]));
        let mut bytes = encode(&img, ImageFormat::Png);
        bytes.truncate(bytes.len() / 2);
        assert!(matches!(decode(Cursor::new(bytes)), Err(PicasciiError::Decode(_))));
    }

    #[test]
    fn rejects_zero_sized_buffer() {
        let err = PixelGrid::from_rgba16(&Rgba16Image::new(0, 4)).unwrap_err();
        assert_eq!(err.to_string(), "decode error: empty image");
    }

    #[test]
    fn rejects_ragged_rows() {
        let rows = vec![vec![Pixel::default(); 2], vec![Pixel::default(); 3]];
        assert!(PixelGrid::from_rows(rows).is_err());
    }
}
