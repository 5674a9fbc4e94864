//! Decoded bitmaps and the colour modes they come from.
//!
//! Whatever the decoder hands back (`DynamicImage` has ten pixel layouts),
//! the loader flattens it into one concrete [`Bitmap`] holding 8-bit RGB.
//! Downstream code only sees the [`Raster`] view, so the writer never has
//! to care which container or layout an image started in.

use image::{ColorType, RgbImage};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Pixel layout of an image, as reported by its decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    Gray8,
    GrayAlpha8,
    Rgb8,
    Rgba8,
    Gray16,
    GrayAlpha16,
    Rgb16,
    Rgba16,
    Rgb32F,
    Rgba32F,
    /// A layout added to `image` after this crate was written.
    Other,
}

impl ColorMode {
    /// The mode every bitmap is normalised to before PDF assembly.
    pub const CANONICAL: ColorMode = ColorMode::Rgb8;

    pub fn has_alpha(self) -> bool {
        matches!(
            self,
            ColorMode::GrayAlpha8
                | ColorMode::Rgba8
                | ColorMode::GrayAlpha16
                | ColorMode::Rgba16
                | ColorMode::Rgba32F
        )
    }

    pub fn is_canonical(self) -> bool {
        self == Self::CANONICAL
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Gray8 => "gray8",
            ColorMode::GrayAlpha8 => "gray_alpha8",
            ColorMode::Rgb8 => "rgb8",
            ColorMode::Rgba8 => "rgba8",
            ColorMode::Gray16 => "gray16",
            ColorMode::GrayAlpha16 => "gray_alpha16",
            ColorMode::Rgb16 => "rgb16",
            ColorMode::Rgba16 => "rgba16",
            ColorMode::Rgb32F => "rgb32_f",
            ColorMode::Rgba32F => "rgba32_f",
            ColorMode::Other => "other",
        }
    }
}

impl From<ColorType> for ColorMode {
    fn from(ct: ColorType) -> Self {
        match ct {
            ColorType::L8 => ColorMode::Gray8,
            ColorType::La8 => ColorMode::GrayAlpha8,
            ColorType::Rgb8 => ColorMode::Rgb8,
            ColorType::Rgba8 => ColorMode::Rgba8,
            ColorType::L16 => ColorMode::Gray16,
            ColorType::La16 => ColorMode::GrayAlpha16,
            ColorType::Rgb16 => ColorMode::Rgb16,
            ColorType::Rgba16 => ColorMode::Rgba16,
            ColorType::Rgb32F => ColorMode::Rgb32F,
            ColorType::Rgba32F => ColorMode::Rgba32F,
            _ => ColorMode::Other,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read access to a decoded image: mode, size and packed pixel bytes.
pub trait Raster {
    fn color_mode(&self) -> ColorMode;

    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Row-major interleaved samples, `width × height × channels` bytes.
    fn pixels(&self) -> &[u8];

    /// Give up the sample buffer without copying it.
    fn into_pixels(self) -> Vec<u8>
    where
        Self: Sized;
}

/// A fully decoded input image, normalised to 8-bit RGB.
#[derive(Debug, Clone)]
pub struct Bitmap {
    source: PathBuf,
    native_mode: ColorMode,
    pixels: RgbImage,
}

impl Bitmap {
    pub fn new(source: impl Into<PathBuf>, native_mode: ColorMode, pixels: RgbImage) -> Self {
        Self {
            source: source.into(),
            native_mode,
            pixels,
        }
    }

    /// File the bitmap was decoded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Mode the decoder produced before normalisation.
    pub fn native_mode(&self) -> ColorMode {
        self.native_mode
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.pixels
    }
}

impl Raster for Bitmap {
    fn color_mode(&self) -> ColorMode {
        ColorMode::CANONICAL
    }

    fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    fn pixels(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    fn into_pixels(self) -> Vec<u8> {
        self.pixels.into_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn color_type_mapping() {
        assert_eq!(ColorMode::from(ColorType::L8), ColorMode::Gray8);
        assert_eq!(ColorMode::from(ColorType::Rgba16), ColorMode::Rgba16);
        assert!(ColorMode::from(ColorType::Rgb8).is_canonical());
        assert!(!ColorMode::from(ColorType::Rgb16).is_canonical());
    }

    #[test]
    fn alpha_detection() {
        assert!(ColorMode::GrayAlpha8.has_alpha());
        assert!(ColorMode::Rgba32F.has_alpha());
        assert!(!ColorMode::Gray16.has_alpha());
        assert!(!ColorMode::Rgb8.has_alpha());
    }

    #[test]
    fn bitmap_reports_canonical_mode_and_raw_pixels() {
        let img = RgbImage::from_pixel(3, 2, Rgb([1, 2, 3]));
        let bmp = Bitmap::new("a.png", ColorMode::Gray8, img);
        assert_eq!(bmp.color_mode(), ColorMode::Rgb8);
        assert_eq!(bmp.native_mode(), ColorMode::Gray8);
        assert_eq!(bmp.dimensions(), (3, 2));
        assert_eq!(bmp.clone().into_pixels(), bmp.pixels());
        assert_eq!(bmp.pixels().len(), 3 * 2 * 3);
        assert_eq!(&bmp.pixels()[..3], &[1, 2, 3]);
        assert_eq!(bmp.source(), Path::new("a.png"));
    }

    #[test]
    fn color_mode_serialises_snake_case() {
        let json = serde_json::to_string(&ColorMode::GrayAlpha8).unwrap();
        assert_eq!(json, "\"gray_alpha8\"");
    }
}
