//! Image loading: decode every resolved path into an RGB [`Bitmap`].
//!
//! Decoding is eager. By the time [`load_images`] returns, every page is
//! resident in memory, which is what lets the writer emit the whole PDF in
//! a single pass.
//!
//! ## Transparency
//!
//! PDF image XObjects carry no alpha here, so transparent pixels are
//! composited onto opaque white: `out = c·a + 255·(1 − a)`. A fully
//! transparent pixel therefore becomes white regardless of its stored colour,
//! which matches how the image would look printed on paper.

use crate::bitmap::{Bitmap, ColorMode};
use crate::config::ConversionConfig;
use crate::error::Img2PdfError;
use image::{DynamicImage, ImageError, ImageReader, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Decode all `paths` in order, notifying the configured progress callback.
///
/// # Errors
/// Stops at the first file that cannot be decoded and returns
/// [`Img2PdfError::Decode`] for it.
pub fn load_images(
    paths: &[PathBuf],
    config: &ConversionConfig,
) -> Result<Vec<Bitmap>, Img2PdfError> {
    let total = paths.len();
    let mut bitmaps = Vec::with_capacity(total);

    for (idx, path) in paths.iter().enumerate() {
        let page_num = idx + 1;
        if let Some(ref cb) = config.progress_callback {
            cb.on_page_start(page_num, total);
        }

        match load_image(path) {
            Ok(bitmap) => {
                if let Some(ref cb) = config.progress_callback {
                    cb.on_page_complete(page_num, total, bitmap.as_rgb().dimensions());
                }
                bitmaps.push(bitmap);
            }
            Err(e) => {
                if let Some(ref cb) = config.progress_callback {
                    cb.on_page_error(page_num, total, &e.to_string());
                }
                return Err(e);
            }
        }
    }

    info!("Loaded {} images", bitmaps.len());
    Ok(bitmaps)
}

/// Decode a single file and normalise it to 8-bit RGB.
///
/// The container format is sniffed from the file content, so a PNG saved
/// as `scan.dat` still loads.
pub fn load_image(path: &Path) -> Result<Bitmap, Img2PdfError> {
    let decode_err = |source| Img2PdfError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;

    let native_mode = ColorMode::from(image.color());
    let pixels = to_canonical(image);
    debug!(
        "Decoded {} ({}, {}x{} px)",
        path.display(),
        native_mode,
        pixels.width(),
        pixels.height()
    );

    Ok(Bitmap::new(path, native_mode, pixels))
}

/// Convert any decoded layout to 8-bit RGB without an alpha channel.
pub fn to_canonical(image: DynamicImage) -> RgbImage {
    match image {
        DynamicImage::ImageRgb8(rgb) => rgb,
        img if img.color().has_alpha() => flatten_onto_white(&img.to_rgba8()),
        img => img.to_rgb8(),
    }
}

fn flatten_onto_white(rgba: &RgbaImage) -> RgbImage {
    let (width, height) = rgba.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        let Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
        let a = u32::from(a);
        let blend = |c: u8| ((u32::from(c) * a + 255 * (255 - a) + 127) / 255) as u8;
        Rgb([blend(r), blend(g), blend(b)])
    })
}
