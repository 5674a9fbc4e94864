//! Conversion entry points.
//!
//! [`convert`] runs the whole pipeline once: resolve, load, write. It is a
//! single synchronous pass; any error aborts the run and nothing is retried.
//! [`inspect`] stops after resolution and only reads image headers, so it is
//! cheap enough to preview a large scan directory.

use crate::bitmap::ColorMode;
use crate::config::ConversionConfig;
use crate::error::Img2PdfError;
use crate::output::{ConversionStats, PageInfo};
use crate::pipeline::{input, load, write};
use image::{ImageDecoder, ImageError, ImageReader};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Combine images from `dir` (or the explicit `image_paths`) into one PDF.
///
/// # Arguments
/// * `dir`: directory to scan; takes precedence over `image_paths`
/// * `image_paths`: explicit files, in page order
/// * `output`: destination PDF; parent directories are created
/// * `config`: conversion configuration
///
/// # Example
/// ```rust,no_run
/// use img2pdf::{convert, ConversionConfig};
/// use std::path::Path;
///
/// let stats = convert(Some(Path::new("scans")), None, Path::new("out/scans.pdf"),
///                     &ConversionConfig::default())?;
/// eprintln!("{} pages, {} bytes", stats.page_count, stats.output_bytes);
/// # Ok::<(), img2pdf::Img2PdfError>(())
/// ```
pub fn convert(
    dir: Option<&Path>,
    image_paths: Option<&[PathBuf]>,
    output: &Path,
    config: &ConversionConfig,
) -> Result<ConversionStats, Img2PdfError> {
    let total_start = Instant::now();

    // ── Step 1: Resolve inputs ───────────────────────────────────────────
    let paths = input::resolve_paths(dir, image_paths)?;
    info!("Resolved {} input images", paths.len());

    let mut stats = convert_images(&paths, output, config)?;
    stats.total_duration_ms = total_start.elapsed().as_millis() as u64;
    info!(
        "Conversion complete: {} pages, {}ms total",
        stats.page_count, stats.total_duration_ms
    );
    Ok(stats)
}

/// Load and write an already resolved, ordered list of images.
///
/// Paths are not re-validated; a missing file surfaces as a decode error.
pub fn convert_images(
    paths: &[PathBuf],
    output: &Path,
    config: &ConversionConfig,
) -> Result<ConversionStats, Img2PdfError> {
    let start = Instant::now();
    config.validate()?;

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_start(paths.len());
    }

    // ── Step 2: Decode + normalise ───────────────────────────────────────
    let load_start = Instant::now();
    let bitmaps = load::load_images(paths, config)?;
    let page_count = bitmaps.len();
    let load_duration_ms = load_start.elapsed().as_millis() as u64;

    // ── Step 3: Assemble + save ──────────────────────────────────────────
    let write_start = Instant::now();
    let output_bytes = write::write_pdf(bitmaps, output, config)?;
    let write_duration_ms = write_start.elapsed().as_millis() as u64;
    debug!(
        "load {}ms, write {}ms",
        load_duration_ms, write_duration_ms
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_complete(page_count, output_bytes);
    }

    Ok(ConversionStats {
        output_path: output.to_path_buf(),
        page_count,
        output_bytes,
        load_duration_ms,
        write_duration_ms,
        total_duration_ms: start.elapsed().as_millis() as u64,
    })
}

/// Resolve the inputs and describe each future page without decoding pixels.
pub fn inspect(
    dir: Option<&Path>,
    image_paths: Option<&[PathBuf]>,
) -> Result<Vec<PageInfo>, Img2PdfError> {
    let paths = input::resolve_paths(dir, image_paths)?;
    paths
        .into_iter()
        .enumerate()
        .map(|(idx, path)| {
            let (width, height, color_mode) = probe(&path)?;
            Ok(PageInfo {
                page_num: idx + 1,
                source: path,
                width,
                height,
                color_mode,
            })
        })
        .collect()
}

/// Read dimensions and colour layout from the image header only.
fn probe(path: &Path) -> Result<(u32, u32, ColorMode), Img2PdfError> {
    let decode_err = |source| Img2PdfError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let decoder = ImageReader::open(path)
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .into_decoder()
        .map_err(decode_err)?;

    let (width, height) = decoder.dimensions();
    Ok((width, height, ColorMode::from(decoder.color_type())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn inspect_reports_native_modes_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        RgbImage::from_pixel(4, 2, Rgb([1, 2, 3]))
            .save(tmp.path().join("b.png"))
            .unwrap();
        GrayImage::from_pixel(3, 3, Luma([9]))
            .save(tmp.path().join("a.png"))
            .unwrap();

        let pages = inspect(Some(tmp.path()), None).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_num, 1);
        assert_eq!(pages[0].source, tmp.path().join("a.png"));
        assert_eq!(pages[0].color_mode, ColorMode::Gray8);
        assert_eq!((pages[1].width, pages[1].height), (4, 2));
        assert_eq!(pages[1].color_mode, ColorMode::Rgb8);
    }

    #[test]
    fn convert_images_reports_stats() {
        let tmp = tempfile::tempdir().unwrap();
        let img = tmp.path().join("one.png");
        RgbImage::from_pixel(6, 6, Rgb([0, 0, 255])).save(&img).unwrap();
        let out = tmp.path().join("o.pdf");

        let stats = convert_images(&[img], &out, &ConversionConfig::default()).unwrap();
        assert_eq!(stats.page_count, 1);
        assert_eq!(stats.output_path, out);
        assert!(stats.output_bytes > 0);
    }

    #[test]
    fn convert_images_rejects_invalid_config_before_decoding() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("o.pdf");
        let config = ConversionConfig {
            resolution: f32::INFINITY,
            ..Default::default()
        };

        // The path does not exist, so reaching the loader would give a decode error.
        let err = convert_images(&[tmp.path().join("missing.png")], &out, &config).unwrap_err();
        assert!(matches!(err, Img2PdfError::InvalidConfig(_)), "got: {err}");
        assert!(!out.exists());
    }
}
