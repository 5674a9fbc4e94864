//! PDF assembly: one page per bitmap, written with lopdf.
//!
//! Each page is an 8-bit `DeviceRGB` image XObject drawn to fill the whole
//! MediaBox. The page size is derived from the pixel size and the configured
//! nominal resolution, so at 100 dpi a 850 × 1100 px scan becomes a
//! 612 × 792 pt (US Letter) page.
//!
//! The file is written in place. There is no temp-file/rename step, so a
//! failure part-way through can leave a truncated PDF behind.

use crate::bitmap::{ColorMode, Raster};
use crate::config::ConversionConfig;
use crate::error::Img2PdfError;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// PDF version written to the header.
const PDF_VERSION: &str = "1.5";

/// Resource name the page content uses to reference its image.
const IMAGE_RESOURCE: &str = "Im0";

/// Samples per pixel in a `DeviceRGB` image.
const RGB_CHANNELS: usize = 3;

/// Write `images` as a multi-page PDF at `output`, returning its size in bytes.
///
/// The rasters are consumed so their sample buffers move into the page
/// streams. Creates any missing parent directories first.
///
/// # Errors
/// [`Img2PdfError::InvalidConfig`] when `config` fails validation,
/// [`Img2PdfError::NoImagesProvided`] for an empty vector,
/// [`Img2PdfError::InvalidRaster`] for a raster that is not packed 8-bit RGB,
/// [`Img2PdfError::OutputWriteFailed`] for I/O failures and
/// [`Img2PdfError::PdfWriteFailed`] when lopdf cannot encode the document.
/// Nothing is created on disk unless the document builds.
pub fn write_pdf<R: Raster>(
    images: Vec<R>,
    output: &Path,
    config: &ConversionConfig,
) -> Result<u64, Img2PdfError> {
    config.validate()?;
    if images.is_empty() {
        return Err(Img2PdfError::NoImagesProvided);
    }

    let page_count = images.len();
    let mut doc = build_document(images, output, config)?;

    let write_err = |source| Img2PdfError::OutputWriteFailed {
        path: output.to_path_buf(),
        source,
    };

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let mut writer = BufWriter::new(File::create(output).map_err(write_err)?);
    doc.save_to(&mut writer)
        .map_err(|e| Img2PdfError::PdfWriteFailed {
            path: output.to_path_buf(),
            detail: e.to_string(),
        })?;
    writer.flush().map_err(write_err)?;
    drop(writer);

    let bytes = std::fs::metadata(output).map_err(write_err)?.len();
    info!(
        "Wrote {} pages to {} ({} bytes)",
        page_count,
        output.display(),
        bytes
    );
    Ok(bytes)
}

/// Build the in-memory document: page tree, one image + content stream per page.
pub fn build_document<R: Raster>(
    images: Vec<R>,
    output: &Path,
    config: &ConversionConfig,
) -> Result<Document, Img2PdfError> {
    let mut doc = Document::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();

    let page_count = images.len();
    let mut kids: Vec<Object> = Vec::with_capacity(page_count);
    for (idx, image) in images.into_iter().enumerate() {
        let page_id = add_page(&mut doc, pages_id, idx + 1, image, output, config)?;
        debug!("Added page {} as object {:?}", idx + 1, page_id);
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut info = dictionary! {
        "Producer" => Object::string_literal(concat!("img2pdf ", env!("CARGO_PKG_VERSION"))),
    };
    if let Some(ref title) = config.title {
        info.set("Title", Object::string_literal(title.as_str()));
    }
    if let Some(ref creator) = config.creator {
        info.set("Creator", Object::string_literal(creator.as_str()));
    }
    let info_id = doc.add_object(info);
    doc.trailer.set("Info", info_id);

    if config.compress {
        doc.compress();
    }

    Ok(doc)
}

fn add_page<R: Raster>(
    doc: &mut Document,
    pages_id: ObjectId,
    page: usize,
    image: R,
    output: &Path,
    config: &ConversionConfig,
) -> Result<ObjectId, Img2PdfError> {
    let (width, height) = image.dimensions();
    let mode = image.color_mode();
    if !mode.is_canonical() {
        return Err(Img2PdfError::InvalidRaster {
            page,
            detail: format!("colour mode is {mode}, expected {}", ColorMode::CANONICAL),
        });
    }

    let expected = width as usize * height as usize * RGB_CHANNELS;
    let samples = image.into_pixels();
    if samples.len() != expected {
        return Err(Img2PdfError::InvalidRaster {
            page,
            detail: format!(
                "{width}x{height} needs {expected} bytes, got {}",
                samples.len()
            ),
        });
    }

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(width),
            "Height" => i64::from(height),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        samples,
    ));

    let page_width = config.pixels_to_points(width);
    let page_height = config.pixels_to_points(height);

    // Scale the unit-square image space up to the full page.
    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    page_width.into(),
                    0.into(),
                    0.into(),
                    page_height.into(),
                    0.into(),
                    0.into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(IMAGE_RESOURCE.as_bytes().to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let encoded = content.encode().map_err(|e| Img2PdfError::PdfWriteFailed {
        path: output.to_path_buf(),
        detail: e.to_string(),
    })?;
    let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
        "Contents" => content_id,
        "Resources" => dictionary! {
            "XObject" => dictionary! {
                IMAGE_RESOURCE => image_id,
            },
        },
    }))
}
