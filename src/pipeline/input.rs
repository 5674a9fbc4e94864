//! Input resolution: turn `--dir` or `--path …` into an ordered list of files.
//!
//! The order returned here is the page order of the output PDF. Directory
//! scans are flat (no recursion) and sorted by file name; explicit lists are
//! returned exactly as given, duplicates included.

use crate::error::Img2PdfError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extensions picked up by a directory scan, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["bmp", "gif", "jpeg", "jpg", "png", "tif", "tiff"];

/// Check whether `path` has an extension from [`SUPPORTED_EXTENSIONS`].
pub fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Resolve the ordered input set from a directory or an explicit path list.
///
/// `dir` wins when both are given.
///
/// # Errors
/// [`Img2PdfError::DirectoryNotFound`], [`Img2PdfError::NoSupportedImages`],
/// [`Img2PdfError::ImageNotFound`] or [`Img2PdfError::NoImagesProvided`].
pub fn resolve_paths(
    dir: Option<&Path>,
    image_paths: Option<&[PathBuf]>,
) -> Result<Vec<PathBuf>, Img2PdfError> {
    if let Some(dir) = dir {
        return scan_directory(dir);
    }

    let image_paths = match image_paths {
        Some(p) if !p.is_empty() => p,
        _ => return Err(Img2PdfError::NoImagesProvided),
    };

    let mut paths = Vec::with_capacity(image_paths.len());
    for path in image_paths {
        if !path.is_file() {
            return Err(Img2PdfError::ImageNotFound { path: path.clone() });
        }
        paths.push(path.clone());
    }

    debug!("Resolved {} explicit image paths", paths.len());
    Ok(paths)
}

/// List supported images directly inside `dir`, sorted by file name.
fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>, Img2PdfError> {
    if !dir.is_dir() {
        return Err(Img2PdfError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let unreadable = |source| Img2PdfError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        if path.is_file() && is_supported_extension(&path) {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(Img2PdfError::NoSupportedImages {
            path: dir.to_path_buf(),
        });
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!("Found {} images in {}", paths.len(), dir.display());
    Ok(paths)
}
